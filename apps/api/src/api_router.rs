use axum::Router;
use axum::http::header::CONTENT_TYPE;
use axum::http::{HeaderName, HeaderValue, Method};
use axum::middleware::from_fn;
use axum::routing::{delete, get, post};
use memberpoint_core::AppError;
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;

use crate::handlers;
use crate::middleware::{self, USER_ID_HEADER};
use crate::state::AppState;

pub fn build_router(
    app_state: AppState,
    cors_allowed_origin: Option<&str>,
) -> Result<Router, AppError> {
    let membership_routes = Router::new()
        .route(
            "/api/v1/membership",
            get(handlers::membership::membership_detail_handler)
                .post(handlers::membership::register_membership_handler),
        )
        .route(
            "/api/v1/membership/list",
            get(handlers::membership::list_memberships_handler),
        )
        .route(
            "/api/v1/membership/{membership_id}",
            delete(handlers::membership::remove_membership_handler),
        )
        .route(
            "/api/v1/membership/{membership_id}/accumulate",
            post(handlers::membership::accumulate_membership_point_handler),
        )
        .route_layer(from_fn(middleware::require_user_id));

    let mut app = Router::new()
        .route("/health", get(handlers::health::health_handler))
        .merge(membership_routes)
        .layer(TraceLayer::new_for_http());

    if let Some(origin) = cors_allowed_origin {
        app = app.layer(cors_layer(origin)?);
    }

    Ok(app.with_state(app_state))
}

fn cors_layer(origin: &str) -> Result<CorsLayer, AppError> {
    let allowed_origin = HeaderValue::from_str(origin)
        .map_err(|error| AppError::Validation(format!("invalid CORS_ALLOWED_ORIGIN: {error}")))?;

    Ok(CorsLayer::new()
        .allow_origin(allowed_origin)
        .allow_methods([Method::GET, Method::POST, Method::DELETE, Method::OPTIONS])
        .allow_headers([CONTENT_TYPE, HeaderName::from_static(USER_ID_HEADER)]))
}
