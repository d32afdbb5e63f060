use axum::Json;
use axum::extract::{Extension, State};
use axum::http::StatusCode;
use memberpoint_core::NonEmptyString;
use memberpoint_domain::{AccumulationAmount, MembershipId};

use crate::dto::{
    AccumulateMembershipRequest, MembershipDetailQuery, MembershipDetailResponse,
    MembershipRegistrationResponse, RegisterMembershipRequest,
};
use crate::error::ApiResult;
use crate::extract::{ApiJson, ApiPath, ApiQuery};
use crate::state::AppState;


pub async fn register_membership_handler(
    State(state): State<AppState>,
    Extension(user_id): Extension<NonEmptyString>,
    ApiJson(payload): ApiJson<RegisterMembershipRequest>,
) -> ApiResult<(StatusCode, Json<MembershipRegistrationResponse>)> {
    let registration = state
        .membership_service
        .add_membership(&user_id, payload.kind, payload.point)
        .await?;

    Ok((
        StatusCode::CREATED,
        Json(MembershipRegistrationResponse::from(registration)),
    ))
}

pub async fn membership_detail_handler(
    State(state): State<AppState>,
    Extension(user_id): Extension<NonEmptyString>,
    ApiQuery(query): ApiQuery<MembershipDetailQuery>,
) -> ApiResult<Json<MembershipDetailResponse>> {
    let membership = state
        .membership_service
        .get_membership_detail(&user_id, query.kind_type)
        .await?;

    Ok(Json(MembershipDetailResponse::from(membership)))
}

pub async fn list_memberships_handler(
    State(state): State<AppState>,
    Extension(user_id): Extension<NonEmptyString>,
) -> ApiResult<Json<Vec<MembershipDetailResponse>>> {
    let memberships = state
        .membership_service
        .get_membership_list(&user_id)
        .await?
        .into_iter()
        .map(MembershipDetailResponse::from)
        .collect();

    Ok(Json(memberships))
}

pub async fn remove_membership_handler(
    State(state): State<AppState>,
    Extension(user_id): Extension<NonEmptyString>,
    ApiPath(membership_id): ApiPath<i64>,
) -> ApiResult<StatusCode> {
    state
        .membership_service
        .remove_membership(&user_id, MembershipId::new(membership_id))
        .await?;

    Ok(StatusCode::NO_CONTENT)
}

pub async fn accumulate_membership_point_handler(
    State(state): State<AppState>,
    Extension(user_id): Extension<NonEmptyString>,
    ApiPath(membership_id): ApiPath<i64>,
    ApiJson(payload): ApiJson<AccumulateMembershipRequest>,
) -> ApiResult<StatusCode> {
    let amount = AccumulationAmount::new(payload.point)?;

    state
        .membership_service
        .accumulate_membership_point(&user_id, MembershipId::new(membership_id), amount)
        .await?;

    Ok(StatusCode::NO_CONTENT)
}
