use axum::extract::Request;
use axum::middleware::Next;
use axum::response::Response;
use memberpoint_core::{AppError, NonEmptyString};

use crate::error::ApiResult;

/// Header carrying the caller's user identifier.
pub const USER_ID_HEADER: &str = "x-user-id";

/// Resolves the caller from the identity header and stores it as a request extension.
///
/// The identifier is trusted as supplied and may be any non-blank UTF-8
/// text. A missing, blank or non-UTF-8 header is a validation failure.
pub async fn require_user_id(mut request: Request, next: Next) -> ApiResult<Response> {
    let header_value = request
        .headers()
        .get(USER_ID_HEADER)
        .ok_or_else(|| AppError::Validation(format!("{USER_ID_HEADER} header is required")))?;
    // Raw UTF-8 is accepted, not only visible ASCII.
    let header_value = std::str::from_utf8(header_value.as_bytes()).map_err(|error| {
        AppError::Validation(format!("{USER_ID_HEADER} header is not valid UTF-8: {error}"))
    })?;

    let user_id = NonEmptyString::new(header_value).map_err(|_| {
        AppError::Validation(format!("{USER_ID_HEADER} header must not be blank"))
    })?;

    request.extensions_mut().insert(user_id);
    Ok(next.run(request).await)
}
