use std::future::{ready, Ready};

use actix_web::{dev::Payload, FromRequest, HttpRequest};

use crate::core::AppError;

/// Header carrying the authenticated caller, set by the gateway in front of
/// this service
pub const USER_ID_HEADER: &str = "X-User-Id";

/// Authenticated caller identity
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct UserId(pub i64);

impl FromRequest for UserId {
    type Error = AppError;
    type Future = Ready<Result<Self, Self::Error>>;

    fn from_request(req: &HttpRequest, _payload: &mut Payload) -> Self::Future {
        ready(extract_user_id(req))
    }
}

fn extract_user_id(req: &HttpRequest) -> Result<UserId, AppError> {
    let raw = req
        .headers()
        .get(USER_ID_HEADER)
        .and_then(|h| h.to_str().ok())
        .ok_or_else(|| AppError::unauthorized(format!("Missing {} header", USER_ID_HEADER)))?;

    let id: i64 = raw
        .trim()
        .parse()
        .map_err(|_| AppError::unauthorized(format!("Invalid {} header", USER_ID_HEADER)))?;

    if id <= 0 {
        return Err(AppError::unauthorized(format!(
            "Invalid {} header",
            USER_ID_HEADER
        )));
    }

    Ok(UserId(id))
}
