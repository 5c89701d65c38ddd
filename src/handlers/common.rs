//! Shared handler plumbing: response envelope and extractors whose
//! rejections use the application error body

use axum::{
    extract::{FromRequest, FromRequestParts},
    Json,
};
use serde::Serialize;
use validator::Validate;

use crate::error::{AppError, AppResult};

/// Success envelope: `{"status":"success","data":...}`
#[derive(Debug, Serialize)]
pub struct ApiResponse<T: Serialize> {
    pub status: &'static str,
    pub data: T,
}

impl<T: Serialize> ApiResponse<T> {
    pub fn success(data: T) -> Json<Self> {
        Json(Self {
            status: "success",
            data,
        })
    }
}

/// Success envelope with `data: null`
pub fn empty_success() -> Json<ApiResponse<()>> {
    ApiResponse::success(())
}

/// JSON body extractor rejecting with [`AppError`]
#[derive(Debug, FromRequest)]
#[from_request(via(axum::Json), rejection(AppError))]
pub struct AppJson<T>(pub T);

/// Query string extractor rejecting with [`AppError`]
#[derive(Debug, FromRequestParts)]
#[from_request(via(axum::extract::Query), rejection(AppError))]
pub struct AppQuery<T>(pub T);

/// Request body whose fields are checked in a fixed order: the first failing
/// field in [`FIELD_ORDER`](Self::FIELD_ORDER) decides the message
pub trait ValidateInOrder: Validate {
    const FIELD_ORDER: &'static [&'static str];

    fn validate_in_order(&self) -> AppResult<()> {
        self.validate()
            .map_err(|err| AppError::from_validation(&err, Self::FIELD_ORDER))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_success_envelope_shape() {
        let Json(body) = ApiResponse::success(vec![1, 2]);
        let value = serde_json::to_value(&body).unwrap();
        assert_eq!(value, serde_json::json!({"status": "success", "data": [1, 2]}));
    }

    #[test]
    fn test_empty_success_has_null_data() {
        let Json(body) = empty_success();
        let value = serde_json::to_value(&body).unwrap();
        assert_eq!(value, serde_json::json!({"status": "success", "data": null}));
    }
}
