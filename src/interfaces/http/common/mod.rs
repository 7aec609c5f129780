//! Response envelope and helpers shared by every HTTP module

pub mod validated_json;

pub use validated_json::{ValidatedJson, ValidatedQuery};

use axum::http::StatusCode;
use axum::Json;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::domain::DomainError;
use crate::shared::INTERNAL_ERROR_MESSAGE;

/// Standard API response wrapper.
///
/// Success: `{"success": true, "data": {...}}`,
/// failure: `{"success": false, "data": null, "error": "..."}`, plus
/// `fields` when request validation rejected individual fields.
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct ApiResponse<T> {
    pub success: bool,
    pub data: Option<T>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub fields: Vec<FieldViolation>,
}

/// One rejected request field
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct FieldViolation {
    pub field: String,
    pub message: String,
}

impl<T> ApiResponse<T> {
    pub fn success(data: T) -> Self {
        Self {
            success: true,
            data: Some(data),
            error: None,
            fields: Vec::new(),
        }
    }

    pub fn error(message: impl Into<String>) -> Self {
        Self {
            success: false,
            data: None,
            error: Some(message.into()),
            fields: Vec::new(),
        }
    }

    pub fn invalid(message: impl Into<String>, fields: Vec<FieldViolation>) -> Self {
        Self {
            fields,
            ..Self::error(message)
        }
    }
}

/// Error half of every handler's return type
pub type ApiError = (StatusCode, Json<ApiResponse<()>>);

pub fn bad_request(message: impl Into<String>) -> ApiError {
    (StatusCode::BAD_REQUEST, Json(ApiResponse::error(message)))
}

/// Map a domain error onto the envelope. `not_found` is the status used for
/// `NotFound`, which differs between lookup and mutation routes.
pub fn domain_error(err: DomainError, not_found: StatusCode) -> ApiError {
    match err {
        DomainError::Validation(message) | DomainError::Duplicate(message) => bad_request(message),
        err @ DomainError::NotFound { .. } => {
            (not_found, Json(ApiResponse::error(err.to_string())))
        }
        DomainError::Internal(message) => (
            StatusCode::INTERNAL_SERVER_ERROR,
            Json(ApiResponse::error(message)),
        ),
        DomainError::Storage(_) => (
            StatusCode::INTERNAL_SERVER_ERROR,
            Json(ApiResponse::error(INTERNAL_ERROR_MESSAGE)),
        ),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn success_envelope_omits_error_and_fields() {
        let json = serde_json::to_value(ApiResponse::success(1)).unwrap();
        assert_eq!(json, serde_json::json!({"success": true, "data": 1}));
    }

    #[test]
    fn not_found_status_is_chosen_by_caller() {
        let err = DomainError::not_found("Product", "term", "cap");
        let (status, Json(body)) = domain_error(err.clone(), StatusCode::BAD_REQUEST);
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body.error.as_deref(), Some("Product with term cap not found"));

        let (status, _) = domain_error(err, StatusCode::NOT_FOUND);
        assert_eq!(status, StatusCode::NOT_FOUND);
    }

    #[test]
    fn storage_detail_never_leaks() {
        let (status, Json(body)) = domain_error(
            DomainError::Storage("password authentication failed".into()),
            StatusCode::NOT_FOUND,
        );
        assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(body.error.as_deref(), Some(INTERNAL_ERROR_MESSAGE));
    }

    #[test]
    fn duplicate_is_a_bad_request_with_detail() {
        let (status, Json(body)) = domain_error(
            DomainError::Duplicate("Key (slug)=(cap) already exists.".into()),
            StatusCode::NOT_FOUND,
        );
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body.error.as_deref(), Some("Key (slug)=(cap) already exists."));
    }
}
