//! Validated extractors for Axum
//!
//! `ValidatedJson<T>` and `ValidatedQuery<T>` work like `axum::Json<T>` and
//! `axum::extract::Query<T>`, but additionally run
//! `validator::Validate::validate()` on the deserialized value.
//! Any failure, malformed input or rule violation, is answered with 400 and
//! the list of offending fields.

use axum::extract::rejection::{JsonRejection, QueryRejection};
use axum::extract::{FromRequest, FromRequestParts, Query};
use axum::http::request::Parts;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde::de::DeserializeOwned;
use validator::{Validate, ValidationErrors};

use super::{ApiResponse, FieldViolation};

/// An extractor that deserializes a JSON body and validates it.
///
/// ```ignore
/// async fn handler(ValidatedJson(body): ValidatedJson<CreateProductRequest>) {
///     // `body` is guaranteed to pass validation
/// }
/// ```
pub struct ValidatedJson<T>(pub T);

/// An extractor that deserializes the query string and validates it.
pub struct ValidatedQuery<T>(pub T);

/// Error type for validated extraction failures.
pub enum ValidationRejection {
    /// JSON body could not be parsed or had unexpected fields.
    Json(JsonRejection),
    /// Query string could not be parsed.
    Query(QueryRejection),
    /// Parsed value broke a validation rule.
    Invalid(ValidationErrors),
}

fn field_violations(errors: &ValidationErrors) -> Vec<FieldViolation> {
    let mut violations: Vec<FieldViolation> = errors
        .field_errors()
        .iter()
        .flat_map(|(field, errs)| {
            errs.iter().map(move |e| FieldViolation {
                field: field.to_string(),
                message: e
                    .message
                    .as_ref()
                    .map(|m| m.to_string())
                    .unwrap_or_else(|| e.code.to_string()),
            })
        })
        .collect();
    violations.sort_by(|a, b| a.field.cmp(&b.field));
    violations
}

impl IntoResponse for ValidationRejection {
    fn into_response(self) -> Response {
        let body = match self {
            Self::Json(rejection) => {
                ApiResponse::<()>::error(format!("Invalid JSON: {}", rejection.body_text()))
            }
            Self::Query(rejection) => {
                ApiResponse::<()>::error(format!("Invalid query: {}", rejection.body_text()))
            }
            Self::Invalid(errors) => {
                let fields = field_violations(&errors);
                let message = if fields.is_empty() {
                    "Validation failed".to_string()
                } else {
                    fields
                        .iter()
                        .map(|f| format!("{}: {}", f.field, f.message))
                        .collect::<Vec<_>>()
                        .join("; ")
                };
                ApiResponse::<()>::invalid(message, fields)
            }
        };
        (StatusCode::BAD_REQUEST, Json(body)).into_response()
    }
}

impl<S, T> FromRequest<S> for ValidatedJson<T>
where
    T: DeserializeOwned + Validate,
    S: Send + Sync,
{
    type Rejection = ValidationRejection;

    async fn from_request(
        req: axum::extract::Request,
        state: &S,
    ) -> Result<Self, Self::Rejection> {
        let Json(value) = Json::<T>::from_request(req, state)
            .await
            .map_err(ValidationRejection::Json)?;

        value.validate().map_err(ValidationRejection::Invalid)?;

        Ok(ValidatedJson(value))
    }
}

impl<S, T> FromRequestParts<S> for ValidatedQuery<T>
where
    T: DeserializeOwned + Validate,
    S: Send + Sync,
{
    type Rejection = ValidationRejection;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let Query(value) = Query::<T>::from_request_parts(parts, state)
            .await
            .map_err(ValidationRejection::Query)?;

        value.validate().map_err(ValidationRejection::Invalid)?;

        Ok(ValidatedQuery(value))
    }
}

// ── Tests ──────────────────────────────────────────────────────
