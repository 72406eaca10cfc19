// SPDX-License-Identifier: Apache-2.0

use serde::{Deserialize, Serialize};
use serde_json::{json, Value};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ApiErrorCode {
    InvalidQueryParameter,
    ValidationFailed,
    NotFound,
    IntegrityViolation,
    Unauthorized,
    Internal,
}

impl ApiErrorCode {
    /// Canonical HTTP status for the code; the server maps this onto its
    /// status type at the edge.
    #[must_use]
    pub const fn http_status(self) -> u16 {
        match self {
            Self::InvalidQueryParameter => 400,
            Self::Unauthorized => 401,
            Self::NotFound => 404,
            Self::IntegrityViolation => 409,
            Self::ValidationFailed => 422,
            Self::Internal => 500,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ApiError {
    pub code: ApiErrorCode,
    pub message: String,
    pub details: Value,
}

impl ApiError {
    #[must_use]
    pub fn new(code: ApiErrorCode, message: impl Into<String>, details: Value) -> Self {
        Self {
            code,
            message: message.into(),
            details,
        }
    }

    #[must_use]
    pub fn invalid_param(name: &str, value: &str) -> Self {
        Self::new(
            ApiErrorCode::InvalidQueryParameter,
            format!("invalid query parameter: {name}"),
            json!({"parameter": name, "value": value}),
        )
    }

    /// `field_errors` is a list of `{field, reason}` objects; create and
    /// update handlers return it without mutating any state.
    #[must_use]
    pub fn validation_failed(field_errors: Value) -> Self {
        Self::new(
            ApiErrorCode::ValidationFailed,
            "validation failed",
            json!({"field_errors": field_errors}),
        )
    }

    #[must_use]
    pub fn not_found(entity: &str, id: i64) -> Self {
        Self::new(
            ApiErrorCode::NotFound,
            format!("{entity} not found"),
            json!({"entity": entity, "id": id}),
        )
    }

    #[must_use]
    pub fn still_referenced(entity: &str, id: i64) -> Self {
        Self::new(
            ApiErrorCode::IntegrityViolation,
            format!("{entity} is still referenced and cannot be deleted"),
            json!({"entity": entity, "id": id}),
        )
    }

    #[must_use]
    pub fn unauthorized(login_url: &str) -> Self {
        Self::new(
            ApiErrorCode::Unauthorized,
            "authentication required",
            json!({"login_url": login_url}),
        )
    }

    #[must_use]
    pub fn internal(message: &str) -> Self {
        Self::new(ApiErrorCode::Internal, "internal error", json!({"reason": message}))
    }
}
