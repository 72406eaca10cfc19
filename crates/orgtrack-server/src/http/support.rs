// SPDX-License-Identifier: Apache-2.0

use axum::http::StatusCode;
use axum::response::{IntoResponse, Redirect, Response};
use axum::Json;
use orgtrack_api::ApiError;
use orgtrack_query::QueryError;
use orgtrack_store::StoreError;
use serde_json::json;

pub(crate) async fn healthz_handler() -> Response {
    (StatusCode::OK, "ok").into_response()
}

pub(crate) fn api_error_response(err: ApiError) -> Response {
    let status = StatusCode::from_u16(err.code.http_status())
        .unwrap_or(StatusCode::INTERNAL_SERVER_ERROR);
    (status, Json(json!({"error": err}))).into_response()
}

pub(crate) fn json_ok<T: serde::Serialize>(payload: &T) -> Response {
    Json(payload).into_response()
}

/// Successful form submissions land back on the entity list.
pub(crate) fn see_other(location: &str) -> Response {
    Redirect::to(location).into_response()
}

pub(crate) fn query_failure(err: &QueryError) -> ApiError {
    ApiError::internal(&err.to_string())
}

/// Error-mapping context for one entity's create/update path. SQLite does
/// not report which foreign key failed, so `reference_field` is the
/// entity's single reference field — or a collective name where it has
/// more than one.
pub(crate) struct WriteContext {
    pub entity: &'static str,
    pub unique_field: &'static str,
    pub reference_field: &'static str,
}

pub(crate) fn write_error(ctx: &WriteContext, id: Option<i64>, err: StoreError) -> ApiError {
    match err {
        StoreError::NotFound => ApiError::not_found(ctx.entity, id.unwrap_or_default()),
        StoreError::Unique(_) => ApiError::validation_failed(json!([
            {"field": ctx.unique_field, "reason": "already in use"}
        ])),
        StoreError::ForeignKey(_) => ApiError::validation_failed(json!([
            {"field": ctx.reference_field, "reason": "references a row that does not exist"}
        ])),
        StoreError::Sqlite(msg) => ApiError::internal(&msg),
    }
}

pub(crate) fn read_error(entity: &'static str, id: i64, err: StoreError) -> ApiError {
    match err {
        StoreError::NotFound => ApiError::not_found(entity, id),
        other => ApiError::internal(&other.to_string()),
    }
}

pub(crate) fn delete_error(entity: &'static str, id: i64, err: StoreError) -> ApiError {
    match err {
        StoreError::NotFound => ApiError::not_found(entity, id),
        StoreError::ForeignKey(_) => ApiError::still_referenced(entity, id),
        other => ApiError::internal(&other.to_string()),
    }
}
