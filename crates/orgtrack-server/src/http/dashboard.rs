// SPDX-License-Identifier: Apache-2.0

use crate::http::support;
use crate::AppState;
use axum::extract::State;
use axum::response::Response;
use chrono::{Datelike, Utc};
use orgtrack_api::DashboardDto;
use orgtrack_query::dashboard_counts;

/// Aggregate counts, recomputed on every request. The year boundary for
/// `students_joined_this_year` is the current UTC calendar year.
pub(crate) async fn dashboard_handler(State(state): State<AppState>) -> Response {
    let current_year = Utc::now().year();
    let conn = state.conn.lock().await;
    match dashboard_counts(&conn, current_year) {
        Ok(counts) => support::json_ok(&DashboardDto::new(counts)),
        Err(err) => support::api_error_response(support::query_failure(&err)),
    }
}
