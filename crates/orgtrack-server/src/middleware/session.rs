// SPDX-License-Identifier: Apache-2.0

use crate::AppState;
use axum::body::Body;
use axum::extract::State;
use axum::http::{header, HeaderMap, Request};
use axum::middleware::Next;
use axum::response::{IntoResponse, Redirect, Response};
use tracing::info;

/// Dashboard gate. Only the presence of a session credential is checked
/// here; validating it is the identity provider's contract, not ours.
/// Unauthenticated requests are redirected to the login entry point.
pub(crate) async fn require_session_middleware(
    State(state): State<AppState>,
    request: Request<Body>,
    next: Next,
) -> Response {
    if has_session_credential(request.headers(), &state.config.session_cookie) {
        return next.run(request).await;
    }
    info!(login_url = %state.config.login_url, "unauthenticated dashboard request");
    Redirect::to(&state.config.login_url).into_response()
}

fn has_session_credential(headers: &HeaderMap, cookie_name: &str) -> bool {
    let bearer = headers
        .get(header::AUTHORIZATION)
        .and_then(|v| v.to_str().ok())
        .and_then(|v| v.strip_prefix("Bearer "))
        .is_some_and(|token| !token.trim().is_empty());
    if bearer {
        return true;
    }
    headers
        .get(header::COOKIE)
        .and_then(|v| v.to_str().ok())
        .is_some_and(|cookies| {
            cookies.split(';').any(|pair| {
                match pair.trim().split_once('=') {
                    Some((name, value)) => name == cookie_name && !value.is_empty(),
                    None => false,
                }
            })
        })
}
