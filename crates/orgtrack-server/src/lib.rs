#![forbid(unsafe_code)]

//! axum HTTP surface for the registry. Every list/read re-queries the
//! store; handlers hold the single connection only for the duration of one
//! request's queries.

use axum::middleware::from_fn_with_state;
use axum::routing::get;
use axum::Router;
use rusqlite::Connection;
use std::sync::atomic::AtomicU64;
use std::sync::Arc;
use tokio::sync::Mutex;

mod config;
mod http;
mod middleware;

pub use config::{AppConfig, PageSizes};

pub const CRATE_NAME: &str = "orgtrack-server";

#[derive(Clone)]
pub struct AppState {
    pub conn: Arc<Mutex<Connection>>,
    pub config: Arc<AppConfig>,
    pub request_id_seed: Arc<AtomicU64>,
}

impl AppState {
    #[must_use]
    pub fn new(conn: Connection, config: AppConfig) -> Self {
        Self {
            conn: Arc::new(Mutex::new(conn)),
            config: Arc::new(config),
            request_id_seed: Arc::new(AtomicU64::new(1)),
        }
    }
}

pub fn build_router(state: AppState) -> Router {
    let dashboard = Router::new()
        .route("/", get(http::dashboard::dashboard_handler))
        .route_layer(from_fn_with_state(
            state.clone(),
            middleware::session::require_session_middleware,
        ));

    Router::new()
        .merge(dashboard)
        .route("/healthz", get(http::support::healthz_handler))
        .route("/organization/", get(http::organizations::list_handler))
        .route(
            "/organization/add/",
            get(http::organizations::add_form_handler).post(http::organizations::add_submit_handler),
        )
        .route(
            "/organization/:id/update/",
            get(http::organizations::update_form_handler)
                .post(http::organizations::update_submit_handler),
        )
        .route(
            "/organization/:id/delete/",
            get(http::organizations::delete_form_handler)
                .post(http::organizations::delete_submit_handler),
        )
        .route("/student/", get(http::students::list_handler))
        .route(
            "/student/add/",
            get(http::students::add_form_handler).post(http::students::add_submit_handler),
        )
        .route(
            "/student/:id/update/",
            get(http::students::update_form_handler).post(http::students::update_submit_handler),
        )
        .route(
            "/student/:id/delete/",
            get(http::students::delete_form_handler).post(http::students::delete_submit_handler),
        )
        .route("/college/", get(http::colleges::list_handler))
        .route(
            "/college/add/",
            get(http::colleges::add_form_handler).post(http::colleges::add_submit_handler),
        )
        .route(
            "/college/:id/update/",
            get(http::colleges::update_form_handler).post(http::colleges::update_submit_handler),
        )
        .route(
            "/college/:id/delete/",
            get(http::colleges::delete_form_handler).post(http::colleges::delete_submit_handler),
        )
        .route("/program/", get(http::programs::list_handler))
        .route(
            "/program/add/",
            get(http::programs::add_form_handler).post(http::programs::add_submit_handler),
        )
        .route(
            "/program/:id/update/",
            get(http::programs::update_form_handler).post(http::programs::update_submit_handler),
        )
        .route(
            "/program/:id/delete/",
            get(http::programs::delete_form_handler).post(http::programs::delete_submit_handler),
        )
        .route("/orgmember/", get(http::members::list_handler))
        .route(
            "/orgmember/add/",
            get(http::members::add_form_handler).post(http::members::add_submit_handler),
        )
        .route(
            "/orgmember/:id/update/",
            get(http::members::update_form_handler).post(http::members::update_submit_handler),
        )
        .route(
            "/orgmember/:id/delete/",
            get(http::members::delete_form_handler).post(http::members::delete_submit_handler),
        )
        .layer(from_fn_with_state(
            state.clone(),
            middleware::request_tracing::request_tracing_middleware,
        ))
        .with_state(state)
}
