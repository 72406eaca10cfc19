use crate::http::support::{self, WriteContext};
use crate::AppState;
use axum::extract::{Path, Query, State};
use axum::response::Response;
use axum::Form;
use orgtrack_api::forms::{
    organization_form_descriptor, validate_organization_form, OrganizationForm,
};
use orgtrack_api::{parse_list_params, ConfirmDeleteDto, ListResponseDto, RecordResponseDto};
use orgtrack_model::OrganizationId;
use orgtrack_query::{list_organizations, PageRequest};
use orgtrack_store::crud;
use std::collections::HashMap;
use tracing::info;

const ENTITY: &str = "organization";
const LIST_PATH: &str = "/organization/";
const WRITE: WriteContext = WriteContext {
    entity: ENTITY,
    unique_field: "name",
    reference_field: "college",
};

pub(crate) async fn list_handler(
    State(state): State<AppState>,
    Query(raw): Query<HashMap<String, String>>,
) -> Response {
    let params = match parse_list_params(&raw) {
        Ok(params) => params,
        Err(err) => return support::api_error_response(err),
    };
    let page = PageRequest::new(params.page, state.config.page_sizes.organization);
    let conn = state.conn.lock().await;
    match list_organizations(&conn, params.q.as_deref(), &page) {
        Ok(result) => support::json_ok(&ListResponseDto::from_page(result)),
        Err(err) => support::api_error_response(support::query_failure(&err)),
    }
}

pub(crate) async fn add_form_handler() -> Response {
    support::json_ok(&organization_form_descriptor())
}

pub(crate) async fn add_submit_handler(
    State(state): State<AppState>,
    Form(form): Form<OrganizationForm>,
) -> Response {
    let draft = match validate_organization_form(&form) {
        Ok(draft) => draft,
        Err(err) => return support::api_error_response(err),
    };
    let conn = state.conn.lock().await;
    match crud::insert_organization(&conn, &draft) {
        Ok(record) => {
            info!(id = %record.id, name = %record.name, "organization created");
            support::see_other(LIST_PATH)
        }
        Err(err) => support::api_error_response(support::write_error(&WRITE, None, err)),
    }
}

pub(crate) async fn update_form_handler(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> Response {
    let conn = state.conn.lock().await;
    match crud::get_organization(&conn, OrganizationId(id)) {
        Ok(record) => {
            support::json_ok(&RecordResponseDto::new(record, organization_form_descriptor()))
        }
        Err(err) => support::api_error_response(support::read_error(ENTITY, id, err)),
    }
}

pub(crate) async fn update_submit_handler(
    State(state): State<AppState>,
    Path(id): Path<i64>,
    Form(form): Form<OrganizationForm>,
) -> Response {
    let draft = match validate_organization_form(&form) {
        Ok(draft) => draft,
        Err(err) => return support::api_error_response(err),
    };
    let conn = state.conn.lock().await;
    match crud::update_organization(&conn, OrganizationId(id), &draft) {
        Ok(_) => support::see_other(LIST_PATH),
        Err(err) => support::api_error_response(support::write_error(&WRITE, Some(id), err)),
    }
}

pub(crate) async fn delete_form_handler(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> Response {
    let conn = state.conn.lock().await;
    match crud::get_organization(&conn, OrganizationId(id)) {
        Ok(_) => support::json_ok(&ConfirmDeleteDto::new(ENTITY, id)),
        Err(err) => support::api_error_response(support::read_error(ENTITY, id, err)),
    }
}

pub(crate) async fn delete_submit_handler(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> Response {
    let conn = state.conn.lock().await;
    match crud::delete_organization(&conn, OrganizationId(id)) {
        Ok(()) => {
            info!(id, "organization deleted");
            support::see_other(LIST_PATH)
        }
        Err(err) => support::api_error_response(support::delete_error(ENTITY, id, err)),
    }
}
