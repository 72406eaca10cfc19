use crate::http::support::{self, WriteContext};
use crate::AppState;
use axum::extract::{Path, Query, State};
use axum::response::Response;
use axum::Form;
use orgtrack_api::forms::{
    org_member_form_descriptor, validate_org_member_form, OrgMemberForm,
};
use orgtrack_api::{parse_list_params, ConfirmDeleteDto, ListResponseDto, RecordResponseDto};
use orgtrack_model::OrgMemberId;
use orgtrack_query::{list_org_members, MemberSort, PageRequest};
use orgtrack_store::crud;
use std::collections::HashMap;
use tracing::info;

const ENTITY: &str = "orgmember";
const LIST_PATH: &str = "/orgmember/";
// A membership has two references and SQLite does not say which one
// failed, so the collective field name is reported.
const WRITE: WriteContext = WriteContext {
    entity: ENTITY,
    unique_field: "id",
    reference_field: "student/organization",
};

pub(crate) async fn list_handler(
    State(state): State<AppState>,
    Query(raw): Query<HashMap<String, String>>,
) -> Response {
    let params = match parse_list_params(&raw) {
        Ok(params) => params,
        Err(err) => return support::api_error_response(err),
    };
    let sort = MemberSort::parse(params.sort_by.as_deref());
    let page = PageRequest::new(params.page, state.config.page_sizes.org_member);
    let conn = state.conn.lock().await;
    match list_org_members(&conn, params.q.as_deref(), sort, &page) {
        Ok(result) => support::json_ok(&ListResponseDto::from_page(result)),
        Err(err) => support::api_error_response(support::query_failure(&err)),
    }
}

pub(crate) async fn add_form_handler() -> Response {
    support::json_ok(&org_member_form_descriptor())
}

pub(crate) async fn add_submit_handler(
    State(state): State<AppState>,
    Form(form): Form<OrgMemberForm>,
) -> Response {
    let draft = match validate_org_member_form(&form) {
        Ok(draft) => draft,
        Err(err) => return support::api_error_response(err),
    };
    let conn = state.conn.lock().await;
    match crud::insert_org_member(&conn, &draft) {
        Ok(record) => {
            info!(id = %record.id, "membership created");
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
    match crud::get_org_member(&conn, OrgMemberId(id)) {
        Ok(record) => {
            support::json_ok(&RecordResponseDto::new(record, org_member_form_descriptor()))
        }
        Err(err) => support::api_error_response(support::read_error(ENTITY, id, err)),
    }
}

pub(crate) async fn update_submit_handler(
    State(state): State<AppState>,
    Path(id): Path<i64>,
    Form(form): Form<OrgMemberForm>,
) -> Response {
    let draft = match validate_org_member_form(&form) {
        Ok(draft) => draft,
        Err(err) => return support::api_error_response(err),
    };
    let conn = state.conn.lock().await;
    match crud::update_org_member(&conn, OrgMemberId(id), &draft) {
        Ok(_) => support::see_other(LIST_PATH),
        Err(err) => support::api_error_response(support::write_error(&WRITE, Some(id), err)),
    }
}

pub(crate) async fn delete_form_handler(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> Response {
    let conn = state.conn.lock().await;
    match crud::get_org_member(&conn, OrgMemberId(id)) {
        Ok(_) => support::json_ok(&ConfirmDeleteDto::new(ENTITY, id)),
        Err(err) => support::api_error_response(support::read_error(ENTITY, id, err)),
    }
}

pub(crate) async fn delete_submit_handler(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> Response {
    let conn = state.conn.lock().await;
    match crud::delete_org_member(&conn, OrgMemberId(id)) {
        Ok(()) => {
            info!(id, "membership deleted");
            support::see_other(LIST_PATH)
        }
        Err(err) => support::api_error_response(support::delete_error(ENTITY, id, err)),
    }
}
