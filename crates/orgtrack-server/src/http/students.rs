use crate::http::support::{self, WriteContext};
use crate::AppState;
use axum::extract::{Path, Query, State};
use axum::response::Response;
use axum::Form;
use chrono::Utc;
use orgtrack_api::forms::{student_form_descriptor, validate_student_form, StudentForm};
use orgtrack_api::{parse_list_params, ConfirmDeleteDto, ListResponseDto, RecordResponseDto};
use orgtrack_model::StudentId;
use orgtrack_query::{list_students, PageRequest};
use orgtrack_store::crud;
use std::collections::HashMap;
use tracing::info;

const ENTITY: &str = "student";
const LIST_PATH: &str = "/student/";
const WRITE: WriteContext = WriteContext {
    entity: ENTITY,
    unique_field: "student_id",
    reference_field: "program",
};

pub(crate) async fn list_handler(
    State(state): State<AppState>,
    Query(raw): Query<HashMap<String, String>>,
) -> Response {
    let params = match parse_list_params(&raw) {
        Ok(params) => params,
        Err(err) => return support::api_error_response(err),
    };
    let page = PageRequest::new(params.page, state.config.page_sizes.student);
    let conn = state.conn.lock().await;
    match list_students(&conn, params.q.as_deref(), &page) {
        Ok(result) => support::json_ok(&ListResponseDto::from_page(result)),
        Err(err) => support::api_error_response(support::query_failure(&err)),
    }
}

pub(crate) async fn add_form_handler() -> Response {
    support::json_ok(&student_form_descriptor())
}

pub(crate) async fn add_submit_handler(
    State(state): State<AppState>,
    Form(form): Form<StudentForm>,
) -> Response {
    let draft = match validate_student_form(&form) {
        Ok(draft) => draft,
        Err(err) => return support::api_error_response(err),
    };
    let conn = state.conn.lock().await;
    match crud::insert_student(&conn, &draft, Utc::now()) {
        Ok(record) => {
            info!(id = %record.id, student_id = %record.student_id, "student created");
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
    match crud::get_student(&conn, StudentId(id)) {
        Ok(record) => support::json_ok(&RecordResponseDto::new(record, student_form_descriptor())),
        Err(err) => support::api_error_response(support::read_error(ENTITY, id, err)),
    }
}

pub(crate) async fn update_submit_handler(
    State(state): State<AppState>,
    Path(id): Path<i64>,
    Form(form): Form<StudentForm>,
) -> Response {
    let draft = match validate_student_form(&form) {
        Ok(draft) => draft,
        Err(err) => return support::api_error_response(err),
    };
    let conn = state.conn.lock().await;
    match crud::update_student(&conn, StudentId(id), &draft) {
        Ok(_) => support::see_other(LIST_PATH),
        Err(err) => support::api_error_response(support::write_error(&WRITE, Some(id), err)),
    }
}

pub(crate) async fn delete_form_handler(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> Response {
    let conn = state.conn.lock().await;
    match crud::get_student(&conn, StudentId(id)) {
        Ok(_) => support::json_ok(&ConfirmDeleteDto::new(ENTITY, id)),
        Err(err) => support::api_error_response(support::read_error(ENTITY, id, err)),
    }
}

pub(crate) async fn delete_submit_handler(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> Response {
    let conn = state.conn.lock().await;
    match crud::delete_student(&conn, StudentId(id)) {
        Ok(()) => {
            info!(id, "student deleted");
            support::see_other(LIST_PATH)
        }
        Err(err) => support::api_error_response(support::delete_error(ENTITY, id, err)),
    }
}
