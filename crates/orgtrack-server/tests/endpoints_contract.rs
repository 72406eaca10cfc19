use axum::body::Body;
use axum::http::{header, Request, StatusCode};
use axum::Router;
use chrono::{NaiveDate, Utc};
use orgtrack_model::{NewCollege, NewOrgMember, NewOrganization, NewProgram, NewStudent};
use orgtrack_server::{build_router, AppConfig, AppState};
use orgtrack_store::{crud, open_in_memory};
use rusqlite::Connection;
use serde_json::Value;
use tower::ServiceExt;

fn empty_router() -> Router {
    let conn = open_in_memory().expect("open");
    build_router(AppState::new(conn, AppConfig::default()))
}

/// College "Engineering" / program "CS" / student "Doe, Jane" /
/// organization "Robotics Club" / one membership joined 2024-01-15.
fn scenario_conn() -> Connection {
    let conn = open_in_memory().expect("open");
    let engineering =
        crud::insert_college(&conn, &NewCollege::new("Engineering").expect("draft")).expect("college");
    let cs = crud::insert_program(
        &conn,
        &NewProgram::new("CS", engineering.id).expect("draft"),
    )
    .expect("program");
    let jane = crud::insert_student(
        &conn,
        &NewStudent::new("2023-3-0001", "Doe", "Jane", "", cs.id).expect("draft"),
        Utc::now(),
    )
    .expect("student");
    let robotics = crud::insert_organization(
        &conn,
        &NewOrganization::new("Robotics Club", engineering.id, "Builds robots.").expect("draft"),
    )
    .expect("organization");
    crud::insert_org_member(
        &conn,
        &NewOrgMember::new(
            jane.id,
            robotics.id,
            NaiveDate::from_ymd_opt(2024, 1, 15).expect("date"),
        ),
    )
    .expect("membership");
    conn
}

fn scenario_router() -> Router {
    build_router(AppState::new(scenario_conn(), AppConfig::default()))
}

fn get(uri: &str) -> Request<Body> {
    Request::builder()
        .method("GET")
        .uri(uri)
        .body(Body::empty())
        .expect("request")
}

fn form_post(uri: &str, body: &str) -> Request<Body> {
    Request::builder()
        .method("POST")
        .uri(uri)
        .header(header::CONTENT_TYPE, "application/x-www-form-urlencoded")
        .body(Body::from(body.to_string()))
        .expect("request")
}

async fn send(router: &Router, request: Request<Body>) -> (StatusCode, axum::http::HeaderMap, Value) {
    let response = router.clone().oneshot(request).await.expect("response");
    let status = response.status();
    let headers = response.headers().clone();
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .expect("body");
    let json = if bytes.is_empty() {
        Value::Null
    } else {
        serde_json::from_slice(&bytes).unwrap_or(Value::Null)
    };
    (status, headers, json)
}

#[tokio::test]
async fn healthz_is_open_and_tagged_with_a_request_id() {
    let router = empty_router();
    let (status, headers, _) = send(&router, get("/healthz")).await;
    assert_eq!(status, StatusCode::OK);
    assert!(headers.contains_key("x-request-id"));
}

#[tokio::test]
async fn student_search_finds_jane_doe() {
    let router = scenario_router();
    let (status, _, body) = send(&router, get("/student/?q=doe")).await;
    assert_eq!(status, StatusCode::OK);
    let rows = body["data"]["rows"].as_array().expect("rows");
    assert_eq!(rows.len(), 1);
    assert_eq!(rows[0]["firstname"], "Jane");
    assert_eq!(rows[0]["student_id"], "2023-3-0001");
    assert_eq!(body["page"]["total"], 1);
}

#[tokio::test]
async fn member_list_honors_the_date_sort_token() {
    let router = scenario_router();
    let (status, _, body) = send(&router, get("/orgmember/?sort_by=date")).await;
    assert_eq!(status, StatusCode::OK);
    let rows = body["data"]["rows"].as_array().expect("rows");
    assert_eq!(rows.len(), 1);
    assert_eq!(rows[0]["organization_name"], "Robotics Club");
    assert_eq!(rows[0]["date_joined"], "2024-01-15");
}

#[tokio::test]
async fn dashboard_requires_a_session_and_reports_counts() {
    let router = scenario_router();

    let (status, headers, _) = send(&router, get("/")).await;
    assert_eq!(status, StatusCode::SEE_OTHER);
    assert_eq!(
        headers.get(header::LOCATION).and_then(|v| v.to_str().ok()),
        Some("/accounts/login/")
    );

    let request = Request::builder()
        .method("GET")
        .uri("/")
        .header(header::COOKIE, "orgtrack_session=token-1")
        .body(Body::empty())
        .expect("request");
    let (status, _, body) = send(&router, request).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["counts"]["total_students"], 1);
    assert_eq!(body["counts"]["total_organizations"], 1);
    assert_eq!(body["counts"]["total_colleges"], 1);
    assert_eq!(body["counts"]["total_programs"], 1);
    // The fixture student was stamped "now", so it counts toward the year.
    assert_eq!(body["counts"]["students_joined_this_year"], 1);
}

#[tokio::test]
async fn create_redirects_to_the_list_and_persists() {
    let router = empty_router();
    let (status, headers, _) =
        send(&router, form_post("/college/add/", "name=Engineering")).await;
    assert_eq!(status, StatusCode::SEE_OTHER);
    assert_eq!(
        headers.get(header::LOCATION).and_then(|v| v.to_str().ok()),
        Some("/college/")
    );

    let (status, _, body) = send(&router, get("/college/")).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["data"]["rows"][0]["name"], "Engineering");
    assert_eq!(body["page"]["total"], 1);
}

#[tokio::test]
async fn blank_required_field_is_a_field_level_validation_error() {
    let router = empty_router();
    let (status, _, body) = send(&router, form_post("/college/add/", "name=")).await;
    assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
    assert_eq!(body["error"]["code"], "validation_failed");
    assert_eq!(body["error"]["details"]["field_errors"][0]["field"], "name");

    // Nothing was persisted.
    let (_, _, list) = send(&router, get("/college/")).await;
    assert_eq!(list["page"]["total"], 0);
}

#[tokio::test]
async fn dangling_membership_reference_is_a_validation_error() {
    let router = empty_router();
    let (status, _, body) = send(
        &router,
        form_post(
            "/orgmember/add/",
            "student=1&organization=1&date_joined=2024-01-15",
        ),
    )
    .await;
    assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
    assert_eq!(body["error"]["code"], "validation_failed");
}

#[tokio::test]
async fn invalid_page_parameter_is_rejected() {
    let router = empty_router();
    let (status, _, body) = send(&router, get("/college/?page=abc")).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["error"]["code"], "invalid_query_parameter");

    let (status, _, _) = send(&router, get("/college/?page=0")).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn update_flow_replaces_the_record() {
    let router = scenario_router();

    let (status, _, body) = send(&router, get("/college/1/update/")).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["record"]["name"], "Engineering");
    assert_eq!(body["form"]["entity"], "college");

    let (status, _, _) = send(
        &router,
        form_post("/college/1/update/", "name=College+of+Engineering"),
    )
    .await;
    assert_eq!(status, StatusCode::SEE_OTHER);

    let (_, _, body) = send(&router, get("/college/1/update/")).await;
    assert_eq!(body["record"]["name"], "College of Engineering");
}

#[tokio::test]
async fn missing_rows_surface_as_not_found() {
    let router = empty_router();
    let (status, _, body) = send(&router, get("/college/99/update/")).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["error"]["code"], "not_found");

    let (status, _, _) = send(&router, form_post("/college/99/delete/", "")).await;
    assert_eq!(status, StatusCode::NOT_FOUND);

    let (status, _, _) = send(&router, get("/student/99/delete/")).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn deleting_a_referenced_college_is_blocked() {
    let router = scenario_router();

    let (status, _, body) = send(&router, get("/college/1/delete/")).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["entity"], "college");

    let (status, _, body) = send(&router, form_post("/college/1/delete/", "")).await;
    assert_eq!(status, StatusCode::CONFLICT);
    assert_eq!(body["error"]["code"], "integrity_violation");
}

#[tokio::test]
async fn membership_delete_flow_completes() {
    let router = scenario_router();
    let (status, headers, _) = send(&router, form_post("/orgmember/1/delete/", "")).await;
    assert_eq!(status, StatusCode::SEE_OTHER);
    assert_eq!(
        headers.get(header::LOCATION).and_then(|v| v.to_str().ok()),
        Some("/orgmember/")
    );
    let (_, _, body) = send(&router, get("/orgmember/")).await;
    assert_eq!(body["page"]["total"], 0);
}

#[tokio::test]
async fn add_forms_expose_static_field_lists() {
    let router = empty_router();
    let (status, _, body) = send(&router, get("/student/add/")).await;
    assert_eq!(status, StatusCode::OK);
    let names: Vec<&str> = body["fields"]
        .as_array()
        .expect("fields")
        .iter()
        .map(|f| f["name"].as_str().expect("name"))
        .collect();
    assert_eq!(
        names,
        ["student_id", "lastname", "firstname", "middlename", "program"]
    );
}

#[tokio::test]
async fn organization_pages_use_the_smaller_page_size() {
    let conn = open_in_memory().expect("open");
    let college =
        crud::insert_college(&conn, &NewCollege::new("Engineering").expect("draft")).expect("college");
    for i in 0..7 {
        crud::insert_organization(
            &conn,
            &NewOrganization::new(&format!("Org {i}"), college.id, "").expect("draft"),
        )
        .expect("organization");
    }
    let router = build_router(AppState::new(conn, AppConfig::default()));

    let (_, _, body) = send(&router, get("/organization/")).await;
    assert_eq!(body["page"]["page_size"], 5);
    assert_eq!(body["page"]["page_count"], 2);
    assert_eq!(body["data"]["rows"].as_array().expect("rows").len(), 5);

    // Out-of-range pages clamp to the last page instead of erroring.
    let (status, _, body) = send(&router, get("/organization/?page=9")).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["page"]["page"], 2);
    assert_eq!(body["data"]["rows"].as_array().expect("rows").len(), 2);
}
