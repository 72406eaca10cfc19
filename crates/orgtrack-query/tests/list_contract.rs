use chrono::{NaiveDate, TimeZone, Utc};
use orgtrack_model::{
    College, NewCollege, NewOrgMember, NewOrganization, NewProgram, NewStudent, Program,
};
use orgtrack_query::{
    dashboard_counts, list_colleges, list_org_members, list_organizations, list_programs,
    list_students, MemberSort, PageRequest,
};
use orgtrack_store::{crud, open_in_memory};
use rusqlite::Connection;

const WIDE: PageRequest = PageRequest::new(1, 1000);

fn ts(year: i32) -> chrono::DateTime<Utc> {
    Utc.with_ymd_and_hms(year, 6, 1, 8, 0, 0).single().expect("ts")
}

fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).expect("date")
}

fn college(conn: &Connection, name: &str) -> College {
    crud::insert_college(conn, &NewCollege::new(name).expect("draft")).expect("college")
}

fn program(conn: &Connection, name: &str, college: &College) -> Program {
    crud::insert_program(conn, &NewProgram::new(name, college.id).expect("draft")).expect("program")
}

fn student(
    conn: &Connection,
    number: &str,
    last: &str,
    first: &str,
    program: &Program,
    created_year: i32,
) -> orgtrack_model::Student {
    crud::insert_student(
        conn,
        &NewStudent::new(number, last, first, "", program.id).expect("draft"),
        ts(created_year),
    )
    .expect("student")
}

/// College "Engineering" with program "CS", plus a second college for
/// ordering checks.
fn campus(conn: &Connection) -> (College, Program, College) {
    let engineering = college(conn, "Engineering");
    let cs = program(conn, "CS", &engineering);
    let arts = college(conn, "Arts");
    (engineering, cs, arts)
}

#[test]
fn empty_q_matches_absent_q_for_every_entity() {
    let conn = open_in_memory().expect("open");
    let (engineering, cs, arts) = campus(&conn);
    student(&conn, "2023-3-0001", "Doe", "Jane", &cs, 2023);
    let org = crud::insert_organization(
        &conn,
        &NewOrganization::new("Robotics Club", engineering.id, "Builds robots.").expect("draft"),
    )
    .expect("org");
    let jane = list_students(&conn, None, &WIDE).expect("list").rows;
    crud::insert_org_member(
        &conn,
        &NewOrgMember::new(jane[0].id, org.id, date(2024, 1, 15)),
    )
    .expect("member");
    let _ = arts;

    assert_eq!(
        list_students(&conn, None, &WIDE).expect("none").rows,
        list_students(&conn, Some(""), &WIDE).expect("empty").rows,
    );
    assert_eq!(
        list_colleges(&conn, None, &WIDE).expect("none").rows,
        list_colleges(&conn, Some("   "), &WIDE).expect("blank").rows,
    );
    assert_eq!(
        list_programs(&conn, None, &WIDE).expect("none").rows,
        list_programs(&conn, Some(""), &WIDE).expect("empty").rows,
    );
    assert_eq!(
        list_organizations(&conn, None, &WIDE).expect("none").rows,
        list_organizations(&conn, Some(""), &WIDE).expect("empty").rows,
    );
    assert_eq!(
        list_org_members(&conn, None, MemberSort::Name, &WIDE)
            .expect("none")
            .rows,
        list_org_members(&conn, Some(""), MemberSort::Name, &WIDE)
            .expect("empty")
            .rows,
    );
}

#[test]
fn student_search_is_case_insensitive_substring_over_three_fields() {
    let conn = open_in_memory().expect("open");
    let (_, cs, _) = campus(&conn);
    student(&conn, "2023-3-0001", "Doe", "Jane", &cs, 2023);
    student(&conn, "2022-1-0002", "Smith", "Doreen", &cs, 2022); // firstname contains "do"
    student(&conn, "2021-2-0003", "Cruz", "Maria", &cs, 2021);
    student(&conn, "2020-4-0404", "Lim", "Ana", &cs, 2020);

    let hits = list_students(&conn, Some("DO"), &WIDE).expect("list").rows;
    let lastnames: Vec<&str> = hits.iter().map(|s| s.lastname.as_str()).collect();
    assert_eq!(lastnames, ["Doe", "Smith"]);

    // student_id is searchable too.
    let by_number = list_students(&conn, Some("0404"), &WIDE).expect("list").rows;
    assert_eq!(by_number.len(), 1);
    assert_eq!(by_number[0].lastname, "Lim");

    // No tokenization: the term is one opaque substring.
    let phrase = list_students(&conn, Some("Doe Jane"), &WIDE).expect("list").rows;
    assert!(phrase.is_empty());
}

#[test]
fn like_metacharacters_in_the_term_match_literally() {
    let conn = open_in_memory().expect("open");
    let (_, cs, _) = campus(&conn);
    student(&conn, "2023-3-0001", "O_Neil", "Percy", &cs, 2023);
    student(&conn, "2022-1-0002", "Oswald", "Nina", &cs, 2022);

    let hits = list_students(&conn, Some("O_"), &WIDE).expect("list").rows;
    assert_eq!(hits.len(), 1, "underscore must not act as a wildcard");
    assert_eq!(hits[0].lastname, "O_Neil");
}

#[test]
fn organization_list_orders_by_college_then_name() {
    let conn = open_in_memory().expect("open");
    let (engineering, _, arts) = campus(&conn);
    for (name, owner) in [
        ("Robotics Club", &engineering),
        ("Glee Circle", &arts),
        ("Chess Society", &engineering),
        ("Drama Guild", &arts),
    ] {
        crud::insert_organization(
            &conn,
            &NewOrganization::new(name, owner.id, "").expect("draft"),
        )
        .expect("org");
    }

    let rows = list_organizations(&conn, None, &WIDE).expect("list").rows;
    let names: Vec<&str> = rows.iter().map(|o| o.name.as_str()).collect();
    assert_eq!(
        names,
        ["Drama Guild", "Glee Circle", "Chess Society", "Robotics Club"],
        "Arts before Engineering, names ascending within a college"
    );
}

#[test]
fn organization_search_covers_name_and_description() {
    let conn = open_in_memory().expect("open");
    let (engineering, _, _) = campus(&conn);
    crud::insert_organization(
        &conn,
        &NewOrganization::new("Robotics Club", engineering.id, "Builds robots.").expect("draft"),
    )
    .expect("org");
    crud::insert_organization(
        &conn,
        &NewOrganization::new("Chess Society", engineering.id, "Weekly robot-themed puzzles.")
            .expect("draft"),
    )
    .expect("org");

    let rows = list_organizations(&conn, Some("robot"), &WIDE).expect("list").rows;
    assert_eq!(rows.len(), 2, "description matches count too");
}

#[test]
fn program_search_matches_owning_college_name() {
    let conn = open_in_memory().expect("open");
    let (engineering, _, arts) = campus(&conn);
    program(&conn, "Civil Engineering", &engineering);
    program(&conn, "Painting", &arts);

    let rows = list_programs(&conn, Some("engineering"), &WIDE).expect("list").rows;
    let names: Vec<&str> = rows.iter().map(|p| p.name.as_str()).collect();
    // "CS" belongs to Engineering, so the college-name side of the OR pulls
    // it in; ordering is by program name.
    assert_eq!(names, ["CS", "Civil Engineering"]);
}

#[test]
fn member_sort_tokens_select_the_documented_orderings() {
    let conn = open_in_memory().expect("open");
    let (engineering, cs, _) = campus(&conn);
    let org = crud::insert_organization(
        &conn,
        &NewOrganization::new("Robotics Club", engineering.id, "").expect("draft"),
    )
    .expect("org");

    let anna = student(&conn, "2020-1-0001", "Cruz", "Anna", &cs, 2020);
    let belle = student(&conn, "2020-1-0002", "Cruz", "Belle", &cs, 2020);
    let zed = student(&conn, "2020-1-0003", "Abad", "Zed", &cs, 2020);
    for (who, joined) in [
        (&anna, date(2025, 5, 1)),
        (&belle, date(2023, 2, 10)),
        (&zed, date(2024, 8, 20)),
    ] {
        crud::insert_org_member(&conn, &NewOrgMember::new(who.id, org.id, joined))
            .expect("member");
    }

    let by_date = list_org_members(&conn, None, MemberSort::Date, &WIDE).expect("list").rows;
    assert!(by_date.windows(2).all(|w| w[0].date_joined <= w[1].date_joined));
    assert_eq!(by_date[0].student_lastname, "Cruz"); // Belle, 2023
    assert_eq!(by_date[0].student_firstname, "Belle");

    let by_name = list_org_members(&conn, None, MemberSort::Name, &WIDE).expect("list").rows;
    let names: Vec<(String, String)> = by_name
        .iter()
        .map(|m| (m.student_lastname.clone(), m.student_firstname.clone()))
        .collect();
    assert!(names.windows(2).all(|w| w[0] <= w[1]));
    assert_eq!(names[0].0, "Abad");

    let by_name_desc =
        list_org_members(&conn, None, MemberSort::NameDesc, &WIDE).expect("list").rows;
    let descending: Vec<(String, String)> = by_name_desc
        .iter()
        .map(|m| (m.student_lastname.clone(), m.student_firstname.clone()))
        .collect();
    assert!(descending.windows(2).all(|w| w[0] >= w[1]));
    assert_eq!(descending[0].0, "Cruz");
    assert_eq!(descending[0].1, "Belle");
}

#[test]
fn member_search_matches_student_names_and_organization_name() {
    let conn = open_in_memory().expect("open");
    let (engineering, cs, _) = campus(&conn);
    let robotics = crud::insert_organization(
        &conn,
        &NewOrganization::new("Robotics Club", engineering.id, "").expect("draft"),
    )
    .expect("org");
    let chess = crud::insert_organization(
        &conn,
        &NewOrganization::new("Chess Society", engineering.id, "").expect("draft"),
    )
    .expect("org");
    let jane = student(&conn, "2023-3-0001", "Doe", "Jane", &cs, 2023);
    let maria = student(&conn, "2021-2-0003", "Cruz", "Maria", &cs, 2021);
    crud::insert_org_member(&conn, &NewOrgMember::new(jane.id, chess.id, date(2024, 1, 1)))
        .expect("member");
    crud::insert_org_member(&conn, &NewOrgMember::new(maria.id, robotics.id, date(2024, 2, 1)))
        .expect("member");

    let by_org = list_org_members(&conn, Some("robotics"), MemberSort::Name, &WIDE)
        .expect("list")
        .rows;
    assert_eq!(by_org.len(), 1);
    assert_eq!(by_org[0].student_lastname, "Cruz");

    let by_student = list_org_members(&conn, Some("doe"), MemberSort::Name, &WIDE)
        .expect("list")
        .rows;
    assert_eq!(by_student.len(), 1);
    assert_eq!(by_student[0].organization_name, "Chess Society");
}

#[test]
fn concatenated_pages_reproduce_the_full_result() {
    let conn = open_in_memory().expect("open");
    let (engineering, _, arts) = campus(&conn);
    for i in 0..12 {
        let owner = if i % 2 == 0 { &engineering } else { &arts };
        crud::insert_organization(
            &conn,
            &NewOrganization::new(&format!("Org {i:02}"), owner.id, "").expect("draft"),
        )
        .expect("org");
    }

    let full = list_organizations(&conn, None, &WIDE).expect("full").rows;
    assert_eq!(full.len(), 12);

    let mut stitched = Vec::new();
    let mut page = 1;
    loop {
        let slice = list_organizations(&conn, None, &PageRequest::new(page, 5)).expect("page");
        assert_eq!(slice.meta.page_count, 3);
        assert_eq!(slice.meta.total, 12);
        stitched.extend(slice.rows);
        if !slice.meta.has_next {
            break;
        }
        page += 1;
    }
    assert_eq!(stitched, full, "no duplicates, no omissions, same order");
}

#[test]
fn pagination_window_respects_the_search_filter() {
    let conn = open_in_memory().expect("open");
    let (_, cs, _) = campus(&conn);
    for i in 0..7 {
        student(&conn, &format!("2023-1-{i:04}"), "Doe", &format!("J{i}"), &cs, 2023);
    }
    for i in 0..5 {
        student(&conn, &format!("2022-2-{i:04}"), "Cruz", &format!("M{i}"), &cs, 2022);
    }

    let page = list_students(&conn, Some("doe"), &PageRequest::new(2, 5)).expect("page");
    assert_eq!(page.meta.total, 7);
    assert_eq!(page.meta.page_count, 2);
    assert_eq!(page.rows.len(), 2);
    assert!(page.rows.iter().all(|s| s.lastname == "Doe"));
}

#[test]
fn dashboard_counts_mirror_table_sizes_and_current_year() {
    let conn = open_in_memory().expect("open");
    let (engineering, cs, _) = campus(&conn);
    student(&conn, "2023-3-0001", "Doe", "Jane", &cs, 2023);
    student(&conn, "2026-1-0002", "Cruz", "Maria", &cs, 2026);
    student(&conn, "2026-1-0003", "Lim", "Ana", &cs, 2026);
    crud::insert_organization(
        &conn,
        &NewOrganization::new("Robotics Club", engineering.id, "").expect("draft"),
    )
    .expect("org");

    let counts = dashboard_counts(&conn, 2026).expect("counts");
    assert_eq!(counts.total_students, 3);
    assert_eq!(counts.total_organizations, 1);
    assert_eq!(counts.total_colleges, 2);
    assert_eq!(counts.total_programs, 1);
    assert_eq!(counts.students_joined_this_year, 2);

    // A different "current year" changes only the year-scoped count.
    let other = dashboard_counts(&conn, 2023).expect("counts");
    assert_eq!(other.students_joined_this_year, 1);
    assert_eq!(other.total_students, 3);
}

/// The end-to-end scenario from the registry's acceptance checklist:
/// one college, program, student, organization and membership.
#[test]
fn single_membership_scenario() {
    let conn = open_in_memory().expect("open");
    let engineering = college(&conn, "Engineering");
    let cs = program(&conn, "CS", &engineering);
    let jane = student(&conn, "2023-3-0001", "Doe", "Jane", &cs, 2023);
    let robotics = crud::insert_organization(
        &conn,
        &NewOrganization::new("Robotics Club", engineering.id, "").expect("draft"),
    )
    .expect("org");
    crud::insert_org_member(
        &conn,
        &NewOrgMember::new(jane.id, robotics.id, date(2024, 1, 15)),
    )
    .expect("member");

    let found = list_students(&conn, Some("doe"), &WIDE).expect("list").rows;
    assert_eq!(found.len(), 1);
    assert_eq!(found[0].firstname, "Jane");
    assert_eq!(found[0].student_id, "2023-3-0001");

    let members = list_org_members(&conn, None, MemberSort::Date, &WIDE).expect("list").rows;
    assert_eq!(members.len(), 1);
    assert_eq!(members[0].organization_name, "Robotics Club");
    assert_eq!(members[0].date_joined, date(2024, 1, 15));

    let counts = dashboard_counts(&conn, 2026).expect("counts");
    assert_eq!(counts.total_students, 1);
    assert_eq!(counts.total_organizations, 1);
    assert_eq!(counts.total_colleges, 1);
    assert_eq!(counts.total_programs, 1);
}
