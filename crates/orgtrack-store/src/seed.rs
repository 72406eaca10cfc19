// SPDX-License-Identifier: Apache-2.0

//! Development fixtures. Inserts colleges and programs first so every
//! generated reference points at an existing row, then organizations,
//! students and memberships in the proportions the registry is normally
//! exercised with. The RNG seed is explicit so tests get stable data.

use crate::{crud, StoreError};
use chrono::{DateTime, Days, Utc};
use orgtrack_model::{
    CollegeId, NewCollege, NewOrgMember, NewOrganization, NewProgram, NewStudent, OrganizationId,
    ProgramId, StudentId,
};
use rusqlite::Connection;
use serde::Serialize;
use std::collections::HashSet;

const COLLEGE_NAMES: [&str; 8] = [
    "College of Engineering",
    "College of Arts and Sciences",
    "College of Business Administration",
    "College of Nursing",
    "College of Education",
    "College of Law",
    "College of Agriculture",
    "College of Architecture",
];

const PROGRAM_NAMES: [&str; 14] = [
    "Computer Science",
    "Information Technology",
    "Civil Engineering",
    "Electrical Engineering",
    "Mechanical Engineering",
    "Accountancy",
    "Marketing Management",
    "Nursing",
    "Secondary Education",
    "Elementary Education",
    "Psychology",
    "Biology",
    "Mathematics",
    "English Studies",
];

const ORG_WORDS: [&str; 20] = [
    "robotics", "debate", "chess", "glee", "drama", "outreach", "heritage", "research", "varsity",
    "esports", "film", "writers", "coders", "science", "culture", "service", "music", "sports",
    "media", "innovation",
];

const ORG_SUFFIXES: [&str; 6] = ["Club", "Society", "Circle", "Guild", "League", "Council"];

const ORG_SENTENCES: [&str; 8] = [
    "Brings students together around a shared craft.",
    "Runs weekly workshops and an annual campus showcase.",
    "Represents the university in regional competitions.",
    "Organizes outreach programs in partner communities.",
    "Hosts talks and mentoring sessions with alumni.",
    "Maintains student-led projects across departments.",
    "Welcomes members from every college and year level.",
    "Coordinates volunteer work during university events.",
];

const LAST_NAMES: [&str; 24] = [
    "Santos",
    "Reyes",
    "Cruz",
    "Bautista",
    "Ocampo",
    "Garcia",
    "Mendoza",
    "Torres",
    "Tomas",
    "Andrada",
    "Castillo",
    "Flores",
    "Villanueva",
    "Ramos",
    "Castro",
    "Rivera",
    "Aquino",
    "Navarro",
    "Domingo",
    "Salazar",
    "Mercado",
    "Aguilar",
    "De Leon",
    "Del Rosario",
];

const FIRST_NAMES: [&str; 24] = [
    "Jose", "Maria", "Juan", "Ana", "Andres", "Clara", "Emilio", "Luz", "Ramon", "Teresa",
    "Carlos", "Rosa", "Miguel", "Isabel", "Antonio", "Corazon", "Diego", "Liza", "Paolo",
    "Marites", "Rafael", "Imelda", "Nicanor", "Angel",
];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SeedPlan {
    pub colleges: usize,
    pub programs: usize,
    pub organizations: usize,
    pub students: usize,
    pub members: usize,
}

impl Default for SeedPlan {
    fn default() -> Self {
        Self {
            colleges: 5,
            programs: 12,
            organizations: 10,
            students: 50,
            members: 10,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct SeedSummary {
    pub colleges: usize,
    pub programs: usize,
    pub organizations: usize,
    pub students: usize,
    pub members: usize,
}

/// Populates the registry. `now` drives both `created_at` stamps and the
/// two-year window that membership join dates are drawn from.
pub fn seed_registry(
    conn: &Connection,
    plan: &SeedPlan,
    rng_seed: u64,
    now: DateTime<Utc>,
) -> Result<SeedSummary, StoreError> {
    let mut rng = fastrand::Rng::with_seed(rng_seed);
    let today = now.date_naive();

    let mut college_ids: Vec<CollegeId> = Vec::with_capacity(plan.colleges);
    for i in 0..plan.colleges {
        let name = COLLEGE_NAMES.get(i).map_or_else(
            || format!("College of Applied Studies {}", i + 1),
            |n| (*n).to_string(),
        );
        let college = crud::insert_college(conn, &NewCollege::new(&name)?)?;
        college_ids.push(college.id);
    }

    let mut program_ids: Vec<ProgramId> = Vec::with_capacity(plan.programs);
    for i in 0..plan.programs {
        let name = PROGRAM_NAMES.get(i).map_or_else(
            || format!("Interdisciplinary Studies {}", i + 1),
            |n| (*n).to_string(),
        );
        let college = college_ids[rng.usize(0..college_ids.len())];
        let program = crud::insert_program(conn, &NewProgram::new(&name, college)?)?;
        program_ids.push(program.id);
    }

    let mut organization_ids: Vec<OrganizationId> = Vec::with_capacity(plan.organizations);
    for _ in 0..plan.organizations {
        let name = random_org_name(&mut rng);
        let college = college_ids[rng.usize(0..college_ids.len())];
        let description = ORG_SENTENCES[rng.usize(0..ORG_SENTENCES.len())];
        let draft = NewOrganization::new(&name, college, description)?;
        let organization = crud::insert_organization(conn, &draft)?;
        organization_ids.push(organization.id);
    }

    let mut student_ids: Vec<StudentId> = Vec::with_capacity(plan.students);
    let mut issued_numbers: HashSet<String> = HashSet::with_capacity(plan.students);
    for _ in 0..plan.students {
        let number = random_student_number(&mut rng, &mut issued_numbers);
        let lastname = LAST_NAMES[rng.usize(0..LAST_NAMES.len())];
        let firstname = FIRST_NAMES[rng.usize(0..FIRST_NAMES.len())];
        let middlename = LAST_NAMES[rng.usize(0..LAST_NAMES.len())];
        let program = program_ids[rng.usize(0..program_ids.len())];
        let draft = NewStudent::new(&number, lastname, firstname, middlename, program)?;
        let student = crud::insert_student(conn, &draft, now)?;
        student_ids.push(student.id);
    }

    for _ in 0..plan.members {
        let student = student_ids[rng.usize(0..student_ids.len())];
        let organization = organization_ids[rng.usize(0..organization_ids.len())];
        let date_joined = today
            .checked_sub_days(Days::new(rng.u64(0..=730)))
            .unwrap_or(today);
        crud::insert_org_member(conn, &NewOrgMember::new(student, organization, date_joined))?;
    }

    Ok(SeedSummary {
        colleges: college_ids.len(),
        programs: program_ids.len(),
        organizations: organization_ids.len(),
        students: student_ids.len(),
        members: plan.members,
    })
}

fn random_org_name(rng: &mut fastrand::Rng) -> String {
    let first = ORG_WORDS[rng.usize(0..ORG_WORDS.len())];
    let suffix = ORG_SUFFIXES[rng.usize(0..ORG_SUFFIXES.len())];
    format!("{} {suffix}", title_case(first))
}

fn title_case(word: &str) -> String {
    let mut chars = word.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().collect::<String>() + chars.as_str(),
        None => String::new(),
    }
}

fn random_student_number(rng: &mut fastrand::Rng, issued: &mut HashSet<String>) -> String {
    loop {
        let number = format!(
            "{}-{}-{:04}",
            rng.i32(2020..=2025),
            rng.u32(1..=8),
            rng.u32(0..=9999)
        );
        if issued.insert(number.clone()) {
            return number;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::schema::open_in_memory;
    use chrono::TimeZone;

    #[test]
    fn seeded_registry_is_referentially_valid() {
        let conn = open_in_memory().expect("open");
        let now = Utc.with_ymd_and_hms(2026, 8, 1, 12, 0, 0).single().expect("ts");
        let summary =
            seed_registry(&conn, &SeedPlan::default(), 7, now).expect("seed");
        assert_eq!(summary.students, 50);
        assert_eq!(summary.organizations, 10);
        assert_eq!(summary.members, 10);

        // RESTRICT FKs mean a dangling reference cannot exist, but check the
        // join dates landed inside the two-year window too.
        let out_of_window: i64 = conn
            .query_row(
                "SELECT COUNT(*) FROM org_member WHERE date_joined < '2024-08-01' OR date_joined > '2026-08-01'",
                [],
                |row| row.get(0),
            )
            .expect("count");
        assert_eq!(out_of_window, 0);
    }

    #[test]
    fn seeding_is_deterministic_for_a_fixed_seed() {
        let now = Utc.with_ymd_and_hms(2026, 8, 1, 12, 0, 0).single().expect("ts");
        let snapshot = |seed: u64| -> Vec<String> {
            let conn = open_in_memory().expect("open");
            seed_registry(&conn, &SeedPlan::default(), seed, now).expect("seed");
            let mut stmt = conn
                .prepare("SELECT student_id || ' ' || lastname FROM student ORDER BY id")
                .expect("stmt");
            let rows = stmt
                .query_map([], |row| row.get::<_, String>(0))
                .expect("query")
                .collect::<Result<Vec<_>, _>>()
                .expect("rows");
            rows
        };
        assert_eq!(snapshot(42), snapshot(42));
        assert_ne!(snapshot(42), snapshot(43));
    }
}
