// SPDX-License-Identifier: Apache-2.0

//! Single-row CRUD over the five registry tables. Updates are full-record
//! replaces of the form-editable fields; `student.created_at` is stamped at
//! insert and never rewritten.

use crate::StoreError;
use chrono::{DateTime, Utc};
use orgtrack_model::{
    College, CollegeId, NewCollege, NewOrgMember, NewOrganization, NewProgram, NewStudent,
    OrgMember, OrgMemberId, Organization, OrganizationId, Program, ProgramId, Student, StudentId,
    StudentNumber,
};
use rusqlite::{params, Connection, Row};

fn college_from_row(row: &Row<'_>) -> rusqlite::Result<College> {
    Ok(College {
        id: CollegeId(row.get(0)?),
        name: row.get(1)?,
    })
}

fn program_from_row(row: &Row<'_>) -> rusqlite::Result<Program> {
    Ok(Program {
        id: ProgramId(row.get(0)?),
        name: row.get(1)?,
        college: CollegeId(row.get(2)?),
    })
}

fn student_from_row(row: &Row<'_>) -> rusqlite::Result<Student> {
    let number: String = row.get(1)?;
    let student_id = StudentNumber::parse(&number).map_err(|e| {
        rusqlite::Error::FromSqlConversionFailure(1, rusqlite::types::Type::Text, Box::new(e))
    })?;
    Ok(Student {
        id: StudentId(row.get(0)?),
        student_id,
        lastname: row.get(2)?,
        firstname: row.get(3)?,
        middlename: row.get(4)?,
        program: ProgramId(row.get(5)?),
        created_at: row.get(6)?,
    })
}

fn organization_from_row(row: &Row<'_>) -> rusqlite::Result<Organization> {
    Ok(Organization {
        id: OrganizationId(row.get(0)?),
        name: row.get(1)?,
        college: CollegeId(row.get(2)?),
        description: row.get(3)?,
    })
}

fn org_member_from_row(row: &Row<'_>) -> rusqlite::Result<OrgMember> {
    Ok(OrgMember {
        id: OrgMemberId(row.get(0)?),
        student: StudentId(row.get(1)?),
        organization: OrganizationId(row.get(2)?),
        date_joined: row.get(3)?,
    })
}

fn ensure_row_touched(rows: usize) -> Result<(), StoreError> {
    if rows == 0 {
        return Err(StoreError::NotFound);
    }
    Ok(())
}

pub fn insert_college(conn: &Connection, draft: &NewCollege) -> Result<College, StoreError> {
    conn.prepare_cached("INSERT INTO college (name) VALUES (?1)")?
        .execute(params![draft.name])?;
    get_college(conn, CollegeId(conn.last_insert_rowid()))
}

pub fn get_college(conn: &Connection, id: CollegeId) -> Result<College, StoreError> {
    conn.prepare_cached("SELECT id, name FROM college WHERE id = ?1")?
        .query_row(params![id.as_i64()], college_from_row)
        .map_err(StoreError::from)
}

pub fn update_college(
    conn: &Connection,
    id: CollegeId,
    draft: &NewCollege,
) -> Result<College, StoreError> {
    let rows = conn
        .prepare_cached("UPDATE college SET name = ?1 WHERE id = ?2")?
        .execute(params![draft.name, id.as_i64()])?;
    ensure_row_touched(rows)?;
    get_college(conn, id)
}

pub fn delete_college(conn: &Connection, id: CollegeId) -> Result<(), StoreError> {
    let rows = conn
        .prepare_cached("DELETE FROM college WHERE id = ?1")?
        .execute(params![id.as_i64()])?;
    ensure_row_touched(rows)
}

pub fn insert_program(conn: &Connection, draft: &NewProgram) -> Result<Program, StoreError> {
    conn.prepare_cached("INSERT INTO program (name, college_id) VALUES (?1, ?2)")?
        .execute(params![draft.name, draft.college.as_i64()])?;
    get_program(conn, ProgramId(conn.last_insert_rowid()))
}

pub fn get_program(conn: &Connection, id: ProgramId) -> Result<Program, StoreError> {
    conn.prepare_cached("SELECT id, name, college_id FROM program WHERE id = ?1")?
        .query_row(params![id.as_i64()], program_from_row)
        .map_err(StoreError::from)
}

pub fn update_program(
    conn: &Connection,
    id: ProgramId,
    draft: &NewProgram,
) -> Result<Program, StoreError> {
    let rows = conn
        .prepare_cached("UPDATE program SET name = ?1, college_id = ?2 WHERE id = ?3")?
        .execute(params![draft.name, draft.college.as_i64(), id.as_i64()])?;
    ensure_row_touched(rows)?;
    get_program(conn, id)
}

pub fn delete_program(conn: &Connection, id: ProgramId) -> Result<(), StoreError> {
    let rows = conn
        .prepare_cached("DELETE FROM program WHERE id = ?1")?
        .execute(params![id.as_i64()])?;
    ensure_row_touched(rows)
}

pub fn insert_student(
    conn: &Connection,
    draft: &NewStudent,
    created_at: DateTime<Utc>,
) -> Result<Student, StoreError> {
    conn.prepare_cached(
        "INSERT INTO student (student_id, lastname, firstname, middlename, program_id, created_at) \
         VALUES (?1, ?2, ?3, ?4, ?5, ?6)",
    )?
    .execute(params![
        draft.student_id.as_str(),
        draft.lastname,
        draft.firstname,
        draft.middlename,
        draft.program.as_i64(),
        created_at,
    ])?;
    get_student(conn, StudentId(conn.last_insert_rowid()))
}

pub fn get_student(conn: &Connection, id: StudentId) -> Result<Student, StoreError> {
    conn.prepare_cached(
        "SELECT id, student_id, lastname, firstname, middlename, program_id, created_at \
         FROM student WHERE id = ?1",
    )?
    .query_row(params![id.as_i64()], student_from_row)
    .map_err(StoreError::from)
}

pub fn update_student(
    conn: &Connection,
    id: StudentId,
    draft: &NewStudent,
) -> Result<Student, StoreError> {
    let rows = conn
        .prepare_cached(
            "UPDATE student SET student_id = ?1, lastname = ?2, firstname = ?3, \
             middlename = ?4, program_id = ?5 WHERE id = ?6",
        )?
        .execute(params![
            draft.student_id.as_str(),
            draft.lastname,
            draft.firstname,
            draft.middlename,
            draft.program.as_i64(),
            id.as_i64(),
        ])?;
    ensure_row_touched(rows)?;
    get_student(conn, id)
}

pub fn delete_student(conn: &Connection, id: StudentId) -> Result<(), StoreError> {
    let rows = conn
        .prepare_cached("DELETE FROM student WHERE id = ?1")?
        .execute(params![id.as_i64()])?;
    ensure_row_touched(rows)
}

pub fn insert_organization(
    conn: &Connection,
    draft: &NewOrganization,
) -> Result<Organization, StoreError> {
    conn.prepare_cached("INSERT INTO organization (name, college_id, description) VALUES (?1, ?2, ?3)")?
        .execute(params![
            draft.name,
            draft.college.as_i64(),
            draft.description,
        ])?;
    get_organization(conn, OrganizationId(conn.last_insert_rowid()))
}

pub fn get_organization(
    conn: &Connection,
    id: OrganizationId,
) -> Result<Organization, StoreError> {
    conn.prepare_cached("SELECT id, name, college_id, description FROM organization WHERE id = ?1")?
        .query_row(params![id.as_i64()], organization_from_row)
        .map_err(StoreError::from)
}

pub fn update_organization(
    conn: &Connection,
    id: OrganizationId,
    draft: &NewOrganization,
) -> Result<Organization, StoreError> {
    let rows = conn
        .prepare_cached(
            "UPDATE organization SET name = ?1, college_id = ?2, description = ?3 WHERE id = ?4",
        )?
        .execute(params![
            draft.name,
            draft.college.as_i64(),
            draft.description,
            id.as_i64(),
        ])?;
    ensure_row_touched(rows)?;
    get_organization(conn, id)
}

pub fn delete_organization(conn: &Connection, id: OrganizationId) -> Result<(), StoreError> {
    let rows = conn
        .prepare_cached("DELETE FROM organization WHERE id = ?1")?
        .execute(params![id.as_i64()])?;
    ensure_row_touched(rows)
}

pub fn insert_org_member(
    conn: &Connection,
    draft: &NewOrgMember,
) -> Result<OrgMember, StoreError> {
    conn.prepare_cached(
        "INSERT INTO org_member (student_id, organization_id, date_joined) VALUES (?1, ?2, ?3)",
    )?
    .execute(params![
        draft.student.as_i64(),
        draft.organization.as_i64(),
        draft.date_joined,
    ])?;
    get_org_member(conn, OrgMemberId(conn.last_insert_rowid()))
}

pub fn get_org_member(conn: &Connection, id: OrgMemberId) -> Result<OrgMember, StoreError> {
    conn.prepare_cached(
        "SELECT id, student_id, organization_id, date_joined FROM org_member WHERE id = ?1",
    )?
    .query_row(params![id.as_i64()], org_member_from_row)
    .map_err(StoreError::from)
}

pub fn update_org_member(
    conn: &Connection,
    id: OrgMemberId,
    draft: &NewOrgMember,
) -> Result<OrgMember, StoreError> {
    let rows = conn
        .prepare_cached(
            "UPDATE org_member SET student_id = ?1, organization_id = ?2, date_joined = ?3 \
             WHERE id = ?4",
        )?
        .execute(params![
            draft.student.as_i64(),
            draft.organization.as_i64(),
            draft.date_joined,
            id.as_i64(),
        ])?;
    ensure_row_touched(rows)?;
    get_org_member(conn, id)
}

pub fn delete_org_member(conn: &Connection, id: OrgMemberId) -> Result<(), StoreError> {
    let rows = conn
        .prepare_cached("DELETE FROM org_member WHERE id = ?1")?
        .execute(params![id.as_i64()])?;
    ensure_row_touched(rows)
}
