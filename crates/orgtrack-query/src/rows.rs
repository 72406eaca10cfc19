//! Wire-ready list rows. Related display columns (college, program,
//! student, organization names) are joined in so a list page renders
//! without follow-up lookups.

use chrono::{DateTime, NaiveDate, Utc};
use orgtrack_model::{CollegeId, OrgMemberId, OrganizationId, ProgramId, StudentId};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CollegeRow {
    pub id: CollegeId,
    pub name: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProgramRow {
    pub id: ProgramId,
    pub name: String,
    pub college: CollegeId,
    pub college_name: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StudentRow {
    pub id: StudentId,
    pub student_id: String,
    pub lastname: String,
    pub firstname: String,
    pub middlename: String,
    pub program: ProgramId,
    pub program_name: String,
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OrganizationRow {
    pub id: OrganizationId,
    pub name: String,
    pub college: CollegeId,
    pub college_name: String,
    pub description: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OrgMemberRow {
    pub id: OrgMemberId,
    pub student: StudentId,
    pub student_number: String,
    pub student_lastname: String,
    pub student_firstname: String,
    pub organization: OrganizationId,
    pub organization_name: String,
    pub date_joined: NaiveDate,
}

pub(crate) fn college_row(row: &rusqlite::Row<'_>) -> rusqlite::Result<CollegeRow> {
    Ok(CollegeRow {
        id: CollegeId(row.get(0)?),
        name: row.get(1)?,
    })
}

pub(crate) fn program_row(row: &rusqlite::Row<'_>) -> rusqlite::Result<ProgramRow> {
    Ok(ProgramRow {
        id: ProgramId(row.get(0)?),
        name: row.get(1)?,
        college: CollegeId(row.get(2)?),
        college_name: row.get(3)?,
    })
}

pub(crate) fn student_row(row: &rusqlite::Row<'_>) -> rusqlite::Result<StudentRow> {
    Ok(StudentRow {
        id: StudentId(row.get(0)?),
        student_id: row.get(1)?,
        lastname: row.get(2)?,
        firstname: row.get(3)?,
        middlename: row.get(4)?,
        program: ProgramId(row.get(5)?),
        program_name: row.get(6)?,
        created_at: row.get(7)?,
    })
}

pub(crate) fn organization_row(row: &rusqlite::Row<'_>) -> rusqlite::Result<OrganizationRow> {
    Ok(OrganizationRow {
        id: OrganizationId(row.get(0)?),
        name: row.get(1)?,
        college: CollegeId(row.get(2)?),
        college_name: row.get(3)?,
        description: row.get(4)?,
    })
}

pub(crate) fn org_member_row(row: &rusqlite::Row<'_>) -> rusqlite::Result<OrgMemberRow> {
    Ok(OrgMemberRow {
        id: OrgMemberId(row.get(0)?),
        student: StudentId(row.get(1)?),
        student_number: row.get(2)?,
        student_lastname: row.get(3)?,
        student_firstname: row.get(4)?,
        organization: OrganizationId(row.get(5)?),
        organization_name: row.get(6)?,
        date_joined: row.get(7)?,
    })
}
