// SPDX-License-Identifier: Apache-2.0

use crate::db::{
    college_list_sql, member_list_sql, organization_list_sql, program_list_sql, student_list_sql,
    ListSql,
};
use crate::filters::{effective_term, MemberSort};
use crate::pagination::{page_window, Page, PageRequest};
use crate::rows::{
    college_row, org_member_row, organization_row, program_row, student_row, CollegeRow,
    OrgMemberRow, OrganizationRow, ProgramRow, StudentRow,
};
use rusqlite::{params_from_iter, types::Value, Connection, Row};
use std::fmt::{Display, Formatter};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum QueryError {
    Sql(String),
}

impl Display for QueryError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Sql(msg) => f.write_str(msg),
        }
    }
}

impl std::error::Error for QueryError {}

impl From<rusqlite::Error> for QueryError {
    fn from(err: rusqlite::Error) -> Self {
        Self::Sql(err.to_string())
    }
}

fn run_list<T>(
    conn: &Connection,
    sql: ListSql,
    page: &PageRequest,
    map: fn(&Row<'_>) -> rusqlite::Result<T>,
) -> Result<Page<T>, QueryError> {
    let total: i64 = conn
        .prepare_cached(&sql.count_sql)?
        .query_row(params_from_iter(sql.params.iter()), |row| row.get(0))?;
    let window = page_window(total.max(0) as u64, page);

    let mut params = sql.params;
    params.push(Value::Integer(window.meta.page_size as i64));
    params.push(Value::Integer(window.offset as i64));

    let paged_sql = format!("{} LIMIT ? OFFSET ?", sql.select_sql);
    let mut stmt = conn.prepare_cached(&paged_sql)?;
    let rows = stmt
        .query_map(params_from_iter(params.iter()), map)?
        .collect::<Result<Vec<_>, _>>()?;

    Ok(Page {
        rows,
        meta: window.meta,
    })
}

pub fn list_organizations(
    conn: &Connection,
    q: Option<&str>,
    page: &PageRequest,
) -> Result<Page<OrganizationRow>, QueryError> {
    run_list(conn, organization_list_sql(effective_term(q)), page, organization_row)
}

pub fn list_students(
    conn: &Connection,
    q: Option<&str>,
    page: &PageRequest,
) -> Result<Page<StudentRow>, QueryError> {
    run_list(conn, student_list_sql(effective_term(q)), page, student_row)
}

pub fn list_colleges(
    conn: &Connection,
    q: Option<&str>,
    page: &PageRequest,
) -> Result<Page<CollegeRow>, QueryError> {
    run_list(conn, college_list_sql(effective_term(q)), page, college_row)
}

pub fn list_programs(
    conn: &Connection,
    q: Option<&str>,
    page: &PageRequest,
) -> Result<Page<ProgramRow>, QueryError> {
    run_list(conn, program_list_sql(effective_term(q)), page, program_row)
}

pub fn list_org_members(
    conn: &Connection,
    q: Option<&str>,
    sort: MemberSort,
    page: &PageRequest,
) -> Result<Page<OrgMemberRow>, QueryError> {
    run_list(conn, member_list_sql(effective_term(q), sort), page, org_member_row)
}
