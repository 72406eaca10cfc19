// SPDX-License-Identifier: Apache-2.0

//! Per-entity SQL construction: a SELECT with the entity's predicate and
//! ordering, plus a companion COUNT over the same predicate. Both share one
//! parameter vector; the executor appends LIMIT/OFFSET.

use crate::filters::{like_pattern, MemberSort};
use rusqlite::types::Value;

#[derive(Debug, Clone, PartialEq)]
pub struct ListSql {
    pub select_sql: String,
    pub count_sql: String,
    pub params: Vec<Value>,
}

/// `(LOWER(a) LIKE ? ESCAPE '!' OR LOWER(b) LIKE ? ESCAPE '!' ...)` — one
/// pattern parameter per column, inclusive OR across all of them.
fn contains_any(columns: &[&str], term: &str, params: &mut Vec<Value>) -> String {
    let pattern = like_pattern(term);
    let parts: Vec<String> = columns
        .iter()
        .map(|col| {
            params.push(Value::Text(pattern.clone()));
            format!("LOWER({col}) LIKE ? ESCAPE '!'")
        })
        .collect();
    format!("({})", parts.join(" OR "))
}

/// Organization list: search over name and description, fixed ordering by
/// owning college then organization name.
#[must_use]
pub fn organization_list_sql(term: Option<&str>) -> ListSql {
    let base = "FROM organization o JOIN college c ON c.id = o.college_id";
    let mut params = Vec::new();
    let where_clause = term.map(|t| contains_any(&["o.name", "o.description"], t, &mut params));
    assemble(
        "SELECT o.id, o.name, o.college_id, c.name, o.description",
        base,
        where_clause,
        "ORDER BY c.name ASC, o.name ASC, o.id ASC",
        params,
    )
}

/// Student list: search over lastname, firstname and the school-issued
/// number; explicit primary-key ordering.
#[must_use]
pub fn student_list_sql(term: Option<&str>) -> ListSql {
    let base = "FROM student s JOIN program p ON p.id = s.program_id";
    let mut params = Vec::new();
    let where_clause =
        term.map(|t| contains_any(&["s.lastname", "s.firstname", "s.student_id"], t, &mut params));
    assemble(
        "SELECT s.id, s.student_id, s.lastname, s.firstname, s.middlename, s.program_id, p.name, s.created_at",
        base,
        where_clause,
        "ORDER BY s.id ASC",
        params,
    )
}

#[must_use]
pub fn college_list_sql(term: Option<&str>) -> ListSql {
    let mut params = Vec::new();
    let where_clause = term.map(|t| contains_any(&["name"], t, &mut params));
    assemble(
        "SELECT id, name",
        "FROM college",
        where_clause,
        "ORDER BY id ASC",
        params,
    )
}

/// Program list: search matches the program name or the owning college's
/// name; always ordered by program name.
#[must_use]
pub fn program_list_sql(term: Option<&str>) -> ListSql {
    let base = "FROM program p JOIN college c ON c.id = p.college_id";
    let mut params = Vec::new();
    let where_clause = term.map(|t| contains_any(&["p.name", "c.name"], t, &mut params));
    assemble(
        "SELECT p.id, p.name, p.college_id, c.name",
        base,
        where_clause,
        "ORDER BY p.name ASC, p.id ASC",
        params,
    )
}

/// OrgMember list: search matches the member's name or the organization
/// name; ordering selected by the `sort_by` token.
#[must_use]
pub fn member_list_sql(term: Option<&str>, sort: MemberSort) -> ListSql {
    let base = "FROM org_member m \
                JOIN student s ON s.id = m.student_id \
                JOIN organization o ON o.id = m.organization_id";
    let mut params = Vec::new();
    let where_clause =
        term.map(|t| contains_any(&["s.lastname", "s.firstname", "o.name"], t, &mut params));
    let order = match sort {
        MemberSort::Name => "ORDER BY s.lastname ASC, s.firstname ASC, m.id ASC",
        MemberSort::NameDesc => "ORDER BY s.lastname DESC, s.firstname DESC, m.id ASC",
        MemberSort::Date => "ORDER BY m.date_joined ASC, m.id ASC",
    };
    assemble(
        "SELECT m.id, m.student_id, s.student_id, s.lastname, s.firstname, \
         m.organization_id, o.name, m.date_joined",
        base,
        where_clause,
        order,
        params,
    )
}

fn assemble(
    select: &str,
    base: &str,
    where_clause: Option<String>,
    order: &str,
    params: Vec<Value>,
) -> ListSql {
    let where_sql = where_clause.map_or_else(String::new, |w| format!(" WHERE {w}"));
    ListSql {
        select_sql: format!("{select} {base}{where_sql} {order}"),
        count_sql: format!("SELECT COUNT(*) {base}{where_sql}"),
        params,
    }
}
