// SPDX-License-Identifier: Apache-2.0

use crate::executor::QueryError;
use rusqlite::{params, Connection};
use serde::{Deserialize, Serialize};

/// Request-time aggregate counts for the dashboard. Always recomputed;
/// the registry keeps no derived state.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct DashboardCounts {
    pub total_students: u64,
    pub total_organizations: u64,
    pub total_colleges: u64,
    pub total_programs: u64,
    pub students_joined_this_year: u64,
}

fn count_all(conn: &Connection, sql: &str) -> Result<u64, QueryError> {
    let n: i64 = conn.prepare_cached(sql)?.query_row([], |row| row.get(0))?;
    Ok(n.max(0) as u64)
}

/// `current_year` is the UTC calendar year, passed in from the clock at the
/// edge; `created_at` is stored as RFC 3339 UTC text, so the year prefix is
/// directly comparable.
pub fn dashboard_counts(
    conn: &Connection,
    current_year: i32,
) -> Result<DashboardCounts, QueryError> {
    let joined_this_year: i64 = conn
        .prepare_cached("SELECT COUNT(*) FROM student WHERE strftime('%Y', created_at) = ?1")?
        .query_row(params![format!("{current_year:04}")], |row| row.get(0))?;
    Ok(DashboardCounts {
        total_students: count_all(conn, "SELECT COUNT(*) FROM student")?,
        total_organizations: count_all(conn, "SELECT COUNT(*) FROM organization")?,
        total_colleges: count_all(conn, "SELECT COUNT(*) FROM college")?,
        total_programs: count_all(conn, "SELECT COUNT(*) FROM program")?,
        students_joined_this_year: joined_this_year.max(0) as u64,
    })
}
