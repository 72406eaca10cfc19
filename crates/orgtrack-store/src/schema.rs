// SPDX-License-Identifier: Apache-2.0

use crate::StoreError;
use rusqlite::Connection;
use std::path::Path;

pub const SCHEMA_VERSION: i64 = 1;

/// Full registry DDL. Foreign keys carry an explicit `ON DELETE RESTRICT`
/// so a delete of a still-referenced row fails instead of cascading; the
/// policy is declared here rather than left to engine defaults.
pub const SCHEMA_SQL: &str = "
    CREATE TABLE college (
      id INTEGER PRIMARY KEY,
      name TEXT NOT NULL,
      UNIQUE(name)
    );
    CREATE TABLE program (
      id INTEGER PRIMARY KEY,
      name TEXT NOT NULL,
      college_id INTEGER NOT NULL REFERENCES college(id) ON DELETE RESTRICT
    );
    CREATE TABLE student (
      id INTEGER PRIMARY KEY,
      student_id TEXT NOT NULL UNIQUE,
      lastname TEXT NOT NULL,
      firstname TEXT NOT NULL,
      middlename TEXT NOT NULL DEFAULT '',
      program_id INTEGER NOT NULL REFERENCES program(id) ON DELETE RESTRICT,
      created_at TEXT NOT NULL
    );
    CREATE TABLE organization (
      id INTEGER PRIMARY KEY,
      name TEXT NOT NULL,
      college_id INTEGER NOT NULL REFERENCES college(id) ON DELETE RESTRICT,
      description TEXT NOT NULL DEFAULT ''
    );
    CREATE TABLE org_member (
      id INTEGER PRIMARY KEY,
      student_id INTEGER NOT NULL REFERENCES student(id) ON DELETE RESTRICT,
      organization_id INTEGER NOT NULL REFERENCES organization(id) ON DELETE RESTRICT,
      date_joined TEXT NOT NULL
    );
    CREATE INDEX idx_program_college ON program(college_id);
    CREATE INDEX idx_student_program ON student(program_id);
    CREATE INDEX idx_organization_college ON organization(college_id);
    CREATE INDEX idx_org_member_student ON org_member(student_id);
    CREATE INDEX idx_org_member_organization ON org_member(organization_id);
    CREATE INDEX idx_org_member_date ON org_member(date_joined);
";

/// Opens (creating if necessary) the registry database at `path` and
/// ensures the schema is present.
pub fn open_registry(path: &Path) -> Result<Connection, StoreError> {
    let conn = Connection::open(path).map_err(StoreError::from)?;
    prepare_connection(&conn)?;
    Ok(conn)
}

/// In-memory registry for tests and ephemeral runs.
pub fn open_in_memory() -> Result<Connection, StoreError> {
    let conn = Connection::open_in_memory().map_err(StoreError::from)?;
    prepare_connection(&conn)?;
    Ok(conn)
}

fn prepare_connection(conn: &Connection) -> Result<(), StoreError> {
    conn.execute_batch(
        "
        PRAGMA foreign_keys=ON;
        PRAGMA journal_mode=WAL;
        PRAGMA synchronous=NORMAL;
        PRAGMA busy_timeout=5000;
        ",
    )
    .map_err(StoreError::from)?;
    ensure_schema(conn)
}

fn ensure_schema(conn: &Connection) -> Result<(), StoreError> {
    let user_version: i64 = conn
        .query_row("PRAGMA user_version", [], |row| row.get(0))
        .map_err(StoreError::from)?;
    if user_version >= SCHEMA_VERSION {
        return Ok(());
    }
    conn.execute_batch(SCHEMA_SQL).map_err(StoreError::from)?;
    conn.execute_batch(&format!("PRAGMA user_version={SCHEMA_VERSION};"))
        .map_err(StoreError::from)?;
    Ok(())
}
