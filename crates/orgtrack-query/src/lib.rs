#![forbid(unsafe_code)]

//! List-query construction for the registry's five entity lists.
//!
//! Each list is built the same way: an optional free-text search term is
//! turned into a case-insensitive substring predicate OR'd across that
//! entity's searchable columns, a fixed (or token-selected, for OrgMember)
//! ordering with an `id` tiebreak is appended, and the result is sliced
//! into pages with a companion COUNT over the same predicate. Queries are
//! stateless reads; nothing here caches.

mod dashboard;
mod db;
mod executor;
mod filters;
mod pagination;
mod rows;

pub use dashboard::{dashboard_counts, DashboardCounts};
pub use db::{
    college_list_sql, member_list_sql, organization_list_sql, program_list_sql, student_list_sql,
    ListSql,
};
pub use executor::{
    list_colleges, list_org_members, list_organizations, list_programs, list_students, QueryError,
};
pub use filters::{effective_term, escape_like_term, like_pattern, normalize_search_term, MemberSort};
pub use pagination::{page_window, Page, PageMeta, PageRequest, PageWindow};
pub use rows::{CollegeRow, OrgMemberRow, OrganizationRow, ProgramRow, StudentRow};

pub const CRATE_NAME: &str = "orgtrack-query";
