#![forbid(unsafe_code)]

//! Domain records for the orgtrack registry.
//!
//! Five persisted record types: [`College`], [`Program`], [`Student`],
//! [`Organization`] and the [`OrgMember`] join record, plus the draft
//! (`New*`) forms that CRUD operations accept. Validation lives here so
//! every caller — HTTP forms, the seed generator, tests — goes through the
//! same field rules.

mod ids;
mod records;
mod student_number;
mod validate;

pub use ids::{CollegeId, OrgMemberId, OrganizationId, ProgramId, StudentId};
pub use records::{
    College, NewCollege, NewOrgMember, NewOrganization, NewProgram, NewStudent, OrgMember,
    Organization, Program, Student,
};
pub use student_number::StudentNumber;
pub use validate::{parse_optional_text, parse_required_text, ValidationError};

pub const CRATE_NAME: &str = "orgtrack-model";
