use crate::ids::{CollegeId, OrgMemberId, OrganizationId, ProgramId, StudentId};
use crate::student_number::StudentNumber;
use crate::validate::{parse_optional_text, parse_required_text, ValidationError};
use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct College {
    pub id: CollegeId,
    pub name: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NewCollege {
    pub name: String,
}

impl NewCollege {
    pub fn new(name: &str) -> Result<Self, ValidationError> {
        Ok(Self {
            name: parse_required_text("name", name)?,
        })
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Program {
    pub id: ProgramId,
    pub name: String,
    pub college: CollegeId,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NewProgram {
    pub name: String,
    pub college: CollegeId,
}

impl NewProgram {
    pub fn new(name: &str, college: CollegeId) -> Result<Self, ValidationError> {
        Ok(Self {
            name: parse_required_text("name", name)?,
            college,
        })
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Student {
    pub id: StudentId,
    pub student_id: StudentNumber,
    pub lastname: String,
    pub firstname: String,
    pub middlename: String,
    pub program: ProgramId,
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NewStudent {
    pub student_id: StudentNumber,
    pub lastname: String,
    pub firstname: String,
    pub middlename: String,
    pub program: ProgramId,
}

impl NewStudent {
    pub fn new(
        student_id: &str,
        lastname: &str,
        firstname: &str,
        middlename: &str,
        program: ProgramId,
    ) -> Result<Self, ValidationError> {
        Ok(Self {
            student_id: StudentNumber::parse(student_id)?,
            lastname: parse_required_text("lastname", lastname)?,
            firstname: parse_required_text("firstname", firstname)?,
            middlename: parse_optional_text(middlename),
            program,
        })
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Organization {
    pub id: OrganizationId,
    pub name: String,
    pub college: CollegeId,
    pub description: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NewOrganization {
    pub name: String,
    pub college: CollegeId,
    pub description: String,
}

impl NewOrganization {
    pub fn new(name: &str, college: CollegeId, description: &str) -> Result<Self, ValidationError> {
        Ok(Self {
            name: parse_required_text("name", name)?,
            college,
            description: parse_optional_text(description),
        })
    }
}

/// Membership of one student in one organization. The same (student,
/// organization) pair may recur across dates; there is no uniqueness
/// constraint on it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OrgMember {
    pub id: OrgMemberId,
    pub student: StudentId,
    pub organization: OrganizationId,
    pub date_joined: NaiveDate,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NewOrgMember {
    pub student: StudentId,
    pub organization: OrganizationId,
    pub date_joined: NaiveDate,
}

impl NewOrgMember {
    #[must_use]
    pub fn new(student: StudentId, organization: OrganizationId, date_joined: NaiveDate) -> Self {
        Self {
            student,
            organization,
            date_joined,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_student_normalizes_optional_middlename() {
        let draft = NewStudent::new("2023-3-0001", "Doe", "Jane", "  ", ProgramId(1)).expect("valid");
        assert_eq!(draft.middlename, "");
        assert_eq!(draft.student_id.as_str(), "2023-3-0001");
    }

    #[test]
    fn new_student_surfaces_field_of_first_rejection() {
        let err = NewStudent::new("2023-3-0001", "", "Jane", "", ProgramId(1)).expect_err("empty");
        assert_eq!(err.field, "lastname");
    }

    #[test]
    fn new_organization_keeps_empty_description() {
        let draft = NewOrganization::new("Robotics Club", CollegeId(1), "").expect("valid");
        assert_eq!(draft.description, "");
    }
}
