// SPDX-License-Identifier: Apache-2.0

//! Statically declared form field lists and form-payload validation.
//!
//! Every column the original forms exposed is declared here explicitly —
//! one list per entity, no runtime reflection. Validation accumulates
//! field-level errors so a rejected submission reports every bad field at
//! once, and a missing field is reported as a field error rather than a
//! body-decoding failure (fields default to the empty string).

use crate::dto::{FormDescriptorDto, FormFieldDto};
use crate::errors::ApiError;
use chrono::NaiveDate;
use orgtrack_model::{
    parse_optional_text, parse_required_text, CollegeId, NewCollege, NewOrgMember,
    NewOrganization, NewProgram, NewStudent, OrganizationId, ProgramId, StudentId, StudentNumber,
    ValidationError,
};
use serde::Deserialize;
use serde_json::{json, Value};

fn descriptor(entity: &str, fields: Vec<FormFieldDto>) -> FormDescriptorDto {
    FormDescriptorDto {
        entity: entity.to_string(),
        fields,
    }
}

#[must_use]
pub fn college_form_descriptor() -> FormDescriptorDto {
    descriptor("college", vec![FormFieldDto::new("name", "text", true)])
}

#[must_use]
pub fn program_form_descriptor() -> FormDescriptorDto {
    descriptor(
        "program",
        vec![
            FormFieldDto::new("name", "text", true),
            FormFieldDto::new("college", "reference", true),
        ],
    )
}

#[must_use]
pub fn student_form_descriptor() -> FormDescriptorDto {
    descriptor(
        "student",
        vec![
            FormFieldDto::new("student_id", "text", true),
            FormFieldDto::new("lastname", "text", true),
            FormFieldDto::new("firstname", "text", true),
            FormFieldDto::new("middlename", "text", false),
            FormFieldDto::new("program", "reference", true),
        ],
    )
}

#[must_use]
pub fn organization_form_descriptor() -> FormDescriptorDto {
    descriptor(
        "organization",
        vec![
            FormFieldDto::new("name", "text", true),
            FormFieldDto::new("college", "reference", true),
            FormFieldDto::new("description", "text", false),
        ],
    )
}

#[must_use]
pub fn org_member_form_descriptor() -> FormDescriptorDto {
    descriptor(
        "orgmember",
        vec![
            FormFieldDto::new("student", "reference", true),
            FormFieldDto::new("organization", "reference", true),
            FormFieldDto::new("date_joined", "date", true),
        ],
    )
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct CollegeForm {
    #[serde(default)]
    pub name: String,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct ProgramForm {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub college: String,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct StudentForm {
    #[serde(default)]
    pub student_id: String,
    #[serde(default)]
    pub lastname: String,
    #[serde(default)]
    pub firstname: String,
    #[serde(default)]
    pub middlename: String,
    #[serde(default)]
    pub program: String,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct OrganizationForm {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub college: String,
    #[serde(default)]
    pub description: String,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct OrgMemberForm {
    #[serde(default)]
    pub student: String,
    #[serde(default)]
    pub organization: String,
    #[serde(default)]
    pub date_joined: String,
}

fn field<T>(errors: &mut Vec<Value>, result: Result<T, ValidationError>) -> Option<T> {
    match result {
        Ok(value) => Some(value),
        Err(err) => {
            errors.push(json!({"field": err.field, "reason": err.reason}));
            None
        }
    }
}

fn parse_reference(name: &'static str, raw: &str) -> Result<i64, ValidationError> {
    let s = raw.trim();
    if s.is_empty() {
        return Err(ValidationError::new(name, "must not be empty"));
    }
    s.parse::<i64>()
        .map_err(|_| ValidationError::new(name, "must be a numeric id"))
}

fn parse_date(name: &'static str, raw: &str) -> Result<NaiveDate, ValidationError> {
    let s = raw.trim();
    if s.is_empty() {
        return Err(ValidationError::new(name, "must not be empty"));
    }
    NaiveDate::parse_from_str(s, "%Y-%m-%d")
        .map_err(|_| ValidationError::new(name, "must be a YYYY-MM-DD date"))
}

pub fn validate_college_form(form: &CollegeForm) -> Result<NewCollege, ApiError> {
    let mut errors = Vec::new();
    let name = field(&mut errors, parse_required_text("name", &form.name));
    match name {
        Some(name) if errors.is_empty() => Ok(NewCollege { name }),
        _ => Err(ApiError::validation_failed(Value::Array(errors))),
    }
}

pub fn validate_program_form(form: &ProgramForm) -> Result<NewProgram, ApiError> {
    let mut errors = Vec::new();
    let name = field(&mut errors, parse_required_text("name", &form.name));
    let college = field(&mut errors, parse_reference("college", &form.college));
    match (name, college) {
        (Some(name), Some(college)) if errors.is_empty() => Ok(NewProgram {
            name,
            college: CollegeId(college),
        }),
        _ => Err(ApiError::validation_failed(Value::Array(errors))),
    }
}

pub fn validate_student_form(form: &StudentForm) -> Result<NewStudent, ApiError> {
    let mut errors = Vec::new();
    let student_id = field(&mut errors, StudentNumber::parse(&form.student_id));
    let lastname = field(&mut errors, parse_required_text("lastname", &form.lastname));
    let firstname = field(&mut errors, parse_required_text("firstname", &form.firstname));
    let middlename = parse_optional_text(&form.middlename);
    let program = field(&mut errors, parse_reference("program", &form.program));
    match (student_id, lastname, firstname, program) {
        (Some(student_id), Some(lastname), Some(firstname), Some(program))
            if errors.is_empty() =>
        {
            Ok(NewStudent {
                student_id,
                lastname,
                firstname,
                middlename,
                program: ProgramId(program),
            })
        }
        _ => Err(ApiError::validation_failed(Value::Array(errors))),
    }
}

pub fn validate_organization_form(form: &OrganizationForm) -> Result<NewOrganization, ApiError> {
    let mut errors = Vec::new();
    let name = field(&mut errors, parse_required_text("name", &form.name));
    let college = field(&mut errors, parse_reference("college", &form.college));
    let description = parse_optional_text(&form.description);
    match (name, college) {
        (Some(name), Some(college)) if errors.is_empty() => Ok(NewOrganization {
            name,
            college: CollegeId(college),
            description,
        }),
        _ => Err(ApiError::validation_failed(Value::Array(errors))),
    }
}

pub fn validate_org_member_form(form: &OrgMemberForm) -> Result<NewOrgMember, ApiError> {
    let mut errors = Vec::new();
    let student = field(&mut errors, parse_reference("student", &form.student));
    let organization = field(&mut errors, parse_reference("organization", &form.organization));
    let date_joined = field(&mut errors, parse_date("date_joined", &form.date_joined));
    match (student, organization, date_joined) {
        (Some(student), Some(organization), Some(date_joined)) if errors.is_empty() => {
            Ok(NewOrgMember {
                student: StudentId(student),
                organization: OrganizationId(organization),
                date_joined,
            })
        }
        _ => Err(ApiError::validation_failed(Value::Array(errors))),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::errors::ApiErrorCode;

    #[test]
    fn student_form_reports_every_bad_field_at_once() {
        let form = StudentForm {
            student_id: "23-0001".to_string(),
            lastname: String::new(),
            firstname: "Jane".to_string(),
            middlename: String::new(),
            program: "x".to_string(),
        };
        let err = validate_student_form(&form).expect_err("invalid");
        assert_eq!(err.code, ApiErrorCode::ValidationFailed);
        let fields: Vec<&str> = err.details["field_errors"]
            .as_array()
            .expect("array")
            .iter()
            .map(|e| e["field"].as_str().expect("field"))
            .collect();
        assert_eq!(fields, ["student_id", "lastname", "program"]);
    }

    #[test]
    fn valid_student_form_builds_a_draft() {
        let form = StudentForm {
            student_id: "2023-3-0001".to_string(),
            lastname: "Doe".to_string(),
            firstname: "Jane".to_string(),
            middlename: " M ".to_string(),
            program: "7".to_string(),
        };
        let draft = validate_student_form(&form).expect("valid");
        assert_eq!(draft.program, ProgramId(7));
        assert_eq!(draft.middlename, "M");
    }

    #[test]
    fn org_member_form_parses_the_join_date() {
        let form = OrgMemberForm {
            student: "1".to_string(),
            organization: "2".to_string(),
            date_joined: "2024-01-15".to_string(),
        };
        let draft = validate_org_member_form(&form).expect("valid");
        assert_eq!(
            draft.date_joined,
            NaiveDate::from_ymd_opt(2024, 1, 15).expect("date")
        );

        let bad = OrgMemberForm {
            date_joined: "15/01/2024".to_string(),
            ..form
        };
        assert!(validate_org_member_form(&bad).is_err());
    }

    #[test]
    fn descriptors_cover_every_editable_column() {
        let student = student_form_descriptor();
        let names: Vec<&str> = student.fields.iter().map(|f| f.name.as_str()).collect();
        assert_eq!(
            names,
            ["student_id", "lastname", "firstname", "middlename", "program"]
        );
        assert!(!student.fields[3].required);
        assert_eq!(org_member_form_descriptor().fields.len(), 3);
    }
}
