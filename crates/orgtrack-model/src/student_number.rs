use crate::validate::ValidationError;
use serde::{Deserialize, Serialize};
use std::fmt::{Display, Formatter};

/// School-issued student number in the `YYYY-N-NNNN` format, e.g.
/// `2023-3-0001`: a four-digit entry year, a one-digit unit code and a
/// four-digit serial.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
#[non_exhaustive]
pub struct StudentNumber(String);

impl StudentNumber {
    pub fn parse(input: &str) -> Result<Self, ValidationError> {
        let s = input.trim();
        if s.is_empty() {
            return Err(ValidationError::new("student_id", "must not be empty"));
        }
        let mut parts = s.split('-');
        let (year, unit, serial) = match (parts.next(), parts.next(), parts.next(), parts.next()) {
            (Some(year), Some(unit), Some(serial), None) => (year, unit, serial),
            _ => {
                return Err(ValidationError::new(
                    "student_id",
                    "must match YYYY-N-NNNN (e.g. 2023-3-0001)",
                ))
            }
        };
        let well_formed = year.len() == 4
            && unit.len() == 1
            && serial.len() == 4
            && [year, unit, serial]
                .iter()
                .all(|part| part.chars().all(|c| c.is_ascii_digit()));
        if !well_formed {
            return Err(ValidationError::new(
                "student_id",
                "must match YYYY-N-NNNN (e.g. 2023-3-0001)",
            ));
        }
        Ok(Self(s.to_string()))
    }

    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    #[must_use]
    pub fn into_inner(self) -> String {
        self.0
    }
}

impl Display for StudentNumber {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accepts_canonical_format() {
        let number = StudentNumber::parse("2023-3-0001").expect("valid");
        assert_eq!(number.as_str(), "2023-3-0001");
    }

    #[test]
    fn accepts_surrounding_whitespace() {
        let number = StudentNumber::parse(" 2020-8-1234 ").expect("valid");
        assert_eq!(number.as_str(), "2020-8-1234");
    }

    #[test]
    fn rejects_malformed_numbers() {
        for bad in [
            "",
            "2023-3",
            "2023-3-001",
            "202-3-0001",
            "2023-30-0001",
            "2023-3-0001-1",
            "abcd-3-0001",
            "2023-x-0001",
        ] {
            assert!(StudentNumber::parse(bad).is_err(), "accepted {bad:?}");
        }
    }
}
