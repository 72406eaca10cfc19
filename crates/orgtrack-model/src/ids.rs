use serde::{Deserialize, Serialize};
use std::fmt::{Display, Formatter};

macro_rules! row_id {
    ($(#[$doc:meta])* $name:ident) => {
        $(#[$doc])*
        #[derive(
            Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize,
        )]
        #[serde(transparent)]
        pub struct $name(pub i64);

        impl $name {
            #[must_use]
            pub const fn as_i64(self) -> i64 {
                self.0
            }
        }

        impl Display for $name {
            fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
                write!(f, "{}", self.0)
            }
        }

        impl From<i64> for $name {
            fn from(value: i64) -> Self {
                Self(value)
            }
        }
    };
}

row_id!(CollegeId);
row_id!(ProgramId);
row_id!(
    /// Surrogate row id, distinct from the school-issued [`StudentNumber`].
    ///
    /// [`StudentNumber`]: crate::StudentNumber
    StudentId
);
row_id!(OrganizationId);
row_id!(OrgMemberId);
