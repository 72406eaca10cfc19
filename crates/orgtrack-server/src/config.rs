use std::path::PathBuf;

/// Canonical page size per entity list. The values are deliberate choices
/// (see DESIGN.md) and overridable via `ORGTRACK_PAGE_SIZE_*`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PageSizes {
    pub organization: u64,
    pub student: u64,
    pub college: u64,
    pub program: u64,
    pub org_member: u64,
}

impl Default for PageSizes {
    fn default() -> Self {
        Self {
            organization: 5,
            student: 10,
            college: 10,
            program: 10,
            org_member: 10,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppConfig {
    pub bind_addr: String,
    pub db_path: PathBuf,
    /// Where an unauthenticated dashboard request is redirected. The
    /// identity provider behind it is an external collaborator.
    pub login_url: String,
    /// Name of the session cookie whose presence satisfies the dashboard
    /// gate. Token validation belongs to the identity provider.
    pub session_cookie: String,
    pub page_sizes: PageSizes,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            bind_addr: "127.0.0.1:8080".to_string(),
            db_path: PathBuf::from("orgtrack.db"),
            login_url: "/accounts/login/".to_string(),
            session_cookie: "orgtrack_session".to_string(),
            page_sizes: PageSizes::default(),
        }
    }
}

impl AppConfig {
    /// Page size for the list named by its route segment.
    #[must_use]
    pub fn page_size_for(&self, entity: &str) -> u64 {
        match entity {
            "organization" => self.page_sizes.organization,
            "student" => self.page_sizes.student,
            "college" => self.page_sizes.college,
            "program" => self.page_sizes.program,
            "orgmember" => self.page_sizes.org_member,
            _ => 10,
        }
    }
}
