// SPDX-License-Identifier: Apache-2.0

use unicode_normalization::UnicodeNormalization;

/// Canonical search-term normalization policy: NFKC + Unicode lowercase.
#[must_use]
pub fn normalize_search_term(input: &str) -> String {
    input.nfkc().collect::<String>().to_lowercase()
}

/// Escapes LIKE metacharacters so the term matches literally under
/// `ESCAPE '!'`.
#[must_use]
pub fn escape_like_term(term: &str) -> String {
    let mut out = String::with_capacity(term.len());
    for c in term.chars() {
        match c {
            '!' | '%' | '_' => {
                out.push('!');
                out.push(c);
            }
            _ => out.push(c),
        }
    }
    out
}

/// Substring-containment pattern for the normalized term.
#[must_use]
pub fn like_pattern(term: &str) -> String {
    format!("%{}%", escape_like_term(&normalize_search_term(term)))
}

/// An empty (or whitespace-only) `q` is treated as absent: the filter is
/// skipped entirely rather than matching the empty substring. A term with
/// interior content is kept verbatim, surrounding whitespace included.
#[must_use]
pub fn effective_term(q: Option<&str>) -> Option<&str> {
    q.filter(|term| !term.trim().is_empty())
}

/// `sort_by` token for the OrgMember list. Unknown or absent tokens fall
/// back to the ascending name order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum MemberSort {
    /// `student.lastname ASC, student.firstname ASC`.
    #[default]
    Name,
    /// `student.lastname DESC, student.firstname DESC` (`name_desc`).
    NameDesc,
    /// `date_joined ASC`, oldest first (`date`).
    Date,
}

impl MemberSort {
    #[must_use]
    pub fn parse(token: Option<&str>) -> Self {
        match token {
            Some("date") => Self::Date,
            Some("name_desc") => Self::NameDesc,
            _ => Self::Name,
        }
    }

    #[must_use]
    pub const fn as_token(self) -> &'static str {
        match self {
            Self::Name => "name",
            Self::NameDesc => "name_desc",
            Self::Date => "date",
        }
    }
}
