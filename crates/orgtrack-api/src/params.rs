// SPDX-License-Identifier: Apache-2.0

use crate::errors::ApiError;
use std::collections::HashMap;

/// Parsed list-view query parameters. `sort_by` is kept as the raw token;
/// only the OrgMember list gives it meaning, and unknown tokens fall back
/// to the default ordering rather than erroring.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ListParams {
    pub q: Option<String>,
    pub sort_by: Option<String>,
    pub page: u64,
}

pub fn parse_list_params(query: &HashMap<String, String>) -> Result<ListParams, ApiError> {
    let page = if let Some(raw) = query.get("page") {
        let value = raw
            .parse::<u64>()
            .map_err(|_| ApiError::invalid_param("page", raw))?;
        if value == 0 {
            return Err(ApiError::invalid_param("page", raw));
        }
        value
    } else {
        1
    };

    Ok(ListParams {
        q: query.get("q").cloned(),
        sort_by: query.get("sort_by").cloned(),
        page,
    })
}
