// SPDX-License-Identifier: Apache-2.0

use orgtrack_query::{DashboardCounts, Page, PageMeta};
use serde::{Deserialize, Serialize};

pub const API_VERSION: &str = "v1";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct PageMetaDto {
    pub page: u64,
    pub page_count: u64,
    pub page_size: u64,
    pub total: u64,
    pub has_prev: bool,
    pub has_next: bool,
}

impl From<PageMeta> for PageMetaDto {
    fn from(meta: PageMeta) -> Self {
        Self {
            page: meta.page,
            page_count: meta.page_count,
            page_size: meta.page_size,
            total: meta.total,
            has_prev: meta.has_prev,
            has_next: meta.has_next,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct RowsDto<T> {
    pub rows: Vec<T>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ListResponseDto<T> {
    pub api_version: String,
    pub data: RowsDto<T>,
    pub page: PageMetaDto,
}

impl<T> ListResponseDto<T> {
    #[must_use]
    pub fn from_page(page: Page<T>) -> Self {
        Self {
            api_version: API_VERSION.to_string(),
            data: RowsDto { rows: page.rows },
            page: page.meta.into(),
        }
    }
}

/// One editable field of an entity form. The field lists are declared
/// statically per entity (see [`crate::forms`]); the registry never
/// reflects over its data model at runtime.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct FormFieldDto {
    pub name: String,
    pub kind: String,
    pub required: bool,
}

impl FormFieldDto {
    #[must_use]
    pub fn new(name: &str, kind: &str, required: bool) -> Self {
        Self {
            name: name.to_string(),
            kind: kind.to_string(),
            required,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct FormDescriptorDto {
    pub entity: String,
    pub fields: Vec<FormFieldDto>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct RecordResponseDto<T> {
    pub api_version: String,
    pub record: T,
    pub form: FormDescriptorDto,
}

impl<T> RecordResponseDto<T> {
    #[must_use]
    pub fn new(record: T, form: FormDescriptorDto) -> Self {
        Self {
            api_version: API_VERSION.to_string(),
            record,
            form,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ConfirmDeleteDto {
    pub api_version: String,
    pub entity: String,
    pub id: i64,
    pub message: String,
}

impl ConfirmDeleteDto {
    #[must_use]
    pub fn new(entity: &str, id: i64) -> Self {
        Self {
            api_version: API_VERSION.to_string(),
            entity: entity.to_string(),
            id,
            message: format!("POST to confirm deleting {entity} {id}"),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct DashboardDto {
    pub api_version: String,
    pub counts: DashboardCounts,
}

impl DashboardDto {
    #[must_use]
    pub fn new(counts: DashboardCounts) -> Self {
        Self {
            api_version: API_VERSION.to_string(),
            counts,
        }
    }
}
