// SPDX-License-Identifier: Apache-2.0

use serde::{Deserialize, Serialize};

/// 1-based page request. `page_size` comes from per-entity configuration.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageRequest {
    pub page: u64,
    pub page_size: u64,
}

impl PageRequest {
    #[must_use]
    pub const fn new(page: u64, page_size: u64) -> Self {
        Self { page, page_size }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PageMeta {
    pub page: u64,
    pub page_count: u64,
    pub page_size: u64,
    pub total: u64,
    pub has_prev: bool,
    pub has_next: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageWindow {
    pub meta: PageMeta,
    pub offset: u64,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Page<T> {
    pub rows: Vec<T>,
    pub meta: PageMeta,
}

/// Computes the slice for a requested page. An out-of-range request is
/// clamped into `[1, page_count]`; an empty result still reports one
/// (empty) page so navigation metadata stays well-formed.
#[must_use]
pub fn page_window(total: u64, req: &PageRequest) -> PageWindow {
    let page_size = req.page_size.max(1);
    let page_count = total.div_ceil(page_size).max(1);
    let page = req.page.clamp(1, page_count);
    let offset = (page - 1) * page_size;
    PageWindow {
        meta: PageMeta {
            page,
            page_count,
            page_size,
            total,
            has_prev: page > 1,
            has_next: page < page_count,
        },
        offset,
    }
}
