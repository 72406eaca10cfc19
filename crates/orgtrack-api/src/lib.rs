#![forbid(unsafe_code)]

//! HTTP-facing surface shared by the server and its tests: the error
//! envelope, list-parameter parsing, response DTOs and the statically
//! declared per-entity form field lists.

pub mod dto;
pub mod errors;
pub mod forms;
pub mod params;

pub use dto::{
    ConfirmDeleteDto, DashboardDto, FormDescriptorDto, FormFieldDto, ListResponseDto, PageMetaDto,
    RecordResponseDto, RowsDto, API_VERSION,
};
pub use errors::{ApiError, ApiErrorCode};
pub use params::{parse_list_params, ListParams};

pub const CRATE_NAME: &str = "orgtrack-api";
