//! Offset-based pagination: metadata with navigation links, normalized page
//! parameters, and a paginated result wrapper for collection queries.

pub mod error;
pub mod metadata;
pub mod paginator;
pub mod params;
pub mod source;

pub use error::{OffsetMetadataError, PaginateError};
pub use metadata::{Links, OffsetMetadata};
pub use paginator::{OffsetPaginate, OffsetPaginator};
pub use params::{OffsetPaginatorConfig, OffsetParams, OffsetQueryParams};
pub use source::{paginate, OffsetDataSource};
