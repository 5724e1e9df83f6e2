use thiserror::Error;

#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum OffsetMetadataError {
    #[error("Invalid pagination parameters: page {0}, per_page {1}")]
    InvalidParameters(i64, i64),
}

/// Errors from the count-then-fetch pagination flow.
#[derive(Error, Debug)]
pub enum PaginateError<E> {
    #[error("Pagination metadata error: {0}")]
    Metadata(#[from] OffsetMetadataError),

    #[error("Data source error: {0}")]
    Source(E),
}
