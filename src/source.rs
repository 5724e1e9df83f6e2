use async_trait::async_trait;
use url::Url;

use crate::error::PaginateError;
use crate::metadata::OffsetMetadata;
use crate::paginator::OffsetPaginator;
use crate::params::OffsetParams;

/// A collection that can report its size and hand out a bounded slice of
/// itself, e.g. a repository running a count query and a limit/offset query.
#[async_trait]
pub trait OffsetDataSource {
    type Item;
    type Error;

    /// Total number of items in the collection.
    async fn total(&self) -> Result<i64, Self::Error>;

    /// Fetch up to `limit` items starting at `offset`. The bounds arrive as
    /// structured arguments so a SQL-backed source can bind them as query
    /// parameters.
    async fn fetch(&self, limit: i64, offset: i64) -> Result<Vec<Self::Item>, Self::Error>;
}

/// Run the full pagination flow against `source`: count the collection,
/// derive the metadata, then fetch the page the metadata settled on.
pub async fn paginate<S>(
    source: &S,
    params: OffsetParams,
    url: Url,
) -> Result<OffsetPaginator<S::Item>, PaginateError<S::Error>>
where
    S: OffsetDataSource + Sync,
{
    let total = source.total().await.map_err(PaginateError::Source)?;
    let metadata = OffsetMetadata::new(params, total, url)?;

    let range = metadata.range();
    let data = source
        .fetch(metadata.per_page, range.start)
        .await
        .map_err(PaginateError::Source)?;

    Ok(OffsetPaginator::new(data, metadata))
}
