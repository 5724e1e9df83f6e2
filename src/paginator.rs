use std::future::Future;

use serde::Serialize;

use crate::metadata::OffsetMetadata;

/// A page of items bundled with the metadata describing its place in the
/// full collection.
#[derive(Serialize, Clone, Debug)]
pub struct OffsetPaginator<T> {
    pub data: Vec<T>,
    pub metadata: OffsetMetadata,
}

impl<T> OffsetPaginator<T> {
    pub fn new(data: Vec<T>, metadata: OffsetMetadata) -> Self {
        Self { data, metadata }
    }

    /// Replace the page of items with the output of an async transform,
    /// keeping the metadata unchanged.
    pub async fn transform_async<U, F, Fut>(self, f: F) -> OffsetPaginator<U>
    where
        F: FnOnce(Vec<T>) -> Fut,
        Fut: Future<Output = Vec<U>>,
    {
        OffsetPaginator::new(f(self.data).await, self.metadata)
    }
}

/// Shared surface for paginator flavors: access to the items and metadata,
/// plus metadata-preserving transforms over the items.
pub trait OffsetPaginate: Sized {
    type Item;

    fn from_parts(data: Vec<Self::Item>, metadata: OffsetMetadata) -> Self;
    fn data(&self) -> &[Self::Item];
    fn metadata(&self) -> &OffsetMetadata;
    fn into_parts(self) -> (Vec<Self::Item>, OffsetMetadata);

    /// Transform the whole page of items at once.
    fn transform<U, F>(self, f: F) -> OffsetPaginator<U>
    where
        F: FnOnce(Vec<Self::Item>) -> Vec<U>,
    {
        let (data, metadata) = self.into_parts();
        OffsetPaginator::new(f(data), metadata)
    }

    fn try_transform<U, E, F>(self, f: F) -> Result<OffsetPaginator<U>, E>
    where
        F: FnOnce(Vec<Self::Item>) -> Result<Vec<U>, E>,
    {
        let (data, metadata) = self.into_parts();
        Ok(OffsetPaginator::new(f(data)?, metadata))
    }

    /// Transform the items one at a time.
    fn map<U, F>(self, f: F) -> OffsetPaginator<U>
    where
        F: FnMut(Self::Item) -> U,
    {
        let (data, metadata) = self.into_parts();
        OffsetPaginator::new(data.into_iter().map(f).collect(), metadata)
    }

    fn try_map<U, E, F>(self, f: F) -> Result<OffsetPaginator<U>, E>
    where
        F: FnMut(Self::Item) -> Result<U, E>,
    {
        let (data, metadata) = self.into_parts();
        let data = data.into_iter().map(f).collect::<Result<Vec<_>, E>>()?;
        Ok(OffsetPaginator::new(data, metadata))
    }
}

impl<T> OffsetPaginate for OffsetPaginator<T> {
    type Item = T;

    fn from_parts(data: Vec<T>, metadata: OffsetMetadata) -> Self {
        Self::new(data, metadata)
    }

    fn data(&self) -> &[T] {
        &self.data
    }

    fn metadata(&self) -> &OffsetMetadata {
        &self.metadata
    }

    fn into_parts(self) -> (Vec<T>, OffsetMetadata) {
        (self.data, self.metadata)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::params::OffsetParams;
    use url::Url;

    fn test_metadata() -> OffsetMetadata {
        let params = OffsetParams::new(2, 2);
        let url = Url::parse("https://example.com/items").unwrap();
        OffsetMetadata::new(params, 6, url).unwrap()
    }

    #[test]
    fn test_transform_preserves_metadata() {
        let paginator = OffsetPaginator::new(vec![3, 4], test_metadata());
        let metadata = paginator.metadata.clone();

        let transformed = paginator.transform(|data| data.into_iter().rev().collect());

        assert_eq!(transformed.data, vec![4, 3]);
        assert_eq!(transformed.metadata, metadata);
    }

    #[test]
    fn test_map() {
        let paginator = OffsetPaginator::new(vec![3, 4], test_metadata());

        let mapped = paginator.map(|n| n.to_string());

        assert_eq!(mapped.data, vec!["3".to_string(), "4".to_string()]);
    }

    #[test]
    fn test_try_transform_propagates_errors() {
        let paginator = OffsetPaginator::new(vec![3, 4], test_metadata());

        let result: Result<OffsetPaginator<i64>, &str> =
            paginator.try_transform(|_| Err("boom"));

        assert_eq!(result.unwrap_err(), "boom");
    }

    #[test]
    fn test_try_map() {
        let paginator = OffsetPaginator::new(vec![3, 4], test_metadata());
        let metadata = paginator.metadata.clone();

        let mapped = paginator
            .try_map(|n| Ok::<_, String>(n * 10))
            .unwrap();

        assert_eq!(mapped.data, vec![30, 40]);
        assert_eq!(mapped.metadata, metadata);
    }

    #[test]
    fn test_accessors() {
        let paginator = OffsetPaginator::new(vec![3, 4], test_metadata());

        assert_eq!(paginator.data(), &[3, 4]);
        assert_eq!(paginator.metadata().current_page, 2);
    }

    #[tokio::test]
    async fn test_transform_async_preserves_metadata() {
        let paginator = OffsetPaginator::new(vec![3, 4], test_metadata());
        let metadata = paginator.metadata.clone();

        let transformed = paginator
            .transform_async(|data| async move { data.into_iter().map(|n| n + 1).collect() })
            .await;

        assert_eq!(transformed.data, vec![4, 5]);
        assert_eq!(transformed.metadata, metadata);
    }
}
