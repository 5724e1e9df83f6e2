use std::ops::{Range, RangeInclusive};

use serde::Serialize;
use url::Url;

use crate::error::OffsetMetadataError;
use crate::params::OffsetParams;

/// Navigation links for the pages adjacent to the one being served.
#[derive(Serialize, Clone, Debug, PartialEq, Eq)]
pub struct Links {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub previous: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub next: Option<String>,
}

/// Describes one page of a paginated collection, independent of the items on
/// it.
#[derive(Serialize, Clone, Debug, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct OffsetMetadata {
    #[serde(skip)]
    url: Url,
    pub current_page: i64,
    pub per_page: i64,
    pub total: i64,
    pub total_pages: i64,
    pub links: Links,
}

impl OffsetMetadata {
    /// Build metadata for `total` items paged by `params`, with navigation
    /// links rendered against `url`.
    ///
    /// A request past the last page is served the last page instead of an
    /// error, and `total == 0` yields a single empty page.
    pub fn new(params: OffsetParams, total: i64, url: Url) -> Result<Self, OffsetMetadataError> {
        if params.page < 1 || params.per_page < 1 {
            return Err(OffsetMetadataError::InvalidParameters(
                params.page,
                params.per_page,
            ));
        }

        let total_pages = ((total + params.per_page - 1) / params.per_page).max(1);
        let current_page = params.page.min(total_pages);
        if current_page < params.page {
            tracing::debug!(
                "Requested page {} is past the last page, serving page {}",
                params.page,
                current_page
            );
        }

        let links = next_and_previous_links(current_page, total_pages, &url);

        Ok(Self {
            url,
            current_page,
            per_page: params.per_page,
            total,
            total_pages,
            links,
        })
    }

    /// Link to an arbitrary page of the same collection.
    pub fn link(&self, page: i64) -> String {
        render_link(&self.url, page)
    }

    /// Links for every page in the inclusive range, in ascending order.
    pub fn links(&self, pages: RangeInclusive<i64>) -> Vec<String> {
        pages.map(|page| render_link(&self.url, page)).collect()
    }

    /// Item offsets covered by the served page, as a half-open range. Fetch
    /// queries must be bounded by this window rather than the raw request,
    /// since the current page may have been clamped.
    pub fn range(&self) -> Range<i64> {
        let lower = (self.current_page - 1) * self.per_page;
        lower..lower + self.per_page
    }
}

fn next_and_previous_links(current_page: i64, total_pages: i64, url: &Url) -> Links {
    let previous = if current_page > 1 {
        // A current page beyond the last page still links back to the last page.
        Some(render_link(url, (current_page - 1).min(total_pages)))
    } else {
        None
    };

    let next = if current_page < total_pages {
        Some(render_link(url, current_page + 1))
    } else {
        None
    };

    Links { previous, next }
}

// Always appends a fresh `page` parameter; a base URL that already carries a
// query string ends up with two query separators.
fn render_link(url: &Url, page: i64) -> String {
    format!("{}?page={}", url, page)
}
