use std::ops::Range;

use serde::Deserialize;

/// Pagination values as they arrive from a query string, before any
/// validation.
#[derive(Deserialize, Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct OffsetQueryParams {
    pub page: Option<i64>,
    pub per_page: Option<i64>,
}

/// Defaults applied when the caller omits `page` or `per_page`.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct OffsetPaginatorConfig {
    pub default_page: i64,
    pub default_per_page: i64,
}

impl OffsetPaginatorConfig {
    pub fn new(default_page: i64, default_per_page: i64) -> Self {
        Self {
            default_page,
            default_per_page,
        }
    }
}

impl Default for OffsetPaginatorConfig {
    fn default() -> Self {
        Self {
            default_page: 1,
            default_per_page: 10,
        }
    }
}

/// Normalized pagination parameters. Pages are 1-indexed and a page holds at
/// least one item.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct OffsetParams {
    pub page: i64,
    pub per_page: i64,
}

impl OffsetParams {
    /// Clamp raw values into valid parameters. Zero, negative, and missing
    /// values are floored to 1 rather than rejected.
    pub fn new(page: i64, per_page: i64) -> Self {
        Self {
            page: page.max(1),
            per_page: per_page.max(1),
        }
    }

    /// Resolve raw query values against the config defaults, then clamp.
    pub fn from_query(config: OffsetPaginatorConfig, query: &OffsetQueryParams) -> Self {
        Self::new(
            query.page.unwrap_or(config.default_page),
            query.per_page.unwrap_or(config.default_per_page),
        )
    }

    /// Item offsets covered by the requested page, as a half-open range.
    pub fn range(&self) -> Range<i64> {
        let lower = (self.page - 1) * self.per_page;
        lower..lower + self.per_page
    }

    pub fn limit(&self) -> i64 {
        self.per_page
    }

    pub fn offset(&self) -> i64 {
        (self.page - 1) * self.per_page
    }
}
