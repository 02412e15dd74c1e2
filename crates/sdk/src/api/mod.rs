//! Typed API surface, one module per upstream resource.

pub mod activities;
pub mod sessions;
pub mod sources;

pub use activities::ActivitiesApi;
pub use sessions::SessionsApi;
pub use sources::SourcesApi;

use serde::Serialize;

/// Smallest page size accepted by upstream.
pub const MIN_PAGE_SIZE: i32 = 1;

/// Largest page size accepted by upstream.
pub const MAX_PAGE_SIZE: i32 = 100;

/// Pagination parameters shared by every list call.
///
/// `page_token` is an opaque cursor returned by a previous page and is
/// passed back verbatim; this SDK never interprets it.
#[derive(Debug, Clone, Default)]
pub struct PageParams {
    /// Requested page size; clamped to `[1, 100]` before it is sent. Each
    /// list endpoint supplies its own default when unset.
    pub page_size: Option<i32>,
    /// Cursor from a previous response's `nextPageToken`.
    pub page_token: Option<String>,
}

impl PageParams {
    /// Build the wire query, applying the endpoint default and clamping
    /// out-of-range sizes to the nearest bound.
    pub(crate) fn to_query(&self, default_size: i32) -> PageQuery {
        PageQuery {
            page_size: self
                .page_size
                .unwrap_or(default_size)
                .clamp(MIN_PAGE_SIZE, MAX_PAGE_SIZE),
            page_token: self.page_token.clone(),
        }
    }
}

/// Wire form of the pagination query.
#[derive(Debug, Clone, Serialize)]
pub(crate) struct PageQuery {
    #[serde(rename = "pageSize")]
    pub page_size: i32,
    #[serde(rename = "pageToken", skip_serializing_if = "Option::is_none")]
    pub page_token: Option<String>,
}
