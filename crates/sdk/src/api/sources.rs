//! Sources API endpoints.

use crate::api::PageParams;
use crate::client::PatchworkClient;
use crate::error::PatchworkResult;
use crate::resource::validate_source_name;
use crate::types::{ListSourcesResponse, Source};
use serde::Serialize;

/// Default page size for source listings.
pub const DEFAULT_PAGE_SIZE: i32 = 30;

/// Sources API for browsing repositories the agent can work with.
pub struct SourcesApi<'a> {
    client: &'a PatchworkClient,
}

impl<'a> SourcesApi<'a> {
    pub(crate) fn new(client: &'a PatchworkClient) -> Self {
        Self { client }
    }

    /// List available sources.
    pub async fn list(&self, params: ListSourcesParams) -> PatchworkResult<ListSourcesResponse> {
        let page = params.page.to_query(DEFAULT_PAGE_SIZE);
        let query = ListSourcesQuery {
            page_size: page.page_size,
            page_token: page.page_token,
            filter: params.filter,
        };
        self.client.http.get_with_query("sources", &query).await
    }

    /// Get a single source by resource name.
    pub async fn get(&self, source_name: &str) -> PatchworkResult<Source> {
        let name = validate_source_name(source_name)?;
        self.client.http.get(name).await
    }
}

/// Parameters for listing sources.
#[derive(Debug, Clone, Default)]
pub struct ListSourcesParams {
    pub page: PageParams,
    /// Upstream filter expression, forwarded verbatim.
    pub filter: Option<String>,
}

#[derive(Debug, Serialize)]
struct ListSourcesQuery {
    #[serde(rename = "pageSize")]
    page_size: i32,
    #[serde(rename = "pageToken", skip_serializing_if = "Option::is_none")]
    page_token: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    filter: Option<String>,
}
