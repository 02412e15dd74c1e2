// Source tools: browse the repositories the agent can work with

use crate::protocol::{CallToolResult, ToolSchema};
use crate::tools::{
    error_result, json_result, json_schema_integer, json_schema_object, json_schema_string,
    parse_args, Tool,
};
use anyhow::Result;
use patchwork_sdk::{
    ListSourcesParams, ListSourcesResponse, PageParams, PatchworkClient, PatchworkResult, Source,
};
use serde::Deserialize;
use std::sync::Arc;

/// Tool to list available sources.
pub struct ListSourcesTool {
    client: Arc<PatchworkClient>,
}

impl ListSourcesTool {
    pub fn new(client: Arc<PatchworkClient>) -> Self {
        Self { client }
    }

    async fn call(&self, arguments: serde_json::Value) -> PatchworkResult<ListSourcesResponse> {
        let args: ListSourcesArgs = parse_args(arguments)?;
        self.client
            .sources()
            .list(ListSourcesParams {
                page: PageParams {
                    page_size: args.page_size,
                    page_token: args.page_token,
                },
                filter: None,
            })
            .await
    }
}

#[derive(Debug, Deserialize)]
struct ListSourcesArgs {
    #[serde(default)]
    page_size: Option<i32>,
    #[serde(default)]
    page_token: Option<String>,
}

#[async_trait::async_trait]
impl Tool for ListSourcesTool {
    fn schema(&self) -> ToolSchema {
        ToolSchema {
            name: "list_sources".to_string(),
            description:
                "List the repositories the Patchwork agent can work with. Paginated: pass the \
                 returned nextPageToken back as page_token to fetch the next page."
                    .to_string(),
            input_schema: json_schema_object(
                serde_json::json!({
                    "page_size": json_schema_integer("Number of sources to return (1-100, default 30)"),
                    "page_token": json_schema_string("Token for pagination from a previous response"),
                }),
                vec![],
            ),
        }
    }

    async fn execute(&self, arguments: serde_json::Value) -> Result<CallToolResult> {
        match self.call(arguments).await {
            Ok(page) => json_result(&page),
            Err(err) => Ok(error_result(&err)),
        }
    }
}

/// Tool to fetch a single source.
pub struct GetSourceTool {
    client: Arc<PatchworkClient>,
}

impl GetSourceTool {
    pub fn new(client: Arc<PatchworkClient>) -> Self {
        Self { client }
    }

    async fn call(&self, arguments: serde_json::Value) -> PatchworkResult<Source> {
        let args: GetSourceArgs = parse_args(arguments)?;
        self.client.sources().get(&args.source_name).await
    }
}

#[derive(Debug, Deserialize)]
struct GetSourceArgs {
    source_name: String,
}

#[async_trait::async_trait]
impl Tool for GetSourceTool {
    fn schema(&self) -> ToolSchema {
        ToolSchema {
            name: "get_source".to_string(),
            description:
                "Get details about a source repository, including its branches."
                    .to_string(),
            input_schema: json_schema_object(
                serde_json::json!({
                    "source_name": json_schema_string(
                        "Resource name of the source (e.g. \"sources/github/owner/repo\")"
                    ),
                }),
                vec!["source_name"],
            ),
        }
    }

    async fn execute(&self, arguments: serde_json::Value) -> Result<CallToolResult> {
        match self.call(arguments).await {
            Ok(source) => json_result(&source),
            Err(err) => Ok(error_result(&err)),
        }
    }
}
