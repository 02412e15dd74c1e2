// Activity tools: read a session's work history

use crate::protocol::{CallToolResult, ToolSchema};
use crate::tools::{
    error_result, json_result, json_schema_integer, json_schema_object, json_schema_string,
    parse_args, Tool,
};
use anyhow::Result;
use patchwork_sdk::{ListActivitiesResponse, PageParams, PatchworkClient, PatchworkResult};
use serde::Deserialize;
use std::sync::Arc;

/// Tool to list the activities recorded for a session.
pub struct ListActivitiesTool {
    client: Arc<PatchworkClient>,
}

impl ListActivitiesTool {
    pub fn new(client: Arc<PatchworkClient>) -> Self {
        Self { client }
    }

    async fn call(&self, arguments: serde_json::Value) -> PatchworkResult<ListActivitiesResponse> {
        let args: ListActivitiesArgs = parse_args(arguments)?;
        self.client
            .activities()
            .list(
                &args.session_name,
                PageParams {
                    page_size: args.page_size,
                    page_token: args.page_token,
                },
            )
            .await
    }
}

#[derive(Debug, Deserialize)]
struct ListActivitiesArgs {
    session_name: String,
    #[serde(default)]
    page_size: Option<i32>,
    #[serde(default)]
    page_token: Option<String>,
}

#[async_trait::async_trait]
impl Tool for ListActivitiesTool {
    fn schema(&self) -> ToolSchema {
        ToolSchema {
            name: "list_activities".to_string(),
            description:
                "List the activities (work history) of a session: the conversation and the \
                 actions the agent has taken. Paginated via nextPageToken."
                    .to_string(),
            input_schema: json_schema_object(
                serde_json::json!({
                    "session_name": json_schema_string(
                        "Resource name of the session (e.g. \"sessions/abc123\")"
                    ),
                    "page_size": json_schema_integer("Number of activities to return (1-100, default 50)"),
                    "page_token": json_schema_string("Token for pagination from a previous response"),
                }),
                vec!["session_name"],
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
