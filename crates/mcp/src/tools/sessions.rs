// Session tools: create and steer coding tasks
//
// None of these tools checks session state locally; actions are forwarded
// and upstream rejects transitions it cannot accept.

use crate::protocol::{CallToolResult, ToolSchema};
use crate::tools::{
    error_result, json_result, json_schema_boolean, json_schema_integer, json_schema_object,
    json_schema_string, parse_args, Tool,
};
use anyhow::Result;
use patchwork_sdk::{
    Ack, CreateSessionRequest, ListSessionsResponse, PageParams, PatchworkClient, PatchworkResult,
    Session, SourceContext,
};
use serde::Deserialize;
use std::sync::Arc;

/// Instruction appended to the prompt by `create_pull_request`; the upstream
/// agent treats it as the PR-producing intent for the session.
const PULL_REQUEST_INSTRUCTION: &str = "Please create a pull request with these changes.";

/// Tool to list sessions, optionally filtering out finished ones.
pub struct ListSessionsTool {
    client: Arc<PatchworkClient>,
}

impl ListSessionsTool {
    pub fn new(client: Arc<PatchworkClient>) -> Self {
        Self { client }
    }

    async fn call(&self, arguments: serde_json::Value) -> PatchworkResult<ListSessionsResponse> {
        let args: ListSessionsArgs = parse_args(arguments)?;
        let mut page = self
            .client
            .sessions()
            .list(PageParams {
                page_size: args.page_size,
                page_token: args.page_token,
            })
            .await?;

        // Client-side post-filter; the page token is forwarded untouched so
        // callers can keep paging even when entries were dropped.
        if args.active_only {
            page.sessions.retain(|s| s.is_active());
        }

        Ok(page)
    }
}

#[derive(Debug, Deserialize)]
struct ListSessionsArgs {
    #[serde(default)]
    page_size: Option<i32>,
    #[serde(default)]
    page_token: Option<String>,
    #[serde(default)]
    active_only: bool,
}

#[async_trait::async_trait]
impl Tool for ListSessionsTool {
    fn schema(&self) -> ToolSchema {
        ToolSchema {
            name: "list_sessions".to_string(),
            description:
                "List Patchwork sessions (coding tasks). When active_only is true, completed and \
                 failed sessions are filtered out after the page is fetched, so a page may hold \
                 fewer than page_size entries; keep following nextPageToken to continue."
                    .to_string(),
            input_schema: json_schema_object(
                serde_json::json!({
                    "page_size": json_schema_integer("Number of sessions to return (1-100, default 30)"),
                    "page_token": json_schema_string("Token for pagination from a previous response"),
                    "active_only": json_schema_boolean("Only return sessions that are not completed or failed (default false)"),
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

/// Tool to fetch a single session.
pub struct GetSessionTool {
    client: Arc<PatchworkClient>,
}

impl GetSessionTool {
    pub fn new(client: Arc<PatchworkClient>) -> Self {
        Self { client }
    }

    async fn call(&self, arguments: serde_json::Value) -> PatchworkResult<Session> {
        let args: SessionNameArgs = parse_args(arguments)?;
        self.client.sessions().get(&args.session_name).await
    }
}

#[derive(Debug, Deserialize)]
struct SessionNameArgs {
    session_name: String,
}

#[async_trait::async_trait]
impl Tool for GetSessionTool {
    fn schema(&self) -> ToolSchema {
        ToolSchema {
            name: "get_session".to_string(),
            description:
                "Get details about a session, including its state, web URL and output artifacts."
                    .to_string(),
            input_schema: json_schema_object(
                serde_json::json!({
                    "session_name": json_schema_string(
                        "Resource name of the session (e.g. \"sessions/abc123\")"
                    ),
                }),
                vec!["session_name"],
            ),
        }
    }

    async fn execute(&self, arguments: serde_json::Value) -> Result<CallToolResult> {
        match self.call(arguments).await {
            Ok(session) => json_result(&session),
            Err(err) => Ok(error_result(&err)),
        }
    }
}

/// Tool to create a new session.
pub struct CreateSessionTool {
    client: Arc<PatchworkClient>,
}

impl CreateSessionTool {
    pub fn new(client: Arc<PatchworkClient>) -> Self {
        Self { client }
    }

    async fn call(&self, arguments: serde_json::Value) -> PatchworkResult<Session> {
        let args: CreateSessionArgs = parse_args(arguments)?;
        self.client
            .sessions()
            .create(CreateSessionRequest {
                prompt: args.prompt,
                source_context: SourceContext {
                    source: args.source,
                    branch: args.branch,
                },
                title: args.title,
                require_plan_approval: args.require_plan_approval.then_some(true),
            })
            .await
    }
}

#[derive(Debug, Deserialize)]
struct CreateSessionArgs {
    prompt: String,
    source: String,
    #[serde(default)]
    branch: Option<String>,
    #[serde(default)]
    title: Option<String>,
    #[serde(default)]
    require_plan_approval: bool,
}

#[async_trait::async_trait]
impl Tool for CreateSessionTool {
    fn schema(&self) -> ToolSchema {
        ToolSchema {
            name: "create_session".to_string(),
            description:
                "Create a new Patchwork session to work on a coding task. Returns the created \
                 session including its resource name and initial state."
                    .to_string(),
            input_schema: json_schema_object(
                serde_json::json!({
                    "prompt": json_schema_string("The coding task for the agent to work on"),
                    "source": json_schema_string(
                        "Resource name of the source repository (e.g. \"sources/github/owner/repo\")"
                    ),
                    "branch": json_schema_string("Branch to start from (defaults to the repository default branch)"),
                    "title": json_schema_string("Title for the session (auto-generated if omitted)"),
                    "require_plan_approval": json_schema_boolean(
                        "If true, the agent waits for plan approval before executing (default false)"
                    ),
                }),
                vec!["prompt", "source"],
            ),
        }
    }

    async fn execute(&self, arguments: serde_json::Value) -> Result<CallToolResult> {
        match self.call(arguments).await {
            Ok(session) => json_result(&session),
            Err(err) => Ok(error_result(&err)),
        }
    }
}

/// Tool to send a follow-up message to a session.
pub struct SendMessageTool {
    client: Arc<PatchworkClient>,
}

impl SendMessageTool {
    pub fn new(client: Arc<PatchworkClient>) -> Self {
        Self { client }
    }

    async fn call(&self, arguments: serde_json::Value) -> PatchworkResult<Ack> {
        let args: SendMessageArgs = parse_args(arguments)?;
        self.client
            .sessions()
            .send_message(&args.session_name, &args.message)
            .await
    }
}

#[derive(Debug, Deserialize)]
struct SendMessageArgs {
    session_name: String,
    message: String,
}

#[async_trait::async_trait]
impl Tool for SendMessageTool {
    fn schema(&self) -> ToolSchema {
        ToolSchema {
            name: "send_message".to_string(),
            description:
                "Send a follow-up message to a session: extra context, clarified requirements, or \
                 an answer when the agent is waiting for feedback."
                    .to_string(),
            input_schema: json_schema_object(
                serde_json::json!({
                    "session_name": json_schema_string(
                        "Resource name of the session (e.g. \"sessions/abc123\")"
                    ),
                    "message": json_schema_string("The message to send to the agent"),
                }),
                vec!["session_name", "message"],
            ),
        }
    }

    async fn execute(&self, arguments: serde_json::Value) -> Result<CallToolResult> {
        match self.call(arguments).await {
            Ok(ack) => json_result(&ack),
            Err(err) => Ok(error_result(&err)),
        }
    }
}

/// Tool to approve a session's proposed plan.
pub struct ApprovePlanTool {
    client: Arc<PatchworkClient>,
}

impl ApprovePlanTool {
    pub fn new(client: Arc<PatchworkClient>) -> Self {
        Self { client }
    }

    async fn call(&self, arguments: serde_json::Value) -> PatchworkResult<Ack> {
        let args: SessionNameArgs = parse_args(arguments)?;
        self.client.sessions().approve_plan(&args.session_name).await
    }
}

#[async_trait::async_trait]
impl Tool for ApprovePlanTool {
    fn schema(&self) -> ToolSchema {
        ToolSchema {
            name: "approve_plan".to_string(),
            description:
                "Approve the agent's proposed plan so a session can proceed. Typically used when \
                 a session reports AWAITING_PLAN_APPROVAL."
                    .to_string(),
            input_schema: json_schema_object(
                serde_json::json!({
                    "session_name": json_schema_string(
                        "Resource name of the session (e.g. \"sessions/abc123\")"
                    ),
                }),
                vec!["session_name"],
            ),
        }
    }

    async fn execute(&self, arguments: serde_json::Value) -> Result<CallToolResult> {
        match self.call(arguments).await {
            Ok(ack) => json_result(&ack),
            Err(err) => Ok(error_result(&err)),
        }
    }
}

/// Tool to create a session that ends in a pull request.
pub struct CreatePullRequestTool {
    client: Arc<PatchworkClient>,
}

impl CreatePullRequestTool {
    pub fn new(client: Arc<PatchworkClient>) -> Self {
        Self { client }
    }

    async fn call(&self, arguments: serde_json::Value) -> PatchworkResult<Session> {
        let args: CreatePullRequestArgs = parse_args(arguments)?;
        let prompt = format!("{}\n\n{}", args.prompt, PULL_REQUEST_INSTRUCTION);
        self.client
            .sessions()
            .create(CreateSessionRequest {
                prompt,
                source_context: SourceContext {
                    source: args.source,
                    branch: args.branch,
                },
                title: args.title,
                require_plan_approval: None,
            })
            .await
    }
}

#[derive(Debug, Deserialize)]
struct CreatePullRequestArgs {
    prompt: String,
    source: String,
    #[serde(default)]
    branch: Option<String>,
    #[serde(default)]
    title: Option<String>,
}

#[async_trait::async_trait]
impl Tool for CreatePullRequestTool {
    fn schema(&self) -> ToolSchema {
        ToolSchema {
            name: "create_pull_request".to_string(),
            description:
                "Create a session that will produce a pull request. Convenience wrapper around \
                 create_session; check the session's outputs for the PR URL once it completes."
                    .to_string(),
            input_schema: json_schema_object(
                serde_json::json!({
                    "prompt": json_schema_string("Description of the changes to make"),
                    "source": json_schema_string(
                        "Resource name of the source repository (e.g. \"sources/github/owner/repo\")"
                    ),
                    "branch": json_schema_string("Base branch for the pull request (defaults to the repository default)"),
                    "title": json_schema_string("Title for the session and pull request"),
                }),
                vec!["prompt", "source"],
            ),
        }
    }

    async fn execute(&self, arguments: serde_json::Value) -> Result<CallToolResult> {
        match self.call(arguments).await {
            Ok(session) => json_result(&session),
            Err(err) => Ok(error_result(&err)),
        }
    }
}
