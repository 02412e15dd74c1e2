//! Tool handlers, one per exposed capability.
//!
//! Each handler validates its declared parameters, delegates to the
//! [`patchwork_sdk::PatchworkClient`], and shapes the result. Failures are
//! returned as `isError` results whose text is a JSON object
//! `{"error": {"kind", "message"}}` the calling host can reason about.

pub mod activities;
pub mod sessions;
pub mod sources;
mod registry;

pub use activities::ListActivitiesTool;
pub use sessions::{
    ApprovePlanTool, CreatePullRequestTool, CreateSessionTool, GetSessionTool, ListSessionsTool,
    SendMessageTool,
};
pub use sources::{GetSourceTool, ListSourcesTool};
pub use registry::{
    json_schema_boolean, json_schema_integer, json_schema_object, json_schema_string, Tool,
    ToolRegistry,
};

use crate::protocol::{CallToolResult, ToolContent};
use patchwork_sdk::{PatchworkError, PatchworkResult};
use serde::de::DeserializeOwned;
use serde::Serialize;

/// Serialize a successful tool value as pretty-printed JSON text content.
pub(crate) fn json_result<T: Serialize>(value: &T) -> anyhow::Result<CallToolResult> {
    let text = serde_json::to_string_pretty(value)?;
    Ok(CallToolResult {
        content: vec![ToolContent::text(text)],
        is_error: None,
    })
}

/// Shape an SDK error as a structured tool failure.
pub(crate) fn error_result(err: &PatchworkError) -> CallToolResult {
    let payload = serde_json::json!({
        "error": {
            "kind": err.kind(),
            "message": err.to_string(),
        }
    });
    CallToolResult {
        content: vec![ToolContent::text(payload.to_string())],
        is_error: Some(true),
    }
}

/// Decode tool arguments, mapping schema mismatches to `InvalidArgument`.
/// Hosts may omit `arguments` entirely; that is an empty object, not null.
pub(crate) fn parse_args<T: DeserializeOwned>(arguments: serde_json::Value) -> PatchworkResult<T> {
    let arguments = match arguments {
        serde_json::Value::Null => serde_json::Value::Object(Default::default()),
        other => other,
    };
    serde_json::from_value(arguments)
        .map_err(|e| PatchworkError::InvalidArgument(format!("invalid tool arguments: {e}")))
}

#[cfg(test)]
pub(crate) mod test_support {
    use crate::protocol::{CallToolResult, ToolContent};
    use patchwork_sdk::PatchworkClient;
    use std::sync::Arc;
    use wiremock::MockServer;

    /// Client wired to a wiremock server.
    pub async fn client_for(server: &MockServer) -> Arc<PatchworkClient> {
        Arc::new(
            PatchworkClient::builder()
                .base_url(server.uri())
                .api_key("pk-test")
                .build()
                .unwrap(),
        )
    }

    /// Extract the text payload of a tool result as parsed JSON.
    pub fn result_json(result: &CallToolResult) -> serde_json::Value {
        let ToolContent::Text { text } = &result.content[0];
        serde_json::from_str(text).unwrap()
    }

    /// Assert a tool failure and return its error kind.
    pub fn error_kind(result: &CallToolResult) -> String {
        assert_eq!(result.is_error, Some(true), "expected an error result");
        result_json(result)["error"]["kind"]
            .as_str()
            .unwrap()
            .to_string()
    }
}
