//! Wire types for the Patchwork API.
//!
//! Every type here is a transient representation of an upstream resource;
//! nothing is persisted locally. Field names follow the upstream camelCase
//! wire format via serde renames.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Lifecycle state of a session, as reported by upstream.
///
/// This SDK never enforces transitions; it reports whatever state upstream
/// returns and forwards user actions regardless of the current state.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum SessionState {
    StateUnspecified,
    Queued,
    Planning,
    AwaitingPlanApproval,
    AwaitingUserFeedback,
    InProgress,
    Paused,
    Failed,
    Completed,
}

impl SessionState {
    /// Whether the session has reached a terminal state.
    pub fn is_terminal(self) -> bool {
        matches!(self, Self::Completed | Self::Failed)
    }
}

/// How much autonomy the agent has within a session.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum AutomationMode {
    AutomationModeUnspecified,
    FullyAutomatic,
    SemiAutomatic,
}

/// Git branch metadata.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Branch {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub display_name: Option<String>,
}

/// GitHub repository metadata attached to a source.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GitHubRepo {
    pub owner: String,
    pub repo: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub is_private: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub default_branch: Option<Branch>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub branches: Option<Vec<Branch>>,
}

/// A repository the agent can work against.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Source {
    /// Resource name, e.g. `sources/github/owner/repo`.
    pub name: String,
    pub id: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub github_repo: Option<GitHubRepo>,
}

/// Source reference used when creating a session.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SourceContext {
    /// Resource name of the source.
    pub source: String,
    /// Branch to start from; upstream uses the repository default when
    /// absent.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub branch: Option<String>,
}

/// Pull request produced by a session.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PullRequest {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub state: Option<String>,
}

/// Output artifact attached to a session.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SessionOutput {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub pull_request: Option<PullRequest>,
}

/// A coding task tracked by upstream.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Session {
    /// Resource name, e.g. `sessions/abc123`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    /// Initial prompt for the task.
    pub prompt: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub source_context: Option<SourceContext>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub require_plan_approval: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub automation_mode: Option<AutomationMode>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub create_time: Option<DateTime<Utc>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub update_time: Option<DateTime<Utc>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub state: Option<SessionState>,
    /// URL to view the session in the Patchwork web app.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub outputs: Option<Vec<SessionOutput>>,
}

impl Session {
    /// Whether this session is still active (not completed or failed).
    ///
    /// Sessions without a reported state count as active.
    pub fn is_active(&self) -> bool {
        self.state.map_or(true, |s| !s.is_terminal())
    }
}

/// An ordered unit of work within a session.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Activity {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub create_time: Option<DateTime<Utc>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub update_time: Option<DateTime<Utc>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub state: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub actor: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub content: Option<serde_json::Value>,
}

/// Request body for session creation.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateSessionRequest {
    pub prompt: String,
    pub source_context: SourceContext,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub require_plan_approval: Option<bool>,
}

/// Acknowledgement for verb-style calls whose success body is empty.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Ack {
    pub success: bool,
    /// Resource name of the session the action was applied to.
    pub session: String,
}

/// Page of sources.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ListSourcesResponse {
    #[serde(default)]
    pub sources: Vec<Source>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub next_page_token: Option<String>,
}

/// Page of sessions.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ListSessionsResponse {
    #[serde(default)]
    pub sessions: Vec<Session>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub next_page_token: Option<String>,
}

/// Page of activities.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ListActivitiesResponse {
    #[serde(default)]
    pub activities: Vec<Activity>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub next_page_token: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_session_state_wire_names() {
        let state: SessionState = serde_json::from_str("\"AWAITING_PLAN_APPROVAL\"").unwrap();
        assert_eq!(state, SessionState::AwaitingPlanApproval);
        assert_eq!(
            serde_json::to_string(&SessionState::InProgress).unwrap(),
            "\"IN_PROGRESS\""
        );
    }

    #[test]
    fn test_unspecified_state_wire_name() {
        let state: SessionState = serde_json::from_str("\"STATE_UNSPECIFIED\"").unwrap();
        assert_eq!(state, SessionState::StateUnspecified);
    }

    #[test]
    fn test_terminal_states() {
        assert!(SessionState::Completed.is_terminal());
        assert!(SessionState::Failed.is_terminal());
        assert!(!SessionState::InProgress.is_terminal());
        assert!(!SessionState::Paused.is_terminal());
        assert!(!SessionState::AwaitingUserFeedback.is_terminal());
    }

    #[test]
    fn test_session_deserializes_wire_format() {
        let json = r#"{
            "name": "sessions/abc123",
            "id": "abc123",
            "prompt": "Add dark mode",
            "sourceContext": {"source": "sources/github/octo/widgets", "branch": "main"},
            "requirePlanApproval": true,
            "createTime": "2025-11-03T10:15:30Z",
            "state": "QUEUED",
            "outputs": [{"pullRequest": {"url": "https://github.com/octo/widgets/pull/7"}}]
        }"#;

        let session: Session = serde_json::from_str(json).unwrap();
        assert_eq!(session.name.as_deref(), Some("sessions/abc123"));
        assert_eq!(session.state, Some(SessionState::Queued));
        assert_eq!(session.require_plan_approval, Some(true));
        let context = session.source_context.as_ref().unwrap();
        assert_eq!(context.source, "sources/github/octo/widgets");
        assert_eq!(context.branch.as_deref(), Some("main"));
        let outputs = session.outputs.as_ref().unwrap();
        assert_eq!(
            outputs[0].pull_request.as_ref().unwrap().url.as_deref(),
            Some("https://github.com/octo/widgets/pull/7")
        );
    }

    #[test]
    fn test_session_is_active() {
        let mut session: Session = serde_json::from_str(r#"{"prompt": "x"}"#).unwrap();
        assert!(session.is_active());

        session.state = Some(SessionState::InProgress);
        assert!(session.is_active());

        session.state = Some(SessionState::Completed);
        assert!(!session.is_active());
    }

    #[test]
    fn test_create_session_request_omits_unset_fields() {
        let request = CreateSessionRequest {
            prompt: "Fix the flaky test".to_string(),
            source_context: SourceContext {
                source: "sources/github/octo/widgets".to_string(),
                branch: None,
            },
            title: None,
            require_plan_approval: None,
        };

        let value = serde_json::to_value(&request).unwrap();
        assert_eq!(value["prompt"], "Fix the flaky test");
        assert_eq!(value["sourceContext"]["source"], "sources/github/octo/widgets");
        assert!(value.get("title").is_none());
        assert!(value.get("requirePlanApproval").is_none());
        assert!(value["sourceContext"].get("branch").is_none());
    }

    #[test]
    fn test_list_response_defaults_to_empty() {
        let page: ListSessionsResponse = serde_json::from_str("{}").unwrap();
        assert!(page.sessions.is_empty());
        assert!(page.next_page_token.is_none());
    }
}
