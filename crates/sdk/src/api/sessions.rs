//! Sessions API endpoints.

use crate::api::PageParams;
use crate::client::PatchworkClient;
use crate::error::{PatchworkError, PatchworkResult};
use crate::resource::{validate_session_name, validate_source_name};
use crate::types::{Ack, CreateSessionRequest, ListSessionsResponse, Session};
use serde_json::json;

/// Default page size for session listings.
pub const DEFAULT_PAGE_SIZE: i32 = 30;

/// Sessions API for creating and steering coding tasks.
///
/// Sessions are mutated only upstream; this API forwards user actions
/// (create, message, approve) and reports whatever state upstream returns.
pub struct SessionsApi<'a> {
    client: &'a PatchworkClient,
}

impl<'a> SessionsApi<'a> {
    pub(crate) fn new(client: &'a PatchworkClient) -> Self {
        Self { client }
    }

    /// List sessions.
    pub async fn list(&self, params: PageParams) -> PatchworkResult<ListSessionsResponse> {
        let query = params.to_query(DEFAULT_PAGE_SIZE);
        self.client.http.get_with_query("sessions", &query).await
    }

    /// Get a single session by resource name.
    pub async fn get(&self, session_name: &str) -> PatchworkResult<Session> {
        let name = validate_session_name(session_name)?;
        self.client.http.get(name).await
    }

    /// Create a new session.
    ///
    /// `prompt` and the source reference must be non-empty; the source must
    /// be a valid source resource name.
    pub async fn create(&self, request: CreateSessionRequest) -> PatchworkResult<Session> {
        if request.prompt.trim().is_empty() {
            return Err(PatchworkError::InvalidArgument(
                "prompt must not be empty".to_string(),
            ));
        }
        validate_source_name(&request.source_context.source)?;

        self.client.http.post("sessions", &request).await
    }

    /// Send a follow-up message to a session.
    ///
    /// No local check of the session's state is performed; upstream rejects
    /// messages the session cannot accept.
    pub async fn send_message(&self, session_name: &str, message: &str) -> PatchworkResult<Ack> {
        let name = validate_session_name(session_name)?;
        if message.trim().is_empty() {
            return Err(PatchworkError::InvalidArgument(
                "message must not be empty".to_string(),
            ));
        }

        self.client
            .http
            .post_empty(&format!("{name}:sendMessage"), &json!({ "prompt": message }))
            .await?;

        Ok(Ack {
            success: true,
            session: name.to_string(),
        })
    }

    /// Approve the plan proposed for a session.
    ///
    /// No local check of the session's state is performed.
    pub async fn approve_plan(&self, session_name: &str) -> PatchworkResult<Ack> {
        let name = validate_session_name(session_name)?;

        self.client
            .http
            .post_empty(&format!("{name}:approvePlan"), &json!({}))
            .await?;

        Ok(Ack {
            success: true,
            session: name.to_string(),
        })
    }
}
