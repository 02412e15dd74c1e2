//! Activities API endpoints.

use crate::api::PageParams;
use crate::client::PatchworkClient;
use crate::error::PatchworkResult;
use crate::resource::validate_session_name;
use crate::types::{Activity, ListActivitiesResponse};

/// Default page size for activity listings.
pub const DEFAULT_PAGE_SIZE: i32 = 50;

/// Activities API for reading a session's work history.
pub struct ActivitiesApi<'a> {
    client: &'a PatchworkClient,
}

impl<'a> ActivitiesApi<'a> {
    pub(crate) fn new(client: &'a PatchworkClient) -> Self {
        Self { client }
    }

    /// List activities for a session, oldest first.
    pub async fn list(
        &self,
        session_name: &str,
        params: PageParams,
    ) -> PatchworkResult<ListActivitiesResponse> {
        let name = validate_session_name(session_name)?;
        let query = params.to_query(DEFAULT_PAGE_SIZE);
        self.client
            .http
            .get_with_query(&format!("{name}/activities"), &query)
            .await
    }

    /// Get a single activity by its full resource name
    /// (`sessions/{id}/activities/{id}`).
    pub async fn get(&self, activity_name: &str) -> PatchworkResult<Activity> {
        let name = validate_session_name(activity_name)?;
        self.client.http.get(name).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::PatchworkError;
    use wiremock::matchers::{method, path, query_param};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    async fn client_for(server: &MockServer) -> PatchworkClient {
        PatchworkClient::builder()
            .base_url(server.uri())
            .api_key("pk-test")
            .build()
            .unwrap()
    }

    #[tokio::test]
    async fn test_list_uses_default_page_size() {
        let server = MockServer::start().await;

        Mock::given(method("GET"))
            .and(path("/sessions/s-1/activities"))
            .and(query_param("pageSize", "50"))
            .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
                "activities": [
                    {"name": "sessions/s-1/activities/a-1", "actor": "agent"}
                ],
                "nextPageToken": "cursor-2"
            })))
            .mount(&server)
            .await;

        let client = client_for(&server).await;
        let page = client
            .activities()
            .list("sessions/s-1", PageParams::default())
            .await
            .unwrap();

        assert_eq!(page.activities.len(), 1);
        assert_eq!(page.activities[0].actor.as_deref(), Some("agent"));
        assert_eq!(page.next_page_token.as_deref(), Some("cursor-2"));
    }

    #[tokio::test]
    async fn test_list_rejects_bare_session_id() {
        let server = MockServer::start().await;
        let client = client_for(&server).await;

        let result = client.activities().list("s-1", PageParams::default()).await;
        assert!(matches!(result, Err(PatchworkError::InvalidArgument(_))));
    }

    #[tokio::test]
    async fn test_get_single_activity() {
        let server = MockServer::start().await;

        Mock::given(method("GET"))
            .and(path("/sessions/s-1/activities/a-1"))
            .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
                "name": "sessions/s-1/activities/a-1",
                "id": "a-1",
                "actor": "user"
            })))
            .mount(&server)
            .await;

        let client = client_for(&server).await;
        let activity = client
            .activities()
            .get("sessions/s-1/activities/a-1")
            .await
            .unwrap();

        assert_eq!(activity.id.as_deref(), Some("a-1"));
    }
}
