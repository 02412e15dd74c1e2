//! # Patchwork SDK
//!
//! Rust client for the Patchwork API — a remote coding agent that works on
//! your repositories in sessions and hands back pull requests.
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use patchwork_sdk::{PatchworkClient, PatchworkResult};
//!
//! #[tokio::main]
//! async fn main() -> PatchworkResult<()> {
//!     let client = PatchworkClient::builder()
//!         .api_key("pk-your-api-key")
//!         .build()?;
//!
//!     // List the repositories the agent can work with
//!     let page = client.sources().list(Default::default()).await?;
//!     for source in &page.sources {
//!         println!("{}", source.name);
//!     }
//!
//!     // Kick off a coding session
//!     let session = client
//!         .sessions()
//!         .create(patchwork_sdk::CreateSessionRequest {
//!             prompt: "Add dark mode support".to_string(),
//!             source_context: patchwork_sdk::SourceContext {
//!                 source: "sources/github/octo/widgets".to_string(),
//!                 branch: None,
//!             },
//!             title: None,
//!             require_plan_approval: None,
//!         })
//!         .await?;
//!     println!("created {:?} in state {:?}", session.name, session.state);
//!
//!     Ok(())
//! }
//! ```
//!
//! The client issues exactly one upstream request per call and never
//! retries; failures carry a structured [`PatchworkError`] the caller can
//! branch on.

pub mod api;
pub mod client;
pub mod config;
pub mod error;
pub mod resource;
pub mod transport;
pub mod types;

// Re-export main client
pub use client::{PatchworkClient, PatchworkClientBuilder};
pub use config::{ClientConfig, DEFAULT_BASE_URL};
pub use error::{PatchworkError, PatchworkResult};

// Re-export the API parameter types
pub use api::{PageParams, MAX_PAGE_SIZE, MIN_PAGE_SIZE};
pub use api::sources::ListSourcesParams;

// Re-export wire types for convenience
pub use types::{
    Ack, Activity, AutomationMode, Branch, CreateSessionRequest, GitHubRepo,
    ListActivitiesResponse, ListSessionsResponse, ListSourcesResponse, PullRequest, Session,
    SessionOutput, SessionState, Source, SourceContext,
};

// Re-export resource name validation
pub use resource::{validate_session_name, validate_source_name, SESSION_PREFIX, SOURCE_PREFIX};
