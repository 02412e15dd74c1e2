//! Create a coding session and print its initial state.
//!
//! Run with:
//!   PATCHWORK_API_KEY=pk-... cargo run --example create_session -- \
//!     "sources/github/octo/widgets" "Add dark mode support"

use patchwork_sdk::{CreateSessionRequest, PatchworkClient, PatchworkResult, SourceContext};

#[tokio::main]
async fn main() -> PatchworkResult<()> {
    tracing_subscriber::fmt::init();

    let api_key = std::env::var("PATCHWORK_API_KEY")
        .expect("set PATCHWORK_API_KEY to run this example");

    let mut args = std::env::args().skip(1);
    let source = args.next().expect("usage: create_session <source> <prompt>");
    let prompt = args.next().expect("usage: create_session <source> <prompt>");

    let client = PatchworkClient::builder().api_key(api_key).build()?;

    let session = client
        .sessions()
        .create(CreateSessionRequest {
            prompt,
            source_context: SourceContext {
                source,
                branch: None,
            },
            title: None,
            require_plan_approval: Some(true),
        })
        .await?;

    println!(
        "Created {} in state {:?}",
        session.name.as_deref().unwrap_or("<unnamed>"),
        session.state
    );
    if let Some(url) = session.url {
        println!("Follow along at {url}");
    }

    Ok(())
}
