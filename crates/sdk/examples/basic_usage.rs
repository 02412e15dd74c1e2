//! Basic SDK usage example.
//!
//! Lists the sources the agent can work with and the most recent sessions.
//!
//! Run with: PATCHWORK_API_KEY=pk-... cargo run --example basic_usage

use patchwork_sdk::{PageParams, PatchworkClient, PatchworkResult};

#[tokio::main]
async fn main() -> PatchworkResult<()> {
    tracing_subscriber::fmt::init();

    let api_key = std::env::var("PATCHWORK_API_KEY")
        .expect("set PATCHWORK_API_KEY to run this example");

    let client = PatchworkClient::builder().api_key(api_key).build()?;

    println!("Listing sources...");
    let page = client.sources().list(Default::default()).await?;
    println!("Found {} sources", page.sources.len());
    for source in page.sources.iter().take(5) {
        println!("  {}", source.name);
    }

    println!("\nListing sessions...");
    let page = client
        .sessions()
        .list(PageParams {
            page_size: Some(10),
            page_token: None,
        })
        .await?;
    for session in &page.sessions {
        println!(
            "  {} — {:?} — {}",
            session.name.as_deref().unwrap_or("<unnamed>"),
            session.state,
            session.title.as_deref().unwrap_or(&session.prompt)
        );
    }
    if let Some(token) = page.next_page_token {
        println!("  (more available, next page token: {token})");
    }

    Ok(())
}
