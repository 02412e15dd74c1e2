//! Walk a session's activity history page by page.
//!
//! Run with:
//!   PATCHWORK_API_KEY=pk-... cargo run --example follow_session -- sessions/abc123

use patchwork_sdk::{PageParams, PatchworkClient, PatchworkResult};

#[tokio::main]
async fn main() -> PatchworkResult<()> {
    tracing_subscriber::fmt::init();

    let api_key = std::env::var("PATCHWORK_API_KEY")
        .expect("set PATCHWORK_API_KEY to run this example");

    let session_name = std::env::args()
        .nth(1)
        .expect("usage: follow_session <session-name>");

    let client = PatchworkClient::builder().api_key(api_key).build()?;

    let session = client.sessions().get(&session_name).await?;
    println!(
        "{} — {:?}",
        session.name.as_deref().unwrap_or(&session_name),
        session.state
    );

    let mut page_token: Option<String> = None;
    let mut total = 0usize;
    loop {
        let page = client
            .activities()
            .list(
                &session_name,
                PageParams {
                    page_size: Some(50),
                    page_token: page_token.clone(),
                },
            )
            .await?;

        for activity in &page.activities {
            total += 1;
            println!(
                "  [{}] {}",
                activity.actor.as_deref().unwrap_or("?"),
                activity.name.as_deref().unwrap_or("<unnamed>")
            );
        }

        match page.next_page_token {
            Some(token) => page_token = Some(token),
            None => break,
        }
    }

    println!("{total} activities");
    Ok(())
}
