// portal-console/examples/inbox_demo.rs
// Wires the console controllers against a running backend and tails the
// unread count for a while.

use std::sync::Arc;
use std::time::Duration;

use portal_client::{ClientConfig, HttpClient};
use portal_console::{NotificationInbox, NotificationPoller, ProfileHeader, QueryCache};
use tokio_util::sync::CancellationToken;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt::init();

    let args: Vec<String> = std::env::args().collect();
    if args.len() < 3 {
        println!("Usage: {} <base_url> <token>", args[0]);
        println!("  Example: {} http://localhost:8080 eyJhbGci...", args[0]);
        return Ok(());
    }

    let client: Arc<HttpClient> = Arc::new(
        ClientConfig::new(&args[1])
            .with_token(&args[2])
            .build_http_client(),
    );

    let header = ProfileHeader::new(client.clone(), Arc::new(QueryCache::new()));
    match header.load().await {
        Ok(profile) => tracing::info!(name = %profile.name, "logged in"),
        Err(e) => tracing::error!("failed to fetch profile: {}", e),
    }

    let inbox = Arc::new(NotificationInbox::new(
        client.clone(),
        Arc::new(QueryCache::new()),
    ));

    let page = inbox.load(1).await?;
    tracing::info!(
        items = page.items.len(),
        pages = page.pages,
        unread = inbox.unread_count(1).await,
        "inbox loaded"
    );

    // Watch the unread badge for a minute.
    let (poller, mut unread_rx) =
        NotificationPoller::new(inbox.clone(), Duration::from_secs(10));
    let cancel = CancellationToken::new();
    let handle = tokio::spawn(poller.run(cancel.clone()));

    let deadline = tokio::time::sleep(Duration::from_secs(60));
    tokio::pin!(deadline);
    loop {
        tokio::select! {
            _ = &mut deadline => break,
            changed = unread_rx.changed() => {
                if changed.is_err() {
                    break;
                }
                tracing::info!(unread = *unread_rx.borrow(), "unread count changed");
            }
        }
    }

    cancel.cancel();
    handle.await?;
    Ok(())
}
