use std::net::SocketAddr;
use std::time::Duration;

use axum::Router;
use axum::routing::get;
use tokio::task::JoinHandle;

const PING_INTERVAL: Duration = Duration::from_secs(5 * 60);

async fn root() -> &'static str {
    "Bot is running!"
}

async fn ping() -> &'static str {
    "pong"
}

fn router() -> Router {
    Router::new().route("/", get(root)).route("/ping", get(ping))
}

pub async fn serve(port: u16) -> anyhow::Result<()> {
    let addr = SocketAddr::from(([0, 0, 0, 0], port));
    log::info!("Web server listening on {}", addr);

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, router()).await?;
    Ok(())
}

/// Hits our own /ping endpoint on a fixed schedule so the hosting
/// platform never sees the process as idle. Failures only make noise;
/// the next tick tries again.
pub fn spawn_keepalive(self_url: String) -> JoinHandle<()> {
    tokio::spawn(async move {
        let client = reqwest::Client::new();
        let target = format!("{}/ping", self_url.trim_end_matches('/'));
        let mut tick = tokio::time::interval(PING_INTERVAL);
        loop {
            tick.tick().await;
            if let Err(e) = client.get(&target).send().await {
                log::warn!("Self-ping failed: {}", e);
            }
        }
    })
}
