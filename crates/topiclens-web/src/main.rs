//! Topiclens web server.
//!
//! Run with: cargo run -p topiclens-web

use std::net::SocketAddr;

use tracing::info;
use tracing_subscriber::EnvFilter;

use topiclens_queue::TaskQueue;
use topiclens_web::config::Config;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let config = Config::from_env()?;

    // Both connections are established up front so a bad URL kills the
    // process at startup, not on the first request.
    info!("Connecting to database...");
    let pool = topiclens_db::connect_pool(&config.database_url).await?;

    info!(queue = %config.queue_name, "Connecting to queue...");
    let queue = TaskQueue::connect(&config.redis_url, config.queue_name.clone()).await?;

    let state = topiclens_web::state::AppState::new(pool, queue);
    let app = topiclens_web::router::build_router(state);

    let addr = SocketAddr::from(([0, 0, 0, 0], config.port));
    let listener = tokio::net::TcpListener::bind(addr).await?;
    info!("Server listening on http://{}", addr);
    axum::serve(listener, app).await?;

    Ok(())
}
