use lizard_feeds::app;
use lizard_feeds::state::{AppConfig, AppState};
use std::net::SocketAddr;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenv::dotenv().ok();

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| "info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    tracing::info!("Log initialized");

    let config = AppConfig::from_env();
    if config.bearer_token.is_none() {
        tracing::warn!("TWITTER_BEARER_TOKEN is not set. /api/tweets will serve demo posts.");
    }
    tracing::info!(
        "Timeline source: @{} via {}",
        config.twitter_handle,
        config.twitter_api_url
    );
    match &config.static_dir {
        Some(dir) => tracing::info!("Serving landing page from {}", dir.display()),
        None => tracing::info!("STATIC_DIR is not set. Only the API routes are served."),
    }

    let app_state = AppState {
        config,
        http_client: lizard_feeds::http_client()?,
    };

    let port = std::env::var("PORT")
        .ok()
        .and_then(|p| p.parse().ok())
        .unwrap_or(3000);
    let addr = SocketAddr::from(([0, 0, 0, 0], port));

    let listener = tokio::net::TcpListener::bind(addr).await?;
    tracing::info!("Server running on http://localhost:{}", port);

    axum::serve(listener, app(app_state)).await?;

    Ok(())
}
