pub mod handlers;
pub mod state;

use axum::{routing::get, Router};
use state::SharedState;
use tower::ServiceBuilder;
use tower_http::{cors::CorsLayer, services::ServeDir, trace::TraceLayer};

pub fn app(state: SharedState) -> Router {
    let router = Router::new()
        .route("/api/tweets", get(handlers::get_tweets))
        .route("/health", get(handlers::health));

    // The built landing page owns `/` when present.
    let router = match &state.config.static_dir {
        Some(dir) => router.fallback_service(ServeDir::new(dir)),
        None => router.route("/", get(handlers::root)),
    };

    router
        .layer(
            ServiceBuilder::new()
                .layer(TraceLayer::new_for_http())
                .layer(
                    CorsLayer::new()
                        .allow_origin(tower_http::cors::Any)
                        .allow_methods(tower_http::cors::Any)
                        .allow_headers(tower_http::cors::Any),
                ),
        )
        .with_state(state)
}

pub fn http_client() -> reqwest::Result<reqwest::Client> {
    reqwest::Client::builder()
        .user_agent("LizardFeeds/1.0")
        .build()
}
