use crate::state::SharedState;
use axum::{extract::State, response::Json};
use feed_core::Post;

/// Always answers 200 with a JSON array; failures degrade to placeholder posts.
pub async fn get_tweets(State(state): State<SharedState>) -> Json<Vec<Post>> {
    let config = &state.config;
    let api = twitter::XApiClient::new(state.http_client.clone(), &config.twitter_api_url);

    let outcome = twitter::fetch_timeline(
        &api,
        config.bearer_token.as_deref(),
        &config.twitter_handle,
    )
    .await;

    if let Some(set) = outcome.fallback_set() {
        tracing::info!("Serving fallback posts ({})", set.as_str());
    }

    Json(outcome.into_posts())
}
