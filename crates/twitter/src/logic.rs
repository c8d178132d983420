use crate::api::TimelineApi;
use crate::error::{FetchError, Stage};
use crate::structs::describe_errors;
use feed_core::{FallbackSet, Post};

/// Result of one timeline request, before any fallback is applied.
#[derive(Debug)]
pub enum FeedOutcome {
    Live(Vec<Post>),
    Unconfigured,
    /// Both calls succeeded but the tweets body had no `data` field.
    EmptyTimeline,
    Failed(FetchError),
}

impl FeedOutcome {
    pub fn fallback_set(&self) -> Option<FallbackSet> {
        match self {
            FeedOutcome::Live(_) => None,
            FeedOutcome::Unconfigured => Some(FallbackSet::Unconfigured),
            FeedOutcome::EmptyTimeline => Some(FallbackSet::EmptyTimeline),
            FeedOutcome::Failed(_) => Some(FallbackSet::Unreachable),
        }
    }

    pub fn into_posts(self) -> Vec<Post> {
        match self {
            FeedOutcome::Live(posts) => posts,
            FeedOutcome::Unconfigured => FallbackSet::Unconfigured.posts(),
            FeedOutcome::EmptyTimeline => FallbackSet::EmptyTimeline.posts(),
            FeedOutcome::Failed(_) => FallbackSet::Unreachable.posts(),
        }
    }
}

pub async fn fetch_timeline<A: TimelineApi + ?Sized>(
    api: &A,
    token: Option<&str>,
    handle: &str,
) -> FeedOutcome {
    let Some(token) = token.filter(|t| !t.is_empty()) else {
        tracing::info!("No bearer token configured, serving demo posts");
        return FeedOutcome::Unconfigured;
    };

    match fetch_live(api, token, handle).await {
        Ok(Some(posts)) => {
            tracing::debug!("Fetched {} posts for @{}", posts.len(), handle);
            FeedOutcome::Live(posts)
        }
        Ok(None) => FeedOutcome::EmptyTimeline,
        Err(e) => {
            match &e {
                FetchError::UpstreamHttp {
                    stage,
                    status,
                    body,
                    ..
                } => {
                    tracing::warn!("X API {} HTTP error: {} {}", stage, status, body);
                }
                FetchError::MalformedResponse { stage, reason } => {
                    tracing::warn!("X API {} returned an unexpected body: {}", stage, reason);
                }
                FetchError::Transport { .. } | FetchError::Decode { .. } => {
                    tracing::warn!("X API call failed: {:?}", e);
                }
            }
            FeedOutcome::Failed(e)
        }
    }
}

/// `Ok(None)` means the API answered but the timeline carried no `data`.
async fn fetch_live<A: TimelineApi + ?Sized>(
    api: &A,
    token: &str,
    handle: &str,
) -> Result<Option<Vec<Post>>, FetchError> {
    let user = api.lookup_user(handle, token).await?;
    let user_id = user
        .data
        .and_then(|d| d.id)
        .ok_or_else(|| FetchError::MalformedResponse {
            stage: Stage::Lookup,
            reason: describe_errors(&user.errors),
        })?;

    let tweets = api.user_tweets(&user_id, token).await?;
    if tweets.data.is_none() {
        let result_count = tweets.meta.as_ref().and_then(|m| m.result_count);
        tracing::info!(
            "Tweets body for @{} has no data (result_count={:?}, {})",
            handle,
            result_count,
            describe_errors(&tweets.errors)
        );
    }
    Ok(tweets.data)
}
