use crate::error::{FetchError, Stage};
use crate::structs::{ProblemDetail, TweetsResponse, UserLookupResponse};
use async_trait::async_trait;
use reqwest::Client;
use serde::de::DeserializeOwned;

const MAX_RESULTS: &str = "5";
const TWEET_FIELDS: &str = "created_at";

/// The two X API v2 calls the timeline needs.
#[async_trait]
pub trait TimelineApi: Send + Sync {
    async fn lookup_user(&self, handle: &str, token: &str)
        -> Result<UserLookupResponse, FetchError>;

    async fn user_tweets(&self, user_id: &str, token: &str)
        -> Result<TweetsResponse, FetchError>;
}

#[derive(Clone, Debug)]
pub struct XApiClient {
    client: Client,
    base_url: String,
}

impl XApiClient {
    pub fn new(client: Client, base_url: &str) -> Self {
        Self {
            client,
            base_url: base_url.trim_end_matches('/').to_string(),
        }
    }

    pub fn user_lookup_url(&self, handle: &str) -> String {
        format!("{}/users/by/username/{}", self.base_url, handle)
    }

    pub fn user_tweets_url(&self, user_id: &str) -> String {
        format!("{}/users/{}/tweets", self.base_url, user_id)
    }

    async fn get_json<T: DeserializeOwned>(
        &self,
        stage: Stage,
        url: &str,
        query: &[(&str, &str)],
        token: &str,
    ) -> Result<T, FetchError> {
        let res = self
            .client
            .get(url)
            .bearer_auth(token)
            .query(query)
            .send()
            .await
            .map_err(|source| FetchError::Transport { stage, source })?;

        let status = res.status();
        let body = res
            .text()
            .await
            .map_err(|source| FetchError::Transport { stage, source })?;

        if !status.is_success() {
            return Err(FetchError::UpstreamHttp {
                stage,
                status: status.as_u16(),
                detail: problem_detail(&body),
                body,
            });
        }

        serde_json::from_str(&body).map_err(|source| FetchError::Decode { stage, source })
    }
}

#[async_trait]
impl TimelineApi for XApiClient {
    async fn lookup_user(
        &self,
        handle: &str,
        token: &str,
    ) -> Result<UserLookupResponse, FetchError> {
        let url = self.user_lookup_url(handle);
        self.get_json(Stage::Lookup, &url, &[], token).await
    }

    async fn user_tweets(&self, user_id: &str, token: &str) -> Result<TweetsResponse, FetchError> {
        let url = self.user_tweets_url(user_id);
        self.get_json(
            Stage::Timeline,
            &url,
            &[("max_results", MAX_RESULTS), ("tweet.fields", TWEET_FIELDS)],
            token,
        )
        .await
    }
}

/// Error bodies are usually problem documents; fall back to a generic message otherwise.
fn problem_detail(body: &str) -> String {
    serde_json::from_str::<ProblemDetail>(body)
        .ok()
        .and_then(|p| p.detail.or(p.title))
        .unwrap_or_else(|| "request failed".to_string())
}
