use std::path::PathBuf;

pub type SharedState = AppState;

#[derive(Clone, Debug)]
pub struct AppConfig {
    /// X API bearer token. `None` serves the demo posts.
    pub bearer_token: Option<String>,
    pub twitter_api_url: String,
    pub twitter_handle: String,
    /// Built landing page assets (`dist/`).
    pub static_dir: Option<PathBuf>,
}

impl AppConfig {
    pub fn from_env() -> Self {
        Self {
            bearer_token: non_empty_var("TWITTER_BEARER_TOKEN"),
            twitter_api_url: non_empty_var("TWITTER_API_URL")
                .unwrap_or_else(|| twitter::DEFAULT_API_URL.to_string()),
            twitter_handle: non_empty_var("TWITTER_HANDLE")
                .unwrap_or_else(|| twitter::DEFAULT_HANDLE.to_string()),
            static_dir: non_empty_var("STATIC_DIR").map(PathBuf::from),
        }
    }
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            bearer_token: None,
            twitter_api_url: twitter::DEFAULT_API_URL.to_string(),
            twitter_handle: twitter::DEFAULT_HANDLE.to_string(),
            static_dir: None,
        }
    }
}

fn non_empty_var(key: &str) -> Option<String> {
    std::env::var(key).ok().filter(|v| !v.trim().is_empty())
}

#[derive(Clone)]
pub struct AppState {
    pub config: AppConfig,
    pub http_client: reqwest::Client,
}
