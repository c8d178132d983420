use feed_core::Post;
use serde::Deserialize;

/// `GET /users/by/username/{handle}`
#[derive(Debug, Default, Deserialize)]
pub struct UserLookupResponse {
    pub data: Option<UserData>,
    #[serde(default)]
    pub errors: Vec<ApiError>,
}

#[derive(Debug, Deserialize)]
pub struct UserData {
    pub id: Option<String>,
    pub username: Option<String>,
}

/// `GET /users/{id}/tweets`
#[derive(Debug, Default, Deserialize)]
pub struct TweetsResponse {
    pub data: Option<Vec<Post>>,
    pub meta: Option<TimelineMeta>,
    #[serde(default)]
    pub errors: Vec<ApiError>,
}

#[derive(Debug, Deserialize)]
pub struct TimelineMeta {
    pub result_count: Option<u32>,
}

/// Partial error inside a 200 body (`errors: [...]`).
#[derive(Debug, Deserialize)]
pub struct ApiError {
    pub title: Option<String>,
    pub detail: Option<String>,
}

/// Problem document returned with non-2xx statuses.
#[derive(Debug, Deserialize)]
pub struct ProblemDetail {
    pub title: Option<String>,
    pub detail: Option<String>,
}

pub fn describe_errors(errors: &[ApiError]) -> String {
    if errors.is_empty() {
        return "no data and no errors in body".to_string();
    }
    errors
        .iter()
        .map(|e| {
            e.detail
                .as_deref()
                .or(e.title.as_deref())
                .unwrap_or("unknown error")
        })
        .collect::<Vec<_>>()
        .join("; ")
}
