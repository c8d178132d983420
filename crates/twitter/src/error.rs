use std::fmt;

/// Which of the two upstream calls failed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Stage {
    Lookup,
    Timeline,
}

impl fmt::Display for Stage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Stage::Lookup => f.write_str("user lookup"),
            Stage::Timeline => f.write_str("tweets fetch"),
        }
    }
}

#[derive(Debug, thiserror::Error)]
pub enum FetchError {
    #[error("{stage} returned HTTP {status}: {detail}")]
    UpstreamHttp {
        stage: Stage,
        status: u16,
        detail: String,
        body: String,
    },
    #[error("{stage} response is malformed: {reason}")]
    MalformedResponse { stage: Stage, reason: String },
    #[error("{stage} request failed")]
    Transport {
        stage: Stage,
        #[source]
        source: reqwest::Error,
    },
    #[error("{stage} response is not valid JSON")]
    Decode {
        stage: Stage,
        #[source]
        source: serde_json::Error,
    },
}

impl FetchError {
    pub fn stage(&self) -> Stage {
        match self {
            FetchError::UpstreamHttp { stage, .. }
            | FetchError::MalformedResponse { stage, .. }
            | FetchError::Transport { stage, .. }
            | FetchError::Decode { stage, .. } => *stage,
        }
    }
}
