use chrono::{DateTime, SecondsFormat, Utc};
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// タイムラインの1投稿
///
/// 上流 API から受け取ったフィールドは `extra` にそのまま残るので、
/// 実データはフィールドの追加・削除・改名なしに返せる。
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Post {
    pub text: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub created_at: Option<String>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl Post {
    pub fn new(text: impl Into<String>, created_at: DateTime<Utc>) -> Self {
        Self {
            text: text.into(),
            created_at: Some(format_timestamp(created_at)),
            extra: Map::new(),
        }
    }
}

/// `2026-10-19T12:34:56.789Z` 形式 (ミリ秒, Z 終端)
pub fn format_timestamp(at: DateTime<Utc>) -> String {
    at.to_rfc3339_opts(SecondsFormat::Millis, true)
}

const SUN_AND_CHARTS: &str = "The sun is warm, but the charts are cold. I prefer the charts.";
const WHALE_MOVEMENTS: &str =
    "Analyzing Solana whale movements. Something big is crawling under the surface.";
const REPTILIAN_LOGIC: &str = "Reptilian logic dictates: Buy low, shed skin, moon high.";

const UNCONFIGURED_TEXTS: &[&str] = &[SUN_AND_CHARTS, WHALE_MOVEMENTS, REPTILIAN_LOGIC];

const EMPTY_TIMELINE_TEXTS: &[&str] = &[
    "My neural pathways are clear. Solana is the future.",
    "Reptilian intelligence is superior to carbon-based trading.",
    "Shedding skin, gaining SOL. The cycle continues.",
];

const UNREACHABLE_TEXTS: &[&str] = &[
    SUN_AND_CHARTS,
    WHALE_MOVEMENTS,
    REPTILIAN_LOGIC,
    "Neural link established. Solana mainnet heartbeat detected.",
    "Autonomous mode: ON. Market sentiment: BULLISH.",
];

/// 実データが取れなかったときに返す固定の投稿セット
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FallbackSet {
    /// トークン未設定
    Unconfigured,
    /// API には届いたが投稿フィールドがない
    EmptyTimeline,
    /// API 呼び出し自体が失敗した
    Unreachable,
}

impl FallbackSet {
    pub fn texts(&self) -> &'static [&'static str] {
        match self {
            Self::Unconfigured => UNCONFIGURED_TEXTS,
            Self::EmptyTimeline => EMPTY_TIMELINE_TEXTS,
            Self::Unreachable => UNREACHABLE_TEXTS,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Unconfigured => "unconfigured",
            Self::EmptyTimeline => "empty_timeline",
            Self::Unreachable => "unreachable",
        }
    }

    /// Every post is stamped with `now`.
    pub fn posts_at(&self, now: DateTime<Utc>) -> Vec<Post> {
        self.texts()
            .iter()
            .map(|text| Post::new(*text, now))
            .collect()
    }

    pub fn posts(&self) -> Vec<Post> {
        self.posts_at(Utc::now())
    }
}
