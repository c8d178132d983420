pub mod api;
pub mod error;
pub mod logic;
pub mod structs;

pub use api::{TimelineApi, XApiClient};
pub use error::{FetchError, Stage};
pub use logic::{fetch_timeline, FeedOutcome};

pub const DEFAULT_API_URL: &str = "https://api.twitter.com/2";
pub const DEFAULT_HANDLE: &str = "SirDonnyLizard";
