//! Connection constants and user configuration for the Furtrack client.
//!
//! All of this is pure process-wide data: the API hosts, the reserved album
//! ids and the header set sent with every request unless the caller
//! overrides it through [`ClientConfig`] or
//! [`FurtrackClient::set_headers`](crate::FurtrackClient::set_headers).

use log::warn;
use once_cell::sync::Lazy;
use reqwest::header::{HeaderMap, HeaderName, HeaderValue};

/// Base URL of the Furtrack JSON API.
pub const API_BASE_URL: &str = "https://solar.furtrack.com";

/// Host serving the derived post thumbnails.
pub const THUMB_BASE_URL: &str = "https://orca2.furtrack.com";

/// Reserved album id addressing every post uploaded by a user.
pub const ALBUM_USER_POSTS: &str = "3";

/// Reserved album id addressing the posts a user has liked.
pub const ALBUM_LIKES: &str = "o";

pub(crate) const USER_AGENT: &str = concat!("Rust Furtrack Client/", env!("CARGO_PKG_VERSION"));

/// Headers attached to every request unless overridden by the caller.
pub const DEFAULT_HEADERS: &[(&str, &str)] = &[
    ("user-agent", USER_AGENT),
    ("accept", "application/json"),
    ("referer", "https://www.furtrack.com/"),
    ("origin", "https://www.furtrack.com"),
    ("accept-language", "en-US,en;q=0.9"),
];

pub(crate) static DEFAULT_HEADER_MAP: Lazy<HeaderMap> = Lazy::new(|| {
    let mut headers = HeaderMap::with_capacity(DEFAULT_HEADERS.len());
    merge_headers(&mut headers, DEFAULT_HEADERS.iter().map(|(k, v)| (*k, *v)));
    headers
});

/// Shallow-merges `extra` into `headers`.
///
/// New keys add, existing keys are overwritten and everything else persists
/// unchanged. Entries that are not valid HTTP header names or values are
/// skipped.
pub(crate) fn merge_headers<'a, I>(headers: &mut HeaderMap, extra: I)
where
    I: IntoIterator<Item = (&'a str, &'a str)>,
{
    for (name, value) in extra {
        match (
            HeaderName::from_bytes(name.as_bytes()),
            HeaderValue::from_str(value),
        ) {
            (Ok(name), Ok(value)) => {
                headers.insert(name, value);
            }
            _ => warn!("Skipping invalid header entry '{name}'"),
        }
    }
}

/// User configuration for a [`FurtrackClient`](crate::FurtrackClient).
#[derive(Debug, Clone)]
pub struct ClientConfig {
    /// API key enabling bearer authentication. `None` sends unauthenticated
    /// requests.
    pub api_key: Option<String>,
    /// Extra headers merged over [`DEFAULT_HEADERS`] once at construction.
    pub headers: Vec<(String, String)>,
    /// API base URL. Defaults to [`API_BASE_URL`]; point it at a local mock
    /// server for testing.
    pub base_url: String,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            api_key: None,
            headers: Vec::new(),
            base_url: API_BASE_URL.to_string(),
        }
    }
}
