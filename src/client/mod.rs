//! Request facade for `https://solar.furtrack.com`
//!
//! [`FurtrackClient`] owns a shared connection pool plus the mutable request
//! configuration (API key and header map) and exposes one method per API
//! endpoint. Cloning the client is cheap and every clone shares the same
//! configuration, so a key or header update through one handle is observed
//! by requests started through any other afterwards.

use log::{debug, warn};
use reqwest::header::{HeaderMap, HeaderValue, AUTHORIZATION};
use reqwest::Client;
use serde_json::Value;
use std::sync::{Arc, RwLock};
use urlencoding::encode;

use crate::config::{
    merge_headers, ClientConfig, ALBUM_LIKES, ALBUM_USER_POSTS, DEFAULT_HEADER_MAP,
};
use crate::error::FurtrackError;

pub mod models;

use self::models::FurtrackPost;

#[derive(Debug)]
struct ClientState {
    api_key: Option<String>,
    headers: HeaderMap,
}

impl ClientState {
    fn apply_api_key(&mut self, key: &str) {
        self.api_key = Some(key.to_string());

        match HeaderValue::from_str(&format!("Bearer {key}")) {
            Ok(value) => {
                self.headers.insert(AUTHORIZATION, value);
            }
            Err(_) => warn!("Skipping API key with non-header-safe characters"),
        }
    }
}

/// Main object to query the Furtrack API.
#[derive(Debug, Clone)]
pub struct FurtrackClient {
    client: Client,
    base_url: String,
    state: Arc<RwLock<ClientState>>,
}

impl FurtrackClient {
    /// Sets up the client with the supplied configuration.
    ///
    /// Caller headers are merged over the built-in defaults once, and an API
    /// key, when given, installs the bearer `Authorization` header.
    ///
    /// # Errors
    /// Fails when the underlying HTTP client cannot be constructed.
    pub fn new(config: Option<ClientConfig>) -> Result<Self, FurtrackError> {
        let cfg = config.unwrap_or_default();

        let mut headers = DEFAULT_HEADER_MAP.clone();
        merge_headers(
            &mut headers,
            cfg.headers.iter().map(|(k, v)| (k.as_str(), v.as_str())),
        );

        let mut state = ClientState {
            api_key: None,
            headers,
        };
        if let Some(key) = &cfg.api_key {
            state.apply_api_key(key);
        }

        let client = Client::builder().build()?;

        Ok(Self {
            client,
            base_url: cfg.base_url,
            state: Arc::new(RwLock::new(state)),
        })
    }

    /// Replaces the configured API key.
    ///
    /// The key and its bearer `Authorization` header are swapped in the same
    /// critical section, so a request started after this returns can never
    /// carry the previous token.
    pub fn set_api_key(&self, key: &str) {
        self.state.write().unwrap().apply_api_key(key);
    }

    /// Returns the currently configured API key, if any.
    pub fn api_key(&self) -> Option<String> {
        self.state.read().unwrap().api_key.clone()
    }

    /// Shallow-merges `headers` into the configured header map.
    ///
    /// New keys add, existing keys are overwritten and unspecified keys
    /// persist unchanged. Entries that are not valid HTTP headers are
    /// skipped.
    pub fn set_headers(&self, headers: &[(&str, &str)]) {
        let mut state = self.state.write().unwrap();
        merge_headers(&mut state.headers, headers.iter().copied());
    }

    /// Fetches the info payload of a single raw tag string.
    pub async fn get_tag_info(&self, tag: &str) -> Result<Value, FurtrackError> {
        self.get_json(&format!("/get/index/{}", encode(tag))).await
    }

    /// Fetches a user profile by username.
    pub async fn get_user(&self, username: &str) -> Result<Value, FurtrackError> {
        self.get_json(&format!("/get/u/{}", encode(username))).await
    }

    /// Fetches a single post by id.
    pub async fn get_post(&self, post_id: &str) -> Result<Value, FurtrackError> {
        self.get_json(&format!("/view/post/{}", encode(post_id)))
            .await
    }

    /// Fetches one page of the posts carrying `tag`.
    ///
    /// Page `0` selects the first page.
    pub async fn get_posts_by_tag(&self, tag: &str, page: u16) -> Result<Vec<Value>, FurtrackError> {
        let body = self
            .get_json(&format!("/get/tag/{}{}", encode(tag), page_suffix(page)))
            .await?;

        Ok(unwrap_posts(body))
    }

    /// Fetches one page of the posts uploaded by `username`.
    ///
    /// Page `0` selects the first page.
    pub async fn get_posts_by_user(
        &self,
        username: &str,
        page: u16,
    ) -> Result<Vec<Value>, FurtrackError> {
        let body = self
            .get_json(&format!(
                "/view/album/{}/{ALBUM_USER_POSTS}{}",
                encode(username),
                page_suffix(page)
            ))
            .await?;

        Ok(unwrap_posts(body))
    }

    /// Fetches one page of the posts `username` has liked.
    ///
    /// Page `0` selects the first page.
    pub async fn get_likes(&self, username: &str, page: u16) -> Result<Vec<Value>, FurtrackError> {
        let body = self
            .get_json(&format!(
                "/view/album/{}/{ALBUM_LIKES}{}",
                encode(username),
                page_suffix(page)
            ))
            .await?;

        Ok(unwrap_posts(body))
    }

    /// Fetches one page of a user album, body verbatim.
    ///
    /// Page `0` selects the first page.
    pub async fn get_album(
        &self,
        username: &str,
        album_id: &str,
        page: u16,
    ) -> Result<Value, FurtrackError> {
        self.get_json(&format!(
            "/view/album/{}/{}{}",
            encode(username),
            encode(album_id),
            page_suffix(page)
        ))
        .await
    }

    /// Fetches a post and derives its gallery thumbnail URL.
    ///
    /// # Errors
    /// Besides the usual request failures, fails with
    /// [`FurtrackError::MissingField`] when the post payload lacks one of
    /// the fields the URL is formatted from.
    pub async fn get_thumbnail(&self, post_id: &str) -> Result<String, FurtrackError> {
        let body = self.get_post(post_id).await?;
        let post: FurtrackPost = serde_json::from_value(body)?;

        post.thumbnail_url()
    }

    /// Returns the used client for external use.
    pub fn client(&self) -> Client {
        self.client.clone()
    }

    async fn get_json(&self, path: &str) -> Result<Value, FurtrackError> {
        let url = format!("{}{}", self.base_url, path);

        // Snapshot the headers before dispatch so a concurrent setter cannot
        // mix old and new configuration within one request.
        let headers = self.state.read().unwrap().headers.clone();

        debug!("GET {url}");
        let response = self.client.get(&url).headers(headers).send().await?;

        let status = response.status();
        if !status.is_success() {
            return Err(FurtrackError::RemoteStatus { status });
        }

        let body = response.text().await?;
        Ok(serde_json::from_str(&body)?)
    }
}

// Page 0 selects the first page and produces no path segment at all.
fn page_suffix(page: u16) -> String {
    if page > 0 {
        format!("/{page}")
    } else {
        String::new()
    }
}

/// Pulls the `posts` array out of a list response. An absent or non-array
/// `posts` field yields the empty list.
fn unwrap_posts(mut body: Value) -> Vec<Value> {
    match body.get_mut("posts").map(Value::take) {
        Some(Value::Array(posts)) => posts,
        _ => Vec::new(),
    }
}
