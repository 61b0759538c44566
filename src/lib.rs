//! Client library for the Furtrack image board API.
//!
//! # Furtrack
//! [`FurtrackClient`] wraps the JSON API at `https://solar.furtrack.com`
//! with one method per endpoint: tag info, user profiles, single posts,
//! paginated post lists by tag or user, likes, albums and derived gallery
//! thumbnail URLs. [`Tag::parse`] and [`tags_by_type`] classify the raw tag
//! strings the API hands back by their numeric type prefix.
//!
//! ## General example
//! ```no_run
//! use furtrack_api::{FurtrackClient, Tag, TagType};
//!
//! async fn list_characters() -> Result<(), furtrack_api::FurtrackError> {
//!     let client = FurtrackClient::new(None)?; // Default configuration
//!
//!     client.set_api_key("my-api-key"); // Enable bearer authentication
//!
//!     let posts = client.get_posts_by_tag("1:borky", 0).await?; // First page
//!     println!("Found {} posts", posts.len());
//!
//!     let tag = Tag::parse("1:borky");
//!     assert_eq!(tag.tag_type(), TagType::Character);
//!     Ok(())
//! }
//! ```

// Public Exports
pub use reqwest;
pub use serde_json;

pub mod client;
pub mod config;
pub mod error;
pub mod tags;

pub use client::models::FurtrackPost;
pub use client::FurtrackClient;
pub use config::{ClientConfig, API_BASE_URL, DEFAULT_HEADERS, THUMB_BASE_URL};
pub use error::FurtrackError;
pub use tags::{tags_by_type, Tag, TagType, TAG_PREFIXES};
