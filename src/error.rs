use reqwest::StatusCode;
use thiserror::Error;

/// Enumerates the possible errors that can arise while talking to the Furtrack API.
///
/// Failures are surfaced to the immediate caller without retries or local
/// recovery of any kind.
#[derive(Error, Debug)]
pub enum FurtrackError {
    /// An error occurred during the network exchange itself, such as a DNS
    /// failure, a TLS handshake error or an interrupted body read.
    /// Wraps the underlying `reqwest::Error`.
    #[error("Connection Error")]
    ConnectionError(#[from] reqwest::Error),

    /// The server answered with a non-success HTTP status. The response body
    /// is not parsed as a success payload in this case.
    #[error("Furtrack returned status {status}")]
    RemoteStatus { status: StatusCode },

    /// The response body could not be deserialized as JSON.
    /// Wraps the underlying `serde_json::Error`.
    #[error("Error while deserializing JSON")]
    JsonDecodeFail(#[from] serde_json::Error),

    /// A post payload is missing a field required to derive its thumbnail URL.
    /// `field` indicates the name of the missing field.
    #[error("Post is missing an essential field {field}")]
    MissingField { field: &'static str },
}
