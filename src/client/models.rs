use serde::{Deserialize, Serialize};

use crate::config::THUMB_BASE_URL;
use crate::error::FurtrackError;

/// The subset of a Furtrack post payload needed to derive its gallery
/// thumbnail URL. Every field is optional because the API does not
/// guarantee any of them.
#[derive(Serialize, Deserialize, Debug, Clone, Default)]
pub struct FurtrackPost {
    pub id: Option<u64>,
    #[serde(rename = "submitUserId")]
    pub submit_user_id: Option<u64>,
    #[serde(rename = "metaFingerprint")]
    pub meta_fingerprint: Option<String>,
    #[serde(rename = "metaFiletype")]
    pub meta_filetype: Option<String>,
}

impl FurtrackPost {
    /// Formats the gallery thumbnail URL for this post.
    ///
    /// The upstream service leaves these fields unchecked and degrades to a
    /// URL containing literal placeholders when one is absent; here an
    /// absent field fails with [`FurtrackError::MissingField`] instead.
    pub fn thumbnail_url(&self) -> Result<String, FurtrackError> {
        let submit_user_id = self.submit_user_id.ok_or(FurtrackError::MissingField {
            field: "submitUserId",
        })?;
        let id = self.id.ok_or(FurtrackError::MissingField { field: "id" })?;
        let fingerprint = self
            .meta_fingerprint
            .as_deref()
            .ok_or(FurtrackError::MissingField {
                field: "metaFingerprint",
            })?;
        let filetype = self
            .meta_filetype
            .as_deref()
            .ok_or(FurtrackError::MissingField {
                field: "metaFiletype",
            })?;

        Ok(format!(
            "{THUMB_BASE_URL}/gallery/{submit_user_id}/{id}-{fingerprint}.{filetype}"
        ))
    }
}
