//! Fetches public metadata for a single video share URL via the oEmbed
//! endpoint. A peripheral convenience, independent of the analysis
//! pipeline.

pub mod error;

pub use error::{Error, Result};

use serde::{Deserialize, Serialize};
use tokmirror_core::export::video_id;

const OEMBED_ENDPOINT: &str = "https://www.tiktok.com/oembed";

/// Public metadata for one video
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct VideoMetadata {
    pub video_id: String,
    pub url: String,
    pub title: String,
    pub author: String,
    pub thumbnail: String,
}

#[derive(Debug, Deserialize)]
struct OembedResponse {
    #[serde(default)]
    url: String,
    #[serde(default)]
    title: String,
    #[serde(default)]
    author_name: String,
    #[serde(default)]
    thumbnail_url: String,
}

pub struct VideoLookup {
    client: reqwest::Client,
    endpoint: String,
}

impl VideoLookup {
    pub fn new() -> Self {
        Self::with_endpoint(OEMBED_ENDPOINT)
    }

    /// Point the lookup at a different endpoint (used by tests)
    pub fn with_endpoint(endpoint: impl Into<String>) -> Self {
        Self {
            client: reqwest::Client::new(),
            endpoint: endpoint.into(),
        }
    }

    /// Resolve a share URL to its public metadata.
    ///
    /// The video id is extracted locally; share URLs without a
    /// `video/<digits>` segment fail before any network call.
    pub async fn lookup(&self, share_url: &str) -> Result<VideoMetadata> {
        let video_id =
            video_id(share_url).ok_or_else(|| Error::InvalidShareUrl(share_url.to_string()))?;

        let target = format!(
            "{}?url=https://www.tiktok.com/video/{}",
            self.endpoint, video_id
        );
        tracing::debug!("Fetching oEmbed metadata: {}", target);

        let response = self.client.get(&target).send().await?;
        if !response.status().is_success() {
            return Err(Error::Status(response.status().as_u16()));
        }

        let body: OembedResponse = response.json().await?;
        Ok(VideoMetadata {
            video_id,
            url: body.url,
            title: body.title,
            author: body.author_name,
            thumbnail: body.thumbnail_url,
        })
    }
}

impl Default for VideoLookup {
    fn default() -> Self {
        Self::new()
    }
}
