//! Live viewer counts from the `/viewerCounts` endpoint.
//!
//! The endpoint returns a JSON array with one object per channel:
//!
//! ```json
//! [{"name": "A", "slug": "a", "viewers": 5}, {"name": "B", "slug": "b", "viewers": -1}]
//! ```
//!
//! A count of `-1` marks an offline channel. Every query re-fetches the list.
//!
//! # Example
//!
//! ```rust,no_run
//! use webchnl::ViewerCounts;
//!
//! # async fn example() -> webchnl::Result<()> {
//! let viewers = ViewerCounts::new()?;
//! for channel in viewers.get_online_channels().await? {
//!     println!("{}: {}", channel.name, channel.viewers);
//! }
//! # Ok(())
//! # }
//! ```

use std::fmt;

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::error::{Result, WebchnlError};
use crate::http_client::{ApiClient, Transport};

/// Path of the viewer-count endpoint, relative to the API base URL.
pub const VIEWER_COUNTS_PATH: &str = "/viewerCounts";

/// Viewer count reported for offline channels.
pub const OFFLINE_VIEWERS: i64 = -1;

/// A channel and its current viewer count.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Channel {
    pub name: String,
    pub slug: String,
    pub viewers: i64,
}

impl Channel {
    /// Online when the count is zero or more.
    #[must_use]
    pub fn is_online(&self) -> bool {
        self.viewers >= 0
    }

    /// Offline only for the `-1` sentinel. Other negative counts are neither
    /// online nor offline.
    #[must_use]
    pub fn is_offline(&self) -> bool {
        self.viewers == OFFLINE_VIEWERS
    }
}

/// Channels that are online, in endpoint order.
pub fn online(channels: &[Channel]) -> Vec<Channel> {
    channels.iter().filter(|c| c.is_online()).cloned().collect()
}

/// Channels that are offline, in endpoint order.
pub fn offline(channels: &[Channel]) -> Vec<Channel> {
    channels.iter().filter(|c| c.is_offline()).cloned().collect()
}

/// Sum of viewers across online channels.
pub fn total_viewers(channels: &[Channel]) -> i64 {
    channels
        .iter()
        .filter(|c| c.is_online())
        .map(|c| c.viewers)
        .sum()
}

/// First channel with the given slug.
pub fn find_by_slug<'a>(channels: &'a [Channel], slug: &str) -> Option<&'a Channel> {
    channels.iter().find(|c| c.slug == slug)
}

/// Decode the endpoint's JSON body.
pub fn decode_channels(endpoint: &str, body: &str) -> Result<Vec<Channel>> {
    serde_json::from_str(body).map_err(|source| WebchnlError::Decode {
        endpoint: endpoint.to_string(),
        source,
    })
}

/// Client for the viewer-count endpoint.
pub struct ViewerCounts {
    transport: Box<dyn Transport>,
}

impl ViewerCounts {
    /// Client for the public API.
    pub fn new() -> Result<Self> {
        Ok(Self::with_transport(ApiClient::new()?))
    }

    /// Client for a different API root, e.g. a staging server.
    pub fn with_base_url(base_url: &str) -> Result<Self> {
        Ok(Self::with_transport(ApiClient::with_base_url(base_url)?))
    }

    pub fn with_transport(transport: impl Transport + 'static) -> Self {
        Self {
            transport: Box::new(transport),
        }
    }

    /// Full URL of the endpoint this client queries.
    #[must_use]
    pub fn endpoint(&self) -> String {
        self.transport.endpoint(VIEWER_COUNTS_PATH)
    }

    /// Fetch every channel with its viewer count.
    pub async fn get_all_channels(&self) -> Result<Vec<Channel>> {
        let body = self.transport.get_text(VIEWER_COUNTS_PATH).await?;
        let channels = decode_channels(&self.endpoint(), &body)?;
        debug!(count = channels.len(), "Fetched viewer counts");
        Ok(channels)
    }

    pub async fn get_channel_by_slug(&self, slug: &str) -> Result<Option<Channel>> {
        let channels = self.get_all_channels().await?;
        Ok(find_by_slug(&channels, slug).cloned())
    }

    pub async fn get_online_channels(&self) -> Result<Vec<Channel>> {
        Ok(online(&self.get_all_channels().await?))
    }

    pub async fn get_offline_channels(&self) -> Result<Vec<Channel>> {
        Ok(offline(&self.get_all_channels().await?))
    }

    /// Total viewers across all online channels.
    pub async fn get_total_viewers(&self) -> Result<i64> {
        Ok(total_viewers(&self.get_all_channels().await?))
    }

    /// Fetch once and build a printable summary.
    pub async fn summary(&self) -> Result<ViewerSummary> {
        Ok(ViewerSummary::new(self.get_all_channels().await?))
    }
}

/// Totals and per-channel rows for display.
#[derive(Debug, Clone, Serialize)]
pub struct ViewerSummary {
    pub total_channels: usize,
    pub online_channels: usize,
    pub total_viewers: i64,
    pub channels: Vec<Channel>,
}

impl ViewerSummary {
    #[must_use]
    pub fn new(channels: Vec<Channel>) -> Self {
        Self {
            total_channels: channels.len(),
            online_channels: channels.iter().filter(|c| c.is_online()).count(),
            total_viewers: total_viewers(&channels),
            channels,
        }
    }
}

impl fmt::Display for ViewerSummary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "WebChnl Viewer Count Summary")?;
        writeln!(f, "{}", "=".repeat(40))?;
        writeln!(f, "Total Channels: {}", self.total_channels)?;
        writeln!(f, "Online Channels: {}", self.online_channels)?;
        writeln!(f, "Total Viewers: {}", self.total_viewers)?;
        writeln!(f, "\nChannel Details:")?;
        writeln!(f, "{}", "-".repeat(40))?;

        for channel in &self.channels {
            let (status, viewers) = if channel.is_online() {
                ("ONLINE", format!("{} viewers", channel.viewers))
            } else {
                ("OFFLINE", "offline".to_string())
            };
            writeln!(f, "{:<20} | {status:<7} | {viewers}", channel.name)?;
        }

        Ok(())
    }
}
