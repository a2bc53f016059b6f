//! Channel stream URLs from the `/master.m3u` playlist.
//!
//! Every query fetches and parses the playlist again; see
//! [`parse_playlist`] for which entries are kept.
//!
//! # Example
//!
//! ```rust,no_run
//! use webchnl::StreamUrls;
//!
//! # async fn example() -> webchnl::Result<()> {
//! let streams = StreamUrls::new()?;
//! if let Some(channel) = streams.get_channel_by_name("2x2_English").await? {
//!     println!("{}", channel.stream_url);
//! }
//! # Ok(())
//! # }
//! ```

use std::fmt;

use indexmap::IndexMap;
use serde::Serialize;
use tracing::debug;

use crate::error::Result;
use crate::http_client::{ApiClient, Transport};
use crate::playlist::{parse_playlist, ChannelMap, StreamChannel};

/// Path of the master playlist, relative to the API base URL.
pub const MASTER_PLAYLIST_PATH: &str = "/master.m3u";

/// First channel (in playlist order) whose `tvg-id` equals `tvg_id`.
pub fn find_by_id<'a>(channels: &'a ChannelMap, tvg_id: &str) -> Option<&'a StreamChannel> {
    channels.values().find(|c| c.id == tvg_id)
}

/// Channel name → stream URL.
pub fn stream_urls(channels: &ChannelMap) -> IndexMap<String, String> {
    channels
        .iter()
        .map(|(name, c)| (name.clone(), c.stream_url.clone()))
        .collect()
}

/// Channel name → logo URL.
pub fn logos(channels: &ChannelMap) -> IndexMap<String, String> {
    channels
        .iter()
        .map(|(name, c)| (name.clone(), c.logo_url.clone()))
        .collect()
}

/// Client for the master playlist endpoint.
pub struct StreamUrls {
    transport: Box<dyn Transport>,
}

impl StreamUrls {
    /// Client for the public API.
    pub fn new() -> Result<Self> {
        Ok(Self::with_transport(ApiClient::new()?))
    }

    pub fn with_base_url(base_url: &str) -> Result<Self> {
        Ok(Self::with_transport(ApiClient::with_base_url(base_url)?))
    }

    pub fn with_transport(transport: impl Transport + 'static) -> Self {
        Self {
            transport: Box::new(transport),
        }
    }

    /// Full URL of the playlist this client fetches.
    #[must_use]
    pub fn endpoint(&self) -> String {
        self.transport.endpoint(MASTER_PLAYLIST_PATH)
    }

    /// Fetch and parse the playlist.
    pub async fn get_stream_channels(&self) -> Result<ChannelMap> {
        let body = self.transport.get_text(MASTER_PLAYLIST_PATH).await?;
        let channels = parse_playlist(&body);
        debug!(count = channels.len(), bytes = body.len(), "Fetched playlist");
        Ok(channels)
    }

    pub async fn get_channel_by_name(&self, name: &str) -> Result<Option<StreamChannel>> {
        let mut channels = self.get_stream_channels().await?;
        Ok(channels.shift_remove(name))
    }

    pub async fn get_channel_by_id(&self, tvg_id: &str) -> Result<Option<StreamChannel>> {
        let channels = self.get_stream_channels().await?;
        Ok(find_by_id(&channels, tvg_id).cloned())
    }

    pub async fn get_all_channel_names(&self) -> Result<Vec<String>> {
        Ok(self.get_stream_channels().await?.into_keys().collect())
    }

    pub async fn get_all_stream_urls(&self) -> Result<IndexMap<String, String>> {
        Ok(stream_urls(&self.get_stream_channels().await?))
    }

    pub async fn get_all_logos(&self) -> Result<IndexMap<String, String>> {
        Ok(logos(&self.get_stream_channels().await?))
    }

    /// Fetch once and build a printable summary.
    pub async fn summary(&self) -> Result<StreamSummary> {
        Ok(StreamSummary {
            channels: self.get_stream_channels().await?,
        })
    }
}

/// Per-channel listing for display.
#[derive(Debug, Clone, Serialize)]
pub struct StreamSummary {
    pub channels: ChannelMap,
}

impl fmt::Display for StreamSummary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "WebChnl Stream Channels Summary")?;
        writeln!(f, "{}", "=".repeat(50))?;
        writeln!(f, "Total Channels: {}", self.channels.len())?;
        writeln!(f, "\nChannel Details:")?;
        writeln!(f, "{}", "-".repeat(50))?;

        for (name, channel) in &self.channels {
            writeln!(f, "Name: {name}")?;
            writeln!(f, "  TVG ID: {}", channel.id)?;
            writeln!(f, "  Logo: {}", channel.logo_url)?;
            writeln!(f, "  Stream: {}", channel.stream_url)?;
            writeln!(f)?;
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::WebchnlError;
    use async_trait::async_trait;
    use reqwest::StatusCode;

    const PLAYLIST: &str = r#"#EXTM3U
#EXTINF:-1 tvg-id="2x2id" tvg-name="2x2_English" tvg-logo="http://x/logo.png",2x2 English
http://x/stream.m3u8
#EXTINF:-1 tvg-id="cartoons" tvg-name="Cartoons" tvg-logo="http://x/c.png",Cartoons
http://x/cartoons.m3u8
"#;

    enum Canned {
        Body(&'static str),
        Status(StatusCode),
    }

    #[async_trait]
    impl Transport for Canned {
        fn endpoint(&self, path: &str) -> String {
            format!("memory://api{path}")
        }

        async fn get_text(&self, path: &str) -> Result<String> {
            match self {
                Self::Body(body) => Ok((*body).to_string()),
                Self::Status(status) => Err(WebchnlError::Status {
                    endpoint: self.endpoint(path),
                    status: *status,
                }),
            }
        }
    }

    #[tokio::test]
    async fn lookups_by_name_and_id() {
        let client = StreamUrls::with_transport(Canned::Body(PLAYLIST));

        let by_name = client.get_channel_by_name("2x2_English").await.unwrap().unwrap();
        assert_eq!(by_name.stream_url, "http://x/stream.m3u8");

        let by_id = client.get_channel_by_id("cartoons").await.unwrap().unwrap();
        assert_eq!(by_id.name, "Cartoons");

        assert!(client.get_channel_by_name("2x2 English").await.unwrap().is_none());
        assert!(client.get_channel_by_id("nope").await.unwrap().is_none());
    }

    #[tokio::test]
    async fn listings_cover_every_channel() {
        let client = StreamUrls::with_transport(Canned::Body(PLAYLIST));

        assert_eq!(
            client.get_all_channel_names().await.unwrap(),
            vec!["2x2_English".to_string(), "Cartoons".to_string()]
        );

        let urls = client.get_all_stream_urls().await.unwrap();
        assert_eq!(urls["Cartoons"], "http://x/cartoons.m3u8");

        let logos = client.get_all_logos().await.unwrap();
        assert_eq!(logos["2x2_English"], "http://x/logo.png");
    }

    #[tokio::test]
    async fn status_error_is_propagated() {
        let client = StreamUrls::with_transport(Canned::Status(StatusCode::NOT_FOUND));
        let err = client.get_stream_channels().await.unwrap_err();

        assert!(err.is_transport());
        assert_eq!(err.endpoint(), Some("memory://api/master.m3u"));
    }

    #[tokio::test]
    async fn empty_playlist_is_not_an_error() {
        let client = StreamUrls::with_transport(Canned::Body(""));
        assert!(client.get_stream_channels().await.unwrap().is_empty());
    }

    #[test]
    fn find_by_id_returns_first_in_playlist() {
        let text = r#"#EXTINF:-1 tvg-id="same" tvg-name="Zeta" tvg-logo="",Z
http://x/z.m3u8
#EXTINF:-1 tvg-id="same" tvg-name="Alpha" tvg-logo="",A
http://x/a.m3u8"#;
        let channels = parse_playlist(text);
        assert_eq!(find_by_id(&channels, "same").unwrap().name, "Zeta");
        assert_eq!(
            stream_urls(&channels).keys().collect::<Vec<_>>(),
            ["Zeta", "Alpha"]
        );
    }

    #[test]
    fn summary_lists_channels() {
        let summary = StreamSummary {
            channels: parse_playlist(PLAYLIST),
        };
        let text = summary.to_string();

        assert!(text.starts_with("WebChnl Stream Channels Summary\n"));
        assert!(text.contains(&"=".repeat(50)));
        assert!(text.contains("Total Channels: 2\n"));
        assert!(text.contains(
            "Name: 2x2_English\n  TVG ID: 2x2id\n  Logo: http://x/logo.png\n  Stream: http://x/stream.m3u8\n\n"
        ));
        let first = text.find("Name: 2x2_English").unwrap();
        let second = text.find("Name: Cartoons").unwrap();
        assert!(first < second);
    }
}
