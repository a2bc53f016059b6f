//! `webchnl` - Client for the WebChnl public API
//!
//! # Features
//!
//! - **Viewer counts**: live per-channel viewers from `/viewerCounts`
//! - **Stream URLs**: channel metadata and stream links from the
//!   `/master.m3u` playlist
//! - **Playlist parsing**: a standalone extended-M3U parser usable on any text
//!
//! # Example
//!
//! ```rust,no_run
//! use webchnl::{StreamUrls, ViewerCounts};
//!
//! #[tokio::main]
//! async fn main() -> anyhow::Result<()> {
//!     let viewers = ViewerCounts::new()?;
//!     println!("{}", viewers.summary().await?);
//!
//!     let streams = StreamUrls::new()?;
//!     println!("{} channels", streams.get_stream_channels().await?.len());
//!     Ok(())
//! }
//! ```

pub mod config;
pub mod error;
pub mod http_client;
pub mod playlist;
pub mod streams;
pub mod viewers;

pub use error::{Result, WebchnlError};
pub use http_client::{ApiClient, ClientOptions, Transport, DEFAULT_BASE_URL};
pub use playlist::{parse_playlist, ChannelMap, StreamChannel};
pub use streams::{StreamSummary, StreamUrls};
pub use viewers::{Channel, ViewerCounts, ViewerSummary};

/// Version of webchnl
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
