//! Extended-M3U playlist parsing.
//!
//! The master playlist lists one channel per entry: an `#EXTINF` metadata
//! line followed by the stream URL on the next line. Entries that do not fit
//! that shape are skipped without error, so an empty result can mean either
//! an empty playlist or one where nothing parsed.
//!
//! # Example
//!
//! ```rust
//! use webchnl::playlist::parse_playlist;
//!
//! let text = "#EXTM3U\n\
//!     #EXTINF:-1 tvg-id=\"2x2id\" tvg-name=\"2x2_English\" tvg-logo=\"http://x/logo.png\",2x2 English\n\
//!     http://x/stream.m3u8";
//!
//! let channels = parse_playlist(text);
//! assert_eq!(channels["2x2_English"].stream_url, "http://x/stream.m3u8");
//! ```

mod extinf;

use indexmap::IndexMap;
use serde::Serialize;
use tracing::{debug, trace};

pub use extinf::{parse_extinf, ExtInf, EXTINF_TAG};

/// A channel entry from the master playlist.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct StreamChannel {
    /// `tvg-id` attribute.
    pub id: String,
    /// `tvg-name` attribute; the key in [`ChannelMap`].
    pub name: String,
    /// `tvg-logo` attribute.
    pub logo_url: String,
    /// URL on the line after the `#EXTINF` entry.
    pub stream_url: String,
    /// Free text after the comma on the `#EXTINF` line.
    pub display_name: String,
}

/// Channels keyed by `tvg-name`, in playlist order.
pub type ChannelMap = IndexMap<String, StreamChannel>;

#[derive(Clone, Copy)]
enum ScanState<'a> {
    SeekingEntry,
    ExpectUrl(ExtInf<'a>),
}

/// Parse playlist text into channels keyed by `tvg-name`.
///
/// When two entries share a `tvg-name`, the later one replaces the earlier
/// but keeps the position where the name first appeared. Never fails;
/// malformed entries are dropped.
pub fn parse_playlist(content: &str) -> ChannelMap {
    let lines: Vec<&str> = content.trim().split('\n').collect();

    let mut channels = ChannelMap::new();
    let mut skipped = 0usize;
    let mut state = ScanState::SeekingEntry;

    for (index, raw) in lines.iter().enumerate() {
        let line = raw.trim();

        state = match state {
            ScanState::SeekingEntry => {
                if !line.starts_with(EXTINF_TAG) {
                    continue;
                }
                match parse_extinf(line) {
                    // A tag on the last line has no URL to pair with.
                    Some(entry) if index + 1 < lines.len() => ScanState::ExpectUrl(entry),
                    Some(_) => ScanState::SeekingEntry,
                    None => {
                        trace!(line = index + 1, "Unrecognised #EXTINF line");
                        skipped += 1;
                        ScanState::SeekingEntry
                    }
                }
            }
            ScanState::ExpectUrl(entry) => {
                if line.is_empty() || line.starts_with('#') {
                    trace!(line = index + 1, name = entry.tvg_name, "Entry has no stream URL");
                    skipped += 1;
                } else {
                    let channel = StreamChannel {
                        id: entry.tvg_id.to_string(),
                        name: entry.tvg_name.to_string(),
                        logo_url: entry.tvg_logo.to_string(),
                        stream_url: line.to_string(),
                        display_name: entry.display_name.to_string(),
                    };
                    if channels.insert(channel.name.clone(), channel).is_some() {
                        debug!(name = entry.tvg_name, "Duplicate channel name, keeping later entry");
                    }
                }
                ScanState::SeekingEntry
            }
        };
    }

    debug!(
        lines = lines.len(),
        channels = channels.len(),
        skipped,
        "Parsed playlist"
    );

    channels
}
