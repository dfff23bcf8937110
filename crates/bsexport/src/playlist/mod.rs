//! Playlist (`.bplist`) building and serialization.
//!
//! The format is the JSON document read by the game's playlist loader:
//!
//! ```json
//! {"playlistTitle":"Upvotes (2026-10-19)","playlistAuthor":"BeatSaberExportVotes",
//!  "playlistDescription":"Exported at 2026-10-19 12:00:00 UTC.","image":null,
//!  "songs":[{"key":"1a2b","hash":"...","songName":"..."}]}
//! ```

mod file;

use std::cmp::Ordering;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::catalog::ResolvedMap;
use crate::error::Result;
use crate::mode::ExportMode;

pub use file::{PLAYLIST_EXTENSION, playlist_file_name, write_playlist};

/// Author written into every exported playlist
pub const PLAYLIST_AUTHOR: &str = "BeatSaberExportVotes";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Playlist {
    #[serde(rename = "playlistTitle")]
    pub title: String,
    #[serde(rename = "playlistAuthor")]
    pub author: String,
    #[serde(rename = "playlistDescription")]
    pub description: String,
    /// Base64 cover image; exports carry none
    pub image: Option<String>,
    pub songs: Vec<ResolvedMap>,
}

impl Playlist {
    /// Build the playlist for an export taken at `exported_at`.
    /// Songs are sorted with [`compare_map_ids`].
    pub fn build(mode: ExportMode, mut maps: Vec<ResolvedMap>, exported_at: DateTime<Utc>) -> Self {
        sort_maps(&mut maps);

        Self {
            title: format!("{} ({})", mode, exported_at.format("%Y-%m-%d")),
            author: PLAYLIST_AUTHOR.to_string(),
            description: format!(
                "Exported at {} UTC.",
                exported_at.format("%Y-%m-%d %H:%M:%S")
            ),
            image: None,
            songs: maps,
        }
    }

    /// Compact JSON form written to disk
    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string(self)?)
    }

    pub fn from_json(content: &str) -> Result<Self> {
        Ok(serde_json::from_str(content)?)
    }

    pub fn len(&self) -> usize {
        self.songs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.songs.is_empty()
    }
}

/// Order catalog keys by length, then lexicographically.
///
/// Keys are hex numbers without padding, so this is their numeric order.
pub fn compare_map_ids(a: &str, b: &str) -> Ordering {
    a.len().cmp(&b.len()).then_with(|| a.cmp(b))
}

pub fn sort_maps(maps: &mut [ResolvedMap]) {
    maps.sort_by(|a, b| compare_map_ids(&a.beat_saver_id, &b.beat_saver_id));
}
