//! # bsexport
//!
//! Core library for exporting Beat Saber votes and favorites to playlists.
//!
//! This crate provides:
//! - Source location and parsing (`votedSongs.json`, `PlayerData.dat`)
//! - Batched map lookups against the BeatSaver catalog
//! - Playlist (`.bplist`) building and serialization
//!
//! ## Feature Flags
//!
//! - `http`: Enables [`HttpTransport`], the `ureq`-backed catalog client.
//!   Without it the catalog is reachable only through a caller-supplied
//!   [`CatalogTransport`].

pub mod catalog;
pub mod config;
pub mod error;
pub mod exporter;
pub mod mode;
pub mod playlist;
pub mod prelude;
pub mod source;

pub use catalog::{
    CatalogResolver, CatalogResponse, CatalogTransport, MAX_BATCH_SIZE, Resolution, ResolvedMap,
};
#[cfg(feature = "http")]
pub use catalog::HttpTransport;
pub use config::{DEFAULT_CATALOG_URL, ExportConfig, ExportConfigBuilder};
pub use error::{Error, Result};
pub use exporter::{ExportSummary, Exporter};
pub use mode::ExportMode;
pub use playlist::{PLAYLIST_AUTHOR, Playlist, playlist_file_name, sort_maps, write_playlist};
pub use source::{
    Player, PlayerProfile, Prompter, VoteFile, VoteRecord, VoteType, default_player_data_path,
    extract_hashes, locate_source, select_player,
};
