//! BeatSaver catalog lookups.
//!
//! Map hashes are resolved in batches through the `/maps/hash/{hashes}`
//! endpoint. Maps the catalog does not know are logged and skipped.

pub mod resolver;
pub mod transport;

use serde::{Deserialize, Serialize};

pub use resolver::{CatalogResolver, MAX_BATCH_SIZE, Resolution};
#[cfg(feature = "http")]
pub use transport::HttpTransport;
pub use transport::{CatalogResponse, CatalogTransport};

/// A map the catalog knows about, as written to a playlist
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ResolvedMap {
    /// BeatSaver key (e.g. "1a2b")
    #[serde(rename = "key")]
    pub beat_saver_id: String,
    pub hash: String,
    #[serde(rename = "songName")]
    pub name: String,
}
