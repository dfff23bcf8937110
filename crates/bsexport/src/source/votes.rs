//! Vote file (`votedSongs.json`) parsing.
//!
//! The file is a JSON object keyed by map hash:
//!
//! ```json
//! { "0a1b...": { "hash": "0a1b...", "voteType": "Upvote" } }
//! ```

use std::fs;
use std::path::Path;

use serde::Deserialize;
use strum::{Display, EnumString};
use tracing::debug;

use super::strip_bom;
use crate::error::{Error, Result};

/// Vote direction recorded for a map
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    EnumString,
    Display,
)]
#[strum(ascii_case_insensitive)]
pub enum VoteType {
    Upvote,
    Downvote,
}

#[derive(Debug, Deserialize)]
struct RawVoteRecord {
    #[serde(rename = "voteType")]
    vote_type: Option<String>,
}

/// A single map vote
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VoteRecord {
    pub hash: String,
    pub vote_type: VoteType,
}

/// All votes from a vote file, in file order
#[derive(Debug, Clone, Default)]
pub struct VoteFile {
    pub records: Vec<VoteRecord>,
}

impl VoteFile {
    /// Load and validate a vote file
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let content = fs::read_to_string(path)?;
        let file = Self::parse(&content)?;
        debug!("Loaded {} votes from {}", file.records.len(), path.display());
        Ok(file)
    }

    /// Parse vote file content. Every record must carry a known vote type.
    pub fn parse(content: &str) -> Result<Self> {
        let entries: serde_json::Map<String, serde_json::Value> =
            serde_json::from_str(strip_bom(content))?;

        let records = entries
            .into_iter()
            .map(|(hash, value)| parse_record(hash, value))
            .collect::<Result<Vec<_>>>()?;

        Ok(Self { records })
    }

    /// Hashes voted in the given direction, in file order
    pub fn hashes_with_vote(&self, vote_type: VoteType) -> Vec<String> {
        self.records
            .iter()
            .filter(|record| record.vote_type == vote_type)
            .map(|record| record.hash.clone())
            .collect()
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}

fn parse_record(hash: String, value: serde_json::Value) -> Result<VoteRecord> {
    if hash.trim().is_empty() {
        return Err(Error::MalformedRecord {
            record: hash,
            reason: "empty map hash".to_string(),
        });
    }

    let raw = RawVoteRecord::deserialize(value).map_err(|e| Error::MalformedRecord {
        record: hash.clone(),
        reason: e.to_string(),
    })?;

    let vote = raw
        .vote_type
        .ok_or_else(|| Error::missing_field(hash.as_str(), "voteType"))?;
    let vote_type = vote
        .parse::<VoteType>()
        .map_err(|_| Error::MalformedRecord {
            record: hash.clone(),
            reason: format!("unknown vote type \"{}\"", vote),
        })?;

    Ok(VoteRecord { hash, vote_type })
}
