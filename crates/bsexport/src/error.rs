use std::path::PathBuf;

use thiserror::Error;

use crate::mode::ExportMode;

#[derive(Debug, Error)]
pub enum Error {
    #[error("Invalid path \"{}\"", .0.display())]
    InvalidPath(PathBuf),

    #[error("Unable to locate {}", .0.display())]
    FileNotFound(PathBuf),

    #[error("Unable to determine the default location of {0}")]
    NoDefaultPath(&'static str),

    #[error("Malformed record \"{record}\": {reason}")]
    MalformedRecord { record: String, reason: String },

    #[error("No players found in player data")]
    NoPlayers,

    #[error("Invalid selection \"{input}\": {reason}")]
    InvalidSelection { input: String, reason: String },

    #[error("No maps found for {0}")]
    NoMapsFound(ExportMode),

    #[error("Failed to parse catalog response for map {hash}: missing field `{field}`")]
    ResponseParse { hash: String, field: &'static str },

    #[error("Catalog request to {url} failed: {message}")]
    CatalogRequest {
        url: String,
        status: Option<u16>,
        message: String,
    },

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, Error>;

impl Error {
    /// Build a `MalformedRecord` error for a record missing a required field
    pub fn missing_field(record: impl Into<String>, field: &str) -> Self {
        Error::MalformedRecord {
            record: record.into(),
            reason: format!("missing field `{}`", field),
        }
    }

    /// Check if this error is a "file not found" error
    pub fn is_not_found(&self) -> bool {
        match self {
            Error::FileNotFound(_) => true,
            Error::Io(e) => e.kind() == std::io::ErrorKind::NotFound,
            _ => false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_is_not_found() {
        let io_err = std::io::Error::new(std::io::ErrorKind::NotFound, "file not found");
        assert!(Error::Io(io_err).is_not_found());
        assert!(Error::FileNotFound(PathBuf::from("votedSongs.json")).is_not_found());

        let other_io_err = std::io::Error::new(std::io::ErrorKind::PermissionDenied, "denied");
        assert!(!Error::Io(other_io_err).is_not_found());
        assert!(!Error::NoPlayers.is_not_found());
    }

    #[test]
    fn test_missing_field_message() {
        let err = Error::missing_field("abc123", "voteType");
        assert_eq!(
            err.to_string(),
            "Malformed record \"abc123\": missing field `voteType`"
        );
    }
}
