//! Local game data sources.
//!
//! This module locates the file backing an export mode and extracts the
//! map hashes to export from it:
//! - Vote file (`UserData/votedSongs.json`) for upvotes and downvotes
//! - Player profile (`PlayerData.dat`) for favorites

pub mod locator;
pub mod profile;
pub mod votes;

use std::path::Path;

use tracing::info;

use crate::error::{Error, Result};
use crate::mode::ExportMode;

pub use locator::{default_player_data_path, locate_source};
pub use profile::{CUSTOM_LEVEL_PREFIX, Player, PlayerProfile, select_player};
pub use votes::{VoteFile, VoteRecord, VoteType};

/// Console interaction needed while locating and reading sources
pub trait Prompter {
    /// Show a prompt and read one line of input
    fn prompt_line(&self, prompt: &str) -> Result<String>;

    fn display_message(&self, message: &str);

    fn display_warning(&self, message: &str);
}

/// Extract the hashes of the maps to export from the source file at `path`.
///
/// Hashes keep source order and may repeat. Fails with `NoMapsFound` when
/// nothing matches.
pub fn extract_hashes(
    mode: ExportMode,
    path: &Path,
    prompter: &dyn Prompter,
) -> Result<Vec<String>> {
    let hashes = match mode {
        ExportMode::Favorites => {
            let profile = PlayerProfile::load(path)?;
            let player = select_player(&profile.players, prompter)?;
            info!(
                "Using favorites of player {} ({})",
                player.name, player.id
            );
            player.favorite_hashes()
        }
        ExportMode::Upvotes => VoteFile::load(path)?.hashes_with_vote(VoteType::Upvote),
        ExportMode::Downvotes => VoteFile::load(path)?.hashes_with_vote(VoteType::Downvote),
    };

    if hashes.is_empty() {
        return Err(Error::NoMapsFound(mode));
    }

    info!("Found {} maps for {}", hashes.len(), mode);
    Ok(hashes)
}

/// Strip a UTF-8 byte order mark some tools leave at the start of JSON files
pub(crate) fn strip_bom(content: &str) -> &str {
    content.strip_prefix('\u{feff}').unwrap_or(content)
}


#[cfg(test)]
mod tests {
    use super::testing::ScriptedPrompter;
    use super::*;
    use std::fs;

    #[test]
    fn test_extract_upvotes_from_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("votedSongs.json");
        fs::write(
            &path,
            r#"{"aaa":{"voteType":"Upvote"},"bbb":{"voteType":"Downvote"}}"#,
        )
        .unwrap();

        let prompter = ScriptedPrompter::default();
        let hashes = extract_hashes(ExportMode::Upvotes, &path, &prompter).unwrap();
        assert_eq!(hashes, vec!["aaa"]);
        assert!(prompter.prompts.borrow().is_empty());
    }

    #[test]
    fn test_extract_no_matches_is_no_maps_found() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("votedSongs.json");
        fs::write(&path, r#"{"aaa":{"voteType":"Upvote"}}"#).unwrap();

        let prompter = ScriptedPrompter::default();
        let err = extract_hashes(ExportMode::Downvotes, &path, &prompter).unwrap_err();
        assert!(matches!(err, Error::NoMapsFound(ExportMode::Downvotes)));
    }

    #[test]
    fn test_extract_favorites_from_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("PlayerData.dat");
        fs::write(
            &path,
            "\u{feff}{\"localPlayers\":[{\"playerId\":\"1\",\"playerName\":\"A\",\
             \"favoritesLevelIds\":[\"custom_level_AAA\",\"someBuiltin\"]}]}",
        )
        .unwrap();

        let prompter = ScriptedPrompter::default();
        let hashes = extract_hashes(ExportMode::Favorites, &path, &prompter).unwrap();
        assert_eq!(hashes, vec!["AAA"]);
    }

    #[test]
    fn test_strip_bom() {
        assert_eq!(strip_bom("\u{feff}{}"), "{}");
        assert_eq!(strip_bom("{}"), "{}");
    }
}
