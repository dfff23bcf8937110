//! Source file location for each export mode

use std::path::{Path, PathBuf};

use tracing::debug;

use super::Prompter;
use crate::config::ExportConfig;
use crate::error::{Error, Result};
use crate::mode::ExportMode;

/// Vote file location relative to the game directory
pub const VOTE_FILE_PATH: [&str; 2] = ["UserData", "votedSongs.json"];

/// Player profile file name
pub const PLAYER_DATA_FILE: &str = "PlayerData.dat";

const PLAYER_DATA_DIR: [&str; 4] = ["AppData", "LocalLow", "Hyperbolic Magnetism", "Beat Saber"];

/// Default location of the player profile file.
///
/// Windows keeps it under the user profile's `AppData\LocalLow`; elsewhere the
/// game runs through Proton and the same tree lives in the Steam prefix.
#[cfg(target_os = "windows")]
pub fn default_player_data_path() -> Option<PathBuf> {
    let mut path = dirs::home_dir()?;
    path.extend(PLAYER_DATA_DIR);
    path.push(PLAYER_DATA_FILE);
    Some(path)
}

#[cfg(not(target_os = "windows"))]
pub fn default_player_data_path() -> Option<PathBuf> {
    // Steam app ID of Beat Saber
    const STEAM_APP_ID: &str = "620980";

    let mut path = dirs::data_dir()?;
    path.extend([
        "Steam",
        "steamapps",
        "compatdata",
        STEAM_APP_ID,
        "pfx",
        "drive_c",
        "users",
        "steamuser",
    ]);
    path.extend(PLAYER_DATA_DIR);
    path.push(PLAYER_DATA_FILE);
    Some(path)
}

/// Resolve the file to read for `mode`.
///
/// Vote modes need the game directory, taken from the config or asked for.
/// Favorites use the configured or platform default profile path.
pub fn locate_source(
    mode: ExportMode,
    config: &ExportConfig,
    prompter: &dyn Prompter,
) -> Result<PathBuf> {
    let path = match mode {
        ExportMode::Favorites => match &config.player_data_path {
            Some(path) => path.clone(),
            None => default_player_data_path().ok_or(Error::NoDefaultPath(PLAYER_DATA_FILE))?,
        },
        ExportMode::Upvotes | ExportMode::Downvotes => {
            let game_dir = match &config.game_dir {
                Some(dir) => dir.clone(),
                None => {
                    let input = prompter
                        .prompt_line("Enter Beat Saber path (contains 'Beat Saber.exe'): ")?;
                    clean_path_input(&input)
                }
            };
            vote_file_path(&game_dir)?
        }
    };

    if !path.is_file() {
        return Err(Error::FileNotFound(path));
    }

    debug!("Reading {} from {}", mode, path.display());
    Ok(path)
}

/// Vote file path inside a validated game directory
pub fn vote_file_path(game_dir: &Path) -> Result<PathBuf> {
    if game_dir.as_os_str().is_empty() || !game_dir.is_dir() {
        return Err(Error::InvalidPath(game_dir.to_path_buf()));
    }

    let mut path = game_dir.to_path_buf();
    path.extend(VOTE_FILE_PATH);
    Ok(path)
}

/// Trim whitespace and one pair of surrounding quotes, as left by
/// drag-and-drop or "Copy as path"
fn clean_path_input(input: &str) -> PathBuf {
    let trimmed = input.trim();
    let unquoted = trimmed
        .strip_prefix('"')
        .and_then(|s| s.strip_suffix('"'))
        .unwrap_or(trimmed);
    PathBuf::from(unquoted)
}
