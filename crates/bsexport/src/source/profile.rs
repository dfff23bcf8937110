//! Player profile (`PlayerData.dat`) parsing and player selection

use std::fs;
use std::path::Path;

use serde::Deserialize;
use tracing::debug;

use super::{Prompter, strip_bom};
use crate::error::{Error, Result};

/// Prefix the game puts on favorite IDs of custom (catalog) levels
pub const CUSTOM_LEVEL_PREFIX: &str = "custom_level_";

#[derive(Debug, Deserialize)]
struct RawProfile {
    #[serde(rename = "localPlayers")]
    local_players: Option<Vec<RawPlayer>>,
}

#[derive(Debug, Deserialize)]
struct RawPlayer {
    #[serde(rename = "playerId", default)]
    player_id: String,
    #[serde(rename = "playerName", default)]
    player_name: String,
    #[serde(rename = "favoritesLevelIds")]
    favorites_level_ids: Option<Vec<String>>,
}

/// A local player and their favorite level IDs
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Player {
    pub id: String,
    pub name: String,
    pub favorite_level_ids: Vec<String>,
}

impl Player {
    /// Hashes of favorited custom levels, in profile order.
    /// Built-in levels carry no prefix and are skipped.
    pub fn favorite_hashes(&self) -> Vec<String> {
        self.favorite_level_ids
            .iter()
            .filter_map(|id| id.strip_prefix(CUSTOM_LEVEL_PREFIX))
            .map(str::to_string)
            .collect()
    }
}

/// Local players from the profile file, in file order
#[derive(Debug, Clone, Default)]
pub struct PlayerProfile {
    pub players: Vec<Player>,
}

impl PlayerProfile {
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let content = fs::read_to_string(path)?;
        let profile = Self::parse(&content)?;
        debug!(
            "Loaded {} players from {}",
            profile.players.len(),
            path.display()
        );
        Ok(profile)
    }

    pub fn parse(content: &str) -> Result<Self> {
        let raw: RawProfile = serde_json::from_str(strip_bom(content))?;
        let raw_players = raw
            .local_players
            .ok_or_else(|| Error::missing_field("player data", "localPlayers"))?;

        let players = raw_players
            .into_iter()
            .enumerate()
            .map(|(index, raw)| {
                let favorites = raw.favorites_level_ids.ok_or_else(|| {
                    Error::missing_field(format!("localPlayers[{}]", index), "favoritesLevelIds")
                })?;
                Ok(Player {
                    id: raw.player_id,
                    name: raw.player_name,
                    favorite_level_ids: favorites,
                })
            })
            .collect::<Result<Vec<_>>>()?;

        Ok(Self { players })
    }
}

/// Pick the player to export favorites for.
///
/// A single player is selected without asking. With several, the indexed
/// list is shown and the prompter must answer with a valid index.
pub fn select_player<'a>(players: &'a [Player], prompter: &dyn Prompter) -> Result<&'a Player> {
    match players {
        [] => Err(Error::NoPlayers),
        [only] => Ok(only),
        _ => {
            prompter.display_message("Multiple players found:");
            for (index, player) in players.iter().enumerate() {
                prompter.display_message(&format!("[{}] {} - {}", index, player.id, player.name));
            }

            let input = prompter.prompt_line("Select player index: ")?;
            let trimmed = input.trim();
            let index = trimmed
                .parse::<usize>()
                .map_err(|e| Error::InvalidSelection {
                    input: trimmed.to_string(),
                    reason: e.to_string(),
                })?;

            players.get(index).ok_or_else(|| Error::InvalidSelection {
                input: trimmed.to_string(),
                reason: format!("index out of range (0-{})", players.len() - 1),
            })
        }
    }
}
