//! Export mode selection

use strum::{Display, EnumIter, EnumString};

use crate::source::VoteType;

/// Which set of maps to export
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Default,
    EnumString,
    EnumIter,
    Display,
)]
#[strum(ascii_case_insensitive)]
pub enum ExportMode {
    #[strum(
        to_string = "Favorites",
        serialize = "f",
        serialize = "fav",
        serialize = "favs",
        serialize = "favorite",
        serialize = "favourites"
    )]
    Favorites,
    #[default]
    #[strum(
        to_string = "Upvotes",
        serialize = "u",
        serialize = "up",
        serialize = "upvote"
    )]
    Upvotes,
    #[strum(
        to_string = "Downvotes",
        serialize = "d",
        serialize = "down",
        serialize = "downvote"
    )]
    Downvotes,
}

impl ExportMode {
    /// Parse a console answer. Returns `None` for unrecognized input;
    /// blank input selects the default mode.
    pub fn from_selection(input: &str) -> Option<Self> {
        let input = input.trim();
        if input.is_empty() {
            return Some(Self::default());
        }
        input.parse().ok()
    }

    /// Vote direction to filter on, or `None` for favorites
    pub fn vote_type(&self) -> Option<VoteType> {
        match self {
            Self::Favorites => None,
            Self::Upvotes => Some(VoteType::Upvote),
            Self::Downvotes => Some(VoteType::Downvote),
        }
    }
}
