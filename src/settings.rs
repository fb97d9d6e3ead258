use std::collections::HashSet;

use serde::{Deserialize, Serialize};
use serde_aux::prelude::deserialize_number_from_string;

use crate::error::{Error, Result};

/// Game-wide settings shared by every round of a game.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameSettings {
    /// The number of tiles to make words from
    #[serde(deserialize_with = "deserialize_number_from_string")]
    pub number_of_tiles: u32,
    /// The number of lookups allowed before forfeiting a turn
    #[serde(deserialize_with = "deserialize_number_from_string")]
    pub number_of_lookups: u32,
    pub scoring_method: ScoringMethod,
    /// Letters that will never be dealt
    #[serde(default)]
    pub banned_letters: HashSet<char>,
}

/// How answers are meant to be scored. The scoring itself happens elsewhere.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum ScoringMethod {
    #[default]
    Normal,
    Length,
}

impl GameSettings {
    pub const MINIMUM_TILES: u32 = 2;

    pub fn validate(&self) -> Result<()> {
        if self.number_of_tiles < GameSettings::MINIMUM_TILES {
            return Err(Error::InvalidGameSettings(format!(
                "Not enough tiles. ActualTiles: '{}', MinimumTiles: '{}'.",
                self.number_of_tiles,
                GameSettings::MINIMUM_TILES
            )));
        }
        if ('A'..='Z').all(|letter| self.is_banned(letter)) {
            return Err(Error::InvalidGameSettings(
                "Every letter of the alphabet is banned.".to_string(),
            ));
        }
        Ok(())
    }

    pub fn is_valid(&self) -> bool {
        self.validate().is_ok()
    }

    pub fn is_banned(&self, letter: char) -> bool {
        self.banned_letters
            .iter()
            .any(|banned| banned.eq_ignore_ascii_case(&letter))
    }
}

impl Default for GameSettings {
    fn default() -> Self {
        Self {
            number_of_tiles: 7,
            number_of_lookups: 2,
            scoring_method: ScoringMethod::Normal,
            banned_letters: HashSet::new(),
        }
    }
}
