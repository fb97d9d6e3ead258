use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};
use crate::player::Player;
use crate::round::{Round, RoundState};
use crate::settings::GameSettings;

/// A roster of players, the rounds they play, most recent last, and the
/// settings shared by all of them.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Game {
    #[serde(default)]
    players: Vec<Player>,
    #[serde(default)]
    rounds: Vec<Round>,
    #[serde(default)]
    settings: GameSettings,
}

impl Game {
    pub fn new(players: Vec<Player>, rounds: Vec<Round>) -> Self {
        log::debug!(
            "Game created. Players: '{}', Rounds: '{}'.",
            players.len(),
            rounds.len()
        );
        Game {
            players,
            rounds,
            settings: GameSettings::default(),
        }
    }

    pub fn with_settings(mut self, settings: GameSettings) -> Result<Self> {
        settings.validate()?;
        self.settings = settings;
        Ok(self)
    }

    pub fn players(&self) -> &[Player] {
        &self.players
    }

    pub fn rounds(&self) -> &[Round] {
        &self.rounds
    }

    pub fn settings(&self) -> &GameSettings {
        &self.settings
    }

    pub fn current_round(&self) -> Option<&Round> {
        self.rounds.last()
    }

    pub fn current_round_mut(&mut self) -> Option<&mut Round> {
        self.rounds.last_mut()
    }

    /// `None` when no round has been played yet.
    pub fn current_round_state(&self) -> Option<Result<RoundState>> {
        self.current_round()
            .map(|round| round.state(self.players.len()))
    }

    pub fn to_json(&self) -> Result<String> {
        serde_json::to_string(self).map_err(|error| {
            Error::log_and_create_internal(&format!(
                "Unable to serialize the game. Error: '{error}'."
            ))
        })
    }

    pub fn from_json(payload: &str) -> Result<Self> {
        let game: Game = serde_json::from_str(payload).map_err(|error| {
            log::warn!("Received a bad formatted game. Error: '{error}'.");
            Error::UnprocessableGame(error.to_string(), payload.to_string())
        })?;
        game.settings.validate()?;
        Ok(game)
    }
}
