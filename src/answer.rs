use serde::{Deserialize, Serialize};

use crate::player::Player;

/// A single player's submission for a round.
///
/// Score and definition start empty, they are filled in by whatever scores
/// the word once it has been checked.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Answer {
    player: Player,
    answer: String,
    #[serde(default)]
    score: u32,
    #[serde(default)]
    definition: String,
}

impl Answer {
    pub fn new(player: impl Into<Player>, answer: &str) -> Self {
        Answer {
            player: player.into(),
            answer: answer.to_string(),
            score: 0,
            definition: String::new(),
        }
    }

    pub fn with_score(mut self, score: u32) -> Self {
        self.score = score;
        self
    }

    pub fn with_definition(mut self, definition: impl Into<String>) -> Self {
        self.definition = definition.into();
        self
    }

    pub fn player(&self) -> &Player {
        &self.player
    }

    pub fn answer(&self) -> &str {
        &self.answer
    }

    pub fn score(&self) -> u32 {
        self.score
    }

    pub fn definition(&self) -> &str {
        &self.definition
    }

    pub fn has_definition(&self) -> bool {
        !self.definition.is_empty()
    }
}
