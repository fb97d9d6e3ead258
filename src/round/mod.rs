mod best_answer;

use std::collections::HashMap;
use std::fmt;

use rand::Rng;
use serde::{Deserialize, Serialize};

use crate::answer::Answer;
use crate::error::{Error, Result};
use crate::player::Player;
use crate::settings::GameSettings;
use crate::tiles;

pub use self::best_answer::BestAnswer;

/// Where a round stands, derived from how many answers it holds.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RoundState {
    Start,
    CollectingAnswers,
    Complete,
}

impl fmt::Display for RoundState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:?}", self)
    }
}

/// A fixed set of letters and the answers spelled from it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Round {
    letters: Vec<char>,
    #[serde(default)]
    answers: Vec<Answer>,
    // Older clients named this map `guesses_used`
    #[serde(default, alias = "guesses_used")]
    lookups_used: HashMap<Player, u32>,
    #[serde(default)]
    best_answers: Vec<BestAnswer>,
}

impl Round {
    pub fn new(letters: Vec<char>) -> Self {
        Round {
            letters,
            answers: Vec::new(),
            lookups_used: HashMap::new(),
            best_answers: Vec::new(),
        }
    }

    /// Starts a round with letters freshly drawn from the tile bag.
    pub fn deal<R: Rng + ?Sized>(settings: &GameSettings, rng: &mut R) -> Result<Self> {
        Ok(Round::new(tiles::draw_letters(settings, rng)?))
    }

    pub fn letters(&self) -> &[char] {
        &self.letters
    }

    pub fn answers(&self) -> &[Answer] {
        &self.answers
    }

    pub fn best_answers(&self) -> &[BestAnswer] {
        &self.best_answers
    }

    pub fn lookups_used(&self) -> &HashMap<Player, u32> {
        &self.lookups_used
    }

    pub fn add_answer(&mut self, answer: Answer) {
        log::debug!(
            "Answer added to round. Player: '{}', Answer: '{}'.",
            answer.player(),
            answer.answer()
        );
        self.answers.push(answer);
    }

    pub fn answer_of(&self, player: &Player) -> Option<&Answer> {
        self.answers.iter().find(|answer| answer.player() == player)
    }

    /// Counts one more consumed lookup for the player and returns the new total.
    pub fn record_lookup(&mut self, player: &Player) -> u32 {
        let lookups_used = self.lookups_used.entry(player.clone()).or_default();
        *lookups_used += 1;
        *lookups_used
    }

    pub fn lookups_used_by(&self, player: &Player) -> u32 {
        self.lookups_used.get(player).copied().unwrap_or(0)
    }

    pub fn set_best_answers(&mut self, best_answers: Vec<BestAnswer>) {
        self.best_answers = best_answers;
    }

    pub fn state(&self, players: usize) -> Result<RoundState> {
        let answers = self.answers.len();
        if answers == 0 {
            Ok(RoundState::Start)
        } else if answers < players {
            Ok(RoundState::CollectingAnswers)
        } else if answers == players {
            Ok(RoundState::Complete)
        } else {
            log::warn!(
                "Round holds more answers than there are players. ActualAnswers: '{answers}', Players: '{players}'."
            );
            Err(Error::TooManyAnswers(answers, players))
        }
    }
}
