pub mod answer;
pub mod config;
pub mod error;
pub mod game;
pub mod player;
pub mod round;
pub mod settings;
pub mod tiles;

pub use answer::Answer;
pub use error::{Error, Result};
pub use game::Game;
pub use player::Player;
pub use round::{BestAnswer, Round, RoundState};
pub use settings::{GameSettings, ScoringMethod};
