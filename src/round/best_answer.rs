use serde::{Deserialize, Serialize};

/// One of the highest scoring words that could have been spelled in a round.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct BestAnswer {
    pub word: String,
    pub score: u32,
    #[serde(default)]
    pub definition: String,
}

impl BestAnswer {
    pub fn new(word: &str, score: u32, definition: &str) -> Self {
        BestAnswer {
            word: word.to_string(),
            score,
            definition: definition.to_string(),
        }
    }
}
