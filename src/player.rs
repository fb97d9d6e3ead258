use std::{fmt::Display, sync::Arc};

use serde::{Deserialize, Serialize};

/// Identifier of a player taking part in a game.
///
/// The roster itself (connection state, hosting, ...) lives outside of this
/// crate, answers and rounds only need to know who a value belongs to.
#[derive(Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Player {
    name: Arc<str>,
}

impl Player {
    pub fn from_owned(name: String) -> Self {
        Self { name: name.into() }
    }

    pub fn from_slice(name: &str) -> Self {
        Self { name: name.into() }
    }

    pub fn as_slice(&self) -> &str {
        &self.name
    }
}

// Cloning only bumps the reference count of the shared name
impl Clone for Player {
    fn clone(&self) -> Self {
        Self {
            name: Arc::clone(&self.name),
        }
    }
}

impl Display for Player {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", &self.name)
    }
}

impl From<String> for Player {
    fn from(name: String) -> Self {
        Player::from_owned(name)
    }
}

impl From<&str> for Player {
    fn from(name: &str) -> Self {
        Player::from_slice(name)
    }
}

impl PartialEq<str> for Player {
    fn eq(&self, other: &str) -> bool {
        self.as_slice() == other
    }
}

impl PartialEq<&str> for Player {
    fn eq(&self, other: &&str) -> bool {
        self.as_slice() == *other
    }
}
