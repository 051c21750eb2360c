//! Player and roster limits.

use serde::{Deserialize, Serialize};

/// Position of a player in the roster. Identity within a game is positional; names may repeat.
pub type PlayerIndex = usize;

/// Fewest players that can start a game (one judge, two debaters).
pub const MIN_PLAYERS: usize = 3;
/// Most players a game accepts.
pub const MAX_PLAYERS: usize = 8;
/// Longest accepted player name, in characters.
pub const MAX_NAME_CHARS: usize = 20;

/// A player in the current game.
#[derive(Clone, Debug, Eq, PartialEq, Serialize, Deserialize)]
pub struct Player {
    pub name: String,
    pub score: u32,
}

impl Player {
    /// Create a new player with the given name and a zero score.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            score: 0,
        }
    }

    /// Award one point (a won round).
    pub fn add_point(&mut self) {
        self.score += 1;
    }

    pub fn reset_score(&mut self) {
        self.score = 0;
    }
}
