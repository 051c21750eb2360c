//! GameSession, GamePhase and GameError.

use crate::models::countdown::Countdown;
use crate::models::player::{Player, PlayerIndex, MAX_NAME_CHARS, MAX_PLAYERS, MIN_PLAYERS};
use crate::models::round::RoundState;
use crate::models::topic::TopicDeck;
use serde::{Deserialize, Serialize};

/// Errors returned when an intent is rejected. The table is left unchanged.
#[derive(Clone, Debug, Eq, PartialEq)]
pub enum GameError {
    /// The intent is not accepted in the current phase (or with/without a running game).
    InvalidState,
    /// Roster size after dropping empty names is outside [3, 8].
    WrongNumberOfPlayers { found: usize },
    /// A player name exceeds the character limit.
    NameTooLong(String),
    /// Victory threshold must be at least 1.
    InvalidThreshold,
    /// No topics to draw from.
    EmptyTopicPool,
    /// Custom topic text is empty after trimming.
    EmptyTopic,
    /// A topic with this text already exists (case-insensitive).
    DuplicateTopic,
    /// No custom topic at this index.
    TopicNotFound(usize),
    /// CSV topic import could not be parsed.
    MalformedImport(String),
    /// The criterion roll has not settled yet.
    RollInProgress,
}

impl std::fmt::Display for GameError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            GameError::InvalidState => write!(f, "Invalid state for this action"),
            GameError::WrongNumberOfPlayers { found } => write!(
                f,
                "Need between {} and {} players (found {})",
                MIN_PLAYERS, MAX_PLAYERS, found
            ),
            GameError::NameTooLong(name) => {
                write!(f, "Player name '{}' is longer than {} characters", name, MAX_NAME_CHARS)
            }
            GameError::InvalidThreshold => write!(f, "Victory threshold must be at least 1"),
            GameError::EmptyTopicPool => write!(f, "There are no topics to draw from"),
            GameError::EmptyTopic => write!(f, "Topic text cannot be empty"),
            GameError::DuplicateTopic => write!(f, "This topic already exists"),
            GameError::TopicNotFound(i) => write!(f, "No custom topic at index {}", i),
            GameError::MalformedImport(e) => write!(f, "Could not read topic list: {}", e),
            GameError::RollInProgress => write!(f, "The criterion is still rolling"),
        }
    }
}

impl std::error::Error for GameError {}

/// Where the current round stands. Scoreboard loops back to RoleAssignment; EndGame is terminal.
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum GamePhase {
    /// Judge and teams are shown.
    #[default]
    RoleAssignment,
    /// Topic is shown; may be redrawn.
    TopicReveal,
    /// Countdown runs; the judge decides when to stop.
    Debate,
    /// Criterion is rolled; waiting for the verdict.
    CriterionRoll,
    /// Winning team recorded and scored.
    Verdict,
    /// Standings between rounds.
    Scoreboard,
    /// Someone reached the threshold.
    EndGame,
}

/// One running game: roster, scores, deck and the round in progress.
#[derive(Clone, Debug, Eq, PartialEq, Serialize, Deserialize)]
pub struct GameSession {
    pub players: Vec<Player>,
    pub victory_threshold: u32,
    /// Zero-based; the judge rotates with it.
    pub round_index: usize,
    pub phase: GamePhase,
    pub round: RoundState,
    pub deck: TopicDeck,
    pub countdown: Countdown,
    /// Roll animation length this session was created with.
    pub roll_steps: u32,
    /// Cosmetic picks still pending; 0 when the criterion has settled.
    pub roll_steps_left: u32,
}

impl GameSession {
    /// A session before its first round; roles are filled in by the engine.
    pub fn new(
        players: Vec<Player>,
        victory_threshold: u32,
        deck: TopicDeck,
        debate_seconds: u32,
        roll_steps: u32,
    ) -> Self {
        Self {
            players,
            victory_threshold,
            round_index: 0,
            phase: GamePhase::RoleAssignment,
            round: RoundState::default(),
            deck,
            countdown: Countdown::new(debate_seconds),
            roll_steps,
            roll_steps_left: 0,
        }
    }

    pub fn is_rolling(&self) -> bool {
        self.roll_steps_left > 0
    }

    pub fn get_player_mut(&mut self, index: PlayerIndex) -> Option<&mut Player> {
        self.players.get_mut(index)
    }

    pub fn scores(&self) -> Vec<u32> {
        self.players.iter().map(|p| p.score).collect()
    }
}
