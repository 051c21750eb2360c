//! Party debate game: library with models and round engine.

pub mod config;
pub mod logic;
pub mod models;
pub mod random;

pub use config::GameConfig;
pub use logic::{
    advance_roll, assign_roles, award_team, champions, draw_topic, select_criterion, standings,
    start_game, validate_roster, Effect, RollOutcome, Table, TickOutcome, TimerKey,
};
pub use models::{
    Countdown, Criterion, GameError, GamePhase, GameSession, Intent, Player, PlayerIndex, Roles,
    RoundState, Snapshot, Standing, TeamTag, TopicDeck, TopicPool,
};
pub use random::{RandomnessProvider, SeededRandom, ThreadRandom};
