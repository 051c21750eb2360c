//! Data structures for the debate game: players, rounds, topics, session state.

mod countdown;
mod criterion;
mod intent;
mod player;
mod round;
mod session;
mod snapshot;
mod topic;

pub use countdown::Countdown;
pub use criterion::Criterion;
pub use intent::Intent;
pub use player::{Player, PlayerIndex, MAX_NAME_CHARS, MAX_PLAYERS, MIN_PLAYERS};
pub use round::{Roles, RoundState, TeamTag};
pub use session::{GameError, GamePhase, GameSession};
pub use snapshot::{CriterionView, SessionSnapshot, Snapshot, Standing};
pub use topic::{TopicDeck, TopicPool};
