//! Game rules: setup, role assignment, topics, criterion roll, scoring, and the dispatcher.

mod criterion;
mod engine;
mod roles;
mod round;
mod scoring;
mod setup;
mod topics;

pub use criterion::{advance_roll, select_criterion, RollOutcome};
pub use engine::{Effect, Table, TickOutcome, TimerKey};
pub use roles::{assign_roles, shuffle};
pub use round::{
    begin_round, change_topic, continue_after_verdict, declare_winner, next_round, pause_clock,
    rematch, reset_clock, resume_clock, reveal_topic, roll_criterion, start_debate,
};
pub use scoring::{award_team, champions, max_score, standings};
pub use setup::{start_game, validate_roster};
pub use topics::draw_topic;
