//! Intents forwarded by the presentation layer.

use crate::models::round::TeamTag;
use serde::{Deserialize, Serialize};

/// A user action. Every state change goes through one of these.
#[derive(Clone, Debug, Eq, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum Intent {
    StartGame {
        players: Vec<String>,
        victory_threshold: u32,
    },
    RevealTopic,
    ChangeTopic,
    StartDebate,
    PauseClock,
    ResumeClock,
    ResetClock,
    RollCriterion,
    DeclareWinner {
        team: TeamTag,
    },
    ContinueAfterVerdict,
    NextRound,
    Rematch,
    ReturnToMenu,
    AddCustomTopic {
        text: String,
    },
    RemoveCustomTopic {
        index: usize,
    },
}
