//! Read-only view of a table, as rendered by clients.

use crate::models::countdown::Countdown;
use crate::models::criterion::Criterion;
use crate::models::player::{Player, PlayerIndex};
use crate::models::round::TeamTag;
use crate::models::session::GamePhase;
use crate::models::topic::TopicPool;
use serde::Serialize;

/// A criterion with its display text.
#[derive(Clone, Debug, Eq, PartialEq, Serialize)]
pub struct CriterionView {
    pub criterion: Criterion,
    pub label: &'static str,
    pub description: &'static str,
}

impl From<Criterion> for CriterionView {
    fn from(criterion: Criterion) -> Self {
        Self {
            criterion,
            label: criterion.label(),
            description: criterion.description(),
        }
    }
}

/// One row of the ranked standings.
#[derive(Clone, Debug, Eq, PartialEq, Serialize)]
pub struct Standing {
    pub index: PlayerIndex,
    pub name: String,
    pub score: u32,
}

#[derive(Clone, Debug, Eq, PartialEq, Serialize)]
pub struct SessionSnapshot {
    pub phase: GamePhase,
    pub players: Vec<Player>,
    pub judge: PlayerIndex,
    pub team_a: Vec<PlayerIndex>,
    pub team_b: Vec<PlayerIndex>,
    pub topic: Option<String>,
    pub countdown: Countdown,
    pub criterion: Option<CriterionView>,
    pub rolling: bool,
    pub winner: Option<TeamTag>,
    pub round_index: usize,
    pub victory_threshold: u32,
    /// Present on Scoreboard and EndGame.
    pub standings: Option<Vec<Standing>>,
    /// Present on EndGame; more than one on a tie.
    pub champions: Option<Vec<PlayerIndex>>,
}

#[derive(Clone, Debug, Eq, PartialEq, Serialize)]
pub struct Snapshot {
    pub generation: u64,
    pub topics: TopicPool,
    /// None while on the menu.
    pub session: Option<SessionSnapshot>,
}
