//! Per-round role assignment and outcome.

use crate::models::criterion::Criterion;
use crate::models::player::PlayerIndex;
use serde::{Deserialize, Serialize};

/// The two debating sides.
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TeamTag {
    /// Attackers.
    A,
    /// Defenders.
    B,
}

/// Judge and team split for one round.
#[derive(Clone, Debug, Default, Eq, PartialEq, Serialize, Deserialize)]
pub struct Roles {
    pub judge: PlayerIndex,
    /// Attackers, in shuffled order. One larger than `team_b` when the remainder is odd.
    pub team_a: Vec<PlayerIndex>,
    pub team_b: Vec<PlayerIndex>,
}

impl Roles {
    pub fn team(&self, tag: TeamTag) -> &[PlayerIndex] {
        match tag {
            TeamTag::A => &self.team_a,
            TeamTag::B => &self.team_b,
        }
    }
}

/// Everything that belongs to the round in progress. Recreated at every round start.
#[derive(Clone, Debug, Default, Eq, PartialEq, Serialize, Deserialize)]
pub struct RoundState {
    pub roles: Roles,
    /// None until the topic is revealed.
    pub topic: Option<String>,
    /// None until the first roll.
    pub criterion: Option<Criterion>,
    /// None until the judge declares a verdict.
    pub winner: Option<TeamTag>,
}

impl RoundState {
    pub fn new(roles: Roles) -> Self {
        Self {
            roles,
            ..Self::default()
        }
    }
}
