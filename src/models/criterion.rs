//! Judging criteria rolled by the judge after each debate.

use serde::{Deserialize, Serialize};

/// Lens the judge uses to pick the winning team.
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Criterion {
    Logic,
    Speed,
    Satire,
}

impl Criterion {
    /// Fixed selection order.
    pub const ALL: [Criterion; 3] = [Criterion::Logic, Criterion::Speed, Criterion::Satire];

    pub fn label(self) -> &'static str {
        match self {
            Criterion::Logic => "Logic",
            Criterion::Speed => "Speed",
            Criterion::Satire => "Satire",
        }
    }

    pub fn description(self) -> &'static str {
        match self {
            Criterion::Logic => "The most coherent, airtight argument wins.",
            Criterion::Speed => "Whoever answered fastest and never stalled wins.",
            Criterion::Satire => "The funniest, most absurd take wins.",
        }
    }
}
