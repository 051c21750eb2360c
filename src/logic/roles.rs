//! Role assignment: rotating judge, shuffled teams.

use crate::models::{PlayerIndex, Roles};
use crate::random::RandomnessProvider;

/// Assign judge and teams for `round_index`.
///
/// 1. Judge = `round_index % player_count` (round-robin, not random).
/// 2. Everyone else is shuffled uniformly.
/// 3. First `ceil(rest / 2)` go to team A (attackers), the others to team B (defenders).
///
/// Panics if `player_count < 2`; setup never lets that happen.
pub fn assign_roles<R>(player_count: usize, round_index: usize, rng: &mut R) -> Roles
where
    R: RandomnessProvider + ?Sized,
{
    assert!(player_count >= 2, "role assignment needs at least 2 players");
    let judge = round_index % player_count;
    let mut rest: Vec<PlayerIndex> = (0..player_count).filter(|&i| i != judge).collect();
    shuffle(&mut rest, rng);
    let team_b = rest.split_off((rest.len() + 1) / 2);
    Roles {
        judge,
        team_a: rest,
        team_b,
    }
}

/// Fisher-Yates: every permutation equally likely.
/// Draws through `RandomnessProvider` rather than `SliceRandom::shuffle` so tests can script each swap.
pub fn shuffle<T, R>(items: &mut [T], rng: &mut R)
where
    R: RandomnessProvider + ?Sized,
{
    for i in (1..items.len()).rev() {
        let j = rng.below(i + 1);
        items.swap(i, j);
    }
}
