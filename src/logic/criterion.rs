//! Criterion selection and the cosmetic roll animation.

use crate::models::{Criterion, GamePhase, GameSession};
use crate::random::RandomnessProvider;

/// Result of one roll animation step.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum RollOutcome {
    /// The timer that scheduled this step is outdated, or there is nothing to roll.
    Stale,
    /// Cosmetic face; more steps follow.
    Rolling(Criterion),
    /// Final pick; the judge may now declare a winner.
    Settled(Criterion),
}

/// Uniform pick among the three criteria.
pub fn select_criterion<R>(rng: &mut R) -> Criterion
where
    R: RandomnessProvider + ?Sized,
{
    Criterion::ALL[rng.below(Criterion::ALL.len())]
}

/// Advance the roll animation by one step.
///
/// Intermediate faces are re-picked uniformly for display. The last step makes a fresh
/// uniform pick, independent of the faces shown before it.
pub fn advance_roll<R>(session: &mut GameSession, rng: &mut R) -> RollOutcome
where
    R: RandomnessProvider + ?Sized,
{
    if session.phase != GamePhase::CriterionRoll || !session.is_rolling() {
        return RollOutcome::Stale;
    }
    session.roll_steps_left -= 1;
    let face = select_criterion(rng);
    session.round.criterion = Some(face);
    if session.is_rolling() {
        RollOutcome::Rolling(face)
    } else {
        log::debug!("Criterion settled on {}", face.label());
        RollOutcome::Settled(face)
    }
}
