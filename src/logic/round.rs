//! Round phase transitions. Each one checks its phase first and leaves the session untouched on error.

use crate::logic::criterion::select_criterion;
use crate::logic::roles::assign_roles;
use crate::logic::scoring::{award_team, champions};
use crate::logic::topics::draw_topic;
use crate::models::{GameError, GamePhase, GameSession, RoundState, TeamTag};
use crate::random::RandomnessProvider;

fn expect_phase(session: &GameSession, phase: GamePhase) -> Result<(), GameError> {
    if session.phase != phase {
        return Err(GameError::InvalidState);
    }
    Ok(())
}

/// Enter RoleAssignment for `session.round_index`: fresh roles, full stopped clock, no winner.
pub fn begin_round<R>(session: &mut GameSession, rng: &mut R)
where
    R: RandomnessProvider + ?Sized,
{
    let roles = assign_roles(session.players.len(), session.round_index, rng);
    log::debug!(
        "Round {}: judge {}, team A {:?}, team B {:?}",
        session.round_index,
        roles.judge,
        roles.team_a,
        roles.team_b
    );
    session.round = RoundState::new(roles);
    session.countdown.reset();
    session.roll_steps_left = 0;
    session.phase = GamePhase::RoleAssignment;
}

/// RoleAssignment -> TopicReveal, drawing the first topic.
pub fn reveal_topic<R>(session: &mut GameSession, rng: &mut R) -> Result<(), GameError>
where
    R: RandomnessProvider + ?Sized,
{
    expect_phase(session, GamePhase::RoleAssignment)?;
    session.round.topic = Some(draw_topic(&mut session.deck, rng));
    session.phase = GamePhase::TopicReveal;
    Ok(())
}

/// Redraw while in TopicReveal.
pub fn change_topic<R>(session: &mut GameSession, rng: &mut R) -> Result<(), GameError>
where
    R: RandomnessProvider + ?Sized,
{
    expect_phase(session, GamePhase::TopicReveal)?;
    session.round.topic = Some(draw_topic(&mut session.deck, rng));
    Ok(())
}

/// TopicReveal -> Debate with a full, running clock.
pub fn start_debate(session: &mut GameSession) -> Result<(), GameError> {
    expect_phase(session, GamePhase::TopicReveal)?;
    session.countdown.start();
    session.phase = GamePhase::Debate;
    Ok(())
}

pub fn pause_clock(session: &mut GameSession) -> Result<(), GameError> {
    expect_phase(session, GamePhase::Debate)?;
    session.countdown.pause();
    Ok(())
}

pub fn resume_clock(session: &mut GameSession) -> Result<(), GameError> {
    expect_phase(session, GamePhase::Debate)?;
    session.countdown.resume();
    Ok(())
}

/// Back to full time, stopped. The phase stays Debate.
pub fn reset_clock(session: &mut GameSession) -> Result<(), GameError> {
    expect_phase(session, GamePhase::Debate)?;
    session.countdown.reset();
    Ok(())
}

/// Debate -> CriterionRoll, whatever time is left. Starts the roll animation,
/// or settles right away when the session has no animation steps.
pub fn roll_criterion<R>(session: &mut GameSession, rng: &mut R) -> Result<(), GameError>
where
    R: RandomnessProvider + ?Sized,
{
    expect_phase(session, GamePhase::Debate)?;
    session.countdown.stop();
    session.round.criterion = Some(select_criterion(rng));
    session.roll_steps_left = session.roll_steps;
    session.phase = GamePhase::CriterionRoll;
    Ok(())
}

/// CriterionRoll -> Verdict: record the winner and give each of its members a point.
/// Rejected while the roll is still animating.
pub fn declare_winner(session: &mut GameSession, team: TeamTag) -> Result<(), GameError> {
    expect_phase(session, GamePhase::CriterionRoll)?;
    if session.is_rolling() {
        return Err(GameError::RollInProgress);
    }
    award_team(session, team)?;
    session.round.winner = Some(team);
    session.phase = GamePhase::Verdict;
    Ok(())
}

/// Verdict -> EndGame if someone reached the threshold, else Scoreboard.
pub fn continue_after_verdict(session: &mut GameSession) -> Result<(), GameError> {
    expect_phase(session, GamePhase::Verdict)?;
    session.phase = match champions(&session.players, session.victory_threshold) {
        Some(winners) => {
            log::info!(
                "Game over after round {}: champion(s) {:?}",
                session.round_index,
                winners
            );
            GamePhase::EndGame
        }
        None => GamePhase::Scoreboard,
    };
    Ok(())
}

/// Scoreboard -> RoleAssignment of the next round. Scores carry over.
pub fn next_round<R>(session: &mut GameSession, rng: &mut R) -> Result<(), GameError>
where
    R: RandomnessProvider + ?Sized,
{
    expect_phase(session, GamePhase::Scoreboard)?;
    session.round_index += 1;
    begin_round(session, rng);
    Ok(())
}

/// EndGame -> round 0 with the same roster and threshold, all scores zeroed.
/// The topic cycle starts over too.
pub fn rematch<R>(session: &mut GameSession, rng: &mut R) -> Result<(), GameError>
where
    R: RandomnessProvider + ?Sized,
{
    expect_phase(session, GamePhase::EndGame)?;
    for p in &mut session.players {
        p.reset_score();
    }
    session.round_index = 0;
    session.deck.used.clear();
    begin_round(session, rng);
    Ok(())
}
