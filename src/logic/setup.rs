//! Setup phase: validate the roster and create a session.

use crate::config::GameConfig;
use crate::logic::round::begin_round;
use crate::models::{
    GameError, GameSession, Player, TopicDeck, TopicPool, MAX_NAME_CHARS, MAX_PLAYERS,
    MIN_PLAYERS,
};
use crate::random::RandomnessProvider;

/// Trim names, drop empty ones, and check count (3..=8) and length (at most 20 characters).
pub fn validate_roster(names: &[String]) -> Result<Vec<Player>, GameError> {
    let trimmed: Vec<&str> = names
        .iter()
        .map(|n| n.trim())
        .filter(|n| !n.is_empty())
        .collect();
    if !(MIN_PLAYERS..=MAX_PLAYERS).contains(&trimmed.len()) {
        return Err(GameError::WrongNumberOfPlayers {
            found: trimmed.len(),
        });
    }
    if let Some(long) = trimmed.iter().find(|n| n.chars().count() > MAX_NAME_CHARS) {
        return Err(GameError::NameTooLong(long.to_string()));
    }
    Ok(trimmed.into_iter().map(Player::new).collect())
}

/// Start a game: validated roster, frozen copy of the topic pool, first round's roles assigned.
pub fn start_game<R>(
    pool: &TopicPool,
    names: &[String],
    victory_threshold: u32,
    config: &GameConfig,
    rng: &mut R,
) -> Result<GameSession, GameError>
where
    R: RandomnessProvider + ?Sized,
{
    let players = validate_roster(names)?;
    if victory_threshold == 0 {
        return Err(GameError::InvalidThreshold);
    }
    if pool.is_empty() {
        return Err(GameError::EmptyTopicPool);
    }
    let mut session = GameSession::new(
        players,
        victory_threshold,
        TopicDeck::new(pool),
        config.debate_seconds,
        config.roll_steps,
    );
    begin_round(&mut session, rng);
    Ok(session)
}
