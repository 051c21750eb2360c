//! Scoring: verdict points, win detection and ranked standings.

use crate::models::{GameError, GameSession, Player, PlayerIndex, Standing, TeamTag};

/// Give one point to every member of `team` in the current round. The judge never scores.
pub fn award_team(session: &mut GameSession, team: TeamTag) -> Result<(), GameError> {
    let members = session.round.roles.team(team).to_vec();
    for index in members {
        session
            .get_player_mut(index)
            .ok_or(GameError::InvalidState)?
            .add_point();
    }
    Ok(())
}

/// Highest score in the roster (0 for an empty roster).
pub fn max_score(players: &[Player]) -> u32 {
    players.iter().map(|p| p.score).max().unwrap_or(0)
}

/// Everyone tied at the top score, if that score reaches `threshold`. Ties are not broken.
pub fn champions(players: &[Player], threshold: u32) -> Option<Vec<PlayerIndex>> {
    let top = max_score(players);
    if players.is_empty() || top < threshold {
        return None;
    }
    Some(
        players
            .iter()
            .enumerate()
            .filter(|(_, p)| p.score == top)
            .map(|(i, _)| i)
            .collect(),
    )
}

/// Players by score descending; equal scores keep roster order.
pub fn standings(players: &[Player]) -> Vec<Standing> {
    let mut rows: Vec<Standing> = players
        .iter()
        .enumerate()
        .map(|(index, p)| Standing {
            index,
            name: p.name.clone(),
            score: p.score,
        })
        .collect();
    rows.sort_by(|a, b| b.score.cmp(&a.score));
    rows
}
