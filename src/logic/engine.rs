//! Table: the single entry point that applies intents, drives timers and exposes snapshots.

use crate::config::GameConfig;
use crate::logic::criterion::{advance_roll, RollOutcome};
use crate::logic::round;
use crate::logic::scoring::{champions, standings};
use crate::logic::setup::start_game;
use crate::models::{
    CriterionView, GameError, GamePhase, GameSession, Intent, SessionSnapshot, Snapshot,
    TopicPool,
};
use crate::random::RandomnessProvider;
use std::io::Read;

/// Identifies the table state a scheduled timer belongs to.
/// A timer whose key no longer matches must do nothing and stop.
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub struct TimerKey {
    pub generation: u64,
}

/// Work the host must schedule after an accepted intent.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum Effect {
    None,
    /// Call `Table::tick` once per second until it returns `Stale`.
    StartTicker(TimerKey),
    /// Call `Table::advance_roll` every roll interval until it returns `Settled` or `Stale`.
    StartRoll(TimerKey),
}

/// Result of a one-second tick.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum TickOutcome {
    /// The key is outdated (phase changed or session gone); stop ticking.
    Stale,
    /// Clock paused or already at zero.
    Idle,
    /// Seconds left after this tick.
    Ticked(u32),
}

/// Topic pool, the running game (if any) and the timer generation.
#[derive(Clone, Debug)]
pub struct Table {
    pub config: GameConfig,
    pub topics: TopicPool,
    pub session: Option<GameSession>,
    /// Bumped on every phase change, game start and teardown.
    generation: u64,
}

impl Default for Table {
    fn default() -> Self {
        Self::new(GameConfig::default())
    }
}

impl Table {
    /// A table on the menu with the built-in topics.
    pub fn new(config: GameConfig) -> Self {
        Self::with_topics(config, TopicPool::with_base_topics())
    }

    pub fn with_topics(config: GameConfig, topics: TopicPool) -> Self {
        Self {
            config,
            topics,
            session: None,
            generation: 0,
        }
    }

    pub fn generation(&self) -> u64 {
        self.generation
    }

    /// Key for timers scheduled against the current state.
    pub fn timer_key(&self) -> TimerKey {
        TimerKey {
            generation: self.generation,
        }
    }

    pub fn phase(&self) -> Option<GamePhase> {
        self.session.as_ref().map(|s| s.phase)
    }

    /// Apply one intent. On error nothing changes.
    pub fn dispatch<R>(&mut self, intent: Intent, rng: &mut R) -> Result<Effect, GameError>
    where
        R: RandomnessProvider + ?Sized,
    {
        match intent {
            Intent::StartGame {
                players,
                victory_threshold,
            } => {
                if self.session.is_some() {
                    return Err(GameError::InvalidState);
                }
                let session =
                    start_game(&self.topics, &players, victory_threshold, &self.config, rng)?;
                log::info!(
                    "Game started with {} players, first to {}",
                    session.players.len(),
                    victory_threshold
                );
                self.session = Some(session);
                self.generation += 1;
                Ok(Effect::None)
            }
            Intent::ReturnToMenu => {
                if self.session.take().is_none() {
                    return Err(GameError::InvalidState);
                }
                log::info!("Game abandoned, back to menu");
                self.generation += 1;
                Ok(Effect::None)
            }
            Intent::AddCustomTopic { text } => {
                self.ensure_setup()?;
                self.topics.add_custom(&text)?;
                Ok(Effect::None)
            }
            Intent::RemoveCustomTopic { index } => {
                self.ensure_setup()?;
                let removed = self.topics.remove_custom(index)?;
                log::debug!("Removed custom topic '{}'", removed);
                Ok(Effect::None)
            }
            intent => self.dispatch_round(intent, rng),
        }
    }

    fn dispatch_round<R>(&mut self, intent: Intent, rng: &mut R) -> Result<Effect, GameError>
    where
        R: RandomnessProvider + ?Sized,
    {
        let session = self.session.as_mut().ok_or(GameError::InvalidState)?;
        let before = session.phase;
        match intent {
            Intent::RevealTopic => round::reveal_topic(session, rng)?,
            Intent::ChangeTopic => round::change_topic(session, rng)?,
            Intent::StartDebate => round::start_debate(session)?,
            Intent::PauseClock => round::pause_clock(session)?,
            Intent::ResumeClock => round::resume_clock(session)?,
            Intent::ResetClock => round::reset_clock(session)?,
            Intent::RollCriterion => round::roll_criterion(session, rng)?,
            Intent::DeclareWinner { team } => round::declare_winner(session, team)?,
            Intent::ContinueAfterVerdict => round::continue_after_verdict(session)?,
            Intent::NextRound => round::next_round(session, rng)?,
            Intent::Rematch => round::rematch(session, rng)?,
            _ => return Err(GameError::InvalidState),
        }
        let after = session.phase;
        let rolling = session.is_rolling();
        if after != before {
            log::debug!("Phase {:?} -> {:?}", before, after);
            self.generation += 1;
        }
        Ok(match after {
            GamePhase::Debate if before == GamePhase::TopicReveal => {
                Effect::StartTicker(self.timer_key())
            }
            GamePhase::CriterionRoll if before == GamePhase::Debate && rolling => {
                Effect::StartRoll(self.timer_key())
            }
            _ => Effect::None,
        })
    }

    /// Add custom topics from a headerless CSV (first column). Menu only.
    pub fn import_topics<R: Read>(&mut self, reader: R) -> Result<usize, GameError> {
        self.ensure_setup()?;
        let added = self.topics.import_csv(reader)?;
        log::info!("Imported {} custom topic(s)", added);
        Ok(added)
    }

    fn ensure_setup(&self) -> Result<(), GameError> {
        if self.session.is_some() {
            return Err(GameError::InvalidState);
        }
        Ok(())
    }

    /// One second of debate time for the ticker holding `key`.
    pub fn tick(&mut self, key: TimerKey) -> TickOutcome {
        if key.generation != self.generation {
            return TickOutcome::Stale;
        }
        let session = match self.session.as_mut() {
            Some(s) if s.phase == GamePhase::Debate => s,
            _ => return TickOutcome::Stale,
        };
        if session.countdown.tick() {
            TickOutcome::Ticked(session.countdown.remaining)
        } else {
            TickOutcome::Idle
        }
    }

    /// One roll animation step for the task holding `key`.
    pub fn advance_roll<R>(&mut self, key: TimerKey, rng: &mut R) -> RollOutcome
    where
        R: RandomnessProvider + ?Sized,
    {
        if key.generation != self.generation {
            return RollOutcome::Stale;
        }
        match self.session.as_mut() {
            Some(session) => advance_roll(session, rng),
            None => RollOutcome::Stale,
        }
    }

    /// Run every pending roll step at once. For hosts without timers.
    pub fn settle_roll<R>(&mut self, rng: &mut R) -> RollOutcome
    where
        R: RandomnessProvider + ?Sized,
    {
        let key = self.timer_key();
        let mut outcome = RollOutcome::Stale;
        loop {
            match self.advance_roll(key, rng) {
                RollOutcome::Rolling(c) => outcome = RollOutcome::Rolling(c),
                RollOutcome::Stale => return outcome,
                settled => return settled,
            }
        }
    }

    pub fn snapshot(&self) -> Snapshot {
        Snapshot {
            generation: self.generation,
            topics: self.topics.clone(),
            session: self.session.as_ref().map(session_snapshot),
        }
    }
}

fn session_snapshot(s: &GameSession) -> SessionSnapshot {
    let ranked = matches!(s.phase, GamePhase::Scoreboard | GamePhase::EndGame);
    SessionSnapshot {
        phase: s.phase,
        players: s.players.clone(),
        judge: s.round.roles.judge,
        team_a: s.round.roles.team_a.clone(),
        team_b: s.round.roles.team_b.clone(),
        topic: s.round.topic.clone(),
        countdown: s.countdown,
        criterion: s.round.criterion.map(CriterionView::from),
        rolling: s.is_rolling(),
        winner: s.round.winner,
        round_index: s.round_index,
        victory_threshold: s.victory_threshold,
        standings: ranked.then(|| standings(&s.players)),
        champions: if s.phase == GamePhase::EndGame {
            champions(&s.players, s.victory_threshold)
        } else {
            None
        },
    }
}
