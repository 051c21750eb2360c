//! Game timing and default settings, overridable through environment variables.

use std::str::FromStr;

/// Tunables shared by the engine and the web host.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct GameConfig {
    /// Countdown length for each debate, in seconds.
    pub debate_seconds: u32,
    /// Cosmetic re-picks before the criterion settles. 0 settles immediately.
    pub roll_steps: u32,
    /// Delay between roll steps, in milliseconds.
    pub roll_interval_ms: u64,
    /// Suggested threshold returned when a table is created. `StartGame` always carries its own.
    pub default_victory_threshold: u32,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            debate_seconds: 60,
            roll_steps: 16,
            roll_interval_ms: 80,
            default_victory_threshold: 5,
        }
    }
}

impl GameConfig {
    /// Read `DEBATE_SECONDS`, `ROLL_STEPS`, `ROLL_INTERVAL_MS`, `VICTORY_THRESHOLD`.
    /// Missing or unparsable values keep the default.
    pub fn from_env() -> Self {
        let d = Self::default();
        Self {
            debate_seconds: env_or("DEBATE_SECONDS", d.debate_seconds),
            roll_steps: env_or("ROLL_STEPS", d.roll_steps),
            roll_interval_ms: env_or("ROLL_INTERVAL_MS", d.roll_interval_ms),
            default_victory_threshold: env_or("VICTORY_THRESHOLD", d.default_victory_threshold),
        }
    }
}

fn env_or<T: FromStr>(key: &str, default: T) -> T {
    std::env::var(key)
        .ok()
        .and_then(|v| v.trim().parse().ok())
        .unwrap_or(default)
}
