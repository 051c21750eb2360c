//! Topic pool (editable during setup) and the per-game deck drawn from it.

use crate::models::session::GameError;
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;
use std::io::Read;

const BASE_TOPICS: &[&str] = &[
    "Pineapple belongs on pizza",
    "Cats are better roommates than dogs",
    "Socks with sandals should be legal everywhere",
    "Breakfast is the most overrated meal of the day",
    "Every office should have a nap room",
    "Time travel would ruin everything",
    "Cereal is a soup",
    "A hot dog is a sandwich",
    "Homework should be banned",
    "Aliens have already visited us",
    "Winter is better than summer",
    "Reality TV is modern art",
    "Robots should be allowed to vote",
    "Karaoke should be an olympic sport",
    "The moon landing was the peak of human history",
    "Phones should be banned at dinner",
    "Superheroes would make the world worse",
    "Mondays should be part of the weekend",
    "Ketchup is a smoothie",
    "Pirates were better than ninjas",
];

/// Base topics plus user-added custom topics.
#[derive(Clone, Debug, Eq, PartialEq, Serialize, Deserialize)]
pub struct TopicPool {
    pub base: Vec<String>,
    /// Appended after `base`; editable only while no game is running.
    pub custom: Vec<String>,
}

impl Default for TopicPool {
    fn default() -> Self {
        Self::with_base_topics()
    }
}

impl TopicPool {
    /// Pool with the built-in topics and no custom ones.
    pub fn with_base_topics() -> Self {
        Self::new(BASE_TOPICS.iter().map(|t| t.to_string()).collect())
    }

    pub fn new(base: Vec<String>) -> Self {
        Self {
            base,
            custom: Vec::new(),
        }
    }

    pub fn len(&self) -> usize {
        self.base.len() + self.custom.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Base then custom, in order.
    pub fn topics(&self) -> impl Iterator<Item = &str> {
        self.base.iter().chain(self.custom.iter()).map(String::as_str)
    }

    /// Add a custom topic. Text is trimmed; empty text and duplicates (case-insensitive) are rejected.
    pub fn add_custom(&mut self, text: &str) -> Result<(), GameError> {
        let text = text.trim();
        if text.is_empty() {
            return Err(GameError::EmptyTopic);
        }
        let lowered = text.to_lowercase();
        if self.topics().any(|t| t.to_lowercase() == lowered) {
            return Err(GameError::DuplicateTopic);
        }
        self.custom.push(text.to_string());
        Ok(())
    }

    /// Remove a custom topic by its index in `custom`.
    pub fn remove_custom(&mut self, index: usize) -> Result<String, GameError> {
        if index >= self.custom.len() {
            return Err(GameError::TopicNotFound(index));
        }
        Ok(self.custom.remove(index))
    }

    /// Add the first column of every row of a headerless CSV as a custom topic.
    /// Empty cells and duplicates are skipped. Returns how many topics were added.
    pub fn import_csv<R: Read>(&mut self, reader: R) -> Result<usize, GameError> {
        let mut rdr = csv::ReaderBuilder::new()
            .has_headers(false)
            .flexible(true)
            .from_reader(reader);
        let mut candidates = Vec::new();
        for record in rdr.records() {
            let record = record.map_err(|e| GameError::MalformedImport(e.to_string()))?;
            if let Some(cell) = record.get(0) {
                candidates.push(cell.to_string());
            }
        }
        let mut added = 0;
        for text in candidates {
            if self.add_custom(&text).is_ok() {
                added += 1;
            }
        }
        Ok(added)
    }
}

/// The pool frozen at game start, plus which topics were already shown this game.
#[derive(Clone, Debug, Eq, PartialEq, Serialize, Deserialize)]
pub struct TopicDeck {
    pub topics: Vec<String>,
    /// Indices into `topics`; never larger than `topics`.
    pub used: BTreeSet<usize>,
}

impl TopicDeck {
    pub fn new(pool: &TopicPool) -> Self {
        Self {
            topics: pool.topics().map(str::to_string).collect(),
            used: BTreeSet::new(),
        }
    }

    /// Topics not yet shown in the current cycle.
    pub fn remaining(&self) -> usize {
        self.topics.len() - self.used.len()
    }
}
