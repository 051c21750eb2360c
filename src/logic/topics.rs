//! Topic drawing without repetition until the deck is exhausted.

use crate::models::TopicDeck;
use crate::random::RandomnessProvider;

/// Draw a topic not yet shown this cycle and mark it used.
///
/// When every topic has been shown, the used set is cleared first, so a draw always succeeds
/// (a single-topic deck returns the same topic every time).
/// Panics on an empty deck; setup refuses to start a game without topics.
pub fn draw_topic<R>(deck: &mut TopicDeck, rng: &mut R) -> String
where
    R: RandomnessProvider + ?Sized,
{
    assert!(!deck.topics.is_empty(), "cannot draw from an empty topic deck");
    let mut available: Vec<usize> = (0..deck.topics.len())
        .filter(|i| !deck.used.contains(i))
        .collect();
    if available.is_empty() {
        log::debug!("Topic deck exhausted after {} draws, reshuffling", deck.used.len());
        deck.used.clear();
        available = (0..deck.topics.len()).collect();
    }
    let index = available[rng.below(available.len())];
    deck.used.insert(index);
    deck.topics[index].clone()
}
