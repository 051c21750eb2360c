//! Integration tests for topic drawing and setup-time topic editing.

use debate_party::{
    draw_topic, GameConfig, GameError, Intent, SeededRandom, Table, TopicDeck, TopicPool,
};
use std::collections::HashSet;

fn pool(topics: &[&str]) -> TopicPool {
    TopicPool::new(topics.iter().map(|t| t.to_string()).collect())
}

#[test]
fn draws_every_topic_once_before_repeating() {
    let p = pool(&["a", "b", "c", "d", "e"]);
    let mut deck = TopicDeck::new(&p);
    let mut rng = SeededRandom::new(3);

    let first_cycle: HashSet<String> = (0..5).map(|_| draw_topic(&mut deck, &mut rng)).collect();
    assert_eq!(first_cycle.len(), 5);
    assert_eq!(deck.remaining(), 0);

    // Sixth draw resets the cycle instead of failing.
    let sixth = draw_topic(&mut deck, &mut rng);
    assert!(first_cycle.contains(&sixth));
    assert_eq!(deck.used.len(), 1);
}

#[test]
fn single_topic_deck_always_draws() {
    let p = pool(&["only"]);
    let mut deck = TopicDeck::new(&p);
    let mut rng = SeededRandom::new(0);
    for _ in 0..10 {
        assert_eq!(draw_topic(&mut deck, &mut rng), "only");
    }
}

#[test]
fn custom_topics_are_appended_after_base() {
    let mut p = pool(&["base"]);
    p.add_custom("  My topic  ").unwrap();
    assert_eq!(p.topics().collect::<Vec<_>>(), vec!["base", "My topic"]);
    assert_eq!(p.len(), 2);
}

#[test]
fn custom_topic_validation() {
    let mut p = pool(&["Cats rule"]);
    assert_eq!(p.add_custom("   "), Err(GameError::EmptyTopic));
    assert_eq!(p.add_custom("cats RULE"), Err(GameError::DuplicateTopic));
    assert_eq!(p.remove_custom(0), Err(GameError::TopicNotFound(0)));
    p.add_custom("Dogs rule").unwrap();
    assert_eq!(p.remove_custom(0).unwrap(), "Dogs rule");
    assert!(p.custom.is_empty());
}

#[test]
fn csv_import_skips_blanks_and_duplicates() {
    let mut p = pool(&["Existing"]);
    let csv = "First topic\n\nexisting\nSecond topic,ignored column\nFirst topic\n";
    let added = p.import_csv(csv.as_bytes()).unwrap();
    assert_eq!(added, 2);
    assert_eq!(p.custom, vec!["First topic", "Second topic"]);
}

#[test]
fn malformed_csv_adds_nothing() {
    let mut p = pool(&["Existing"]);
    let result = p.import_csv(&b"ok\n\xff\xfe\n"[..]);
    assert!(matches!(result, Err(GameError::MalformedImport(_))));
    assert!(p.custom.is_empty());
}

#[test]
fn csv_import_is_rejected_during_a_game() {
    let mut table = Table::new(GameConfig::default());
    let mut rng = SeededRandom::new(13);
    assert_eq!(table.import_topics("Menu topic\n".as_bytes()), Ok(1));
    table
        .dispatch(
            Intent::StartGame {
                players: vec!["A".into(), "B".into(), "C".into()],
                victory_threshold: 3,
            },
            &mut rng,
        )
        .unwrap();

    let before = table.topics.clone();
    assert_eq!(
        table.import_topics("Late topic\n".as_bytes()),
        Err(GameError::InvalidState)
    );
    assert_eq!(table.topics, before);

    table.dispatch(Intent::ReturnToMenu, &mut rng).unwrap();
    assert_eq!(table.import_topics("Late topic\n".as_bytes()), Ok(1));
    assert_eq!(table.topics.custom, vec!["Menu topic", "Late topic"]);
}

#[test]
fn pool_is_frozen_while_a_game_runs() {
    let mut table = Table::new(GameConfig::default());
    let mut rng = SeededRandom::new(9);
    table
        .dispatch(Intent::AddCustomTopic { text: "Custom".into() }, &mut rng)
        .unwrap();
    table
        .dispatch(
            Intent::StartGame {
                players: vec!["A".into(), "B".into(), "C".into()],
                victory_threshold: 3,
            },
            &mut rng,
        )
        .unwrap();

    let before = table.topics.clone();
    assert_eq!(
        table.dispatch(Intent::AddCustomTopic { text: "Late".into() }, &mut rng),
        Err(GameError::InvalidState)
    );
    assert_eq!(
        table.dispatch(Intent::RemoveCustomTopic { index: 0 }, &mut rng),
        Err(GameError::InvalidState)
    );
    assert_eq!(table.topics, before);

    table.dispatch(Intent::ReturnToMenu, &mut rng).unwrap();
    table
        .dispatch(Intent::RemoveCustomTopic { index: 0 }, &mut rng)
        .unwrap();
    assert!(table.topics.custom.is_empty());
}
