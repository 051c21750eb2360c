//! Integration tests for verdict scoring, win detection and standings.

use debate_party::logic::continue_after_verdict;
use debate_party::{
    award_team, champions, select_criterion, standings, start_game, Criterion, GameConfig,
    GamePhase, GameSession, Player, SeededRandom, TeamTag, TopicPool,
};

fn session(names: &[&str], threshold: u32) -> GameSession {
    let names: Vec<String> = names.iter().map(|n| n.to_string()).collect();
    let mut rng = SeededRandom::new(11);
    start_game(
        &TopicPool::with_base_topics(),
        &names,
        threshold,
        &GameConfig::default(),
        &mut rng,
    )
    .unwrap()
}

fn with_scores(s: &mut GameSession, scores: &[u32]) {
    for (p, &score) in s.players.iter_mut().zip(scores) {
        p.score = score;
    }
}

#[test]
fn verdict_awards_exactly_the_winning_team() {
    let mut s = session(&["A", "B", "C", "D", "E"], 5);
    let winners = s.round.roles.team_b.clone();
    assert_eq!(winners.len(), 2);

    award_team(&mut s, TeamTag::B).unwrap();

    for (i, p) in s.players.iter().enumerate() {
        let expected = if winners.contains(&i) { 1 } else { 0 };
        assert_eq!(p.score, expected, "player {i}");
    }
}

#[test]
fn tie_at_threshold_declares_all_leaders() {
    let mut s = session(&["A", "B", "C"], 5);
    with_scores(&mut s, &[5, 5, 3]);
    assert_eq!(champions(&s.players, 5), Some(vec![0, 1]));

    s.phase = GamePhase::Verdict;
    continue_after_verdict(&mut s).unwrap();
    assert_eq!(s.phase, GamePhase::EndGame);
}

#[test]
fn below_threshold_goes_to_scoreboard() {
    let mut s = session(&["A", "B", "C"], 5);
    with_scores(&mut s, &[4, 2, 3]);
    assert_eq!(champions(&s.players, 5), None);

    s.phase = GamePhase::Verdict;
    continue_after_verdict(&mut s).unwrap();
    assert_eq!(s.phase, GamePhase::Scoreboard);
}

#[test]
fn standings_are_stable_on_equal_scores() {
    let players: Vec<Player> = [("A", 1u32), ("B", 3), ("C", 1), ("D", 3)]
        .iter()
        .map(|(n, s)| Player {
            name: n.to_string(),
            score: *s,
        })
        .collect();
    let order: Vec<usize> = standings(&players).iter().map(|r| r.index).collect();
    assert_eq!(order, vec![1, 3, 0, 2]);
}

#[test]
fn criteria_are_picked_uniformly() {
    let mut rng = SeededRandom::new(42);
    let trials = 30_000;
    let mut counts = [0u32; 3];
    for _ in 0..trials {
        let c = select_criterion(&mut rng);
        let i = Criterion::ALL.iter().position(|&x| x == c).unwrap();
        counts[i] += 1;
    }
    for c in counts {
        let share = c as f64 / trials as f64;
        assert!((share - 1.0 / 3.0).abs() < 0.02, "share {share}");
    }
}
