//! Integration tests for role assignment: judge rotation, team split, shuffle fairness.

use debate_party::{assign_roles, RandomnessProvider, SeededRandom};
use std::collections::{BTreeSet, HashMap, VecDeque};

/// Replays a fixed list of picks.
struct Scripted(VecDeque<usize>);

impl RandomnessProvider for Scripted {
    fn below(&mut self, upper: usize) -> usize {
        let v = self.0.pop_front().expect("script exhausted");
        assert!(v < upper, "scripted pick {v} out of range 0..{upper}");
        v
    }
}

#[test]
fn judge_rotates_and_teams_partition_the_roster() {
    let mut rng = SeededRandom::new(7);
    for n in 3..=8 {
        for round in 0..20 {
            let roles = assign_roles(n, round, &mut rng);
            assert_eq!(roles.judge, round % n);

            let a: BTreeSet<_> = roles.team_a.iter().copied().collect();
            let b: BTreeSet<_> = roles.team_b.iter().copied().collect();
            assert_eq!(a.len(), roles.team_a.len());
            assert_eq!(b.len(), roles.team_b.len());
            assert!(a.is_disjoint(&b));
            assert!(!a.contains(&roles.judge) && !b.contains(&roles.judge));

            let mut all: BTreeSet<_> = a.union(&b).copied().collect();
            all.insert(roles.judge);
            assert_eq!(all, (0..n).collect::<BTreeSet<_>>());

            assert_eq!(roles.team_a.len(), n / 2); // ceil((n-1)/2)
            assert_eq!(roles.team_b.len(), (n - 1) / 2);
        }
    }
}

#[test]
fn scripted_picks_give_exact_teams() {
    // 5 players, round 6 -> judge 1, rest [0, 2, 3, 4].
    // i=3 swap with 0 -> [4, 2, 3, 0]; i=2 keep -> same; i=1 swap with 0 -> [2, 4, 3, 0].
    let mut rng = Scripted(VecDeque::from(vec![0, 2, 0]));
    let roles = assign_roles(5, 6, &mut rng);
    assert_eq!(roles.judge, 1);
    assert_eq!(roles.team_a, vec![2, 4]);
    assert_eq!(roles.team_b, vec![3, 0]);
}

#[test]
fn odd_remainder_gives_team_a_the_extra_player() {
    let mut rng = SeededRandom::new(1);
    let roles = assign_roles(4, 0, &mut rng);
    assert_eq!(roles.team_a.len(), 2);
    assert_eq!(roles.team_b.len(), 1);
}

#[test]
fn shuffle_is_uniform_over_permutations() {
    // 4 players, judge 0: the 3! orderings of [1, 2, 3] should be equally likely.
    let trials = 60_000;
    let mut rng = SeededRandom::new(2024);
    let mut counts: HashMap<Vec<usize>, u32> = HashMap::new();
    for _ in 0..trials {
        let roles = assign_roles(4, 0, &mut rng);
        let order: Vec<usize> = roles.team_a.iter().chain(&roles.team_b).copied().collect();
        *counts.entry(order).or_default() += 1;
    }
    assert_eq!(counts.len(), 6);
    let expected = trials as f64 / 6.0;
    let chi_square: f64 = counts
        .values()
        .map(|&c| (c as f64 - expected).powi(2) / expected)
        .sum();
    // 5 degrees of freedom; 30 is far beyond the 0.1% critical value (20.5).
    assert!(chi_square < 30.0, "chi-square too high: {chi_square}");
}

#[test]
#[should_panic]
fn single_player_roster_is_a_programming_error() {
    let mut rng = SeededRandom::new(0);
    assign_roles(1, 0, &mut rng);
}
