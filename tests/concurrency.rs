//! Multi-threaded race tests for the match registry
//!
//! Covers:
//! - Racing starts of one pair in both orientations
//! - Racing score updates of one match (no hybrid scores)
//! - Phased start/update/finish across distinct matches
//! - Summaries built while other threads mutate the registry

use std::collections::HashSet;
use std::sync::{Arc, Barrier};
use std::thread;

use scoreboard::{ErrorKind, MatchRegistry};

fn spawn_all<T, F>(count: usize, task: F) -> Vec<T>
where
    T: Send + 'static,
    F: Fn(usize) -> T + Send + Sync + 'static,
{
    let task = Arc::new(task);
    let barrier = Arc::new(Barrier::new(count));

    let handles: Vec<_> = (0..count)
        .map(|i| {
            let task = Arc::clone(&task);
            let barrier = Arc::clone(&barrier);
            thread::spawn(move || {
                barrier.wait();
                task(i)
            })
        })
        .collect();

    handles.into_iter().map(|h| h.join().unwrap()).collect()
}

#[test]
fn test_concurrent_duplicate_start() {
    let registry = Arc::new(MatchRegistry::new());

    let board = Arc::clone(&registry);
    let results = spawn_all(64, move |i| {
        if i % 2 == 0 {
            board.start("Spain", "Brazil")
        } else {
            board.start("Brazil", "Spain")
        }
    });

    let successes = results.iter().filter(|r| r.is_ok()).count();
    assert_eq!(successes, 1, "exactly one start must win");
    assert!(results
        .iter()
        .filter_map(|r| r.as_ref().err())
        .all(|e| e.kind() == ErrorKind::Conflict));

    let summary = registry.summary();
    assert_eq!(summary.len(), 1);
    let only = &summary.matches()[0];
    assert_eq!((only.home_score, only.away_score), (0, 0));
}

#[test]
fn test_concurrent_start_after_existing_match() {
    let registry = Arc::new(MatchRegistry::new());
    registry.start("Spain", "Brazil").unwrap();

    let board = Arc::clone(&registry);
    let results = spawn_all(32, move |i| {
        if i % 2 == 0 {
            board.start("Spain", "Brazil")
        } else {
            board.start("brazil", "SPAIN")
        }
    });

    assert!(results.iter().all(|r| r.is_err()));
    assert_eq!(registry.summary().to_string(), "Spain 0 - Brazil 0\n");
}

#[test]
fn test_concurrent_score_updates_never_mix() {
    let registry = Arc::new(MatchRegistry::new());
    registry.start("Argentina", "Australia").unwrap();
    registry.start("Spain", "Brazil").unwrap();
    registry.update("Spain", 4, "Brazil", 2).unwrap();

    let board = Arc::clone(&registry);
    spawn_all(99, move |i| {
        let n = i as i64 + 1;
        board.update("Argentina", n, "Australia", n + 1).unwrap();
    });

    let snap = registry.get("Argentina", "Australia").unwrap();
    assert!((1..=99).contains(&snap.home_score));
    assert_eq!(snap.away_score, snap.home_score + 1, "scores must come from one update");

    registry.update("Argentina", 5, "Australia", 0).unwrap();

    assert_eq!(
        registry.summary().to_string(),
        "Spain 4 - Brazil 2\nArgentina 5 - Australia 0\n"
    );
}

#[test]
fn test_concurrent_operations_on_distinct_matches() {
    let registry = Arc::new(MatchRegistry::new());
    let fixtures = [
        ("Mexico", "Canada", 1, 0),
        ("Spain", "Brazil", 2, 1),
        ("Germany", "France", 1, 1),
        ("Argentina", "Australia", 3, 0),
    ];

    let board = Arc::clone(&registry);
    spawn_all(fixtures.len(), move |i| {
        let (home, away, _, _) = fixtures[i];
        board.start(home, away).unwrap();
    });

    let board = Arc::clone(&registry);
    spawn_all(fixtures.len(), move |i| {
        let (home, away, hs, aws) = fixtures[i];
        board.update(home, hs, away, aws).unwrap();
    });

    let board = Arc::clone(&registry);
    spawn_all(2, move |i| {
        let (home, away, _, _) = fixtures[i];
        board.finish(home, away).unwrap();
    });

    assert_eq!(
        registry.summary().to_string(),
        "Argentina 3 - Australia 0\nGermany 1 - France 1\n"
    );
}

#[test]
fn test_summary_consistent_under_mutation() {
    let registry = Arc::new(MatchRegistry::new());
    let writers = 4;
    let rounds = 200;

    let board = Arc::clone(&registry);
    let summaries = spawn_all(writers + 1, move |i| {
        let mut observed = Vec::new();
        if i == writers {
            for _ in 0..rounds {
                observed.push(board.summary());
            }
        } else {
            let home = format!("Home{}", i);
            let away = format!("Away{}", i);
            for round in 0..rounds {
                board.start(&home, &away).unwrap();
                // home and away always carry equal scores
                board.update(&home, round, &away, round).unwrap();
                board.finish(&home, &away).unwrap();
            }
        }
        observed
    });

    for summary in summaries.into_iter().flatten() {
        assert!(summary.len() <= writers);

        let homes: HashSet<_> = summary.iter().map(|m| m.home_team.clone()).collect();
        assert_eq!(homes.len(), summary.len(), "no duplicate entries");

        for m in summary.iter() {
            assert_eq!(m.home_score, m.away_score, "no half-applied update");
        }

        let totals: Vec<u64> = summary.iter().map(|m| m.total_score()).collect();
        assert!(totals.windows(2).all(|w| w[0] >= w[1]), "ordered by total");
    }

    assert!(registry.is_empty());
}
