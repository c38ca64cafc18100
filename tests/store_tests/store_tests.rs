//! DataStore Tests
//!
//! Tests verify:
//! - Lookups by id (found / not found)
//! - Relationship filters and resolution
//! - add/update/delete game semantics
//! - Id assignment strategies
//! - Concurrent mutations (no lost updates)

use std::collections::HashSet;
use std::sync::Arc;
use std::thread;

use gamegraph::config::IdStrategy;
use gamegraph::store::{DataStore, Game, GameEdits, NewGame, Review, Seed};

// =============================================================================
// Helper Functions
// =============================================================================

fn seeded_store() -> DataStore {
    DataStore::with_builtin_seed()
}

fn new_game(title: &str, platform: &[&str]) -> NewGame {
    NewGame {
        title: title.to_string(),
        platform: platform.iter().map(|p| p.to_string()).collect(),
    }
}

fn ids<T, F: Fn(&T) -> &str>(items: &[T], id: F) -> Vec<String> {
    items.iter().map(|i| id(i).to_string()).collect()
}

// =============================================================================
// Read Tests
// =============================================================================

#[test]
fn test_builtin_seed_counts() {
    let store = seeded_store();

    assert_eq!(store.game_count(), 5);
    assert_eq!(store.author_count(), 3);
    assert_eq!(store.review_count(), 7);
}

#[test]
fn test_list_games_preserves_seed_order() {
    let store = seeded_store();

    let games = store.list_games();
    assert_eq!(ids(&games, |g: &Game| g.id.as_str()), vec!["1", "2", "3", "4", "5"]);
}

#[test]
fn test_get_game_existing() {
    let store = seeded_store();

    let game = store.get_game("1").unwrap();
    assert_eq!(game.title, "Zelda");
    assert_eq!(game.platform, vec!["Switch".to_string()]);
}

#[test]
fn test_get_nonexistent_ids_return_none() {
    let store = seeded_store();

    assert_eq!(store.get_game("999"), None);
    assert_eq!(store.get_author("999"), None);
    assert_eq!(store.get_review("999"), None);
    assert_eq!(store.get_game(""), None);
}

#[test]
fn test_get_author_and_review() {
    let store = seeded_store();

    let author = store.get_author("2").unwrap();
    assert_eq!(author.name, "yoshi");
    assert!(!author.verified);

    let review = store.get_review("3").unwrap();
    assert_eq!(review.rating, 7);
    assert_eq!(review.author_id, "3");
    assert_eq!(review.game_id, "3");
}

#[test]
fn test_first_match_wins_on_duplicate_ids() {
    let seed = Seed {
        games: vec![
            Game {
                id: "1".to_string(),
                title: "first".to_string(),
                platform: vec![],
            },
            Game {
                id: "1".to_string(),
                title: "second".to_string(),
                platform: vec![],
            },
        ],
        ..Seed::default()
    };
    let store = DataStore::new(seed, IdStrategy::Sequential);

    assert_eq!(store.get_game("1").unwrap().title, "first");
}

// =============================================================================
// Relationship Tests
// =============================================================================

#[test]
fn test_reviews_for_game_is_exact_ordered_subset() {
    let store = seeded_store();

    let reviews = store.reviews_for_game("2");
    assert_eq!(ids(&reviews, |r: &Review| r.id.as_str()), vec!["1", "6"]);

    let expected: Vec<Review> = store
        .list_reviews()
        .into_iter()
        .filter(|r| r.game_id == "2")
        .collect();
    assert_eq!(reviews, expected);
}

#[test]
fn test_reviews_for_author() {
    let store = seeded_store();

    let reviews = store.reviews_for_author("2");
    assert_eq!(ids(&reviews, |r: &Review| r.id.as_str()), vec!["2", "4", "5"]);
    assert!(reviews.iter().all(|r| r.author_id == "2"));
}

#[test]
fn test_reviews_for_unknown_ids_are_empty() {
    let store = seeded_store();

    assert!(store.reviews_for_game("999").is_empty());
    assert!(store.reviews_for_author("999").is_empty());
}

#[test]
fn test_author_and_game_for_review() {
    let store = seeded_store();
    let review = store.get_review("2").unwrap();

    assert_eq!(store.author_for_review(&review).unwrap().name, "yoshi");
    assert_eq!(store.game_for_review(&review).unwrap().title, "Zelda");
}

#[test]
fn test_dangling_foreign_keys_resolve_to_none() {
    let store = seeded_store();
    let review = Review {
        id: "x".to_string(),
        rating: 1,
        content: "orphan".to_string(),
        author_id: "404".to_string(),
        game_id: "404".to_string(),
    };

    assert_eq!(store.author_for_review(&review), None);
    assert_eq!(store.game_for_review(&review), None);
}

// =============================================================================
// addGame Tests
// =============================================================================

#[test]
fn test_add_game_appends_one_record() {
    let store = seeded_store();
    let before = store.game_count();

    let game = store.add_game(new_game("Hades", &["PC", "Switch"]));

    assert_eq!(store.game_count(), before + 1);
    assert_eq!(game.title, "Hades");
    assert_eq!(game.platform, vec!["PC".to_string(), "Switch".to_string()]);
    assert_eq!(store.list_games().last(), Some(&game));
    assert_eq!(store.get_game(&game.id), Some(game));
}

#[test]
fn test_add_game_sequential_ids_follow_seed() {
    let store = seeded_store();

    let a = store.add_game(new_game("A", &[]));
    let b = store.add_game(new_game("B", &[]));

    assert_eq!(a.id, "6");
    assert_eq!(b.id, "7");
}

#[test]
fn test_add_game_ids_never_reused_after_delete() {
    let store = seeded_store();

    let added = store.add_game(new_game("A", &[]));
    store.delete_game(&added.id);
    let next = store.add_game(new_game("B", &[]));

    assert_ne!(added.id, next.id);
}

#[test]
fn test_add_game_uuid_ids() {
    let store = DataStore::new(Seed::builtin(), IdStrategy::Uuid);

    let a = store.add_game(new_game("A", &[]));
    let b = store.add_game(new_game("B", &[]));

    assert_eq!(a.id.len(), 36);
    assert_ne!(a.id, b.id);
    assert_eq!(store.id_strategy(), IdStrategy::Uuid);
}

fn seed_with_game_id(id: u64) -> Seed {
    Seed {
        games: vec![Game {
            id: id.to_string(),
            title: "edge".to_string(),
            platform: vec![],
        }],
        ..Seed::default()
    }
}

#[test]
fn test_add_game_after_max_seeded_id_uses_uuid() {
    let store = DataStore::new(seed_with_game_id(u64::MAX), IdStrategy::Sequential);

    let game = store.add_game(NewGame::default());

    assert_eq!(store.id_strategy(), IdStrategy::Uuid);
    assert_ne!(game.id, u64::MAX.to_string());
    assert_eq!(game.id.len(), 36);
    assert_eq!(store.game_count(), 2);
}

#[test]
fn test_add_game_sequential_counter_does_not_wrap() {
    let store = DataStore::new(seed_with_game_id(u64::MAX - 1), IdStrategy::Sequential);

    let a = store.add_game(NewGame::default());
    let b = store.add_game(NewGame::default());

    assert_ne!(a.id, (u64::MAX - 1).to_string());
    assert_ne!(a.id, b.id);
    assert!(a.id.parse::<u64>().is_err());
    assert!(b.id.parse::<u64>().is_err());
}

#[test]
fn test_add_game_on_empty_store_starts_at_one() {
    let store = DataStore::default();

    let game = store.add_game(new_game("First", &["PC"]));
    assert_eq!(game.id, "1");
    assert_eq!(store.list_games(), vec![game]);
}

// =============================================================================
// updateGame Tests
// =============================================================================

#[test]
fn test_update_game_title_preserves_platform() {
    let store = seeded_store();

    let updated = store
        .update_game(
            "1",
            GameEdits {
                title: Some("Zelda: ToTK".to_string()),
                platform: None,
            },
        )
        .unwrap();

    assert_eq!(
        updated,
        Game {
            id: "1".to_string(),
            title: "Zelda: ToTK".to_string(),
            platform: vec!["Switch".to_string()],
        }
    );
    assert_eq!(store.get_game("1"), Some(updated));
}

#[test]
fn test_update_game_platform_preserves_title() {
    let store = seeded_store();

    let updated = store
        .update_game(
            "2",
            GameEdits {
                title: None,
                platform: Some(vec!["PC".to_string(), "PS2".to_string()]),
            },
        )
        .unwrap();

    assert_eq!(updated.title, "Final Fantasy 7 Remake");
    assert_eq!(updated.platform, vec!["PC".to_string(), "PS2".to_string()]);
}

#[test]
fn test_update_game_with_no_edits_is_identity() {
    let store = seeded_store();
    let original = store.get_game("3").unwrap();

    let updated = store.update_game("3", GameEdits::default()).unwrap();
    assert_eq!(updated, original);
}

#[test]
fn test_update_nonexistent_game_returns_none() {
    let store = seeded_store();
    let before = store.list_games();

    let result = store.update_game(
        "999",
        GameEdits {
            title: Some("ghost".to_string()),
            platform: None,
        },
    );

    assert_eq!(result, None);
    assert_eq!(store.list_games(), before);
}

#[test]
fn test_update_game_does_not_touch_other_games() {
    let store = seeded_store();
    let before = store.list_games();

    store.update_game(
        "4",
        GameEdits {
            title: Some("Mario Kart 8".to_string()),
            platform: None,
        },
    );

    let after = store.list_games();
    for (old, new) in before.iter().zip(after.iter()) {
        if old.id != "4" {
            assert_eq!(old, new);
        }
    }
}

// =============================================================================
// deleteGame Tests
// =============================================================================

#[test]
fn test_delete_game_returns_remaining() {
    let store = seeded_store();

    let remaining = store.delete_game("3");

    assert_eq!(ids(&remaining, |g: &Game| g.id.as_str()), vec!["1", "2", "4", "5"]);
    assert_eq!(store.get_game("3"), None);
    assert_eq!(store.list_games(), remaining);
}

#[test]
fn test_delete_nonexistent_game_leaves_collection() {
    let store = seeded_store();
    let before = store.list_games();

    let remaining = store.delete_game("999");

    assert_eq!(remaining, before);
}

#[test]
fn test_delete_game_removes_all_matching() {
    let game = |title: &str| Game {
        id: "dup".to_string(),
        title: title.to_string(),
        platform: vec![],
    };
    let seed = Seed {
        games: vec![game("a"), game("b")],
        ..Seed::default()
    };
    let store = DataStore::new(seed, IdStrategy::Sequential);

    assert!(store.delete_game("dup").is_empty());
}

#[test]
fn test_delete_game_leaves_reviews_orphaned() {
    let store = seeded_store();

    store.delete_game("1");

    let orphans = store.reviews_for_game("1");
    assert_eq!(orphans.len(), 2);
    assert_eq!(store.review_count(), 7);
    assert_eq!(store.game_for_review(&orphans[0]), None);
}

// =============================================================================
// Concurrency Tests
// =============================================================================

#[test]
fn test_concurrent_adds_are_not_lost() {
    let store = Arc::new(seeded_store());
    let mut handles = Vec::new();

    for t in 0..8 {
        let store = Arc::clone(&store);
        handles.push(thread::spawn(move || {
            for i in 0..50 {
                store.add_game(NewGame {
                    title: format!("game-{}-{}", t, i),
                    platform: vec![],
                });
            }
        }));
    }
    for handle in handles {
        handle.join().unwrap();
    }

    let games = store.list_games();
    assert_eq!(games.len(), 5 + 8 * 50);

    let unique: HashSet<&str> = games.iter().map(|g| g.id.as_str()).collect();
    assert_eq!(unique.len(), games.len());
}

#[test]
fn test_concurrent_readers_and_writer() {
    let store = Arc::new(seeded_store());

    let writer = {
        let store = Arc::clone(&store);
        thread::spawn(move || {
            for i in 0..100 {
                store.update_game(
                    "1",
                    GameEdits {
                        title: Some(format!("Zelda {}", i)),
                        platform: None,
                    },
                );
            }
        })
    };

    let readers: Vec<_> = (0..4)
        .map(|_| {
            let store = Arc::clone(&store);
            thread::spawn(move || {
                for _ in 0..100 {
                    let game = store.get_game("1").unwrap();
                    assert_eq!(game.platform, vec!["Switch".to_string()]);
                }
            })
        })
        .collect();

    writer.join().unwrap();
    for reader in readers {
        reader.join().unwrap();
    }

    assert_eq!(store.get_game("1").unwrap().title, "Zelda 99");
}
