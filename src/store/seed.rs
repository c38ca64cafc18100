//! Seed data
//!
//! The initial contents of the store, either built in or read from a
//! JSON file shaped like:
//!
//! ```text
//! {
//!   "games":   [{ "id": "1", "title": "Zelda", "platform": ["Switch"] }],
//!   "authors": [{ "id": "1", "name": "mario", "verified": true }],
//!   "reviews": [{ "id": "1", "rating": 9, "content": "...",
//!                 "author_id": "1", "game_id": "1" }]
//! }
//! ```

use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::config::SeedSource;
use crate::error::Result;

use super::{Author, Game, Review};

/// The three collections a store starts with
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Seed {
    #[serde(default)]
    pub games: Vec<Game>,
    #[serde(default)]
    pub authors: Vec<Author>,
    #[serde(default)]
    pub reviews: Vec<Review>,
}

impl Seed {
    /// Resolve a configured seed source
    pub fn load(source: &SeedSource) -> Result<Self> {
        match source {
            SeedSource::Builtin => Ok(Self::builtin()),
            SeedSource::Empty => Ok(Self::default()),
            SeedSource::File(path) => Self::from_file(path),
        }
    }

    /// Read a seed from a JSON file
    pub fn from_file(path: &Path) -> Result<Self> {
        let raw = fs::read_to_string(path)?;
        let seed: Seed = serde_json::from_str(&raw)?;
        tracing::info!(
            "Loaded seed from {}: {} games, {} authors, {} reviews",
            path.display(),
            seed.games.len(),
            seed.authors.len(),
            seed.reviews.len()
        );
        Ok(seed)
    }

    /// The built-in dataset
    pub fn builtin() -> Self {
        Self {
            games: vec![
                game("1", "Zelda", &["Switch"]),
                game("2", "Final Fantasy 7 Remake", &["PS5", "Xbox"]),
                game("3", "Elden Ring", &["PS5", "Xbox", "PC"]),
                game("4", "Mario Kart", &["Switch"]),
                game("5", "Pokemon Scarlet", &["PS5", "Xbox", "PC"]),
            ],
            authors: vec![
                author("1", "mario", true),
                author("2", "yoshi", false),
                author("3", "peach", true),
            ],
            reviews: vec![
                review("1", 9, "1", "2"),
                review("2", 10, "2", "1"),
                review("3", 7, "3", "3"),
                review("4", 5, "2", "4"),
                review("5", 8, "2", "5"),
                review("6", 7, "1", "2"),
                review("7", 10, "3", "1"),
            ],
        }
    }

    /// Highest numeric game id, 0 if none parse
    pub fn highest_numeric_game_id(&self) -> u64 {
        self.games
            .iter()
            .filter_map(|g| g.id.parse::<u64>().ok())
            .max()
            .unwrap_or(0)
    }
}

fn game(id: &str, title: &str, platform: &[&str]) -> Game {
    Game {
        id: id.to_string(),
        title: title.to_string(),
        platform: platform.iter().map(|p| p.to_string()).collect(),
    }
}

fn author(id: &str, name: &str, verified: bool) -> Author {
    Author {
        id: id.to_string(),
        name: name.to_string(),
        verified,
    }
}

fn review(id: &str, rating: i32, author_id: &str, game_id: &str) -> Review {
    Review {
        id: id.to_string(),
        rating,
        content: "lorem ipsum".to_string(),
        author_id: author_id.to_string(),
        game_id: game_id.to_string(),
    }
}
