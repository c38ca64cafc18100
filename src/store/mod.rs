//! Store Module
//!
//! In-memory collections of games, authors and reviews.
//!
//! ## Responsibilities
//! - Own the three collections behind a single RwLock
//! - Linear-scan lookups and relationship resolution
//! - Game mutations (add, shallow-merge update, delete)
//! - Id assignment for new games
//! - Seed loading at startup
//!
//! ## Data Structure Choice
//! Plain `Vec`s in insertion order:
//! - Listing order matches seed order, new games are appended
//! - Lookups are first-match scans, the collections are tiny
//! - Foreign keys (`author_id`, `game_id`) are never checked

mod datastore;
mod ids;
mod seed;

pub use datastore::DataStore;
pub use ids::IdGenerator;
pub use seed::Seed;

use serde::{Deserialize, Serialize};

/// A game in the catalogue
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Game {
    pub id: String,
    pub title: String,
    #[serde(default)]
    pub platform: Vec<String>,
}

/// A review author
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Author {
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub verified: bool,
}

/// A review of one game by one author
///
/// `author_id` and `game_id` are unmanaged references: they may point
/// at records that do not exist (e.g. after `delete_game`).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Review {
    pub id: String,
    pub rating: i32,
    pub content: String,
    pub author_id: String,
    pub game_id: String,
}

/// Fields of a game to be created (the id is assigned by the store)
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct NewGame {
    pub title: String,
    pub platform: Vec<String>,
}

/// Partial update for a game
///
/// `None` fields are left untouched by [`GameEdits::apply`].
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct GameEdits {
    pub title: Option<String>,
    pub platform: Option<Vec<String>>,
}

impl GameEdits {
    /// Shallow-merge these edits onto `game`
    pub fn apply(&self, game: &mut Game) {
        if let Some(title) = &self.title {
            game.title = title.clone();
        }
        if let Some(platform) = &self.platform {
            game.platform = platform.clone();
        }
    }

    /// True when no field is supplied
    pub fn is_empty(&self) -> bool {
        self.title.is_none() && self.platform.is_none()
    }
}
