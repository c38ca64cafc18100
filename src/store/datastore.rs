//! DataStore implementation
//!
//! Vec-backed collections with a single RwLock for concurrency.

use parking_lot::RwLock;

use crate::config::{Config, IdStrategy};
use crate::error::Result;

use super::{Author, Game, GameEdits, IdGenerator, NewGame, Review, Seed};

/// The three collections, guarded together
#[derive(Debug, Default)]
struct Collections {
    games: Vec<Game>,
    authors: Vec<Author>,
    reviews: Vec<Review>,
}

/// In-memory store of games, authors and reviews
///
/// ## Concurrency Model: Single-Writer / Multiple-Reader (SWMR)
///
/// - **Reads** share the lock and return owned copies, so no guard
///   outlives a call
/// - **Writes** (add/update/delete game) hold the lock exclusively for
///   the whole read-modify-write, so concurrent mutations never lose
///   updates
/// - All methods use `&self`; share the store as `Arc<DataStore>`
#[derive(Debug)]
pub struct DataStore {
    data: RwLock<Collections>,
    ids: IdGenerator,
}

impl DataStore {
    /// Create a store from seed data
    pub fn new(seed: Seed, id_strategy: IdStrategy) -> Self {
        let ids = IdGenerator::new(id_strategy, seed.highest_numeric_game_id());
        let Seed {
            games,
            authors,
            reviews,
        } = seed;

        Self {
            data: RwLock::new(Collections {
                games,
                authors,
                reviews,
            }),
            ids,
        }
    }

    /// Create a store from the configured seed source and id strategy
    pub fn open(config: &Config) -> Result<Self> {
        let seed = Seed::load(&config.seed)?;
        Ok(Self::new(seed, config.id_strategy))
    }

    /// Create a store with the built-in dataset
    pub fn with_builtin_seed() -> Self {
        Self::new(Seed::builtin(), IdStrategy::Sequential)
    }

    // =========================================================================
    // Games
    // =========================================================================

    pub fn list_games(&self) -> Vec<Game> {
        self.data.read().games.clone()
    }

    /// First game whose id equals `id`
    pub fn get_game(&self, id: &str) -> Option<Game> {
        self.data.read().games.iter().find(|g| g.id == id).cloned()
    }

    /// Append a new game with a freshly assigned id
    pub fn add_game(&self, input: NewGame) -> Game {
        let game = Game {
            id: self.ids.next_id(),
            title: input.title,
            platform: input.platform,
        };

        self.data.write().games.push(game.clone());
        tracing::debug!("Added game {} ({})", game.id, game.title);
        game
    }

    /// Shallow-merge `edits` onto every game matching `id`
    ///
    /// Returns the first matching game after the merge, or `None` when
    /// nothing matches.
    pub fn update_game(&self, id: &str, edits: GameEdits) -> Option<Game> {
        if edits.is_empty() {
            tracing::debug!("Update of game {} carries no edits", id);
        }

        let mut data = self.data.write();

        let mut updated = None;
        for game in data.games.iter_mut().filter(|g| g.id == id) {
            edits.apply(game);
            if updated.is_none() {
                updated = Some(game.clone());
            }
        }

        match &updated {
            Some(_) => tracing::debug!("Updated game {}", id),
            None => tracing::debug!("Update skipped, no game {}", id),
        }
        updated
    }

    /// Remove every game matching `id` and return what remains
    ///
    /// Reviews pointing at the removed game are left in place.
    pub fn delete_game(&self, id: &str) -> Vec<Game> {
        let mut data = self.data.write();

        let before = data.games.len();
        data.games.retain(|g| g.id != id);
        tracing::debug!("Deleted game {} ({} removed)", id, before - data.games.len());

        data.games.clone()
    }

    // =========================================================================
    // Authors
    // =========================================================================

    pub fn list_authors(&self) -> Vec<Author> {
        self.data.read().authors.clone()
    }

    pub fn get_author(&self, id: &str) -> Option<Author> {
        self.data.read().authors.iter().find(|a| a.id == id).cloned()
    }

    // =========================================================================
    // Reviews
    // =========================================================================

    pub fn list_reviews(&self) -> Vec<Review> {
        self.data.read().reviews.clone()
    }

    pub fn get_review(&self, id: &str) -> Option<Review> {
        self.data.read().reviews.iter().find(|r| r.id == id).cloned()
    }

    /// Reviews of one game, in collection order
    pub fn reviews_for_game(&self, game_id: &str) -> Vec<Review> {
        self.data
            .read()
            .reviews
            .iter()
            .filter(|r| r.game_id == game_id)
            .cloned()
            .collect()
    }

    /// Reviews written by one author, in collection order
    pub fn reviews_for_author(&self, author_id: &str) -> Vec<Review> {
        self.data
            .read()
            .reviews
            .iter()
            .filter(|r| r.author_id == author_id)
            .cloned()
            .collect()
    }

    // =========================================================================
    // Relationships
    // =========================================================================

    pub fn author_for_review(&self, review: &Review) -> Option<Author> {
        self.get_author(&review.author_id)
    }

    /// `None` when the game was deleted after the review was written
    pub fn game_for_review(&self, review: &Review) -> Option<Game> {
        self.get_game(&review.game_id)
    }

    // =========================================================================
    // Accessors (for testing and debugging)
    // =========================================================================

    pub fn game_count(&self) -> usize {
        self.data.read().games.len()
    }

    pub fn author_count(&self) -> usize {
        self.data.read().authors.len()
    }

    pub fn review_count(&self) -> usize {
        self.data.read().reviews.len()
    }

    pub fn id_strategy(&self) -> IdStrategy {
        self.ids.strategy()
    }
}

impl Default for DataStore {
    fn default() -> Self {
        Self::new(Seed::default(), IdStrategy::Sequential)
    }
}
