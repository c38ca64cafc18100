//! Id generation for new games

use std::sync::atomic::{AtomicU64, Ordering};

use uuid::Uuid;

use crate::config::IdStrategy;

/// Hands out ids for games created at runtime
///
/// The sequential counter is atomic (lock-free). Uniqueness against
/// non-numeric seeded ids is not checked.
#[derive(Debug)]
pub enum IdGenerator {
    Sequential { next: AtomicU64 },
    Uuid,
}

impl IdGenerator {
    /// Create a generator; a sequential one starts after `highest_seeded`
    ///
    /// Falls back to UUIDs when `highest_seeded` is `u64::MAX`.
    pub fn new(strategy: IdStrategy, highest_seeded: u64) -> Self {
        match strategy {
            IdStrategy::Sequential => match highest_seeded.checked_add(1) {
                Some(first) => IdGenerator::Sequential {
                    next: AtomicU64::new(first),
                },
                None => {
                    tracing::warn!(
                        "Seeded game id {} leaves no room for sequential ids, using UUIDs",
                        highest_seeded
                    );
                    IdGenerator::Uuid
                }
            },
            IdStrategy::Uuid => IdGenerator::Uuid,
        }
    }

    /// Produce the next id
    pub fn next_id(&self) -> String {
        match self {
            IdGenerator::Sequential { next } => {
                // The counter never wraps; once exhausted, new ids are UUIDs
                match next.fetch_update(Ordering::Relaxed, Ordering::Relaxed, |n| n.checked_add(1)) {
                    Ok(id) => id.to_string(),
                    Err(_) => Uuid::new_v4().to_string(),
                }
            }
            IdGenerator::Uuid => Uuid::new_v4().to_string(),
        }
    }

    /// The strategy this generator implements
    pub fn strategy(&self) -> IdStrategy {
        match self {
            IdGenerator::Sequential { .. } => IdStrategy::Sequential,
            IdGenerator::Uuid => IdStrategy::Uuid,
        }
    }
}
