//! Mutation resolvers
//!
//! Only games are writable; authors and reviews are read-only.

use async_graphql::{Context, Object, Result, ID};

use crate::store::Game;

use super::store;
use super::types::{GameEditsInput, GameInput};

pub struct MutationRoot;

#[Object]
impl MutationRoot {
    /// Create a game and return it with its assigned id
    async fn add_game(&self, ctx: &Context<'_>, game: GameInput) -> Result<Game> {
        Ok(store(ctx)?.add_game(game.into()))
    }

    /// Shallow-merge `edits` onto a game; null if the id is unknown
    async fn update_game(
        &self,
        ctx: &Context<'_>,
        id: ID,
        edits: GameEditsInput,
    ) -> Result<Option<Game>> {
        Ok(store(ctx)?.update_game(&id, edits.into()))
    }

    /// Remove a game and return the remaining games
    async fn delete_game(&self, ctx: &Context<'_>, id: ID) -> Result<Vec<Game>> {
        Ok(store(ctx)?.delete_game(&id))
    }
}
