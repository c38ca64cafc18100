//! Query resolvers

use async_graphql::{Context, Object, Result, ID};

use crate::store::{Author, Game, Review};

use super::store;

pub struct QueryRoot;

#[Object]
impl QueryRoot {
    /// All games, in catalogue order
    async fn games(&self, ctx: &Context<'_>) -> Result<Vec<Game>> {
        Ok(store(ctx)?.list_games())
    }

    /// A single game, null if the id is unknown
    async fn game(&self, ctx: &Context<'_>, id: ID) -> Result<Option<Game>> {
        Ok(store(ctx)?.get_game(&id))
    }

    async fn authors(&self, ctx: &Context<'_>) -> Result<Vec<Author>> {
        Ok(store(ctx)?.list_authors())
    }

    async fn author(&self, ctx: &Context<'_>, id: ID) -> Result<Option<Author>> {
        Ok(store(ctx)?.get_author(&id))
    }

    async fn reviews(&self, ctx: &Context<'_>) -> Result<Vec<Review>> {
        Ok(store(ctx)?.list_reviews())
    }

    async fn review(&self, ctx: &Context<'_>, id: ID) -> Result<Option<Review>> {
        Ok(store(ctx)?.get_review(&id))
    }
}
