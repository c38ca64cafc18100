//! GraphQL object and input types
//!
//! Output types are the store records themselves; relationship fields
//! resolve against the store on demand.

use async_graphql::{Context, InputObject, Object, Result, ID};

use crate::store::{Author, Game, GameEdits, NewGame, Review};

use super::store;

#[Object]
impl Game {
    async fn id(&self) -> ID {
        ID(self.id.clone())
    }

    async fn title(&self) -> &str {
        &self.title
    }

    async fn platform(&self) -> &Vec<String> {
        &self.platform
    }

    /// Reviews whose `game_id` is this game
    async fn reviews(&self, ctx: &Context<'_>) -> Result<Vec<Review>> {
        Ok(store(ctx)?.reviews_for_game(&self.id))
    }
}

#[Object]
impl Author {
    async fn id(&self) -> ID {
        ID(self.id.clone())
    }

    async fn name(&self) -> &str {
        &self.name
    }

    async fn verified(&self) -> bool {
        self.verified
    }

    /// Reviews written by this author
    async fn reviews(&self, ctx: &Context<'_>) -> Result<Vec<Review>> {
        Ok(store(ctx)?.reviews_for_author(&self.id))
    }
}

#[Object]
impl Review {
    async fn id(&self) -> ID {
        ID(self.id.clone())
    }

    async fn rating(&self) -> i32 {
        self.rating
    }

    async fn content(&self) -> &str {
        &self.content
    }

    async fn author(&self, ctx: &Context<'_>) -> Result<Option<Author>> {
        Ok(store(ctx)?.author_for_review(self))
    }

    /// Null once the reviewed game has been deleted
    async fn game(&self, ctx: &Context<'_>) -> Result<Option<Game>> {
        Ok(store(ctx)?.game_for_review(self))
    }
}

/// Fields for `addGame`
#[derive(Debug, Clone, InputObject)]
pub struct GameInput {
    pub title: String,
    pub platform: Vec<String>,
}

impl From<GameInput> for NewGame {
    fn from(input: GameInput) -> Self {
        NewGame {
            title: input.title,
            platform: input.platform,
        }
    }
}

/// Fields for `updateGame`; omitted or null fields are preserved
#[derive(Debug, Clone, Default, InputObject)]
pub struct GameEditsInput {
    pub title: Option<String>,
    pub platform: Option<Vec<String>>,
}

impl From<GameEditsInput> for GameEdits {
    fn from(input: GameEditsInput) -> Self {
        GameEdits {
            title: input.title,
            platform: input.platform,
        }
    }
}
