//! GraphQL Module
//!
//! Schema and resolvers bound to the [`DataStore`].
//!
//! ## Schema
//! ```text
//! type Game   { id: ID!  title: String!  platform: [String!]!  reviews: [Review!]! }
//! type Author { id: ID!  name: String!   verified: Boolean!    reviews: [Review!]! }
//! type Review { id: ID!  rating: Int!    content: String!      author: Author  game: Game }
//!
//! type Query {
//!   games: [Game!]!      game(id: ID!): Game
//!   authors: [Author!]!  author(id: ID!): Author
//!   reviews: [Review!]!  review(id: ID!): Review
//! }
//!
//! type Mutation {
//!   addGame(game: GameInput!): Game!
//!   updateGame(id: ID!, edits: GameEditsInput!): Game
//!   deleteGame(id: ID!): [Game!]!
//! }
//! ```
//!
//! Parsing, validation and execution are handled by `async-graphql`.
//! The store is injected as `Arc<DataStore>` context data.

mod mutation;
mod query;
mod types;

pub use mutation::MutationRoot;
pub use query::QueryRoot;
pub use types::{GameEditsInput, GameInput};

use std::sync::Arc;

use async_graphql::{EmptySubscription, Schema};

use crate::config::Config;
use crate::store::DataStore;

/// The gamegraph schema type
pub type GameSchema = Schema<QueryRoot, MutationRoot, EmptySubscription>;

/// Build the schema with default limits
pub fn build_schema(store: Arc<DataStore>) -> GameSchema {
    Schema::build(QueryRoot, MutationRoot, EmptySubscription)
        .data(store)
        .finish()
}

/// Build the schema applying the configured query limits
pub fn build_schema_with_config(store: Arc<DataStore>, config: &Config) -> GameSchema {
    let mut builder = Schema::build(QueryRoot, MutationRoot, EmptySubscription).data(store);

    if let Some(depth) = config.depth_limit {
        builder = builder.limit_depth(depth);
    }
    if let Some(complexity) = config.complexity_limit {
        builder = builder.limit_complexity(complexity);
    }

    builder.finish()
}

/// Fetch the store from resolver context
fn store<'a>(ctx: &async_graphql::Context<'a>) -> async_graphql::Result<&'a Arc<DataStore>> {
    ctx.data::<Arc<DataStore>>()
}
