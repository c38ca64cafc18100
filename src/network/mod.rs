//! Network Module
//!
//! HTTP serving of the GraphQL schema.
//!
//! ## Architecture
//! - axum router on a tokio runtime (requests handled concurrently)
//! - Every request executes against one shared schema
//! - The schema reaches the store through `Arc<DataStore>` context data

mod handlers;
mod server;

pub use handlers::{health_check, AppState, GRAPHQL_PATH};
pub use server::Server;
