//! # gamegraph
//!
//! A small GraphQL API over an in-memory catalogue:
//! - Games, authors and reviews held in process memory
//! - Query resolvers with relationship fields (game ↔ reviews ↔ author)
//! - Game mutations (add, shallow-merge update, delete)
//! - Single-writer/multi-reader store shared by concurrent requests
//!
//! ## Architecture Overview
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │                  HTTP Server (axum)                          │
//! │            POST /graphql · GET / (GraphiQL)                  │
//! └─────────────────────┬───────────────────────────────────────┘
//!                       │
//! ┌─────────────────────▼───────────────────────────────────────┐
//! │               GraphQL Schema (async-graphql)                 │
//! │            QueryRoot · MutationRoot · object types           │
//! └─────────────────────┬───────────────────────────────────────┘
//!                       │  Arc<DataStore> (context data)
//!                       ▼
//!               ┌──────────────────┐
//!               │    DataStore     │
//!               │     (RwLock)     │
//!               │ games · authors  │
//!               │     reviews      │
//!               └──────────────────┘
//! ```

// =============================================================================
// Module Declarations
// =============================================================================

pub mod error;
pub mod config;

pub mod store;
pub mod graphql;
pub mod network;
pub mod client;

// =============================================================================
// Public API Re-exports
// =============================================================================

pub use error::{GameGraphError, Result};
pub use config::Config;
pub use store::DataStore;

// =============================================================================
// Version Info
// =============================================================================

/// Current version of gamegraph
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
