//! Error types for gamegraph
//!
//! Provides a unified error type for everything outside the store.
//! Store operations themselves cannot fail: "not found" is `None`.

use thiserror::Error;

/// Result type alias using GameGraphError
pub type Result<T> = std::result::Result<T, GameGraphError>;

/// Unified error type for gamegraph operations
#[derive(Debug, Error)]
pub enum GameGraphError {
    // -------------------------------------------------------------------------
    // I/O Errors
    // -------------------------------------------------------------------------
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    // -------------------------------------------------------------------------
    // Serialization Errors
    // -------------------------------------------------------------------------
    /// Malformed seed file or JSON variables
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    // -------------------------------------------------------------------------
    // Network Errors
    // -------------------------------------------------------------------------
    #[error("HTTP client error: {0}")]
    Client(#[from] reqwest::Error),

    /// The server answered, but the GraphQL response carried errors
    #[error("GraphQL error: {0}")]
    Graphql(String),

    // -------------------------------------------------------------------------
    // Configuration Errors
    // -------------------------------------------------------------------------
    #[error("Configuration error: {0}")]
    Config(String),
}
