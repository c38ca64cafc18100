//! Configuration for gamegraph
//!
//! Centralized configuration with sensible defaults.

use std::net::SocketAddr;
use std::path::PathBuf;
use std::str::FromStr;

use crate::error::{GameGraphError, Result};

/// Main configuration for a gamegraph instance
#[derive(Debug, Clone)]
pub struct Config {
    // -------------------------------------------------------------------------
    // Store Configuration
    // -------------------------------------------------------------------------
    /// Where the initial collections come from
    pub seed: SeedSource,

    /// How ids are assigned to games created through `addGame`
    pub id_strategy: IdStrategy,

    // -------------------------------------------------------------------------
    // GraphQL Configuration
    // -------------------------------------------------------------------------
    /// Serve the GraphiQL explorer on GET requests
    pub graphiql: bool,

    /// Maximum query depth accepted by the engine (None = unlimited)
    pub depth_limit: Option<usize>,

    /// Maximum query complexity accepted by the engine (None = unlimited)
    pub complexity_limit: Option<usize>,

    // -------------------------------------------------------------------------
    // Network Configuration
    // -------------------------------------------------------------------------
    /// HTTP listen address
    pub listen_addr: String,
}

/// Source of the data loaded into the store at startup
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SeedSource {
    /// The built-in dataset (five games, three authors, seven reviews)
    Builtin,

    /// Start with three empty collections
    Empty,

    /// Load collections from a JSON file
    File(PathBuf),
}

/// Id assignment strategy for new games
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum IdStrategy {
    /// Monotonic counter, starting after the highest numeric seeded id
    Sequential,

    /// Random v4 UUIDs
    Uuid,
}

impl FromStr for IdStrategy {
    type Err = GameGraphError;

    fn from_str(s: &str) -> Result<Self> {
        match s.to_ascii_lowercase().as_str() {
            "sequential" | "seq" => Ok(IdStrategy::Sequential),
            "uuid" => Ok(IdStrategy::Uuid),
            other => Err(GameGraphError::Config(format!(
                "unknown id strategy '{}' (expected 'sequential' or 'uuid')",
                other
            ))),
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            seed: SeedSource::Builtin,
            id_strategy: IdStrategy::Sequential,
            graphiql: true,
            depth_limit: None,
            complexity_limit: None,
            listen_addr: "127.0.0.1:4000".to_string(),
        }
    }
}

impl Config {
    /// Create a new config builder
    pub fn builder() -> ConfigBuilder {
        ConfigBuilder::default()
    }

    /// Parse the listen address
    pub fn socket_addr(&self) -> Result<SocketAddr> {
        self.listen_addr.parse().map_err(|e| {
            GameGraphError::Config(format!("invalid listen address '{}': {}", self.listen_addr, e))
        })
    }
}

/// Builder for Config
#[derive(Default)]
pub struct ConfigBuilder {
    config: Config,
}

impl ConfigBuilder {
    /// Set the seed source
    pub fn seed(mut self, seed: SeedSource) -> Self {
        self.config.seed = seed;
        self
    }

    /// Load the seed from a JSON file
    pub fn seed_file(mut self, path: impl Into<PathBuf>) -> Self {
        self.config.seed = SeedSource::File(path.into());
        self
    }

    /// Set the id strategy
    pub fn id_strategy(mut self, strategy: IdStrategy) -> Self {
        self.config.id_strategy = strategy;
        self
    }

    /// Enable or disable the GraphiQL explorer
    pub fn graphiql(mut self, enabled: bool) -> Self {
        self.config.graphiql = enabled;
        self
    }

    /// Set the maximum query depth
    pub fn depth_limit(mut self, limit: usize) -> Self {
        self.config.depth_limit = Some(limit);
        self
    }

    /// Set the maximum query complexity
    pub fn complexity_limit(mut self, limit: usize) -> Self {
        self.config.complexity_limit = Some(limit);
        self
    }

    /// Set the HTTP listen address
    pub fn listen_addr(mut self, addr: impl Into<String>) -> Self {
        self.config.listen_addr = addr.into();
        self
    }

    pub fn build(self) -> Config {
        self.config
    }
}
