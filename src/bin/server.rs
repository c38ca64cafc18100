//! gamegraph Server Binary
//!
//! Starts the GraphQL HTTP server.

use std::path::PathBuf;
use std::sync::Arc;

use clap::Parser;
use gamegraph::config::{IdStrategy, SeedSource};
use gamegraph::network::Server;
use gamegraph::{Config, DataStore};
use tracing_subscriber::{fmt, EnvFilter};

/// gamegraph Server
#[derive(Parser, Debug)]
#[command(name = "gamegraph-server")]
#[command(about = "GraphQL API over an in-memory catalogue of games, authors and reviews")]
#[command(version)]
struct Args {
    /// Listen address (host:port)
    #[arg(short, long, default_value = "127.0.0.1:4000", env = "GAMEGRAPH_LISTEN")]
    listen: String,

    /// JSON seed file (defaults to the built-in dataset)
    #[arg(short, long, env = "GAMEGRAPH_SEED_FILE", conflicts_with = "empty")]
    seed_file: Option<PathBuf>,

    /// Start with empty collections
    #[arg(long)]
    empty: bool,

    /// Id strategy for added games: sequential or uuid
    #[arg(long, default_value = "sequential", env = "GAMEGRAPH_ID_STRATEGY")]
    id_strategy: IdStrategy,

    /// Do not serve the GraphiQL explorer
    #[arg(long)]
    no_graphiql: bool,

    /// Maximum query depth
    #[arg(long, env = "GAMEGRAPH_DEPTH_LIMIT")]
    depth_limit: Option<usize>,

    /// Maximum query complexity
    #[arg(long, env = "GAMEGRAPH_COMPLEXITY_LIMIT")]
    complexity_limit: Option<usize>,
}

#[tokio::main]
async fn main() {
    // Initialize tracing/logging
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("info,gamegraph=debug,tower_http=debug"));

    fmt()
        .with_env_filter(filter)
        .with_target(true)
        .with_thread_ids(true)
        .init();

    let args = Args::parse();

    tracing::info!("gamegraph Server v{}", gamegraph::VERSION);
    tracing::info!("Listen address: {}", args.listen);

    let config = build_config(&args);

    let store = match DataStore::open(&config) {
        Ok(store) => Arc::new(store),
        Err(e) => {
            tracing::error!("Failed to load seed data: {}", e);
            std::process::exit(1);
        }
    };

    tracing::info!(
        "Store initialized: {} games, {} authors, {} reviews (ids: {:?})",
        store.game_count(),
        store.author_count(),
        store.review_count(),
        store.id_strategy()
    );

    let server = Arc::new(Server::new(config, store));

    // Ctrl+C triggers a graceful shutdown
    let signal_server = Arc::clone(&server);
    tokio::spawn(async move {
        if tokio::signal::ctrl_c().await.is_ok() {
            tracing::info!("Received Ctrl+C, initiating shutdown...");
            signal_server.shutdown();
        }
    });

    if let Err(e) = server.run().await {
        tracing::error!("Server error: {}", e);
        std::process::exit(1);
    }

    tracing::info!("Server stopped");
}

fn build_config(args: &Args) -> Config {
    let seed = match (&args.seed_file, args.empty) {
        (Some(path), _) => SeedSource::File(path.clone()),
        (None, true) => SeedSource::Empty,
        (None, false) => SeedSource::Builtin,
    };

    let mut builder = Config::builder()
        .listen_addr(&args.listen)
        .seed(seed)
        .id_strategy(args.id_strategy)
        .graphiql(!args.no_graphiql);

    if let Some(depth) = args.depth_limit {
        builder = builder.depth_limit(depth);
    }
    if let Some(complexity) = args.complexity_limit {
        builder = builder.complexity_limit(complexity);
    }

    builder.build()
}
