//! gamegraph CLI Client
//!
//! Command-line interface for interacting with a gamegraph server.

use clap::{Parser, Subcommand};
use gamegraph::client::Client;
use gamegraph::Result;
use serde_json::Value;
use tracing_subscriber::{fmt, EnvFilter};

/// gamegraph CLI
#[derive(Parser, Debug)]
#[command(name = "gamegraph-cli")]
#[command(about = "CLI for the gamegraph GraphQL API")]
#[command(version)]
struct Args {
    /// Server address (host:port or full URL)
    #[arg(short, long, default_value = "127.0.0.1:4000", env = "GAMEGRAPH_SERVER")]
    server: String,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// List all games
    Games,

    /// Show a game and its reviews
    Game {
        /// The game id
        id: String,
    },

    /// List all authors
    Authors,

    /// Show an author and their reviews
    Author {
        /// The author id
        id: String,
    },

    /// List all reviews
    Reviews,

    /// Show a review with its author and game
    Review {
        /// The review id
        id: String,
    },

    /// Add a game
    AddGame {
        /// Game title
        title: String,

        /// Platform tags (repeatable)
        #[arg(short, long = "platform")]
        platforms: Vec<String>,
    },

    /// Update a game; omitted fields are kept
    UpdateGame {
        /// The game id
        id: String,

        /// New title
        #[arg(short, long)]
        title: Option<String>,

        /// New platform tags (repeatable, replaces the whole list)
        #[arg(short, long = "platform")]
        platforms: Vec<String>,

        /// Set the platform list to empty
        #[arg(long, conflicts_with = "platforms")]
        clear_platform: bool,
    },

    /// Delete a game and print the remaining games
    DeleteGame {
        /// The game id
        id: String,
    },

    /// Run a raw GraphQL document
    Query {
        /// The GraphQL document
        document: String,

        /// Variables as a JSON object
        #[arg(short, long)]
        variables: Option<String>,
    },
}

#[tokio::main]
async fn main() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    fmt().with_env_filter(filter).with_writer(std::io::stderr).init();

    let args = Args::parse();
    let client = Client::new(&args.server);
    tracing::debug!("Using endpoint {}", client.endpoint());

    match run(&client, args.command).await {
        Ok(data) => match serde_json::to_string_pretty(&data) {
            Ok(text) => println!("{}", text),
            Err(e) => {
                tracing::error!("Failed to render response: {}", e);
                std::process::exit(1);
            }
        },
        Err(e) => {
            tracing::error!("{}", e);
            std::process::exit(1);
        }
    }
}

async fn run(client: &Client, command: Commands) -> Result<Value> {
    match command {
        Commands::Games => client.games().await,
        Commands::Game { id } => client.game(&id).await,
        Commands::Authors => client.authors().await,
        Commands::Author { id } => client.author(&id).await,
        Commands::Reviews => client.reviews().await,
        Commands::Review { id } => client.review(&id).await,
        Commands::AddGame { title, platforms } => client.add_game(&title, &platforms).await,
        Commands::UpdateGame {
            id,
            title,
            platforms,
            clear_platform,
        } => {
            let platforms = (clear_platform || !platforms.is_empty()).then_some(platforms.as_slice());
            client.update_game(&id, title.as_deref(), platforms).await
        }
        Commands::DeleteGame { id } => client.delete_game(&id).await,
        Commands::Query {
            document,
            variables,
        } => {
            let variables = match variables {
                Some(raw) => serde_json::from_str(&raw)?,
                None => Value::Null,
            };
            client.execute(&document, variables).await
        }
    }
}
