//! HTTP Server
//!
//! Binds the listen address and serves the GraphQL router until shutdown.

use std::sync::Arc;

use axum::routing::get;
use axum::Router;
use tokio::net::TcpListener;
use tokio::sync::watch;
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;

use crate::config::Config;
use crate::error::Result;
use crate::graphql::{build_schema_with_config, GameSchema};
use crate::store::DataStore;

use super::handlers::{graphiql, graphql_handler, health_check, AppState, GRAPHQL_PATH};

/// HTTP server for gamegraph
pub struct Server {
    config: Config,
    store: Arc<DataStore>,
    schema: GameSchema,
    shutdown: watch::Sender<bool>,
}

impl Server {
    /// Create a new server with the given config and store
    pub fn new(config: Config, store: Arc<DataStore>) -> Self {
        let schema = build_schema_with_config(Arc::clone(&store), &config);
        let (shutdown, _) = watch::channel(false);

        Self {
            config,
            store,
            schema,
            shutdown,
        }
    }

    /// Build the router
    ///
    /// - `GET  /` and `GET  /graphql`: GraphiQL explorer
    /// - `POST /` and `POST /graphql`: GraphQL execution
    /// - `GET  /health`: liveness probe
    pub fn router(&self) -> Router {
        let state = Arc::new(AppState {
            schema: self.schema.clone(),
            graphiql: self.config.graphiql,
        });

        Router::new()
            .route("/", get(graphiql).post(graphql_handler))
            .route(GRAPHQL_PATH, get(graphiql).post(graphql_handler))
            .route("/health", get(health_check))
            .layer(CorsLayer::permissive())
            .layer(TraceLayer::new_for_http())
            .with_state(state)
    }

    /// Bind the configured address and serve (until shutdown)
    pub async fn run(&self) -> Result<()> {
        let addr = self.config.socket_addr()?;
        let listener = TcpListener::bind(addr).await?;
        self.serve(listener).await
    }

    /// Serve on an already bound listener (until shutdown)
    pub async fn serve(&self, listener: TcpListener) -> Result<()> {
        let local_addr = listener.local_addr()?;
        tracing::info!(
            "Serving GraphQL at http://{}{} ({} games, {} authors, {} reviews)",
            local_addr,
            GRAPHQL_PATH,
            self.store.game_count(),
            self.store.author_count(),
            self.store.review_count()
        );

        let mut stop = self.shutdown.subscribe();
        axum::serve(listener, self.router())
            .with_graceful_shutdown(async move {
                // Sender lives as long as the server; an error means it is gone
                let _ = stop.wait_for(|stopped| *stopped).await;
            })
            .await?;

        tracing::info!("Server on {} stopped", local_addr);
        Ok(())
    }

    /// Signal the server to shutdown gracefully
    pub fn shutdown(&self) {
        self.shutdown.send_replace(true);
    }

    /// The store behind the schema
    pub fn store(&self) -> &Arc<DataStore> {
        &self.store
    }
}
