//! HTTP handlers
//!
//! Thin adapters between axum and the GraphQL schema.

use std::sync::Arc;

use async_graphql::http::GraphiQLSource;
use async_graphql_axum::{GraphQLRequest, GraphQLResponse};
use axum::extract::State;
use axum::http::StatusCode;
use axum::response::{Html, IntoResponse, Response};
use axum::Json;
use serde_json::json;

use crate::graphql::GameSchema;

/// Endpoint advertised to the GraphiQL explorer
pub const GRAPHQL_PATH: &str = "/graphql";

/// Shared handler state
pub struct AppState {
    pub schema: GameSchema,
    pub graphiql: bool,
}

/// Execute a GraphQL request
///
/// Engine errors (syntax, validation, limits) come back in the
/// response's `errors` array with status 200.
pub async fn graphql_handler(
    State(state): State<Arc<AppState>>,
    request: GraphQLRequest,
) -> GraphQLResponse {
    let request = request.into_inner();
    tracing::trace!("GraphQL operation: {:?}", request.operation_name);
    state.schema.execute(request).await.into()
}

/// Serve the GraphiQL explorer, or 404 when it is disabled
pub async fn graphiql(State(state): State<Arc<AppState>>) -> Response {
    if !state.graphiql {
        return StatusCode::NOT_FOUND.into_response();
    }
    Html(GraphiQLSource::build().endpoint(GRAPHQL_PATH).finish()).into_response()
}

/// Liveness probe
pub async fn health_check() -> Json<serde_json::Value> {
    Json(json!({
        "status": "ok",
        "version": crate::VERSION,
    }))
}
