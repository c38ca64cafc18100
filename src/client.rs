//! GraphQL client
//!
//! Minimal HTTP client used by `gamegraph-cli` to talk to a running server.

use serde_json::{json, Value};

use crate::error::{GameGraphError, Result};

// =============================================================================
// Documents
// =============================================================================

const GAME_FIELDS: &str = "id title platform";
const AUTHOR_FIELDS: &str = "id name verified";
const REVIEW_FIELDS: &str = "id rating content author { id name } game { id title }";

/// HTTP client for a gamegraph server
pub struct Client {
    endpoint: String,
    http: reqwest::Client,
}

impl Client {
    /// Create a client for `server` (`host:port` or a full URL)
    pub fn new(server: &str) -> Self {
        let endpoint = if server.starts_with("http://") || server.starts_with("https://") {
            server.to_string()
        } else {
            format!("http://{}/graphql", server)
        };

        Self {
            endpoint,
            http: reqwest::Client::new(),
        }
    }

    /// The URL requests are posted to
    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }

    /// Execute a raw document and return its `data` object
    ///
    /// Fails with [`GameGraphError::Graphql`] when the response carries
    /// an `errors` array.
    pub async fn execute(&self, query: &str, variables: Value) -> Result<Value> {
        let body = json!({ "query": query, "variables": variables });

        let response: Value = self
            .http
            .post(&self.endpoint)
            .json(&body)
            .send()
            .await?
            .error_for_status()?
            .json()
            .await?;

        if let Some(errors) = response.get("errors").and_then(Value::as_array) {
            if !errors.is_empty() {
                let messages: Vec<&str> = errors
                    .iter()
                    .filter_map(|e| e.get("message").and_then(Value::as_str))
                    .collect();
                return Err(GameGraphError::Graphql(messages.join("; ")));
            }
        }

        Ok(response.get("data").cloned().unwrap_or(Value::Null))
    }

    // =========================================================================
    // Queries
    // =========================================================================

    pub async fn games(&self) -> Result<Value> {
        let query = format!("query {{ games {{ {} }} }}", GAME_FIELDS);
        self.execute(&query, Value::Null).await
    }

    /// A game with its reviews
    pub async fn game(&self, id: &str) -> Result<Value> {
        let query = format!(
            "query Game($id: ID!) {{ game(id: $id) {{ {} reviews {{ id rating content }} }} }}",
            GAME_FIELDS
        );
        self.execute(&query, json!({ "id": id })).await
    }

    pub async fn authors(&self) -> Result<Value> {
        let query = format!("query {{ authors {{ {} }} }}", AUTHOR_FIELDS);
        self.execute(&query, Value::Null).await
    }

    /// An author with their reviews
    pub async fn author(&self, id: &str) -> Result<Value> {
        let query = format!(
            "query Author($id: ID!) {{ author(id: $id) {{ {} reviews {{ id rating content }} }} }}",
            AUTHOR_FIELDS
        );
        self.execute(&query, json!({ "id": id })).await
    }

    pub async fn reviews(&self) -> Result<Value> {
        let query = format!("query {{ reviews {{ {} }} }}", REVIEW_FIELDS);
        self.execute(&query, Value::Null).await
    }

    pub async fn review(&self, id: &str) -> Result<Value> {
        let query = format!(
            "query Review($id: ID!) {{ review(id: $id) {{ {} }} }}",
            REVIEW_FIELDS
        );
        self.execute(&query, json!({ "id": id })).await
    }

    // =========================================================================
    // Mutations
    // =========================================================================

    pub async fn add_game(&self, title: &str, platform: &[String]) -> Result<Value> {
        let query = format!(
            "mutation AddGame($game: GameInput!) {{ addGame(game: $game) {{ {} }} }}",
            GAME_FIELDS
        );
        let variables = json!({ "game": { "title": title, "platform": platform } });
        self.execute(&query, variables).await
    }

    /// Only the supplied fields are sent, so the rest are preserved
    pub async fn update_game(
        &self,
        id: &str,
        title: Option<&str>,
        platform: Option<&[String]>,
    ) -> Result<Value> {
        let query = format!(
            "mutation UpdateGame($id: ID!, $edits: GameEditsInput!) {{ updateGame(id: $id, edits: $edits) {{ {} }} }}",
            GAME_FIELDS
        );

        let mut edits = serde_json::Map::new();
        if let Some(title) = title {
            edits.insert("title".to_string(), json!(title));
        }
        if let Some(platform) = platform {
            edits.insert("platform".to_string(), json!(platform));
        }

        self.execute(&query, json!({ "id": id, "edits": edits }))
            .await
    }

    pub async fn delete_game(&self, id: &str) -> Result<Value> {
        let query = format!(
            "mutation DeleteGame($id: ID!) {{ deleteGame(id: $id) {{ {} }} }}",
            GAME_FIELDS
        );
        self.execute(&query, json!({ "id": id })).await
    }
}
