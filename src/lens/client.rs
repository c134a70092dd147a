// Lens GraphQL client — unauthenticated queries over HTTP POST.
//
// Every read the feed needs (profile lookup, publications) is a public
// GraphQL query, so no auth header is sent. The pipeline talks to the
// `QueryClient` trait rather than this struct, which lets tests swap in an
// in-memory client.

use anyhow::{Context, Result};
use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use tracing::debug;

/// Default public endpoint for the Lens API.
pub const DEFAULT_LENS_API_URL: &str = "https://api.lens.dev";

/// A GraphQL response envelope. Both halves may be missing.
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct GraphQlResponse {
    #[serde(default)]
    pub data: Option<Value>,
    #[serde(default)]
    pub errors: Option<Vec<GraphQlError>>,
}

impl GraphQlResponse {
    /// Wrap a `data` payload with no errors.
    pub fn from_data(data: Value) -> Self {
        Self {
            data: Some(data),
            errors: None,
        }
    }

    /// Join all error messages into one line, if there are any.
    pub fn error_message(&self) -> Option<String> {
        let errors = self.errors.as_ref().filter(|e| !e.is_empty())?;
        Some(
            errors
                .iter()
                .map(|e| e.message.as_str())
                .collect::<Vec<_>>()
                .join("; "),
        )
    }
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct GraphQlError {
    pub message: String,
}

/// Anything that can execute a GraphQL document with variables.
///
/// `document` is the full query text and `variables` a JSON object. A
/// transport failure is an `Err`; GraphQL-level errors come back inside the
/// response so the caller decides how to treat them.
#[async_trait]
pub trait QueryClient: Send + Sync {
    async fn query(&self, document: &str, variables: Value) -> Result<GraphQlResponse>;
}

#[derive(Serialize)]
struct GraphQlRequest<'a> {
    query: &'a str,
    variables: Value,
}

/// HTTP client for the Lens GraphQL endpoint.
pub struct LensClient {
    client: reqwest::Client,
    endpoint: String,
}

impl LensClient {
    /// Create a new client pointing at the given API base URL.
    ///
    /// Queries are POSTed to the URL as-is (the Lens API serves GraphQL at
    /// its root); a trailing slash is dropped.
    pub fn new(api_url: &str) -> Result<Self> {
        let client = reqwest::Client::builder()
            .user_agent("lensfeed/0.1")
            .build()
            .context("Failed to build HTTP client")?;

        Ok(Self {
            client,
            endpoint: api_url.trim_end_matches('/').to_string(),
        })
    }

    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }
}

#[async_trait]
impl QueryClient for LensClient {
    async fn query(&self, document: &str, variables: Value) -> Result<GraphQlResponse> {
        debug!(endpoint = %self.endpoint, "GraphQL POST request");

        let response = self
            .client
            .post(&self.endpoint)
            .json(&GraphQlRequest {
                query: document,
                variables,
            })
            .send()
            .await
            .context("Lens API request failed")?;

        if !response.status().is_success() {
            let status = response.status();
            let body = response.text().await.unwrap_or_default();
            anyhow::bail!("Lens API returned {}: {}", status, body);
        }

        response
            .json::<GraphQlResponse>()
            .await
            .context("Failed to parse Lens API response")
    }
}
