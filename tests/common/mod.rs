// In-memory QueryClient shared by the integration tests.
//
// Answers the two documents the pipeline sends with canned responses and
// records every call so tests can assert on what went over the wire.

#![allow(dead_code)]

use std::collections::HashMap;
use std::sync::Mutex;
use std::time::Duration;

use async_trait::async_trait;
use serde_json::{json, Value};

use lensfeed::lens::client::{GraphQlResponse, QueryClient};
use lensfeed::lens::queries::{PROFILE_BY_HANDLE, PUBLICATIONS};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Doc {
    Profile,
    Publications,
}

#[derive(Debug, Clone)]
pub struct Call {
    pub doc: Doc,
    pub variables: Value,
}

type Responder = Box<dyn Fn(&Value) -> anyhow::Result<GraphQlResponse> + Send + Sync>;

pub struct MockClient {
    profile: Responder,
    publications: Responder,
    /// Delay before answering a publications query, keyed by profileId
    delays: HashMap<String, Duration>,
    calls: Mutex<Vec<Call>>,
}

impl MockClient {
    /// Profile lookups fail, publications come back empty.
    pub fn new() -> Self {
        Self {
            profile: Box::new(|_: &Value| -> anyhow::Result<GraphQlResponse> {
                anyhow::bail!("connection refused")
            }),
            publications: Box::new(|_: &Value| -> anyhow::Result<GraphQlResponse> {
                Ok(GraphQlResponse::from_data(json!({})))
            }),
            delays: HashMap::new(),
            calls: Mutex::new(Vec::new()),
        }
    }

    pub fn with_profile(
        mut self,
        f: impl Fn(&Value) -> anyhow::Result<GraphQlResponse> + Send + Sync + 'static,
    ) -> Self {
        self.profile = Box::new(f);
        self
    }

    pub fn with_publications(
        mut self,
        f: impl Fn(&Value) -> anyhow::Result<GraphQlResponse> + Send + Sync + 'static,
    ) -> Self {
        self.publications = Box::new(f);
        self
    }

    /// Every handle resolves to `id`.
    pub fn resolving_to(self, id: &'static str) -> Self {
        self.with_profile(move |_| Ok(GraphQlResponse::from_data(json!({"profile": {"id": id}}))))
    }

    /// Every publications query returns `items` (id, typename pairs).
    pub fn serving(self, items: &'static [(&'static str, &'static str)]) -> Self {
        self.with_publications(move |_| Ok(publications_response(items)))
    }

    pub fn with_delay(mut self, profile_id: &str, delay: Duration) -> Self {
        self.delays.insert(profile_id.to_string(), delay);
        self
    }

    pub fn calls(&self) -> Vec<Call> {
        self.calls.lock().unwrap().clone()
    }

    pub fn count(&self, doc: Doc) -> usize {
        self.calls().iter().filter(|c| c.doc == doc).count()
    }
}

#[async_trait]
impl QueryClient for MockClient {
    async fn query(&self, document: &str, variables: Value) -> anyhow::Result<GraphQlResponse> {
        let doc = if document == PROFILE_BY_HANDLE {
            Doc::Profile
        } else if document == PUBLICATIONS {
            Doc::Publications
        } else {
            anyhow::bail!("unexpected document");
        };

        self.calls.lock().unwrap().push(Call {
            doc,
            variables: variables.clone(),
        });

        match doc {
            Doc::Profile => (self.profile)(&variables),
            Doc::Publications => {
                let delay = variables["request"]["profileId"]
                    .as_str()
                    .and_then(|id| self.delays.get(id).copied());
                if let Some(delay) = delay {
                    tokio::time::sleep(delay).await;
                }
                (self.publications)(&variables)
            }
        }
    }
}

/// Build a publications response from (id, typename) pairs.
pub fn publications_response(items: &[(&str, &str)]) -> GraphQlResponse {
    let items: Vec<Value> = items
        .iter()
        .map(|(id, kind)| json!({"id": id, "__typename": kind}))
        .collect();
    let total = items.len();
    GraphQlResponse::from_data(json!({
        "publications": {
            "items": items,
            "pageInfo": {"prev": null, "next": "cursor-2", "totalCount": total}
        }
    }))
}

/// Kinds of a publication list, as strings, for compact assertions.
pub fn kinds(publications: &[lensfeed::lens::models::Publication]) -> Vec<String> {
    publications.iter().map(|p| p.kind.to_string()).collect()
}

pub fn ids(publications: &[lensfeed::lens::models::Publication]) -> Vec<String> {
    publications.iter().map(|p| p.id.to_string()).collect()
}
