// Data models — Rust structs that map to Lens GraphQL payloads.
//
// These are the types that flow through the feed pipeline. They're separate
// from the client so the rendering side can use them without depending on
// reqwest directly. Every field the API may omit is optional, and anything
// not modelled here is kept in `extra` so nothing is lost on the way to the
// renderer.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Suffix every Lens handle carries.
pub const HANDLE_SUFFIX: &str = ".lens";

/// Opaque profile identifier in the Lens social graph (e.g. `0x01`).
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ProfileId(pub String);

impl ProfileId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ProfileId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Opaque publication identifier (e.g. `0x01-0x2a`).
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct PublicationId(pub String);

impl PublicationId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for PublicationId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// A human-readable handle, always in its normalized `<name>.lens` form.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Handle(String);

impl Handle {
    /// Normalize a raw handle by appending `.lens` unless it already has it.
    ///
    /// The check is a substring match, so `alice.lens` and `alice.lens.test`
    /// are both left alone.
    pub fn normalize(raw: &str) -> Self {
        let raw = raw.trim();
        if raw.contains(HANDLE_SUFFIX) {
            Self(raw.to_string())
        } else {
            Self(format!("{raw}{HANDLE_SUFFIX}"))
        }
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Handle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// The GraphQL `__typename` discriminant of a publication.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum PublicationKind {
    Post,
    Comment,
    Mirror,
    /// Any typename this crate doesn't know about. Passed through untouched.
    Other(String),
}

impl PublicationKind {
    pub fn as_str(&self) -> &str {
        match self {
            PublicationKind::Post => "Post",
            PublicationKind::Comment => "Comment",
            PublicationKind::Mirror => "Mirror",
            PublicationKind::Other(name) => name,
        }
    }
}

impl From<String> for PublicationKind {
    fn from(name: String) -> Self {
        match name.as_str() {
            "Post" => PublicationKind::Post,
            "Comment" => PublicationKind::Comment,
            "Mirror" => PublicationKind::Mirror,
            _ => PublicationKind::Other(name),
        }
    }
}

impl From<PublicationKind> for String {
    fn from(kind: PublicationKind) -> Self {
        kind.as_str().to_string()
    }
}

impl fmt::Display for PublicationKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A single publication as returned by the `publications` query.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Publication {
    pub id: PublicationId,
    #[serde(rename = "__typename")]
    pub kind: PublicationKind,
    #[serde(default)]
    pub created_at: Option<String>,
    /// Author of the publication
    #[serde(default)]
    pub profile: Option<ProfileSummary>,
    #[serde(default)]
    pub metadata: Option<PublicationMetadata>,
    #[serde(default)]
    pub stats: Option<PublicationStats>,
    /// Everything else the API returned (mirrorOf, commentOn, media, ...)
    #[serde(flatten)]
    pub extra: serde_json::Map<String, serde_json::Value>,
}

impl Publication {
    /// Build a bare publication with just an id and a kind.
    pub fn new(id: impl Into<String>, kind: PublicationKind) -> Self {
        Self {
            id: PublicationId::new(id),
            kind,
            created_at: None,
            profile: None,
            metadata: None,
            stats: None,
            extra: serde_json::Map::new(),
        }
    }

    pub fn is_comment(&self) -> bool {
        self.kind == PublicationKind::Comment
    }

    /// The text body, if the metadata carries one.
    pub fn content(&self) -> Option<&str> {
        self.metadata.as_ref().and_then(|m| m.content.as_deref())
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProfileSummary {
    pub id: ProfileId,
    #[serde(default)]
    pub handle: Option<String>,
    #[serde(default)]
    pub name: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PublicationMetadata {
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub content: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PublicationStats {
    #[serde(default)]
    pub total_upvotes: u64,
    #[serde(default)]
    pub total_amount_of_mirrors: u64,
    #[serde(default)]
    pub total_amount_of_comments: u64,
    #[serde(default)]
    pub total_amount_of_collects: u64,
}

/// Pagination cursors returned next to a page of publications.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PageInfo {
    #[serde(default)]
    pub prev: Option<String>,
    #[serde(default)]
    pub next: Option<String>,
    #[serde(default)]
    pub total_count: Option<u64>,
}

/// Per-publication, per-viewer interaction state.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Operations {
    #[serde(default)]
    pub has_upvoted: bool,
    #[serde(default)]
    pub has_mirrored: bool,
    #[serde(default)]
    pub has_collected: bool,
    #[serde(default)]
    pub can_comment: bool,
    #[serde(default)]
    pub can_mirror: bool,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn handle_gets_suffix() {
        assert_eq!(Handle::normalize("alice").as_str(), "alice.lens");
    }

    #[test]
    fn handle_with_suffix_is_unchanged() {
        assert_eq!(Handle::normalize("alice.lens").as_str(), "alice.lens");
    }

    #[test]
    fn handle_is_trimmed() {
        assert_eq!(Handle::normalize("  bob ").as_str(), "bob.lens");
    }

    #[test]
    fn unknown_typename_is_preserved() {
        let kind = PublicationKind::from("Quote".to_string());
        assert_eq!(kind, PublicationKind::Other("Quote".to_string()));
        assert_eq!(String::from(kind), "Quote");
    }

    #[test]
    fn publication_keeps_unmodelled_fields() {
        let json = r#"{
            "id": "0x01-0x02",
            "__typename": "Mirror",
            "mirrorOf": {"id": "0x05-0x01"},
            "metadata": {"content": "gm"}
        }"#;
        let publication: Publication = serde_json::from_str(json).unwrap();
        assert_eq!(publication.kind, PublicationKind::Mirror);
        assert_eq!(publication.content(), Some("gm"));
        assert!(publication.extra.contains_key("mirrorOf"));
        assert!(publication.profile.is_none());
    }
}
