//! Error types for the feed pipeline.
//!
//! Transport failures inside [`crate::lens::client`] stay as `anyhow` errors
//! with context. They are folded into these variants at the pipeline
//! boundary, so a feed can report *which* step failed without any caller
//! having to downcast.

use thiserror::Error;

/// Turning a handle into a profile id failed.
#[derive(Debug, Clone, Error)]
pub enum ResolutionError {
    /// The profile lookup request itself failed (network, HTTP status, JSON).
    #[error("profile lookup for {handle} failed: {reason}")]
    Request { handle: String, reason: String },

    /// The API answered with GraphQL errors.
    #[error("profile lookup for {handle} returned errors: {message}")]
    GraphQl { handle: String, message: String },

    /// The response had no `profile` (or no `data` at all).
    #[error("no profile found for {handle}")]
    NotFound { handle: String },

    /// `data` was present but did not have the expected shape.
    #[error("malformed profile response for {handle}: {reason}")]
    Malformed { handle: String, reason: String },
}

/// Fetching the publications page failed.
#[derive(Debug, Clone, Error)]
pub enum FetchError {
    /// The publications request itself failed (network, HTTP status, JSON).
    #[error("publications request failed: {0}")]
    Request(String),

    /// The API answered with GraphQL errors.
    #[error("publications query returned errors: {0}")]
    GraphQl(String),

    /// `data` was present but did not have the expected shape.
    #[error("malformed publications response: {0}")]
    Malformed(String),
}

/// Any failure a feed load can record.
#[derive(Debug, Clone, Error)]
pub enum FeedError {
    #[error(transparent)]
    Resolution(#[from] ResolutionError),

    #[error(transparent)]
    Fetch(#[from] FetchError),
}
