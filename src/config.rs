use std::env;

use anyhow::{Context, Result};

use crate::feed::display::Theme;

/// Central configuration loaded from environment variables.
///
/// The .env file is loaded automatically at startup via dotenvy. Nothing
/// here is secret: the Lens read API is public.
pub struct Config {
    /// Lens GraphQL endpoint (defaults to https://api.lens.dev)
    pub api_url: String,
    /// Default handle for `lensfeed feed` when no flag is given
    pub handle: Option<String>,
    /// Default profile id; wins over the handle when both are set
    pub profile_id: Option<String>,
    /// Page size for the publications query
    pub feed_limit: Option<u32>,
    pub theme: Theme,
}

impl Config {
    /// Load configuration from environment variables.
    ///
    /// Every variable is optional; a malformed LENS_FEED_LIMIT or LENS_THEME
    /// is an error rather than being silently ignored.
    pub fn load() -> Result<Self> {
        let feed_limit = match non_empty("LENS_FEED_LIMIT") {
            Some(raw) => Some(
                raw.parse::<u32>()
                    .with_context(|| format!("LENS_FEED_LIMIT is not a number: {raw}"))?,
            ),
            None => None,
        };

        let theme = match non_empty("LENS_THEME") {
            Some(raw) => raw.parse().context("Invalid LENS_THEME")?,
            None => Theme::default(),
        };

        Ok(Self {
            api_url: non_empty("LENS_API_URL")
                .unwrap_or_else(|| crate::lens::client::DEFAULT_LENS_API_URL.to_string()),
            handle: non_empty("LENS_HANDLE"),
            profile_id: non_empty("LENS_PROFILE_ID"),
            feed_limit,
            theme,
        })
    }

    /// Check that some identity is configured.
    /// Call this before any operation that needs to know whose feed to load.
    pub fn require_identity(&self) -> Result<()> {
        if self.handle.is_none() && self.profile_id.is_none() {
            anyhow::bail!(
                "No profile given. Pass --handle or --profile-id, or set\n\
                 LENS_HANDLE / LENS_PROFILE_ID in your .env file."
            );
        }
        Ok(())
    }
}

fn non_empty(key: &str) -> Option<String> {
    env::var(key).ok().filter(|v| !v.trim().is_empty())
}
