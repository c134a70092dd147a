// Display flags shared by every item in a feed.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// Visual theme tag. The feed never interprets it; renderers do.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Theme {
    #[default]
    Default,
    Light,
    Dark,
    Mint,
    Green,
    Peach,
    Lavender,
    Blonde,
}

impl Theme {
    pub const ALL: [Theme; 8] = [
        Theme::Default,
        Theme::Light,
        Theme::Dark,
        Theme::Mint,
        Theme::Green,
        Theme::Peach,
        Theme::Lavender,
        Theme::Blonde,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Theme::Default => "default",
            Theme::Light => "light",
            Theme::Dark => "dark",
            Theme::Mint => "mint",
            Theme::Green => "green",
            Theme::Peach => "peach",
            Theme::Lavender => "lavender",
            Theme::Blonde => "blonde",
        }
    }
}

impl fmt::Display for Theme {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Theme {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim().to_ascii_lowercase();
        Theme::ALL
            .into_iter()
            .find(|t| t.as_str() == s)
            .ok_or_else(|| anyhow::anyhow!("unknown theme: {s}"))
    }
}

/// Flags passed through unchanged to every rendered item.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DisplayConfig {
    pub theme: Theme,
    pub is_authenticated: bool,
    pub hide_comment_button: bool,
    pub hide_quote_button: bool,
    pub hide_share_button: bool,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn theme_parses_case_insensitively() {
        assert_eq!("Dark".parse::<Theme>().unwrap(), Theme::Dark);
        assert_eq!(" mint ".parse::<Theme>().unwrap(), Theme::Mint);
    }

    #[test]
    fn unknown_theme_is_rejected() {
        assert!("neon".parse::<Theme>().is_err());
    }

    #[test]
    fn default_display_shows_everything() {
        let display = DisplayConfig::default();
        assert_eq!(display.theme, Theme::Default);
        assert!(!display.is_authenticated);
        assert!(!display.hide_comment_button);
        assert!(!display.hide_quote_button);
        assert!(!display.hide_share_button);
    }
}
