use std::sync::Arc;
use std::time::Duration;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use colored::Colorize;
use indicatif::{ProgressBar, ProgressStyle};
use tracing::info;

use lensfeed::config::Config;
use lensfeed::feed::display::{DisplayConfig, Theme};
use lensfeed::feed::{Feed, FeedOptions, FeedProps};
use lensfeed::lens::client::LensClient;
use lensfeed::lens::models::{Handle, ProfileId};
use lensfeed::lens::publications::PageRequest;
use lensfeed::output::terminal;

/// lensfeed: Lens Protocol publications in your terminal.
///
/// Resolves a handle or profile id, fetches its publications (comments
/// left out), and prints them.
#[derive(Parser)]
#[command(name = "lensfeed", version, about)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Show a profile's publications
    Feed {
        /// Handle to look up (".lens" is appended if missing)
        #[arg(long)]
        handle: Option<String>,

        /// Profile id (e.g. 0x01); takes precedence over --handle
        #[arg(long)]
        profile_id: Option<String>,

        /// Page size for the publications query
        #[arg(long)]
        limit: Option<u32>,

        /// Cursor from a previous page
        #[arg(long)]
        cursor: Option<String>,

        /// Color theme (default, light, dark, mint, green, peach, lavender, blonde)
        #[arg(long)]
        theme: Option<Theme>,

        /// Hide the comment action
        #[arg(long)]
        hide_comment: bool,

        /// Hide the quote action
        #[arg(long)]
        hide_quote: bool,

        /// Hide the share action
        #[arg(long)]
        hide_share: bool,

        /// Keep comments in the fetched feed
        #[arg(long)]
        include_comments: bool,

        /// Print publications as JSON instead of the colored view
        #[arg(long)]
        json: bool,
    },

    /// Resolve a handle to its profile id
    Resolve {
        /// The handle to resolve (e.g. stani or stani.lens)
        handle: String,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    // Load .env file if present (silently ignore if missing)
    let _ = dotenvy::dotenv();

    // Set up structured logging
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("lensfeed=info")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Feed {
            handle,
            profile_id,
            limit,
            cursor,
            theme,
            hide_comment,
            hide_quote,
            hide_share,
            include_comments,
            json,
        } => {
            let mut config = Config::load()?;
            let profile_id = profile_id.filter(|v| !v.trim().is_empty());
            let handle = handle.filter(|v| !v.trim().is_empty());
            // Flags override the environment
            if profile_id.is_some() || handle.is_some() {
                config.profile_id = profile_id;
                config.handle = handle;
            }
            config.require_identity()?;

            let client = Arc::new(LensClient::new(&config.api_url)?);
            let feed = Feed::with_options(
                client,
                FeedOptions {
                    include_comments,
                    ..FeedOptions::default()
                },
            );

            let props = FeedProps {
                profile_id: config.profile_id.clone().map(ProfileId::new),
                handle: config.handle.clone(),
                page: PageRequest {
                    limit: limit.or(config.feed_limit),
                    cursor,
                },
                display: DisplayConfig {
                    theme: theme.unwrap_or(config.theme),
                    is_authenticated: false,
                    hide_comment_button: hide_comment,
                    hide_quote_button: hide_quote,
                    hide_share_button: hide_share,
                },
                ..FeedProps::default()
            };

            let title = match (&config.profile_id, &config.handle) {
                (Some(id), _) => format!("profile {id}"),
                (None, Some(h)) => format!("@{}", Handle::normalize(h)),
                (None, None) => "profile".to_string(),
            };

            let spinner = ProgressBar::new_spinner();
            spinner.set_style(
                ProgressStyle::default_spinner()
                    .template("  {spinner} {msg}")
                    .context("Invalid spinner template")?,
            );
            spinner.set_message(format!("Fetching publications for {title}..."));
            spinner.enable_steady_tick(Duration::from_millis(100));

            feed.load(&props).await;
            spinner.finish_and_clear();

            let snapshot = feed.snapshot();
            info!(
                count = snapshot.publications.len(),
                failed = snapshot.status.is_failed(),
                "Feed loaded"
            );

            if json {
                println!("{}", serde_json::to_string_pretty(&snapshot.publications)?);
            } else {
                let items = feed.render(&props);
                terminal::display_feed(&title, &items);
                terminal::display_status(&snapshot.status, snapshot.page_info.as_ref());
            }
        }

        Commands::Resolve { handle } => {
            let config = Config::load()?;
            let client = LensClient::new(&config.api_url)?;
            let handle = Handle::normalize(&handle);

            let id = lensfeed::lens::resolve::lookup_profile(&client, &handle)
                .await
                .with_context(|| format!("Could not resolve @{handle}"))?;

            println!("{} {}", format!("@{handle}").bold(), id);
        }
    }

    Ok(())
}
