// Colored terminal output for feeds.
//
// This is the CLI's item renderer: each `RenderedItem` becomes a short block
// with a kind tag, author, timestamp, body preview, counters, and the action
// row (minus whatever the display flags hide).

use colored::{Color, Colorize};

use crate::feed::display::Theme;
use crate::feed::policy::InteractionEvent;
use crate::feed::render::RenderedItem;
use crate::feed::FeedStatus;
use crate::lens::models::{PageInfo, PublicationKind};

/// Display a rendered feed in the terminal.
pub fn display_feed(title: &str, items: &[RenderedItem]) {
    if items.is_empty() {
        println!("No publications to show for {title}.");
        return;
    }

    println!(
        "\n{}",
        format!("=== {} ({} publications) ===", title, items.len()).bold()
    );
    println!();

    for item in items {
        display_item(item);
    }
}

/// Display a single rendered publication.
pub fn display_item(item: &RenderedItem) {
    let accent = accent_color(item.display.theme);
    let publication = &item.publication;

    let author = publication
        .profile
        .as_ref()
        .map(|p| p.handle.clone().unwrap_or_else(|| p.id.to_string()))
        .unwrap_or_else(|| "unknown".to_string());
    let when = publication
        .created_at
        .as_deref()
        .map(super::format_timestamp)
        .unwrap_or_default();

    println!(
        "  {} @{}  {}",
        colorize_kind(&publication.kind),
        author.color(accent).bold(),
        when.dimmed()
    );
    println!("  {}", format!("id {}", item.key).dimmed());

    if let Some(text) = publication.content() {
        let preview = super::truncate_chars(text.trim(), 280);
        for line in preview.lines() {
            println!("    {line}");
        }
    }

    if let Some(stats) = &publication.stats {
        println!(
            "    {}",
            format!(
                "{} upvotes  {} mirrors  {} comments  {} collects",
                stats.total_upvotes,
                stats.total_amount_of_mirrors,
                stats.total_amount_of_comments,
                stats.total_amount_of_collects
            )
            .dimmed()
        );
    }

    println!("    {}", action_row(item).join("  "));
    println!();
}

/// Print the outcome of a feed load when it was not clean.
pub fn display_status(status: &FeedStatus, page_info: Option<&PageInfo>) {
    if let FeedStatus::Failed(e) = status {
        println!("  {} {}", "!".red().bold(), e.to_string().red());
    }
    if let Some(next) = page_info.and_then(|p| p.next.as_deref()) {
        println!("  {}", format!("More available, next cursor: {next}").dimmed());
    }
}

/// Labels for the actions an item shows, marked when already performed.
fn action_row(item: &RenderedItem) -> Vec<String> {
    let ops = item.operations.as_ref();
    item.visible_actions()
        .into_iter()
        .map(|action| {
            let done = match action {
                InteractionEvent::Like => ops.is_some_and(|o| o.has_upvoted),
                InteractionEvent::Share => ops.is_some_and(|o| o.has_mirrored),
                InteractionEvent::Comment | InteractionEvent::Quote => false,
            };
            let label = format!("[{action}]");
            if done {
                label.green().to_string()
            } else if item.on_interaction.is_none() || !item.display.is_authenticated {
                label.dimmed().to_string()
            } else {
                label
            }
        })
        .collect()
}

/// Colorize a publication kind tag.
fn colorize_kind(kind: &PublicationKind) -> colored::ColoredString {
    let tag = format!("{:<7}", kind.as_str());
    match kind {
        PublicationKind::Post => tag.cyan(),
        PublicationKind::Mirror => tag.magenta(),
        PublicationKind::Comment => tag.yellow(),
        PublicationKind::Other(_) => tag.dimmed(),
    }
}

fn accent_color(theme: Theme) -> Color {
    match theme {
        Theme::Default | Theme::Light => Color::Blue,
        Theme::Dark => Color::BrightWhite,
        Theme::Mint => Color::BrightCyan,
        Theme::Green => Color::Green,
        Theme::Peach => Color::BrightRed,
        Theme::Lavender => Color::BrightMagenta,
        Theme::Blonde => Color::Yellow,
    }
}
