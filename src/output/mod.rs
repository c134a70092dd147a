// Output formatting — terminal display of rendered feeds.

pub mod terminal;

/// Truncate a string to at most `max_chars` characters, appending "..." if truncated.
///
/// Unlike byte slicing (`&text[..120]`), this respects UTF-8 character boundaries
/// and will never panic on multi-byte characters like emoji or accented letters.
pub fn truncate_chars(text: &str, max_chars: usize) -> String {
    let char_count = text.chars().count();
    if char_count <= max_chars {
        text.to_string()
    } else {
        let truncated: String = text.chars().take(max_chars).collect();
        format!("{truncated}...")
    }
}

/// Format an RFC 3339 timestamp as `YYYY-MM-DD HH:MM UTC`.
///
/// Unparseable input is returned unchanged.
pub fn format_timestamp(raw: &str) -> String {
    match chrono::DateTime::parse_from_rfc3339(raw) {
        Ok(ts) => ts
            .with_timezone(&chrono::Utc)
            .format("%Y-%m-%d %H:%M UTC")
            .to_string(),
        Err(_) => raw.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn truncate_respects_char_boundaries() {
        assert_eq!(truncate_chars("héllo wörld", 5), "héllo...");
        assert_eq!(truncate_chars("short", 10), "short");
    }

    #[test]
    fn timestamp_is_normalized_to_utc() {
        assert_eq!(
            format_timestamp("2023-02-01T12:30:00.000+02:00"),
            "2023-02-01 10:30 UTC"
        );
    }

    #[test]
    fn bad_timestamp_passes_through() {
        assert_eq!(format_timestamp("yesterday"), "yesterday");
    }
}
