//! Shared formatting utilities for the dashboard panels.

use chrono::{DateTime, Utc};

/// Format a timestamp as "Jan 20, 2026 9:35 PM" (UTC).
pub fn format_datetime_human(at: &DateTime<Utc>) -> String {
    at.format("%b %-d, %Y %-I:%M %p").to_string()
}

/// Convert a snake_case key to Title Case (e.g. "profile_updated" → "Profile Updated").
pub fn format_snake_case_title(s: &str) -> String {
    s.split('_')
        .filter(|word| !word.is_empty())
        .map(|word| {
            let mut chars = word.chars();
            match chars.next() {
                None => String::new(),
                Some(c) => c.to_uppercase().to_string() + chars.as_str(),
            }
        })
        .collect::<Vec<_>>()
        .join(" ")
}
