use chrono::{DateTime, Local, Utc};

/// Format a timestamp as a human-readable relative time string.
pub fn relative_time(dt: &DateTime<Utc>) -> String {
    let now = Utc::now();
    let duration = now.signed_duration_since(dt);

    if duration.num_seconds() < 0 {
        return "just now".to_string();
    }

    let seconds = duration.num_seconds();
    if seconds < 60 {
        return "just now".to_string();
    }

    let minutes = duration.num_minutes();
    if minutes < 60 {
        return format!("{}m ago", minutes);
    }

    let hours = duration.num_hours();
    if hours < 24 {
        return format!("{}h ago", hours);
    }

    let days = duration.num_days();
    if days < 30 {
        return format!("{}d ago", days);
    }

    if days < 365 {
        let months = days / 30;
        return format!("{}mo ago", months);
    }

    let years = days / 365;
    format!("{}y ago", years)
}

/// Format an activity timestamp like `Aug 3, 2025, 10:22 AM` in local time.
///
/// Values that are not RFC 3339 are returned unchanged.
pub fn format_activity_date(value: &str) -> String {
    match DateTime::parse_from_rfc3339(value) {
        Ok(dt) => dt
            .with_timezone(&Local)
            .format("%b %-d, %Y, %I:%M %p")
            .to_string(),
        Err(_) => value.to_string(),
    }
}

/// Shorten `text` to at most `max` characters, marking the cut with `...`.
pub fn truncate(text: &str, max: usize) -> String {
    if text.chars().count() > max {
        let head: String = text.chars().take(max).collect();
        format!("{}...", head)
    } else {
        text.to_string()
    }
}
