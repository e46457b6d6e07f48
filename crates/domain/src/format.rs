//! Display helpers for counts, durations and relative times.

use chrono::{DateTime, Utc};

/// Abbreviates a count: `1.5K`, `2.0M`, or the plain number below 1000.
#[must_use]
#[allow(clippy::cast_precision_loss)]
pub fn format_count(count: u64) -> String {
    if count >= 1_000_000 {
        format!("{:.1}M", count as f64 / 1_000_000.0)
    } else if count >= 1_000 {
        format!("{:.1}K", count as f64 / 1_000.0)
    } else {
        count.to_string()
    }
}

/// Formats a video length as `M:SS`, or `H:MM:SS` from one hour up.
#[must_use]
pub fn format_duration(seconds: Option<u64>) -> String {
    let Some(total) = seconds.filter(|s| *s > 0) else {
        return "0:00".to_string();
    };
    let hours = total / 3600;
    let minutes = (total % 3600) / 60;
    let secs = total % 60;
    if hours > 0 {
        format!("{hours}:{minutes:02}:{secs:02}")
    } else {
        format!("{minutes}:{secs:02}")
    }
}

/// Subscriber line for a channel header.
#[must_use]
pub fn format_subscribers(count: u64) -> String {
    if count == 0 {
        "Subscribers".to_string()
    } else {
        format!("{} subscribers", format_count(count))
    }
}

/// Coarse relative time such as `3 days ago`.
#[must_use]
pub fn time_ago(then: DateTime<Utc>, now: DateTime<Utc>) -> String {
    let seconds = (now - then).num_seconds().max(0);
    let (amount, unit) = match seconds {
        0..45 => return "just now".to_string(),
        45..3_600 => (seconds / 60, "minute"),
        3_600..86_400 => (seconds / 3_600, "hour"),
        86_400..2_592_000 => (seconds / 86_400, "day"),
        2_592_000..31_536_000 => (seconds / 2_592_000, "month"),
        _ => (seconds / 31_536_000, "year"),
    };
    let amount = amount.max(1);
    if amount == 1 {
        format!("1 {unit} ago")
    } else {
        format!("{amount} {unit}s ago")
    }
}
