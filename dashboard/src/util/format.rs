//! Text formatting for table cells.
//!
//! Every helper is total: odd input renders as-is or as [`MISSING`] rather
//! than failing the row.

#[cfg(test)]
#[path = "format_test.rs"]
mod format_test;

use serde_json::Value;

/// Placeholder for an absent value.
pub const MISSING: &str = "—";

/// Reward with three decimals, or [`MISSING`] when unset or not finite.
pub fn reward(value: Option<f64>) -> String {
    match value {
        Some(v) if v.is_finite() => format!("{v:.3}"),
        _ => MISSING.to_owned(),
    }
}

/// ISO-8601 timestamp trimmed to `YYYY-MM-DD HH:MM:SS`.
///
/// Fractional seconds and zone suffixes are dropped. Text that does not look
/// like a timestamp is returned unchanged.
pub fn timestamp(raw: &str) -> String {
    let raw = raw.trim();
    if raw.is_empty() {
        return MISSING.to_owned();
    }
    let Some((date, time)) = raw.split_once(['T', ' ']) else {
        return raw.to_owned();
    };
    let time = time
        .split(['.', 'Z', '+'])
        .next()
        .unwrap_or(time);
    // A trailing `-hh:mm` offset survives the split above.
    let time = match time.get(8..) {
        Some(rest) if rest.starts_with('-') => &time[..8],
        _ => time,
    };
    format!("{date} {time}")
}

/// Optional timestamp via [`timestamp`].
pub fn timestamp_opt(raw: Option<&str>) -> String {
    raw.map_or_else(|| MISSING.to_owned(), timestamp)
}

/// Shorten `text` to at most `max` characters, ending in `…` when cut.
pub fn truncate(text: &str, max: usize) -> String {
    if text.chars().count() <= max {
        return text.to_owned();
    }
    let kept: String = text.chars().take(max.saturating_sub(1)).collect();
    format!("{kept}…")
}

/// Indented JSON for `<pre>` blocks.
pub fn pretty_json(value: &Value) -> String {
    serde_json::to_string_pretty(value).unwrap_or_else(|_| value.to_string())
}

/// Compact single-line JSON; `null` renders as [`MISSING`].
pub fn compact_json(value: &Value) -> String {
    match value {
        Value::Null => MISSING.to_owned(),
        Value::String(s) => s.clone(),
        other => other.to_string(),
    }
}
