//! Shared text formatting helpers for emails, tables and exports.

/// Formats a decimal hour value as a human-readable duration,
/// e.g. `1.5` becomes `"1 hour 30 minutes"` and `0.25` becomes `"15 minutes"`.
pub fn format_hours_minutes(time_in_hours: f64) -> String {
    let hours = time_in_hours.floor() as i64;
    let minutes = ((time_in_hours - hours as f64) * 60.0).round() as i64;

    if hours == 0 {
        format!("{} minutes", minutes)
    } else if minutes == 0 {
        format!("{} hour{}", hours, if hours != 1 { "s" } else { "" })
    } else {
        format!("{} hour{} {} minutes", hours, if hours != 1 { "s" } else { "" }, minutes)
    }
}

/// Maps a free-form task status onto an emoji by keyword.
/// Unrecognized statuses fall back to the note emoji.
pub fn status_emoji(status: &str) -> &'static str {
    let status = status.to_lowercase();
    if status.contains("complete") || status.contains("done") || status.contains("finish") {
        "✅"
    } else if status.contains("progress") || status.contains("ongoing") {
        "🔄"
    } else if status.contains("hold") || status.contains("pause") {
        "⏸️"
    } else if status.contains("cancel") || status.contains("abandon") {
        "❌"
    } else {
        "📝"
    }
}

/// Renders a decimal hour value the way it is written into CSV rows and
/// tables: trailing zeros trimmed, at most two decimal places.
pub fn format_time_value(time: f64) -> String {
    let formatted = format!("{:.2}", time);
    formatted.trim_end_matches('0').trim_end_matches('.').to_string()
}
