//! Shared rendering and formatting utilities.
//!
//! Cursor positioning for the ANSI renderer, plus the date, time, duration,
//! and price formats used by the point views.

use chrono::{DateTime, Duration, Utc};

/// Moves the cursor to a 1-indexed `row`/`col` (`\u{1b}[{row};{col}H`).
pub fn position_cursor(row: usize, col: usize) {
    print!("\u{1b}[{row};{col}H");
}

/// Day and month of a list row, e.g. `18 MAR`.
#[must_use]
pub fn format_day(date: DateTime<Utc>) -> String {
    date.format("%d %b").to_string().to_uppercase()
}

/// Clock time, e.g. `10:30`.
#[must_use]
pub fn format_time(date: DateTime<Utc>) -> String {
    date.format("%H:%M").to_string()
}

/// Full timestamp shown in the editor, e.g. `18/03/26 10:30`.
#[must_use]
pub fn format_date_time(date: DateTime<Utc>) -> String {
    date.format("%d/%m/%y %H:%M").to_string()
}

/// Compact event length.
///
/// Under an hour only minutes are shown (`05M`), under a day hours and
/// minutes (`02H 05M`), otherwise days too (`01D 02H 05M`). Negative
/// durations render as zero.
///
/// # Example
///
/// ```rust
/// use chrono::Duration;
/// use tripboard::ui::helpers::format_duration;
///
/// assert_eq!(format_duration(Duration::minutes(30)), "30M");
/// assert_eq!(format_duration(Duration::minutes(125)), "02H 05M");
/// assert_eq!(format_duration(Duration::hours(26)), "01D 02H 00M");
/// ```
#[must_use]
pub fn format_duration(duration: Duration) -> String {
    let total_minutes = duration.num_minutes().max(0);
    let days = total_minutes / (24 * 60);
    let hours = (total_minutes / 60) % 24;
    let minutes = total_minutes % 60;

    if total_minutes < 60 {
        format!("{minutes:02}M")
    } else if days == 0 {
        format!("{hours:02}H {minutes:02}M")
    } else {
        format!("{days:02}D {hours:02}H {minutes:02}M")
    }
}

/// Price with currency sign, e.g. `€160`.
#[must_use]
pub fn format_price(amount: u32) -> String {
    format!("€{amount}")
}

/// Cuts `text` to at most `width` characters.
#[must_use]
pub fn truncate(text: &str, width: usize) -> &str {
    text.char_indices()
        .nth(width)
        .map_or(text, |(index, _)| &text[..index])
}
