//! Display formatting for backend timestamps.

#[cfg(test)]
#[path = "format_test.rs"]
mod format_test;

use chrono::NaiveDateTime;

/// Render a backend timestamp for list views, e.g. `Mar 04, 2025 17:32`.
/// Missing timestamps render as a dash.
#[must_use]
pub fn timestamp(value: Option<NaiveDateTime>) -> String {
    value.map_or_else(|| "-".to_owned(), |dt| dt.format("%b %d, %Y %H:%M").to_string())
}

/// Date-only form for inventory tables, e.g. `Mar 04, 2025`.
#[must_use]
pub fn date(value: Option<NaiveDateTime>) -> String {
    value.map_or_else(|| "-".to_owned(), |dt| dt.format("%b %d, %Y").to_string())
}
