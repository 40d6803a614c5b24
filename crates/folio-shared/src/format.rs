//! Display formatting for post metadata.

use chrono::{DateTime, Utc};

/// Long US-style date, e.g. `January 15, 2024`.
pub fn format_date(date: &DateTime<Utc>) -> String {
    date.format("%B %-d, %Y").to_string()
}
