//! Shared utility functions for AgriChain crates.

/// Date utility functions
pub mod dates {
    use chrono::{DateTime, NaiveDate, Utc};

    /// Format a NaiveDate as "YYYY-MM-DD"
    pub fn format_date(date: &NaiveDate) -> String {
        date.format("%Y-%m-%d").to_string()
    }

    /// Today's date in UTC
    pub fn today() -> NaiveDate {
        Utc::now().date_naive()
    }

    /// Short human date for notification timestamps, e.g. "Mar 1, 2024"
    pub fn format_timestamp(ts: &DateTime<Utc>) -> String {
        ts.format("%b %-d, %Y").to_string()
    }

}

/// Display formatting for dashboard values
pub mod display {
    /// Number of entries the dashboard lists show.
    pub const RECENT_LIMIT: usize = 5;

    /// Abbreviate a wallet address as `0x1234...abcd`.
    /// Strings too short to abbreviate are returned unchanged.
    pub fn short_address(address: &str) -> String {
        if address.len() <= 10 || !address.is_ascii() {
            return address.to_string();
        }
        format!("{}...{}", &address[..6], &address[address.len() - 4..])
    }

    /// Format a USD amount with thousands separators, e.g. `$12,500`.
    /// Fractions are rounded to whole dollars.
    pub fn format_usd(amount: f64) -> String {
        let rounded = amount.round();
        let negative = rounded < 0.0;
        let digits = format!("{:.0}", rounded.abs());

        let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
        for (i, ch) in digits.chars().enumerate() {
            if i > 0 && (digits.len() - i) % 3 == 0 {
                grouped.push(',');
            }
            grouped.push(ch);
        }

        if negative {
            format!("-${}", grouped)
        } else {
            format!("${}", grouped)
        }
    }

    /// The first `limit` items of a newest-first list.
    pub fn recent<T>(items: &[T], limit: usize) -> &[T] {
        &items[..items.len().min(limit)]
    }

}
