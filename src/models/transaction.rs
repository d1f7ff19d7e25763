//! Transaction snapshot model
//!
//! A `Transaction` is the read-only shape the dashboard reports consume: one
//! recorded expense with a category, amount and date. Snapshots come either
//! from the local expense store or from a fetched JSON feed.

use chrono::{DateTime, NaiveDate, NaiveDateTime};
use serde::{Deserialize, Serialize};

use super::money::Money;

/// A single recorded expense as seen by the aggregation reports
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Transaction {
    /// Identifier assigned by the owning store
    pub id: String,

    /// What the money was spent on
    pub description: String,

    /// Amount spent (never negative)
    pub amount: Money,

    /// Free-form, case-sensitive category label
    pub category: String,

    /// Day the expense happened
    pub date: NaiveDate,
}

impl Transaction {
    pub fn new(
        id: impl Into<String>,
        description: impl Into<String>,
        amount: Money,
        category: impl Into<String>,
        date: NaiveDate,
    ) -> Self {
        Self {
            id: id.into(),
            description: description.into(),
            amount,
            category: category.into(),
            date,
        }
    }
}

/// Parse an ISO-8601 date as sent by the backend
///
/// Accepts a plain `YYYY-MM-DD` date, an RFC 3339 timestamp (the date is
/// taken in the timestamp's own offset), or a zone-less `YYYY-MM-DDTHH:MM:SS`
/// timestamp.
pub fn parse_iso_date(input: &str) -> Option<NaiveDate> {
    let input = input.trim();

    if let Ok(date) = NaiveDate::parse_from_str(input, "%Y-%m-%d") {
        return Some(date);
    }
    if let Ok(timestamp) = DateTime::parse_from_rfc3339(input) {
        return Some(timestamp.date_naive());
    }
    NaiveDateTime::parse_from_str(input, "%Y-%m-%dT%H:%M:%S%.f")
        .ok()
        .map(|dt| dt.date())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_plain_date() {
        assert_eq!(
            parse_iso_date("2025-01-15"),
            NaiveDate::from_ymd_opt(2025, 1, 15)
        );
    }

    #[test]
    fn test_parse_backend_timestamp() {
        assert_eq!(
            parse_iso_date("2025-03-02T00:00:00.000Z"),
            NaiveDate::from_ymd_opt(2025, 3, 2)
        );
        assert_eq!(
            parse_iso_date("2025-03-02T18:30:00+05:30"),
            NaiveDate::from_ymd_opt(2025, 3, 2)
        );
        assert_eq!(
            parse_iso_date("2025-03-02T10:15:00"),
            NaiveDate::from_ymd_opt(2025, 3, 2)
        );
    }

    #[test]
    fn test_parse_rejects_garbage() {
        assert_eq!(parse_iso_date("yesterday"), None);
        assert_eq!(parse_iso_date("2025-13-01"), None);
        assert_eq!(parse_iso_date(""), None);
    }

    #[test]
    fn test_serialization_uses_iso_date() {
        let txn = Transaction::new(
            "42",
            "Groceries",
            Money::from_cents(1250),
            "Food",
            NaiveDate::from_ymd_opt(2025, 1, 15).unwrap(),
        );
        let json = serde_json::to_value(&txn).unwrap();
        assert_eq!(json["date"], "2025-01-15");
        assert_eq!(json["amount"], 1250);
    }
}
