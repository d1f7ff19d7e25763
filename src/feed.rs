//! Transaction feed parsing
//!
//! Reads the JSON array the PocketGuard REST API returns for
//! `GET /api/transactions` and normalises it into [`Transaction`] snapshots.
//!
//! Content problems never fail: a payload that is not a JSON array yields an
//! empty list, and records that are not transaction-shaped are skipped. Only
//! failing to read the file itself is an error.

use std::path::Path;

use serde::Deserialize;
use serde_json::Value;
use tracing::{debug, warn};

use crate::error::{PocketGuardError, PocketGuardResult};
use crate::models::{parse_iso_date, Money, Transaction};

#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum RawId {
    Text(String),
    Number(i64),
}

/// One record as it appears on the wire
#[derive(Debug, Deserialize)]
struct FeedRecord {
    id: RawId,
    #[serde(alias = "name")]
    description: String,
    amount: f64,
    category: String,
    date: String,
}

impl FeedRecord {
    fn into_transaction(self) -> Option<Transaction> {
        if self.amount < 0.0 {
            return None;
        }
        let amount = Money::from_major(self.amount)?;
        let date = parse_iso_date(&self.date)?;
        let id = match self.id {
            RawId::Text(id) => id,
            RawId::Number(id) => id.to_string(),
        };

        Some(Transaction::new(id, self.description, amount, self.category, date))
    }
}

/// Parse a feed payload into transactions
pub fn parse_feed(payload: &str) -> Vec<Transaction> {
    let records = match serde_json::from_str::<Value>(payload) {
        Ok(Value::Array(records)) => records,
        Ok(other) => {
            warn!(kind = value_kind(&other), "transaction feed is not an array, treating as empty");
            return Vec::new();
        }
        Err(e) => {
            warn!(error = %e, "transaction feed is not valid JSON, treating as empty");
            return Vec::new();
        }
    };

    let total = records.len();
    let transactions: Vec<Transaction> = records
        .into_iter()
        .filter_map(|record| {
            serde_json::from_value::<FeedRecord>(record)
                .ok()
                .and_then(FeedRecord::into_transaction)
        })
        .collect();

    if transactions.len() < total {
        warn!(
            skipped = total - transactions.len(),
            total, "skipped malformed transaction feed records"
        );
    }
    debug!(count = transactions.len(), "parsed transaction feed");

    transactions
}

/// Read and parse a feed file
pub fn load_feed<P: AsRef<Path>>(path: P) -> PocketGuardResult<Vec<Transaction>> {
    let path = path.as_ref();
    let payload = std::fs::read_to_string(path).map_err(|e| {
        PocketGuardError::Io(format!("Failed to read feed {}: {}", path.display(), e))
    })?;
    Ok(parse_feed(&payload))
}

fn value_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "bool",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{BalanceState, BudgetState};
    use crate::reports::DashboardSummary;
    use chrono::NaiveDate;
    use tempfile::TempDir;

    #[test]
    fn test_parse_backend_payload() {
        let payload = r#"[
            {"id": "17", "description": "Lunch", "amount": 250.5, "category": "Food", "date": "2025-01-15T00:00:00.000Z"},
            {"id": 18, "name": "Metro card", "amount": 100, "category": "Transport", "date": "2025-01-20"}
        ]"#;

        let txns = parse_feed(payload);
        assert_eq!(txns.len(), 2);

        assert_eq!(txns[0].id, "17");
        assert_eq!(txns[0].amount, Money::from_cents(25_050));
        assert_eq!(txns[0].date, NaiveDate::from_ymd_opt(2025, 1, 15).unwrap());

        assert_eq!(txns[1].id, "18");
        assert_eq!(txns[1].description, "Metro card");
        assert_eq!(txns[1].amount, Money::from_cents(10_000));
    }

    #[test]
    fn test_non_array_payload_is_empty() {
        assert!(parse_feed(r#"{"error": "Unauthorized"}"#).is_empty());
        assert!(parse_feed("null").is_empty());
        assert!(parse_feed("<html>502 Bad Gateway</html>").is_empty());
        assert!(parse_feed("").is_empty());
    }

    #[test]
    fn test_malformed_records_are_skipped() {
        let payload = r#"[
            {"id": "1", "description": "Ok", "amount": 10, "category": "Food", "date": "2025-02-01"},
            {"id": "2", "description": "No amount", "category": "Food", "date": "2025-02-01"},
            {"id": "3", "description": "Bad date", "amount": 5, "category": "Food", "date": "soon"},
            {"id": "4", "description": "Refund", "amount": -5, "category": "Food", "date": "2025-02-01"},
            42,
            "text"
        ]"#;

        let txns = parse_feed(payload);
        assert_eq!(txns.len(), 1);
        assert_eq!(txns[0].id, "1");
    }

    #[test]
    fn test_out_of_range_amounts_are_skipped() {
        let payload = r#"[
            {"id": "1", "description": "Huge", "amount": 1e300, "category": "Food", "date": "2025-02-01"},
            {"id": "2", "description": "Lunch", "amount": 5, "category": "Food", "date": "2025-02-01"},
            {"id": "3", "description": "Huge", "amount": 1e17, "category": "Rent", "date": "2025-02-02"}
        ]"#;

        let txns = parse_feed(payload);
        assert_eq!(txns.len(), 1);
        assert_eq!(txns[0].id, "2");

        let summary = DashboardSummary::compute(
            &txns,
            BudgetState::new(Money::from_cents(10_000)),
            BalanceState::new(Money::from_cents(10_000)),
        );
        assert_eq!(summary.categories.total(), Money::from_cents(500));
        assert!((summary.budget.percentage - 5.0).abs() < 1e-9);
    }

    #[test]
    fn test_load_feed_from_file() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("feed.json");
        std::fs::write(
            &path,
            r#"[{"id": "a", "description": "Tea", "amount": 1.25, "category": "Food", "date": "2025-03-01"}]"#,
        )
        .unwrap();

        let txns = load_feed(&path).unwrap();
        assert_eq!(txns.len(), 1);
        assert_eq!(txns[0].amount, Money::from_cents(125));
    }

    #[test]
    fn test_missing_feed_file_is_error() {
        let temp_dir = TempDir::new().unwrap();
        let err = load_feed(temp_dir.path().join("missing.json")).unwrap_err();
        assert!(matches!(err, PocketGuardError::Io(_)));
    }
}
