//! Wallet DTOs and the client-side filtering used by the wallet screen.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Response of `GET /wallet/balance`
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct WalletBalance {
    pub available: f64,
    #[serde(default)]
    pub pending: f64,
    #[serde(default = "default_currency")]
    pub currency: String,
}

fn default_currency() -> String {
    "USD".to_string()
}

impl WalletBalance {
    pub fn total(&self) -> f64 {
        self.available + self.pending
    }
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum TransactionKind {
    Credit,
    Debit,
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum TransactionStatus {
    Pending,
    #[default]
    Completed,
    Failed,
}

/// One entry of `GET /wallet/transactions`
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct WalletTransaction {
    pub id: String,
    #[serde(rename = "type", alias = "kind")]
    pub kind: TransactionKind,
    /// Always positive; the direction is carried by `kind`.
    pub amount: f64,
    #[serde(default)]
    pub status: TransactionStatus,
    #[serde(default)]
    pub description: Option<String>,
    pub created_at: DateTime<Utc>,
}

impl WalletTransaction {
    /// Amount with sign applied (credits positive, debits negative).
    pub fn signed_amount(&self) -> f64 {
        match self.kind {
            TransactionKind::Credit => self.amount.abs(),
            TransactionKind::Debit => -self.amount.abs(),
        }
    }
}

/// Filter applied by the wallet screen. Unset fields match everything;
/// `since` is inclusive, `until` is exclusive.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct TransactionFilter {
    pub kind: Option<TransactionKind>,
    pub status: Option<TransactionStatus>,
    pub since: Option<DateTime<Utc>>,
    pub until: Option<DateTime<Utc>>,
}

impl TransactionFilter {
    pub fn matches(&self, tx: &WalletTransaction) -> bool {
        self.kind.map_or(true, |kind| tx.kind == kind)
            && self.status.map_or(true, |status| tx.status == status)
            && self.since.map_or(true, |since| tx.created_at >= since)
            && self.until.map_or(true, |until| tx.created_at < until)
    }
}

pub fn filter_transactions<'a>(
    transactions: &'a [WalletTransaction],
    filter: &TransactionFilter,
) -> Vec<&'a WalletTransaction> {
    transactions.iter().filter(|tx| filter.matches(tx)).collect()
}

/// Newest first; ties keep their original order.
pub fn sort_transactions_newest_first(transactions: &mut [WalletTransaction]) {
    transactions.sort_by(|a, b| b.created_at.cmp(&a.created_at));
}

/// Totals over completed transactions
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct WalletSummary {
    pub total_credits: f64,
    pub total_debits: f64,
}

impl WalletSummary {
    pub fn from_transactions<'a, I>(transactions: I) -> Self
    where
        I: IntoIterator<Item = &'a WalletTransaction>,
    {
        transactions
            .into_iter()
            .filter(|tx| tx.status == TransactionStatus::Completed)
            .fold(Self::default(), |mut summary, tx| {
                match tx.kind {
                    TransactionKind::Credit => summary.total_credits += tx.amount.abs(),
                    TransactionKind::Debit => summary.total_debits += tx.amount.abs(),
                }
                summary
            })
    }

    pub fn net(&self) -> f64 {
        self.total_credits - self.total_debits
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn tx(id: &str, kind: TransactionKind, amount: f64, status: TransactionStatus, day: u32) -> WalletTransaction {
        WalletTransaction {
            id: id.to_string(),
            kind,
            amount,
            status,
            description: None,
            created_at: Utc.with_ymd_and_hms(2026, 3, day, 12, 0, 0).unwrap(),
        }
    }

    fn sample() -> Vec<WalletTransaction> {
        vec![
            tx("t1", TransactionKind::Credit, 500.0, TransactionStatus::Completed, 1),
            tx("t2", TransactionKind::Debit, 120.0, TransactionStatus::Completed, 5),
            tx("t3", TransactionKind::Credit, 80.0, TransactionStatus::Pending, 9),
            tx("t4", TransactionKind::Debit, 40.0, TransactionStatus::Failed, 3),
        ]
    }

    #[test]
    fn test_decodes_api_shape() {
        let json = r#"{"id":"t9","type":"DEBIT","amount":25.5,"status":"PENDING","createdAt":"2026-03-02T08:00:00Z"}"#;
        let tx: WalletTransaction = serde_json::from_str(json).unwrap();
        assert_eq!(tx.kind, TransactionKind::Debit);
        assert_eq!(tx.signed_amount(), -25.5);
    }

    #[test]
    fn test_empty_filter_matches_all() {
        let txs = sample();
        assert_eq!(filter_transactions(&txs, &TransactionFilter::default()).len(), 4);
    }

    #[test]
    fn test_filter_by_kind_and_window() {
        let txs = sample();
        let filter = TransactionFilter {
            kind: Some(TransactionKind::Debit),
            since: Some(Utc.with_ymd_and_hms(2026, 3, 4, 0, 0, 0).unwrap()),
            ..Default::default()
        };
        let ids: Vec<_> = filter_transactions(&txs, &filter).iter().map(|tx| tx.id.as_str()).collect();
        assert_eq!(ids, vec!["t2"]);
    }

    #[test]
    fn test_sort_newest_first() {
        let mut txs = sample();
        sort_transactions_newest_first(&mut txs);
        let ids: Vec<_> = txs.iter().map(|tx| tx.id.as_str()).collect();
        assert_eq!(ids, vec!["t3", "t2", "t4", "t1"]);
    }

    #[test]
    fn test_summary_counts_completed_only() {
        let summary = WalletSummary::from_transactions(&sample());
        assert_eq!(summary.total_credits, 500.0);
        assert_eq!(summary.total_debits, 120.0);
        assert_eq!(summary.net(), 380.0);
    }
}
