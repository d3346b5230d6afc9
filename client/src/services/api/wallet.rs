//! # Wallet Endpoints
//!
//! Balance and transaction history of the logged-in account. Filtering and
//! totals over the history live in [`shared::dto::wallet`].

use shared::{WalletBalance, WalletTransaction};

use super::client::ApiClient;
use super::request::ApiRequest;
use super::transport::Transport;
use crate::core::error::ApiError;

/// Get the wallet balance.
pub async fn balance<T: Transport>(client: &ApiClient<T>) -> Result<WalletBalance, ApiError> {
    client.request_as(ApiRequest::get("/wallet/balance")).await
}

/// Get the transaction history, in server order.
pub async fn transactions<T: Transport>(client: &ApiClient<T>) -> Result<Vec<WalletTransaction>, ApiError> {
    let transactions: Vec<WalletTransaction> =
        client.request_list(ApiRequest::get("/wallet/transactions")).await?;
    tracing::debug!(count = transactions.len(), "Fetched wallet transactions");
    Ok(transactions)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::error::ErrorKind;
    use crate::test_support::{logged_in_client, stub_client, StubTransport};
    use serde_json::json;
    use shared::{Role, TransactionKind, WalletSummary};

    #[tokio::test]
    async fn test_balance_sends_bearer() {
        let stub = StubTransport::new();
        stub.push_json(200, json!({"available": 120.5, "pending": 30.0}));
        let client = logged_in_client(&stub, Role::Surrogate);

        let balance = balance(&client).await.unwrap();

        assert_eq!(balance.currency, "USD");
        assert_eq!(balance.total(), 150.5);
        let sent = stub.last_request().unwrap();
        assert_eq!(sent.header("authorization"), Some("Bearer tok123"));
    }

    #[tokio::test]
    async fn test_balance_without_session() {
        let stub = StubTransport::new();
        let client = stub_client(&stub);

        let err = balance(&client).await.unwrap_err();

        assert_eq!(err.kind, ErrorKind::Auth);
        assert_eq!(stub.call_count(), 0);
    }

    #[tokio::test]
    async fn test_transactions_wrapped_list() {
        let stub = StubTransport::new();
        stub.push_json(
            200,
            json!({
                "transactions": [
                    {"id": "t1", "type": "CREDIT", "amount": 500.0, "createdAt": "2026-03-01T10:00:00Z"},
                    {"id": "t2", "type": "DEBIT", "amount": 75.0, "status": "PENDING", "createdAt": "2026-03-02T10:00:00Z"}
                ]
            }),
        );
        let client = logged_in_client(&stub, Role::Donor);

        let transactions = transactions(&client).await.unwrap();

        assert_eq!(transactions.len(), 2);
        assert_eq!(transactions[1].kind, TransactionKind::Debit);
        let summary = WalletSummary::from_transactions(&transactions);
        assert_eq!(summary.net(), 500.0);
    }

    #[tokio::test]
    async fn test_transactions_bare_list() {
        let stub = StubTransport::new();
        stub.push_json(200, json!([]));
        let client = logged_in_client(&stub, Role::Donor);

        assert!(transactions(&client).await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_transactions_server_error() {
        let stub = StubTransport::new();
        stub.push_json(503, json!({"error": "Ledger unavailable"}));
        let client = logged_in_client(&stub, Role::Donor);

        let err = transactions(&client).await.unwrap_err();

        assert_eq!(err.kind, ErrorKind::Server);
        assert_eq!(err.status_code, Some(503));
        assert!(client.session().is_authenticated());
    }
}
