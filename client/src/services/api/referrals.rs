//! # Referral Endpoints

use shared::ReferralCode;

use super::client::ApiClient;
use super::request::ApiRequest;
use super::transport::Transport;
use crate::core::error::ApiError;

/// Get the logged-in user's referral code.
pub async fn code<T: Transport>(client: &ApiClient<T>) -> Result<ReferralCode, ApiError> {
    client.request_as(ApiRequest::get("/referrals/code")).await
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::{logged_in_client, StubTransport};
    use serde_json::json;
    use shared::Role;

    #[tokio::test]
    async fn test_referral_code() {
        let stub = StubTransport::new();
        stub.push_json(200, json!({"code": "ANA-7F3K", "referredCount": 3}));
        let client = logged_in_client(&stub, Role::Surrogate);

        let referral = code(&client).await.unwrap();

        assert_eq!(referral.code, "ANA-7F3K");
        assert_eq!(referral.referred_count, 3);
        assert_eq!(referral.share_url, None);
        assert_eq!(
            stub.last_request().unwrap().url.as_str(),
            "http://localhost:5000/api/referrals/code"
        );
    }
}
