//! # Service Traits
//!
//! [`PlatformApi`] is the seam screens depend on. It mirrors the endpoint
//! functions in [`crate::services::api`] one for one, so a host can hold an
//! `Arc<dyn PlatformApi>` and swap in a fake in tests.

use async_trait::async_trait;
use shared::{
    AgencyRoster, AuthResponse, Connection, DocumentType, Journey, KycDocument, KycStatus,
    MessageResponse, Notification, ReferralCode, RegisterRequest, RegisterResponse, Role,
    UserSummary, WalletBalance, WalletTransaction,
};

use super::error::Result;
use crate::services::api::{
    agencies, auth, connections, journey, kyc, notifications, referrals, wallet, ApiClient, Transport,
};

/// Platform API operations.
#[async_trait]
pub trait PlatformApi: Send + Sync {
    /// Login with email and password; starts the session.
    async fn login(&self, email: &str, password: &str) -> Result<AuthResponse>;

    /// Register a new account.
    async fn register(&self, request: &RegisterRequest) -> Result<RegisterResponse>;

    /// Request a new one-time password.
    async fn resend_otp(&self, email: &str) -> Result<MessageResponse>;

    /// Fetch the logged-in user.
    async fn current_user(&self) -> Result<UserSummary>;

    /// Drop the local session.
    fn logout(&self);

    async fn kyc_status(&self) -> Result<KycStatus>;

    async fn upload_kyc_document(
        &self,
        document_type: DocumentType,
        file_name: &str,
        content_type: &str,
        content: &[u8],
    ) -> Result<KycDocument>;

    async fn referral_code(&self) -> Result<ReferralCode>;

    async fn agency_roster(&self, agency_id: &str) -> Result<AgencyRoster>;

    async fn wallet_balance(&self) -> Result<WalletBalance>;

    async fn wallet_transactions(&self) -> Result<Vec<WalletTransaction>>;

    async fn connections(&self) -> Result<Vec<Connection>>;

    async fn journey(&self, role: Role) -> Result<Journey>;

    async fn notifications(&self) -> Result<Vec<Notification>>;

    async fn mark_notification_read(&self, id: &str) -> Result<()>;
}

#[async_trait]
impl<T: Transport> PlatformApi for ApiClient<T> {
    async fn login(&self, email: &str, password: &str) -> Result<AuthResponse> {
        auth::login(self, email, password).await
    }

    async fn register(&self, request: &RegisterRequest) -> Result<RegisterResponse> {
        auth::register(self, request).await
    }

    async fn resend_otp(&self, email: &str) -> Result<MessageResponse> {
        auth::resend_otp(self, email).await
    }

    async fn current_user(&self) -> Result<UserSummary> {
        auth::current_user(self).await
    }

    fn logout(&self) {
        auth::logout(self)
    }

    async fn kyc_status(&self) -> Result<KycStatus> {
        kyc::status(self).await
    }

    async fn upload_kyc_document(
        &self,
        document_type: DocumentType,
        file_name: &str,
        content_type: &str,
        content: &[u8],
    ) -> Result<KycDocument> {
        kyc::upload_document(self, document_type, file_name, content_type, content).await
    }

    async fn referral_code(&self) -> Result<ReferralCode> {
        referrals::code(self).await
    }

    async fn agency_roster(&self, agency_id: &str) -> Result<AgencyRoster> {
        agencies::roster(self, agency_id).await
    }

    async fn wallet_balance(&self) -> Result<WalletBalance> {
        wallet::balance(self).await
    }

    async fn wallet_transactions(&self) -> Result<Vec<WalletTransaction>> {
        wallet::transactions(self).await
    }

    async fn connections(&self) -> Result<Vec<Connection>> {
        connections::list(self).await
    }

    async fn journey(&self, role: Role) -> Result<Journey> {
        journey::for_role(self, role).await
    }

    async fn notifications(&self) -> Result<Vec<Notification>> {
        notifications::list(self).await
    }

    async fn mark_notification_read(&self, id: &str) -> Result<()> {
        notifications::mark_read(self, id).await
    }
}
