//! # Authentication Endpoints
//!
//! Login, registration, OTP resend, current user and logout. Successful
//! login (and a registration that returns a token) starts the session.

use shared::{
    AuthResponse, LoginRequest, MessageResponse, RegisterRequest, RegisterResponse,
    ResendOtpRequest, UserSummary,
};

use super::client::ApiClient;
use super::request::ApiRequest;
use super::transport::Transport;
use crate::core::error::ApiError;
use crate::utils::validation::validate_registration;

/// Login with email and password. Stores the session on success.
#[tracing::instrument(skip(client, email, password), fields(email = %shared::mask_email(email)))]
pub async fn login<T: Transport>(
    client: &ApiClient<T>,
    email: &str,
    password: &str,
) -> Result<AuthResponse, ApiError> {
    tracing::info!("Attempting login");

    let request = LoginRequest {
        email: email.trim().to_string(),
        password: password.to_string(),
    };

    let response: AuthResponse = client
        .request_as(ApiRequest::post("/auth/login").json(&request)?.public())
        .await?;

    client
        .session()
        .set_session(response.token.clone(), response.user.clone());
    tracing::info!(user_id = %response.user.id, role = %response.user.role, "Login successful");
    Ok(response)
}

/// Register a new account.
///
/// The form is validated locally first; a failure comes back as `VALIDATION`
/// without a network call. Accounts that still need OTP confirmation are
/// returned without a token and no session is started.
#[tracing::instrument(skip(client, request), fields(role = %request.role))]
pub async fn register<T: Transport>(
    client: &ApiClient<T>,
    request: &RegisterRequest,
) -> Result<RegisterResponse, ApiError> {
    validate_registration(request)?;

    let response: RegisterResponse = client
        .request_as(ApiRequest::post("/auth/register").json(request)?.public())
        .await?;

    match (&response.token, &response.user) {
        (Some(token), Some(user)) => {
            client.session().set_session(token.clone(), user.clone());
            tracing::info!(user_id = %user.id, "Registration confirmed");
        }
        _ => tracing::info!("Registration pending confirmation"),
    }
    Ok(response)
}

/// Ask the server to send a fresh one-time password.
pub async fn resend_otp<T: Transport>(
    client: &ApiClient<T>,
    email: &str,
) -> Result<MessageResponse, ApiError> {
    let request = ResendOtpRequest {
        email: email.trim().to_string(),
    };
    let value = client
        .request(ApiRequest::post("/auth/resend-otp").json(&request)?.public())
        .await?;
    if value.is_null() {
        return Ok(MessageResponse::default());
    }
    serde_json::from_value(value)
        .map_err(|e| ApiError::unknown(format!("Unexpected response shape: {}", e)))
}

/// Fetch the logged-in user and refresh the session snapshot.
pub async fn current_user<T: Transport>(client: &ApiClient<T>) -> Result<UserSummary, ApiError> {
    let user: UserSummary = client.request_as(ApiRequest::get("/auth/me")).await?;
    client.session().update_user(user.clone());
    Ok(user)
}

/// Drop the local session. There is no server-side logout route.
pub fn logout<T: Transport>(client: &ApiClient<T>) {
    client.session().clear_session();
    tracing::info!("Logged out");
}
