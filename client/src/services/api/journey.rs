//! # Journey Endpoints

use shared::{Journey, Role};

use super::client::ApiClient;
use super::request::ApiRequest;
use super::transport::Transport;
use crate::core::error::ApiError;

/// Get the journey steps for a role.
pub async fn for_role<T: Transport>(client: &ApiClient<T>, role: Role) -> Result<Journey, ApiError> {
    client
        .request_as(ApiRequest::get("/journey").query("role", role.as_str()))
        .await
}
