//! # Connection Endpoints

use shared::Connection;

use super::client::ApiClient;
use super::request::ApiRequest;
use super::transport::Transport;
use crate::core::error::ApiError;

/// List the logged-in user's connections (pending and settled).
pub async fn list<T: Transport>(client: &ApiClient<T>) -> Result<Vec<Connection>, ApiError> {
    client.request_list(ApiRequest::get("/connections")).await
}
