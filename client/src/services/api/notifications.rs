//! # Notification Endpoints

use shared::Notification;

use super::client::ApiClient;
use super::request::{path_segment, ApiRequest};
use super::transport::Transport;
use crate::core::error::ApiError;

/// List notifications for the logged-in user.
pub async fn list<T: Transport>(client: &ApiClient<T>) -> Result<Vec<Notification>, ApiError> {
    client.request_list(ApiRequest::get("/notifications")).await
}

/// Mark one notification as read. Any response body is ignored.
pub async fn mark_read<T: Transport>(client: &ApiClient<T>, id: &str) -> Result<(), ApiError> {
    let path = format!("/notifications/{}/read", path_segment("Notification id", id)?);
    client.request(ApiRequest::post(path)).await?;
    Ok(())
}
