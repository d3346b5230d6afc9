//! # Agency Endpoints

use shared::AgencyRoster;

use super::client::ApiClient;
use super::request::{path_segment, ApiRequest};
use super::transport::Transport;
use crate::core::error::ApiError;

/// Get the members managed by an agency.
pub async fn roster<T: Transport>(client: &ApiClient<T>, agency_id: &str) -> Result<AgencyRoster, ApiError> {
    let path = format!("/agencies/{}/roster", path_segment("Agency id", agency_id)?);
    client.request_as(ApiRequest::get(path)).await
}
