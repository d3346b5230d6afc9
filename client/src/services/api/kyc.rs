//! # KYC Endpoints
//!
//! Identity verification status and document upload.

use base64::{engine::general_purpose::STANDARD, Engine as _};
use shared::{DocumentType, KycDocument, KycDocumentUpload, KycStatus};

use super::client::ApiClient;
use super::request::ApiRequest;
use super::transport::Transport;
use crate::core::error::ApiError;

/// Get the verification status of the logged-in account.
pub async fn status<T: Transport>(client: &ApiClient<T>) -> Result<KycStatus, ApiError> {
    client.request_as(ApiRequest::get("/kyc/status")).await
}

/// Upload one identity document. File content travels base64-encoded in the
/// JSON body.
#[tracing::instrument(skip(client, content), fields(size = content.len()))]
pub async fn upload_document<T: Transport>(
    client: &ApiClient<T>,
    document_type: DocumentType,
    file_name: &str,
    content_type: &str,
    content: &[u8],
) -> Result<KycDocument, ApiError> {
    if content.is_empty() {
        return Err(ApiError::validation("Document file is empty")
            .with_details(serde_json::json!({"field": "data", "message": "Document file is empty"})));
    }

    let upload = KycDocumentUpload {
        document_type,
        file_name: file_name.to_string(),
        content_type: content_type.to_string(),
        data: STANDARD.encode(content),
    };

    let document: KycDocument = client
        .request_as(ApiRequest::post("/kyc/documents").json(&upload)?)
        .await?;
    tracing::info!(document_id = %document.id, "KYC document uploaded");
    Ok(document)
}
