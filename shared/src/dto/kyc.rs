use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Overall verification state of an account
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum KycState {
    #[default]
    NotStarted,
    Pending,
    Approved,
    Rejected,
}

impl KycState {
    pub fn is_verified(&self) -> bool {
        matches!(self, KycState::Approved)
    }
}

/// Kind of identity document
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum DocumentType {
    Passport,
    NationalId,
    DriversLicense,
    ProofOfAddress,
    MedicalRecord,
    Selfie,
}

/// Document already on file
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct KycDocument {
    pub id: String,
    pub document_type: DocumentType,
    #[serde(default)]
    pub file_name: String,
    #[serde(default)]
    pub status: KycState,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub uploaded_at: Option<DateTime<Utc>>,
}

/// Response of `GET /kyc/status`
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct KycStatus {
    pub status: KycState,
    #[serde(default)]
    pub documents: Vec<KycDocument>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub rejection_reason: Option<String>,
}

/// Body of `POST /kyc/documents`. `data` is the file content, base64 encoded.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct KycDocumentUpload {
    pub document_type: DocumentType,
    pub file_name: String,
    pub content_type: String,
    pub data: String,
}
