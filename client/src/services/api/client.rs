//! # API Client
//!
//! The single chokepoint through which all network calls pass. Reads the
//! endpoint configuration and session token, issues the call through a
//! [`Transport`] and maps every outcome to JSON or an [`ApiError`].
//!
//! ## Outcome mapping
//!
//! | outcome                         | result                                   |
//! |---------------------------------|------------------------------------------|
//! | auth required, no token         | `AUTH`, no network call                  |
//! | no response                     | `NETWORK` (`TIMEOUT` if the transport timed out) |
//! | 401 / 403                       | `AUTH`, session cleared if it still holds the sent token |
//! | 400 / 422                       | `VALIDATION` with the body as `details`  |
//! | 5xx                             | `SERVER`                                 |
//! | 2xx                             | parsed JSON (`null` for an empty body)   |
//! | 2xx with malformed JSON         | `UNKNOWN`                                |
//! | anything else                   | `UNKNOWN`                                |
//!
//! No retries: idempotency varies by endpoint, so retry policy belongs to the
//! caller.

use std::sync::Arc;
use std::time::Instant;

use reqwest::Url;
use serde::de::DeserializeOwned;
use serde_json::Value;
use shared::{ErrorResponse, ListEnvelope};

use super::request::ApiRequest;
use super::transport::{ReqwestTransport, Transport, TransportError, TransportRequest, TransportResponse};
use crate::config::Settings;
use crate::core::error::{ApiError, ConfigError};
use crate::services::endpoint::EndpointStore;
use crate::services::session::SessionStore;

/// HTTP client for the platform API.
///
/// Configuration and session are injected so that several clients (for
/// example, two accounts in one test) can coexist.
#[derive(Debug, Clone)]
pub struct ApiClient<T: Transport = ReqwestTransport> {
    endpoint: Arc<EndpointStore>,
    session: Arc<SessionStore>,
    transport: T,
}

impl ApiClient<ReqwestTransport> {
    /// Client over the default reqwest transport, configured from settings.
    /// Settings are validated first.
    pub fn from_settings(settings: &Settings) -> Result<Self, ConfigError> {
        settings.validate()?;
        let transport = ReqwestTransport::with_timeout(settings.http_timeout).map_err(|e| {
            ConfigError::InvalidValue {
                name: "SURROMATCH_HTTP_TIMEOUT_SECS",
                reason: e.to_string(),
            }
        })?;
        Ok(Self::new(
            Arc::new(EndpointStore::new(settings.endpoint.clone())),
            Arc::new(SessionStore::new()),
            transport,
        ))
    }
}

impl<T: Transport> ApiClient<T> {
    pub fn new(endpoint: Arc<EndpointStore>, session: Arc<SessionStore>, transport: T) -> Self {
        Self {
            endpoint,
            session,
            transport,
        }
    }

    pub fn endpoint(&self) -> &Arc<EndpointStore> {
        &self.endpoint
    }

    pub fn session(&self) -> &Arc<SessionStore> {
        &self.session
    }

    pub fn transport(&self) -> &T {
        &self.transport
    }

    /// Issue a request and return the parsed JSON body.
    #[tracing::instrument(skip(self, request), fields(method = %request.method, path = %request.path))]
    pub async fn request(&self, request: ApiRequest) -> Result<Value, ApiError> {
        let token = self.session.token();
        if request.requires_auth && token.is_none() {
            tracing::debug!("Rejected locally: authenticated call without a session");
            return Err(ApiError::auth("Not logged in"));
        }

        let transport_request = self.build(&request, token.as_deref())?;
        let start = Instant::now();

        let response = match self.transport.send(transport_request).await {
            Ok(response) => response,
            Err(err) => {
                tracing::warn!(error = %err, duration_ms = start.elapsed().as_millis(), "Request failed without response");
                return Err(match err {
                    TransportError::Timeout(msg) => ApiError::timeout(msg),
                    TransportError::Connect(msg) | TransportError::Other(msg) => ApiError::network(msg),
                });
            }
        };

        let duration_ms = start.elapsed().as_millis();
        let result = self.interpret(response, token.as_deref());
        match &result {
            Ok(_) => tracing::debug!(duration_ms, "Request succeeded"),
            Err(err) => tracing::warn!(
                kind = %err.kind,
                status = err.status_code,
                duration_ms,
                "Request failed"
            ),
        }
        result
    }

    /// Issue a request and decode the body into `R`. A body that does not
    /// match `R` is reported as `UNKNOWN`.
    pub async fn request_as<R: DeserializeOwned>(&self, request: ApiRequest) -> Result<R, ApiError> {
        let value = self.request(request).await?;
        serde_json::from_value(value)
            .map_err(|e| ApiError::unknown(format!("Unexpected response shape: {}", e)))
    }

    /// Issue a request for a collection route, accepting a bare array or a
    /// wrapped one.
    pub async fn request_list<R: DeserializeOwned>(&self, request: ApiRequest) -> Result<Vec<R>, ApiError> {
        self.request_as::<ListEnvelope<R>>(request)
            .await
            .map(ListEnvelope::into_vec)
    }

    fn build(&self, request: &ApiRequest, token: Option<&str>) -> Result<TransportRequest, ApiError> {
        let mut url = Url::parse(&self.endpoint.url_for(&request.path))
            .map_err(|e| ApiError::unknown(format!("Invalid request URL: {}", e)))?;
        if !request.query.is_empty() {
            url.query_pairs_mut().extend_pairs(request.query.iter());
        }

        let mut headers = vec![("Accept".to_string(), "application/json".to_string())];
        if let Some(token) = token {
            headers.push(("Authorization".to_string(), format!("Bearer {}", token)));
        }

        let body = match &request.body {
            Some(value) => {
                headers.push(("Content-Type".to_string(), "application/json".to_string()));
                let bytes = serde_json::to_vec(value)
                    .map_err(|e| ApiError::unknown(format!("Failed to serialize request body: {}", e)))?;
                Some(bytes)
            }
            None => None,
        };

        Ok(TransportRequest {
            method: request.method,
            url,
            headers,
            body,
        })
    }

    fn interpret(&self, response: TransportResponse, sent_token: Option<&str>) -> Result<Value, ApiError> {
        let status = response.status;
        match status {
            200..=299 => parse_success(&response),
            401 | 403 => {
                // A session started while the request was in flight stays.
                if let Some(token) = sent_token {
                    self.session.clear_if_token(token);
                }
                Err(ApiError::auth(server_message(&response).unwrap_or_else(|| "Session rejected by server".to_string()))
                    .with_status(status))
            }
            400 | 422 => {
                let details = serde_json::from_slice::<Value>(&response.body)
                    .unwrap_or_else(|_| Value::String(response.text()));
                let message = server_message(&response).unwrap_or_else(|| "Request was rejected".to_string());
                Err(ApiError::validation(message)
                    .with_status(status)
                    .with_details(details))
            }
            500..=u16::MAX => Err(ApiError::server(
                server_message(&response).unwrap_or_else(|| format!("Server error ({})", status)),
            )
            .with_status(status)),
            _ => Err(ApiError::unknown(
                server_message(&response).unwrap_or_else(|| format!("Unexpected status {}", status)),
            )
            .with_status(status)),
        }
    }
}

fn parse_success(response: &TransportResponse) -> Result<Value, ApiError> {
    if response.body.iter().all(u8::is_ascii_whitespace) {
        return Ok(Value::Null);
    }
    serde_json::from_slice(&response.body).map_err(|e| {
        ApiError::unknown(format!("Malformed JSON in response: {}", e)).with_status(response.status)
    })
}

/// `message` or `error` from a JSON error body, if there is one.
fn server_message(response: &TransportResponse) -> Option<String> {
    serde_json::from_slice::<ErrorResponse>(&response.body)
        .ok()
        .and_then(|body| body.text().map(str::to_string))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::error::ErrorKind;
    use crate::services::api::request::Method;
    use crate::test_support::StubTransport;
    use serde_json::json;
    use shared::{Role, UserSummary};

    fn client(stub: StubTransport) -> ApiClient<StubTransport> {
        crate::test_support::stub_client(&stub)
    }

    #[tokio::test]
    async fn test_auth_required_without_session_skips_network() {
        let stub = StubTransport::new();
        let client = client(stub.clone());

        let err = client.request(ApiRequest::get("/kyc/status")).await.unwrap_err();

        assert_eq!(err.kind, ErrorKind::Auth);
        assert_eq!(err.status_code, None);
        assert_eq!(stub.call_count(), 0);
    }

    #[tokio::test]
    async fn test_bearer_token_attached_to_wallet_balance() {
        let stub = StubTransport::new();
        stub.push_json(200, json!({"available": 10.0}));
        let client = client(stub.clone());
        client.session().set_session("tok123", UserSummary::new("u1", Role::Surrogate));

        let value = client.request(ApiRequest::get("/wallet/balance")).await.unwrap();

        assert_eq!(value, json!({"available": 10.0}));
        let sent = stub.last_request().unwrap();
        assert_eq!(sent.method, Method::Get);
        assert_eq!(sent.url.as_str(), "http://localhost:5000/api/wallet/balance");
        assert_eq!(sent.header("Authorization"), Some("Bearer tok123"));
        assert_eq!(stub.call_count(), 1);
    }

    #[tokio::test]
    async fn test_public_request_goes_out_without_header() {
        let stub = StubTransport::new();
        stub.push_json(200, json!({"ok": true}));
        let client = client(stub.clone());

        client.request(ApiRequest::get("/health").public()).await.unwrap();

        let sent = stub.last_request().unwrap();
        assert_eq!(sent.header("Authorization"), None);
    }

    #[tokio::test]
    async fn test_token_attached_to_public_request() {
        let stub = StubTransport::new();
        stub.push_json(200, json!({}));
        let client = client(stub.clone());
        client.session().set_session("tok", UserSummary::new("u1", Role::Donor));

        client.request(ApiRequest::post("/auth/resend-otp").public()).await.unwrap();

        assert_eq!(stub.last_request().unwrap().header("authorization"), Some("Bearer tok"));
    }

    #[tokio::test]
    async fn test_json_body_and_query_encoding() {
        let stub = StubTransport::new();
        stub.push_json(200, json!([]));
        let client = client(stub.clone());
        client.session().set_session("tok", UserSummary::new("u1", Role::IntendedParent));

        let request = ApiRequest::post("/search")
            .query("role", "INTENDED_PARENT")
            .query("q", "a b&c")
            .json(&json!({"page": 2}))
            .unwrap();
        client.request(request).await.unwrap();

        let sent = stub.last_request().unwrap();
        assert_eq!(
            sent.url.as_str(),
            "http://localhost:5000/api/search?role=INTENDED_PARENT&q=a+b%26c"
        );
        assert_eq!(sent.header("Content-Type"), Some("application/json"));
        assert_eq!(sent.body.as_deref(), Some(br#"{"page":2}"#.as_slice()));
    }

    #[tokio::test]
    async fn test_no_content_type_without_body() {
        let stub = StubTransport::new();
        stub.push_json(200, json!({}));
        let client = client(stub.clone());
        client.session().set_session("tok", UserSummary::new("u1", Role::Admin));

        client.request(ApiRequest::get("/auth/me")).await.unwrap();

        let sent = stub.last_request().unwrap();
        assert_eq!(sent.header("Content-Type"), None);
        assert!(sent.body.is_none());
    }

    #[tokio::test]
    async fn test_401_clears_session() {
        let stub = StubTransport::new();
        stub.push_json(401, json!({"error": "Token expired"}));
        let client = client(stub.clone());
        client.session().set_session("stale", UserSummary::new("u1", Role::Donor));

        let err = client.request(ApiRequest::get("/connections")).await.unwrap_err();

        assert_eq!(err.kind, ErrorKind::Auth);
        assert_eq!(err.status_code, Some(401));
        assert_eq!(err.message, "Token expired");
        assert_eq!(client.session().token(), None);
        assert_eq!(client.session().user(), None);
    }

    #[test]
    fn test_from_settings_validates() {
        use std::time::Duration;

        let mut settings = Settings::default();
        settings.http_timeout = Some(Duration::ZERO);
        assert!(matches!(
            ApiClient::from_settings(&settings),
            Err(ConfigError::InvalidValue { .. })
        ));

        settings.http_timeout = Some(Duration::from_secs(30));
        let client = ApiClient::from_settings(&settings).unwrap();
        assert_eq!(client.endpoint().current(), settings.endpoint);
        assert!(!client.session().is_authenticated());
    }

    #[derive(Debug)]
    struct ReloginTransport {
        session: Arc<SessionStore>,
    }

    #[async_trait::async_trait]
    impl Transport for ReloginTransport {
        async fn send(&self, _request: TransportRequest) -> Result<TransportResponse, TransportError> {
            self.session
                .set_session("fresh", UserSummary::new("u2", Role::Donor));
            Ok(TransportResponse::new(401, br#"{"message": "Token expired"}"#.to_vec()))
        }
    }

    #[tokio::test]
    async fn test_stale_401_keeps_newer_session() {
        let session = Arc::new(SessionStore::new());
        session.set_session("stale", UserSummary::new("u1", Role::Donor));
        let client = ApiClient::new(
            Arc::new(EndpointStore::new(crate::services::endpoint::EndpointConfig::localhost())),
            session.clone(),
            ReloginTransport {
                session: session.clone(),
            },
        );

        let err = client.request(ApiRequest::get("/wallet/balance")).await.unwrap_err();

        assert_eq!(err.kind, ErrorKind::Auth);
        assert_eq!(session.token().as_deref(), Some("fresh"));
        assert_eq!(session.user().map(|u| u.id), Some("u2".to_string()));
    }

    #[tokio::test]
    async fn test_403_clears_session() {
        let stub = StubTransport::new();
        stub.push_text(403, "Forbidden");
        let client = client(stub.clone());
        client.session().set_session("tok", UserSummary::new("u1", Role::Agency));

        let err = client.request(ApiRequest::get("/agencies/a1/roster")).await.unwrap_err();

        assert_eq!(err.kind, ErrorKind::Auth);
        assert_eq!(err.status_code, Some(403));
        assert!(!client.session().is_authenticated());
    }

    #[tokio::test]
    async fn test_422_carries_details() {
        let stub = StubTransport::new();
        stub.push_json(422, json!({"field": "email", "message": "invalid"}));
        let client = client(stub.clone());

        let err = client
            .request(ApiRequest::post("/auth/register").public())
            .await
            .unwrap_err();

        assert_eq!(err.kind, ErrorKind::Validation);
        assert_eq!(err.status_code, Some(422));
        assert_eq!(err.details, Some(json!({"field": "email", "message": "invalid"})));
        assert_eq!(err.message, "invalid");
    }

    #[tokio::test]
    async fn test_400_with_plain_text_body() {
        let stub = StubTransport::new();
        stub.push_text(400, "bad input");
        let client = client(stub.clone());

        let err = client.request(ApiRequest::post("/auth/login").public()).await.unwrap_err();

        assert_eq!(err.kind, ErrorKind::Validation);
        assert_eq!(err.details, Some(json!("bad input")));
    }

    #[tokio::test]
    async fn test_validation_keeps_session() {
        let stub = StubTransport::new();
        stub.push_json(400, json!({"message": "missing file"}));
        let client = client(stub.clone());
        client.session().set_session("tok", UserSummary::new("u1", Role::Surrogate));

        client.request(ApiRequest::post("/kyc/documents")).await.unwrap_err();

        assert!(client.session().is_authenticated());
    }

    #[tokio::test]
    async fn test_5xx_is_server() {
        for status in [500u16, 502, 503] {
            let stub = StubTransport::new();
            stub.push_text(status, "<html>oops</html>");
            let client = client(stub.clone());

            let err = client.request(ApiRequest::get("/journey").public()).await.unwrap_err();

            assert_eq!(err.kind, ErrorKind::Server);
            assert_eq!(err.status_code, Some(status));
        }
    }

    #[tokio::test]
    async fn test_200_with_non_json_body_is_unknown() {
        let stub = StubTransport::new();
        stub.push_text(200, "<!doctype html><p>maintenance</p>");
        let client = client(stub.clone());

        let err = client.request(ApiRequest::get("/notifications").public()).await.unwrap_err();

        assert_eq!(err.kind, ErrorKind::Unknown);
        assert_eq!(err.status_code, Some(200));
    }

    #[tokio::test]
    async fn test_empty_success_body_is_null() {
        let stub = StubTransport::new();
        stub.push_text(204, "");
        let client = client(stub.clone());

        let value = client.request(ApiRequest::post("/notifications/n1/read").public()).await.unwrap();

        assert_eq!(value, Value::Null);
    }

    #[tokio::test]
    async fn test_unclassified_status_is_unknown() {
        let stub = StubTransport::new();
        stub.push_json(404, json!({"error": "Not found"}));
        let client = client(stub.clone());

        let err = client.request(ApiRequest::get("/agencies/x/roster").public()).await.unwrap_err();

        assert_eq!(err.kind, ErrorKind::Unknown);
        assert_eq!(err.status_code, Some(404));
        assert_eq!(err.message, "Not found");
    }

    #[tokio::test]
    async fn test_transport_failures() {
        let stub = StubTransport::new();
        stub.push_error(TransportError::Connect("connection refused".to_string()));
        stub.push_error(TransportError::Timeout("deadline elapsed".to_string()));
        let client = client(stub.clone());

        let first = client.request(ApiRequest::get("/wallet/transactions").public()).await.unwrap_err();
        let second = client.request(ApiRequest::get("/wallet/transactions").public()).await.unwrap_err();

        assert_eq!(first.kind, ErrorKind::Network);
        assert_eq!(first.status_code, None);
        assert_eq!(second.kind, ErrorKind::Timeout);
    }

    #[tokio::test]
    async fn test_config_change_applies_to_next_request() {
        let stub = StubTransport::new();
        stub.push_json(200, json!({}));
        stub.push_json(200, json!({}));
        let client = client(stub.clone());

        client.request(ApiRequest::get("/referrals/code").public()).await.unwrap();
        client.endpoint().use_production();
        client.request(ApiRequest::get("/referrals/code").public()).await.unwrap();

        let urls: Vec<String> = stub.requests().iter().map(|r| r.url.to_string()).collect();
        assert_eq!(
            urls,
            vec![
                "http://localhost:5000/api/referrals/code".to_string(),
                "https://api.surromatch.com/api/referrals/code".to_string(),
            ]
        );
    }

    #[tokio::test]
    async fn test_request_as_shape_mismatch_is_unknown() {
        #[derive(Debug, serde::Deserialize)]
        struct Expected {
            #[allow(dead_code)]
            code: String,
        }

        let stub = StubTransport::new();
        stub.push_json(200, json!({"unexpected": 1}));
        let client = client(stub.clone());

        let err = client
            .request_as::<Expected>(ApiRequest::get("/referrals/code").public())
            .await
            .unwrap_err();

        assert_eq!(err.kind, ErrorKind::Unknown);
    }
}
