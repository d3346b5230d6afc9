//! # Request Descriptor
//!
//! [`ApiRequest`] describes one call: method, route under the base path,
//! query pairs, optional JSON body and whether a session is required. It is
//! built, handed to [`ApiClient::request`](super::ApiClient::request) and
//! consumed there.

use std::fmt;

use serde::Serialize;
use serde_json::Value;

use crate::core::error::ApiError;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Method {
    Get,
    Post,
    Put,
    Patch,
    Delete,
}

impl Method {
    pub fn as_str(&self) -> &'static str {
        match self {
            Method::Get => "GET",
            Method::Post => "POST",
            Method::Put => "PUT",
            Method::Patch => "PATCH",
            Method::Delete => "DELETE",
        }
    }
}

impl fmt::Display for Method {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl From<Method> for reqwest::Method {
    fn from(method: Method) -> Self {
        match method {
            Method::Get => reqwest::Method::GET,
            Method::Post => reqwest::Method::POST,
            Method::Put => reqwest::Method::PUT,
            Method::Patch => reqwest::Method::PATCH,
            Method::Delete => reqwest::Method::DELETE,
        }
    }
}

/// One API call. Requires a session unless marked [`public`](Self::public).
#[derive(Debug, Clone, PartialEq)]
pub struct ApiRequest {
    pub method: Method,
    pub path: String,
    pub query: Vec<(String, String)>,
    pub body: Option<Value>,
    pub requires_auth: bool,
}

impl ApiRequest {
    pub fn new(method: Method, path: impl Into<String>) -> Self {
        Self {
            method,
            path: path.into(),
            query: Vec::new(),
            body: None,
            requires_auth: true,
        }
    }

    pub fn get(path: impl Into<String>) -> Self {
        Self::new(Method::Get, path)
    }

    pub fn post(path: impl Into<String>) -> Self {
        Self::new(Method::Post, path)
    }

    pub fn put(path: impl Into<String>) -> Self {
        Self::new(Method::Put, path)
    }

    pub fn patch(path: impl Into<String>) -> Self {
        Self::new(Method::Patch, path)
    }

    pub fn delete(path: impl Into<String>) -> Self {
        Self::new(Method::Delete, path)
    }

    pub fn query(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.query.push((key.into(), value.into()));
        self
    }

    /// Attach a JSON body. Serialization failure is reported as `UNKNOWN`.
    pub fn json<B: Serialize + ?Sized>(mut self, body: &B) -> Result<Self, ApiError> {
        let value = serde_json::to_value(body)
            .map_err(|e| ApiError::unknown(format!("Failed to serialize request body: {}", e)))?;
        self.body = Some(value);
        Ok(self)
    }

    pub fn with_body(mut self, body: Value) -> Self {
        self.body = Some(body);
        self
    }

    /// Send without requiring a session. A held token is still attached.
    pub fn public(mut self) -> Self {
        self.requires_auth = false;
        self
    }
}

/// Percent-encode one id for use as a path segment.
///
/// Blank ids and the dot segments `.` and `..` are rejected as `VALIDATION`;
/// URL parsing would otherwise resolve the dots and send the request to a
/// different route.
pub fn path_segment(field: &'static str, id: &str) -> Result<String, ApiError> {
    let trimmed = id.trim();
    let message = if trimmed.is_empty() {
        format!("{} is required", field)
    } else if trimmed == "." || trimmed == ".." {
        format!("{} is not a valid id", field)
    } else {
        return Ok(urlencoding::encode(id).into_owned());
    };
    Err(ApiError::validation(message.clone())
        .with_details(serde_json::json!({"field": field, "message": message})))
}
