//! HTTP transport seam.
//!
//! The dispatcher describes each call as a plain-data [`HttpRequest`] and
//! hands it to a [`Transport`], which performs the round-trip and enforces the
//! status policy. [`ReqwestTransport`] is the default; tests and embedders can
//! inject their own.

use std::time::Duration;

use async_trait::async_trait;
use reqwest::{Client, Response};
use url::Url;

use crate::error::{Result, SketchwareError};

/// HTTP method of a request.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HttpMethod {
    Get,
    Post,
}

/// Body of an outgoing request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RequestBody {
    /// No body.
    Empty,
    /// Already-serialized JSON.
    Json(Vec<u8>),
    /// Opaque bytes, sent with the given content type.
    Raw {
        bytes: Vec<u8>,
        content_type: &'static str,
    },
}

impl RequestBody {
    /// Size of the payload in bytes.
    pub fn len(&self) -> usize {
        match self {
            Self::Empty => 0,
            Self::Json(bytes) | Self::Raw { bytes, .. } => bytes.len(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// An HTTP request described as plain data.
#[derive(Debug, Clone)]
pub struct HttpRequest {
    pub method: HttpMethod,
    pub url: Url,
    pub body: RequestBody,
}

/// A successful HTTP response.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HttpResponse {
    /// Status code, always in the success range.
    pub status: u16,
    /// Raw response body.
    pub body: Vec<u8>,
}

impl HttpResponse {
    /// A `200 OK` response carrying `body`.
    pub fn ok(body: Vec<u8>) -> Self {
        Self { status: 200, body }
    }
}

/// Performs one HTTP round-trip.
///
/// Implementations must be safe to share between concurrent calls and must
/// report non-success statuses as errors; the returned response is always a
/// successful one.
#[async_trait]
pub trait Transport: Send + Sync {
    /// Send the request and return the response status and body.
    ///
    /// # Errors
    ///
    /// Returns an error on connection failure or a non-success status.
    async fn send(&self, request: HttpRequest) -> Result<HttpResponse>;
}

/// Default transport backed by a pooled `reqwest::Client`.
#[derive(Debug, Clone)]
pub struct ReqwestTransport {
    http: Client,
}

impl ReqwestTransport {
    /// Build a transport with the given user agent and optional timeout.
    ///
    /// # Errors
    ///
    /// Returns an error if the TLS backend cannot be initialised.
    pub fn new(user_agent: &str, timeout: Option<Duration>) -> Result<Self> {
        let mut builder = Client::builder()
            .user_agent(user_agent)
            .brotli(true)
            .gzip(true)
            .deflate(true);
        if let Some(timeout) = timeout {
            builder = builder.timeout(timeout);
        }
        let http = builder.build().map_err(SketchwareError::Http)?;
        Ok(Self { http })
    }

    /// Wrap an existing reqwest client.
    pub fn from_client(http: Client) -> Self {
        Self { http }
    }

    /// Check response status and convert errors.
    async fn check_response(response: Response) -> Result<Response> {
        let status = response.status();

        if status.is_success() {
            return Ok(response);
        }

        let message = Self::extract_error_message(response, status).await;
        Err(SketchwareError::Status {
            status_code: status.as_u16(),
            message,
        })
    }

    /// Extract error message from a failed response.
    async fn extract_error_message(response: Response, status: reqwest::StatusCode) -> String {
        let body = match response.text().await {
            Ok(b) if !b.trim().is_empty() => b,
            _ => return format!("HTTP {status}"),
        };

        // Try to parse as JSON and extract message field
        if let Ok(json) = serde_json::from_str::<serde_json::Value>(&body) {
            if let Some(msg) = json.get("message").and_then(|m| m.as_str()) {
                return msg.to_string();
            }
            if let Some(err) = json.get("error").and_then(|m| m.as_str()) {
                return err.to_string();
            }
        }

        body
    }
}

#[async_trait]
impl Transport for ReqwestTransport {
    async fn send(&self, request: HttpRequest) -> Result<HttpResponse> {
        let builder = match request.method {
            HttpMethod::Get => self.http.get(request.url),
            HttpMethod::Post => self.http.post(request.url),
        };

        let builder = match request.body {
            RequestBody::Empty => builder,
            RequestBody::Json(bytes) => builder
                .header(reqwest::header::CONTENT_TYPE, "application/json")
                .body(bytes),
            RequestBody::Raw {
                bytes,
                content_type,
            } => builder
                .header(reqwest::header::CONTENT_TYPE, content_type)
                .body(bytes),
        };

        let response = builder.send().await.map_err(SketchwareError::Http)?;
        let response = Self::check_response(response).await?;
        let status = response.status().as_u16();
        let bytes = response.bytes().await.map_err(SketchwareError::Http)?;
        Ok(HttpResponse {
            status,
            body: bytes.to_vec(),
        })
    }
}
