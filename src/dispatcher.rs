//! Request dispatcher.
//!
//! Every endpoint method funnels through one of the `Dispatcher` methods,
//! which encode the payload, perform the call through the injected
//! [`Transport`] and decode the body. This is the only place where an error
//! becomes a value: each method resolves to an [`Outcome`], never a `Result`.

use std::sync::Arc;

use serde::de::DeserializeOwned;
use serde::Serialize;
use url::Url;

use crate::error::{Result, SketchwareError};
use crate::outcome::Outcome;
use crate::transport::{HttpMethod, HttpRequest, RequestBody, Transport};

const OCTET_STREAM: &str = "application/octet-stream";

/// Issues single calls against the service base URL.
///
/// Cheaply cloneable; clones share the same transport.
#[derive(Clone)]
pub struct Dispatcher {
    transport: Arc<dyn Transport>,
    base_url: Arc<Url>,
    logging: bool,
}

impl std::fmt::Debug for Dispatcher {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Dispatcher")
            .field("base_url", &self.base_url.as_str())
            .field("logging", &self.logging)
            .finish_non_exhaustive()
    }
}

impl Dispatcher {
    /// Create a dispatcher for `base_url`.
    ///
    /// A trailing `/` is added to the base URL if missing so endpoint paths
    /// are always joined beneath it.
    ///
    /// # Errors
    ///
    /// Returns an error if the base URL is invalid.
    pub fn new(transport: Arc<dyn Transport>, base_url: &str, logging: bool) -> Result<Self> {
        let base_url_str = if base_url.ends_with('/') {
            base_url.to_string()
        } else {
            format!("{base_url}/")
        };
        let base_url = Url::parse(&base_url_str)?;
        if base_url.cannot_be_a_base() {
            return Err(SketchwareError::Config(format!(
                "base URL '{base_url}' cannot carry endpoint paths"
            )));
        }

        Ok(Self {
            transport,
            base_url: Arc::new(base_url),
            logging,
        })
    }

    /// Get the base URL.
    pub fn base_url(&self) -> &Url {
        &self.base_url
    }

    /// Resolve an endpoint path against the base URL.
    ///
    /// # Errors
    ///
    /// Returns an error if the joined URL is invalid.
    pub fn endpoint_url(&self, path: &str) -> Result<Url> {
        Ok(self.base_url.join(path.trim_start_matches('/'))?)
    }

    /// GET `path` and decode the body as JSON.
    pub async fn get_json<T: DeserializeOwned>(&self, path: &str) -> Outcome<T> {
        self.call(HttpMethod::Get, path, &[], Ok(RequestBody::Empty), decode_json)
            .await
    }

    /// POST `body` as JSON and decode the response as JSON.
    pub async fn post_json<B, T>(&self, path: &str, body: &B) -> Outcome<T>
    where
        B: Serialize + ?Sized + Sync,
        T: DeserializeOwned,
    {
        self.call(HttpMethod::Post, path, &[], encode_json(body), decode_json)
            .await
    }

    /// POST `body` as JSON and return the response as text.
    pub async fn post_text<B>(&self, path: &str, body: &B) -> Outcome<String>
    where
        B: Serialize + ?Sized + Sync,
    {
        self.call(HttpMethod::Post, path, &[], encode_json(body), decode_text)
            .await
    }

    /// POST `body` as JSON and return the raw response bytes.
    pub async fn post_bytes<B>(&self, path: &str, body: &B) -> Outcome<Vec<u8>>
    where
        B: Serialize + ?Sized + Sync,
    {
        self.call(HttpMethod::Post, path, &[], encode_json(body), Ok)
            .await
    }

    /// POST opaque bytes with query parameters and return the response as text.
    pub async fn post_raw(
        &self,
        path: &str,
        query: &[(&str, &str)],
        bytes: Vec<u8>,
    ) -> Outcome<String> {
        let body = RequestBody::Raw {
            bytes,
            content_type: OCTET_STREAM,
        };
        self.call(HttpMethod::Post, path, query, Ok(body), decode_text)
            .await
    }

    /// Run one call and fold every failure into the outcome.
    #[tracing::instrument(skip(self, query, body, decode), fields(base_url = %self.base_url))]
    async fn call<T, D>(
        &self,
        method: HttpMethod,
        path: &str,
        query: &[(&str, &str)],
        body: Result<RequestBody>,
        decode: D,
    ) -> Outcome<T>
    where
        D: FnOnce(Vec<u8>) -> Result<T>,
    {
        let result = async {
            let mut url = self.endpoint_url(path)?;
            if !query.is_empty() {
                url.query_pairs_mut().extend_pairs(query);
            }
            let request = HttpRequest {
                method,
                url,
                body: body?,
            };

            if self.logging {
                tracing::debug!(
                    method = ?request.method,
                    url = %request.url,
                    body_len = request.body.len(),
                    "sending request"
                );
            }

            let url = self.logging.then(|| request.url.clone());
            let response = self.transport.send(request).await?;

            if let Some(url) = url {
                tracing::debug!(
                    status = response.status,
                    url = %url,
                    body_len = response.body.len(),
                    "received response"
                );
            }

            decode(response.body)
        }
        .await;

        if let Err(err) = &result {
            if self.logging {
                tracing::warn!(error = %err, "request failed");
            }
        }

        result.into()
    }
}

fn encode_json<B: Serialize + ?Sized>(body: &B) -> Result<RequestBody> {
    Ok(RequestBody::Json(serde_json::to_vec(body)?))
}

fn decode_json<T: DeserializeOwned>(bytes: Vec<u8>) -> Result<T> {
    Ok(serde_json::from_slice(&bytes)?)
}

fn decode_text(bytes: Vec<u8>) -> Result<String> {
    Ok(String::from_utf8_lossy(&bytes).into_owned())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::transport::HttpResponse;
    use async_trait::async_trait;
    use std::sync::Mutex;

    /// Transport that records requests and replays a canned reply.
    struct StubTransport {
        reply: fn() -> Result<Vec<u8>>,
        seen: Mutex<Vec<HttpRequest>>,
    }

    impl StubTransport {
        fn new(reply: fn() -> Result<Vec<u8>>) -> Arc<Self> {
            Arc::new(Self {
                reply,
                seen: Mutex::new(Vec::new()),
            })
        }
    }

    #[async_trait]
    impl Transport for StubTransport {
        async fn send(&self, request: HttpRequest) -> Result<HttpResponse> {
            self.seen.lock().unwrap().push(request);
            (self.reply)().map(HttpResponse::ok)
        }
    }

    fn dispatcher(transport: Arc<StubTransport>) -> Dispatcher {
        Dispatcher::new(transport, "http://example.test/api", true).unwrap()
    }

    #[test]
    fn test_base_url_trailing_slash() {
        let stub = StubTransport::new(|| Ok(Vec::new()));
        let d1 = Dispatcher::new(stub.clone(), "http://example.test/api", false).unwrap();
        let d2 = Dispatcher::new(stub, "http://example.test/api/", false).unwrap();
        assert_eq!(d1.base_url().as_str(), d2.base_url().as_str());
        assert_eq!(
            d1.endpoint_url("/reqAllTags.do").unwrap().as_str(),
            "http://example.test/api/reqAllTags.do"
        );
    }

    #[test]
    fn test_rejects_invalid_base_url() {
        let stub = StubTransport::new(|| Ok(Vec::new()));
        assert!(matches!(
            Dispatcher::new(stub.clone(), "not a url", false),
            Err(SketchwareError::Url(_))
        ));
        assert!(matches!(
            Dispatcher::new(stub, "mailto:someone@example.test", false),
            Err(SketchwareError::Config(_))
        ));
    }

    #[tokio::test]
    async fn test_transport_error_becomes_failure() {
        let stub = StubTransport::new(|| {
            Err(SketchwareError::transport(std::io::Error::new(
                std::io::ErrorKind::ConnectionRefused,
                "connection refused",
            )))
        });
        let outcome: Outcome<Vec<u32>> = dispatcher(stub)
            .post_json("reqAllTags.do", &serde_json::json!({}))
            .await;

        let mut fired = false;
        outcome.on_success(|_| panic!("success handler must not run"));
        outcome.on_error(|err| {
            fired = true;
            assert!(err.is_transport());
        });
        assert!(fired);
    }

    #[tokio::test]
    async fn test_format_error_becomes_failure() {
        let stub = StubTransport::new(|| Ok(b"not json".to_vec()));
        let outcome: Outcome<Vec<u32>> = dispatcher(stub).get_json("x.txt").await;
        assert!(matches!(outcome.failure(), Some(SketchwareError::Format(_))));
    }

    #[tokio::test]
    async fn test_post_json_sends_encoded_body() {
        let stub = StubTransport::new(|| Ok(b"[1,2,3]".to_vec()));
        let outcome: Outcome<Vec<u32>> = dispatcher(stub.clone())
            .post_json("reqThings.do", &serde_json::json!({ "row_unit": 10 }))
            .await;
        assert_eq!(outcome.success(), Some(&vec![1, 2, 3]));

        let seen = stub.seen.lock().unwrap();
        assert_eq!(seen.len(), 1);
        assert_eq!(seen[0].method, HttpMethod::Post);
        assert_eq!(seen[0].url.as_str(), "http://example.test/api/reqThings.do");
        assert_eq!(seen[0].body, RequestBody::Json(br#"{"row_unit":10}"#.to_vec()));
    }

    #[tokio::test]
    async fn test_post_raw_sets_query_and_bytes() {
        let stub = StubTransport::new(|| Ok(b"ok".to_vec()));
        let outcome = dispatcher(stub.clone())
            .post_raw("upload.do", &[("session_id", "s 1")], vec![1, 2])
            .await;
        assert_eq!(outcome.success().map(String::as_str), Some("ok"));

        let seen = stub.seen.lock().unwrap();
        assert_eq!(seen[0].url.query(), Some("session_id=s+1"));
        assert!(matches!(
            &seen[0].body,
            RequestBody::Raw { bytes, content_type } if bytes == &vec![1, 2] && *content_type == OCTET_STREAM
        ));
    }

    #[tokio::test]
    async fn test_text_decoding_is_lossy() {
        let stub = StubTransport::new(|| Ok(vec![b'o', b'k', 0xff]));
        let outcome = dispatcher(stub).post_text("x.do", &serde_json::json!({})).await;
        assert_eq!(outcome.success().map(String::as_str), Some("ok\u{fffd}"));
    }
}
