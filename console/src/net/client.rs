//! HTTP client wrapper shared by every resource façade.
//!
//! SYSTEM CONTEXT
//! ==============
//! Pages never talk to the transport directly. They call a façade method,
//! which builds an endpoint and `RequestOptions`; `ApiClient::request` turns
//! that into a `PreparedRequest` (base URL, bearer token, content type), sends
//! it, and folds the outcome into `ApiResult`.
//!
//! ERROR HANDLING
//! ==============
//! Nothing here panics or propagates a transport failure: network errors,
//! HTTP error statuses, and undecodable bodies all come back as `ApiError`
//! so callers decide how to surface them.

#[cfg(test)]
#[path = "client_test.rs"]
mod client_test;

use std::sync::Arc;

use serde::Serialize;
use serde::de::{DeserializeOwned, IgnoredAny};
use serde_json::Value;

use super::error::{ApiError, ApiResult};
use super::transport::{BrowserTransport, FormPart, Method, PreparedRequest, RawResponse, RequestBody, Transport};
use crate::config::ConsoleConfig;
use crate::util::storage::{BrowserStorage, KeyValueStore, TOKEN_KEY};

/// Method, query pairs, and body for one call.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RequestOptions {
    pub method: Method,
    pub query: Vec<(String, String)>,
    pub body: RequestBody,
}

impl RequestOptions {
    pub fn new(method: Method) -> Self {
        Self { method, query: Vec::new(), body: RequestBody::Empty }
    }

    pub fn get() -> Self {
        Self::new(Method::Get)
    }

    pub fn delete() -> Self {
        Self::new(Method::Delete)
    }

    /// Append a query parameter; order is preserved on the wire.
    #[must_use]
    pub fn query(mut self, key: &str, value: impl ToString) -> Self {
        self.query.push((key.to_owned(), value.to_string()));
        self
    }

    /// `limit` + `offset` pagination pair.
    #[must_use]
    pub fn page(self, limit: u32, offset: u32) -> Self {
        self.query("limit", limit).query("offset", offset)
    }

    /// Serialize `body` as the JSON request document.
    ///
    /// # Errors
    ///
    /// Returns `ApiError::Encode` if `body` cannot be serialized.
    pub fn json<B: Serialize + ?Sized>(mut self, body: &B) -> ApiResult<Self> {
        let json = serde_json::to_string(body).map_err(|e| ApiError::Encode(e.to_string()))?;
        self.body = RequestBody::Json(json);
        Ok(self)
    }

    #[must_use]
    pub fn multipart(mut self, parts: Vec<(String, FormPart)>) -> Self {
        self.body = RequestBody::Multipart(parts);
        self
    }
}

/// Percent-encode one path segment.
pub fn encode_segment(segment: &str) -> String {
    url::form_urlencoded::byte_serialize(segment.as_bytes())
        .collect::<String>()
        .replace('+', "%20")
}

/// Error text for a non-success response: the body's `message` when it has
/// one, otherwise a generic status line.
pub fn http_error_message(status: u16, body: &str) -> String {
    serde_json::from_str::<Value>(body)
        .ok()
        .and_then(|v| v.get("message").and_then(Value::as_str).map(str::to_owned))
        .filter(|m| !m.is_empty())
        .unwrap_or_else(|| format!("HTTP error! status: {status}"))
}

fn is_json(content_type: Option<&str>) -> bool {
    content_type.is_some_and(|ct| ct.to_ascii_lowercase().contains("application/json"))
}

/// Fold a completed response into a result. Non-JSON (or empty) success
/// bodies are "no content" and decode to `None`.
///
/// # Errors
///
/// `ApiError::Http` for non-2xx statuses, `ApiError::Decode` for JSON bodies
/// that do not match `R`.
pub fn decode_response<R: DeserializeOwned>(raw: RawResponse) -> ApiResult<Option<R>> {
    if !raw.is_success() {
        return Err(ApiError::Http { status: raw.status, message: http_error_message(raw.status, &raw.body) });
    }
    if !is_json(raw.content_type.as_deref()) || raw.body.trim().is_empty() {
        return Ok(None);
    }
    serde_json::from_str(&raw.body)
        .map(Some)
        .map_err(|e| ApiError::Decode(e.to_string()))
}

/// REST client bound to a base URL, a token store, and a transport.
#[derive(Clone)]
pub struct ApiClient<T = BrowserTransport> {
    base_url: Arc<str>,
    storage: Arc<dyn KeyValueStore>,
    transport: T,
}

/// Client used by pages in the browser.
pub type BrowserClient = ApiClient<BrowserTransport>;

impl BrowserClient {
    pub fn browser(config: &ConsoleConfig) -> Self {
        Self::new(&config.api_base_url, Arc::new(BrowserStorage), BrowserTransport)
    }
}

impl<T> ApiClient<T> {
    pub fn new(base_url: &str, storage: Arc<dyn KeyValueStore>, transport: T) -> Self {
        Self { base_url: Arc::from(base_url.trim_end_matches('/')), storage, transport }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    pub fn storage(&self) -> &Arc<dyn KeyValueStore> {
        &self.storage
    }

    /// Resolve URL and headers for `endpoint` without sending anything.
    pub fn prepare(&self, endpoint: &str, options: RequestOptions) -> PreparedRequest {
        let mut url = format!("{}{}", self.base_url, endpoint);
        if !options.query.is_empty() {
            let query = url::form_urlencoded::Serializer::new(String::new())
                .extend_pairs(&options.query)
                .finish();
            url.push(if url.contains('?') { '&' } else { '?' });
            url.push_str(&query);
        }

        let mut headers = Vec::with_capacity(2);
        if !options.body.is_multipart() {
            headers.push(("Content-Type".to_owned(), "application/json".to_owned()));
        }
        if let Some(token) = self.storage.get(TOKEN_KEY).filter(|t| !t.is_empty()) {
            headers.push(("Authorization".to_owned(), format!("Bearer {token}")));
        }

        PreparedRequest { method: options.method, url, headers, body: options.body }
    }
}

impl<T: Transport> ApiClient<T> {
    /// Send one request and decode its body.
    ///
    /// # Errors
    ///
    /// See `ApiError`; this never panics on transport or decode failures.
    pub async fn request<R: DeserializeOwned>(&self, endpoint: &str, options: RequestOptions) -> ApiResult<Option<R>> {
        let prepared = self.prepare(endpoint, options);
        let method = prepared.method.as_str();
        log::debug!("api: {method} {endpoint}");

        let result = match self.transport.send(prepared).await {
            Ok(raw) => decode_response(raw),
            Err(message) => Err(ApiError::Network(message)),
        };
        if let Err(err) = &result {
            log::warn!("api: {method} {endpoint} failed: {err}");
        }
        result
    }

    /// Request a collection; "no content" becomes an empty list.
    ///
    /// # Errors
    ///
    /// Propagates `request` errors.
    pub async fn request_list<R: DeserializeOwned>(&self, endpoint: &str, options: RequestOptions) -> ApiResult<Vec<R>> {
        Ok(self.request::<Vec<R>>(endpoint, options).await?.unwrap_or_default())
    }

    /// Request where only success matters; any body is discarded.
    ///
    /// # Errors
    ///
    /// Propagates `request` errors.
    pub async fn execute(&self, endpoint: &str, options: RequestOptions) -> ApiResult<()> {
        self.request::<IgnoredAny>(endpoint, options).await.map(|_| ())
    }
}
