//! Wire transport for prepared requests.
//!
//! SYSTEM CONTEXT
//! ==============
//! `ApiClient` decides *what* to send (URL, headers, encoding); a `Transport`
//! only moves bytes. The browser implementation uses `gloo-net`; on the server
//! the transport reports that backend calls are browser-only, mirroring how the
//! SSR pass never fetches data.

use std::future::Future;

use crate::net::types::EvidenceFile;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Method {
    Get,
    Post,
    Put,
    Patch,
    Delete,
}

impl Method {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Get => "GET",
            Self::Post => "POST",
            Self::Put => "PUT",
            Self::Patch => "PATCH",
            Self::Delete => "DELETE",
        }
    }
}

/// One named part of a multipart body.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum FormPart {
    Text(String),
    File(EvidenceFile),
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub enum RequestBody {
    #[default]
    Empty,
    /// Serialized JSON document.
    Json(String),
    /// Ordered `(name, part)` pairs; the platform picks the boundary.
    Multipart(Vec<(String, FormPart)>),
}

impl RequestBody {
    pub fn is_multipart(&self) -> bool {
        matches!(self, Self::Multipart(_))
    }
}

/// Fully resolved request, ready for the wire.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PreparedRequest {
    pub method: Method,
    pub url: String,
    pub headers: Vec<(String, String)>,
    pub body: RequestBody,
}

impl PreparedRequest {
    /// Case-insensitive header lookup.
    pub fn header(&self, name: &str) -> Option<&str> {
        self.headers
            .iter()
            .find(|(k, _)| k.eq_ignore_ascii_case(name))
            .map(|(_, v)| v.as_str())
    }
}

/// Status, content type, and text body of a completed response.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RawResponse {
    pub status: u16,
    pub content_type: Option<String>,
    pub body: String,
}

impl RawResponse {
    pub fn json(status: u16, body: impl Into<String>) -> Self {
        Self { status, content_type: Some("application/json".to_owned()), body: body.into() }
    }

    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }
}

/// Sends a prepared request. `Err` carries the failure message of a request
/// that never completed.
pub trait Transport {
    fn send(&self, request: PreparedRequest) -> impl Future<Output = Result<RawResponse, String>>;
}

/// `fetch`-backed transport for the browser.
#[derive(Clone, Copy, Debug, Default)]
pub struct BrowserTransport;

impl Transport for BrowserTransport {
    #[allow(clippy::unused_async)]
    async fn send(&self, request: PreparedRequest) -> Result<RawResponse, String> {
        #[cfg(feature = "hydrate")]
        {
            browser::send(request).await
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = request;
            Err("not available on server".to_owned())
        }
    }
}

#[cfg(feature = "hydrate")]
mod browser {
    use gloo_net::http::{Request, RequestBuilder};
    use wasm_bindgen::JsValue;

    use super::{FormPart, Method, PreparedRequest, RawResponse, RequestBody};

    fn js_error(err: &JsValue) -> String {
        err.as_string().unwrap_or_else(|| format!("{err:?}"))
    }

    fn builder(method: Method, url: &str) -> RequestBuilder {
        match method {
            Method::Get => Request::get(url),
            Method::Post => Request::post(url),
            Method::Put => Request::put(url),
            Method::Patch => Request::patch(url),
            Method::Delete => Request::delete(url),
        }
    }

    fn form_data(parts: &[(String, FormPart)]) -> Result<web_sys::FormData, String> {
        let form = web_sys::FormData::new().map_err(|e| js_error(&e))?;
        for (name, part) in parts {
            match part {
                FormPart::Text(value) => form.append_with_str(name, value).map_err(|e| js_error(&e))?,
                FormPart::File(file) => {
                    let bytes = js_sys::Uint8Array::from(file.bytes.as_slice());
                    let sequence = js_sys::Array::of1(&bytes);
                    let options = web_sys::BlobPropertyBag::new();
                    options.set_type(&file.content_type);
                    let blob = web_sys::Blob::new_with_u8_array_sequence_and_options(&sequence, &options)
                        .map_err(|e| js_error(&e))?;
                    form.append_with_blob_and_filename(name, &blob, &file.file_name)
                        .map_err(|e| js_error(&e))?;
                }
            }
        }
        Ok(form)
    }

    pub(super) async fn send(request: PreparedRequest) -> Result<RawResponse, String> {
        let mut builder = builder(request.method, &request.url);
        for (name, value) in &request.headers {
            builder = builder.header(name, value);
        }
        let request = match &request.body {
            RequestBody::Empty => builder.build(),
            RequestBody::Json(json) => builder.body(json.as_str()),
            RequestBody::Multipart(parts) => builder.body(form_data(parts)?),
        }
        .map_err(|e| e.to_string())?;

        let response = request.send().await.map_err(|e| e.to_string())?;
        let status = response.status();
        let content_type = response.headers().get("content-type");
        let body = response.text().await.map_err(|e| e.to_string())?;
        Ok(RawResponse { status, content_type, body })
    }
}
