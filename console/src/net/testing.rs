//! Test doubles for exercising façades without a browser.

use std::collections::VecDeque;
use std::sync::{Arc, Mutex};

use super::client::ApiClient;
use super::transport::{PreparedRequest, RawResponse, Transport};
use crate::util::storage::MemoryStorage;

pub const BASE: &str = "http://api.test";

/// Records every request and replies with queued responses (204 when the
/// queue is empty).
#[derive(Clone, Default)]
pub struct RecordingTransport {
    requests: Arc<Mutex<Vec<PreparedRequest>>>,
    replies: Arc<Mutex<VecDeque<Result<RawResponse, String>>>>,
}

impl RecordingTransport {
    pub fn reply(&self, reply: Result<RawResponse, String>) -> &Self {
        self.replies.lock().expect("replies lock").push_back(reply);
        self
    }

    pub fn reply_json(&self, status: u16, body: serde_json::Value) -> &Self {
        self.reply(Ok(RawResponse::json(status, body.to_string())))
    }

    pub fn requests(&self) -> Vec<PreparedRequest> {
        self.requests.lock().expect("requests lock").clone()
    }

    pub fn last(&self) -> PreparedRequest {
        self.requests().pop().expect("at least one request")
    }
}

impl Transport for RecordingTransport {
    async fn send(&self, request: PreparedRequest) -> Result<RawResponse, String> {
        self.requests.lock().expect("requests lock").push(request);
        self.replies
            .lock()
            .expect("replies lock")
            .pop_front()
            .unwrap_or_else(|| Ok(RawResponse { status: 204, content_type: None, body: String::new() }))
    }
}

/// Client with a stored bearer token and a recording transport.
pub fn client_with_token(token: &str) -> (ApiClient<RecordingTransport>, RecordingTransport) {
    let transport = RecordingTransport::default();
    let client = ApiClient::new(BASE, Arc::new(MemoryStorage::with_token(token)), transport.clone());
    (client, transport)
}

/// Client with an empty store.
pub fn anonymous_client() -> (ApiClient<RecordingTransport>, RecordingTransport) {
    let transport = RecordingTransport::default();
    let client = ApiClient::new(BASE, Arc::new(MemoryStorage::new()), transport.clone());
    (client, transport)
}
