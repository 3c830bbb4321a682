use std::collections::VecDeque;
use std::sync::{Arc, Mutex};

use async_trait::async_trait;

use crate::error::RpcError;

use super::{HttpRequest, HttpResponse, HttpTransport};

/// A canned reply handed out by [`MockTransport`].
#[derive(Debug, Clone)]
enum MockReply {
    Http(HttpResponse),
    TransportFailure(String),
}

/// A request captured by [`MockTransport`], with the body parsed as JSON.
#[derive(Debug, Clone)]
pub struct RecordedRequest {
    pub url: String,
    pub headers: Vec<(String, String)>,
    pub json: serde_json::Value,
}

impl RecordedRequest {
    /// Case-insensitive lookup of the last header with `name`.
    pub fn header(&self, name: &str) -> Option<&str> {
        self.headers
            .iter()
            .rev()
            .find(|(k, _)| k.eq_ignore_ascii_case(name))
            .map(|(_, v)| v.as_str())
    }
}

/// A mock HTTP transport for testing. Replays queued replies in order; the
/// final reply is repeated once the queue is down to one entry. Every
/// request is recorded for later inspection.
pub struct MockTransport {
    replies: Mutex<VecDeque<MockReply>>,
    requests: Mutex<Vec<RecordedRequest>>,
}

impl MockTransport {
    pub fn builder() -> MockTransportBuilder {
        MockTransportBuilder {
            replies: VecDeque::new(),
        }
    }

    pub fn requests(&self) -> Vec<RecordedRequest> {
        self.requests.lock().expect("mock lock poisoned").clone()
    }

    pub fn last_request(&self) -> RecordedRequest {
        self.requests()
            .pop()
            .expect("mock transport received no requests")
    }

    fn next_reply(&self) -> MockReply {
        let mut replies = self.replies.lock().expect("mock lock poisoned");
        if replies.len() > 1 {
            return replies.pop_front().expect("queue checked non-empty");
        }
        replies
            .front()
            .cloned()
            .expect("mock transport has no replies queued")
    }
}

pub struct MockTransportBuilder {
    replies: VecDeque<MockReply>,
}

impl MockTransportBuilder {
    pub fn respond(mut self, status: u16, body: impl Into<Vec<u8>>) -> Self {
        self.replies.push_back(MockReply::Http(HttpResponse {
            status,
            body: body.into(),
        }));
        self
    }

    /// Queue a 200 reply whose envelope carries `result`.
    pub fn respond_ok(self, result: serde_json::Value) -> Self {
        let body = serde_json::json!({"id": "0", "jsonrpc": "2.0", "result": result}).to_string();
        self.respond(200, body)
    }

    pub fn fail_transport(mut self, message: &str) -> Self {
        self.replies
            .push_back(MockReply::TransportFailure(message.to_owned()));
        self
    }

    pub fn build(self) -> Arc<MockTransport> {
        Arc::new(MockTransport {
            replies: Mutex::new(self.replies),
            requests: Mutex::new(Vec::new()),
        })
    }
}

#[async_trait]
impl HttpTransport for MockTransport {
    async fn post(&self, request: HttpRequest<'_>) -> Result<HttpResponse, RpcError> {
        let json = serde_json::from_slice(request.body).expect("client must send valid JSON");
        self.requests
            .lock()
            .expect("mock lock poisoned")
            .push(RecordedRequest {
                url: request.url.to_owned(),
                headers: request.headers.to_vec(),
                json,
            });

        match self.next_reply() {
            MockReply::Http(response) => Ok(response),
            MockReply::TransportFailure(message) => Err(RpcError::transport(message)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn request<'a>(body: &'a [u8], headers: &'a [(String, String)]) -> HttpRequest<'a> {
        HttpRequest {
            url: "http://mock/json_rpc",
            headers,
            body,
        }
    }

    #[tokio::test]
    async fn replays_queue_then_repeats_last() {
        let mock = MockTransport::builder()
            .respond(200, "first")
            .respond(503, "second")
            .build();

        let statuses = [
            mock.post(request(b"{}", &[])).await.unwrap().status,
            mock.post(request(b"{}", &[])).await.unwrap().status,
            mock.post(request(b"{}", &[])).await.unwrap().status,
        ];
        assert_eq!(statuses, [200, 503, 503]);
        assert_eq!(mock.requests().len(), 3);
    }

    #[tokio::test]
    async fn header_lookup_is_case_insensitive() {
        let mock = MockTransport::builder().respond(200, "{}").build();
        let headers = vec![("X-Api-Key".to_owned(), "secret".to_owned())];
        mock.post(request(b"{}", &headers)).await.unwrap();
        assert_eq!(mock.last_request().header("x-api-key"), Some("secret"));
    }
}
