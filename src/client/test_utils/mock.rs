use std::{cell::RefCell, collections::VecDeque, rc::Rc};

use serde_json::Value;

use crate::client::{
    api::transport::{HttpRequest, HttpResponse, Transport},
    model::error::ApiError,
};

/// `Transport` that answers from a script and records every request it receives.
///
/// Responses are consumed in order. A request arriving after the script is exhausted
/// fails with `ApiError::Transport`.
#[derive(Clone, Default)]
pub struct MockTransport {
    state: Rc<RefCell<MockState>>,
}

#[derive(Default)]
struct MockState {
    responses: VecDeque<Result<HttpResponse, ApiError>>,
    requests: Vec<HttpRequest>,
}

impl MockTransport {
    pub fn new() -> Self {
        Self::default()
    }

    /// Queues a response with a JSON body.
    pub fn push_json(&self, status: u16, body: Value) {
        self.push_raw(status, &body.to_string());
    }

    /// Queues a response with an arbitrary body.
    pub fn push_raw(&self, status: u16, body: &str) {
        self.state.borrow_mut().responses.push_back(Ok(HttpResponse {
            status,
            body: body.to_string(),
        }));
    }

    /// Queues a network failure.
    pub fn push_failure(&self, message: &str) {
        self.state
            .borrow_mut()
            .responses
            .push_back(Err(ApiError::Transport(message.to_string())));
    }

    pub fn requests(&self) -> Vec<HttpRequest> {
        self.state.borrow().requests.clone()
    }

    pub fn request_count(&self) -> usize {
        self.state.borrow().requests.len()
    }

    /// Number of recorded requests whose URL is exactly `url`.
    pub fn count_url(&self, url: &str) -> usize {
        self.state
            .borrow()
            .requests
            .iter()
            .filter(|request| request.url == url)
            .count()
    }

    pub fn last_request(&self) -> Option<HttpRequest> {
        self.state.borrow().requests.last().cloned()
    }
}

impl Transport for MockTransport {
    async fn send(&self, request: HttpRequest) -> Result<HttpResponse, ApiError> {
        let mut state = self.state.borrow_mut();
        let url = request.url.clone();
        state.requests.push(request);
        state
            .responses
            .pop_front()
            .unwrap_or_else(|| Err(ApiError::Transport(format!("No scripted response for {}", url))))
    }
}
