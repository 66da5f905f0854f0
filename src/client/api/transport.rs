use std::future::Future;

use reqwasm::http::{Request, RequestCredentials};

use crate::client::{config::ClientConfig, model::error::ApiError};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Method {
    Get,
    Post,
}

/// Request as handed to a `Transport`. `url` is the path plus query string.
#[derive(Clone, Debug, PartialEq)]
pub struct HttpRequest {
    pub method: Method,
    pub url: String,
    pub headers: Vec<(String, String)>,
    pub body: Option<String>,
}

#[cfg(test)]
impl HttpRequest {
    pub fn header(&self, name: &str) -> Option<&str> {
        self.headers
            .iter()
            .find(|(key, _)| key.eq_ignore_ascii_case(name))
            .map(|(_, value)| value.as_str())
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct HttpResponse {
    pub status: u16,
    pub body: String,
}

/// Performs one HTTP exchange.
///
/// Any status code is a successful exchange; only failing to get a response at all is
/// an error.
pub trait Transport {
    fn send(&self, request: HttpRequest) -> impl Future<Output = Result<HttpResponse, ApiError>>;
}

/// `Transport` backed by the browser fetch API.
#[derive(Clone, Debug, Default)]
pub struct FetchTransport {
    config: ClientConfig,
}

impl FetchTransport {
    pub fn new(config: ClientConfig) -> Self {
        Self { config }
    }
}

impl Transport for FetchTransport {
    async fn send(&self, request: HttpRequest) -> Result<HttpResponse, ApiError> {
        let url = self.config.url(&request.url);
        let mut builder = match request.method {
            Method::Get => Request::get(&url),
            Method::Post => Request::post(&url),
        }
        .credentials(RequestCredentials::Include);

        for (name, value) in &request.headers {
            builder = builder.header(name, value);
        }
        if let Some(body) = request.body {
            builder = builder.body(body);
        }

        let response = builder
            .send()
            .await
            .map_err(|e| ApiError::Transport(format!("Failed to send request: {}", e)))?;
        let status = response.status();
        let body = response
            .text()
            .await
            .map_err(|e| ApiError::Transport(format!("Failed to read response: {}", e)))?;

        Ok(HttpResponse { status, body })
    }
}
