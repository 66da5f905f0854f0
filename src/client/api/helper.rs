use dioxus_logger::tracing;
use serde::{de::DeserializeOwned, Serialize};
use url::form_urlencoded;

use crate::{
    client::{
        api::{
            transport::{HttpRequest, Method, Transport},
            ApiClient,
        },
        constant::TOKEN_COOKIE,
        model::error::ApiError,
        store::SessionStore,
    },
    model::api::ErrorDto,
};

pub const OK: u16 = 200;
pub const CREATED: u16 = 201;
pub const INTERNAL_SERVER_ERROR: u16 = 500;

/// Normalized result of one exchange: raw body plus status.
///
/// The primitives never fail on a non-2xx status; each public method decides what
/// the status means for its operation.
#[derive(Clone, Debug, PartialEq)]
pub struct ApiResponse {
    pub data: String,
    pub status: u16,
}

impl ApiResponse {
    /// Decodes the body of a success response.
    pub fn json<T: DeserializeOwned>(&self) -> Result<T, ApiError> {
        serde_json::from_str(&self.data)
            .map_err(|e| ApiError::Decode(format!("Failed to parse response: {}", e)))
    }

    /// `message` field of an error body, falling back to the raw text.
    pub fn error_message(&self) -> String {
        match serde_json::from_str::<ErrorDto>(&self.data) {
            Ok(error_dto) => error_dto.message,
            Err(_) if self.data.trim().is_empty() => "Unknown error".to_string(),
            Err(_) => self.data.clone(),
        }
    }

    /// Logs the server message and turns it into the error raised for a 500.
    pub fn server_error(&self, operation: &'static str) -> ApiError {
        let message = self.error_message();
        tracing::error!("Error {}: {}", operation, message);
        ApiError::Server { operation, message }
    }
}

/// Appends `params` to `path` as a query string.
pub fn with_query(path: &str, params: &[(&str, &str)]) -> String {
    if params.is_empty() {
        return path.to_string();
    }
    let query = form_urlencoded::Serializer::new(String::new())
        .extend_pairs(params)
        .finish();
    format!("{}?{}", path, query)
}

/// Percent-encodes a value used as a single path segment.
pub fn path_segment(value: &str) -> String {
    urlencoding::encode(value).into_owned()
}

/// Serialize a payload to JSON string
pub fn serialize_json<T: Serialize>(payload: &T) -> Result<String, ApiError> {
    serde_json::to_string(payload)
        .map_err(|e| ApiError::Serialize(format!("Failed to serialize request: {}", e)))
}

impl<S: SessionStore, T: Transport> ApiClient<S, T> {
    fn token(&self) -> Result<String, ApiError> {
        self.session.get(TOKEN_COOKIE).ok_or(ApiError::MissingToken)
    }

    /// Precondition of every authenticated public method. Logs when the token is absent.
    pub(super) fn require_token(&self) -> bool {
        let present = self.session.has(TOKEN_COOKIE);
        if !present {
            tracing::warn!("No token found in cookies");
        }
        present
    }

    pub(super) async fn get(&self, path: &str, params: &[(&str, &str)]) -> Result<ApiResponse, ApiError> {
        let token = self.token()?;
        self.send(Method::Get, with_query(path, params), Some(&token), None)
            .await
    }

    #[cfg(test)]
    pub(super) async fn get_noauth(
        &self,
        path: &str,
        params: &[(&str, &str)],
    ) -> Result<ApiResponse, ApiError> {
        self.send(Method::Get, with_query(path, params), None, None)
            .await
    }

    pub(super) async fn post<B: Serialize>(&self, path: &str, body: &B) -> Result<ApiResponse, ApiError> {
        let token = self.token()?;
        let body = serialize_json(body)?;
        self.send(Method::Post, path.to_string(), Some(&token), Some(body))
            .await
    }

    pub(super) async fn post_noauth<B: Serialize>(
        &self,
        path: &str,
        body: &B,
    ) -> Result<ApiResponse, ApiError> {
        let body = serialize_json(body)?;
        self.send(Method::Post, path.to_string(), None, Some(body))
            .await
    }

    async fn send(
        &self,
        method: Method,
        url: String,
        token: Option<&str>,
        body: Option<String>,
    ) -> Result<ApiResponse, ApiError> {
        let mut headers = vec![("Content-Type".to_string(), "application/json".to_string())];
        if let Some(token) = token {
            headers.push(("Authorization".to_string(), format!("Bearer {}", token)));
        }

        tracing::debug!("{:?} {}", method, url);
        let response = self
            .transport
            .send(HttpRequest {
                method,
                url,
                headers,
                body,
            })
            .await?;

        Ok(ApiResponse {
            data: response.body,
            status: response.status,
        })
    }
}
