use serde_json::Value;

use crate::client::{
    api::ApiClient,
    constant::{TOKEN_COOKIE, TOKEN_LIFETIME_HOURS},
    controller::Controller,
    store::{MemorySessionStore, SessionStore},
    test_utils::mock::MockTransport,
};

pub type TestClient = ApiClient<MemorySessionStore, MockTransport>;
pub type TestController = Controller<MemorySessionStore, MockTransport>;

/// Builder for an API client wired to an in-memory session and a scripted transport.
///
/// # Example
///
/// ```rust,ignore
/// let test = TestBuilder::new()
///     .with_token("T1")
///     .respond(200, json!([]))
///     .build();
/// let servers = test.client.get_server_list().await?;
/// ```
#[derive(Default)]
pub struct TestBuilder {
    token: Option<String>,
    transport: MockTransport,
}

/// Everything a test needs to drive and inspect one client.
pub struct TestContext {
    pub client: TestClient,
    pub session: MemorySessionStore,
    pub transport: MockTransport,
}

impl TestBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Starts the session logged in with `token`.
    pub fn with_token(mut self, token: &str) -> Self {
        self.token = Some(token.to_string());
        self
    }

    pub fn respond(self, status: u16, body: Value) -> Self {
        self.transport.push_json(status, body);
        self
    }

    pub fn respond_raw(self, status: u16, body: &str) -> Self {
        self.transport.push_raw(status, body);
        self
    }

    pub fn fail(self, message: &str) -> Self {
        self.transport.push_failure(message);
        self
    }

    pub fn build(self) -> TestContext {
        let session = MemorySessionStore::new();
        if let Some(token) = &self.token {
            session.set(TOKEN_COOKIE, token, TOKEN_LIFETIME_HOURS);
        }
        TestContext {
            client: ApiClient::new(session.clone(), self.transport.clone()),
            session,
            transport: self.transport,
        }
    }
}

impl TestContext {
    pub fn controller(&self) -> TestController {
        Controller::new(self.client.clone())
    }

    pub fn token(&self) -> Option<String> {
        self.session.get(TOKEN_COOKIE)
    }
}
