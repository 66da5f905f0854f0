//! Client for the dashboard backend's REST API.
//!
//! `ApiClient` exposes one method per backend capability. Every method follows the
//! same contract: a missing token on an authenticated call is logged and answered with
//! the method's negative value (`false`, `None` or an empty list) without touching the
//! network; a 500 is raised as `ApiError::Server`; any other unexpected status is the
//! negative value.

pub mod helper;
pub mod server;
pub mod transport;
pub mod user;
pub mod version;

#[cfg(test)]
mod test;

pub use transport::{FetchTransport, Transport};

use crate::client::{constant::TOKEN_COOKIE, store::SessionStore};

/// Façade over the backend, generic over where the token lives and how requests travel.
#[derive(Clone, Debug)]
pub struct ApiClient<S, T> {
    session: S,
    transport: T,
}

impl<S: SessionStore, T: Transport> ApiClient<S, T> {
    pub fn new(session: S, transport: T) -> Self {
        Self { session, transport }
    }

    pub fn has_token(&self) -> bool {
        self.session.has(TOKEN_COOKIE)
    }
}
