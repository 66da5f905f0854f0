//! Fixtures for testing the API client and view controller without a browser.

pub mod builder;
pub mod factory;
pub mod mock;

pub use builder::{TestBuilder, TestContext};
pub use mock::MockTransport;
