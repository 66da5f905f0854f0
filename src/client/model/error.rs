use thiserror::Error;

use crate::model::user::ParseAccessLevelError;

/// Failure raised by the API client.
///
/// Only hard failures live here. A missing token on a public method or an unexpected
/// non-500 status is reported through the method's negative return value instead.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ApiError {
    /// An authenticated request was dispatched without a session token.
    #[error("No token found in cookies")]
    MissingToken,

    /// The request never produced a response.
    #[error("{0}")]
    Transport(String),

    /// The backend answered 500.
    ///
    /// # Fields
    /// - `operation` - What the client was doing, e.g. "getting server list"
    /// - `message` - The `message` field of the error body, or its raw text
    #[error("Error {operation}: {message}")]
    Server {
        operation: &'static str,
        message: String,
    },

    /// A success body did not match the expected shape.
    #[error("{0}")]
    Decode(String),

    #[error("{0}")]
    Serialize(String),

    /// The backend sent an access level outside user/admin/operator.
    #[error(transparent)]
    AccessLevel(#[from] ParseAccessLevelError),
}
