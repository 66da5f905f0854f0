use std::{fmt, str::FromStr};

use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize, Serializer};
use thiserror::Error;

/// Format the backend uses for user timestamps, e.g. `24/12/2025, 18:30:00`.
pub const TIMESTAMP_FORMAT: &str = "%d/%m/%Y, %H:%M:%S";

/// Global permission tier of a user.
///
/// Ordered from least to most privileged, so `AccessLevel::Admin >= AccessLevel::User`
/// holds. Enforcement happens server-side; the client only displays the level and hides
/// operator tools from lower tiers.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum AccessLevel {
    /// Can see server status
    User,
    /// Can start and stop servers, see logs and manage settings
    Admin,
    /// Can manage users and create and delete servers
    Operator,
}

#[derive(Error, Debug, Clone, PartialEq)]
#[error("Unknown access level: {0}")]
pub struct ParseAccessLevelError(pub String);

impl AccessLevel {
    pub const ALL: [AccessLevel; 3] = [AccessLevel::User, AccessLevel::Admin, AccessLevel::Operator];

    /// Name of the level as the backend spells it.
    pub fn as_str(&self) -> &'static str {
        match self {
            AccessLevel::User => "USER",
            AccessLevel::Admin => "ADMIN",
            AccessLevel::Operator => "OPERATOR",
        }
    }
}

impl FromStr for AccessLevel {
    type Err = ParseAccessLevelError;

    /// Case-insensitive over `user`, `admin` and `operator`; anything else is rejected.
    fn from_str(level: &str) -> Result<Self, Self::Err> {
        match level.to_lowercase().as_str() {
            "user" => Ok(AccessLevel::User),
            "admin" => Ok(AccessLevel::Admin),
            "operator" => Ok(AccessLevel::Operator),
            _ => Err(ParseAccessLevelError(level.to_string())),
        }
    }
}

impl fmt::Display for AccessLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl Serialize for AccessLevel {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.as_str())
    }
}

/// User as sent by `/api/user`, before the access level is decoded.
#[derive(Serialize, Deserialize, Clone, Debug)]
pub struct UserDto {
    pub username: String,
    pub access_level: String,
    #[serde(with = "timestamp")]
    pub registered_at: NaiveDateTime,
    #[serde(with = "timestamp")]
    pub last_login: NaiveDateTime,
}

#[derive(Clone, Debug, PartialEq)]
pub struct User {
    pub username: String,
    pub access_level: AccessLevel,
    pub registered_at: NaiveDateTime,
    pub last_login: NaiveDateTime,
}

impl TryFrom<UserDto> for User {
    type Error = ParseAccessLevelError;

    fn try_from(dto: UserDto) -> Result<Self, Self::Error> {
        Ok(Self {
            access_level: dto.access_level.parse()?,
            username: dto.username,
            registered_at: dto.registered_at,
            last_login: dto.last_login,
        })
    }
}

mod timestamp {
    use chrono::NaiveDateTime;
    use serde::{de, Deserialize, Deserializer, Serializer};

    use super::TIMESTAMP_FORMAT;

    pub fn serialize<S: Serializer>(value: &NaiveDateTime, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&value.format(TIMESTAMP_FORMAT).to_string())
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<NaiveDateTime, D::Error> {
        let raw = String::deserialize(deserializer)?;
        NaiveDateTime::parse_from_str(&raw, TIMESTAMP_FORMAT).map_err(de::Error::custom)
    }
}
