use serde::{Deserialize, Serialize};

use crate::model::user::AccessLevel;

/// Error body returned by the backend on any failed request.
#[derive(Serialize, Deserialize)]
pub struct ErrorDto {
    pub message: String,
}

/// Body returned by `/api/login` and `/api/register`.
#[derive(Serialize, Deserialize)]
pub struct TokenDto {
    pub token: String,
}

#[derive(Serialize, Deserialize)]
pub struct DirsDto {
    pub dirs: Vec<String>,
}

#[derive(Serialize, Deserialize)]
pub struct VersionsDto {
    pub versions: Vec<String>,
}

#[derive(Serialize)]
pub struct CredentialsDto<'a> {
    pub username: &'a str,
    pub password: &'a str,
    pub remember: bool,
}

#[derive(Serialize)]
pub struct PasswordDto<'a> {
    pub password: &'a str,
}

#[derive(Serialize)]
pub struct AccessLevelDto {
    pub access_level: AccessLevel,
}
