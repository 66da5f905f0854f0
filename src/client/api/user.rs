use dioxus_logger::tracing;
use serde_json::json;

use crate::{
    client::{
        api::{
            helper::{path_segment, CREATED, INTERNAL_SERVER_ERROR, OK},
            transport::Transport,
            ApiClient,
        },
        constant::{TOKEN_COOKIE, TOKEN_LIFETIME_HOURS},
        model::error::ApiError,
        store::SessionStore,
    },
    model::{
        api::{AccessLevelDto, CredentialsDto, PasswordDto, TokenDto},
        user::{AccessLevel, User, UserDto},
    },
};

impl<S: SessionStore, T: Transport> ApiClient<S, T> {
    /// Creates an account and stores the returned token for one hour.
    ///
    /// # Returns
    /// - `Ok(true)` - 201, token stored
    /// - `Ok(false)` - Any other non-500 status
    /// - `Err(ApiError)` - 500, transport failure or malformed token body
    pub async fn register(
        &self,
        username: &str,
        password: &str,
        remember: bool,
    ) -> Result<bool, ApiError> {
        let payload = CredentialsDto {
            username,
            password,
            remember,
        };
        let response = self.post_noauth("/api/register", &payload).await?;
        match response.status {
            CREATED => {
                let TokenDto { token } = response.json()?;
                self.session
                    .set(TOKEN_COOKIE, &token, TOKEN_LIFETIME_HOURS);
                Ok(true)
            }
            INTERNAL_SERVER_ERROR => Err(response.server_error("registering user")),
            _ => Ok(false),
        }
    }

    /// Logs in and stores the returned token for one hour.
    ///
    /// # Returns
    /// - `Ok(true)` - 200, token stored
    /// - `Ok(false)` - Any other non-500 status, nothing stored
    /// - `Err(ApiError)` - 500, transport failure or malformed token body
    pub async fn login(
        &self,
        username: &str,
        password: &str,
        remember: bool,
    ) -> Result<bool, ApiError> {
        let payload = CredentialsDto {
            username,
            password,
            remember,
        };
        let response = self.post_noauth("/api/login", &payload).await?;
        match response.status {
            OK => {
                let TokenDto { token } = response.json()?;
                self.session
                    .set(TOKEN_COOKIE, &token, TOKEN_LIFETIME_HOURS);
                Ok(true)
            }
            INTERNAL_SERVER_ERROR => Err(response.server_error("logging in user")),
            _ => Ok(false),
        }
    }

    /// Ends the session on the backend.
    ///
    /// The token is erased once the request has been attempted, whatever the status and
    /// even when no response arrives, so a failed logout never leaves a usable session
    /// behind.
    pub async fn logout(&self) -> Result<bool, ApiError> {
        if !self.require_token() {
            return Ok(false);
        }
        let result = self.post("/api/logout", &json!({})).await;
        self.session.erase(TOKEN_COOKIE);
        let response = result?;
        match response.status {
            OK => Ok(true),
            INTERNAL_SERVER_ERROR => Err(response.server_error("logging out user")),
            _ => Ok(false),
        }
    }

    pub async fn change_password(&self, password: &str) -> Result<bool, ApiError> {
        if !self.require_token() {
            return Ok(false);
        }
        let response = self
            .post("/api/user/update_password", &PasswordDto { password })
            .await?;
        match response.status {
            OK => Ok(true),
            INTERNAL_SERVER_ERROR => Err(response.server_error("changing password")),
            _ => Ok(false),
        }
    }

    /// Deletes the logged in account. The token is only erased on success.
    pub async fn delete_account(&self) -> Result<bool, ApiError> {
        if !self.require_token() {
            return Ok(false);
        }
        let response = self.post("/api/delete-user", &json!({})).await?;
        match response.status {
            OK => {
                self.session.erase(TOKEN_COOKIE);
                Ok(true)
            }
            INTERNAL_SERVER_ERROR => Err(response.server_error("deleting user")),
            _ => Ok(false),
        }
    }

    /// Fetches the logged in user.
    ///
    /// # Returns
    /// - `Ok(Some(User))` - 200 with a valid body
    /// - `Ok(None)` - No token or any other non-500 status
    /// - `Err(ApiError::AccessLevel)` - The backend sent an unknown access level
    pub async fn get_user_info(&self) -> Result<Option<User>, ApiError> {
        if !self.require_token() {
            return Ok(None);
        }
        let response = self.get("/api/user", &[]).await?;
        match response.status {
            OK => {
                let user = User::try_from(response.json::<UserDto>()?)?;
                Ok(Some(user))
            }
            INTERNAL_SERVER_ERROR => Err(response.server_error("getting user info")),
            _ => Ok(None),
        }
    }

    /// Fetches another user by name. Operator only.
    pub async fn get_user_info_by_username(&self, username: &str) -> Result<Option<User>, ApiError> {
        if !self.require_token() {
            return Ok(None);
        }
        let url = format!("/api/user/{}", path_segment(username));
        let response = self.get(&url, &[]).await?;
        match response.status {
            OK => {
                let user = User::try_from(response.json::<UserDto>()?)?;
                Ok(Some(user))
            }
            INTERNAL_SERVER_ERROR => Err(response.server_error("getting user info")),
            _ => Ok(None),
        }
    }

    /// Changes another user's global access level. Operator only.
    pub async fn update_user_access(
        &self,
        username: &str,
        access_level: AccessLevel,
    ) -> Result<bool, ApiError> {
        if !self.require_token() {
            return Ok(false);
        }
        let url = format!("/api/user/{}/global_access", path_segment(username));
        let response = self.post(&url, &AccessLevelDto { access_level }).await?;
        match response.status {
            OK => {
                tracing::info!("Set access level of {} to {}", username, access_level);
                Ok(true)
            }
            INTERNAL_SERVER_ERROR => Err(response.server_error("updating user access")),
            _ => Ok(false),
        }
    }

    /// Sets another user's password. Operator only.
    pub async fn update_user_password(&self, username: &str, password: &str) -> Result<bool, ApiError> {
        if !self.require_token() {
            return Ok(false);
        }
        let url = format!("/api/user/{}/password", path_segment(username));
        let response = self.post(&url, &PasswordDto { password }).await?;
        match response.status {
            OK => Ok(true),
            INTERNAL_SERVER_ERROR => Err(response.server_error("updating user password")),
            _ => Ok(false),
        }
    }
}
