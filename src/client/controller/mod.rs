//! Screen transitions of the dashboard.
//!
//! `Controller` turns user actions into API calls and decides which `Screen` comes
//! next. It never touches the DOM; the components in `client::route` render whatever
//! screen it returns, so every flow here can be exercised with an in-memory session and
//! a scripted transport.

pub mod form;

#[cfg(test)]
mod test;

use dioxus_logger::tracing;
use thiserror::Error;

use crate::{
    client::{
        api::{server::ServerAction, ApiClient, Transport},
        model::{
            error::ApiError,
            screen::{Dashboard, Screen},
        },
        store::SessionStore,
    },
    model::user::{AccessLevel, User},
};

use form::{CreateServerForm, LoginForm, PasswordForm, RegisterForm};

/// Why a user action did not complete. The `Display` text is what the alert shows.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ViewError {
    /// Password and confirmation differ; checked before any request.
    #[error("Passwords do not match")]
    PasswordMismatch,

    /// A form field failed client-side validation.
    #[error("{0}")]
    Invalid(String),

    /// The backend answered with a non-success status other than 500.
    #[error("{0} failed")]
    Rejected(&'static str),

    #[error("{action} failed: {source}")]
    Api {
        action: &'static str,
        #[source]
        source: ApiError,
    },
}

impl ViewError {
    fn api(action: &'static str) -> impl FnOnce(ApiError) -> ViewError {
        move |source| ViewError::Api { action, source }
    }
}

#[derive(Clone, Debug)]
pub struct Controller<S, T> {
    api: ApiClient<S, T>,
}

impl<S: SessionStore, T: Transport> Controller<S, T> {
    pub fn new(api: ApiClient<S, T>) -> Self {
        Self { api }
    }

    pub fn has_login_token(&self) -> bool {
        self.api.has_token()
    }

    /// Picks the first screen: the dashboard when a token exists, otherwise login
    /// without any request.
    pub async fn start(&self) -> Result<Screen, ViewError> {
        if self.has_login_token() {
            tracing::info!("Found login token, showing dashboard");
            self.open_dashboard().await
        } else {
            tracing::info!("No login token, showing login window");
            Ok(Screen::Login)
        }
    }

    /// Fetches the server list and builds the dashboard from it.
    pub async fn open_dashboard(&self) -> Result<Screen, ViewError> {
        let servers = self
            .api
            .get_server_list()
            .await
            .map_err(ViewError::api("Loading servers"))?;
        tracing::info!("Fetched {} servers", servers.len());
        Ok(Screen::Dashboard(Dashboard { servers }))
    }

    pub async fn login(&self, form: &LoginForm) -> Result<Screen, ViewError> {
        let logged_in = self
            .api
            .login(&form.username, &form.password, form.remember)
            .await
            .map_err(ViewError::api("Login"))?;
        if !logged_in {
            return Err(ViewError::Rejected("Login"));
        }
        self.open_dashboard().await
    }

    /// Registers and continues straight to the dashboard.
    pub async fn register(&self, form: &RegisterForm) -> Result<Screen, ViewError> {
        if !form.passwords_match() {
            return Err(ViewError::PasswordMismatch);
        }
        let registered = self
            .api
            .register(&form.username, &form.password, form.remember)
            .await
            .map_err(ViewError::api("Registration"))?;
        if !registered {
            return Err(ViewError::Rejected("Registration"));
        }
        self.open_dashboard().await
    }

    /// Always lands on the login screen. The API erases the token before it looks at
    /// the status, so a failed logout only gets logged.
    pub async fn logout(&self) -> Screen {
        match self.api.logout().await {
            Ok(true) => tracing::info!("Logged out"),
            Ok(false) => tracing::warn!("Logout was not acknowledged by the server"),
            Err(err) => tracing::error!("Logout failed: {}", err),
        }
        Screen::Login
    }

    /// Sends a lifecycle command and reloads the dashboard.
    pub async fn server_action(&self, action: ServerAction, server_name: &str) -> Result<Screen, ViewError> {
        let accepted = match action {
            ServerAction::Start => self.api.start_server(server_name).await,
            ServerAction::Stop => self.api.stop_server(server_name).await,
            ServerAction::Restart => self.api.restart_server(server_name).await,
        }
        .map_err(ViewError::api(action.label()))?;
        if !accepted {
            return Err(ViewError::Rejected(action.label()));
        }
        tracing::info!("{} {}", action.label(), server_name);
        self.open_dashboard().await
    }

    /// Refetches one server and swaps it into `dashboard`, leaving the other cards as
    /// they are.
    pub async fn refresh_server(&self, dashboard: &Dashboard, server_name: &str) -> Result<Screen, ViewError> {
        let server = self
            .api
            .get_server_info(server_name)
            .await
            .map_err(ViewError::api("Refreshing server"))?
            .ok_or(ViewError::Rejected("Refreshing server"))?;

        let mut dashboard = dashboard.clone();
        match dashboard.servers.iter_mut().find(|entry| entry.name == server.name) {
            Some(entry) => *entry = server,
            None => dashboard.servers.push(server),
        }
        Ok(Screen::Dashboard(dashboard))
    }

    pub async fn create_server(&self, form: &CreateServerForm) -> Result<Screen, ViewError> {
        let server = form.validate()?;
        let created = self
            .api
            .create_server(&server)
            .await
            .map_err(ViewError::api("Creating server"))?;
        if !created {
            return Err(ViewError::Rejected("Creating server"));
        }
        self.open_dashboard().await
    }

    pub async fn change_password(&self, form: &PasswordForm) -> Result<(), ViewError> {
        if !form.passwords_match() {
            return Err(ViewError::PasswordMismatch);
        }
        let changed = self
            .api
            .change_password(&form.password)
            .await
            .map_err(ViewError::api("Changing password"))?;
        if !changed {
            return Err(ViewError::Rejected("Changing password"));
        }
        Ok(())
    }

    /// Deletes the account; the session is gone afterwards so this ends on login.
    pub async fn delete_account(&self) -> Result<Screen, ViewError> {
        let deleted = self
            .api
            .delete_account()
            .await
            .map_err(ViewError::api("Deleting account"))?;
        if !deleted {
            return Err(ViewError::Rejected("Deleting account"));
        }
        Ok(Screen::Login)
    }

    pub async fn load_user(&self) -> Result<Option<User>, ViewError> {
        self.api
            .get_user_info()
            .await
            .map_err(ViewError::api("Loading user"))
    }

    pub async fn load_mc_versions(&self) -> Result<Vec<String>, ViewError> {
        self.api
            .get_mc_versions()
            .await
            .map_err(ViewError::api("Loading Minecraft versions"))
    }

    pub async fn load_forge_versions(&self, mc_version: &str) -> Result<Vec<String>, ViewError> {
        self.api
            .get_forge_versions(mc_version)
            .await
            .map_err(ViewError::api("Loading Forge versions"))
    }

    pub async fn load_server_dirs(&self) -> Result<Vec<String>, ViewError> {
        self.api
            .get_mc_server_dirs()
            .await
            .map_err(ViewError::api("Loading server directories"))
    }

    pub async fn lookup_user(&self, username: &str) -> Result<Option<User>, ViewError> {
        self.api
            .get_user_info_by_username(username)
            .await
            .map_err(ViewError::api("Looking up user"))
    }

    pub async fn set_user_access(&self, username: &str, access_level: AccessLevel) -> Result<(), ViewError> {
        let updated = self
            .api
            .update_user_access(username, access_level)
            .await
            .map_err(ViewError::api("Updating access level"))?;
        if !updated {
            return Err(ViewError::Rejected("Updating access level"));
        }
        Ok(())
    }

    pub async fn reset_user_password(&self, username: &str, password: &str) -> Result<(), ViewError> {
        let updated = self
            .api
            .update_user_password(username, password)
            .await
            .map_err(ViewError::api("Resetting password"))?;
        if !updated {
            return Err(ViewError::Rejected("Resetting password"));
        }
        Ok(())
    }
}
