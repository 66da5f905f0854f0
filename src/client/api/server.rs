use serde_json::json;

use crate::{
    client::{
        api::{
            helper::{path_segment, CREATED, INTERNAL_SERVER_ERROR, OK},
            transport::Transport,
            ApiClient,
        },
        model::error::ApiError,
        store::SessionStore,
    },
    model::{api::DirsDto, server::ServerInfo},
};

/// Lifecycle command sent for a single server.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ServerAction {
    Start,
    Stop,
    Restart,
}

impl ServerAction {
    pub const ALL: [ServerAction; 3] = [ServerAction::Start, ServerAction::Stop, ServerAction::Restart];

    fn endpoint(&self) -> &'static str {
        match self {
            ServerAction::Start => "start_server",
            ServerAction::Stop => "stop_server",
            ServerAction::Restart => "restart_server",
        }
    }

    fn operation(&self) -> &'static str {
        match self {
            ServerAction::Start => "starting server",
            ServerAction::Stop => "stopping server",
            ServerAction::Restart => "restarting server",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            ServerAction::Start => "Start",
            ServerAction::Stop => "Stop",
            ServerAction::Restart => "Restart",
        }
    }
}

impl<S: SessionStore, T: Transport> ApiClient<S, T> {
    pub async fn get_server_list(&self) -> Result<Vec<ServerInfo>, ApiError> {
        if !self.require_token() {
            return Ok(Vec::new());
        }
        let response = self.get("/api/servers", &[]).await?;
        match response.status {
            OK => response.json(),
            INTERNAL_SERVER_ERROR => Err(response.server_error("getting server list")),
            _ => Ok(Vec::new()),
        }
    }

    /// Directories on the host that look like Minecraft servers.
    pub async fn get_mc_server_dirs(&self) -> Result<Vec<String>, ApiError> {
        if !self.require_token() {
            return Ok(Vec::new());
        }
        let response = self.get("/api/list_mc_server_dirs", &[]).await?;
        match response.status {
            OK => Ok(response.json::<DirsDto>()?.dirs),
            INTERNAL_SERVER_ERROR => {
                Err(response.server_error("getting Minecraft server directories"))
            }
            _ => Ok(Vec::new()),
        }
    }

    pub async fn get_server_info(&self, server_name: &str) -> Result<Option<ServerInfo>, ApiError> {
        if !self.require_token() {
            return Ok(None);
        }
        let url = format!("/api/server/{}", path_segment(server_name));
        let response = self.get(&url, &[]).await?;
        match response.status {
            OK => response.json().map(Some),
            INTERNAL_SERVER_ERROR => Err(response.server_error("getting server info")),
            _ => Ok(None),
        }
    }

    pub async fn create_server(&self, server_info: &ServerInfo) -> Result<bool, ApiError> {
        if !self.require_token() {
            return Ok(false);
        }
        let response = self.post("/api/create_server", server_info).await?;
        match response.status {
            CREATED => Ok(true),
            INTERNAL_SERVER_ERROR => Err(response.server_error("creating server")),
            _ => Ok(false),
        }
    }

    pub async fn start_server(&self, server_name: &str) -> Result<bool, ApiError> {
        self.server_action(ServerAction::Start, server_name).await
    }

    pub async fn stop_server(&self, server_name: &str) -> Result<bool, ApiError> {
        self.server_action(ServerAction::Stop, server_name).await
    }

    pub async fn restart_server(&self, server_name: &str) -> Result<bool, ApiError> {
        self.server_action(ServerAction::Restart, server_name).await
    }

    /// Sends a lifecycle command. `Ok(true)` only on 200.
    pub(super) async fn server_action(&self, action: ServerAction, server_name: &str) -> Result<bool, ApiError> {
        if !self.require_token() {
            return Ok(false);
        }
        let url = format!("/api/{}/{}", action.endpoint(), path_segment(server_name));
        let response = self.post(&url, &json!({})).await?;
        match response.status {
            OK => Ok(true),
            INTERNAL_SERVER_ERROR => Err(response.server_error(action.operation())),
            _ => Ok(false),
        }
    }
}
