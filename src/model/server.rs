use serde::{Deserialize, Serialize};

/// One managed game-server instance and its runtime configuration.
///
/// Read from `/api/servers` and `/api/server/{name}`, and sent as the body of
/// `/api/create_server`. `started_at` is absent while the server is stopped and is kept
/// as the raw string the backend sends.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct ServerInfo {
    pub name: String,
    #[serde(rename = "type")]
    pub server_type: String,
    pub path: String,
    #[serde(default)]
    pub autostart: bool,
    pub mc_version: String,
    #[serde(default)]
    pub modloader_version: String,
    /// Memory in MB
    pub ram: u32,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub started_at: Option<String>,
}

impl ServerInfo {
    pub fn is_running(&self) -> bool {
        self.started_at.is_some()
    }
}
