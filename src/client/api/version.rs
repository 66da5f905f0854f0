use crate::{
    client::{
        api::{
            helper::{path_segment, INTERNAL_SERVER_ERROR, OK},
            transport::Transport,
            ApiClient,
        },
        model::error::ApiError,
        store::SessionStore,
    },
    model::api::VersionsDto,
};

impl<S: SessionStore, T: Transport> ApiClient<S, T> {
    /// Minecraft versions the backend can install.
    pub async fn get_mc_versions(&self) -> Result<Vec<String>, ApiError> {
        if !self.require_token() {
            return Ok(Vec::new());
        }
        let response = self.get("/api/mc_versions", &[]).await?;
        match response.status {
            OK => Ok(response.json::<VersionsDto>()?.versions),
            INTERNAL_SERVER_ERROR => Err(response.server_error("getting Minecraft versions")),
            _ => Ok(Vec::new()),
        }
    }

    /// Forge builds available for one Minecraft version.
    pub async fn get_forge_versions(&self, mc_version: &str) -> Result<Vec<String>, ApiError> {
        if !self.require_token() {
            return Ok(Vec::new());
        }
        let url = format!("/api/forge_versions/{}", path_segment(mc_version));
        let response = self.get(&url, &[]).await?;
        match response.status {
            OK => Ok(response.json::<VersionsDto>()?.versions),
            INTERNAL_SERVER_ERROR => Err(response.server_error("getting Forge versions")),
            _ => Ok(Vec::new()),
        }
    }
}
