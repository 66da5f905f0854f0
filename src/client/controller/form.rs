use crate::{client::controller::ViewError, model::server::ServerInfo};

#[derive(Clone, Debug, Default, PartialEq)]
pub struct LoginForm {
    pub username: String,
    pub password: String,
    pub remember: bool,
}

#[derive(Clone, Debug, Default, PartialEq)]
pub struct RegisterForm {
    pub username: String,
    pub password: String,
    pub confirm_password: String,
    pub remember: bool,
}

#[derive(Clone, Debug, Default, PartialEq)]
pub struct PasswordForm {
    pub password: String,
    pub confirm_password: String,
}

/// Raw field values of the create-server form.
#[derive(Clone, Debug, PartialEq)]
pub struct CreateServerForm {
    pub name: String,
    pub server_type: String,
    pub path: String,
    pub autostart: bool,
    pub mc_version: String,
    pub modloader_version: String,
    pub ram: String,
}

impl Default for CreateServerForm {
    fn default() -> Self {
        Self {
            name: String::new(),
            server_type: "vanilla".to_string(),
            path: String::new(),
            autostart: false,
            mc_version: String::new(),
            modloader_version: String::new(),
            ram: "2048".to_string(),
        }
    }
}

impl RegisterForm {
    pub fn passwords_match(&self) -> bool {
        self.password == self.confirm_password
    }
}

impl PasswordForm {
    pub fn passwords_match(&self) -> bool {
        self.password == self.confirm_password
    }
}

impl CreateServerForm {
    /// Checks the fields and builds the request body.
    ///
    /// # Returns
    /// - `Ok(ServerInfo)` - Trimmed fields, RAM in MB
    /// - `Err(ViewError::Invalid)` - Empty name, path, Minecraft or modloader version, or
    ///   RAM not a positive number
    pub fn validate(&self) -> Result<ServerInfo, ViewError> {
        let name = self.name.trim();
        if name.is_empty() {
            return Err(ViewError::Invalid("Server name is required".to_string()));
        }
        let path = self.path.trim();
        if path.is_empty() {
            return Err(ViewError::Invalid("Server path is required".to_string()));
        }
        if self.mc_version.is_empty() {
            return Err(ViewError::Invalid("Minecraft version is required".to_string()));
        }
        let ram = match self.ram.trim().parse::<u32>() {
            Ok(ram) if ram > 0 => ram,
            _ => return Err(ViewError::Invalid("RAM must be a positive number of MB".to_string())),
        };
        let modloader_version = self.modloader_version.trim();
        // The backend rejects an empty modloader version for every server type
        if modloader_version.is_empty() {
            return Err(ViewError::Invalid("Modloader version is required".to_string()));
        }

        Ok(ServerInfo {
            name: name.to_string(),
            server_type: self.server_type.clone(),
            path: path.to_string(),
            autostart: self.autostart,
            mc_version: self.mc_version.clone(),
            modloader_version: modloader_version.to_string(),
            ram,
            started_at: None,
        })
    }
}
