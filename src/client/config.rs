/// Compile-time override for the backend origin, e.g. `http://localhost:5000`.
const API_BASE_ENV: Option<&str> = option_env!("DASHBOARD_API_BASE");

#[derive(Clone, Debug, Default, PartialEq)]
pub struct ClientConfig {
    /// Prefix prepended to every `/api/...` path. Empty means same-origin.
    pub api_base: String,
}

impl ClientConfig {
    pub fn new(api_base: &str) -> Self {
        Self {
            api_base: api_base.trim_end_matches('/').to_string(),
        }
    }

    pub fn from_env() -> Self {
        Self::new(API_BASE_ENV.unwrap_or_default())
    }

    pub fn url(&self, path: &str) -> String {
        format!("{}{}", self.api_base, path)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_same_origin() {
        assert_eq!(ClientConfig::default().url("/api/servers"), "/api/servers");
    }

    #[test]
    fn test_trailing_slash_is_trimmed() {
        let config = ClientConfig::new("http://localhost:5000/");
        assert_eq!(config.url("/api/login"), "http://localhost:5000/api/login");
    }
}
