pub const DEFAULT_API_ROOT: &str = "https://api.trakt.tv";
pub const API_VERSION: &str = "2";

/// OAuth application credentials and the API root they are used against.
#[derive(Debug, Clone)]
pub struct TraktConfig {
    pub api_root: String,
    pub client_id: String,
    pub client_secret: String,
}

impl TraktConfig {
    pub fn new(client_id: impl Into<String>, client_secret: impl Into<String>) -> Self {
        TraktConfig {
            api_root: DEFAULT_API_ROOT.to_string(),
            client_id: client_id.into(),
            client_secret: client_secret.into(),
        }
    }

    pub fn with_api_root(mut self, api_root: &str) -> Self {
        self.api_root = api_root.trim_end_matches('/').to_string();
        self
    }

    pub fn url(&self, path: &str) -> String {
        format!("{}{}", self.api_root, path)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_to_public_api() {
        let config = TraktConfig::new("id", "secret");
        assert_eq!(config.url("/oauth/device/code"), "https://api.trakt.tv/oauth/device/code");
    }

    #[test]
    fn api_root_drops_trailing_slash() {
        let config = TraktConfig::new("id", "secret").with_api_root("http://127.0.0.1:9000/");
        assert_eq!(config.api_root, "http://127.0.0.1:9000");
        assert_eq!(
            config.url("/calendars/my/shows/2024-01-01/1"),
            "http://127.0.0.1:9000/calendars/my/shows/2024-01-01/1"
        );
    }
}
