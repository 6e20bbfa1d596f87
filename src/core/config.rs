//! Application configuration from environment variables.
//!
//! Load configuration using `Config::from_env()` after calling `dotenvy::dotenv()`.

/// Application configuration loaded from environment variables.
#[derive(Debug, Clone)]
pub struct Config {
    /// Authentication service that `POST /login` is forwarded to
    /// Example: http://localhost:8000/login
    pub auth_upstream_url: Option<String>,
}

impl Config {
    /// Load configuration from environment variables.
    ///
    /// Call `dotenvy::dotenv()` before this to load from `.env` file.
    pub fn from_env() -> Self {
        Self {
            auth_upstream_url: std::env::var("AUTH_UPSTREAM_URL")
                .ok()
                .map(|url| url.trim().to_string())
                .filter(|url| !url.is_empty()),
        }
    }

    /// Check if the login forwarder should be mounted
    pub fn has_auth_upstream(&self) -> bool {
        self.auth_upstream_url.is_some()
    }
}

impl Default for Config {
    fn default() -> Self {
        Self::from_env()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_with_upstream() {
        let config = Config {
            auth_upstream_url: Some("http://localhost:8000/login".to_string()),
        };

        assert!(config.has_auth_upstream());
        assert_eq!(
            config.auth_upstream_url.as_deref(),
            Some("http://localhost:8000/login")
        );
    }

    #[test]
    fn test_config_without_upstream() {
        let config = Config {
            auth_upstream_url: None,
        };

        assert!(!config.has_auth_upstream());
    }

    #[test]
    fn test_config_clone() {
        let config = Config {
            auth_upstream_url: Some("http://auth:8000/login".to_string()),
        };

        let cloned = config.clone();
        assert_eq!(config.auth_upstream_url, cloned.auth_upstream_url);
    }
}
