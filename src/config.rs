//! API host configuration.
//!
//! The only configuration input is the build mode: debug builds talk to the
//! local console backend, release builds use paths relative to the page origin.

/// Backend used by debug builds.
pub const DEV_API_HOST: &str = "https://localhost:3000";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ApiConfig {
    pub base_url: String,
}

impl ApiConfig {
    /// Select the API host from the build mode
    pub fn from_build_mode() -> Self {
        if cfg!(debug_assertions) {
            Self::with_base_url(DEV_API_HOST)
        } else {
            Self::relative()
        }
    }

    /// Same-origin requests (production)
    pub fn relative() -> Self {
        Self {
            base_url: String::new(),
        }
    }

    pub fn with_base_url(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into().trim_end_matches('/').to_string(),
        }
    }

    /// Join an absolute API path onto the configured host.
    pub fn url_for(&self, path: &str) -> String {
        format!("{}/{}", self.base_url, path.trim_start_matches('/'))
    }
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self::from_build_mode()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_relative_config_keeps_absolute_path() {
        let config = ApiConfig::relative();
        assert_eq!(config.url_for("/multicloud/logout"), "/multicloud/logout");
    }

    #[test]
    fn test_base_url_is_joined_without_double_slash() {
        let config = ApiConfig::with_base_url("https://localhost:3000/");
        assert_eq!(
            config.url_for("/multicloud/common/version"),
            "https://localhost:3000/multicloud/common/version"
        );
    }

    #[test]
    fn test_build_mode_selection() {
        let config = ApiConfig::from_build_mode();
        if cfg!(debug_assertions) {
            assert_eq!(config.base_url, DEV_API_HOST);
        } else {
            assert!(config.base_url.is_empty());
        }
    }
}
