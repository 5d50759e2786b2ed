//! Application configuration.
//!
//! Built from defaults, overridden by environment variables, then by
//! builder calls (CLI flags). Dev mode runs entirely against the
//! in-memory backend so the app works offline.

use std::path::PathBuf;

/// Configuration assembled at startup.
#[derive(Debug, Clone)]
pub struct AppConfig {
    /// Base URL of the hosted backend.
    pub backend_url: String,
    /// API key passed to the backend, if any.
    pub api_key: Option<String>,
    /// Run against the in-memory backend instead of the network.
    pub dev_mode: bool,
    /// The uid the dev-mode gateway signs in as.
    pub dev_uid: String,
    /// Path the app starts at, normally `/`.
    pub initial_path: String,
    /// Log file location; `None` disables logging entirely.
    pub log_file: Option<PathBuf>,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            backend_url: "http://localhost:8000".to_string(),
            api_key: None,
            dev_mode: false,
            dev_uid: "dev".to_string(),
            initial_path: "/".to_string(),
            log_file: default_log_file(),
        }
    }
}

/// `<data dir>/tally/tally.log`, or `None` when no data dir exists.
fn default_log_file() -> Option<PathBuf> {
    dirs::data_local_dir().map(|dir| dir.join("tally").join("tally.log"))
}

impl AppConfig {
    /// Defaults plus environment overrides: `TALLY_BACKEND_URL`,
    /// `TALLY_API_KEY`, `TALLY_DEV=1`, `TALLY_LOG`.
    pub fn from_env() -> Self {
        let mut config = Self::default();
        if let Ok(url) = std::env::var("TALLY_BACKEND_URL") {
            config.backend_url = url;
        }
        if let Ok(key) = std::env::var("TALLY_API_KEY") {
            config.api_key = Some(key);
        }
        if let Ok(dev) = std::env::var("TALLY_DEV") {
            config.dev_mode = dev == "1" || dev.eq_ignore_ascii_case("true");
        }
        if let Ok(path) = std::env::var("TALLY_LOG") {
            config.log_file = if path.is_empty() {
                None
            } else {
                Some(PathBuf::from(path))
            };
        }
        config
    }

    /// Set the backend base URL.
    pub fn with_backend_url(mut self, url: impl Into<String>) -> Self {
        self.backend_url = url.into();
        self
    }

    /// Set the API key.
    pub fn with_api_key(mut self, key: impl Into<String>) -> Self {
        self.api_key = Some(key.into());
        self
    }

    /// Enable or disable dev mode.
    pub fn with_dev_mode(mut self, dev_mode: bool) -> Self {
        self.dev_mode = dev_mode;
        self
    }

    /// Set the dev-mode uid.
    pub fn with_dev_uid(mut self, uid: impl Into<String>) -> Self {
        self.dev_uid = uid.into();
        self
    }

    /// Set the starting path.
    pub fn with_initial_path(mut self, path: impl Into<String>) -> Self {
        self.initial_path = path.into();
        self
    }

    /// Set (or with `None`, disable) the log file.
    pub fn with_log_file(mut self, path: Option<PathBuf>) -> Self {
        self.log_file = path;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serial_test::serial;

    fn clear_env() {
        for key in ["TALLY_BACKEND_URL", "TALLY_API_KEY", "TALLY_DEV", "TALLY_LOG"] {
            std::env::remove_var(key);
        }
    }

    #[test]
    #[serial]
    fn test_defaults() {
        clear_env();
        let config = AppConfig::from_env();
        assert_eq!(config.backend_url, "http://localhost:8000");
        assert_eq!(config.api_key, None);
        assert!(!config.dev_mode);
        assert_eq!(config.initial_path, "/");
    }

    #[test]
    #[serial]
    fn test_env_overrides() {
        clear_env();
        std::env::set_var("TALLY_BACKEND_URL", "https://ledger.example.com");
        std::env::set_var("TALLY_API_KEY", "k-123");
        std::env::set_var("TALLY_DEV", "1");
        std::env::set_var("TALLY_LOG", "");

        let config = AppConfig::from_env();
        assert_eq!(config.backend_url, "https://ledger.example.com");
        assert_eq!(config.api_key, Some("k-123".to_string()));
        assert!(config.dev_mode);
        assert_eq!(config.log_file, None);

        clear_env();
    }

    #[test]
    #[serial]
    fn test_builder_overrides() {
        clear_env();
        let config = AppConfig::from_env()
            .with_backend_url("https://ledger.example.com")
            .with_api_key("k-123")
            .with_dev_mode(true)
            .with_dev_uid("alice")
            .with_initial_path("/dashboard");
        assert_eq!(config.backend_url, "https://ledger.example.com");
        assert_eq!(config.api_key, Some("k-123".to_string()));
        assert!(config.dev_mode);
        assert_eq!(config.dev_uid, "alice");
        assert_eq!(config.initial_path, "/dashboard");
    }
}
