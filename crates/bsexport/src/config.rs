//! Run configuration.
//!
//! ## Example
//!
//! ```ignore
//! use bsexport::ExportConfig;
//!
//! let config = ExportConfig::builder()
//!     .game_dir("C:/Program Files (x86)/Steam/steamapps/common/Beat Saber")
//!     .output_dir("playlists")
//!     .build();
//! ```

use std::path::PathBuf;
use std::time::Duration;

/// Default BeatSaver API host
pub const DEFAULT_CATALOG_URL: &str = "https://api.beatsaver.com";

/// Default timeout for a single catalog request
pub const DEFAULT_REQUEST_TIMEOUT: Duration = Duration::from_secs(30);

/// Configuration for one export run
#[derive(Debug, Clone)]
pub struct ExportConfig {
    /// Game installation directory (prompted for when unset)
    pub game_dir: Option<PathBuf>,
    /// Explicit PlayerData.dat location (platform default when unset)
    pub player_data_path: Option<PathBuf>,
    /// Directory the playlist file is written to
    pub output_dir: PathBuf,
    /// Catalog base URL, without trailing slash
    pub catalog_url: String,
    pub request_timeout: Duration,
    pub user_agent: String,
}

impl Default for ExportConfig {
    fn default() -> Self {
        Self {
            game_dir: None,
            player_data_path: None,
            output_dir: PathBuf::from("."),
            catalog_url: DEFAULT_CATALOG_URL.to_string(),
            request_timeout: DEFAULT_REQUEST_TIMEOUT,
            user_agent: default_user_agent(),
        }
    }
}

impl ExportConfig {
    /// Create a new configuration builder
    pub fn builder() -> ExportConfigBuilder {
        ExportConfigBuilder::default()
    }
}

fn default_user_agent() -> String {
    format!(
        "bsexport/{} ({})",
        env!("CARGO_PKG_VERSION"),
        std::env::consts::OS
    )
}

/// Builder for ExportConfig
#[derive(Debug, Clone, Default)]
pub struct ExportConfigBuilder {
    game_dir: Option<PathBuf>,
    player_data_path: Option<PathBuf>,
    output_dir: Option<PathBuf>,
    catalog_url: Option<String>,
    request_timeout: Option<Duration>,
    user_agent: Option<String>,
}

impl ExportConfigBuilder {
    /// Set the game installation directory
    pub fn game_dir<P: Into<PathBuf>>(mut self, path: P) -> Self {
        self.game_dir = Some(path.into());
        self
    }

    /// Override the PlayerData.dat location
    pub fn player_data_path<P: Into<PathBuf>>(mut self, path: P) -> Self {
        self.player_data_path = Some(path.into());
        self
    }

    /// Set the output directory for the playlist file
    pub fn output_dir<P: Into<PathBuf>>(mut self, path: P) -> Self {
        self.output_dir = Some(path.into());
        self
    }

    /// Set the catalog base URL
    pub fn catalog_url<S: Into<String>>(mut self, url: S) -> Self {
        self.catalog_url = Some(url.into());
        self
    }

    pub fn request_timeout(mut self, timeout: Duration) -> Self {
        self.request_timeout = Some(timeout);
        self
    }

    pub fn user_agent<S: Into<String>>(mut self, user_agent: S) -> Self {
        self.user_agent = Some(user_agent.into());
        self
    }

    /// Build the configuration
    pub fn build(self) -> ExportConfig {
        let default = ExportConfig::default();
        ExportConfig {
            game_dir: self.game_dir.or(default.game_dir),
            player_data_path: self.player_data_path.or(default.player_data_path),
            output_dir: self.output_dir.unwrap_or(default.output_dir),
            catalog_url: self
                .catalog_url
                .map(|url| url.trim_end_matches('/').to_string())
                .unwrap_or(default.catalog_url),
            request_timeout: self.request_timeout.unwrap_or(default.request_timeout),
            user_agent: self.user_agent.unwrap_or(default.user_agent),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builder_defaults() {
        let config = ExportConfig::builder().build();
        assert!(config.game_dir.is_none());
        assert!(config.player_data_path.is_none());
        assert_eq!(config.output_dir, PathBuf::from("."));
        assert_eq!(config.catalog_url, DEFAULT_CATALOG_URL);
        assert_eq!(config.request_timeout, DEFAULT_REQUEST_TIMEOUT);
        assert!(config.user_agent.starts_with("bsexport/"));
    }

    #[test]
    fn test_builder_overrides() {
        let config = ExportConfig::builder()
            .game_dir("/games/Beat Saber")
            .output_dir("out")
            .catalog_url("http://localhost:8080/")
            .request_timeout(Duration::from_secs(5))
            .build();
        assert_eq!(config.game_dir, Some(PathBuf::from("/games/Beat Saber")));
        assert_eq!(config.output_dir, PathBuf::from("out"));
        assert_eq!(config.catalog_url, "http://localhost:8080");
        assert_eq!(config.request_timeout, Duration::from_secs(5));
    }
}
