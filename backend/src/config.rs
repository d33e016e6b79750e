//! Dashboard configuration file support.
//!
//! Settings are read from a `dashboard.toml` file and can be overridden by a
//! handful of environment variables. Every section and key is optional; a
//! missing file yields the built-in defaults.

use log::{debug, info};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

use crate::error::{DashboardError, DashboardResult};
use crate::models::TeamColumn;

/// Environment variable naming an explicit configuration file.
pub const CONFIG_ENV: &str = "DASHBOARD_CONFIG";
/// Environment variable pointing the loader at a CSV directory.
pub const DATA_DIR_ENV: &str = "DASHBOARD_DATA_DIR";

/// Full dashboard configuration.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct DashboardConfig {
    #[serde(default)]
    pub server: ServerSettings,
    #[serde(default)]
    pub data: DataSettings,
    #[serde(default)]
    pub dashboard: DashboardSettings,
}

/// Listener settings for the HTTP server.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ServerSettings {
    #[serde(default = "default_host")]
    pub host: String,
    #[serde(default = "default_port")]
    pub port: u16,
}

/// Where the tables come from.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SourceKind {
    /// The season snapshot compiled into the binary.
    #[default]
    Embedded,
    /// CSV files read from `data.directory`.
    Directory,
}

/// Dataset location settings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DataSettings {
    #[serde(default)]
    pub source: SourceKind,
    #[serde(default)]
    pub directory: Option<PathBuf>,
    #[serde(default = "default_teams_file")]
    pub teams_file: String,
    #[serde(default = "default_players_file")]
    pub players_file: String,
    #[serde(default = "default_monthly_file")]
    pub monthly_file: String,
}

/// View-model constants.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DashboardSettings {
    /// Label shown in the "top scorer" summary card.
    #[serde(default = "default_top_scorer")]
    pub top_scorer: String,
    /// Initial value of the minimum-PPG slider.
    #[serde(default = "default_min_ppg")]
    pub default_min_ppg: f64,
    /// Heatmap columns used when a request names none.
    #[serde(default = "default_heatmap_columns")]
    pub heatmap_columns: Vec<TeamColumn>,
}

fn default_host() -> String {
    "0.0.0.0".to_string()
}

fn default_port() -> u16 {
    8080
}

fn default_teams_file() -> String {
    "teams.csv".to_string()
}

fn default_players_file() -> String {
    "players.csv".to_string()
}

fn default_monthly_file() -> String {
    "monthly.csv".to_string()
}

fn default_top_scorer() -> String {
    "SGA – 32.7".to_string()
}

fn default_min_ppg() -> f64 {
    108.0
}

fn default_heatmap_columns() -> Vec<TeamColumn> {
    TeamColumn::ALL.to_vec()
}

impl Default for ServerSettings {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
        }
    }
}

impl Default for DataSettings {
    fn default() -> Self {
        Self {
            source: SourceKind::default(),
            directory: None,
            teams_file: default_teams_file(),
            players_file: default_players_file(),
            monthly_file: default_monthly_file(),
        }
    }
}

impl Default for DashboardSettings {
    fn default() -> Self {
        Self {
            top_scorer: default_top_scorer(),
            default_min_ppg: default_min_ppg(),
            heatmap_columns: default_heatmap_columns(),
        }
    }
}

impl std::str::FromStr for DashboardConfig {
    type Err = DashboardError;

    fn from_str(content: &str) -> Result<Self, Self::Err> {
        toml::from_str(content).map_err(|e| {
            DashboardError::Configuration(format!("Failed to parse config file: {}", e))
        })
    }
}

impl DashboardConfig {
    /// Load configuration from a TOML file.
    pub fn from_file<P: AsRef<Path>>(path: P) -> DashboardResult<Self> {
        let content = fs::read_to_string(path.as_ref()).map_err(|e| {
            DashboardError::Configuration(format!(
                "Failed to read config file {}: {}",
                path.as_ref().display(),
                e
            ))
        })?;
        content.parse()
    }

    /// Load the first file in `paths` that exists.
    ///
    /// `Ok(None)` means no candidate exists. A candidate that exists but
    /// cannot be read or parsed is an error.
    pub fn from_search_paths<P: AsRef<Path>>(paths: &[P]) -> DashboardResult<Option<Self>> {
        for path in paths {
            let path = path.as_ref();
            if path.exists() {
                debug!("Using configuration file {}", path.display());
                return Self::from_file(path).map(Some);
            }
        }
        Ok(None)
    }

    /// Load configuration from the default location.
    ///
    /// Searches for `dashboard.toml` in:
    /// 1. Current directory
    /// 2. `backend/` directory
    /// 3. Parent directory
    pub fn from_default_location() -> DashboardResult<Option<Self>> {
        Self::from_search_paths(&[
            PathBuf::from("dashboard.toml"),
            PathBuf::from("backend/dashboard.toml"),
            PathBuf::from("../dashboard.toml"),
        ])
    }

    /// Resolve the configuration the server starts with.
    ///
    /// An explicit `DASHBOARD_CONFIG` path must exist. Without it the default
    /// locations are searched and, when none exists, the built-in defaults
    /// apply. A found file that fails to parse is an error.
    /// Environment overrides are applied last and the result is validated.
    pub fn load() -> DashboardResult<Self> {
        let mut config = match std::env::var(CONFIG_ENV) {
            Ok(path) => Self::from_file(&path)?,
            Err(_) => match Self::from_default_location()? {
                Some(config) => config,
                None => {
                    info!("No dashboard.toml found, using defaults");
                    Self::default()
                }
            },
        };
        config.apply_overrides(|key| std::env::var(key).ok())?;
        config.validate()?;
        Ok(config)
    }

    /// Apply `HOST`, `PORT` and `DASHBOARD_DATA_DIR` from `lookup`.
    ///
    /// A data directory override also switches the source to `directory`.
    pub fn apply_overrides<F>(&mut self, lookup: F) -> DashboardResult<()>
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(host) = lookup("HOST") {
            self.server.host = host;
        }
        if let Some(port) = lookup("PORT") {
            self.server.port = port.parse().map_err(|_| {
                DashboardError::Configuration(format!("Invalid PORT value '{}'", port))
            })?;
        }
        if let Some(dir) = lookup(DATA_DIR_ENV) {
            self.data.source = SourceKind::Directory;
            self.data.directory = Some(PathBuf::from(dir));
        }
        Ok(())
    }

    /// Reject settings the server cannot start with.
    pub fn validate(&self) -> DashboardResult<()> {
        if self.data.source == SourceKind::Directory && self.data.directory.is_none() {
            return Err(DashboardError::Configuration(
                "data.source = \"directory\" requires data.directory".to_string(),
            ));
        }
        if !self.dashboard.default_min_ppg.is_finite() {
            return Err(DashboardError::Configuration(
                "dashboard.default_min_ppg must be a finite number".to_string(),
            ));
        }
        if self.dashboard.heatmap_columns.is_empty() {
            return Err(DashboardError::Configuration(
                "dashboard.heatmap_columns must name at least one column".to_string(),
            ));
        }
        Ok(())
    }

    /// `host:port` string the listener binds to.
    pub fn bind_address(&self) -> String {
        format!("{}:{}", self.server.host, self.server.port)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn test_empty_config_uses_defaults() {
        let config: DashboardConfig = "".parse().unwrap();
        assert_eq!(config, DashboardConfig::default());
        assert_eq!(config.server.port, 8080);
        assert_eq!(config.data.source, SourceKind::Embedded);
        assert_eq!(config.dashboard.top_scorer, "SGA – 32.7");
        assert_eq!(config.dashboard.heatmap_columns.len(), 6);
    }

    #[test]
    fn test_parse_full_config() {
        let toml = r#"
[server]
host = "127.0.0.1"
port = 9000

[data]
source = "directory"
directory = "/srv/league"
teams_file = "teams_2025.csv"

[dashboard]
top_scorer = "Giannis – 30.4"
default_min_ppg = 112.5
heatmap_columns = ["PPG", "3P_PCT"]
"#;

        let config: DashboardConfig = toml.parse().unwrap();
        assert_eq!(config.bind_address(), "127.0.0.1:9000");
        assert_eq!(config.data.source, SourceKind::Directory);
        assert_eq!(config.data.directory, Some(PathBuf::from("/srv/league")));
        assert_eq!(config.data.teams_file, "teams_2025.csv");
        assert_eq!(config.data.players_file, "players.csv");
        assert_eq!(config.dashboard.default_min_ppg, 112.5);
        assert_eq!(
            config.dashboard.heatmap_columns,
            vec![TeamColumn::Ppg, TeamColumn::ThreePct]
        );
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_unknown_heatmap_column_is_rejected() {
        let toml = r#"
[dashboard]
heatmap_columns = ["PPG", "STEALS"]
"#;
        let err = toml.parse::<DashboardConfig>().unwrap_err();
        assert!(matches!(err, DashboardError::Configuration(_)));
    }

    #[test]
    fn test_from_file() {
        let mut file = NamedTempFile::new().unwrap();
        write!(file, "[server]\nport = 3000\n").unwrap();

        let config = DashboardConfig::from_file(file.path()).unwrap();
        assert_eq!(config.server.port, 3000);
        assert_eq!(config.server.host, "0.0.0.0");
    }

    #[test]
    fn test_from_missing_file() {
        let err = DashboardConfig::from_file("/nonexistent/dashboard.toml").unwrap_err();
        assert!(err.to_string().contains("Failed to read config file"));
    }

    #[test]
    fn test_overrides() {
        let vars: HashMap<&str, &str> = [
            ("HOST", "localhost"),
            ("PORT", "8181"),
            (DATA_DIR_ENV, "/data/league"),
        ]
        .into_iter()
        .collect();

        let mut config = DashboardConfig::default();
        config
            .apply_overrides(|key| vars.get(key).map(|v| v.to_string()))
            .unwrap();

        assert_eq!(config.bind_address(), "localhost:8181");
        assert_eq!(config.data.source, SourceKind::Directory);
        assert_eq!(config.data.directory, Some(PathBuf::from("/data/league")));
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_invalid_port_override() {
        let mut config = DashboardConfig::default();
        let err = config
            .apply_overrides(|key| (key == "PORT").then(|| "eighty".to_string()))
            .unwrap_err();
        assert!(err.to_string().contains("eighty"));
    }

    #[test]
    fn test_validate_directory_without_path() {
        let mut config = DashboardConfig::default();
        config.data.source = SourceKind::Directory;
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_validate_empty_heatmap_columns() {
        let mut config = DashboardConfig::default();
        config.dashboard.heatmap_columns.clear();
        assert!(config.validate().is_err());
    }
}
