use std::path::PathBuf;

use log::info;
use serde::{Deserialize, Serialize};

use anyhow::Result;

/// Expands environment variables in a string value.
/// Supports ${VAR} and $VAR syntax.
pub fn expand_env_vars(value: &str) -> Result<String> {
    shellexpand::env(value)
        .map(|s| s.into_owned())
        .map_err(|e| anyhow::anyhow!("Failed to expand environment variable in '{}': {}", value, e))
}

/// Coordinates of the workspace API plus the Guacamole session options.
///
/// Every recognized option is enumerated here instead of being looked up from
/// the environment at the point of use, so a caller can see the whole surface
/// in one place. Loadable from a TOML file or from the process environment.
#[derive(Deserialize, Serialize, Debug, Clone, PartialEq)]
pub struct WorkspaceConfig {
    pub api_url: String,
    pub workspace_id: String,
    pub service_id: String,
    #[serde(default)]
    pub guac: GuacOptions,
}

/// Optional Guacamole clipboard/drive parameters. Values are passed through
/// to the connection descriptor verbatim; an unset option never appears in
/// the descriptor at all.
#[derive(Deserialize, Serialize, Debug, Clone, PartialEq, Default)]
pub struct GuacOptions {
    pub disable_copy: Option<String>,
    pub disable_paste: Option<String>,
    pub enable_drive: Option<String>,
    pub drive_name: Option<String>,
    pub drive_path: Option<String>,
    pub disable_download: Option<String>,
}

impl WorkspaceConfig {
    /// Resolves the configuration: an existing file (the given path, or the
    /// default location) wins, otherwise the process environment is read.
    pub fn load(config_path: Option<&PathBuf>) -> Result<Self> {
        let path = config_path
            .filter(|p| p.exists())
            .cloned()
            .or_else(|| {
                let default_path = crate::CONFIG_FILE.as_path().to_path_buf();
                default_path.exists().then_some(default_path)
            });

        match path {
            Some(path) => {
                info!("Using configuration file: {}", path.display());
                let toml_config = std::fs::read_to_string(&path)?;
                Self::from_str(&toml_config)
            }
            None => {
                info!("No configuration file found, reading the environment");
                Self::from_env()
            }
        }
    }

    pub fn from_str(config: &str) -> Result<Self> {
        let config: WorkspaceConfig = toml::from_str(config)?;
        info!(
            "Loaded config: workspace={}, service={}",
            config.workspace_id, config.service_id
        );
        Ok(config)
    }

    /// Reads the configuration from the process environment: `API_URL`,
    /// `WORKSPACE_ID` and `SERVICE_ID` are required, the six `GUAC_*`
    /// session options are optional.
    pub fn from_env() -> Result<Self> {
        Self::from_env_lookup(|key| std::env::var(key).ok())
    }

    pub fn from_env_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let require = |key: &str| {
            lookup(key).ok_or_else(|| {
                anyhow::anyhow!("{key} is not set; it is required to reach the workspace API")
            })
        };

        Ok(Self {
            api_url: require("API_URL")?,
            workspace_id: require("WORKSPACE_ID")?,
            service_id: require("SERVICE_ID")?,
            guac: GuacOptions {
                disable_copy: lookup("GUAC_DISABLE_COPY"),
                disable_paste: lookup("GUAC_DISABLE_PASTE"),
                enable_drive: lookup("GUAC_ENABLE_DRIVE"),
                drive_name: lookup("GUAC_DRIVE_NAME"),
                drive_path: lookup("GUAC_DRIVE_PATH"),
                disable_download: lookup("GUAC_DISABLE_DOWNLOAD"),
            },
        })
    }

    pub fn to_str(&self) -> Result<String> {
        toml::to_string(self).map_err(std::convert::Into::into)
    }
}
