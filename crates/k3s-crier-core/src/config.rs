use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::{CrierError, Result};

const CONFIG_FILE: &str = "config.toml";

/// Public K3s channel server endpoint
pub const DEFAULT_CHANNELS_URL: &str = "https://update.k3s.io/v1-release/channels";

/// Channel queried when none is named on the command line
pub const DEFAULT_CHANNEL: &str = "stable";

/// Global configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    /// Channel endpoint to query
    #[serde(default = "default_channels_url")]
    pub channels_url: String,

    /// Channel looked up when no argument is given
    #[serde(default = "default_channel")]
    pub default_channel: String,
}

fn default_channels_url() -> String {
    DEFAULT_CHANNELS_URL.to_string()
}

fn default_channel() -> String {
    DEFAULT_CHANNEL.to_string()
}

impl Default for Config {
    fn default() -> Self {
        Self {
            channels_url: default_channels_url(),
            default_channel: default_channel(),
        }
    }
}

impl Config {
    /// Load config from base directory
    ///
    /// A missing file yields the defaults; a file that does not parse
    /// is an error.
    pub fn load(base_dir: &Path) -> Result<Self> {
        let path = base_dir.join(CONFIG_FILE);
        if !path.exists() {
            return Ok(Self::default());
        }

        let content = fs::read_to_string(&path)?;
        let config: Config = toml::from_str(&content).map_err(|e| CrierError::ConfigParse {
            path: path.clone(),
            message: e.to_string(),
        })?;

        Ok(config)
    }
}
