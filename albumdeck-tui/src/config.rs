use std::path::{Path, PathBuf};

use albumdeck_core::{
    DEFAULT_PAGE_SIZE, navigation::DEFAULT_WINDOW_SIZE, window::DEFAULT_COLUMN_WIDTH,
};
use anyhow::Context as _;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
#[serde(default)]
pub struct Config {
    #[serde(default)]
    pub general: General,
    #[serde(default)]
    pub server: Server,
    #[serde(default)]
    pub navigation: Navigation,
}
impl Config {
    pub const FILENAME: &str = "albumdeck.toml";

    /// Loads the config at `path`, falling back to defaults if it doesn't exist.
    pub fn load(path: &Path) -> anyhow::Result<Self> {
        match std::fs::read_to_string(path) {
            Ok(contents) => Self::parse(&contents)
                .with_context(|| format!("failed to parse {}", path.display())),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                tracing::info!("no config file found at {}, using defaults", path.display());
                Ok(Config::default())
            }
            Err(e) => Err(e).with_context(|| format!("failed to read {}", path.display())),
        }
    }

    pub fn parse(contents: &str) -> anyhow::Result<Self> {
        Ok(toml::from_str(contents)?)
    }

    pub fn save(&self, path: &Path) -> anyhow::Result<()> {
        std::fs::write(path, toml::to_string(self)?)
            .with_context(|| format!("failed to write {}", path.display()))?;
        tracing::info!("saved config to {}", path.display());
        Ok(())
    }

    pub fn default_path() -> PathBuf {
        PathBuf::from(Self::FILENAME)
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct General {
    pub tick_rate_ms: u64,
    /// How often to poll the player for what's playing.
    pub status_refresh_secs: u64,
}
impl Default for General {
    fn default() -> Self {
        Self {
            tick_rate_ms: 100,
            status_refresh_secs: 5,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct Server {
    pub api_base_url: String,
    pub access_token: String,
}
impl Default for Server {
    fn default() -> Self {
        Self {
            api_base_url: albumdeck_spotify::Client::API_BASE_URL.to_string(),
            access_token: String::new(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct Navigation {
    /// Albums shown per window.
    pub window_size: usize,
    /// Albums requested per page at startup.
    pub page_size: usize,
    /// Display width of the artist and title columns.
    pub column_width: usize,
}
impl Default for Navigation {
    fn default() -> Self {
        Self {
            window_size: DEFAULT_WINDOW_SIZE,
            page_size: DEFAULT_PAGE_SIZE,
            column_width: DEFAULT_COLUMN_WIDTH,
        }
    }
}
