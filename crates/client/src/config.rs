//! Headless client configuration structures and loaders.
use std::env;
use std::path::PathBuf;

use inventory_content::ContentFactory;

/// Configuration required to bootstrap a playback session.
#[derive(Clone, Debug)]
pub struct ClientConfig {
    /// Directory holding `config.toml`, `items.ron` and `scenarios/`.
    pub data_dir: PathBuf,
    /// Scenario file name without extension.
    pub scenario: String,
    /// Directory for `client.log`. `None` selects the platform default.
    pub log_dir: Option<PathBuf>,
    pub message_capacity: usize,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            data_dir: ContentFactory::bundled().data_dir().to_path_buf(),
            scenario: "demo".to_string(),
            log_dir: None,
            message_capacity: 32,
        }
    }
}

impl ClientConfig {
    /// Construct configuration from process environment variables.
    ///
    /// Environment variables:
    /// - `INVENTORY_DATA_DIR` - Content directory (default: bundled data)
    /// - `INVENTORY_SCENARIO` - Scenario to play (default: demo)
    /// - `INVENTORY_LOG_DIR` - Log directory (default: platform-specific)
    /// - `INVENTORY_MESSAGE_CAPACITY` - Message log capacity (default: 32)
    pub fn from_env() -> Self {
        let mut config = Self::default();

        if let Ok(dir) = env::var("INVENTORY_DATA_DIR") {
            config.data_dir = PathBuf::from(dir);
        }

        if let Ok(name) = env::var("INVENTORY_SCENARIO")
            && !name.trim().is_empty()
        {
            config.scenario = name.trim().to_string();
        }

        config.log_dir = env::var("INVENTORY_LOG_DIR").ok().map(PathBuf::from);

        if let Some(capacity) = read_env::<usize>("INVENTORY_MESSAGE_CAPACITY") {
            config.message_capacity = capacity.max(1);
        }

        config
    }

    pub fn content(&self) -> ContentFactory {
        ContentFactory::new(&self.data_dir)
    }
}

fn read_env<T>(key: &str) -> Option<T>
where
    T: std::str::FromStr,
{
    env::var(key).ok()?.parse().ok()
}
