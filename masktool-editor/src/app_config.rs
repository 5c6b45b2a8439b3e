use masktool_data::{MetaDataSource, PersistenceResult};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Per-user state that outlives a session, kept under the project root
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(default)]
pub struct AppConfig {
    pub x: i32,
    pub y: i32,
}

impl Default for AppConfig {
    fn default() -> Self {
        AppConfig { x: 100, y: 100 }
    }
}

impl AppConfig {
    pub fn path(root_path: &Path) -> PathBuf {
        root_path.join(".art").join("config.meta")
    }

    /// Missing or unreadable config falls back to defaults
    pub fn load(
        source: &dyn MetaDataSource,
        root_path: &Path,
    ) -> Self {
        let path = Self::path(root_path);
        let stored = match source.read_meta_data(&path) {
            Ok(Some(stored)) => stored,
            Ok(None) => return AppConfig::default(),
            Err(e) => {
                log::warn!("Could not read app config {:?}, using defaults: {}", path, e);
                return AppConfig::default();
            }
        };

        match serde_json::from_value(stored) {
            Ok(config) => config,
            Err(e) => {
                log::warn!("App config {:?} is malformed, using defaults: {}", path, e);
                AppConfig::default()
            }
        }
    }

    pub fn save(
        &self,
        source: &mut dyn MetaDataSource,
        root_path: &Path,
    ) -> PersistenceResult<()> {
        let value = serde_json::to_value(self)?;
        source.write_meta_data(&Self::path(root_path), &value)
    }

    pub fn set_window_position(
        &mut self,
        x: i32,
        y: i32,
    ) {
        self.x = x;
        self.y = y;
    }
}
