use std::path::PathBuf;

use serde::{Deserialize, Serialize};

fn default_data_dir() -> PathBuf {
    dirs::data_dir()
        .map(|dir| dir.join("lexis"))
        .unwrap_or_else(|| PathBuf::from("."))
}

fn default_history_file() -> String {
    "history.json".to_string()
}

fn default_stats_file() -> String {
    "review_stats.json".to_string()
}

/// Where history and review statistics are persisted
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct StorageConfig {
    #[serde(default = "default_data_dir")]
    pub data_dir: PathBuf,
    #[serde(default = "default_history_file")]
    pub history_file: String,
    #[serde(default = "default_stats_file")]
    pub stats_file: String,
}

impl StorageConfig {
    pub fn apply_overrides(&mut self, var: &dyn Fn(&str) -> Option<String>) {
        if let Some(dir) = var("LEXIS_DATA_DIR") {
            self.data_dir = PathBuf::from(dir);
        }
    }

    pub fn history_path(&self) -> PathBuf {
        self.data_dir.join(&self.history_file)
    }

    pub fn stats_path(&self) -> PathBuf {
        self.data_dir.join(&self.stats_file)
    }
}

impl Default for StorageConfig {
    fn default() -> Self {
        Self {
            data_dir: default_data_dir(),
            history_file: default_history_file(),
            stats_file: default_stats_file(),
        }
    }
}
