use serde::{Deserialize, Serialize};

fn default_batch_size() -> usize {
    15
}

fn default_fallback_size() -> usize {
    10
}

fn default_min_history() -> usize {
    3
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ReviewConfig {
    /// Maximum cards per session
    #[serde(default = "default_batch_size")]
    pub batch_size: usize,
    /// Weakest cards picked when nothing is due
    #[serde(default = "default_fallback_size")]
    pub fallback_size: usize,
    #[serde(default = "default_min_history")]
    pub min_history: usize,
}

impl Default for ReviewConfig {
    fn default() -> Self {
        Self {
            batch_size: default_batch_size(),
            fallback_size: default_fallback_size(),
            min_history: default_min_history(),
        }
    }
}
