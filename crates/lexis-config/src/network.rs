use serde::{Deserialize, Serialize};

fn default_timeout_secs() -> u64 {
    10
}

fn default_user_agent() -> String {
    "Mozilla/5.0 (Windows NT 10.0; Win64; x64) AppleWebKit/537.36 \
     (KHTML, like Gecko) Chrome/122.0.0.0 Safari/537.36"
        .to_string()
}

fn default_accept_language() -> String {
    "en-US,en;q=0.9,fr;q=0.8,de;q=0.7".to_string()
}

/// Settings for outgoing requests to the translation services
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct NetworkConfig {
    /// Per-request timeout, no retries
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,
    #[serde(default = "default_user_agent")]
    pub user_agent: String,
    #[serde(default = "default_accept_language")]
    pub accept_language: String,
    /// Bound for the translation cache, unbounded when unset
    #[serde(default)]
    pub cache_capacity: Option<usize>,
}

impl NetworkConfig {
    pub fn apply_overrides(&mut self, var: &dyn Fn(&str) -> Option<String>) {
        if let Some(timeout_secs) = var("LEXIS_TIMEOUT_SECS").and_then(|v| v.parse().ok()) {
            self.timeout_secs = timeout_secs;
        }
        if let Some(capacity) = var("LEXIS_CACHE_CAPACITY").and_then(|v| v.parse().ok()) {
            self.cache_capacity = Some(capacity);
        }
    }
}

impl Default for NetworkConfig {
    fn default() -> Self {
        Self {
            timeout_secs: default_timeout_secs(),
            user_agent: default_user_agent(),
            accept_language: default_accept_language(),
            cache_capacity: None,
        }
    }
}
