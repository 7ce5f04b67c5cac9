use std::env;

use serde::{Deserialize, Serialize};

use self::lookup::LookupConfig;
use self::network::NetworkConfig;
use self::review::ReviewConfig;
use self::server::ServerConfig;
use self::sources::SourcesConfig;
use self::storage::StorageConfig;

pub mod lookup;
pub mod network;
pub mod review;
pub mod server;
pub mod sources;
pub mod storage;

fn default_src() -> String {
    "de".to_string()
}

fn default_tgt() -> String {
    "fr".to_string()
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub network: NetworkConfig,
    pub sources: SourcesConfig,
    pub lookup: LookupConfig,
    pub review: ReviewConfig,
    pub storage: StorageConfig,
    pub server: ServerConfig,

    /// Direction used when none is given on the command line or in a request
    #[serde(default = "default_src")]
    pub default_src: String,
    #[serde(default = "default_tgt")]
    pub default_tgt: String,
}

impl Config {
    pub fn new() -> Self {
        let mut config = Self::default();
        config.apply_env();
        config
    }

    /// `LEXIS_*` environment variables take precedence over file and defaults
    pub fn apply_env(&mut self) {
        self.apply_overrides(&|key| env::var(key).ok());
    }

    pub fn apply_overrides(&mut self, var: &dyn Fn(&str) -> Option<String>) {
        self.network.apply_overrides(var);
        self.storage.apply_overrides(var);
        self.server.apply_overrides(var);

        if let Some(src) = var("LEXIS_DEFAULT_SRC") {
            self.default_src = src;
        }
        if let Some(tgt) = var("LEXIS_DEFAULT_TGT") {
            self.default_tgt = tgt;
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            network: NetworkConfig::default(),
            sources: SourcesConfig::default(),
            lookup: LookupConfig::default(),
            review: ReviewConfig::default(),
            storage: StorageConfig::default(),
            server: ServerConfig::default(),
            default_src: default_src(),
            default_tgt: default_tgt(),
        }
    }
}
