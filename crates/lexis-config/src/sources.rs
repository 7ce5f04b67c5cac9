use serde::{Deserialize, Serialize};

fn default_enabled() -> bool {
    true
}

fn default_google_url() -> String {
    "https://translate.googleapis.com".to_string()
}

fn default_linguee_url() -> String {
    "https://www.linguee.com".to_string()
}

fn default_pons_url() -> String {
    "https://en.pons.com".to_string()
}

fn default_glosbe_url() -> String {
    "https://glosbe.com".to_string()
}

/// Endpoints of the translation services and which secondaries are queried
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct SourcesConfig {
    #[serde(default = "default_google_url")]
    pub google_url: String,
    #[serde(default = "default_linguee_url")]
    pub linguee_url: String,
    #[serde(default = "default_pons_url")]
    pub pons_url: String,
    #[serde(default = "default_glosbe_url")]
    pub glosbe_url: String,
    #[serde(default = "default_enabled")]
    pub linguee_enabled: bool,
    #[serde(default = "default_enabled")]
    pub pons_enabled: bool,
    #[serde(default = "default_enabled")]
    pub glosbe_enabled: bool,
}

impl Default for SourcesConfig {
    fn default() -> Self {
        Self {
            google_url: default_google_url(),
            linguee_url: default_linguee_url(),
            pons_url: default_pons_url(),
            glosbe_url: default_glosbe_url(),
            linguee_enabled: default_enabled(),
            pons_enabled: default_enabled(),
            glosbe_enabled: default_enabled(),
        }
    }
}
