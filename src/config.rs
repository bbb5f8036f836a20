//! Client configuration

use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SearchConfig {
    #[serde(default)]
    pub base_url: String,
    // Territory code passed through to the upstream service (e.g. "GB")
    #[serde(default = "default_territory")]
    pub territory: String,
    #[serde(default)]
    pub user_agent: String,
    #[serde(default = "default_timeout")]
    pub timeout_secs: u64,
}

fn default_territory() -> String {
    "GB".to_string()
}

fn default_timeout() -> u64 {
    30
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self {
            base_url: String::new(),
            territory: default_territory(),
            user_agent: String::new(),
            timeout_secs: 30,
        }
    }
}

impl SearchConfig {
    /// Load from a JSON file, falling back to defaults on any failure
    pub fn load(path: &Path) -> Self {
        if path.exists() {
            if let Ok(content) = fs::read_to_string(path) {
                if let Ok(config) = serde_json::from_str(&content) {
                    return config;
                }
            }
        }
        Self::default()
    }

    pub fn save(&self, path: &Path) {
        if let Ok(content) = serde_json::to_string_pretty(self) {
            let _ = fs::write(path, content);
        }
    }
}
