use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::bot::DEFAULT_REPLY_DELAY_MS;

pub const DEFAULT_CONFIG_PATH: &str = "config/chatbot.json";

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AppConfig {
    /// Độ trễ (ms) trước khi bot trả lời
    #[serde(default = "default_reply_delay_ms")]
    pub reply_delay_ms: u64,
    /// Tiêu đề cửa sổ desktop
    #[serde(default = "default_window_title")]
    pub window_title: String,
}

fn default_reply_delay_ms() -> u64 {
    DEFAULT_REPLY_DELAY_MS
}

fn default_window_title() -> String {
    "AI Assistant".to_string()
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            reply_delay_ms: default_reply_delay_ms(),
            window_title: default_window_title(),
        }
    }
}

pub fn load_config(path: &str) -> AppConfig {
    let path = Path::new(path);
    match fs::read_to_string(path) {
        Ok(content) => match serde_json::from_str::<AppConfig>(&content) {
            Ok(config) => config,
            Err(err) => {
                log::warn!("Failed to parse config file {}: {err}", path.display());
                AppConfig::default()
            }
        },
        Err(err) => {
            log::info!(
                "Config file {} not found ({err}); using defaults",
                path.display()
            );
            AppConfig::default()
        }
    }
}
