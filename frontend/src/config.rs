use anyhow::{Context, Result};
use serde::Deserialize;
use shared::CourseCardConfig;

use crate::services::logging::LogLevel;

const APP_CONFIG: &str = include_str!("../app-config.json");

/// Configuration for the course dashboard
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    pub log_level: LogLevel,
    /// Remote collector for log records, console only when absent
    pub log_endpoint: Option<String>,
    pub card: CourseCardConfig,
    /// How long skeleton cards stay up before the course list appears
    pub simulated_load_ms: u32,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            log_level: LogLevel::Info,
            log_endpoint: None,
            card: CourseCardConfig::default(),
            simulated_load_ms: 600,
        }
    }
}

impl AppConfig {
    pub fn from_json(json: &str) -> Result<Self> {
        serde_json::from_str(json).context("Invalid app configuration")
    }

    /// Configuration bundled at build time
    pub fn load() -> Result<Self> {
        Self::from_json(APP_CONFIG)
    }
}
