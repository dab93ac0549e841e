use std::cell::RefCell;

use gloo::net::http::Request;
use serde::{Deserialize, Serialize};
use wasm_bindgen_futures::spawn_local;

/// Severity of a log record, ordered from least to most severe
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LogLevel {
    Debug,
    #[default]
    Info,
    Warn,
    Error,
}

impl LogLevel {
    pub fn as_str(&self) -> &'static str {
        match self {
            LogLevel::Debug => "debug",
            LogLevel::Info => "info",
            LogLevel::Warn => "warn",
            LogLevel::Error => "error",
        }
    }
}

#[derive(Debug, Clone, Default)]
struct LoggerSettings {
    min_level: LogLevel,
    endpoint: Option<String>,
}

thread_local! {
    static SETTINGS: RefCell<LoggerSettings> = RefCell::new(LoggerSettings::default());
}

#[derive(Debug, Serialize)]
struct LogRequest {
    level: String,
    message: String,
    component: Option<String>,
}

pub struct Logger;

impl Logger {
    /// Install the minimum level and the optional remote collector.
    /// Until called, info and above go to the console only.
    pub fn init(min_level: LogLevel, endpoint: Option<String>) {
        SETTINGS.with(|settings| {
            *settings.borrow_mut() = LoggerSettings { min_level, endpoint };
        });
    }

    pub fn debug_with_component(component: &str, message: &str) {
        Self::log(LogLevel::Debug, message, Some(component.to_string()));
    }

    pub fn info_with_component(component: &str, message: &str) {
        Self::log(LogLevel::Info, message, Some(component.to_string()));
    }

    pub fn warn_with_component(component: &str, message: &str) {
        Self::log(LogLevel::Warn, message, Some(component.to_string()));
    }

    pub fn error_with_component(component: &str, message: &str) {
        Self::log(LogLevel::Error, message, Some(component.to_string()));
    }

    fn log(level: LogLevel, message: &str, component: Option<String>) {
        let settings = SETTINGS.with(|settings| settings.borrow().clone());
        if !should_log(level, settings.min_level) {
            return;
        }

        let line = format_line(level, message, component.as_deref());
        match level {
            LogLevel::Debug => gloo::console::debug!(line),
            LogLevel::Info => gloo::console::info!(line),
            LogLevel::Warn => gloo::console::warn!(line),
            LogLevel::Error => gloo::console::error!(line),
        }

        let Some(endpoint) = settings.endpoint else {
            return;
        };

        let request = LogRequest {
            level: level.as_str().to_string(),
            message: message.to_string(),
            component,
        };

        // Send log asynchronously without blocking
        spawn_local(async move {
            if let Ok(request) = Request::post(&endpoint).json(&request) {
                let _ = request.send().await;
            }
        });
    }
}

fn should_log(level: LogLevel, min_level: LogLevel) -> bool {
    level >= min_level
}

fn format_line(level: LogLevel, message: &str, component: Option<&str>) -> String {
    match component {
        Some(component) => format!("[{}] [{}] {}", level.as_str(), component, message),
        None => format!("[{}] {}", level.as_str(), message),
    }
}
