// SPDX-FileCopyrightText: 2026 Depot Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Configuration model structs for Depot.
//!
//! All structs use `#[serde(deny_unknown_fields)]` to reject unrecognized
//! config keys at startup, providing actionable error messages.

use serde::{Deserialize, Serialize};

/// Top-level Depot configuration.
///
/// Loaded from TOML files following XDG hierarchy, with environment variable overrides.
/// All sections are optional and default to sensible values.
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
#[serde(deny_unknown_fields)]
pub struct DepotConfig {
    /// Application identity and logging.
    #[serde(default)]
    pub app: AppConfig,

    /// Interactive console behaviour.
    #[serde(default)]
    pub console: ConsoleConfig,

    /// Record display settings.
    #[serde(default)]
    pub display: DisplayConfig,

    /// Shipment defaults.
    #[serde(default)]
    pub shipment: ShipmentConfig,
}

/// Application identity and logging configuration.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(deny_unknown_fields)]
pub struct AppConfig {
    /// Name shown in the console banner and prompt.
    #[serde(default = "default_app_name")]
    pub name: String,

    /// Logging level (trace, debug, info, warn, error).
    #[serde(default = "default_log_level")]
    pub log_level: String,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            name: default_app_name(),
            log_level: default_log_level(),
        }
    }
}

fn default_app_name() -> String {
    "depot".to_string()
}

fn default_log_level() -> String {
    "warn".to_string()
}

/// Interactive console configuration.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(deny_unknown_fields)]
pub struct ConsoleConfig {
    /// Colorize menus and messages. Ignored when stdout is not a terminal.
    #[serde(default = "default_color")]
    pub color: bool,

    /// Maximum number of readline history entries kept for the session.
    #[serde(default = "default_history_size")]
    pub history_size: usize,
}

impl Default for ConsoleConfig {
    fn default() -> Self {
        Self {
            color: default_color(),
            history_size: default_history_size(),
        }
    }
}

fn default_color() -> bool {
    true
}

fn default_history_size() -> usize {
    100
}

/// Record display configuration.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(deny_unknown_fields)]
pub struct DisplayConfig {
    /// strftime pattern for timestamps, rendered in local time.
    #[serde(default = "default_timestamp_format")]
    pub timestamp_format: String,
}

impl Default for DisplayConfig {
    fn default() -> Self {
        Self {
            timestamp_format: default_timestamp_format(),
        }
    }
}

fn default_timestamp_format() -> String {
    "%Y-%m-%d %H:%M:%S".to_string()
}

/// Shipment defaults.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(deny_unknown_fields)]
pub struct ShipmentConfig {
    /// Days between receiving or dispatching a shipment and its expected delivery.
    #[serde(default = "default_delivery_days")]
    pub default_delivery_days: u32,
}

impl Default for ShipmentConfig {
    fn default() -> Self {
        Self {
            default_delivery_days: default_delivery_days(),
        }
    }
}

fn default_delivery_days() -> u32 {
    7
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_match_console_conventions() {
        let config = DepotConfig::default();
        assert_eq!(config.app.name, "depot");
        assert_eq!(config.app.log_level, "warn");
        assert!(config.console.color);
        assert_eq!(config.console.history_size, 100);
        assert_eq!(config.display.timestamp_format, "%Y-%m-%d %H:%M:%S");
        assert_eq!(config.shipment.default_delivery_days, 7);
    }

    #[test]
    fn partial_section_keeps_other_defaults() {
        let config: DepotConfig = toml::from_str("[console]\ncolor = false\n").unwrap();
        assert!(!config.console.color);
        assert_eq!(config.console.history_size, 100);
    }

    #[test]
    fn serializes_back_to_toml() {
        let rendered = toml::to_string_pretty(&DepotConfig::default()).unwrap();
        assert!(rendered.contains("[shipment]"));
        assert!(rendered.contains("default_delivery_days = 7"));
    }
}
