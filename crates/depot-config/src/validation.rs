// SPDX-FileCopyrightText: 2026 Depot Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Post-deserialization validation for configuration values.
//!
//! Validates semantic constraints that cannot be expressed via serde attributes,
//! such as known log levels and renderable timestamp patterns.

use chrono::format::{Item, StrftimeItems};

use crate::diagnostic::ConfigError;
use crate::model::DepotConfig;

/// Log levels accepted by `app.log_level`.
pub const LOG_LEVELS: &[&str] = &["trace", "debug", "info", "warn", "error"];

/// Upper bound for `shipment.default_delivery_days` (ten years).
pub const MAX_DELIVERY_DAYS: u32 = 3650;

/// Validate a deserialized configuration for semantic correctness.
///
/// Returns `Ok(())` if all validations pass, or `Err(Vec<ConfigError>)` with
/// all collected validation errors (does not fail fast).
pub fn validate_config(config: &DepotConfig) -> Result<(), Vec<ConfigError>> {
    let mut errors = Vec::new();

    if config.app.name.trim().is_empty() {
        errors.push(ConfigError::Validation {
            message: "app.name must not be empty".to_string(),
        });
    }

    let level = config.app.log_level.trim().to_ascii_lowercase();
    if !LOG_LEVELS.contains(&level.as_str()) {
        errors.push(ConfigError::Validation {
            message: format!(
                "app.log_level `{}` is not one of {}",
                config.app.log_level,
                LOG_LEVELS.join(", ")
            ),
        });
    }

    if config.console.history_size == 0 {
        errors.push(ConfigError::Validation {
            message: "console.history_size must be at least 1".to_string(),
        });
    }

    if let Some(message) = check_timestamp_format(&config.display.timestamp_format) {
        errors.push(ConfigError::Validation { message });
    }

    if config.shipment.default_delivery_days > MAX_DELIVERY_DAYS {
        errors.push(ConfigError::Validation {
            message: format!(
                "shipment.default_delivery_days must be at most {MAX_DELIVERY_DAYS}, got {}",
                config.shipment.default_delivery_days
            ),
        });
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}

fn check_timestamp_format(pattern: &str) -> Option<String> {
    if pattern.trim().is_empty() {
        return Some("display.timestamp_format must not be empty".to_string());
    }
    if StrftimeItems::new(pattern).any(|item| matches!(item, Item::Error)) {
        return Some(format!(
            "display.timestamp_format `{pattern}` is not a valid strftime pattern"
        ));
    }
    None
}
