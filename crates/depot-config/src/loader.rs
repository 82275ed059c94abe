// SPDX-FileCopyrightText: 2026 Depot Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Configuration loader using Figment for layered config merging.
//!
//! Supports XDG hierarchy: `./depot.toml` > `~/.config/depot/depot.toml` > `/etc/depot/depot.toml`
//! with environment variable overrides via `DEPOT_` prefix.

#![allow(clippy::result_large_err)] // figment::Error is external and cannot be boxed without wrapper

use std::path::{Path, PathBuf};

use figment::{
    providers::{Env, Format, Serialized, Toml},
    Figment,
};

use crate::model::DepotConfig;

/// Config sections that env var keys are split on.
const SECTIONS: &[&str] = &["app", "console", "display", "shipment"];

/// System-wide config file.
pub const SYSTEM_CONFIG_PATH: &str = "/etc/depot/depot.toml";

/// Config file looked up in the working directory.
pub const LOCAL_CONFIG_FILE: &str = "depot.toml";

/// Path of the per-user config file, if the platform has a config dir.
pub fn user_config_path() -> Option<PathBuf> {
    dirs::config_dir().map(|d| d.join("depot").join(LOCAL_CONFIG_FILE))
}

/// Load configuration from the standard XDG hierarchy with env var overrides.
///
/// Merge order (later overrides earlier):
/// 1. Compiled defaults
/// 2. `/etc/depot/depot.toml` (system-wide)
/// 3. `~/.config/depot/depot.toml` (user XDG config)
/// 4. `./depot.toml` (local directory)
/// 5. `DEPOT_*` environment variables
pub fn load_config() -> Result<DepotConfig, figment::Error> {
    build_figment().extract()
}

/// Load configuration from a TOML string over the compiled defaults.
///
/// No files and no env vars are consulted.
pub fn load_config_from_str(toml_content: &str) -> Result<DepotConfig, figment::Error> {
    Figment::new()
        .merge(Serialized::defaults(DepotConfig::default()))
        .merge(Toml::string(toml_content))
        .extract()
}

/// Load configuration from one explicit file path with env var overrides.
pub fn load_config_from_path(path: &Path) -> Result<DepotConfig, figment::Error> {
    Figment::new()
        .merge(Serialized::defaults(DepotConfig::default()))
        .merge(Toml::file(path))
        .merge(env_provider())
        .extract()
}

/// Build the Figment used for hierarchy loading, before extraction.
pub fn build_figment() -> Figment {
    Figment::new()
        .merge(Serialized::defaults(DepotConfig::default()))
        .merge(Toml::file(SYSTEM_CONFIG_PATH))
        .merge(Toml::file(user_config_path().unwrap_or_default()))
        .merge(Toml::file(LOCAL_CONFIG_FILE))
        .merge(env_provider())
}

/// `DEPOT_*` env provider. Only the first underscore after a known section
/// becomes a dot, so `DEPOT_SHIPMENT_DEFAULT_DELIVERY_DAYS` maps to
/// `shipment.default_delivery_days`.
pub fn env_provider() -> Env {
    Env::prefixed("DEPOT_").map(|key| map_env_key(key.as_str()).into())
}

/// Map a prefix-stripped env var name to a dotted config key.
pub fn map_env_key(key: &str) -> String {
    let key = key.to_ascii_lowercase();
    for section in SECTIONS {
        if let Some(rest) = key
            .strip_prefix(section)
            .and_then(|rest| rest.strip_prefix('_'))
        {
            return format!("{section}.{rest}");
        }
    }
    key
}
