// SPDX-FileCopyrightText: 2026 Depot Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Integration tests for the Depot configuration system.

use depot_config::diagnostic::ConfigError;
use depot_config::model::DepotConfig;
use depot_config::{load_and_validate_path, load_and_validate_str, load_config_from_str};

/// Valid TOML with every known field deserializes successfully.
#[test]
fn valid_toml_deserializes_into_depot_config() {
    let toml = r#"
[app]
name = "east-depot"
log_level = "debug"

[console]
color = false
history_size = 25

[display]
timestamp_format = "%d.%m.%Y %H:%M"

[shipment]
default_delivery_days = 3
"#;

    let config = load_config_from_str(toml).expect("valid TOML should deserialize");
    assert_eq!(config.app.name, "east-depot");
    assert_eq!(config.app.log_level, "debug");
    assert!(!config.console.color);
    assert_eq!(config.console.history_size, 25);
    assert_eq!(config.display.timestamp_format, "%d.%m.%Y %H:%M");
    assert_eq!(config.shipment.default_delivery_days, 3);
}

/// Missing optional sections use defaults without error.
#[test]
fn empty_toml_uses_defaults() {
    let config = load_config_from_str("").expect("empty TOML should use defaults");
    assert_eq!(config.app.name, "depot");
    assert_eq!(config.app.log_level, "warn");
    assert!(config.console.color);
    assert_eq!(config.shipment.default_delivery_days, 7);
}

/// Unknown key produces an UnknownKey diagnostic with a suggestion and span.
#[test]
fn unknown_key_gets_suggestion_and_span() {
    let toml = r#"
[shipment]
default_delivery_dayz = 3
"#;

    let errors = load_and_validate_str(toml).expect_err("should reject unknown key");
    assert_eq!(errors.len(), 1);
    match &errors[0] {
        ConfigError::UnknownKey {
            key,
            suggestion,
            span,
            ..
        } => {
            assert_eq!(key, "default_delivery_dayz");
            assert_eq!(suggestion.as_deref(), Some("default_delivery_days"));
            assert!(span.is_some(), "inline source should yield a span");
        }
        other => panic!("expected UnknownKey, got {other:?}"),
    }
}

/// Unknown top-level section is rejected as well.
#[test]
fn unknown_section_is_rejected() {
    let errors = load_and_validate_str("[warehouse]\nname = \"x\"\n").expect_err("should fail");
    assert!(errors
        .iter()
        .any(|e| matches!(e, ConfigError::UnknownKey { key, .. } if key == "warehouse")));
}

/// Wrong value type is reported with the dotted key path.
#[test]
fn invalid_type_reports_key_path() {
    let errors = load_and_validate_str("[console]\nhistory_size = \"lots\"\n")
        .expect_err("string for integer should fail");
    assert!(errors.iter().any(
        |e| matches!(e, ConfigError::InvalidType { key, .. } if key.contains("history_size"))
    ));
}

/// Parsed but semantically bad values surface as validation errors.
#[test]
fn semantic_errors_come_from_validation() {
    let errors = load_and_validate_str("[app]\nlog_level = \"chatty\"\n")
        .expect_err("unknown level should fail");
    assert!(matches!(errors[0], ConfigError::Validation { .. }));
}

/// Figment's in-memory overrides take precedence over TOML, as env vars do.
#[test]
fn dotted_override_beats_toml() {
    use figment::{
        providers::{Format, Serialized, Toml},
        Figment,
    };

    let config: DepotConfig = Figment::new()
        .merge(Serialized::defaults(DepotConfig::default()))
        .merge(Toml::string("[shipment]\ndefault_delivery_days = 3\n"))
        .merge(("shipment.default_delivery_days", 14))
        .extract()
        .expect("should merge override");

    assert_eq!(config.shipment.default_delivery_days, 14);
}

/// A config path that does not exist is an error, not silently defaults.
#[test]
fn explicit_missing_path_is_an_error() {
    let errors = load_and_validate_path(std::path::Path::new("/nonexistent/depot.toml"))
        .expect_err("missing explicit file should fail");
    assert!(matches!(errors[0], ConfigError::Other(ref m) if m.contains("does not exist")));
}

/// An explicit file is loaded and validated.
#[test]
fn explicit_path_is_loaded() {
    figment::Jail::expect_with(|jail| {
        jail.create_file("site.toml", "[app]\nname = \"site\"\n")?;
        let config = load_and_validate_path(std::path::Path::new("site.toml"))
            .map_err(|errors| format!("{errors:?}"))?;
        assert_eq!(config.app.name, "site");
        Ok(())
    });
}
