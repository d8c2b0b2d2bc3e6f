// SPDX-FileCopyrightText: 2026 Tutor Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Integration tests for the tutor configuration system.

use std::io::Write;

use figment::Jail;
use miette::Diagnostic;
use tutor_config::diagnostic::ConfigError;
use tutor_config::{
    ToolBackend, load_and_validate_path, load_and_validate_str, load_config, load_config_from_str,
};

#[test]
fn full_toml_deserializes() {
    let toml = r#"
[service]
name = "tutor-staging"
log_level = "debug"

[tools]
backend = "http"
base_url = "https://tools.internal:9000"
timeout_secs = 45

[mastery]
initial_level = 0.3
"#;

    let config = load_config_from_str(toml).expect("valid TOML should deserialize");
    assert_eq!(config.service.name, "tutor-staging");
    assert_eq!(config.service.log_level, "debug");
    assert_eq!(config.tools.backend, ToolBackend::Http);
    assert_eq!(config.tools.base_url, "https://tools.internal:9000");
    assert_eq!(config.tools.timeout_secs, 45);
    assert_eq!(config.mastery.initial_level, 0.3);
}

#[test]
fn missing_sections_use_defaults() {
    let config = load_config_from_str("[service]\nname = \"x\"\n").unwrap();
    assert_eq!(config.service.log_level, "info");
    assert_eq!(config.tools.backend, ToolBackend::Local);
    assert_eq!(config.tools.timeout_secs, 20);
    assert_eq!(config.mastery.initial_level, 0.5);
}

#[test]
fn unknown_key_suggests_correction() {
    let errors = load_and_validate_str("[tools]\ntimout_secs = 5\n").unwrap_err();
    assert_eq!(errors.len(), 1);
    match &errors[0] {
        ConfigError::UnknownKey {
            key,
            suggestion,
            valid_keys,
            ..
        } => {
            assert_eq!(key, "timout_secs");
            assert_eq!(suggestion.as_deref(), Some("timeout_secs"));
            assert!(valid_keys.contains("base_url"), "{valid_keys}");
        }
        other => panic!("expected UnknownKey, got {other:?}"),
    }
}

#[test]
fn unknown_top_level_section_is_rejected() {
    let errors = load_and_validate_str("[storage]\npath = \"x\"\n").unwrap_err();
    assert!(matches!(&errors[0], ConfigError::UnknownKey { key, .. } if key == "storage"));
}

#[test]
fn wrong_type_is_reported_with_path() {
    let errors = load_and_validate_str("[tools]\ntimeout_secs = \"soon\"\n").unwrap_err();
    match &errors[0] {
        ConfigError::InvalidType { key, .. } => assert!(key.contains("timeout_secs"), "{key}"),
        other => panic!("expected InvalidType, got {other:?}"),
    }
}

#[test]
fn unknown_backend_is_an_invalid_value() {
    let errors = load_and_validate_str("[tools]\nbackend = \"grpc\"\n").unwrap_err();
    match &errors[0] {
        ConfigError::InvalidValue { key, detail } => {
            assert!(key.contains("backend"), "{key}");
            assert!(detail.contains("grpc"), "{detail}");
        }
        other => panic!("expected InvalidValue, got {other:?}"),
    }
}

#[test]
fn semantic_errors_are_all_collected() {
    let toml = r#"
[service]
log_level = "loud"

[tools]
backend = "http"
base_url = "tools.local"
timeout_secs = 900
"#;
    let errors = load_and_validate_str(toml).unwrap_err();
    assert_eq!(errors.len(), 3, "{errors:?}");
    assert!(
        errors
            .iter()
            .all(|e| matches!(e, ConfigError::Validation { .. }))
    );
}

#[test]
fn config_errors_carry_diagnostic_codes() {
    let errors = load_and_validate_str("[mastery]\ninitial_level = 2.0\n").unwrap_err();
    let code = errors[0].code().map(|c| c.to_string());
    assert_eq!(code.as_deref(), Some("tutor::config::validation"));
}

#[test]
fn explicit_file_is_loaded_and_spans_point_into_it() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    writeln!(file, "[service]\nlog_lvl = \"debug\"").unwrap();

    let errors = load_and_validate_path(file.path()).unwrap_err();
    match &errors[0] {
        ConfigError::UnknownKey {
            suggestion, span, ..
        } => {
            assert_eq!(suggestion.as_deref(), Some("log_level"));
            assert!(span.is_some());
        }
        other => panic!("expected UnknownKey, got {other:?}"),
    }
}

#[test]
fn explicit_file_must_exist() {
    let dir = tempfile::tempdir().unwrap();
    let errors = load_and_validate_path(&dir.path().join("absent.toml")).unwrap_err();
    assert!(matches!(&errors[0], ConfigError::Other(msg) if msg.contains("absent.toml")));
}

#[test]
fn env_vars_override_files() {
    Jail::expect_with(|jail| {
        jail.create_file(
            "tutor.toml",
            r#"
[tools]
timeout_secs = 30
"#,
        )?;
        jail.set_env("TUTOR_TOOLS_TIMEOUT_SECS", "45");
        jail.set_env("TUTOR_SERVICE_LOG_LEVEL", "debug");
        jail.set_env("TUTOR_TOOLS_BASE_URL", "http://tools:9000");

        let config = load_config()?;
        assert_eq!(config.tools.timeout_secs, 45);
        assert_eq!(config.service.log_level, "debug");
        assert_eq!(config.tools.base_url, "http://tools:9000");
        Ok(())
    });
}

#[test]
fn env_vars_apply_over_explicit_file() {
    Jail::expect_with(|jail| {
        jail.create_file("custom.toml", "[tools]\nbackend = \"http\"\n")?;
        jail.set_env("TUTOR_TOOLS_BASE_URL", "https://tools.example");

        let config = load_and_validate_path(&jail.directory().join("custom.toml"))
            .map_err(|errors| format!("{errors:?}"))?;
        assert_eq!(config.tools.base_url, "https://tools.example");
        Ok(())
    });
}

#[test]
fn local_file_is_picked_up() {
    Jail::expect_with(|jail| {
        jail.create_file("tutor.toml", "[mastery]\ninitial_level = 0.8\n")?;
        let config = load_config()?;
        assert_eq!(config.mastery.initial_level, 0.8);
        Ok(())
    });
}
