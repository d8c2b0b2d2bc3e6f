// SPDX-FileCopyrightText: 2026 Tutor Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Post-deserialization validation for configuration values.
//!
//! Validates semantic constraints that cannot be expressed via serde attributes,
//! such as known log levels, timeout bounds, and the tool host URL scheme.

use crate::diagnostic::ConfigError;
use crate::model::{ToolBackend, TutorConfig};

/// Levels accepted by `service.log_level`.
pub const LOG_LEVELS: &[&str] = &["trace", "debug", "info", "warn", "error"];

/// Inclusive bounds for `tools.timeout_secs`.
pub const TIMEOUT_SECS_RANGE: std::ops::RangeInclusive<u64> = 1..=600;

/// Validate a deserialized configuration for semantic correctness.
///
/// Returns `Ok(())` if all validations pass, or `Err(Vec<ConfigError>)` with
/// all collected validation errors (does not fail fast).
pub fn validate_config(config: &TutorConfig) -> Result<(), Vec<ConfigError>> {
    let mut errors = Vec::new();

    if config.service.name.trim().is_empty() {
        errors.push(ConfigError::Validation {
            message: "service.name must not be empty".to_string(),
        });
    }

    if !LOG_LEVELS.contains(&config.service.log_level.as_str()) {
        errors.push(ConfigError::Validation {
            message: format!(
                "service.log_level `{}` is not one of {}",
                config.service.log_level,
                LOG_LEVELS.join(", ")
            ),
        });
    }

    if !TIMEOUT_SECS_RANGE.contains(&config.tools.timeout_secs) {
        errors.push(ConfigError::Validation {
            message: format!(
                "tools.timeout_secs must be between {} and {}, got {}",
                TIMEOUT_SECS_RANGE.start(),
                TIMEOUT_SECS_RANGE.end(),
                config.tools.timeout_secs
            ),
        });
    }

    // The URL only matters when calls actually go over HTTP.
    if config.tools.backend == ToolBackend::Http {
        let url = config.tools.base_url.trim();
        if url.is_empty() {
            errors.push(ConfigError::Validation {
                message: "tools.base_url must not be empty when tools.backend is \"http\""
                    .to_string(),
            });
        } else if !(url.starts_with("http://") || url.starts_with("https://")) {
            errors.push(ConfigError::Validation {
                message: format!("tools.base_url `{url}` must start with http:// or https://"),
            });
        }
    }

    let level = config.mastery.initial_level;
    if !(0.0..=1.0).contains(&level) {
        errors.push(ConfigError::Validation {
            message: format!("mastery.initial_level must be between 0.0 and 1.0, got {level}"),
        });
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}
