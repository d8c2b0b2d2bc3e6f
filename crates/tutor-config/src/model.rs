// SPDX-FileCopyrightText: 2026 Tutor Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Configuration model structs for the tutor orchestrator.
//!
//! All structs use `#[serde(deny_unknown_fields)]` to reject unrecognized
//! config keys at startup, providing actionable error messages.

use serde::{Deserialize, Serialize};

/// Top-level tutor configuration.
///
/// Loaded from TOML files following XDG hierarchy, with environment variable overrides.
/// All sections are optional and default to sensible values.
#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
#[serde(deny_unknown_fields)]
pub struct TutorConfig {
    /// Service identity and logging.
    #[serde(default)]
    pub service: ServiceConfig,

    /// Tool collaborator selection and transport.
    #[serde(default)]
    pub tools: ToolsConfig,

    /// Mastery scoring settings.
    #[serde(default)]
    pub mastery: MasteryConfig,
}

/// Service identity and logging configuration.
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
#[serde(deny_unknown_fields)]
pub struct ServiceConfig {
    /// Name reported in logs.
    #[serde(default = "default_service_name")]
    pub name: String,

    /// Logging level (trace, debug, info, warn, error).
    #[serde(default = "default_log_level")]
    pub log_level: String,
}

impl Default for ServiceConfig {
    fn default() -> Self {
        Self {
            name: default_service_name(),
            log_level: default_log_level(),
        }
    }
}

fn default_service_name() -> String {
    "tutor".to_string()
}

fn default_log_level() -> String {
    "info".to_string()
}

/// Where tool calls are executed.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ToolBackend {
    /// Built-in templated tools, in process.
    #[default]
    Local,
    /// A remote tool host reached over HTTP.
    Http,
}

/// Tool collaborator configuration.
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
#[serde(deny_unknown_fields)]
pub struct ToolsConfig {
    /// Which collaborator serves tool calls.
    #[serde(default)]
    pub backend: ToolBackend,

    /// Base URL of the tool host; tool endpoints are appended to it.
    #[serde(default = "default_base_url")]
    pub base_url: String,

    /// Upper bound on a single tool invocation, in seconds.
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,
}

impl Default for ToolsConfig {
    fn default() -> Self {
        Self {
            backend: ToolBackend::default(),
            base_url: default_base_url(),
            timeout_secs: default_timeout_secs(),
        }
    }
}

fn default_base_url() -> String {
    "http://localhost:8000".to_string()
}

fn default_timeout_secs() -> u64 {
    20
}

/// Mastery scoring configuration.
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
#[serde(deny_unknown_fields)]
pub struct MasteryConfig {
    /// Level assumed for a subject with no prior record (0.0 - 1.0).
    #[serde(default = "default_initial_level")]
    pub initial_level: f64,
}

impl Default for MasteryConfig {
    fn default() -> Self {
        Self {
            initial_level: default_initial_level(),
        }
    }
}

fn default_initial_level() -> f64 {
    0.5
}
