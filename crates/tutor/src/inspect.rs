// SPDX-FileCopyrightText: 2026 Tutor Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Read-only commands: `tutor classify`, `tutor tools`, `tutor config`.

use tutor_config::TutorConfig;
use tutor_core::TutorError;
use tutor_skill::ToolRegistry;

/// Classification of `message` as pretty JSON. No tool is called.
pub fn classify_json(message: &str) -> Result<String, TutorError> {
    let classification = tutor_router::classify(message);
    serde_json::to_string_pretty(&classification)
        .map_err(|e| TutorError::Internal(format!("failed to encode classification: {e}")))
}

/// Built-in tool definitions as pretty JSON.
pub fn tools_json() -> Result<String, TutorError> {
    let registry = ToolRegistry::with_builtins();
    serde_json::to_string_pretty(&registry.tool_definitions())
        .map_err(|e| TutorError::Internal(format!("failed to encode tool definitions: {e}")))
}

/// The effective configuration as TOML.
pub fn config_toml(config: &TutorConfig) -> Result<String, TutorError> {
    toml::to_string_pretty(config)
        .map_err(|e| TutorError::Config(format!("failed to encode configuration: {e}")))
}
