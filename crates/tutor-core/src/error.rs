// SPDX-FileCopyrightText: 2026 Tutor Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Error types for the tutor orchestrator.

use std::fmt;

use serde::Serialize;
use serde_json::Value;
use strum::Display;
use thiserror::Error;

use crate::types::ToolKind;

/// One field of a parameter bag that broke its schema.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FieldViolation {
    /// Path of the offending field, e.g. `num_cards` or `key_points[2]`.
    pub field: String,
    /// The constraint the value had to satisfy.
    pub constraint: String,
    /// The value that was supplied; `null` when the field was missing.
    pub actual: Value,
}

impl fmt::Display for FieldViolation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "`{}` must be {}, got {}",
            self.field, self.constraint, self.actual
        )
    }
}

/// Every schema violation found in a bag for one tool.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ValidationFailure {
    pub tool: ToolKind,
    pub violations: Vec<FieldViolation>,
}

impl ValidationFailure {
    /// Looks up the violation reported for `field`, if any.
    pub fn violation(&self, field: &str) -> Option<&FieldViolation> {
        self.violations.iter().find(|v| v.field == field)
    }

    /// Names of all offending fields, in report order.
    pub fn fields(&self) -> impl Iterator<Item = &str> {
        self.violations.iter().map(|v| v.field.as_str())
    }
}

impl fmt::Display for ValidationFailure {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} invalid parameter(s) for {}",
            self.violations.len(),
            self.tool
        )?;
        for (i, violation) in self.violations.iter().enumerate() {
            let sep = if i == 0 { ": " } else { "; " };
            write!(f, "{sep}{violation}")?;
        }
        Ok(())
    }
}

/// How a tool collaborator failed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display, Serialize)]
#[serde(rename_all = "snake_case")]
#[strum(serialize_all = "snake_case")]
pub enum ToolFailureKind {
    /// Connection or I/O failure before a response arrived.
    Transport,
    /// No response within the configured invocation timeout.
    Timeout,
    /// The tool answered with a non-success status.
    Status,
    /// The tool answered with a body that is not the tool's result shape.
    MalformedResponse,
    /// No collaborator is registered for the tool.
    Unavailable,
}

/// Which side of the boundary is at fault, for mapping to status signals.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display, Serialize)]
#[serde(rename_all = "snake_case")]
#[strum(serialize_all = "snake_case")]
pub enum ErrorCategory {
    Client,
    Server,
}

/// The primary error type of the tutor crates.
#[derive(Debug, Error)]
pub enum TutorError {
    /// Invalid or unreadable configuration.
    #[error("configuration error: {0}")]
    Config(String),

    /// Derived or supplied parameters broke the tool schema.
    #[error("validation failed: {0}")]
    Validation(ValidationFailure),

    /// The router was asked for an intent outside the known tool set.
    #[error("unknown intent `{intent}`")]
    UnknownIntent { intent: String },

    /// The tool collaborator errored, timed out, or answered with the wrong shape.
    #[error("{tool} invocation failed ({kind}): {message}")]
    ToolInvocation {
        tool: ToolKind,
        kind: ToolFailureKind,
        message: String,
        source: Option<Box<dyn std::error::Error + Send + Sync>>,
    },

    /// Broken internal invariant, such as a stage running without its input.
    #[error("internal error: {0}")]
    Internal(String),
}

impl TutorError {
    /// A tool failure without an underlying error.
    pub fn tool(tool: ToolKind, kind: ToolFailureKind, message: impl Into<String>) -> Self {
        TutorError::ToolInvocation {
            tool,
            kind,
            message: message.into(),
            source: None,
        }
    }

    /// A tool failure wrapping the error that caused it.
    pub fn tool_with_source<E>(
        tool: ToolKind,
        kind: ToolFailureKind,
        message: impl Into<String>,
        source: E,
    ) -> Self
    where
        E: std::error::Error + Send + Sync + 'static,
    {
        TutorError::ToolInvocation {
            tool,
            kind,
            message: message.into(),
            source: Some(Box::new(source)),
        }
    }

    /// Only bad parameters are the caller's fault; everything else is ours.
    pub fn category(&self) -> ErrorCategory {
        match self {
            TutorError::Validation(_) => ErrorCategory::Client,
            TutorError::Config(_)
            | TutorError::UnknownIntent { .. }
            | TutorError::ToolInvocation { .. }
            | TutorError::Internal(_) => ErrorCategory::Server,
        }
    }

    /// Short machine-readable code for the error kind.
    pub fn code(&self) -> &'static str {
        match self {
            TutorError::Config(_) => "config_error",
            TutorError::Validation(_) => "validation_error",
            TutorError::UnknownIntent { .. } => "unknown_intent",
            TutorError::ToolInvocation { .. } => "tool_invocation_error",
            TutorError::Internal(_) => "internal_error",
        }
    }
}

impl From<ValidationFailure> for TutorError {
    fn from(failure: ValidationFailure) -> Self {
        TutorError::Validation(failure)
    }
}
