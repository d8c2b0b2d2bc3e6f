// SPDX-FileCopyrightText: 2026 Tutor Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Built-in templated tools.
//!
//! Deterministic stand-ins for the content services a deployment would call
//! over HTTP. They are always available without a tool host.

pub mod explainer;
pub mod flashcards;
pub mod note_maker;

pub use explainer::ConceptExplainerTool;
pub use flashcards::FlashcardTool;
pub use note_maker::NoteMakerTool;

use std::sync::Arc;

use serde_json::{Value, json};
use tutor_core::{Difficulty, ToolKind, ToolParameters, TutorError};

use crate::ToolRegistry;

/// Registers all built-in tools into the given registry.
pub fn register_builtins(registry: &mut ToolRegistry) {
    registry.register(Arc::new(NoteMakerTool));
    registry.register(Arc::new(FlashcardTool));
    registry.register(Arc::new(ConceptExplainerTool));
}

/// JSON Schema fragment for a difficulty-valued field.
fn difficulty_schema(description: &str) -> Value {
    json!({
        "type": "string",
        "enum": ["beginner", "intermediate", "advanced"],
        "default": "beginner",
        "description": description
    })
}

/// Error for parameters routed to the wrong tool.
fn mismatched(expected: ToolKind, parameters: &ToolParameters) -> TutorError {
    TutorError::Internal(format!(
        "{expected} received {} parameters",
        parameters.kind()
    ))
}

/// "Intermediate" for display in headings.
fn title_case(difficulty: Difficulty) -> String {
    let label = difficulty.as_ref();
    let mut chars = label.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}
