// SPDX-FileCopyrightText: 2026 Tutor Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Core library for the tutor orchestrator.
//!
//! This crate holds the value types that flow through the analysis and
//! routing pipeline, the error taxonomy every stage reports with, and the
//! [`ToolInvoker`] trait that tool collaborators implement.

pub mod error;
pub mod traits;
pub mod types;

// Re-export key items at crate root for ergonomic imports.
pub use error::{ErrorCategory, FieldViolation, ToolFailureKind, TutorError, ValidationFailure};
pub use traits::ToolInvoker;
pub use types::{
    CardFormat, ClassificationResult, ConceptExplainerOutput, ConceptExplainerParams, Difficulty,
    Emotion, Flashcard, FlashcardOutput, FlashcardParams, Intent, NoteLength, NoteMakerOutput,
    NoteMakerParams, NoteStyle, ParameterBag, ToolKind, ToolParameters, ToolResult,
    ValidatedToolCall, NUM_CARDS_MAX, NUM_CARDS_MIN,
};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn tutor_error_has_all_variants() {
        let _config = TutorError::Config("test".into());
        let _validation = TutorError::Validation(ValidationFailure {
            tool: ToolKind::NoteMaker,
            violations: vec![],
        });
        let _unknown = TutorError::UnknownIntent {
            intent: "test".into(),
        };
        let _tool = TutorError::ToolInvocation {
            tool: ToolKind::NoteMaker,
            kind: ToolFailureKind::Status,
            message: "test".into(),
            source: None,
        };
        let _internal = TutorError::Internal("test".into());
    }

    #[test]
    fn closed_enums_round_trip_through_strings() {
        use std::str::FromStr;

        for tool in ToolKind::ALL {
            assert_eq!(ToolKind::from_str(&tool.to_string()).unwrap(), tool);
        }
        for difficulty in [
            Difficulty::Beginner,
            Difficulty::Intermediate,
            Difficulty::Advanced,
        ] {
            let json = serde_json::to_string(&difficulty).unwrap();
            assert_eq!(json, format!("\"{difficulty}\""));
        }
    }

    #[test]
    fn tool_invoker_is_object_safe() {
        fn _assert_object_safe(_: &dyn ToolInvoker) {}
    }
}
