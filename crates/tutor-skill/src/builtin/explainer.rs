// SPDX-FileCopyrightText: 2026 Tutor Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Built-in concept explainer.

use async_trait::async_trait;
use serde_json::json;
use tutor_core::{
    ConceptExplainerOutput, ConceptExplainerParams, ToolKind, ToolParameters, ToolResult,
    TutorError,
};

use super::{difficulty_schema, mismatched};
use crate::tool::Tool;

/// Produces a one-paragraph explanation, with an analogy on request.
pub struct ConceptExplainerTool;

impl ConceptExplainerTool {
    pub fn render(params: &ConceptExplainerParams) -> ConceptExplainerOutput {
        let ConceptExplainerParams {
            subject,
            concept,
            level,
            analogy,
        } = params;
        let analogy = if *analogy {
            "Imagine it like a familiar analogy. "
        } else {
            ""
        };
        ConceptExplainerOutput {
            explanation: format!(
                "Explaining {concept} in {subject} for a {level} learner. {analogy}\
                 Core idea: {concept} relates to foundational principles in {subject}."
            ),
        }
    }
}

#[async_trait]
impl Tool for ConceptExplainerTool {
    fn kind(&self) -> ToolKind {
        ToolKind::ConceptExplainer
    }

    fn description(&self) -> &str {
        "Explain a concept at the learner's level"
    }

    fn parameters_schema(&self) -> serde_json::Value {
        json!({
            "type": "object",
            "properties": {
                "subject": { "type": "string" },
                "concept": { "type": "string", "description": "The idea to explain" },
                "level": difficulty_schema("Learner level the explanation targets"),
                "analogy": {
                    "type": "boolean",
                    "default": false,
                    "description": "Whether to lead with an analogy"
                }
            },
            "required": ["subject", "concept"],
            "additionalProperties": false
        })
    }

    async fn invoke(&self, parameters: &ToolParameters) -> Result<ToolResult, TutorError> {
        match parameters {
            ToolParameters::ConceptExplainer(params) => {
                Ok(ToolResult::Explanation(Self::render(params)))
            }
            other => Err(mismatched(ToolKind::ConceptExplainer, other)),
        }
    }
}
