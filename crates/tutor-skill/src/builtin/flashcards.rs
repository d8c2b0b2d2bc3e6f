// SPDX-FileCopyrightText: 2026 Tutor Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Built-in flashcard generator.

use async_trait::async_trait;
use serde_json::json;
use tutor_core::{
    CardFormat, Flashcard, FlashcardOutput, FlashcardParams, NUM_CARDS_MAX, NUM_CARDS_MIN,
    ToolKind, ToolParameters, ToolResult, TutorError,
};

use super::{difficulty_schema, mismatched};
use crate::tool::Tool;

/// Produces `num_cards` numbered cards in question/answer or cloze form.
pub struct FlashcardTool;

impl FlashcardTool {
    pub fn render(params: &FlashcardParams) -> FlashcardOutput {
        let topic = &params.topic;
        let subject = &params.subject;
        let difficulty = params.difficulty;
        let cards = (1..=params.num_cards)
            .map(|i| match params.format {
                CardFormat::Qna => Flashcard {
                    question: format!("({difficulty}) What is {topic}? (card {i})"),
                    answer: format!("{topic} is a concept in {subject}."),
                },
                CardFormat::Cloze => Flashcard {
                    question: format!("({difficulty}) {topic} is a concept in _____. (card {i})"),
                    answer: subject.clone(),
                },
            })
            .collect();
        FlashcardOutput { cards }
    }
}

#[async_trait]
impl Tool for FlashcardTool {
    fn kind(&self) -> ToolKind {
        ToolKind::FlashcardGenerator
    }

    fn description(&self) -> &str {
        "Generate a numbered set of study flashcards"
    }

    fn parameters_schema(&self) -> serde_json::Value {
        json!({
            "type": "object",
            "properties": {
                "subject": { "type": "string" },
                "topic": { "type": "string" },
                "num_cards": {
                    "type": "integer",
                    "minimum": NUM_CARDS_MIN,
                    "maximum": NUM_CARDS_MAX,
                    "default": 10
                },
                "difficulty": difficulty_schema("Difficulty label printed on each card"),
                "format": {
                    "type": "string",
                    "enum": ["qna", "cloze"],
                    "default": "qna"
                },
                "key_terms": {
                    "type": "array",
                    "items": { "type": "string" },
                    "default": []
                }
            },
            "required": ["subject", "topic"],
            "additionalProperties": false
        })
    }

    async fn invoke(&self, parameters: &ToolParameters) -> Result<ToolResult, TutorError> {
        match parameters {
            ToolParameters::FlashcardGenerator(params) => {
                Ok(ToolResult::Flashcards(Self::render(params)))
            }
            other => Err(mismatched(ToolKind::FlashcardGenerator, other)),
        }
    }
}
