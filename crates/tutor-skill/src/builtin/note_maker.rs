// SPDX-FileCopyrightText: 2026 Tutor Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Built-in note maker.

use async_trait::async_trait;
use serde_json::json;
use tutor_core::{
    NoteMakerOutput, NoteMakerParams, NoteStyle, ToolKind, ToolParameters, ToolResult, TutorError,
};

use super::{difficulty_schema, mismatched, title_case};
use crate::tool::Tool;

/// At most this many key points are echoed into the outline.
const OUTLINE_LIMIT: usize = 10;

/// Produces bulleted notes padded to the requested length.
pub struct NoteMakerTool;

impl NoteMakerTool {
    pub fn render(params: &NoteMakerParams) -> NoteMakerOutput {
        let header = format!(
            "Notes on {} ({}) - {}",
            params.topic,
            params.subject,
            title_case(params.difficulty)
        );

        let outline = match params.style {
            NoteStyle::Bullets | NoteStyle::Outline if !params.key_points.is_empty() => Some(
                params
                    .key_points
                    .iter()
                    .take(OUTLINE_LIMIT)
                    .enumerate()
                    .map(|(i, kp)| format!("{}. {kp}", i + 1))
                    .collect(),
            ),
            _ => None,
        };

        let mut bullets: Vec<String> = if params.key_points.is_empty() {
            vec![format!("- Key idea: {}", params.topic)]
        } else {
            params
                .key_points
                .iter()
                .map(|kp| format!("- Key idea: {kp}"))
                .collect()
        };
        let target = params.length.target_points();
        while bullets.len() < target {
            bullets.push(format!(
                "- Detail {} about {}",
                bullets.len() + 1,
                params.topic
            ));
        }

        let mut lines = Vec::with_capacity(bullets.len() + 4);
        lines.push(header);
        lines.push(String::new());
        lines.extend(bullets);
        lines.push(String::new());
        lines.push("Summary: These notes provide a concise overview.".to_string());

        NoteMakerOutput {
            notes: lines.join("\n"),
            outline,
        }
    }
}

#[async_trait]
impl Tool for NoteMakerTool {
    fn kind(&self) -> ToolKind {
        ToolKind::NoteMaker
    }

    fn description(&self) -> &str {
        "Write structured study notes on a topic"
    }

    fn parameters_schema(&self) -> serde_json::Value {
        json!({
            "type": "object",
            "properties": {
                "subject": { "type": "string", "description": "Subject area, e.g. math" },
                "topic": { "type": "string", "description": "What the notes cover" },
                "key_points": {
                    "type": "array",
                    "items": { "type": "string" },
                    "default": [],
                    "description": "Points that must appear in the notes"
                },
                "difficulty": difficulty_schema("Depth of the notes"),
                "length": {
                    "type": "string",
                    "enum": ["short", "medium", "long"],
                    "default": "medium"
                },
                "style": {
                    "type": "string",
                    "enum": ["bullets", "outline", "summary"],
                    "default": "bullets"
                }
            },
            "required": ["subject", "topic"],
            "additionalProperties": false
        })
    }

    async fn invoke(&self, parameters: &ToolParameters) -> Result<ToolResult, TutorError> {
        match parameters {
            ToolParameters::NoteMaker(params) => Ok(ToolResult::Notes(Self::render(params))),
            other => Err(mismatched(ToolKind::NoteMaker, other)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tutor_core::{Difficulty, NoteLength};

    fn params(key_points: &[&str], length: NoteLength, style: NoteStyle) -> NoteMakerParams {
        NoteMakerParams {
            subject: "biology".into(),
            topic: "mitosis".into(),
            key_points: key_points.iter().map(|s| s.to_string()).collect(),
            difficulty: Difficulty::Intermediate,
            length,
            style,
        }
    }

    #[test]
    fn notes_pad_topic_bullet_to_length() {
        let out = NoteMakerTool::render(&params(&[], NoteLength::Short, NoteStyle::Bullets));
        let lines: Vec<&str> = out.notes.lines().collect();
        assert_eq!(lines[0], "Notes on mitosis (biology) - Intermediate");
        assert_eq!(lines[1], "");
        assert_eq!(lines[2], "- Key idea: mitosis");
        assert_eq!(lines[3], "- Detail 2 about mitosis");
        assert_eq!(lines[5], "- Detail 4 about mitosis");
        assert_eq!(lines[7], "Summary: These notes provide a concise overview.");
        assert_eq!(lines.len(), 8);
        assert_eq!(out.outline, None);
    }

    #[test]
    fn key_points_become_bullets_and_outline() {
        let out = NoteMakerTool::render(&params(
            &["prophase", "metaphase"],
            NoteLength::Medium,
            NoteStyle::Outline,
        ));
        assert!(out.notes.contains("- Key idea: prophase\n- Key idea: metaphase\n- Detail 3"));
        assert_eq!(
            out.notes.matches("\n- ").count(),
            NoteLength::Medium.target_points()
        );
        assert_eq!(
            out.outline,
            Some(vec!["1. prophase".to_string(), "2. metaphase".to_string()])
        );
    }

    #[test]
    fn outline_is_capped_and_absent_for_summaries() {
        let many: Vec<String> = (0..12).map(|i| format!("p{i}")).collect();
        let refs: Vec<&str> = many.iter().map(String::as_str).collect();
        let out = NoteMakerTool::render(&params(&refs, NoteLength::Short, NoteStyle::Bullets));
        assert_eq!(out.outline.as_ref().map(Vec::len), Some(OUTLINE_LIMIT));
        // More key points than the target length: no padding.
        assert!(!out.notes.contains("Detail"));

        let out = NoteMakerTool::render(&params(&["a"], NoteLength::Long, NoteStyle::Summary));
        assert_eq!(out.outline, None);
    }
}
