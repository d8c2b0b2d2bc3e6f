// SPDX-FileCopyrightText: 2026 Tutor Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Strict schema validation and tool routing.
//!
//! Checks a [`ParameterBag`] against the fixed schema of one tool and turns it
//! into a [`ValidatedToolCall`]. Every violation in the bag is reported, not
//! just the first. Optional fields take their schema defaults when absent and
//! keys outside the schema are dropped.

use std::str::FromStr;

use serde_json::Value;
use strum::VariantNames;
use tracing::debug;
use tutor_core::{
    CardFormat, ConceptExplainerParams, Difficulty, FieldViolation, FlashcardParams,
    NUM_CARDS_MAX, NUM_CARDS_MIN, NoteLength, NoteMakerParams, NoteStyle, ParameterBag,
    ToolKind, ToolParameters, TutorError, ValidatedToolCall, ValidationFailure,
};

/// Validates `bag` for the tool named by `intent` and routes it.
///
/// `intent` is the tool label (`note_maker`, `flashcard_generator`,
/// `concept_explainer`). Any other label is [`TutorError::UnknownIntent`],
/// which is distinct from a [`TutorError::Validation`] failure of the bag.
pub fn validate_and_route(
    bag: &ParameterBag,
    intent: &str,
) -> Result<ValidatedToolCall, TutorError> {
    let tool = ToolKind::from_str(intent).map_err(|_| TutorError::UnknownIntent {
        intent: intent.to_string(),
    })?;
    let call = validate_for(bag, tool)?;
    debug!(
        tool = %call.tool(),
        endpoint = call.endpoint(),
        "parameters validated"
    );
    Ok(call)
}

/// Validates `bag` against the schema of a known tool.
pub fn validate_for(
    bag: &ParameterBag,
    tool: ToolKind,
) -> Result<ValidatedToolCall, ValidationFailure> {
    let mut check = FieldCheck::new(bag);

    let parameters = match tool {
        ToolKind::NoteMaker => {
            let subject = check.required_string("subject");
            let topic = check.required_string("topic");
            let key_points = check.string_list("key_points");
            let difficulty = check.one_of("difficulty", Difficulty::Beginner);
            let length = check.one_of("length", NoteLength::Medium);
            let style = check.one_of("style", NoteStyle::Bullets);
            match (subject, topic, key_points, difficulty, length, style) {
                (
                    Some(subject),
                    Some(topic),
                    Some(key_points),
                    Some(difficulty),
                    Some(length),
                    Some(style),
                ) => {
                    Some(ToolParameters::NoteMaker(NoteMakerParams {
                        subject,
                        topic,
                        key_points,
                        difficulty,
                        length,
                        style,
                    }))
                }
                _ => None,
            }
        }
        ToolKind::FlashcardGenerator => {
            let subject = check.required_string("subject");
            let topic = check.required_string("topic");
            let num_cards = check.integer_in("num_cards", NUM_CARDS_MIN, NUM_CARDS_MAX, 10);
            let difficulty = check.one_of("difficulty", Difficulty::Beginner);
            let format = check.one_of("format", CardFormat::Qna);
            let key_terms = check.string_list("key_terms");
            match (subject, topic, num_cards, difficulty, format, key_terms) {
                (
                    Some(subject),
                    Some(topic),
                    Some(num_cards),
                    Some(difficulty),
                    Some(format),
                    Some(key_terms),
                ) => {
                    Some(ToolParameters::FlashcardGenerator(FlashcardParams {
                        subject,
                        topic,
                        num_cards: num_cards as u32,
                        difficulty,
                        format,
                        key_terms,
                    }))
                }
                _ => None,
            }
        }
        ToolKind::ConceptExplainer => {
            let subject = check.required_string("subject");
            let concept = check.required_string("concept");
            let level = check.one_of("level", Difficulty::Beginner);
            let analogy = check.boolean("analogy", false);
            match (subject, concept, level, analogy) {
                (Some(subject), Some(concept), Some(level), Some(analogy)) => {
                    Some(ToolParameters::ConceptExplainer(ConceptExplainerParams {
                        subject,
                        concept,
                        level,
                        analogy,
                    }))
                }
                _ => None,
            }
        }
    };

    match parameters {
        Some(parameters) if check.violations.is_empty() => {
            Ok(ValidatedToolCall::new(parameters))
        }
        _ => Err(ValidationFailure {
            tool,
            violations: check.violations,
        }),
    }
}

/// Reads typed fields out of a bag, recording a violation for each bad one.
///
/// Each accessor returns `None` exactly when it recorded a violation.
struct FieldCheck<'a> {
    bag: &'a ParameterBag,
    violations: Vec<FieldViolation>,
}

impl<'a> FieldCheck<'a> {
    fn new(bag: &'a ParameterBag) -> Self {
        Self {
            bag,
            violations: Vec::new(),
        }
    }

    fn get(&self, field: &str) -> Option<&'a Value> {
        self.bag.get(field)
    }

    fn reject(
        &mut self,
        field: impl Into<String>,
        constraint: impl Into<String>,
        actual: &Value,
    ) {
        self.violations.push(FieldViolation {
            field: field.into(),
            constraint: constraint.into(),
            actual: actual.clone(),
        });
    }

    fn required_string(&mut self, field: &str) -> Option<String> {
        match self.get(field) {
            Some(Value::String(s)) => Some(s.clone()),
            Some(other) => {
                self.reject(field, "a string", other);
                None
            }
            None => {
                self.reject(field, "a string (required)", &Value::Null);
                None
            }
        }
    }

    fn one_of<T>(&mut self, field: &str, default: T) -> Option<T>
    where
        T: FromStr + VariantNames,
    {
        let Some(value) = self.get(field) else {
            return Some(default);
        };
        let parsed = value.as_str().and_then(|s| T::from_str(s).ok());
        if parsed.is_none() {
            self.reject(field, format!("one of {}", T::VARIANTS.join("|")), value);
        }
        parsed
    }

    fn string_list(&mut self, field: &str) -> Option<Vec<String>> {
        let Some(value) = self.get(field) else {
            return Some(Vec::new());
        };
        let Some(items) = value.as_array() else {
            self.reject(field, "an array of strings", value);
            return None;
        };
        let mut out = Vec::with_capacity(items.len());
        let mut ok = true;
        for (i, item) in items.iter().enumerate() {
            match item.as_str() {
                Some(s) => out.push(s.to_string()),
                None => {
                    self.reject(format!("{field}[{i}]"), "a string", item);
                    ok = false;
                }
            }
        }
        ok.then_some(out)
    }

    /// Integers may arrive as JSON floats with no fractional part.
    fn integer_in(&mut self, field: &str, min: i64, max: i64, default: i64) -> Option<i64> {
        let Some(value) = self.get(field) else {
            return Some(default);
        };
        let constraint = format!("an integer in [{min}, {max}]");
        let Some(n) = value.as_f64() else {
            self.reject(field, constraint, value);
            return None;
        };
        if n.fract() != 0.0 || n < min as f64 || n > max as f64 {
            self.reject(field, constraint, value);
            return None;
        }
        Some(n as i64)
    }

    fn boolean(&mut self, field: &str, default: bool) -> Option<bool> {
        match self.get(field) {
            None => Some(default),
            Some(Value::Bool(b)) => Some(*b),
            Some(other) => {
                self.reject(field, "a boolean", other);
                None
            }
        }
    }
}
