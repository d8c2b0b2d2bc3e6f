// SPDX-FileCopyrightText: 2026 Tutor Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Intent-shaped parameter bags built from a classification.

use std::sync::LazyLock;

use regex::Regex;
use serde_json::Value;
use tutor_core::{
    CardFormat, ClassificationResult, Emotion, NUM_CARDS_MAX, NUM_CARDS_MIN, NoteLength,
    NoteStyle, ParameterBag, ToolKind,
};

/// Card count used when the message does not ask for a number.
pub const DEFAULT_NUM_CARDS: i64 = 10;

static CARD_COUNT: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"([0-9]+)[-\s]*(cards|flashcards)").expect("Invalid regex: card count")
});

/// Builds the parameter bag for the classified intent.
///
/// Total: every intent yields a complete bag, and missing values fall back
/// to per-tool defaults rather than failing.
pub fn build_parameters(classification: &ClassificationResult, message: &str) -> ParameterBag {
    let subject = classification.subject.as_str();
    let difficulty = classification.difficulty.as_ref();

    match classification.intent {
        ToolKind::NoteMaker => ParameterBag::new()
            .with("subject", subject)
            .with("topic", non_empty_or(&classification.topic, "general"))
            .with("key_points", Value::Array(Vec::new()))
            .with("difficulty", difficulty)
            .with("length", NoteLength::Medium.as_ref())
            .with("style", NoteStyle::Bullets.as_ref()),
        ToolKind::FlashcardGenerator => ParameterBag::new()
            .with("subject", subject)
            .with("topic", non_empty_or(&classification.topic, "core concepts"))
            .with("num_cards", extract_num_cards(message))
            .with("difficulty", difficulty)
            .with("format", CardFormat::Qna.as_ref())
            .with("key_terms", Value::Array(Vec::new())),
        ToolKind::ConceptExplainer => ParameterBag::new()
            .with("subject", subject)
            .with("concept", non_empty_or(&classification.topic, "concept"))
            .with("level", difficulty)
            .with(
                "analogy",
                matches!(
                    classification.emotion,
                    Emotion::Confused | Emotion::Frustrated
                ),
            ),
    }
}

/// Card count requested by phrases like "15 cards" or "20-flashcards".
///
/// The first such phrase wins and is clamped into the accepted range. A
/// number too large to parse falls back to the default.
pub fn extract_num_cards(message: &str) -> i64 {
    let lower = message.to_lowercase();
    CARD_COUNT
        .captures(&lower)
        .map(|caps| {
            caps[1]
                .parse::<i64>()
                .map(|n| n.clamp(NUM_CARDS_MIN, NUM_CARDS_MAX))
                .unwrap_or(DEFAULT_NUM_CARDS)
        })
        .unwrap_or(DEFAULT_NUM_CARDS)
}

fn non_empty_or<'a>(value: &'a str, fallback: &'a str) -> &'a str {
    if value.is_empty() { fallback } else { value }
}
