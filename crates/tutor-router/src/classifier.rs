// SPDX-FileCopyrightText: 2026 Tutor Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Lexical message classification.
//!
//! Maps a free-text tutoring message to subject, topic, difficulty, emotion,
//! and intent using ordered keyword tables and a few regexes. Each field is
//! resolved independently, first match wins, and every field has a fallback,
//! so [`classify`] is total and deterministic.

use std::sync::LazyLock;

use regex::Regex;
use tutor_core::{ClassificationResult, Difficulty, Emotion, Intent, ToolKind};

/// Subjects in priority order, each with the aliases that imply it.
pub const SUBJECT_ALIASES: &[(&str, &[&str])] = &[
    (
        "math",
        &["calculus", "algebra", "geometry", "derivative", "integral"],
    ),
    (
        "physics",
        &["force", "motion", "newton", "energy", "thermodynamics"],
    ),
    ("biology", &["cell", "dna", "genetics", "evolution"]),
    ("chemistry", &["atom", "molecule", "reaction", "stoichiometry"]),
];

/// Subject used when no name or alias appears.
pub const DEFAULT_SUBJECT: &str = "math";

/// Difficulty word sets in priority order. Anything else is intermediate.
pub const DIFFICULTY_WORDS: &[(Difficulty, &[&str])] = &[
    (Difficulty::Beginner, &["beginner", "intro", "basic", "simple"]),
    (
        Difficulty::Advanced,
        &["advanced", "complex", "proof", "rigorous"],
    ),
];

/// Emotion word sets in priority order. Anything else is neutral.
pub const EMOTION_WORDS: &[(Emotion, &[&str])] = &[
    (
        Emotion::Confused,
        &["stuck", "confused", "lost", "don't get", "dont get", "help!"],
    ),
    (Emotion::Frustrated, &["frustrated", "annoyed", "angry"]),
    (Emotion::Curious, &["curious", "wondering", "interested"]),
    (Emotion::Confident, &["got it", "understand", "confident"]),
];

/// Topic used when the message has no run of four or more letters.
pub const DEFAULT_TOPIC: &str = "general topic";

// Intent cues in priority order: flashcards, then notes, then explanations.
static INTENT_RULES: LazyLock<Vec<(Intent, Regex)>> = LazyLock::new(|| {
    vec![
        (
            ToolKind::FlashcardGenerator,
            Regex::new(r"\bflash(card|cards)\b|drill|quiz|practice")
                .expect("Invalid regex: flashcard cues"),
        ),
        (
            ToolKind::NoteMaker,
            Regex::new(r"\b(note|notes|summary|outline)\b").expect("Invalid regex: note cues"),
        ),
        (
            ToolKind::ConceptExplainer,
            Regex::new(r"\bexplain|what is|how does|why\b")
                .expect("Invalid regex: explanation cues"),
        ),
    ]
});

// A letter followed by at least three letters, whitespace, or hyphens.
static TOPIC_RUN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[a-zA-Z][a-zA-Z\s\-]{3,}").expect("Invalid regex: topic run"));

/// Classifies a message. Never fails; see the module docs for the rules.
pub fn classify(message: &str) -> ClassificationResult {
    let lower = message.to_lowercase();
    ClassificationResult {
        subject: infer_subject(&lower).to_string(),
        topic: extract_topic(&lower),
        difficulty: infer_difficulty(&lower),
        emotion: infer_emotion(&lower),
        intent: infer_intent(&lower),
    }
}

/// First subject whose name or any alias occurs in `text`.
///
/// `text` is expected to be lower-cased already.
pub fn infer_subject(text: &str) -> &'static str {
    SUBJECT_ALIASES
        .iter()
        .find(|(subject, aliases)| {
            text.contains(subject) || aliases.iter().any(|alias| text.contains(alias))
        })
        .map(|(subject, _)| *subject)
        .unwrap_or(DEFAULT_SUBJECT)
}

pub fn infer_difficulty(text: &str) -> Difficulty {
    first_word_set_match(DIFFICULTY_WORDS, text).unwrap_or(Difficulty::Intermediate)
}

pub fn infer_emotion(text: &str) -> Emotion {
    first_word_set_match(EMOTION_WORDS, text).unwrap_or(Emotion::Neutral)
}

/// Intent from keyword cues, falling back on question shape.
///
/// A message with no cue is treated as a question for the explainer when it
/// contains `?` or starts with "what", and as a note request otherwise.
pub fn infer_intent(text: &str) -> Intent {
    if let Some((intent, _)) = INTENT_RULES.iter().find(|(_, re)| re.is_match(text)) {
        return *intent;
    }
    if text.contains('?') || text.starts_with("what") {
        ToolKind::ConceptExplainer
    } else {
        ToolKind::NoteMaker
    }
}

/// Longest letter/space/hyphen run, trimmed. Ties go to the earliest run.
pub fn extract_topic(text: &str) -> String {
    let mut best: Option<&str> = None;
    let mut best_len = 0;
    for run in TOPIC_RUN.find_iter(text) {
        let len = run.as_str().chars().count();
        if len > best_len {
            best = Some(run.as_str());
            best_len = len;
        }
    }
    best.map(|run| run.trim().to_string())
        .unwrap_or_else(|| DEFAULT_TOPIC.to_string())
}

fn first_word_set_match<T: Copy>(table: &[(T, &[&str])], text: &str) -> Option<T> {
    table
        .iter()
        .find(|(_, words)| words.iter().any(|w| text.contains(w)))
        .map(|(value, _)| *value)
}
