// SPDX-FileCopyrightText: 2026 Tutor Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Value types shared by the classifier, router, tools, and pipeline.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use strum::{AsRefStr, Display, EnumString, VariantNames};

/// Lowest card count a flashcard request may ask for.
pub const NUM_CARDS_MIN: i64 = 1;

/// Highest card count a flashcard request may ask for.
pub const NUM_CARDS_MAX: i64 = 50;

/// The downstream tool a message routes to.
///
/// The classifier's intent and the router's tool share this closed set, so a
/// dispatch over it is checked for exhaustiveness at compile time.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Display,
    EnumString,
    AsRefStr,
    VariantNames,
    Serialize,
    Deserialize,
)]
#[serde(rename_all = "snake_case")]
#[strum(serialize_all = "snake_case")]
pub enum ToolKind {
    NoteMaker,
    FlashcardGenerator,
    ConceptExplainer,
}

/// An intent names the tool that should handle a message.
pub type Intent = ToolKind;

impl ToolKind {
    /// Every tool, in declaration order.
    pub const ALL: [ToolKind; 3] = [
        ToolKind::NoteMaker,
        ToolKind::FlashcardGenerator,
        ToolKind::ConceptExplainer,
    ];

    /// Wire name of the tool, e.g. `note_maker`.
    pub fn as_str(&self) -> &'static str {
        match self {
            ToolKind::NoteMaker => "note_maker",
            ToolKind::FlashcardGenerator => "flashcard_generator",
            ToolKind::ConceptExplainer => "concept_explainer",
        }
    }

    /// Route path the tool is served under by an HTTP tool host.
    pub fn endpoint(&self) -> &'static str {
        match self {
            ToolKind::NoteMaker => "/note_maker",
            ToolKind::FlashcardGenerator => "/flashcard_generator",
            ToolKind::ConceptExplainer => "/concept_explainer",
        }
    }
}

/// Learner level inferred from the message.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Display,
    EnumString,
    AsRefStr,
    VariantNames,
    Serialize,
    Deserialize,
)]
#[serde(rename_all = "snake_case")]
#[strum(serialize_all = "snake_case")]
pub enum Difficulty {
    Beginner,
    Intermediate,
    Advanced,
}

/// Emotional state inferred from the message.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Display,
    EnumString,
    AsRefStr,
    VariantNames,
    Serialize,
    Deserialize,
)]
#[serde(rename_all = "snake_case")]
#[strum(serialize_all = "snake_case")]
pub enum Emotion {
    Confused,
    Frustrated,
    Curious,
    Confident,
    Neutral,
}

/// Requested length of generated notes.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Display,
    EnumString,
    AsRefStr,
    VariantNames,
    Serialize,
    Deserialize,
)]
#[serde(rename_all = "snake_case")]
#[strum(serialize_all = "snake_case")]
pub enum NoteLength {
    Short,
    Medium,
    Long,
}

impl NoteLength {
    /// Number of bullets the note maker pads its body to.
    pub fn target_points(&self) -> usize {
        match self {
            NoteLength::Short => 4,
            NoteLength::Medium => 8,
            NoteLength::Long => 14,
        }
    }
}

/// Layout of generated notes.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Display,
    EnumString,
    AsRefStr,
    VariantNames,
    Serialize,
    Deserialize,
)]
#[serde(rename_all = "snake_case")]
#[strum(serialize_all = "snake_case")]
pub enum NoteStyle {
    Bullets,
    Outline,
    Summary,
}

/// Flashcard layout.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Display,
    EnumString,
    AsRefStr,
    VariantNames,
    Serialize,
    Deserialize,
)]
#[serde(rename_all = "snake_case")]
#[strum(serialize_all = "snake_case")]
pub enum CardFormat {
    Qna,
    Cloze,
}

/// Everything the lexical classifier infers from one message.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ClassificationResult {
    pub subject: String,
    pub topic: String,
    pub difficulty: Difficulty,
    pub emotion: Emotion,
    pub intent: Intent,
}

/// Intent-shaped, not yet validated tool parameters.
///
/// Values are plain JSON so that a bag can carry anything a caller supplies;
/// the router decides what is acceptable.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ParameterBag(Map<String, Value>);

impl ParameterBag {
    /// Creates an empty bag.
    pub fn new() -> Self {
        Self(Map::new())
    }

    /// Builder-style insert.
    pub fn with(mut self, key: &str, value: impl Into<Value>) -> Self {
        self.insert(key, value);
        self
    }

    /// Sets `key`, replacing any previous value.
    pub fn insert(&mut self, key: &str, value: impl Into<Value>) {
        self.0.insert(key.to_string(), value.into());
    }

    pub fn get(&self, key: &str) -> Option<&Value> {
        self.0.get(key)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl From<Map<String, Value>> for ParameterBag {
    fn from(map: Map<String, Value>) -> Self {
        Self(map)
    }
}

/// Normalized parameters for the note maker.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct NoteMakerParams {
    pub subject: String,
    pub topic: String,
    pub key_points: Vec<String>,
    pub difficulty: Difficulty,
    pub length: NoteLength,
    pub style: NoteStyle,
}

/// Normalized parameters for the flashcard generator.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct FlashcardParams {
    pub subject: String,
    pub topic: String,
    /// Always within `NUM_CARDS_MIN..=NUM_CARDS_MAX` once validated.
    pub num_cards: u32,
    pub difficulty: Difficulty,
    pub format: CardFormat,
    pub key_terms: Vec<String>,
}

/// Normalized parameters for the concept explainer.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ConceptExplainerParams {
    pub subject: String,
    pub concept: String,
    pub level: Difficulty,
    pub analogy: bool,
}

/// Schema-checked parameters, one variant per tool.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "tool", content = "parameters", rename_all = "snake_case")]
pub enum ToolParameters {
    NoteMaker(NoteMakerParams),
    FlashcardGenerator(FlashcardParams),
    ConceptExplainer(ConceptExplainerParams),
}

impl ToolParameters {
    /// The tool these parameters belong to.
    pub fn kind(&self) -> ToolKind {
        match self {
            ToolParameters::NoteMaker(_) => ToolKind::NoteMaker,
            ToolParameters::FlashcardGenerator(_) => ToolKind::FlashcardGenerator,
            ToolParameters::ConceptExplainer(_) => ToolKind::ConceptExplainer,
        }
    }

    /// The bare parameter record as a JSON object, without the tool tag.
    ///
    /// This is the request body a tool host receives.
    pub fn payload(&self) -> Value {
        let value = match self {
            ToolParameters::NoteMaker(p) => serde_json::to_value(p),
            ToolParameters::FlashcardGenerator(p) => serde_json::to_value(p),
            ToolParameters::ConceptExplainer(p) => serde_json::to_value(p),
        };
        // Plain structs of strings, integers, and unit enums always serialize.
        value.unwrap_or(Value::Null)
    }
}

/// A tool-ready call: which tool, where it lives, and what to send it.
///
/// Built only from [`ToolParameters`], so `tool` and `endpoint` always agree
/// with the parameter shape.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ValidatedToolCall {
    tool: ToolKind,
    endpoint: &'static str,
    parameters: ToolParameters,
}

impl ValidatedToolCall {
    pub fn new(parameters: ToolParameters) -> Self {
        let tool = parameters.kind();
        Self {
            tool,
            endpoint: tool.endpoint(),
            parameters,
        }
    }

    pub fn tool(&self) -> ToolKind {
        self.tool
    }

    pub fn endpoint(&self) -> &'static str {
        self.endpoint
    }

    pub fn parameters(&self) -> &ToolParameters {
        &self.parameters
    }}

/// Output of the note maker.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NoteMakerOutput {
    pub notes: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub outline: Option<Vec<String>>,
}

/// A single question/answer card.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Flashcard {
    pub question: String,
    pub answer: String,
}

/// Output of the flashcard generator.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FlashcardOutput {
    pub cards: Vec<Flashcard>,
}

/// Output of the concept explainer.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ConceptExplainerOutput {
    pub explanation: String,
}

/// What a tool collaborator hands back.
///
/// Serializes as the bare tool body (`{"notes": ..}`, `{"cards": ..}`,
/// `{"explanation": ..}`).
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(untagged)]
pub enum ToolResult {
    Notes(NoteMakerOutput),
    Flashcards(FlashcardOutput),
    Explanation(ConceptExplainerOutput),
}

impl ToolResult {
    /// The tool that produces this result shape.
    pub fn kind(&self) -> ToolKind {
        match self {
            ToolResult::Notes(_) => ToolKind::NoteMaker,
            ToolResult::Flashcards(_) => ToolKind::FlashcardGenerator,
            ToolResult::Explanation(_) => ToolKind::ConceptExplainer,
        }
    }

    /// Decodes a tool body, expecting the shape `tool` produces.
    pub fn from_json(tool: ToolKind, body: Value) -> Result<Self, serde_json::Error> {
        Ok(match tool {
            ToolKind::NoteMaker => ToolResult::Notes(serde_json::from_value(body)?),
            ToolKind::FlashcardGenerator => ToolResult::Flashcards(serde_json::from_value(body)?),
            ToolKind::ConceptExplainer => ToolResult::Explanation(serde_json::from_value(body)?),
        })
    }
}
