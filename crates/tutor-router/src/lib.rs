// SPDX-FileCopyrightText: 2026 Tutor Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Message analysis and tool routing for the tutor orchestrator.
//!
//! This crate provides the three pure stages that run before a tool is called:
//! - [`classify`]: keyword/regex classification of subject, topic, difficulty,
//!   emotion, and intent (deterministic, never fails)
//! - [`build_parameters`]: intent-shaped parameter bag with defaults applied
//! - [`validate_and_route`]: strict schema check producing a [`ValidatedToolCall`]
//!
//! [`ValidatedToolCall`]: tutor_core::ValidatedToolCall

pub mod classifier;
pub mod params;
pub mod router;

pub use classifier::{
    classify, extract_topic, infer_difficulty, infer_emotion, infer_intent, infer_subject,
};
pub use params::{build_parameters, extract_num_cards};
pub use router::{validate_and_route, validate_for};
