// SPDX-FileCopyrightText: 2026 Tutor Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Request pipeline for the tutor orchestrator.
//!
//! The [`Pipeline`] turns one free-text message into one tool result by
//! running four stages in a fixed order:
//! - **analyze**: lexical classification of the message
//! - **build**: intent-shaped parameter bag
//! - **validate**: strict schema check and routing
//! - **invoke**: a single, timeout-bounded call to the tool collaborator
//!
//! Each stage consumes a [`PipelineState`] and returns the next one, so
//! concurrent runs never share mutable state. The pipeline keeps nothing
//! between messages; mastery bookkeeping is offered as pure functions in
//! [`mastery`] for the caller to persist.

pub mod mastery;
pub mod pipeline;

pub use mastery::{MasteryUpdate, apply_mastery, mastery_delta};
pub use pipeline::{
    DEFAULT_INVOKE_TIMEOUT, Pipeline, PipelineOutcome, PipelineState, Stage, analyze, build,
    invoke, validate,
};
