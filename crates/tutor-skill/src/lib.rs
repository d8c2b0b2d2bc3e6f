// SPDX-FileCopyrightText: 2026 Tutor Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Tool collaborators for the tutor orchestrator.
//!
//! The [`Tool`] trait is the in-process interface of a content tool, and
//! [`ToolRegistry`] dispatches validated calls to registered tools. Both the
//! registry and [`HttpToolClient`] implement
//! [`ToolInvoker`](tutor_core::ToolInvoker), so the pipeline can run against
//! local templates or a remote tool host.
//!
//! Built-in tools:
//! - [`builtin::NoteMakerTool`] -- bulleted study notes
//! - [`builtin::FlashcardTool`] -- question/answer or cloze cards
//! - [`builtin::ConceptExplainerTool`] -- short concept explanations

pub mod builtin;
pub mod http;
pub mod tool;

pub use http::HttpToolClient;
pub use tool::{Tool, ToolRegistry};
