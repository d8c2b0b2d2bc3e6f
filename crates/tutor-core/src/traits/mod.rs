// SPDX-FileCopyrightText: 2026 Tutor Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Collaborator traits the orchestrator calls through.
//!
//! Collaborators use `#[async_trait]` so they can be held as trait objects.

pub mod invoker;

pub use invoker::ToolInvoker;
