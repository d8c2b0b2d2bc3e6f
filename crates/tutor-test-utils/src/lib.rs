// SPDX-FileCopyrightText: 2026 Tutor Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Test utilities for tutor integration tests.
//!
//! Provides a scripted tool collaborator for fast, deterministic tests
//! without a tool host.
//!
//! # Components
//!
//! - [`MockToolInvoker`] - Tool invoker with scripted results, failures, and delays

pub mod mock_tool;

pub use mock_tool::{MockReply, MockToolInvoker, canned_result};
