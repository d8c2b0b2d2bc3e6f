// SPDX-FileCopyrightText: 2026 Tutor Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Tool invocation collaborator.

use async_trait::async_trait;

use crate::error::TutorError;
use crate::types::{ToolResult, ValidatedToolCall};

/// Something that can carry out a validated tool call.
///
/// Implementations may run the tool in-process or forward it to a remote
/// host. They must return a result whose shape matches `call.tool()`, and
/// report every failure as [`TutorError::ToolInvocation`].
#[async_trait]
pub trait ToolInvoker: Send + Sync {
    /// Human-readable name of this collaborator, used in logs.
    fn name(&self) -> &str;

    /// Performs the call.
    async fn invoke(&self, call: &ValidatedToolCall) -> Result<ToolResult, TutorError>;
}
