// SPDX-FileCopyrightText: 2026 Tutor Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! `tutor ask` command implementation.
//!
//! Wires the configured tool backend into a pipeline, runs one message, and
//! scores the learner's mastery for the message's subject.

use std::sync::Arc;
use std::time::Duration;

use serde::Serialize;
use tracing::info;
use tutor_config::{ToolBackend, TutorConfig};
use tutor_core::{ToolInvoker, TutorError};
use tutor_pipeline::{MasteryUpdate, Pipeline, PipelineOutcome};
use tutor_skill::{HttpToolClient, ToolRegistry};

/// What `tutor ask` prints on success.
#[derive(Debug, Serialize)]
pub struct AskReport {
    #[serde(flatten)]
    pub outcome: PipelineOutcome,
    pub mastery: MasteryUpdate,
}

/// Builds the tool collaborator selected by `[tools] backend`.
pub fn build_invoker(config: &TutorConfig) -> Result<Arc<dyn ToolInvoker>, TutorError> {
    match config.tools.backend {
        ToolBackend::Local => Ok(Arc::new(ToolRegistry::with_builtins())),
        ToolBackend::Http => {
            let client = HttpToolClient::new(
                config.tools.base_url.clone(),
                Duration::from_secs(config.tools.timeout_secs),
            )?;
            Ok(Arc::new(client))
        }
    }
}

/// Builds a pipeline over the configured backend and invocation timeout.
pub fn build_pipeline(config: &TutorConfig) -> Result<Pipeline, TutorError> {
    let invoker = build_invoker(config)?;
    Ok(Pipeline::new(invoker).with_timeout(Duration::from_secs(config.tools.timeout_secs)))
}

/// Runs `message` and scores it against `initial_mastery`, falling back to
/// `[mastery] initial_level` when none is given.
pub async fn run_ask(
    config: &TutorConfig,
    message: &str,
    initial_mastery: Option<f64>,
) -> Result<AskReport, TutorError> {
    let pipeline = build_pipeline(config)?;
    let outcome = pipeline.run(message).await?;

    let previous = initial_mastery.unwrap_or(config.mastery.initial_level);
    let mastery = MasteryUpdate::compute(&outcome.classification, previous);
    info!(
        subject = %mastery.subject,
        delta = mastery.delta,
        level = mastery.level,
        "mastery scored"
    );

    Ok(AskReport { outcome, mastery })
}

/// Process exit code for a failed run: 2 for caller mistakes, 1 otherwise.
pub fn exit_code(err: &TutorError) -> i32 {
    match err.category() {
        tutor_core::ErrorCategory::Client => 2,
        tutor_core::ErrorCategory::Server => 1,
    }
}

/// Renders a run failure for stderr, one violation per line.
pub fn render_failure(err: &TutorError) -> String {
    let mut out = format!("error[{}/{}]: ", err.category(), err.code());
    match err {
        TutorError::Validation(failure) => {
            out.push_str(&format!("invalid parameters for {}", failure.tool));
            for violation in &failure.violations {
                out.push_str(&format!("\n  - {violation}"));
            }
        }
        other => out.push_str(&other.to_string()),
    }
    out
}
