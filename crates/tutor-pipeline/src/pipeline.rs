// SPDX-FileCopyrightText: 2026 Tutor Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Four-stage pipeline: Analyze -> Build -> Validate -> Invoke -> Done.
//!
//! Stages are free functions from one [`PipelineState`] to the next. A stage
//! refuses to run unless the state is at its stage, and every failure halts
//! the run with a typed [`TutorError`]. Nothing is retried.

use std::sync::Arc;
use std::time::Duration;

use serde::Serialize;
use strum::Display;
use tracing::{Instrument, debug, info, info_span, warn};
use tutor_core::{
    ClassificationResult, ParameterBag, ToolFailureKind, ToolInvoker, ToolKind, ToolResult,
    TutorError, ValidatedToolCall,
};
use uuid::Uuid;

use crate::mastery;

/// Invocation bound used when none is configured.
pub const DEFAULT_INVOKE_TIMEOUT: Duration = Duration::from_secs(20);

/// Pipeline stages, in execution order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display)]
#[strum(serialize_all = "snake_case")]
pub enum Stage {
    /// Classify the message.
    Analyze,
    /// Build the parameter bag from the classification.
    Build,
    /// Validate the bag and route it to a tool.
    Validate,
    /// Call the tool collaborator.
    Invoke,
    /// All stages completed.
    Done,
}

impl Stage {
    /// The stage that follows this one. `Done` is terminal.
    pub fn next(self) -> Stage {
        match self {
            Stage::Analyze => Stage::Build,
            Stage::Build => Stage::Validate,
            Stage::Validate => Stage::Invoke,
            Stage::Invoke | Stage::Done => Stage::Done,
        }
    }
}


/// Everything one run has produced so far.
///
/// Fields fill in stage by stage. `stage` names the next stage to run.
#[derive(Debug, Clone)]
pub struct PipelineState {
    pub run_id: Uuid,
    pub message: String,
    pub stage: Stage,
    pub classification: Option<ClassificationResult>,
    pub parameter_bag: Option<ParameterBag>,
    pub validated_call: Option<ValidatedToolCall>,
    pub tool_result: Option<ToolResult>,
}

impl PipelineState {
    /// A fresh state for `message`, ready for [`analyze`].
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            run_id: Uuid::new_v4(),
            message: message.into(),
            stage: Stage::Analyze,
            classification: None,
            parameter_bag: None,
            validated_call: None,
            tool_result: None,
        }
    }

    fn expect_stage(&self, stage: Stage) -> Result<(), TutorError> {
        if self.stage == stage {
            Ok(())
        } else {
            Err(TutorError::Internal(format!(
                "{stage} stage run while pipeline is at {}",
                self.stage
            )))
        }
    }

    fn advance(mut self) -> Self {
        self.stage = self.stage.next();
        self
    }
}

fn missing(field: &str, stage: Stage) -> TutorError {
    TutorError::Internal(format!("{stage} stage has no {field} to work from"))
}

/// Analyze: classify the message.
pub fn analyze(state: PipelineState) -> Result<PipelineState, TutorError> {
    state.expect_stage(Stage::Analyze)?;
    let classification = tutor_router::classify(&state.message);
    debug!(
        subject = %classification.subject,
        topic = %classification.topic,
        difficulty = %classification.difficulty,
        emotion = %classification.emotion,
        intent = %classification.intent,
        "message classified"
    );
    Ok(PipelineState {
        classification: Some(classification),
        ..state
    }
    .advance())
}

/// Build: derive the parameter bag for the classified intent.
pub fn build(state: PipelineState) -> Result<PipelineState, TutorError> {
    state.expect_stage(Stage::Build)?;
    let classification = state
        .classification
        .as_ref()
        .ok_or_else(|| missing("classification", Stage::Build))?;
    let bag = tutor_router::build_parameters(classification, &state.message);
    debug!(intent = %classification.intent, fields = bag.len(), "parameters built");
    Ok(PipelineState {
        parameter_bag: Some(bag),
        ..state
    }
    .advance())
}

/// Validate: check the bag against the intent's schema and route it.
pub fn validate(state: PipelineState) -> Result<PipelineState, TutorError> {
    state.expect_stage(Stage::Validate)?;
    let intent = state
        .classification
        .as_ref()
        .map(|c| c.intent)
        .ok_or_else(|| missing("classification", Stage::Validate))?;
    let bag = state
        .parameter_bag
        .as_ref()
        .ok_or_else(|| missing("parameter bag", Stage::Validate))?;

    let call = tutor_router::validate_and_route(bag, intent.as_ref()).inspect_err(|e| {
        if let TutorError::Validation(failure) = e {
            warn!(
                tool = %failure.tool,
                violations = failure.violations.len(),
                "parameter validation failed"
            );
        }
    })?;
    debug!(tool = %call.tool(), endpoint = call.endpoint(), "call routed");
    Ok(PipelineState {
        validated_call: Some(call),
        ..state
    }
    .advance())
}

/// Invoke: call the tool collaborator, bounded by `timeout`.
///
/// The only suspension point of a run. A timeout is a
/// [`ToolFailureKind::Timeout`] invocation failure.
pub async fn invoke(
    state: PipelineState,
    invoker: &dyn ToolInvoker,
    timeout: Duration,
) -> Result<PipelineState, TutorError> {
    state.expect_stage(Stage::Invoke)?;
    let call = state
        .validated_call
        .as_ref()
        .ok_or_else(|| missing("validated call", Stage::Invoke))?;
    let tool = call.tool();

    let outcome = match tokio::time::timeout(timeout, invoker.invoke(call)).await {
        Ok(outcome) => outcome,
        Err(_) => Err(TutorError::tool(
            tool,
            ToolFailureKind::Timeout,
            format!("no response within {}ms", timeout.as_millis()),
        )),
    };
    let result = outcome.inspect_err(|e| {
        if let TutorError::ToolInvocation { kind, .. } = e {
            warn!(tool = %tool, kind = %kind, invoker = invoker.name(), "tool invocation failed");
        }
    })?;

    if result.kind() != tool {
        warn!(tool = %tool, returned = %result.kind(), "tool returned another tool's result");
        return Err(TutorError::tool(
            tool,
            ToolFailureKind::MalformedResponse,
            format!("expected a {tool} result, got a {} result", result.kind()),
        ));
    }
    debug!(tool = %tool, invoker = invoker.name(), "tool invoked");
    Ok(PipelineState {
        tool_result: Some(result),
        ..state
    }
    .advance())
}

/// The product of a completed run.
#[derive(Debug, Clone, PartialEq)]
pub struct PipelineOutcome {
    pub run_id: Uuid,
    pub message: String,
    pub classification: ClassificationResult,
    pub validated_call: ValidatedToolCall,
    pub tool_result: ToolResult,
}

impl PipelineOutcome {
    /// The tool that served the message.
    pub fn chosen_tool(&self) -> ToolKind {
        self.validated_call.tool()
    }

    /// Mastery adjustment the caller should apply for the message's subject.
    pub fn mastery_delta(&self) -> f64 {
        mastery::mastery_delta(&self.classification)
    }

    fn from_state(state: PipelineState) -> Result<Self, TutorError> {
        if state.stage != Stage::Done {
            return Err(TutorError::Internal(format!(
                "run ended at {} stage",
                state.stage
            )));
        }
        match (state.classification, state.validated_call, state.tool_result) {
            (Some(classification), Some(validated_call), Some(tool_result)) => Ok(Self {
                run_id: state.run_id,
                message: state.message,
                classification,
                validated_call,
                tool_result,
            }),
            _ => Err(TutorError::Internal(
                "completed run is missing stage output".to_string(),
            )),
        }
    }
}

/// Wire shape of an outcome.
#[derive(Serialize)]
struct OutcomeBody<'a> {
    run_id: &'a Uuid,
    chosen_tool: ToolKind,
    endpoint: &'a str,
    extracted_parameters: serde_json::Value,
    result: &'a ToolResult,
    analysis: &'a ClassificationResult,
}

impl Serialize for PipelineOutcome {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        OutcomeBody {
            run_id: &self.run_id,
            chosen_tool: self.validated_call.tool(),
            endpoint: self.validated_call.endpoint(),
            extracted_parameters: self.validated_call.parameters().payload(),
            result: &self.tool_result,
            analysis: &self.classification,
        }
        .serialize(serializer)
    }
}

/// Runs messages through the four stages against one tool collaborator.
///
/// Holds no per-message state, so one pipeline can serve concurrent runs.
pub struct Pipeline {
    invoker: Arc<dyn ToolInvoker>,
    invoke_timeout: Duration,
}

impl Pipeline {
    /// Creates a pipeline with the default invocation timeout.
    pub fn new(invoker: Arc<dyn ToolInvoker>) -> Self {
        Self {
            invoker,
            invoke_timeout: DEFAULT_INVOKE_TIMEOUT,
        }
    }

    /// Overrides the invocation timeout.
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.invoke_timeout = timeout;
        self
    }

    pub fn invoke_timeout(&self) -> Duration {
        self.invoke_timeout
    }

    /// Runs one message to completion or to its first failure.
    pub async fn run(&self, message: &str) -> Result<PipelineOutcome, TutorError> {
        let state = PipelineState::new(message);
        let span = info_span!(
            "pipeline_run",
            run_id = %state.run_id,
            invoker = self.invoker.name()
        );

        async move {
            info!(message_len = state.message.len(), "pipeline run started");
            let state = analyze(state)?;
            let state = build(state)?;
            let state = validate(state)?;
            let state = invoke(state, self.invoker.as_ref(), self.invoke_timeout).await?;
            let outcome = PipelineOutcome::from_state(state)?;
            info!(tool = %outcome.chosen_tool(), "pipeline run completed");
            Ok::<_, TutorError>(outcome)
        }
        .instrument(span)
        .await
    }
}
