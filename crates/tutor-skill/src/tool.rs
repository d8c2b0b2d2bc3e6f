// SPDX-FileCopyrightText: 2026 Tutor Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Tool trait and registry for in-process content tools.
//!
//! The [`Tool`] trait defines the interface every built-in tool implements.
//! The [`ToolRegistry`] holds at most one tool per [`ToolKind`], lists tool
//! definitions for display, and serves as a [`ToolInvoker`] for the pipeline.

use std::collections::HashMap;
use std::sync::Arc;

use async_trait::async_trait;
use tracing::debug;
use tutor_core::{
    ToolFailureKind, ToolInvoker, ToolKind, ToolParameters, ToolResult, TutorError,
    ValidatedToolCall,
};

/// Unified trait for content tools.
///
/// A tool receives parameters that already passed schema validation, so it
/// only has to produce its result.
#[async_trait]
pub trait Tool: Send + Sync {
    /// The tool slot this implementation fills.
    fn kind(&self) -> ToolKind;

    /// Returns the tool's unique name (the wire name of its kind).
    fn name(&self) -> &'static str {
        self.kind().as_str()
    }

    /// Returns a human-readable description of what the tool does.
    fn description(&self) -> &str;

    /// Returns the JSON Schema describing the tool's input parameters.
    fn parameters_schema(&self) -> serde_json::Value;

    /// Runs the tool on validated parameters.
    async fn invoke(&self, parameters: &ToolParameters) -> Result<ToolResult, TutorError>;
}

/// Registry of available tools, indexed by kind.
pub struct ToolRegistry {
    tools: HashMap<ToolKind, Arc<dyn Tool>>,
}

impl ToolRegistry {
    /// Creates an empty tool registry.
    pub fn new() -> Self {
        Self {
            tools: HashMap::new(),
        }
    }

    /// Creates a registry holding the three built-in templated tools.
    pub fn with_builtins() -> Self {
        let mut registry = Self::new();
        crate::builtin::register_builtins(&mut registry);
        registry
    }

    /// Registers a tool under its `kind()`, replacing any previous one.
    pub fn register(&mut self, tool: Arc<dyn Tool>) {
        self.tools.insert(tool.kind(), tool);
    }

    /// Looks up the tool for `kind`.
    pub fn get(&self, kind: ToolKind) -> Option<Arc<dyn Tool>> {
        self.tools.get(&kind).cloned()
    }

    /// Returns (name, description) pairs for all registered tools, sorted by name.
    pub fn list(&self) -> Vec<(&str, &str)> {
        let mut entries: Vec<(&str, &str)> = self
            .tools
            .values()
            .map(|t| (t.name(), t.description()))
            .collect();
        entries.sort_by_key(|(name, _)| *name);
        entries
    }

    /// Returns tool definitions for all registered tools, sorted by name.
    ///
    /// Each definition has the shape:
    /// ```json
    /// {
    ///   "name": "note_maker",
    ///   "endpoint": "/note_maker",
    ///   "description": "What the tool does",
    ///   "input_schema": { ... JSON Schema ... }
    /// }
    /// ```
    pub fn tool_definitions(&self) -> Vec<serde_json::Value> {
        let mut tools: Vec<&Arc<dyn Tool>> = self.tools.values().collect();
        tools.sort_by_key(|t| t.name());
        tools
            .into_iter()
            .map(|t| {
                serde_json::json!({
                    "name": t.name(),
                    "endpoint": t.kind().endpoint(),
                    "description": t.description(),
                    "input_schema": t.parameters_schema(),
                })
            })
            .collect()
    }

    /// Returns the number of registered tools.
    pub fn len(&self) -> usize {
        self.tools.len()
    }

    /// Returns true if no tools are registered.
    pub fn is_empty(&self) -> bool {
        self.tools.is_empty()
    }
}

impl Default for ToolRegistry {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl ToolInvoker for ToolRegistry {
    fn name(&self) -> &str {
        "local"
    }

    async fn invoke(&self, call: &ValidatedToolCall) -> Result<ToolResult, TutorError> {
        let kind = call.tool();
        let tool = self.get(kind).ok_or_else(|| {
            TutorError::tool(
                kind,
                ToolFailureKind::Unavailable,
                "no tool registered for this kind",
            )
        })?;

        let result = tool.invoke(call.parameters()).await?;
        if result.kind() != kind {
            return Err(TutorError::tool(
                kind,
                ToolFailureKind::MalformedResponse,
                format!("tool returned a {} result", result.kind()),
            ));
        }
        debug!(tool = %kind, "local tool invoked");
        Ok(result)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tutor_core::{
        ConceptExplainerOutput, ConceptExplainerParams, Difficulty, NoteMakerOutput,
    };

    /// Always answers with a fixed explanation.
    struct FixedExplainer;

    #[async_trait]
    impl Tool for FixedExplainer {
        fn kind(&self) -> ToolKind {
            ToolKind::ConceptExplainer
        }

        fn description(&self) -> &str {
            "Explains everything the same way"
        }

        fn parameters_schema(&self) -> serde_json::Value {
            serde_json::json!({"type": "object"})
        }

        async fn invoke(&self, _parameters: &ToolParameters) -> Result<ToolResult, TutorError> {
            Ok(ToolResult::Explanation(ConceptExplainerOutput {
                explanation: "It depends.".into(),
            }))
        }
    }

    /// Registered as an explainer but answers with notes.
    struct Confused;

    #[async_trait]
    impl Tool for Confused {
        fn kind(&self) -> ToolKind {
            ToolKind::ConceptExplainer
        }

        fn description(&self) -> &str {
            "Returns the wrong shape"
        }

        fn parameters_schema(&self) -> serde_json::Value {
            serde_json::json!({"type": "object"})
        }

        async fn invoke(&self, _parameters: &ToolParameters) -> Result<ToolResult, TutorError> {
            Ok(ToolResult::Notes(NoteMakerOutput {
                notes: "?".into(),
                outline: None,
            }))
        }
    }

    fn explainer_call() -> ValidatedToolCall {
        ValidatedToolCall::new(ToolParameters::ConceptExplainer(ConceptExplainerParams {
            subject: "math".into(),
            concept: "limits".into(),
            level: Difficulty::Beginner,
            analogy: false,
        }))
    }

    #[test]
    fn registry_registers_by_kind() {
        let mut registry = ToolRegistry::new();
        assert!(registry.is_empty());
        registry.register(Arc::new(FixedExplainer));
        registry.register(Arc::new(FixedExplainer));
        assert_eq!(registry.len(), 1);
        assert_eq!(
            registry.get(ToolKind::ConceptExplainer).unwrap().name(),
            "concept_explainer"
        );
        assert!(registry.get(ToolKind::NoteMaker).is_none());
    }

    #[test]
    fn builtins_are_listed_sorted() {
        let registry = ToolRegistry::with_builtins();
        let names: Vec<&str> = registry.list().into_iter().map(|(n, _)| n).collect();
        assert_eq!(
            names,
            vec!["concept_explainer", "flashcard_generator", "note_maker"]
        );

        let defs = registry.tool_definitions();
        assert_eq!(defs.len(), 3);
        assert_eq!(defs[1]["endpoint"], "/flashcard_generator");
        assert_eq!(defs[1]["input_schema"]["type"], "object");
    }

    #[tokio::test]
    async fn registry_dispatches_to_registered_tool() {
        let mut registry = ToolRegistry::new();
        registry.register(Arc::new(FixedExplainer));
        let result = ToolInvoker::invoke(&registry, &explainer_call()).await.unwrap();
        assert_eq!(result.kind(), ToolKind::ConceptExplainer);
    }

    #[tokio::test]
    async fn missing_tool_is_unavailable() {
        let registry = ToolRegistry::new();
        let err = ToolInvoker::invoke(&registry, &explainer_call())
            .await
            .unwrap_err();
        assert!(matches!(
            err,
            TutorError::ToolInvocation {
                kind: ToolFailureKind::Unavailable,
                tool: ToolKind::ConceptExplainer,
                ..
            }
        ));
    }

    #[tokio::test]
    async fn wrong_result_shape_is_malformed() {
        let mut registry = ToolRegistry::new();
        registry.register(Arc::new(Confused));
        let err = ToolInvoker::invoke(&registry, &explainer_call())
            .await
            .unwrap_err();
        assert!(matches!(
            err,
            TutorError::ToolInvocation {
                kind: ToolFailureKind::MalformedResponse,
                ..
            }
        ));
    }
}
