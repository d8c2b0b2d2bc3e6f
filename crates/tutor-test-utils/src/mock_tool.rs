// SPDX-FileCopyrightText: 2026 Tutor Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Mock tool collaborator for deterministic testing.
//!
//! `MockToolInvoker` implements `ToolInvoker` with pre-configured replies and
//! records every call it receives, enabling pipeline tests without a tool host.

use std::collections::VecDeque;
use std::sync::Arc;
use std::time::Duration;

use async_trait::async_trait;
use tokio::sync::Mutex;
use tracing::debug;

use tutor_core::{
    ConceptExplainerOutput, Flashcard, FlashcardOutput, NoteMakerOutput, ToolFailureKind,
    ToolInvoker, ToolKind, ToolResult, TutorError, ValidatedToolCall,
};

/// One scripted reply.
#[derive(Debug, Clone)]
pub enum MockReply {
    /// Answer with this result.
    Result(ToolResult),
    /// Fail with a tool invocation error of this kind.
    Failure(ToolFailureKind, String),
    /// Wait, then give the inner reply. Uses tokio time, so paused clocks apply.
    Delayed(Duration, Box<MockReply>),
}

/// A mock tool invoker that answers from a reply queue.
///
/// Replies are popped from a FIFO queue. When the queue is empty,
/// [`canned_result`] for the called tool is returned.
pub struct MockToolInvoker {
    replies: Arc<Mutex<VecDeque<MockReply>>>,
    calls: Arc<Mutex<Vec<ValidatedToolCall>>>,
}

impl MockToolInvoker {
    /// Create a new mock invoker with an empty reply queue.
    pub fn new() -> Self {
        Self {
            replies: Arc::new(Mutex::new(VecDeque::new())),
            calls: Arc::new(Mutex::new(Vec::new())),
        }
    }

    /// Create a mock invoker pre-loaded with the given replies.
    pub fn with_replies(replies: Vec<MockReply>) -> Self {
        Self {
            replies: Arc::new(Mutex::new(VecDeque::from(replies))),
            calls: Arc::new(Mutex::new(Vec::new())),
        }
    }

    /// Queue a successful result.
    pub async fn push_result(&self, result: ToolResult) {
        self.replies.lock().await.push_back(MockReply::Result(result));
    }

    /// Queue a failure of the given kind.
    pub async fn push_failure(&self, kind: ToolFailureKind, message: &str) {
        self.replies
            .lock()
            .await
            .push_back(MockReply::Failure(kind, message.to_string()));
    }

    /// Queue `then`, to be given only after `delay`.
    pub async fn push_delay(&self, delay: Duration, then: MockReply) {
        self.replies
            .lock()
            .await
            .push_back(MockReply::Delayed(delay, Box::new(then)));
    }

    /// Every call received so far, in order.
    pub async fn calls(&self) -> Vec<ValidatedToolCall> {
        self.calls.lock().await.clone()
    }

    /// Number of calls received so far.
    pub async fn call_count(&self) -> usize {
        self.calls.lock().await.len()
    }
}

impl Default for MockToolInvoker {
    fn default() -> Self {
        Self::new()
    }
}

/// A minimal well-formed result for `tool`.
pub fn canned_result(tool: ToolKind) -> ToolResult {
    match tool {
        ToolKind::NoteMaker => ToolResult::Notes(NoteMakerOutput {
            notes: "mock notes".to_string(),
            outline: None,
        }),
        ToolKind::FlashcardGenerator => ToolResult::Flashcards(FlashcardOutput {
            cards: vec![Flashcard {
                question: "mock question".to_string(),
                answer: "mock answer".to_string(),
            }],
        }),
        ToolKind::ConceptExplainer => ToolResult::Explanation(ConceptExplainerOutput {
            explanation: "mock explanation".to_string(),
        }),
    }
}

#[async_trait]
impl ToolInvoker for MockToolInvoker {
    fn name(&self) -> &str {
        "mock-tools"
    }

    async fn invoke(&self, call: &ValidatedToolCall) -> Result<ToolResult, TutorError> {
        self.calls.lock().await.push(call.clone());
        let reply = self.replies.lock().await.pop_front();
        debug!(tool = %call.tool(), scripted = reply.is_some(), "mock tool invoked");

        let mut reply = reply.unwrap_or_else(|| MockReply::Result(canned_result(call.tool())));
        loop {
            match reply {
                MockReply::Result(result) => return Ok(result),
                MockReply::Failure(kind, message) => {
                    return Err(TutorError::tool(call.tool(), kind, message));
                }
                MockReply::Delayed(delay, then) => {
                    tokio::time::sleep(delay).await;
                    reply = *then;
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tutor_core::{ConceptExplainerParams, Difficulty, ToolParameters};

    fn call() -> ValidatedToolCall {
        ValidatedToolCall::new(ToolParameters::ConceptExplainer(ConceptExplainerParams {
            subject: "math".into(),
            concept: "sets".into(),
            level: Difficulty::Beginner,
            analogy: true,
        }))
    }

    #[tokio::test]
    async fn empty_queue_returns_canned_result_for_tool() {
        let mock = MockToolInvoker::new();
        let result = mock.invoke(&call()).await.unwrap();
        assert_eq!(result, canned_result(ToolKind::ConceptExplainer));
        assert_eq!(mock.call_count().await, 1);
    }

    #[tokio::test]
    async fn replies_are_consumed_in_order() {
        let mock = MockToolInvoker::new();
        mock.push_failure(ToolFailureKind::Status, "boom").await;
        mock.push_result(canned_result(ToolKind::NoteMaker)).await;

        let err = mock.invoke(&call()).await.unwrap_err();
        assert!(matches!(
            err,
            TutorError::ToolInvocation {
                kind: ToolFailureKind::Status,
                ..
            }
        ));
        let second = mock.invoke(&call()).await.unwrap();
        assert_eq!(second.kind(), ToolKind::NoteMaker);
        assert_eq!(mock.calls().await.len(), 2);
    }

    #[tokio::test(start_paused = true)]
    async fn delayed_reply_waits_on_tokio_clock() {
        let mock = MockToolInvoker::with_replies(vec![MockReply::Delayed(
            Duration::from_secs(30),
            Box::new(MockReply::Result(canned_result(ToolKind::ConceptExplainer))),
        )]);
        let start = tokio::time::Instant::now();
        mock.invoke(&call()).await.unwrap();
        assert!(start.elapsed() >= Duration::from_secs(30));
    }
}
