// SPDX-FileCopyrightText: 2026 Tutor Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! End-to-end tests across configuration, routing, and both tool backends.
//!
//! Each test wires its own pipeline from a TOML snippet, the way the binary
//! does. Tests are independent and order-insensitive.

use std::io::Write;
use std::sync::Arc;
use std::time::Duration;

use serde_json::json;
use tutor_config::{ToolBackend, TutorConfig};
use tutor_core::{ErrorCategory, ToolFailureKind, ToolKind, ToolResult, TutorError};
use tutor_pipeline::{MasteryUpdate, Pipeline};
use tutor_skill::{HttpToolClient, ToolRegistry};
use tutor_test_utils::MockToolInvoker;
use wiremock::matchers::{body_json, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn local_pipeline() -> Pipeline {
    Pipeline::new(Arc::new(ToolRegistry::with_builtins()))
}

fn http_pipeline(config: &TutorConfig) -> Pipeline {
    let client = HttpToolClient::new(
        config.tools.base_url.clone(),
        Duration::from_secs(config.tools.timeout_secs),
    )
    .unwrap();
    Pipeline::new(Arc::new(client)).with_timeout(Duration::from_secs(config.tools.timeout_secs))
}

// ---- Built-in tools ----

#[tokio::test]
async fn test_local_explainer_renders_templated_text() {
    let outcome = local_pipeline()
        .run("Can you explain derivatives for a beginner?")
        .await
        .unwrap();

    match &outcome.tool_result {
        ToolResult::Explanation(out) => {
            assert!(out.explanation.starts_with(
                "Explaining can you explain derivatives for a beginner in math for a beginner learner."
            ));
            assert!(out.explanation.contains("Core idea:"));
            assert!(!out.explanation.contains("analogy"));
        }
        other => panic!("expected an explanation, got {other:?}"),
    }
}

#[tokio::test]
async fn test_local_flashcards_honor_requested_count() {
    let outcome = local_pipeline()
        .run("I need 15 flashcards on photosynthesis")
        .await
        .unwrap();

    match &outcome.tool_result {
        ToolResult::Flashcards(out) => {
            assert_eq!(out.cards.len(), 15);
            assert_eq!(
                out.cards[0].question,
                "(intermediate) What is flashcards on photosynthesis? (card 1)"
            );
            assert_eq!(
                out.cards[14].answer,
                "flashcards on photosynthesis is a concept in math."
            );
        }
        other => panic!("expected flashcards, got {other:?}"),
    }
}

#[tokio::test]
async fn test_local_notes_have_medium_length() {
    let outcome = local_pipeline()
        .run("summary of the cold war")
        .await
        .unwrap();

    match &outcome.tool_result {
        ToolResult::Notes(out) => {
            let bullets = out.notes.lines().filter(|l| l.starts_with("- ")).count();
            assert_eq!(bullets, 8);
            assert!(out.notes.ends_with("Summary: These notes provide a concise overview."));
            assert!(out.outline.is_none());
        }
        other => panic!("expected notes, got {other:?}"),
    }
}

// ---- HTTP tool host ----

#[tokio::test]
async fn test_http_backend_posts_to_tool_endpoint() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/concept_explainer"))
        .and(body_json(json!({
            "subject": "math",
            "concept": "can you explain derivatives for a beginner",
            "level": "beginner",
            "analogy": false
        })))
        .respond_with(
            ResponseTemplate::new(200).set_body_json(json!({"explanation": "Rates of change."})),
        )
        .expect(1)
        .mount(&server)
        .await;

    let config = tutor_config::load_and_validate_str(&format!(
        "[tools]\nbackend = \"http\"\nbase_url = \"{}/\"\ntimeout_secs = 5\n",
        server.uri()
    ))
    .unwrap();
    assert_eq!(config.tools.backend, ToolBackend::Http);

    let outcome = http_pipeline(&config)
        .run("Can you explain derivatives for a beginner?")
        .await
        .unwrap();
    assert_eq!(outcome.chosen_tool(), ToolKind::ConceptExplainer);
    match outcome.tool_result {
        ToolResult::Explanation(out) => assert_eq!(out.explanation, "Rates of change."),
        other => panic!("expected an explanation, got {other:?}"),
    }
}

#[tokio::test]
async fn test_http_backend_error_status_is_server_side() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/note_maker"))
        .respond_with(ResponseTemplate::new(500).set_body_string("boom"))
        .mount(&server)
        .await;

    let config = tutor_config::load_and_validate_str(&format!(
        "[tools]\nbackend = \"http\"\nbase_url = \"{}\"\n",
        server.uri()
    ))
    .unwrap();

    let err = http_pipeline(&config)
        .run("notes on the water cycle")
        .await
        .unwrap_err();
    assert!(matches!(
        err,
        TutorError::ToolInvocation {
            kind: ToolFailureKind::Status,
            ..
        }
    ));
    assert_eq!(err.category(), ErrorCategory::Server);
}

// ---- Configuration ----

#[test]
fn test_config_file_selects_backend_and_mastery() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    writeln!(
        file,
        "[tools]\nbackend = \"http\"\nbase_url = \"https://tools.example\"\n\n[mastery]\ninitial_level = 0.25"
    )
    .unwrap();

    let config = tutor_config::load_and_validate_path(file.path()).unwrap();
    assert_eq!(config.tools.backend, ToolBackend::Http);
    assert_eq!(config.tools.base_url, "https://tools.example");
    assert_eq!(config.mastery.initial_level, 0.25);
}

#[test]
fn test_http_backend_without_scheme_is_rejected() {
    let errors = tutor_config::load_and_validate_str(
        "[tools]\nbackend = \"http\"\nbase_url = \"tools.example\"\n",
    )
    .unwrap_err();
    assert!(errors.iter().any(|e| e.to_string().contains("base_url")));
}

// ---- Mastery ----

#[tokio::test]
async fn test_mastery_follows_classification() {
    let pipeline = Pipeline::new(Arc::new(MockToolInvoker::new()));
    let outcome = pipeline
        .run("I'm frustrated, give me an advanced proof of the chain rule")
        .await
        .unwrap();

    let update = MasteryUpdate::compute(&outcome.classification, 0.5);
    assert!((update.delta - (-0.04)).abs() < 1e-9);
    assert!((update.level - 0.46).abs() < 1e-9);
    assert!((outcome.mastery_delta() - update.delta).abs() < 1e-9);
}
