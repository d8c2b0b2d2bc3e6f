// SPDX-FileCopyrightText: 2026 Tutor Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! HTTP client for a remote tool host.
//!
//! Each validated call is POSTed as JSON to `{base_url}{endpoint}`. The
//! client maps every failure onto a [`ToolFailureKind`] so callers can tell
//! a dead host from a bad answer.

use std::time::Duration;

use async_trait::async_trait;
use tracing::debug;
use tutor_core::{ToolFailureKind, ToolInvoker, ToolResult, TutorError, ValidatedToolCall};

/// Longest error body quoted back in a status failure.
const MAX_ERROR_BODY: usize = 512;

/// Calls tools served over HTTP.
pub struct HttpToolClient {
    client: reqwest::Client,
    base_url: String,
}

impl HttpToolClient {
    /// Creates a client for the tool host at `base_url`.
    ///
    /// `timeout` bounds each request end to end.
    pub fn new(base_url: impl Into<String>, timeout: Duration) -> Result<Self, TutorError> {
        let client = reqwest::Client::builder()
            .timeout(timeout)
            .build()
            .map_err(|e| TutorError::Config(format!("failed to build HTTP client: {e}")))?;
        Ok(Self {
            client,
            base_url: base_url.into().trim_end_matches('/').to_string(),
        })
    }

    /// Base URL without a trailing slash.
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Full URL a call is sent to.
    pub fn url_for(&self, call: &ValidatedToolCall) -> String {
        format!("{}{}", self.base_url, call.endpoint())
    }
}

#[async_trait]
impl ToolInvoker for HttpToolClient {
    fn name(&self) -> &str {
        "http"
    }

    async fn invoke(&self, call: &ValidatedToolCall) -> Result<ToolResult, TutorError> {
        let tool = call.tool();
        let url = self.url_for(call);

        let response = self
            .client
            .post(&url)
            .json(&call.parameters().payload())
            .send()
            .await
            .map_err(|e| {
                let kind = if e.is_timeout() {
                    ToolFailureKind::Timeout
                } else {
                    ToolFailureKind::Transport
                };
                TutorError::tool_with_source(tool, kind, format!("request to {url} failed"), e)
            })?;

        let status = response.status();
        debug!(tool = %tool, url = %url, status = %status, "tool response received");

        if !status.is_success() {
            let mut body = response.text().await.unwrap_or_default();
            if body.len() > MAX_ERROR_BODY {
                let mut cut = MAX_ERROR_BODY;
                while !body.is_char_boundary(cut) {
                    cut -= 1;
                }
                body.truncate(cut);
            }
            return Err(TutorError::tool(
                tool,
                ToolFailureKind::Status,
                format!("{url} returned {status}: {body}"),
            ));
        }

        let bytes = response.bytes().await.map_err(|e| {
            let kind = if e.is_timeout() {
                ToolFailureKind::Timeout
            } else {
                ToolFailureKind::Transport
            };
            TutorError::tool_with_source(tool, kind, "failed to read response body", e)
        })?;

        let body: serde_json::Value = serde_json::from_slice(&bytes).map_err(|e| {
            TutorError::tool_with_source(
                tool,
                ToolFailureKind::MalformedResponse,
                "response is not JSON",
                e,
            )
        })?;

        ToolResult::from_json(tool, body).map_err(|e| {
            TutorError::tool_with_source(
                tool,
                ToolFailureKind::MalformedResponse,
                format!("response is not a {tool} result"),
                e,
            )
        })
    }
}
