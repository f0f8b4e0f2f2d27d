// SPDX-FileCopyrightText: 2026 Quill Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! The `HELLO_WORLD` action.

use async_trait::async_trait;
use quill_core::{Action, ActionResult, MessageContext, QuillError, ReplyCallback, ReplyContent};

/// Fixed reply text emitted by the action.
pub const HELLO_WORLD_REPLY: &str = "Hello world!";

/// Minimal action demonstrating the handler contract: validates
/// unconditionally, emits a fixed reply through the callback, and returns a
/// success record.
pub struct HelloWorldAction;

#[async_trait]
impl Action for HelloWorldAction {
    fn name(&self) -> &str {
        "HELLO_WORLD"
    }

    fn similes(&self) -> &[&str] {
        &["GREET", "SAY_HELLO"]
    }

    fn description(&self) -> &str {
        "Responds with a simple hello world message"
    }

    async fn validate(&self, _ctx: &MessageContext) -> bool {
        // Always eligible.
        true
    }

    async fn handle(
        &self,
        _ctx: &MessageContext,
        callback: ReplyCallback<'_>,
    ) -> Result<ActionResult, QuillError> {
        tracing::info!(action = self.name(), "handling hello world action");

        callback(ReplyContent {
            text: HELLO_WORLD_REPLY.to_string(),
            actions: vec![self.name().to_string()],
        });

        let mut result = ActionResult {
            success: true,
            text: Some("Sent hello world greeting".to_string()),
            ..Default::default()
        };
        result
            .values
            .insert("greeted".to_string(), serde_json::Value::Bool(true));
        result.data.insert(
            "reply".to_string(),
            serde_json::Value::String(HELLO_WORLD_REPLY.to_string()),
        );
        Ok(result)
    }
}
