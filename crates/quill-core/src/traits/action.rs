// SPDX-FileCopyrightText: 2026 Quill Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Action capability trait.

use async_trait::async_trait;

use crate::error::QuillError;
use crate::types::{ActionResult, MessageContext, ReplyContent};

/// Callback through which an action handler emits reply content.
pub type ReplyCallback<'a> = &'a (dyn Fn(ReplyContent) + Send + Sync);

/// A discrete behavior the runtime can select in response to a message.
///
/// `validate` gates whether the action is eligible for the current message;
/// `handle` performs it, emitting any reply through the supplied callback
/// and returning a result record for the runtime.
#[async_trait]
pub trait Action: Send + Sync {
    /// Canonical action name (e.g. `HELLO_WORLD`).
    fn name(&self) -> &str;

    /// Alternative names the runtime may match against.
    fn similes(&self) -> &[&str] {
        &[]
    }

    /// Human-readable description shown to the model.
    fn description(&self) -> &str;

    /// Whether this action applies to the given message.
    async fn validate(&self, ctx: &MessageContext) -> bool;

    /// Execute the action.
    async fn handle(
        &self,
        ctx: &MessageContext,
        callback: ReplyCallback<'_>,
    ) -> Result<ActionResult, QuillError>;
}
