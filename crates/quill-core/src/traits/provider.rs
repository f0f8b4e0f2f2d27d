// SPDX-FileCopyrightText: 2026 Quill Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Provider capability trait.

use async_trait::async_trait;

use crate::error::QuillError;
use crate::types::{MessageContext, ProviderResult};

/// A context source the runtime queries while composing a prompt.
///
/// Providers must degrade gracefully: `get` is called with whatever context
/// the runtime has (possibly none) and is expected to return a result rather
/// than fail on malformed input.
#[async_trait]
pub trait Provider: Send + Sync {
    /// Canonical provider name (e.g. `HELLO_WORLD_PROVIDER`).
    fn name(&self) -> &str;

    /// Human-readable description.
    fn description(&self) -> &str;

    /// Produce context for the given message, if any.
    async fn get(&self, ctx: Option<&MessageContext>) -> Result<ProviderResult, QuillError>;
}
