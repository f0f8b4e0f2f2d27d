// SPDX-FileCopyrightText: 2026 Quill Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! The `HELLO_WORLD_PROVIDER` provider.

use async_trait::async_trait;
use quill_core::{MessageContext, Provider, ProviderResult, QuillError};

/// Fixed context text contributed by the provider.
pub const HELLO_WORLD_PROVIDER_TEXT: &str = "I am a provider";

/// Minimal provider demonstrating the context-source contract. `get` never
/// fails, whatever the runtime hands it.
pub struct HelloWorldProvider;

#[async_trait]
impl Provider for HelloWorldProvider {
    fn name(&self) -> &str {
        "HELLO_WORLD_PROVIDER"
    }

    fn description(&self) -> &str {
        "A simple example provider"
    }

    async fn get(&self, _ctx: Option<&MessageContext>) -> Result<ProviderResult, QuillError> {
        Ok(ProviderResult {
            text: HELLO_WORLD_PROVIDER_TEXT.to_string(),
            ..Default::default()
        })
    }
}
