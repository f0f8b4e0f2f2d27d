// SPDX-FileCopyrightText: 2026 Quill Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Service capability trait.

use async_trait::async_trait;

use crate::error::QuillError;

/// A long-lived singleton a plugin contributes to the runtime.
///
/// Concrete services are registered under their `service_type` key in a
/// service registry; one instance per key. Lifecycle enforcement (duplicate
/// start, stop without start) is the registry's job, not the trait's.
#[async_trait]
pub trait Service: Send + Sync + std::fmt::Debug {
    /// Registry key this service is registered under (e.g. `starter`).
    fn service_type(&self) -> &str;

    /// One-line description of what the service maintains.
    fn description(&self) -> &str;

    /// Release held resources. Intended to be idempotent, though the
    /// contract does not guarantee it for every implementation.
    async fn stop(&self) -> Result<(), QuillError>;
}
