// SPDX-FileCopyrightText: 2026 Quill Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! The starter singleton service.

use std::sync::Arc;

use async_trait::async_trait;
use quill_core::{QuillError, Service};
use quill_plugin::ServiceRegistry;

/// Registry key for the starter service.
pub const STARTER_SERVICE_TYPE: &str = "starter";

/// Demonstration singleton service. One instance may be registered per
/// registry; the static `start`/`stop` pair goes through the registry so the
/// one-instance rule is enforced there.
#[derive(Debug)]
pub struct StarterService;

impl StarterService {
    /// Start the service and register it.
    ///
    /// Fails with an "already registered" error if an instance is already
    /// registered under [`STARTER_SERVICE_TYPE`].
    pub async fn start(registry: &ServiceRegistry) -> Result<Arc<StarterService>, QuillError> {
        tracing::info!(service_type = STARTER_SERVICE_TYPE, "starting starter service");
        let service = Arc::new(StarterService);
        registry.register(Arc::clone(&service) as Arc<dyn Service>)?;
        Ok(service)
    }

    /// Stop the registered instance and remove it from the registry.
    ///
    /// Fails with a "not found" error if no instance is registered.
    pub async fn stop(registry: &ServiceRegistry) -> Result<(), QuillError> {
        let service = registry.remove(STARTER_SERVICE_TYPE)?;
        service.stop().await
    }
}

#[async_trait]
impl Service for StarterService {
    fn service_type(&self) -> &str {
        STARTER_SERVICE_TYPE
    }

    fn description(&self) -> &str {
        "Demonstration service attached to the agent through the starter plugin"
    }

    async fn stop(&self) -> Result<(), QuillError> {
        // Nothing held; stopping twice is harmless for this service.
        tracing::info!(service_type = STARTER_SERVICE_TYPE, "starter service stopped");
        Ok(())
    }
}
