// SPDX-FileCopyrightText: 2026 Quill Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Service registry.
//!
//! Stores one service instance per service-type key. Lifecycle enforcement
//! lives here rather than in the services themselves: registering over an
//! existing key fails, as does removing a key that was never registered.

use std::sync::Arc;

use dashmap::DashMap;
use dashmap::mapref::entry::Entry;
use quill_core::{QuillError, Service};

/// Registry of live service instances, keyed by service type.
#[derive(Default)]
pub struct ServiceRegistry {
    services: DashMap<String, Arc<dyn Service>>,
}

impl ServiceRegistry {
    /// Create a new empty registry.
    pub fn new() -> Self {
        Self {
            services: DashMap::new(),
        }
    }

    /// Register a service under its service-type key.
    ///
    /// Fails with [`QuillError::ServiceAlreadyRegistered`] if an instance is
    /// already registered under the same key. The check-and-insert is atomic.
    pub fn register(&self, service: Arc<dyn Service>) -> Result<(), QuillError> {
        let service_type = service.service_type().to_string();
        match self.services.entry(service_type.clone()) {
            Entry::Occupied(_) => Err(QuillError::ServiceAlreadyRegistered { service_type }),
            Entry::Vacant(slot) => {
                tracing::debug!(service_type = %service_type, "service registered");
                slot.insert(service);
                Ok(())
            }
        }
    }

    /// Look up a registered service by type. Never panics.
    pub fn get(&self, service_type: &str) -> Option<Arc<dyn Service>> {
        self.services.get(service_type).map(|e| Arc::clone(&e))
    }

    /// Remove and return the service registered under the given key.
    ///
    /// Fails with [`QuillError::ServiceNotFound`] if no instance is
    /// registered. The caller is responsible for stopping the instance.
    pub fn remove(&self, service_type: &str) -> Result<Arc<dyn Service>, QuillError> {
        self.services
            .remove(service_type)
            .map(|(_, service)| {
                tracing::debug!(service_type = %service_type, "service removed");
                service
            })
            .ok_or_else(|| QuillError::ServiceNotFound {
                service_type: service_type.to_string(),
            })
    }

    /// Whether a service is registered under the given key.
    pub fn contains(&self, service_type: &str) -> bool {
        self.services.contains_key(service_type)
    }

    /// All registered service-type keys, sorted.
    pub fn service_types(&self) -> Vec<String> {
        let mut types: Vec<String> = self.services.iter().map(|e| e.key().clone()).collect();
        types.sort();
        types
    }

    /// Number of registered services.
    pub fn len(&self) -> usize {
        self.services.len()
    }

    /// True if no services are registered.
    pub fn is_empty(&self) -> bool {
        self.services.is_empty()
    }
}

impl std::fmt::Debug for ServiceRegistry {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ServiceRegistry")
            .field("service_types", &self.service_types())
            .finish()
    }
}
