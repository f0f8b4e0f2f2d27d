// SPDX-FileCopyrightText: 2026 Quill Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Plugin definition record.
//!
//! The hand-off artifact for the external runtime: a plugin's identity, its
//! declared config variables, and the capability records it contributes
//! (actions, providers, routes, event handlers). Registration itself is the
//! runtime's job; this crate only builds and validates the record.

use std::collections::HashMap;
use std::sync::Arc;

use quill_core::{Action, EventHandler, EventType, Provider, QuillError, Route};

/// A complete plugin definition.
pub struct PluginDefinition {
    /// Plugin name (e.g. `starter`).
    pub name: String,
    /// Human-readable description.
    pub description: String,
    /// Declared config variables and their supplied values. A variable may
    /// be declared without a value; a supplied value must be non-empty.
    pub config: HashMap<String, Option<String>>,
    /// Actions this plugin contributes.
    pub actions: Vec<Arc<dyn Action>>,
    /// Providers this plugin contributes.
    pub providers: Vec<Arc<dyn Provider>>,
    /// HTTP routes this plugin exposes.
    pub routes: Vec<Route>,
    /// Event subscriptions.
    pub events: Vec<EventHandler>,
}

impl PluginDefinition {
    /// Validate the supplied config variables.
    ///
    /// A variable that is supplied but empty fails schema validation (the
    /// minimum length is 1). The error is surfaced immediately to the
    /// caller; nothing is retried or partially recovered.
    pub fn init(&self) -> Result<(), QuillError> {
        for (key, value) in &self.config {
            if let Some(v) = value
                && v.is_empty()
            {
                return Err(QuillError::PluginConfig {
                    plugin: self.name.clone(),
                    message: format!("variable `{key}` must not be empty when supplied"),
                });
            }
        }
        tracing::info!(
            plugin = %self.name,
            actions = self.actions.len(),
            providers = self.providers.len(),
            routes = self.routes.len(),
            events = self.events.len(),
            "plugin initialized"
        );
        Ok(())
    }

    /// Find an action by name or simile.
    pub fn get_action(&self, name: &str) -> Option<&dyn Action> {
        self.actions
            .iter()
            .find(|a| a.name() == name || a.similes().contains(&name))
            .map(|a| a.as_ref())
    }

    /// Find a provider by name.
    pub fn get_provider(&self, name: &str) -> Option<&dyn Provider> {
        self.providers
            .iter()
            .find(|p| p.name() == name)
            .map(|p| p.as_ref())
    }

    /// All handlers subscribed to the given event.
    pub fn handlers_for(&self, event: EventType) -> Vec<&EventHandler> {
        self.events.iter().filter(|h| h.event == event).collect()
    }
}

impl std::fmt::Debug for PluginDefinition {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("PluginDefinition")
            .field("name", &self.name)
            .field("description", &self.description)
            .field("actions", &self.actions.len())
            .field("providers", &self.providers.len())
            .field("routes", &self.routes.len())
            .field("events", &self.events.len())
            .finish()
    }
}
