// SPDX-FileCopyrightText: 2026 Quill Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Common types used across capability traits and the Quill workspace.

use std::collections::HashMap;
use std::sync::Arc;

use serde::{Deserialize, Serialize};
use strum::{Display, EnumString};

/// Opaque identifier naming a capability plugin understood by the external
/// agent runtime. Compared only for equality; never inspected.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct PluginId(pub String);

impl PluginId {
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<&str> for PluginId {
    fn from(id: &str) -> Self {
        Self(id.to_string())
    }
}

impl std::fmt::Display for PluginId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

/// Category of a capability catalog entry.
///
/// Categories are totally ordered as declared. Note that the order plugins
/// appear in a resolved list is NOT this declaration order -- the resolver
/// uses its own append order (embedding entries land after bootstrap).
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Display, EnumString, Serialize, Deserialize,
)]
pub enum CapabilityCategory {
    Core,
    TextOnly,
    Embedding,
    Fallback,
    Platform,
    Bootstrap,
}

/// Runtime events a plugin can subscribe to.
///
/// Display/FromStr render the wire names the external runtime dispatches
/// (e.g. `MESSAGE_RECEIVED`).
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Display, EnumString, Serialize, Deserialize,
)]
#[strum(serialize_all = "SCREAMING_SNAKE_CASE")]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum EventType {
    MessageReceived,
    VoiceMessageReceived,
    WorldConnected,
    WorldJoined,
}

/// Inbound message context handed to action validators/handlers and providers.
///
/// Every field is optional: handlers are expected to degrade gracefully on
/// malformed or partial input rather than fail.
#[derive(Debug, Clone, Default)]
pub struct MessageContext {
    /// Message text, if any.
    pub text: Option<String>,
    /// Sender identifier, if known.
    pub sender: Option<String>,
    /// Originating channel or platform, if known.
    pub source: Option<String>,
}

/// Reply content emitted through an action's callback.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ReplyContent {
    /// Reply text.
    pub text: String,
    /// Action names that produced this reply.
    pub actions: Vec<String>,
}

/// Result record returned by an action handler.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ActionResult {
    /// Whether the action completed successfully.
    pub success: bool,
    /// Optional human-readable summary.
    pub text: Option<String>,
    /// Key/value outputs surfaced to downstream actions.
    pub values: HashMap<String, serde_json::Value>,
    /// Structured payload for the runtime.
    pub data: HashMap<String, serde_json::Value>,
}

/// Result record returned by a provider's `get`.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ProviderResult {
    /// Context text contributed to the prompt.
    pub text: String,
    /// Key/value outputs.
    pub values: HashMap<String, serde_json::Value>,
    /// Structured payload.
    pub data: HashMap<String, serde_json::Value>,
}

/// HTTP method for a plugin route.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display, EnumString)]
#[strum(serialize_all = "UPPERCASE")]
pub enum RouteMethod {
    Get,
    Post,
}

/// Handler for a plugin route. Pure: takes nothing, returns the JSON body.
pub type RouteHandler = Arc<dyn Fn() -> serde_json::Value + Send + Sync>;

/// A HTTP route exposed by a plugin, mounted by the gateway.
#[derive(Clone)]
pub struct Route {
    /// HTTP method.
    pub method: RouteMethod,
    /// Absolute path (e.g. `/helloworld`).
    pub path: String,
    /// Route name for logging.
    pub name: String,
    /// Handler producing the response body.
    pub handler: RouteHandler,
}

impl std::fmt::Debug for Route {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Route")
            .field("method", &self.method)
            .field("path", &self.path)
            .field("name", &self.name)
            .finish_non_exhaustive()
    }
}

/// Payload object delivered with a runtime event.
pub type EventPayload = serde_json::Value;

/// A subscription to one runtime event.
#[derive(Clone)]
pub struct EventHandler {
    /// The event this handler reacts to.
    pub event: EventType,
    /// Callback invoked with the event's parameter object.
    pub handler: Arc<dyn Fn(&EventPayload) + Send + Sync>,
}

impl std::fmt::Debug for EventHandler {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("EventHandler")
            .field("event", &self.event)
            .finish_non_exhaustive()
    }
}
