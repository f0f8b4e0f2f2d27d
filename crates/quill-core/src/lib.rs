// SPDX-FileCopyrightText: 2026 Quill Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Core library for the Quill agent starter workspace.
//!
//! This crate provides the foundational capability traits, error types, and
//! common types used throughout the Quill workspace. The demonstration
//! plugin and the gateway both build on the definitions here; the external
//! agent runtime consumes them through the plugin definition record.

pub mod error;
pub mod traits;
pub mod types;

// Re-export key items at crate root for ergonomic imports.
pub use error::QuillError;
pub use types::{
    ActionResult, CapabilityCategory, EventHandler, EventPayload, EventType, MessageContext,
    PluginId, ProviderResult, ReplyContent, Route, RouteHandler, RouteMethod,
};

// Re-export capability traits at crate root.
pub use traits::{Action, Provider, ReplyCallback, Service};
