// SPDX-FileCopyrightText: 2026 Quill Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Plugin definition record and service registry.
//!
//! A plugin bundles capability records (actions, providers, routes, event
//! handlers) into a [`PluginDefinition`] that is handed to the external
//! runtime. Services are tracked separately in a [`ServiceRegistry`], which
//! enforces the one-instance-per-key lifecycle rule.

pub mod definition;
pub mod registry;

pub use definition::PluginDefinition;
pub use registry::ServiceRegistry;
