// SPDX-FileCopyrightText: 2026 Quill Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Error types for the Quill agent starter workspace.

use thiserror::Error;

/// The primary error type used across Quill capability traits and core operations.
#[derive(Debug, Error)]
pub enum QuillError {
    /// Configuration errors (invalid TOML, missing required fields, type mismatches).
    #[error("configuration error: {0}")]
    Config(String),

    /// A plugin-declared config variable failed schema validation at init time.
    #[error("plugin `{plugin}` config validation failed: {message}")]
    PluginConfig { plugin: String, message: String },

    /// A service instance is already registered under this service-type key.
    #[error("service already registered: {service_type}")]
    ServiceAlreadyRegistered { service_type: String },

    /// No service instance is registered under this service-type key.
    #[error("service not found: {service_type}")]
    ServiceNotFound { service_type: String },

    /// Gateway errors (bind failure, serve failure).
    #[error("gateway error: {message}")]
    Gateway {
        message: String,
        source: Option<Box<dyn std::error::Error + Send + Sync>>,
    },

    /// Internal or unexpected errors.
    #[error("internal error: {0}")]
    Internal(String),
}
