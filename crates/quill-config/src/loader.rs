// SPDX-FileCopyrightText: 2026 Quill Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Configuration loader using Figment for layered config merging.
//!
//! Supports XDG hierarchy: `./quill.toml` > `~/.config/quill/quill.toml` > `/etc/quill/quill.toml`
//! with environment variable overrides via `QUILL_` prefix.

#![allow(clippy::result_large_err)] // figment::Error is external and cannot be boxed without wrapper

use std::path::Path;

use figment::{
    Figment,
    providers::{Env, Format, Serialized, Toml},
};

use crate::model::QuillConfig;

/// Load configuration from the standard XDG hierarchy with env var overrides.
///
/// Merge order (later overrides earlier):
/// 1. Compiled defaults
/// 2. `/etc/quill/quill.toml` (system-wide)
/// 3. `~/.config/quill/quill.toml` (user XDG config)
/// 4. `./quill.toml` (local directory)
/// 5. `QUILL_*` environment variables
pub fn load_config() -> Result<QuillConfig, figment::Error> {
    build_figment().extract()
}

/// Load configuration from a TOML string only (no XDG lookup, no env vars).
///
/// Used for testing and explicit configuration.
pub fn load_config_from_str(toml_content: &str) -> Result<QuillConfig, figment::Error> {
    Figment::new()
        .merge(Serialized::defaults(QuillConfig::default()))
        .merge(Toml::string(toml_content))
        .extract()
}

/// Load configuration from a specific file path with env var overrides.
pub fn load_config_from_path(path: &Path) -> Result<QuillConfig, figment::Error> {
    Figment::new()
        .merge(Serialized::defaults(QuillConfig::default()))
        .merge(Toml::file(path))
        .merge(env_provider())
        .extract()
}

/// Build the Figment used internally for config loading (exposed for diagnostic use).
pub fn build_figment() -> Figment {
    Figment::new()
        .merge(Serialized::defaults(QuillConfig::default()))
        .merge(Toml::file("/etc/quill/quill.toml"))
        .merge(Toml::file(
            dirs::config_dir()
                .map(|d| d.join("quill/quill.toml"))
                .unwrap_or_default(),
        ))
        .merge(Toml::file("quill.toml"))
        .merge(env_provider())
}

/// Create the environment variable provider using explicit `map()` for
/// section-to-dot mapping.
///
/// Uses `Env::map()` NOT `Env::split("_")` to avoid ambiguity with
/// underscore-containing key names: `QUILL_TWITTER_ACCESS_TOKEN_SECRET` must
/// map to `twitter.access_token_secret`, not `twitter.access.token.secret`.
fn env_provider() -> Env {
    Env::prefixed("QUILL_").map(|key| {
        // `key` is the lowercased env var name with prefix stripped.
        // Example: QUILL_ANTHROPIC_API_KEY -> "anthropic_api_key"
        let key_str = key.as_str();
        let mapped = key_str
            .replacen("agent_", "agent.", 1)
            .replacen("gateway_", "gateway.", 1)
            .replacen("anthropic_", "anthropic.", 1)
            .replacen("openrouter_", "openrouter.", 1)
            .replacen("xai_", "xai.", 1)
            .replacen("openai_", "openai.", 1)
            .replacen("google_", "google.", 1)
            .replacen("ollama_", "ollama.", 1)
            .replacen("discord_", "discord.", 1)
            .replacen("twitter_", "twitter.", 1)
            .replacen("telegram_", "telegram.", 1)
            .replacen("slack_", "slack.", 1)
            .replacen("bootstrap_", "bootstrap.", 1)
            .replacen("starter_", "starter.", 1);
        mapped.into()
    })
}
