// SPDX-FileCopyrightText: 2026 Quill Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Capability catalog.
//!
//! A static ordered list of every plugin identifier the starter knows how to
//! activate, together with the dotted configuration keys each one requires.
//! The catalog must not contain duplicate identifiers; the resolver relies
//! on that rather than deduplicating its output.

use quill_core::CapabilityCategory;

/// One catalog entry: a plugin identifier, its category, and the
/// configuration keys that must all be present for it to activate.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CapabilityEntry {
    /// Plugin identifier handed to the external runtime.
    pub id: &'static str,
    /// Category controlling where the entry lands in the resolved list.
    pub category: CapabilityCategory,
    /// Required configuration keys (empty for Core and Bootstrap).
    pub requires: &'static [&'static str],
}

/// Presence of this key (any value, including blank) suppresses the
/// bootstrap bundle. Unlike provider keys there is no trim rule: the key
/// being defined at all is what counts.
pub const SUPPRESS_BOOTSTRAP_KEY: &str = "bootstrap.skip";

/// The full capability catalog, in insertion order within each category.
pub fn capability_catalog() -> &'static [CapabilityEntry] {
    CATALOG
}

static CATALOG: &[CapabilityEntry] = &[
    CapabilityEntry {
        id: "@quill/plugin-sql",
        category: CapabilityCategory::Core,
        requires: &[],
    },
    CapabilityEntry {
        id: "@quill/plugin-anthropic",
        category: CapabilityCategory::TextOnly,
        requires: &["anthropic.api_key"],
    },
    CapabilityEntry {
        id: "@quill/plugin-openrouter",
        category: CapabilityCategory::TextOnly,
        requires: &["openrouter.api_key"],
    },
    CapabilityEntry {
        id: "@quill/plugin-xai",
        category: CapabilityCategory::TextOnly,
        requires: &["xai.api_key"],
    },
    CapabilityEntry {
        id: "@quill/plugin-openai",
        category: CapabilityCategory::Embedding,
        requires: &["openai.api_key"],
    },
    CapabilityEntry {
        id: "@quill/plugin-google-genai",
        category: CapabilityCategory::Embedding,
        requires: &["google.api_key"],
    },
    CapabilityEntry {
        id: "@quill/plugin-ollama",
        category: CapabilityCategory::Fallback,
        requires: &["ollama.endpoint"],
    },
    CapabilityEntry {
        id: "@quill/plugin-discord",
        category: CapabilityCategory::Platform,
        requires: &["discord.api_token"],
    },
    CapabilityEntry {
        id: "@quill/plugin-twitter",
        category: CapabilityCategory::Platform,
        requires: &[
            "twitter.api_key",
            "twitter.api_secret",
            "twitter.access_token",
            "twitter.access_token_secret",
        ],
    },
    CapabilityEntry {
        id: "@quill/plugin-telegram",
        category: CapabilityCategory::Platform,
        requires: &["telegram.bot_token"],
    },
    CapabilityEntry {
        id: "@quill/plugin-slack",
        category: CapabilityCategory::Platform,
        requires: &["slack.bot_token"],
    },
    CapabilityEntry {
        id: "@quill/plugin-bootstrap",
        category: CapabilityCategory::Bootstrap,
        requires: &[],
    },
];
