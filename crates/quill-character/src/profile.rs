// SPDX-FileCopyrightText: 2026 Quill Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Character profile assembler.
//!
//! Builds the immutable configuration record the external runtime consumes
//! at agent-construction time. Field names on the wire must match the
//! runtime's character-loading interface exactly: `name`, `plugins`,
//! `settings`, `system`, `bio`, `topics`, `messageExamples`, `style`.

use std::collections::HashMap;

use quill_config::QuillConfig;
use quill_core::PluginId;
use serde::{Deserialize, Serialize};

use crate::resolver::resolve_plugins;

/// One turn in an example dialogue.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DialogueTurn {
    /// Speaker name (`{{user}}` stands in for the conversation partner).
    pub name: String,
    /// Turn content.
    pub content: TurnContent,
}

/// Content of an example dialogue turn.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TurnContent {
    /// Message text.
    pub text: String,
}

/// Style rule lists applied per context.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct StyleRules {
    /// Rules for every context.
    pub all: Vec<String>,
    /// Rules for chat replies.
    pub chat: Vec<String>,
    /// Rules for standalone posts.
    pub post: Vec<String>,
}

/// Profile-level settings passed through to the runtime.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ProfileSettings {
    /// Secret values the runtime injects at run time. Empty by default.
    pub secrets: HashMap<String, serde_json::Value>,
}

/// The complete persona + capability-list record consumed by the external
/// runtime. Constructed once at configuration-load time and never mutated
/// by this workspace afterwards.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CharacterProfile {
    /// Agent display name.
    pub name: String,
    /// Ordered capability-plugin identifiers (core first).
    pub plugins: Vec<PluginId>,
    /// Profile settings.
    pub settings: ProfileSettings,
    /// System prompt.
    pub system: String,
    /// Biography lines.
    pub bio: Vec<String>,
    /// Conversation topics the agent is comfortable with.
    pub topics: Vec<String>,
    /// Example dialogues, each an ordered list of turns.
    pub message_examples: Vec<Vec<DialogueTurn>>,
    /// Writing style rules.
    pub style: StyleRules,
}

impl CharacterProfile {
    /// Assemble the profile from configuration.
    ///
    /// Invokes the plugin list resolver exactly once and combines the result
    /// with the static persona content below. No I/O, no randomness; this
    /// performs no registration with the runtime -- the caller hands the
    /// record to the runtime's character-loading interface.
    pub fn from_config(config: &QuillConfig) -> Self {
        let settings = config.capability_settings();
        let plugins = resolve_plugins(&settings);
        tracing::debug!(count = plugins.len(), "resolved capability plugins");

        Self {
            name: config.agent.name.clone(),
            plugins,
            settings: ProfileSettings::default(),
            system: config
                .agent
                .system_prompt
                .clone()
                .unwrap_or_else(default_system_prompt),
            bio: default_bio(),
            topics: default_topics(),
            message_examples: default_message_examples(),
            style: default_style(),
        }
    }

    /// The resolved plugin identifiers, in priority order.
    pub fn plugins(&self) -> &[PluginId] {
        &self.plugins
    }
}

fn default_system_prompt() -> String {
    "Respond to messages in a warm, direct, conversational register. \
     Keep replies brief unless the question calls for depth. Offer concrete \
     help rather than open-ended questions, admit uncertainty plainly, and \
     never pad an answer with filler."
        .to_string()
}

fn default_bio() -> Vec<String> {
    [
        "Keeps answers short and concrete",
        "Asks at most one clarifying question, and only when stuck",
        "Comfortable saying \"I don't know\"",
        "Prefers plain words over jargon",
        "Remembers the thread of a conversation and follows up on it",
        "Treats every request as worth taking seriously",
    ]
    .map(String::from)
    .to_vec()
}

fn default_topics() -> Vec<String> {
    [
        "day-to-day planning",
        "writing and editing",
        "technology explained simply",
        "general knowledge",
        "problem solving",
    ]
    .map(String::from)
    .to_vec()
}

fn default_message_examples() -> Vec<Vec<DialogueTurn>> {
    vec![
        vec![
            turn("{{user}}", "Can you help me tighten up this paragraph?"),
            turn(
                "Quill",
                "Happy to. Paste it here and tell me roughly how short you want it.",
            ),
        ],
        vec![
            turn("{{user}}", "What's the difference between RAM and storage?"),
            turn(
                "Quill",
                "RAM is your desk, storage is your filing cabinet. RAM holds what \
                 you're working on right now and empties when the power goes; \
                 storage keeps things permanently but is slower to reach.",
            ),
        ],
    ]
}

fn turn(name: &str, text: &str) -> DialogueTurn {
    DialogueTurn {
        name: name.to_string(),
        content: TurnContent {
            text: text.to_string(),
        },
    }
}

fn default_style() -> StyleRules {
    StyleRules {
        all: [
            "Use plain, concrete language",
            "Be direct about what you can and cannot do",
            "No filler phrases or hedging",
        ]
        .map(String::from)
        .to_vec(),
        chat: [
            "Match the other person's energy and brevity",
            "One idea per message where possible",
        ]
        .map(String::from)
        .to_vec(),
        post: ["Lead with the point", "No hashtags"].map(String::from).to_vec(),
    }
}
