// SPDX-FileCopyrightText: 2026 Quill Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Configuration model structs for the Quill agent starter.
//!
//! All structs use `#[serde(deny_unknown_fields)]` to reject unrecognized
//! config keys at startup. Every capability credential lives in its own
//! small section so the dotted key names (`anthropic.api_key`, ...) line up
//! with the capability catalog's requirement keys.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

/// Top-level Quill configuration.
///
/// Loaded from TOML files following XDG hierarchy, with `QUILL_*` environment
/// variable overrides. All sections are optional and default to sensible values.
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
#[serde(deny_unknown_fields)]
pub struct QuillConfig {
    /// Agent identity and behavior settings.
    #[serde(default)]
    pub agent: AgentConfig,

    /// Gateway HTTP server settings.
    #[serde(default)]
    pub gateway: GatewayConfig,

    /// Anthropic credential.
    #[serde(default)]
    pub anthropic: AnthropicConfig,

    /// OpenRouter credential.
    #[serde(default)]
    pub openrouter: OpenRouterConfig,

    /// xAI credential.
    #[serde(default)]
    pub xai: XaiConfig,

    /// OpenAI credential.
    #[serde(default)]
    pub openai: OpenAiConfig,

    /// Google Generative AI credential.
    #[serde(default)]
    pub google: GoogleConfig,

    /// Ollama endpoint.
    #[serde(default)]
    pub ollama: OllamaConfig,

    /// Discord credential.
    #[serde(default)]
    pub discord: DiscordConfig,

    /// Twitter four-part credential.
    #[serde(default)]
    pub twitter: TwitterConfig,

    /// Telegram credential.
    #[serde(default)]
    pub telegram: TelegramConfig,

    /// Slack credential.
    #[serde(default)]
    pub slack: SlackConfig,

    /// Bootstrap capability bundle controls.
    #[serde(default)]
    pub bootstrap: BootstrapConfig,

    /// Demonstration plugin settings.
    #[serde(default)]
    pub starter: StarterConfig,
}

impl QuillConfig {
    /// Flatten the capability-relevant fields into a dotted-key settings
    /// snapshot for the plugin list resolver.
    ///
    /// Only defined values are included; a defined-but-blank value is kept
    /// as-is (the availability predicate applies the trim rule, and the
    /// bootstrap suppression key is presence-only by design).
    pub fn capability_settings(&self) -> BTreeMap<String, String> {
        let mut settings = BTreeMap::new();

        let mut put = |key: &str, value: &Option<String>| {
            if let Some(v) = value {
                settings.insert(key.to_string(), v.clone());
            }
        };

        put("anthropic.api_key", &self.anthropic.api_key);
        put("openrouter.api_key", &self.openrouter.api_key);
        put("xai.api_key", &self.xai.api_key);
        put("openai.api_key", &self.openai.api_key);
        put("google.api_key", &self.google.api_key);
        put("ollama.endpoint", &self.ollama.endpoint);
        put("discord.api_token", &self.discord.api_token);
        put("twitter.api_key", &self.twitter.api_key);
        put("twitter.api_secret", &self.twitter.api_secret);
        put("twitter.access_token", &self.twitter.access_token);
        put("twitter.access_token_secret", &self.twitter.access_token_secret);
        put("telegram.bot_token", &self.telegram.bot_token);
        put("slack.bot_token", &self.slack.bot_token);
        put("bootstrap.skip", &self.bootstrap.skip);

        settings
    }
}

/// Agent identity and behavior configuration.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(deny_unknown_fields)]
pub struct AgentConfig {
    /// Display name of the agent.
    #[serde(default = "default_agent_name")]
    pub name: String,

    /// Logging level (trace, debug, info, warn, error).
    #[serde(default = "default_log_level")]
    pub log_level: String,

    /// Optional override for the character's system prompt.
    #[serde(default)]
    pub system_prompt: Option<String>,
}

impl Default for AgentConfig {
    fn default() -> Self {
        Self {
            name: default_agent_name(),
            log_level: default_log_level(),
            system_prompt: None,
        }
    }
}

fn default_agent_name() -> String {
    "Quill".to_string()
}

fn default_log_level() -> String {
    "info".to_string()
}

/// Gateway HTTP server configuration.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(deny_unknown_fields)]
pub struct GatewayConfig {
    /// Host address to bind.
    #[serde(default = "default_gateway_host")]
    pub host: String,

    /// Port to bind.
    #[serde(default = "default_gateway_port")]
    pub port: u16,
}

impl Default for GatewayConfig {
    fn default() -> Self {
        Self {
            host: default_gateway_host(),
            port: default_gateway_port(),
        }
    }
}

fn default_gateway_host() -> String {
    "127.0.0.1".to_string()
}

fn default_gateway_port() -> u16 {
    7700
}

/// Anthropic API configuration.
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
#[serde(deny_unknown_fields)]
pub struct AnthropicConfig {
    /// Anthropic API key. `None` leaves the capability unconfigured.
    #[serde(default)]
    pub api_key: Option<String>,
}

/// OpenRouter API configuration.
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
#[serde(deny_unknown_fields)]
pub struct OpenRouterConfig {
    /// OpenRouter API key.
    #[serde(default)]
    pub api_key: Option<String>,
}

/// xAI API configuration.
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
#[serde(deny_unknown_fields)]
pub struct XaiConfig {
    /// xAI API key.
    #[serde(default)]
    pub api_key: Option<String>,
}

/// OpenAI API configuration.
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
#[serde(deny_unknown_fields)]
pub struct OpenAiConfig {
    /// OpenAI API key.
    #[serde(default)]
    pub api_key: Option<String>,
}

/// Google Generative AI configuration.
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
#[serde(deny_unknown_fields)]
pub struct GoogleConfig {
    /// Google Generative AI API key.
    #[serde(default)]
    pub api_key: Option<String>,
}

/// Ollama configuration.
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
#[serde(deny_unknown_fields)]
pub struct OllamaConfig {
    /// Ollama API endpoint URL. `None` leaves the fallback unconfigured.
    #[serde(default)]
    pub endpoint: Option<String>,
}

/// Discord integration configuration.
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
#[serde(deny_unknown_fields)]
pub struct DiscordConfig {
    /// Discord bot API token.
    #[serde(default)]
    pub api_token: Option<String>,
}

/// Twitter integration configuration.
///
/// All four credential parts must be present simultaneously for the twitter
/// capability to activate; partial credentials never count.
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
#[serde(deny_unknown_fields)]
pub struct TwitterConfig {
    /// Consumer API key.
    #[serde(default)]
    pub api_key: Option<String>,

    /// Consumer API secret.
    #[serde(default)]
    pub api_secret: Option<String>,

    /// Access token.
    #[serde(default)]
    pub access_token: Option<String>,

    /// Access token secret.
    #[serde(default)]
    pub access_token_secret: Option<String>,
}

/// Telegram integration configuration.
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
#[serde(deny_unknown_fields)]
pub struct TelegramConfig {
    /// Telegram Bot API token.
    #[serde(default)]
    pub bot_token: Option<String>,
}

/// Slack integration configuration.
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
#[serde(deny_unknown_fields)]
pub struct SlackConfig {
    /// Slack bot token.
    #[serde(default)]
    pub bot_token: Option<String>,
}

/// Bootstrap capability bundle controls.
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
#[serde(deny_unknown_fields)]
pub struct BootstrapConfig {
    /// When defined (with any value, including blank), the bootstrap bundle
    /// is left out of the resolved plugin list. Presence alone suppresses.
    #[serde(default)]
    pub skip: Option<String>,
}

/// Demonstration plugin configuration.
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
#[serde(deny_unknown_fields)]
pub struct StarterConfig {
    /// Example plugin variable. When supplied it must be non-empty; the
    /// starter plugin's init rejects a blank value.
    #[serde(default)]
    pub example_variable: Option<String>,
}
