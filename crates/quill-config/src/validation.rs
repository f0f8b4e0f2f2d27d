// SPDX-FileCopyrightText: 2026 Quill Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Post-deserialization validation for configuration values.
//!
//! Validates semantic constraints that cannot be expressed via serde
//! attributes, such as a non-empty agent name and a valid gateway address.

use crate::diagnostic::ConfigError;
use crate::model::QuillConfig;

/// Validate a deserialized configuration for semantic correctness.
///
/// Returns `Ok(())` if all validations pass, or `Err(Vec<ConfigError>)` with
/// all collected validation errors (does not fail fast).
pub fn validate_config(config: &QuillConfig) -> Result<(), Vec<ConfigError>> {
    let mut errors = Vec::new();

    if config.agent.name.trim().is_empty() {
        errors.push(ConfigError::Validation {
            message: "agent.name must not be empty".to_string(),
        });
    }

    let valid_levels = ["trace", "debug", "info", "warn", "error"];
    if !valid_levels.contains(&config.agent.log_level.as_str()) {
        errors.push(ConfigError::Validation {
            message: format!(
                "agent.log_level must be one of trace, debug, info, warn, error; got `{}`",
                config.agent.log_level
            ),
        });
    }

    if config.gateway.host.trim().is_empty() {
        errors.push(ConfigError::Validation {
            message: "gateway.host must not be empty".to_string(),
        });
    } else {
        let host = config.gateway.host.trim();
        let is_valid_ip = host.parse::<std::net::IpAddr>().is_ok();
        let is_valid_hostname = host
            .chars()
            .all(|c| c.is_alphanumeric() || c == '.' || c == '-' || c == ':');
        if !is_valid_ip && !is_valid_hostname {
            errors.push(ConfigError::Validation {
                message: format!("gateway.host `{host}` is not a valid IP address or hostname"),
            });
        }
    }

    if config.gateway.port == 0 {
        errors.push(ConfigError::Validation {
            message: "gateway.port must be non-zero".to_string(),
        });
    }

    // The starter plugin's example variable has a minimum length of 1 when
    // supplied. The plugin's own init enforces the same rule; catching it
    // here surfaces the problem at startup with the other config errors.
    if let Some(v) = &config.starter.example_variable
        && v.is_empty()
    {
        errors.push(ConfigError::Validation {
            message: "starter.example_variable must not be empty when set".to_string(),
        });
    }

    if errors.is_empty() { Ok(()) } else { Err(errors) }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config_validates() {
        let config = QuillConfig::default();
        assert!(validate_config(&config).is_ok());
    }

    #[test]
    fn empty_agent_name_fails_validation() {
        let mut config = QuillConfig::default();
        config.agent.name = "  ".to_string();
        let errors = validate_config(&config).unwrap_err();
        assert!(errors
            .iter()
            .any(|e| matches!(e, ConfigError::Validation { message } if message.contains("agent.name"))));
    }

    #[test]
    fn bogus_log_level_fails_validation() {
        let mut config = QuillConfig::default();
        config.agent.log_level = "verbose".to_string();
        let errors = validate_config(&config).unwrap_err();
        assert!(errors
            .iter()
            .any(|e| matches!(e, ConfigError::Validation { message } if message.contains("log_level"))));
    }

    #[test]
    fn zero_port_fails_validation() {
        let mut config = QuillConfig::default();
        config.gateway.port = 0;
        let errors = validate_config(&config).unwrap_err();
        assert!(errors
            .iter()
            .any(|e| matches!(e, ConfigError::Validation { message } if message.contains("gateway.port"))));
    }

    #[test]
    fn blank_example_variable_fails_validation() {
        let mut config = QuillConfig::default();
        config.starter.example_variable = Some(String::new());
        let errors = validate_config(&config).unwrap_err();
        assert!(errors
            .iter()
            .any(|e| matches!(e, ConfigError::Validation { message } if message.contains("example_variable"))));
    }

    #[test]
    fn present_example_variable_passes_validation() {
        let mut config = QuillConfig::default();
        config.starter.example_variable = Some("demo".to_string());
        assert!(validate_config(&config).is_ok());
    }

    #[test]
    fn valid_custom_config_passes() {
        let mut config = QuillConfig::default();
        config.gateway.host = "0.0.0.0".to_string();
        config.gateway.port = 8080;
        config.anthropic.api_key = Some("sk-ant-1".to_string());
        assert!(validate_config(&config).is_ok());
    }
}
