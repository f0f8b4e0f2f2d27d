// SPDX-FileCopyrightText: 2026 Quill Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Integration tests for the Quill configuration system.

use quill_config::diagnostic::{ConfigError, suggest_key};
use quill_config::model::QuillConfig;
use quill_config::{load_and_validate_str, load_config_from_str};

/// Valid TOML with all credential sections deserializes successfully.
#[test]
fn valid_toml_deserializes_into_quill_config() {
    let toml = r#"
[agent]
name = "test-agent"
log_level = "debug"

[gateway]
host = "0.0.0.0"
port = 8080

[anthropic]
api_key = "sk-ant-123"

[openai]
api_key = "sk-oai-456"

[twitter]
api_key = "k"
api_secret = "s"
access_token = "t"
access_token_secret = "ts"

[telegram]
bot_token = "123:ABC"

[bootstrap]
skip = "1"

[starter]
example_variable = "demo"
"#;

    let config = load_config_from_str(toml).expect("valid TOML should deserialize");
    assert_eq!(config.agent.name, "test-agent");
    assert_eq!(config.agent.log_level, "debug");
    assert_eq!(config.gateway.host, "0.0.0.0");
    assert_eq!(config.gateway.port, 8080);
    assert_eq!(config.anthropic.api_key.as_deref(), Some("sk-ant-123"));
    assert_eq!(config.openai.api_key.as_deref(), Some("sk-oai-456"));
    assert_eq!(config.twitter.api_key.as_deref(), Some("k"));
    assert_eq!(config.twitter.access_token_secret.as_deref(), Some("ts"));
    assert_eq!(config.telegram.bot_token.as_deref(), Some("123:ABC"));
    assert_eq!(config.bootstrap.skip.as_deref(), Some("1"));
    assert_eq!(config.starter.example_variable.as_deref(), Some("demo"));
}

/// Unknown field in [agent] section produces an error.
#[test]
fn unknown_field_in_agent_produces_error() {
    let toml = r#"
[agent]
naem = "test"
"#;

    let err = load_config_from_str(toml).expect_err("should reject unknown field");
    let err_str = format!("{err}");
    assert!(
        err_str.contains("unknown field") || err_str.contains("naem"),
        "error should mention unknown field or the bad key, got: {err_str}"
    );
}

/// Unknown field in a credential section produces an error.
#[test]
fn unknown_field_in_anthropic_produces_error() {
    let toml = r#"
[anthropic]
api_kee = "abc"
"#;

    let err = load_config_from_str(toml).expect_err("should reject unknown field");
    let err_str = format!("{err}");
    assert!(
        err_str.contains("unknown field") || err_str.contains("api_kee"),
        "error should mention unknown field, got: {err_str}"
    );
}

/// Missing optional sections use defaults without error.
#[test]
fn missing_optional_sections_use_defaults() {
    let toml = "";
    let config = load_config_from_str(toml).expect("empty TOML should use defaults");

    assert_eq!(config.agent.name, "Quill");
    assert_eq!(config.agent.log_level, "info");
    assert!(config.agent.system_prompt.is_none());
    assert_eq!(config.gateway.host, "127.0.0.1");
    assert_eq!(config.gateway.port, 7700);
    assert!(config.anthropic.api_key.is_none());
    assert!(config.openrouter.api_key.is_none());
    assert!(config.xai.api_key.is_none());
    assert!(config.openai.api_key.is_none());
    assert!(config.google.api_key.is_none());
    assert!(config.ollama.endpoint.is_none());
    assert!(config.discord.api_token.is_none());
    assert!(config.twitter.api_key.is_none());
    assert!(config.telegram.bot_token.is_none());
    assert!(config.slack.bot_token.is_none());
    assert!(config.bootstrap.skip.is_none());
    assert!(config.starter.example_variable.is_none());
}

/// A dotted override (what the env provider produces) beats the TOML value.
#[test]
fn dotted_override_beats_toml_agent_name() {
    use figment::{
        Figment,
        providers::{Format, Serialized, Toml},
    };

    let toml_content = r#"
[agent]
name = "from-toml"
"#;

    let config: QuillConfig = Figment::new()
        .merge(Serialized::defaults(QuillConfig::default()))
        .merge(Toml::string(toml_content))
        .merge(("agent.name", "envtest"))
        .extract()
        .expect("should merge env override");

    assert_eq!(config.agent.name, "envtest");
}

/// Missing config files are silently skipped (Figment's Toml::file() behavior).
#[test]
fn missing_config_files_silently_skipped() {
    use figment::{
        Figment,
        providers::{Format, Serialized, Toml},
    };

    let config: QuillConfig = Figment::new()
        .merge(Serialized::defaults(QuillConfig::default()))
        .merge(Toml::file("/nonexistent/path/quill.toml"))
        .extract()
        .expect("missing file should be silently skipped");

    assert_eq!(config.agent.name, "Quill");
}

/// Unexpected top-level section is rejected by deny_unknown_fields.
#[test]
fn deny_unknown_fields_at_top_level() {
    let toml = r#"
[logging]
level = "debug"
"#;

    let err = load_config_from_str(toml).expect_err("unknown top-level section should be rejected");
    let err_str = format!("{err}");
    assert!(
        err_str.contains("unknown field") || err_str.contains("logging"),
        "error should mention unknown field, got: {err_str}"
    );
}

// ============================================================================
// Diagnostic tests
// ============================================================================

/// Unknown key "api_kee" produces suggestion "did you mean `api_key`?"
#[test]
fn diagnostic_api_kee_suggests_api_key() {
    let valid_keys = &["api_key"];
    let suggestion = suggest_key("api_kee", valid_keys);
    assert_eq!(suggestion, Some("api_key".to_string()));
}

/// Unknown key with no close match does NOT produce a suggestion.
#[test]
fn diagnostic_no_suggestion_for_distant_typo() {
    let valid_keys = &["name", "log_level", "system_prompt"];
    let suggestion = suggest_key("qqqqqq", valid_keys);
    assert!(suggestion.is_none(), "should not suggest for distant typo");
}

/// Error output from load_and_validate_str includes the unknown key name.
#[test]
fn diagnostic_error_includes_unknown_key() {
    let toml = r#"
[agent]
naem = "test"
"#;

    let errors = load_and_validate_str(toml).expect_err("should produce errors");
    assert!(!errors.is_empty(), "should have at least one error");

    let has_unknown_key = errors.iter().any(|e| {
        matches!(e, ConfigError::UnknownKey { key, suggestion, valid_keys, .. } if {
            key == "naem"
                && suggestion.as_deref() == Some("name")
                && valid_keys.contains("name")
        })
    });
    assert!(
        has_unknown_key,
        "should have UnknownKey error for 'naem' with suggestion 'name', got: {errors:?}"
    );
}

/// Error output includes the list of valid keys for the section.
#[test]
fn diagnostic_error_includes_valid_keys() {
    let toml = r#"
[agent]
naem = "test"
"#;

    let errors = load_and_validate_str(toml).expect_err("should produce errors");
    let has_valid_keys = errors.iter().any(|e| {
        matches!(e, ConfigError::UnknownKey { valid_keys, .. } if {
            valid_keys.contains("name")
                && valid_keys.contains("log_level")
                && valid_keys.contains("system_prompt")
        })
    });
    assert!(
        has_valid_keys,
        "error should list valid keys for [agent] section"
    );
}

/// Invalid type (string where number expected) produces clear message.
#[test]
fn diagnostic_invalid_type_message() {
    let toml = r#"
[gateway]
port = "not_a_number"
"#;

    let err = load_config_from_str(toml).expect_err("should reject invalid type");
    let err_str = format!("{err}");
    assert!(
        err_str.contains("invalid type") || err_str.contains("port"),
        "error should mention type mismatch, got: {err_str}"
    );
}

/// ConfigError implements miette::Diagnostic (can be rendered).
#[test]
fn config_error_implements_diagnostic() {
    use miette::Diagnostic;

    let error = ConfigError::UnknownKey {
        key: "api_kee".to_string(),
        suggestion: Some("api_key".to_string()),
        valid_keys: "api_key".to_string(),
        span: None,
        src: None,
    };

    let code = error.code();
    assert!(code.is_some(), "should have diagnostic code");

    let help = error.help();
    assert!(help.is_some(), "should have help text");
    let help_str = help.unwrap().to_string();
    assert!(
        help_str.contains("did you mean `api_key`"),
        "help should contain suggestion, got: {help_str}"
    );
}

/// ConfigError can be rendered using miette's graphical handler.
#[test]
fn config_error_renders_with_miette() {
    use miette::GraphicalReportHandler;

    let error = ConfigError::UnknownKey {
        key: "api_kee".to_string(),
        suggestion: Some("api_key".to_string()),
        valid_keys: "api_key".to_string(),
        span: None,
        src: None,
    };

    let handler = GraphicalReportHandler::new();
    let mut buf = String::new();
    handler
        .render_report(&mut buf, &error)
        .expect("should render without error");
    assert!(!buf.is_empty(), "rendered report should not be empty");
    assert!(buf.contains("api_kee"), "rendered report should mention the key");
}

/// load_and_validate_str with valid TOML returns Ok config.
#[test]
fn load_and_validate_valid_toml() {
    let toml = r#"
[agent]
name = "test"
"#;

    let config = load_and_validate_str(toml).expect("valid TOML should validate");
    assert_eq!(config.agent.name, "test");
}

/// Validation catches a blank starter example variable.
#[test]
fn validation_catches_blank_example_variable() {
    let toml = r#"
[starter]
example_variable = ""
"#;

    let errors = load_and_validate_str(toml).expect_err("blank variable should fail");
    let has_validation_error = errors.iter().any(|e| {
        matches!(e, ConfigError::Validation { message } if message.contains("example_variable"))
    });
    assert!(
        has_validation_error,
        "should have validation error for blank example_variable"
    );
}

/// Loading from an explicit file path picks up its contents.
#[test]
fn load_config_from_path_reads_file() {
    use std::io::Write;

    let mut file = tempfile::NamedTempFile::new().expect("should create temp file");
    writeln!(
        file,
        r#"
[agent]
name = "from-file"
"#
    )
    .expect("should write temp file");

    let config =
        quill_config::load_config_from_path(file.path()).expect("should load from path");
    assert_eq!(config.agent.name, "from-file");
}

/// Capability settings flatten defined credentials under dotted keys.
#[test]
fn capability_settings_flatten_credentials() {
    let toml = r#"
[anthropic]
api_key = "sk-ant-123"

[ollama]
endpoint = "http://localhost:11434"
"#;

    let config = load_config_from_str(toml).expect("should deserialize");
    let settings = config.capability_settings();
    assert_eq!(
        settings.get("anthropic.api_key").map(String::as_str),
        Some("sk-ant-123")
    );
    assert_eq!(
        settings.get("ollama.endpoint").map(String::as_str),
        Some("http://localhost:11434")
    );
    assert!(!settings.contains_key("openai.api_key"));
}
