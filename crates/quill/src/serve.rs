// SPDX-FileCopyrightText: 2026 Quill Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! `quill serve` and `quill character` command implementations.
//!
//! `serve` assembles the character profile, initializes the starter plugin,
//! starts its service, and runs the gateway until a shutdown signal arrives.
//! `character` prints the resolved profile as JSON for inspection or for
//! handing to the external runtime.

use quill_character::CharacterProfile;
use quill_config::QuillConfig;
use quill_core::QuillError;
use quill_gateway::ServerConfig;
use quill_plugin::ServiceRegistry;
use quill_starter::{StarterService, starter_plugin};
use tracing::info;

/// Runs the `quill serve` command.
pub async fn run_serve(config: QuillConfig) -> Result<(), QuillError> {
    init_tracing(&config.agent.log_level);

    let profile = CharacterProfile::from_config(&config);
    info!(
        name = %profile.name,
        plugins = profile.plugins().len(),
        "character profile assembled"
    );

    let plugin = starter_plugin(&config.starter);
    plugin.init()?;

    let registry = ServiceRegistry::new();
    StarterService::start(&registry).await?;

    let server_config = ServerConfig {
        host: config.gateway.host.clone(),
        port: config.gateway.port,
    };

    tokio::select! {
        result = quill_gateway::start_server(&server_config, &plugin) => result?,
        _ = tokio::signal::ctrl_c() => {
            info!("shutdown signal received");
        }
    }

    StarterService::stop(&registry).await?;
    Ok(())
}

/// Runs the `quill character` command: prints the profile as pretty JSON.
pub fn print_character(config: &QuillConfig) -> Result<(), QuillError> {
    let profile = CharacterProfile::from_config(config);
    let json = serde_json::to_string_pretty(&profile)
        .map_err(|e| QuillError::Internal(format!("profile serialization failed: {e}")))?;
    println!("{json}");
    Ok(())
}

/// Initialize the tracing subscriber.
///
/// `RUST_LOG` takes precedence over the configured level so a one-off run
/// can raise verbosity without editing config.
fn init_tracing(log_level: &str) {
    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(log_level));
    tracing_subscriber::fmt().with_env_filter(filter).init();
}
