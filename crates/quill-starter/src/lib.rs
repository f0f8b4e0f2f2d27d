// SPDX-FileCopyrightText: 2026 Quill Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Demonstration plugin for the Quill starter.
//!
//! Shows one of each capability kind the external runtime understands:
//!
//! - **Action** `HELLO_WORLD` -- replies with a fixed greeting
//! - **Provider** `HELLO_WORLD_PROVIDER` -- contributes fixed context text
//! - **Service** `starter` -- start/stop singleton lifecycle
//! - **Route** `GET /helloworld` -- fixed JSON payload
//! - **Events** -- four hooks that log receipt and payload key sets

pub mod action;
pub mod events;
pub mod provider;
pub mod service;

use std::collections::HashMap;
use std::sync::Arc;

use quill_config::model::StarterConfig;
use quill_core::{Route, RouteMethod};
use quill_plugin::PluginDefinition;

pub use action::{HELLO_WORLD_REPLY, HelloWorldAction};
pub use provider::{HELLO_WORLD_PROVIDER_TEXT, HelloWorldProvider};
pub use service::{STARTER_SERVICE_TYPE, StarterService};

/// Path of the demonstration route.
pub const HELLO_WORLD_ROUTE_PATH: &str = "/helloworld";

/// Build the starter plugin definition from its config section.
///
/// The definition declares one config variable; `init` on the returned
/// definition rejects a supplied-but-empty value.
pub fn starter_plugin(config: &StarterConfig) -> PluginDefinition {
    let mut declared = HashMap::new();
    declared.insert(
        "starter.example_variable".to_string(),
        config.example_variable.clone(),
    );

    PluginDefinition {
        name: "starter".to_string(),
        description: "Demonstration plugin with one of each capability kind".to_string(),
        config: declared,
        actions: vec![Arc::new(HelloWorldAction)],
        providers: vec![Arc::new(HelloWorldProvider)],
        routes: vec![hello_world_route()],
        events: events::event_handlers(),
    }
}

/// The demonstration route: `GET /helloworld` -> `{"message": "Hello World!"}`.
pub fn hello_world_route() -> Route {
    Route {
        method: RouteMethod::Get,
        path: HELLO_WORLD_ROUTE_PATH.to_string(),
        name: "hello-world-route".to_string(),
        handler: Arc::new(|| serde_json::json!({ "message": "Hello World!" })),
    }
}

#[cfg(test)]
mod tests {
    use quill_core::{EventType, QuillError};

    use super::*;

    #[test]
    fn plugin_bundles_one_of_each_capability() {
        let plugin = starter_plugin(&StarterConfig::default());
        assert_eq!(plugin.name, "starter");
        assert_eq!(plugin.actions.len(), 1);
        assert_eq!(plugin.providers.len(), 1);
        assert_eq!(plugin.routes.len(), 1);
        assert_eq!(plugin.events.len(), 4);
    }

    #[test]
    fn action_is_found_by_name_and_simile() {
        let plugin = starter_plugin(&StarterConfig::default());
        assert!(plugin.get_action("HELLO_WORLD").is_some());
        assert!(plugin.get_action("GREET").is_some());
        assert!(plugin.get_action("NO_SUCH_ACTION").is_none());
    }

    #[test]
    fn provider_is_found_by_name() {
        let plugin = starter_plugin(&StarterConfig::default());
        assert!(plugin.get_provider("HELLO_WORLD_PROVIDER").is_some());
    }

    #[test]
    fn every_event_has_exactly_one_handler() {
        let plugin = starter_plugin(&StarterConfig::default());
        for event in [
            EventType::MessageReceived,
            EventType::VoiceMessageReceived,
            EventType::WorldConnected,
            EventType::WorldJoined,
        ] {
            assert_eq!(plugin.handlers_for(event).len(), 1);
        }
    }

    #[test]
    fn route_returns_hello_world_payload() {
        let route = hello_world_route();
        assert_eq!(route.method, RouteMethod::Get);
        assert_eq!(route.path, HELLO_WORLD_ROUTE_PATH);

        let body = (route.handler)();
        assert_eq!(body, serde_json::json!({ "message": "Hello World!" }));
    }

    #[test]
    fn init_accepts_unset_example_variable() {
        let plugin = starter_plugin(&StarterConfig::default());
        assert!(plugin.init().is_ok());
    }

    #[test]
    fn init_rejects_blank_example_variable() {
        let config = StarterConfig {
            example_variable: Some(String::new()),
        };
        let plugin = starter_plugin(&config);

        let err = plugin.init().unwrap_err();
        assert!(matches!(err, QuillError::PluginConfig { plugin, .. } if plugin == "starter"));
    }

    #[test]
    fn init_accepts_populated_example_variable() {
        let config = StarterConfig {
            example_variable: Some("demo".to_string()),
        };
        assert!(starter_plugin(&config).init().is_ok());
    }
}
