// SPDX-FileCopyrightText: 2026 Quill Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Event hooks for the starter plugin.
//!
//! Each hook logs receipt of its event and the key set of the parameter
//! object; none has any behavioral effect beyond logging.

use std::sync::Arc;

use quill_core::{EventHandler, EventPayload, EventType};

/// Events the starter plugin subscribes to.
const SUBSCRIBED_EVENTS: [EventType; 4] = [
    EventType::MessageReceived,
    EventType::VoiceMessageReceived,
    EventType::WorldConnected,
    EventType::WorldJoined,
];

/// Build the starter plugin's event subscriptions.
pub fn event_handlers() -> Vec<EventHandler> {
    SUBSCRIBED_EVENTS
        .into_iter()
        .map(|event| EventHandler {
            event,
            handler: Arc::new(move |payload| log_event(event, payload)),
        })
        .collect()
}

fn log_event(event: EventType, payload: &EventPayload) {
    let keys: Vec<&str> = payload
        .as_object()
        .map(|obj| obj.keys().map(String::as_str).collect())
        .unwrap_or_default();
    tracing::info!(event = %event, ?keys, "event received");
}
