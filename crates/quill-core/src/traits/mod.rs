// SPDX-FileCopyrightText: 2026 Quill Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Capability trait definitions for the Quill plugin surface.
//!
//! Each capability kind the external runtime understands (action, provider,
//! service) has an explicit trait with a fixed contract. Routes and event
//! handlers are plain records in [`crate::types`] since they carry no
//! per-implementation behavior beyond a closure.

pub mod action;
pub mod provider;
pub mod service;

pub use action::{Action, ReplyCallback};
pub use provider::Provider;
pub use service::Service;
