// SPDX-FileCopyrightText: 2026 Quill Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Capability catalog, plugin list resolver, and character profile assembler.
//!
//! This crate owns the one piece of decision logic in the starter: deriving
//! the ordered capability-plugin list from configuration, and packaging it
//! with the persona into the [`CharacterProfile`] record the external
//! runtime loads.

pub mod catalog;
pub mod profile;
pub mod resolver;

pub use catalog::{CapabilityEntry, SUPPRESS_BOOTSTRAP_KEY, capability_catalog};
pub use profile::{CharacterProfile, DialogueTurn, ProfileSettings, StyleRules, TurnContent};
pub use resolver::{all_keys_present, resolve_plugins};
