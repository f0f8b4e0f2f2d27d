// SPDX-FileCopyrightText: 2026 Quill Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Plugin list resolver.
//!
//! Derives the ordered capability-plugin list for a character profile from a
//! settings snapshot. Pure and synchronous: no I/O, no process-global reads,
//! identical input always yields an identical list.

use std::collections::BTreeMap;

use quill_core::{CapabilityCategory, PluginId};

use crate::catalog::{SUPPRESS_BOOTSTRAP_KEY, capability_catalog};

/// The order categories are appended to the resolved list.
///
/// This deliberately differs from [`CapabilityCategory`]'s declaration
/// order: embedding-capable providers land after the bootstrap bundle, and
/// the fallback provider last, so that the runtime's earlier-entry-wins
/// priority picks a configured primary over the fallback.
const RESOLUTION_ORDER: [CapabilityCategory; 6] = [
    CapabilityCategory::Core,
    CapabilityCategory::TextOnly,
    CapabilityCategory::Platform,
    CapabilityCategory::Bootstrap,
    CapabilityCategory::Embedding,
    CapabilityCategory::Fallback,
];

/// Returns true iff every required key is defined and non-blank after trim.
///
/// Absence is an expected state, never an error. The conjunction means the
/// four-part twitter credential only activates when all four parts are set.
pub fn all_keys_present(requires: &[&str], settings: &BTreeMap<String, String>) -> bool {
    requires
        .iter()
        .all(|key| settings.get(*key).is_some_and(|v| !v.trim().is_empty()))
}

/// Resolve the ordered plugin list for the given settings snapshot.
///
/// The core entry is always first. The bootstrap entry is included unless
/// the suppression key is defined at all (a blank value still suppresses --
/// presence-only, unlike the trim rule applied to provider keys). Every
/// other inclusion is decided by [`all_keys_present`]. No deduplication
/// pass runs; the catalog is duplicate-free by construction.
pub fn resolve_plugins(settings: &BTreeMap<String, String>) -> Vec<PluginId> {
    let mut plugins = Vec::new();

    for category in RESOLUTION_ORDER {
        for entry in capability_catalog()
            .iter()
            .filter(|e| e.category == category)
        {
            let include = match category {
                CapabilityCategory::Core => true,
                CapabilityCategory::Bootstrap => !settings.contains_key(SUPPRESS_BOOTSTRAP_KEY),
                _ => all_keys_present(entry.requires, settings),
            };
            if include {
                plugins.push(PluginId::from(entry.id));
            }
        }
    }

    plugins
}
