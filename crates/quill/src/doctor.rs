// SPDX-FileCopyrightText: 2026 Quill Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! `quill doctor` command implementation.
//!
//! Reports, for every catalog entry, whether the current configuration
//! activates it and which required keys are missing if not.

use quill_character::{SUPPRESS_BOOTSTRAP_KEY, capability_catalog, resolve_plugins};
use quill_config::QuillConfig;

/// Activation report for one catalog entry.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CapabilityReport {
    /// Plugin identifier.
    pub id: &'static str,
    /// Whether the entry appears in the resolved list.
    pub active: bool,
    /// Required keys currently missing or blank.
    pub missing: Vec<&'static str>,
}

/// Build the activation report for the given configuration.
pub fn capability_report(config: &QuillConfig) -> Vec<CapabilityReport> {
    let settings = config.capability_settings();
    let resolved = resolve_plugins(&settings);

    capability_catalog()
        .iter()
        .map(|entry| {
            let active = resolved.iter().any(|p| p.as_str() == entry.id);
            let missing = entry
                .requires
                .iter()
                .copied()
                .filter(|key| {
                    !settings
                        .get(*key)
                        .is_some_and(|v| !v.trim().is_empty())
                })
                .collect();
            CapabilityReport {
                id: entry.id,
                active,
                missing,
            }
        })
        .collect()
}

/// Run the `quill doctor` command.
pub fn run_doctor(config: &QuillConfig) {
    let reports = capability_report(config);
    let settings = config.capability_settings();

    println!();
    println!("  quill doctor");
    println!("  {}", "-".repeat(50));

    for report in &reports {
        if report.active {
            println!("    [ON]  {}", report.id);
        } else if report.missing.is_empty() {
            // Only the bootstrap entry can be inactive with nothing missing.
            println!("    [OFF] {} (suppressed via {SUPPRESS_BOOTSTRAP_KEY})", report.id);
        } else {
            println!("    [OFF] {} (missing {})", report.id, report.missing.join(", "));
        }
    }

    let active = reports.iter().filter(|r| r.active).count();
    println!();
    println!("    {active} of {} capabilities active", reports.len());
    if settings.contains_key(SUPPRESS_BOOTSTRAP_KEY) {
        println!("    bootstrap suppression key is set");
    }
    println!();
}
