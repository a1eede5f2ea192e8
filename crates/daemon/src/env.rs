// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Centralized environment variable access for the daemon crate.

use std::path::PathBuf;
use std::time::Duration;

use crate::lifecycle::LifecycleError;

/// Resolve state directory: SCALE_STATE_DIR > XDG_STATE_HOME/scale > ~/.local/state/scale
pub fn state_dir() -> Result<PathBuf, LifecycleError> {
    if let Ok(dir) = std::env::var("SCALE_STATE_DIR") {
        return Ok(PathBuf::from(dir));
    }
    if let Ok(xdg) = std::env::var("XDG_STATE_HOME") {
        return Ok(PathBuf::from(xdg).join("scale"));
    }
    let home = std::env::var("HOME").map_err(|_| LifecycleError::NoStateDir)?;
    Ok(PathBuf::from(home).join(".local/state/scale"))
}

fn millis_override(var: &str) -> Option<Duration> {
    std::env::var(var).ok().and_then(|s| s.parse::<u64>().ok()).map(Duration::from_millis)
}

fn u64_override(var: &str) -> Option<u64> {
    std::env::var(var).ok().and_then(|s| s.parse::<u64>().ok())
}

fn string_override(var: &str) -> Option<String> {
    std::env::var(var).ok().filter(|s| !s.is_empty())
}

/// Load a [`scale_core::SchedulerConfig`], applying `SCALE_*` overrides on
/// top of the struct's defaults.
pub fn scheduler_config() -> scale_core::SchedulerConfig {
    let mut config = scale_core::SchedulerConfig::default();

    if let Some(name) = string_override("SCALE_FRAMEWORK_NAME") {
        config.framework_name = name;
    }
    if let Some(role) = string_override("SCALE_FRAMEWORK_ROLE") {
        config.framework_role = role;
    }
    if let Some(d) = millis_override("SCALE_OFFER_HOLD_MS") {
        config.offer_hold_duration = d;
    }
    if let Some(d) = millis_override("SCALE_SCHEDULING_INTERVAL_MS") {
        config.scheduling_interval = d;
    }
    if let Some(d) = millis_override("SCALE_RECONCILIATION_INTERVAL_MS") {
        config.reconciliation_interval = d;
    }
    if let Some(d) = millis_override("SCALE_DB_SYNC_INTERVAL_MS") {
        config.db_sync_interval = d;
    }
    if let Some(n) = u64_override("SCALE_MAX_NEW_JOB_EXES_PER_CYCLE") {
        config.max_new_job_exes_per_cycle = n as usize;
    }
    if let Some(ms) = u64_override("SCALE_NORMAL_WARN_MS") {
        config.normal_warn_ms = ms;
    }
    if let Some(ms) = u64_override("SCALE_DB_WARN_MS") {
        config.db_warn_ms = ms;
    }

    config
}
