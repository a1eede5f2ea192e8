// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Daemon lifecycle management: startup and shutdown of the process-wiring
//! boundary around the engine.

use std::path::PathBuf;
use std::sync::Arc;

use scale_core::{FrameworkId, IdGen, MasterInfo, SystemClock, UuidIdGen};
use scale_driver::{FakeDriver, FakeLogFetcher, SchedulerDriver};
use scale_engine::{Dispatcher, SchedulerCallbacks, SchedulerContext};
use scale_storage::{BackingStore, InMemoryBackingStore};
use thiserror::Error;
use tracing::info;

use crate::env;

/// Daemon configuration: state directory and the files under it.
#[derive(Debug, Clone)]
pub struct Config {
    /// Root state directory (e.g. ~/.local/state/scale)
    pub state_dir: PathBuf,
    /// Path to daemon log file
    pub log_path: PathBuf,
    /// Path to startup marker/error file, used by process supervisors to
    /// detect a crash loop.
    pub startup_path: PathBuf,
}

impl Config {
    /// Load configuration for the user-level daemon.
    ///
    /// Uses fixed paths under `~/.local/state/scale/` (or
    /// `$XDG_STATE_HOME/scale/`); one daemon serves a single framework
    /// registration.
    pub fn load() -> Result<Self, LifecycleError> {
        let state_dir = env::state_dir()?;
        Ok(Self {
            log_path: state_dir.join("daemon.log"),
            startup_path: state_dir.join("daemon.startup"),
            state_dir,
        })
    }
}

#[derive(Debug, Error)]
pub enum LifecycleError {
    #[error("could not determine state directory")]
    NoStateDir,

    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
}

/// Daemon state during operation: the running engine stack plus whatever is
/// needed to shut it down cleanly.
pub struct DaemonState {
    pub config: Config,
    pub dispatcher: Arc<Dispatcher<SystemClock>>,
}

impl DaemonState {
    /// Flush and stop the background loops.
    pub async fn shutdown(&self) -> Result<(), LifecycleError> {
        info!("shutting down daemon");
        self.dispatcher.shutdown().await;
        if self.config.startup_path.exists() {
            std::fs::remove_file(&self.config.startup_path)?;
        }
        info!("daemon shutdown complete");
        Ok(())
    }
}

/// Bring up the engine stack and synthesize the initial `registered` call.
///
/// This core ships no wire binding to a real resource master, so there is no
/// external driver callback to wait on; the daemon's own startup sequence
/// plays the role the resource master's client library would.
pub async fn startup(config: &Config) -> Result<DaemonState, LifecycleError> {
    std::fs::create_dir_all(&config.state_dir)?;

    let scheduler_config = env::scheduler_config();
    let backing_store: Arc<dyn BackingStore> = Arc::new(InMemoryBackingStore::new());
    let log_fetcher = Arc::new(FakeLogFetcher::new());
    let driver: Arc<dyn SchedulerDriver> = Arc::new(FakeDriver::new());

    let ctx = Arc::new(SchedulerContext::new(
        driver.clone(),
        backing_store,
        log_fetcher,
        scheduler_config,
        SystemClock,
    ));
    let dispatcher = Arc::new(Dispatcher::new(ctx));

    dispatcher
        .registered(
            driver,
            FrameworkId::new(UuidIdGen.next()),
            MasterInfo {
                hostname: "localhost".to_string(),
                port: 5050,
            },
        )
        .await;

    std::fs::write(&config.startup_path, format!("pid={}\n", std::process::id()))?;
    info!(state_dir = %config.state_dir.display(), "daemon started");

    Ok(DaemonState { config: config.clone(), dispatcher })
}

#[cfg(test)]
#[path = "lifecycle_tests.rs"]
mod tests;
