// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Errors from driver operations.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum DriverError {
    #[error("driver is disconnected from the resource master")]
    Disconnected,
    #[error("launch failed: {0}")]
    LaunchFailed(String),
    #[error("decline failed: {0}")]
    DeclineFailed(String),
    #[error("kill failed: {0}")]
    KillFailed(String),
    #[error("reconcile failed: {0}")]
    ReconcileFailed(String),
}
