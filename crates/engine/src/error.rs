// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Error types for the engine crate.

use scale_driver::DriverError;
use scale_storage::StorageError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum EngineError {
    #[error("driver error: {0}")]
    Driver(#[from] DriverError),
    #[error("storage error: {0}")]
    Storage(#[from] StorageError),
    #[error("unknown job execution: {0}")]
    UnknownExecution(String),
    #[error("unknown offer: {0}")]
    UnknownOffer(String),
    #[error("unknown agent: {0}")]
    UnknownAgent(String),
}
