// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Error types for pure data-model operations.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum CoreError {
    #[error("unknown job execution: {0}")]
    UnknownExecution(String),
    #[error("invalid task id: {0}")]
    InvalidTaskId(String),
    #[error("invalid configuration: {0}")]
    InvalidConfig(String),
}
