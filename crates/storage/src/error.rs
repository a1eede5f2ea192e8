// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

use thiserror::Error;

#[derive(Debug, Error)]
pub enum StorageError {
    #[error("execution not found: {0}")]
    ExecutionNotFound(String),
    #[error("unknown built-in error: {0}")]
    UnknownBuiltinError(String),
    #[error("backing store unavailable: {0}")]
    Unavailable(String),
}
