// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! The three background duty-cycle loops and the handles the dispatcher
//! holds while they run.

pub mod db_sync;
pub mod reconciliation;
pub mod scheduling;

use tokio_util::sync::CancellationToken;

/// Join handles plus the cancellation token shared by the scheduling,
/// reconciliation, and database-sync loops started by `registered`. Taken by
/// `shutdown`, which only cancels the token — in-flight driver calls are
/// allowed to finish, not aborted.
pub struct LoopHandles {
    pub token: CancellationToken,
    pub scheduling: tokio::task::JoinHandle<()>,
    pub reconciliation: tokio::task::JoinHandle<()>,
    pub db_sync: tokio::task::JoinHandle<()>,
}

impl LoopHandles {
    pub fn cancel(&self) {
        self.token.cancel();
    }
}
