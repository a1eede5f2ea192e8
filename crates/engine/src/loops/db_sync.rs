// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Refreshes scheduler configuration, job-type metadata, and the node
//! roster from the backing store on a short interval.

use crate::context::SchedulerContext;
use crate::error::EngineError;
use scale_core::Clock;
use std::sync::Arc;
use tokio_util::sync::CancellationToken;

pub async fn run<C: Clock>(ctx: Arc<SchedulerContext<C>>, token: CancellationToken) {
    let mut interval = tokio::time::interval(ctx.config.db_sync_interval);
    loop {
        tokio::select! {
            _ = token.cancelled() => break,
            _ = interval.tick() => {
                if let Err(e) = sync_once(&ctx).await {
                    tracing::error!(error = %e, "database sync pass failed");
                }
            }
        }
    }
}

pub async fn sync_once<C: Clock>(ctx: &SchedulerContext<C>) -> Result<(), EngineError> {
    // Scheduler settings and job-type definitions are re-read here so a
    // failure surfaces on the same cadence as the rest of the sync, but this
    // core keeps no local cache of them beyond what `dequeue_ready` already
    // bakes into each `QueuedJob`.
    ctx.backing_store.sync_scheduler_config().await?;
    ctx.backing_store.sync_job_types().await?;

    let nodes = ctx.backing_store.sync_nodes().await?;
    ctx.nodes.sync_from_roster(nodes);
    Ok(())
}
