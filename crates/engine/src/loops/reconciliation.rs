// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Periodically re-asks the Driver for status of every task this scheduler
//! is unsure about, and seeds that set on `registered`/`reregistered`.

use crate::context::SchedulerContext;
use scale_core::{BuiltinError, Clock};
use std::sync::Arc;
use tokio_util::sync::CancellationToken;

pub async fn run<C: Clock>(ctx: Arc<SchedulerContext<C>>, token: CancellationToken) {
    let mut interval = tokio::time::interval(ctx.config.reconciliation_interval);
    loop {
        tokio::select! {
            _ = token.cancelled() => break,
            _ = interval.tick() => {
                if let Err(e) = reconcile_once(&ctx).await {
                    tracing::error!(error = %e, "reconciliation pass failed");
                }
            }
        }
    }
}

pub async fn reconcile_once<C: Clock>(ctx: &SchedulerContext<C>) -> Result<(), crate::error::EngineError> {
    let task_ids = ctx.reconciliation.snapshot();
    if task_ids.is_empty() {
        return Ok(());
    }
    ctx.driver.load().reconcile_tasks(&task_ids).await?;
    Ok(())
}

/// Seed the reconciliation set from whatever the backing store believes is
/// running. Executions this scheduler still tracks are added to the set for
/// the Driver to re-report; executions it has no record of at all are
/// treated as a scheduler-lost failure.
pub async fn initial_reconciliation<C: Clock>(ctx: &SchedulerContext<C>) {
    let persisted = match ctx.backing_store.running_executions().await {
        Ok(p) => p,
        Err(e) => {
            tracing::error!(error = %e, "failed to load running executions for initial reconciliation");
            return;
        }
    };

    let when_ms = ctx.clock.epoch_ms();
    for execution in persisted {
        if ctx.executions.get(&execution.job_exe_id).is_some() {
            ctx.reconciliation.insert(execution.current_task_id.clone());
        } else if let Err(e) = ctx
            .backing_store
            .handle_job_failure(&execution.job_exe_id, when_ms, BuiltinError::SchedulerLost.name())
            .await
        {
            tracing::error!(
                error = %e,
                job_exe_id = %execution.job_exe_id,
                "failed to record scheduler-lost for untracked persisted execution",
            );
        }
    }
}
