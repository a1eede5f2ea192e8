// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! The duty-cycle loop that turns ready work and reserved offers into
//! launches.

use crate::context::SchedulerContext;
use crate::error::EngineError;
use crate::matcher;
use scale_core::{Clock, RunningJobExecution, TaskId};
use scale_driver::TaskInfo;
use std::collections::HashSet;
use std::sync::Arc;
use tokio_util::sync::CancellationToken;

pub async fn run<C: Clock>(ctx: Arc<SchedulerContext<C>>, token: CancellationToken) {
    let mut interval = tokio::time::interval(ctx.config.scheduling_interval);
    loop {
        tokio::select! {
            _ = token.cancelled() => break,
            _ = interval.tick() => {
                if let Err(e) = schedule_once(&ctx).await {
                    tracing::error!(error = %e, "scheduling pass failed");
                }
            }
        }
    }
}

/// Run one scheduling pass. Exposed so tests (and any caller that wants a
/// synchronous single shot, e.g. a CLI debug command) can drive a pass
/// without waiting on the interval.
pub async fn schedule_once<C: Clock>(ctx: &SchedulerContext<C>) -> Result<(), EngineError> {
    let settings = ctx.backing_store.sync_scheduler_config().await?;
    if settings.paused {
        return Ok(());
    }

    let jobs = ctx
        .backing_store
        .dequeue_ready(ctx.config.max_new_job_exes_per_cycle)
        .await?;

    let reservation = ctx.offers.ready_offers();
    let by_agent = reservation.by_agent();
    let result = matcher::match_jobs(jobs, by_agent);

    if !result.unmatched.is_empty() {
        let n = result.unmatched.len();
        if let Err(e) = ctx.backing_store.requeue(result.unmatched).await {
            tracing::error!(error = %e, count = n, "failed to requeue unmatched jobs");
        }
    }

    let now_ms = ctx.clock.epoch_ms();
    let mut launched_offers = HashSet::new();
    for placed in result.placed {
        let node = ctx.nodes.get(&placed.agent_id);
        let (hostname, port) = node
            .map(|n| (n.hostname, n.port))
            .unwrap_or_else(|| (placed.agent_id.as_str().to_string(), 0));

        let task_id = TaskId::for_execution(&placed.job.job_exe_id, 0);
        ctx.executions.register(RunningJobExecution::new(
            placed.job.job_exe_id.clone(),
            placed.agent_id.clone(),
            hostname,
            port,
            task_id.clone(),
            now_ms,
        ));
        ctx.reconciliation.insert(task_id.clone());

        let task_info = TaskInfo {
            task_id: task_id.clone(),
            resources: placed.job.resources,
            command: placed.job.command.clone(),
        };
        let offer_id = placed.offer_id.clone();
        if let Err(e) = ctx
            .driver
            .load()
            .launch_tasks(&[offer_id.clone()], std::slice::from_ref(&task_info))
            .await
        {
            tracing::warn!(
                error = %e,
                %task_id,
                "launch failed; offer stays consumed and task awaits reconciliation",
            );
        }
        launched_offers.insert(offer_id);
    }

    ctx.offers.consume(reservation, &launched_offers);

    let aged = ctx
        .offers
        .decline_aged(now_ms, ctx.config.offer_hold_duration.as_millis() as i64);
    for offer_id in aged {
        if let Err(e) = ctx.driver.load().decline_offer(&offer_id).await {
            tracing::warn!(error = %e, %offer_id, "failed to decline aged offer");
        }
    }

    Ok(())
}
