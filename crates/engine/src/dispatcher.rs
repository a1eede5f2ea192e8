// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! The single serialized entry point for everything the Driver reports.
//!
//! `SchedulerCallbacks` is the trait the process-wiring boundary calls into,
//! one method per Driver-invoked event; `Dispatcher` is its only
//! implementation. Callers are expected to invoke these methods one at a
//! time on a single logical thread of execution — this struct does no
//! internal queuing of its own, matching the ordering guarantee in the
//! concurrency model.

use crate::context::SchedulerContext;
use crate::loops::{db_sync, reconciliation, scheduling, LoopHandles};
use crate::running_execution_manager::StatusOutcome;
use async_trait::async_trait;
use parking_lot::Mutex;
use scale_core::{AgentId, BuiltinError, Clock, FrameworkId, MasterInfo, OfferId, ResourceOffer, SystemClock, TaskId, TaskStatus};
use scale_driver::SchedulerDriver;
use std::future::Future;
use std::sync::Arc;
use std::time::Instant;
use tokio_util::sync::CancellationToken;

/// A raw offer as handed to `resourceOffers`, carrying the node address the
/// core needs to register the agent with the Node Manager.
#[derive(Debug, Clone)]
pub struct OfferAnnouncement {
    pub offer: ResourceOffer,
    pub hostname: String,
    pub port: u16,
}

#[async_trait]
pub trait SchedulerCallbacks: Send + Sync {
    async fn registered(&self, driver: Arc<dyn SchedulerDriver>, framework_id: FrameworkId, master_info: MasterInfo);
    async fn reregistered(&self, driver: Arc<dyn SchedulerDriver>, master_info: MasterInfo);
    async fn disconnected(&self);
    async fn resource_offers(&self, offers: Vec<OfferAnnouncement>);
    async fn offer_rescinded(&self, offer_id: OfferId);
    async fn status_update(&self, task_id: TaskId, status: TaskStatus, when_ms: i64, exit_code: Option<i32>);
    async fn framework_message(&self, executor_id: String, agent_id: AgentId, bytes: Vec<u8>);
    async fn slave_lost(&self, agent_id: AgentId);
    async fn executor_lost(&self, executor_id: String, agent_id: AgentId, status: i32);
    async fn error(&self, message: String);
    async fn shutdown(&self);
}

pub struct Dispatcher<C: Clock = SystemClock> {
    ctx: Arc<SchedulerContext<C>>,
    loops: Mutex<Option<LoopHandles>>,
}

impl<C: Clock> Dispatcher<C> {
    pub fn new(ctx: Arc<SchedulerContext<C>>) -> Self {
        Self {
            ctx,
            loops: Mutex::new(None),
        }
    }

    pub fn context(&self) -> &Arc<SchedulerContext<C>> {
        &self.ctx
    }

    async fn timed<F, T>(&self, label: &'static str, threshold_ms: u64, fut: F) -> T
    where
        F: Future<Output = T>,
    {
        let start = Instant::now();
        let out = fut.await;
        let elapsed_ms = start.elapsed().as_millis() as u64;
        if elapsed_ms > threshold_ms {
            tracing::warn!(
                callback = label,
                elapsed_ms,
                threshold_ms,
                "callback exceeded latency threshold"
            );
        }
        out
    }
}

#[async_trait]
impl<C: Clock> SchedulerCallbacks for Dispatcher<C> {
    async fn registered(&self, driver: Arc<dyn SchedulerDriver>, framework_id: FrameworkId, master_info: MasterInfo) {
        self.timed("registered", self.ctx.config.db_warn_ms, async {
            self.ctx.driver.store(driver);
            tracing::info!(%framework_id, master_host = %master_info.hostname, "registered with resource master");

            if let Err(e) = self.ctx.backing_store.update_master(&master_info).await {
                tracing::error!(error = %e, "failed to persist master address");
            }
            if let Err(e) = self.ctx.backing_store.sync_job_types().await {
                tracing::error!(error = %e, "initial job-type sync failed");
            }
            if let Err(e) = self.ctx.backing_store.sync_scheduler_config().await {
                tracing::error!(error = %e, "initial scheduler config sync failed");
            }

            {
                let mut loops = self.loops.lock();
                if loops.is_none() {
                    let token = CancellationToken::new();
                    let scheduling = tokio::spawn(scheduling::run(self.ctx.clone(), token.clone()));
                    let recon = tokio::spawn(reconciliation::run(self.ctx.clone(), token.clone()));
                    let db = tokio::spawn(db_sync::run(self.ctx.clone(), token.clone()));
                    *loops = Some(LoopHandles {
                        token,
                        scheduling,
                        reconciliation: recon,
                        db_sync: db,
                    });
                }
            }

            reconciliation::initial_reconciliation(&self.ctx).await;
        })
        .await
    }

    async fn reregistered(&self, driver: Arc<dyn SchedulerDriver>, master_info: MasterInfo) {
        self.timed("reregistered", self.ctx.config.db_warn_ms, async {
            self.ctx.driver.store(driver);
            if let Err(e) = self.ctx.backing_store.update_master(&master_info).await {
                tracing::error!(error = %e, "failed to persist master address on reregister");
            }
            reconciliation::initial_reconciliation(&self.ctx).await;
        })
        .await
    }

    async fn disconnected(&self) {
        self.timed("disconnected", self.ctx.config.normal_warn_ms, async {
            tracing::warn!("disconnected from resource master");
        })
        .await
    }

    async fn resource_offers(&self, offers: Vec<OfferAnnouncement>) {
        self.timed("resourceOffers", self.ctx.config.normal_warn_ms, async {
            if offers.is_empty() {
                return;
            }
            let mut accepted = Vec::with_capacity(offers.len());
            for announcement in offers {
                let agent_id = announcement.offer.agent_id.clone();
                self.ctx.nodes.observe(&agent_id, &announcement.hostname, announcement.port);
                if self.ctx.nodes.is_lost(&agent_id) {
                    self.ctx.nodes.mark_recovered(&agent_id);
                }
                if self.ctx.offers.is_lost(&agent_id) {
                    self.ctx.offers.readmit(&agent_id);
                }
                accepted.push(announcement.offer);
            }
            self.ctx.offers.add_new_offers(accepted);
        })
        .await
    }

    async fn offer_rescinded(&self, offer_id: OfferId) {
        self.timed("offerRescinded", self.ctx.config.normal_warn_ms, async {
            self.ctx.offers.remove_offers(&[offer_id]);
        })
        .await
    }

    async fn status_update(&self, task_id: TaskId, status: TaskStatus, when_ms: i64, exit_code: Option<i32>) {
        self.timed("statusUpdate", self.ctx.config.db_warn_ms, async {
            self.ctx.reconciliation.remove(&task_id);

            if !status.is_actionable() {
                return;
            }

            match self.ctx.executions.apply_status(&task_id, status, when_ms, exit_code) {
                StatusOutcome::Unknown { job_exe_id } => {
                    if let Err(e) = self
                        .ctx
                        .backing_store
                        .handle_job_failure(&job_exe_id, when_ms, BuiltinError::SchedulerLost.name())
                        .await
                    {
                        tracing::error!(error = %e, %job_exe_id, "failed to record scheduler-lost failure");
                        self.ctx.reconciliation.insert(task_id.clone());
                    }
                }
                StatusOutcome::Applied { execution, .. } => {
                    if execution.state.should_fetch_logs() {
                        let stdout = self
                            .ctx
                            .log_fetcher
                            .task_file(&execution.node_hostname, execution.node_port, &task_id, "stdout")
                            .await;
                        let stderr = self
                            .ctx
                            .log_fetcher
                            .task_file(&execution.node_hostname, execution.node_port, &task_id, "stderr")
                            .await;
                        tracing::debug!(
                            %task_id,
                            stdout_fetched = stdout.is_some(),
                            stderr_fetched = stderr.is_some(),
                            "best-effort log fetch",
                        );
                    }
                }
            }
        })
        .await
    }

    async fn framework_message(&self, executor_id: String, agent_id: AgentId, bytes: Vec<u8>) {
        self.timed("frameworkMessage", self.ctx.config.normal_warn_ms, async {
            tracing::debug!(executor_id, %agent_id, len = bytes.len(), "framework message received");
        })
        .await
    }

    async fn slave_lost(&self, agent_id: AgentId) {
        self.timed("slaveLost", self.ctx.config.db_warn_ms, async {
            self.ctx.nodes.mark_lost(&agent_id);
            self.ctx.offers.lost_node(&agent_id);

            let when_ms = self.ctx.clock.epoch_ms();
            let removed = self.ctx.executions.mark_agent_lost(&agent_id, when_ms);
            for execution in removed {
                let outcome = self
                    .ctx
                    .backing_store
                    .handle_job_failure(&execution.job_exe_id, when_ms, BuiltinError::NodeLost.name())
                    .await;
                if let Err(e) = outcome {
                    tracing::warn!(
                        error = %e,
                        job_exe_id = %execution.job_exe_id,
                        "failed to record node-lost failure; execution kept pending reconciliation",
                    );
                    self.ctx.reconciliation.insert(execution.current_task_id.clone());
                    self.ctx.executions.register(execution);
                }
            }
        })
        .await
    }

    async fn executor_lost(&self, executor_id: String, agent_id: AgentId, status: i32) {
        self.timed("executorLost", self.ctx.config.normal_warn_ms, async {
            tracing::warn!(executor_id, %agent_id, status, "executor lost; expecting per-task LOST status updates");
        })
        .await
    }

    async fn error(&self, message: String) {
        self.timed("error", self.ctx.config.normal_warn_ms, async {
            tracing::error!(message, "resource master reported an error; driver is assumed aborted");
        })
        .await
    }

    async fn shutdown(&self) {
        let handles = self.loops.lock().take();
        if let Some(handles) = handles {
            handles.cancel();
        }
    }
}
