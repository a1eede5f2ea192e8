// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Wires the managers, reconciliation set, and external collaborators into
//! the shared handle the dispatcher and background loops operate on.

use crate::node_manager::NodeManager;
use crate::offer_manager::OfferManager;
use crate::running_execution_manager::RunningExecutionManager;
use arc_swap::ArcSwap;
use scale_core::{Clock, ReconciliationSet, SchedulerConfig, SystemClock};
use scale_driver::{LogFetcher, SchedulerDriver};
use scale_storage::BackingStore;
use std::sync::Arc;

/// Everything a scheduling pass, a reconciliation pass, or a database-sync
/// pass needs. Shared behind an `Arc` across the dispatcher and every
/// background loop; `C` is the clock, defaulted to [`SystemClock`] in
/// production and swapped for `FakeClock` in tests.
pub struct SchedulerContext<C: Clock = SystemClock> {
    pub driver: Arc<ArcSwap<dyn SchedulerDriver>>,
    pub offers: Arc<OfferManager>,
    pub nodes: Arc<NodeManager>,
    pub executions: Arc<RunningExecutionManager>,
    pub reconciliation: Arc<ReconciliationSet>,
    pub backing_store: Arc<dyn BackingStore>,
    pub log_fetcher: Arc<dyn LogFetcher>,
    pub config: SchedulerConfig,
    pub clock: C,
}

impl<C: Clock> SchedulerContext<C> {
    pub fn new(
        driver: Arc<dyn SchedulerDriver>,
        backing_store: Arc<dyn BackingStore>,
        log_fetcher: Arc<dyn LogFetcher>,
        config: SchedulerConfig,
        clock: C,
    ) -> Self {
        Self {
            driver: Arc::new(ArcSwap::from(driver)),
            offers: Arc::new(OfferManager::new()),
            nodes: Arc::new(NodeManager::new()),
            executions: Arc::new(RunningExecutionManager::new()),
            reconciliation: Arc::new(ReconciliationSet::new()),
            backing_store,
            log_fetcher,
            config,
            clock,
        }
    }
}
