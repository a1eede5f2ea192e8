// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! End-to-end scenarios over the full dispatcher + loop stack, driven by the
//! fake driver/backing store/log fetcher.

use scale_core::{
    AgentId, BuiltinError, FakeClock, FrameworkId, JobExeId, MasterInfo, NodeResources, OfferId,
    ResourceOffer, SchedulerConfig, TaskId, TaskState, TaskStatus,
};
use scale_driver::{DriverCall, FakeDriver, FakeLogFetcher};
use scale_engine::{loops::scheduling, Dispatcher, OfferAnnouncement, SchedulerCallbacks, SchedulerContext};
use scale_storage::{InMemoryBackingStore, PersistedExecution, QueuedJob};
use std::sync::Arc;
use std::time::Duration;

fn build(
    driver: Arc<FakeDriver>,
    store: Arc<InMemoryBackingStore>,
) -> (Arc<SchedulerContext<FakeClock>>, Dispatcher<FakeClock>) {
    let ctx = Arc::new(SchedulerContext::new(
        driver,
        store,
        Arc::new(FakeLogFetcher::new()),
        SchedulerConfig::default(),
        FakeClock::new(),
    ));
    let dispatcher = Dispatcher::new(ctx.clone());
    (ctx, dispatcher)
}

fn offer(id: &str, agent: &str, cpus: f64, mem: u64) -> OfferAnnouncement {
    OfferAnnouncement {
        offer: ResourceOffer::new(OfferId::new(id), AgentId::new(agent), NodeResources::new(cpus, mem, 0), 0),
        hostname: format!("{agent}.local"),
        port: 5051,
    }
}

fn job(id: &str, cpus: f64, mem: u64) -> QueuedJob {
    QueuedJob {
        job_exe_id: JobExeId::new(id),
        resources: NodeResources::new(cpus, mem, 0),
        command: "run".into(),
    }
}

#[tokio::test]
async fn happy_path_launch_runs_to_finished() {
    let driver = Arc::new(FakeDriver::new());
    let store = Arc::new(InMemoryBackingStore::new());
    let (ctx, dispatcher) = build(driver.clone(), store.clone());

    dispatcher.resource_offers(vec![offer("o1", "a1", 4.0, 8192)]).await;
    store.seed_queue([job("e1", 2.0, 4096)]);

    scheduling::schedule_once(&ctx).await.unwrap();

    let task_id = TaskId::for_execution(&JobExeId::new("e1"), 0);
    assert!(driver
        .calls()
        .iter()
        .any(|c| matches!(c, DriverCall::LaunchTasks { tasks, .. } if tasks.iter().any(|t| t.task_id == task_id))));
    assert!(ctx.executions.get(&JobExeId::new("e1")).is_some());

    dispatcher.status_update(task_id.clone(), TaskStatus::Running, 10, None).await;
    assert!(matches!(
        ctx.executions.get(&JobExeId::new("e1")).unwrap().state,
        TaskState::Running { .. }
    ));

    dispatcher
        .status_update(task_id.clone(), TaskStatus::Finished, 20, Some(0))
        .await;
    assert!(ctx.executions.get(&JobExeId::new("e1")).is_none());
    assert!(ctx.reconciliation.is_empty());
}

#[tokio::test]
async fn lost_offer_before_launch_leaves_execution_queued() {
    let driver = Arc::new(FakeDriver::new());
    let store = Arc::new(InMemoryBackingStore::new());
    let (ctx, dispatcher) = build(driver.clone(), store.clone());

    dispatcher.resource_offers(vec![offer("o1", "a1", 4.0, 8192)]).await;
    dispatcher.offer_rescinded(OfferId::new("o1")).await;
    store.seed_queue([job("e1", 2.0, 4096)]);

    scheduling::schedule_once(&ctx).await.unwrap();

    assert!(driver.calls().iter().all(|c| !matches!(c, DriverCall::LaunchTasks { .. })));
    assert_eq!(store.queue_len(), 1, "unmatched job must be requeued");
}

#[tokio::test]
async fn lost_task_status_transitions_to_lost_with_mesos_lost() {
    let driver = Arc::new(FakeDriver::new());
    let store = Arc::new(InMemoryBackingStore::new());
    let (ctx, dispatcher) = build(driver.clone(), store.clone());

    dispatcher.resource_offers(vec![offer("o1", "a1", 4.0, 8192)]).await;
    store.seed_queue([job("e2", 2.0, 4096)]);
    scheduling::schedule_once(&ctx).await.unwrap();

    let task_id = TaskId::for_execution(&JobExeId::new("e2"), 0);
    dispatcher.status_update(task_id, TaskStatus::Lost, 30, None).await;

    assert!(ctx.executions.get(&JobExeId::new("e2")).is_none());
}

#[tokio::test]
async fn node_lost_with_backing_store_success_removes_execution() {
    let driver = Arc::new(FakeDriver::new());
    let store = Arc::new(InMemoryBackingStore::new());
    let (ctx, dispatcher) = build(driver.clone(), store.clone());

    dispatcher.resource_offers(vec![offer("o1", "a1", 4.0, 8192)]).await;
    store.seed_queue([job("e3", 2.0, 4096)]);
    scheduling::schedule_once(&ctx).await.unwrap();

    dispatcher.slave_lost(AgentId::new("a1")).await;

    assert!(ctx.executions.get(&JobExeId::new("e3")).is_none());
    assert!(store
        .failures()
        .iter()
        .any(|f| f.job_exe_id == JobExeId::new("e3") && f.error_name == BuiltinError::NodeLost.name()));
}

#[tokio::test]
async fn node_lost_with_backing_store_failure_keeps_execution_pending_reconciliation() {
    let driver = Arc::new(FakeDriver::new());
    let store = Arc::new(InMemoryBackingStore::new());
    let (ctx, dispatcher) = build(driver.clone(), store.clone());

    dispatcher.resource_offers(vec![offer("o1", "a1", 4.0, 8192)]).await;
    store.seed_queue([job("e3", 2.0, 4096)]);
    scheduling::schedule_once(&ctx).await.unwrap();

    store.set_fail_handle_job_failure(true);
    dispatcher.slave_lost(AgentId::new("a1")).await;

    let execution = ctx.executions.get(&JobExeId::new("e3"));
    assert!(execution.is_some(), "execution must remain in the manager on write failure");
    assert!(matches!(execution.unwrap().state, TaskState::Lost { .. }));
    let task_id = TaskId::for_execution(&JobExeId::new("e3"), 0);
    assert!(ctx.reconciliation.contains(&task_id));
}

#[tokio::test]
async fn unknown_execution_status_reports_scheduler_lost() {
    let driver = Arc::new(FakeDriver::new());
    let store = Arc::new(InMemoryBackingStore::new());
    let (ctx, dispatcher) = build(driver.clone(), store.clone());

    let task_id = TaskId::for_execution(&JobExeId::new("ghost"), 0);
    ctx.reconciliation.insert(task_id.clone());
    dispatcher.status_update(task_id.clone(), TaskStatus::Finished, 5, Some(0)).await;

    assert!(store
        .failures()
        .iter()
        .any(|f| f.job_exe_id == JobExeId::new("ghost") && f.error_name == BuiltinError::SchedulerLost.name()));
    assert!(!ctx.reconciliation.contains(&task_id));
}

#[tokio::test]
async fn reregistration_keeps_single_loop_set_and_reconciles_on_rotated_driver() {
    let store = Arc::new(InMemoryBackingStore::new());
    let config = SchedulerConfig {
        reconciliation_interval: Duration::from_millis(5),
        scheduling_interval: Duration::from_millis(5),
        db_sync_interval: Duration::from_millis(5),
        ..Default::default()
    };
    let initial_driver: Arc<FakeDriver> = Arc::new(FakeDriver::new());
    let ctx = Arc::new(SchedulerContext::new(
        initial_driver,
        store.clone(),
        Arc::new(FakeLogFetcher::new()),
        config,
        FakeClock::new(),
    ));
    let dispatcher = Dispatcher::new(ctx.clone());

    let task_id = TaskId::for_execution(&JobExeId::new("e9"), 0);
    ctx.executions.register(scale_core::RunningJobExecution::new(
        JobExeId::new("e9"),
        AgentId::new("a1"),
        "a1.local",
        5051,
        task_id.clone(),
        0,
    ));
    store.seed_running([PersistedExecution {
        job_exe_id: JobExeId::new("e9"),
        agent_id: AgentId::new("a1"),
        node_hostname: "a1.local".into(),
        node_port: 5051,
        current_task_id: task_id.clone(),
    }]);

    let driver1 = Arc::new(FakeDriver::new());
    dispatcher
        .registered(driver1.clone(), FrameworkId::new("f1"), MasterInfo { hostname: "m1".into(), port: 5050 })
        .await;
    tokio::time::sleep(Duration::from_millis(50)).await;
    assert!(driver1.calls().iter().any(|c| matches!(c, DriverCall::ReconcileTasks { task_ids } if task_ids.contains(&task_id))));

    let driver2 = Arc::new(FakeDriver::new());
    dispatcher
        .reregistered(driver2.clone(), MasterInfo { hostname: "m2".into(), port: 5051 })
        .await;
    tokio::time::sleep(Duration::from_millis(50)).await;
    assert!(
        driver2.calls().iter().any(|c| matches!(c, DriverCall::ReconcileTasks { .. })),
        "the reconciliation loop must pick up the rotated driver handle"
    );

    dispatcher.shutdown().await;
}
