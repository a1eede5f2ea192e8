use super::*;
use scale_core::{AgentId, NodeResources};

#[tokio::test]
async fn dequeue_ready_respects_max_and_fifo_order() {
    let store = InMemoryBackingStore::new();
    store.seed_queue([
        QueuedJob {
            job_exe_id: JobExeId::new("e1"),
            resources: NodeResources::new(1.0, 100, 100),
            command: "cmd1".into(),
        },
        QueuedJob {
            job_exe_id: JobExeId::new("e2"),
            resources: NodeResources::new(1.0, 100, 100),
            command: "cmd2".into(),
        },
    ]);
    let batch = store.dequeue_ready(1).await.unwrap();
    assert_eq!(batch.len(), 1);
    assert_eq!(batch[0].job_exe_id, JobExeId::new("e1"));
    assert_eq!(store.queue_len(), 1);
}

#[tokio::test]
async fn handle_job_failure_is_recorded() {
    let store = InMemoryBackingStore::new();
    store
        .handle_job_failure(&JobExeId::new("e1"), 123, "scheduler-lost")
        .await
        .unwrap();
    let failures = store.failures();
    assert_eq!(failures.len(), 1);
    assert_eq!(failures[0].error_name, "scheduler-lost");
}

#[tokio::test]
async fn get_builtin_error_rejects_unknown_names() {
    let store = InMemoryBackingStore::new();
    assert!(store.get_builtin_error("mesos-lost").await.is_ok());
    assert!(store.get_builtin_error("bogus").await.is_err());
}

#[tokio::test]
async fn update_master_is_readable_back() {
    let store = InMemoryBackingStore::new();
    assert!(store.master().is_none());
    store
        .update_master(&MasterInfo {
            hostname: "m1".into(),
            port: 5050,
        })
        .await
        .unwrap();
    assert_eq!(
        store.master(),
        Some(MasterInfo {
            hostname: "m1".into(),
            port: 5050
        })
    );
}

#[tokio::test]
async fn running_executions_reflects_seed() {
    let store = InMemoryBackingStore::new();
    store.seed_running([PersistedExecution {
        job_exe_id: JobExeId::new("e1"),
        agent_id: AgentId::new("a1"),
        node_hostname: "h1".into(),
        node_port: 1,
        current_task_id: scale_core::TaskId::new("e1:0"),
    }]);
    assert_eq!(store.running_executions().await.unwrap().len(), 1);
}
