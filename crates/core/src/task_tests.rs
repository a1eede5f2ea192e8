use super::*;

#[yare::parameterized(
    staging    = { TaskStatus::Staging,  false, false },
    starting   = { TaskStatus::Starting, false, false },
    running    = { TaskStatus::Running,  true,  false },
    finished   = { TaskStatus::Finished, true,  true },
    failed     = { TaskStatus::Failed,   true,  true },
    killed     = { TaskStatus::Killed,   true,  true },
    lost       = { TaskStatus::Lost,     true,  true },
    error      = { TaskStatus::Error,    true,  true },
)]
fn status_actionable_and_terminal(status: TaskStatus, actionable: bool, terminal: bool) {
    assert_eq!(status.is_actionable(), actionable);
    assert_eq!(status.is_terminal(), terminal);
}

#[test]
fn informational_statuses_do_not_change_state() {
    let s = TaskState::Launched { launched_at_ms: 0 };
    assert_eq!(s.apply_status(TaskStatus::Staging, 10, None), s);
    assert_eq!(s.apply_status(TaskStatus::Starting, 10, None), s);
}

#[test]
fn lost_attaches_mesos_lost_and_skips_log_fetch() {
    let s = TaskState::Running { since_ms: 0 }.apply_status(TaskStatus::Lost, 50, None);
    assert!(s.is_terminal());
    assert!(!s.should_fetch_logs());
    match s {
        TaskState::Lost { builtin_error, .. } => {
            assert_eq!(builtin_error, BuiltinError::MesosLost)
        }
        _ => panic!("expected Lost"),
    }
}

#[test]
fn failed_killed_error_attach_no_builtin_error() {
    for status in [TaskStatus::Failed, TaskStatus::Killed, TaskStatus::Error] {
        let s = TaskState::Running { since_ms: 0 }.apply_status(status, 5, None);
        match s {
            TaskState::Failed { builtin_error, .. } => assert_eq!(builtin_error, None),
            other => panic!("expected Failed for {status:?}, got {other:?}"),
        }
    }
}

#[test]
fn execution_lost_attaches_node_lost() {
    let s = TaskState::execution_lost(99);
    assert!(s.is_terminal());
    match s {
        TaskState::Lost { builtin_error, .. } => {
            assert_eq!(builtin_error, BuiltinError::NodeLost)
        }
        _ => panic!("expected Lost"),
    }
}

#[test]
fn finished_is_terminal_and_fetches_logs() {
    let s = TaskState::Running { since_ms: 0 }.apply_status(TaskStatus::Finished, 5, Some(0));
    assert!(s.is_terminal());
    assert!(s.should_fetch_logs());
}
