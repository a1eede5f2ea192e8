use super::*;

#[test]
fn remove_is_idempotent_and_safe_on_unknown_entries() {
    let set = ReconciliationSet::new();
    let t = TaskId::new("e1:0");
    assert!(!set.remove(&t));
    set.insert(t.clone());
    assert!(set.contains(&t));
    assert!(set.remove(&t));
    assert!(!set.remove(&t));
    assert!(set.is_empty());
}

#[test]
fn snapshot_reflects_current_members() {
    let set = ReconciliationSet::new();
    set.insert(TaskId::new("e1:0"));
    set.insert(TaskId::new("e2:0"));
    assert_eq!(set.len(), 2);
    let snap = set.snapshot();
    assert_eq!(snap.len(), 2);
}
