use super::{rotate_log_if_needed, MAX_LOG_SIZE};
use std::io::Write;

fn write_bytes(path: &std::path::Path, size: u64) {
    let mut f = std::fs::File::create(path).unwrap();
    let buf = vec![b'x'; size as usize];
    f.write_all(&buf).unwrap();
}

#[test]
fn rotate_skips_small_file() {
    let dir = tempfile::tempdir().unwrap();
    let log = dir.path().join("daemon.log");
    write_bytes(&log, 1024);

    rotate_log_if_needed(&log);

    assert!(log.exists(), "small log should not be rotated");
    assert!(!dir.path().join("daemon.log.1").exists());
}

#[test]
fn rotate_moves_large_file() {
    let dir = tempfile::tempdir().unwrap();
    let log = dir.path().join("daemon.log");
    write_bytes(&log, MAX_LOG_SIZE + 1);

    rotate_log_if_needed(&log);

    assert!(!log.exists(), "rotated log should be moved aside");
    assert!(dir.path().join("daemon.log.1").exists());
}

#[test]
fn rotate_missing_file_is_a_no_op() {
    let dir = tempfile::tempdir().unwrap();
    let log = dir.path().join("daemon.log");
    rotate_log_if_needed(&log);
    assert!(!log.exists());
}
