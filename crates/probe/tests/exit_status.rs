// Exit status of the compiled have-poll binary

use std::process::Command;
use std::time::{Duration, Instant};

const HAVE_POLL: &str = env!("CARGO_BIN_EXE_have-poll");

/// Command with the log settings cleared, so the caller's shell cannot leak in
fn have_poll() -> Command {
    let mut cmd = Command::new(HAVE_POLL);
    cmd.env_remove("RUST_LOG").env_remove("HAVEPOLL_LOG_FORMAT");
    cmd
}

#[cfg(unix)]
#[test]
fn test_exits_zero_on_genuine_poll() {
    let started = Instant::now();
    let output = have_poll().output().expect("failed to spawn have-poll");

    assert_eq!(output.status.code(), Some(0));
    // Quiet on success with the default filter
    assert!(output.stdout.is_empty());
    assert!(output.stderr.is_empty());
    assert!(started.elapsed() < Duration::from_secs(10));
}

#[test]
fn test_exit_code_is_stable_across_runs() {
    let first = have_poll().env("RUST_LOG", "off").status().unwrap().code();
    for _ in 0..3 {
        assert_eq!(
            have_poll().env("RUST_LOG", "off").status().unwrap().code(),
            first
        );
    }
}

#[cfg(unix)]
#[test]
fn test_logging_does_not_change_verdict() {
    let output = have_poll()
        .env("RUST_LOG", "debug")
        .env("HAVEPOLL_LOG_FORMAT", "json")
        .output()
        .unwrap();

    assert_eq!(output.status.code(), Some(0));
    assert!(output.stdout.is_empty());
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("Poll facility looks genuine"));
    assert!(stderr.contains(havepoll_core::VERSION));
}
