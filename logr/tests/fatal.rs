use std::process::{Command, Output};

use logr::{Level, logger_config};

const CHILD_ENV: &str = "LOGR_FATAL_CHILD";

/// Runs `test_name` alone in a child copy of this test binary.
fn run_child(test_name: &str) -> Output {
    Command::new(std::env::current_exe().unwrap())
        .args(["--exact", test_name, "--nocapture", "--test-threads=1"])
        .env(CHILD_ENV, test_name)
        .env_remove("LOG_LEVEL")
        .env_remove("LOG_COLOR")
        .output()
        .unwrap()
}

fn is_child(test_name: &str) -> bool {
    std::env::var(CHILD_ENV).is_ok_and(|name| name == test_name)
}

#[test]
fn test_fatalf_bypasses_threshold_and_exits() {
    if is_child("test_fatalf_bypasses_threshold_and_exits") {
        let logger = logger_config()
            .with_level(Level::Error)
            .build()
            .with_context([("request", "abc")]);
        logger.debug("hidden");
        logr::fatalf!(logger: logger, "boom {}", 7);
    }
    let output = run_child("test_fatalf_bypasses_threshold_and_exits");
    assert_eq!(output.status.code(), Some(1));
    assert_eq!(String::from_utf8_lossy(&output.stderr), "level=FATAL msg=boom 7\n");
}

#[test]
fn test_default_fatal_exits() {
    if is_child("test_default_fatal_exits") {
        logr::fatal("disk gone");
    }
    let output = run_child("test_default_fatal_exits");
    assert_eq!(output.status.code(), Some(1));
    assert_eq!(String::from_utf8_lossy(&output.stderr), "level=FATAL msg=disk gone\n");
}
