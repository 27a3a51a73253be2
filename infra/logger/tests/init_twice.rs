use policy_logger::{LevelFilter, Logger, LoggerError, LoggerErrorExt};
use tempfile::tempdir;

#[test]
fn file_logger_after_console_logger_is_rejected() {
    let _console = Logger::builder()
        .name("policy-page")
        .level(LevelFilter::INFO)
        .init()
        .expect("first init should succeed");

    let tmp_dir = tempdir().expect("temp dir");
    let log_dir = tmp_dir.path().join("logs");
    let err = Logger::builder()
        .name("policy-page")
        .console(false)
        .path(&log_dir)
        .init()
        .context("Failed to initialize logging")
        .expect_err("a second global subscriber must be refused");

    assert!(matches!(err, LoggerError::Subscriber { context: Some(_), .. }), "got {err:?}");
    let message = err.to_string();
    assert!(message.starts_with("Tracing subscriber error (Failed to initialize logging)"), "got {message}");
    assert!(log_dir.is_dir(), "the log directory is prepared before the subscriber is installed");
}
