use search_hints_lib::shared::utils::logger::{init_logger, init_tracing};

// Both backends are process-global, so this file holds a single test
#[test]
fn test_env_logger_installs_alongside_tracing_subscriber() {
    init_tracing().expect("tracing subscriber should install");
    init_logger().expect("env_logger should still own the log facade");

    assert!(log::log_enabled!(
        target: "search_hints_lib::modules::search",
        log::Level::Debug
    ));
    assert!(!log::log_enabled!(target: "tokio::runtime", log::Level::Info));

    // Repeated initialization is a no-op
    assert!(init_logger().is_ok());
}
