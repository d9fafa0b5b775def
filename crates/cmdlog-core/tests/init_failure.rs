//! The shared logger stays usable when another global subscriber was
//! installed first. This needs a fresh process, so it lives in its own file.
//!
//! The "error initializing logger" warning is written to stderr while the
//! shared logger is being built, before any sink can be swapped in, so only
//! the usability of the returned handle is checked here.

use cmdlog_core as log;

#[test]
fn test_logger_usable_when_global_subscriber_taken() {
    std::env::remove_var("LOG_FORMAT");
    tracing::subscriber::set_global_default(tracing_subscriber::registry()).unwrap();

    let output = log::capture_output(|| log::logger().info("usable"));
    assert_eq!(output, "\x1b[32mINFO \x1b[0m: usable\n");

    // The bridge is not installed, so tracing events bypass the facade.
    let output = log::capture_output(|| tracing::info!("elsewhere"));
    assert_eq!(output, "");

    log::set_level("error").unwrap();
    let output = log::capture_output(|| {
        log::logger().warn("hidden");
        log::logger().error("shown");
    });
    assert_eq!(output, "\x1b[31mERROR\x1b[0m: shown\n");
}
