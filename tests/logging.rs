use tracing::Level;

// Installs the global subscriber, so this file holds a single test.
#[test]
fn test_rust_log_debug_enables_debug_output() {
    std::env::set_var("RUST_LOG", "debug");
    taktische_zeichen::init_logging().unwrap();

    assert!(tracing::enabled!(
        target: "taktische_zeichen_core::placement",
        Level::DEBUG
    ));
    assert!(tracing::enabled!(
        target: "taktische_zeichen_svg::place",
        Level::DEBUG
    ));
    assert!(!tracing::enabled!(
        target: "taktische_zeichen_core::padding",
        Level::TRACE
    ));
}
