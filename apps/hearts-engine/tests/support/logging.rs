//! Test logging for integration test binaries.
//!
//! Levels follow `TEST_LOG`, then `RUST_LOG`, then `warn`:
//!
//! ```bash
//! TEST_LOG=debug cargo test -p hearts-engine --test game_flow_props
//! ```

/// Runs once per integration test binary, before any test.
#[ctor::ctor]
fn _auto_init_for_integration_tests() {
    engine_test_support::test_logging::init();
}
