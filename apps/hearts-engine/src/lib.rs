#![deny(clippy::wildcard_imports)]
#![cfg_attr(test, allow(clippy::wildcard_imports))]

pub mod config;
pub mod domain;
pub mod errors;
pub mod services;


// Re-exports for public API
pub use config::{ConfigError, EngineConfig};
pub use errors::domain::{DomainError, ValidationKind};
pub use services::game_flow::{GameFlow, GameFlowError, GameOutcome, TablePort};

// Auto-initialize logging for unit tests
#[cfg(test)]
#[ctor::ctor]
fn init_test_logging() {
    test_bootstrap::logging::init();
}
