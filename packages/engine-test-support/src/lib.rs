//! Engine test support utilities
//!
//! Shared by the integration test binaries of the workspace crates.

pub mod test_logging;
