//! Shared utilities for the Canopy workspace.

pub mod logging;

pub use logging::{init_test_tracing, init_tracing, LogFormat};
