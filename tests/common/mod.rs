//! Common test utilities for mapport CLI and scenario tests.
//!
//! This module provides:
//! - `TestEnv`: Isolated game installs and config home in temp directories
//! - Fake tool scripts standing in for the converter and the build tool

pub mod env;

pub use env::*;
