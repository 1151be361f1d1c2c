//! Property tests for mapport.
//!
//! Properties use randomized input generation to explore edge cases and
//! protect invariants like "never panics" and "same scan, same bytes".
//!
//! Run with: `cargo test --test properties`

#[path = "properties/logical_names.rs"]
mod logical_names;

#[path = "properties/manifest.rs"]
mod manifest;
