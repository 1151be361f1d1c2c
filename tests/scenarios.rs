//! Scenario tests for mapport.
//!
//! Scenarios test complete user workflows end-to-end.
//!
//! Run with: cargo test --test scenarios
#![cfg(unix)]

mod common;

#[path = "scenarios/port_a_map.rs"]
mod port_a_map;
