//! External tool processes
//!
//! Implements the ToolInvoker port with `std::process`.

mod invoker;

pub use invoker::ProcessToolInvoker;
