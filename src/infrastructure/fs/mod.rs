//! File System Implementations
//!
//! Concrete implementations of the FileSystem port.

mod home;
mod local;

pub use home::{mapport_config_dir, CONFIG_HOME_VAR};
pub use local::{atomic_write, LocalFs};
