//! Build Use Case Module
//!
//! Builds zone sources into loadable map bundles with the IW4x ZoneBuilder.

mod options;
mod use_case;


pub use options::BuildOptions;
pub use use_case::BuildUseCase;
