//! Export Use Case Module
//!
//! Extracts IW3 maps with the converter, then generates their zone sources.

mod options;
mod use_case;


pub use options::ExportOptions;
pub use use_case::ExportUseCase;
