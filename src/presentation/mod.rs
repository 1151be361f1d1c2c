//! Presentation Layer
//!
//! This layer handles:
//! - Creating use cases with infrastructure dependencies
//! - Output formatting (text/JSON)
//!
//! ## Structure
//!
//! - `factory` - Creates use cases with proper dependencies (dependency injection)
//! - `output` - Event and listing rendering
//!
//! ## Usage
//!
//! ```ignore
//! use mapport::presentation::factory;
//!
//! let use_case = factory::create_export_use_case(&config)?;
//! let report = use_case.execute(items, &options, &sink)?;
//! ```

pub mod factory;
pub mod output;

pub use factory::{
    create_build_use_case, create_export_use_case, create_launch_use_case, create_package_use_case,
    create_paths, create_regenerate_use_case,
};
pub use output::{EventPrinter, OutputFormat};
