//! Domain Services
//!
//! Business logic that operates on domain entities.
//! - `scanner` - reads a data directory through the `FileSystem` port
//! - `generator` - pure manifest generation
//! - `templates`, `arena`, `arguments` - fixed text and tool arguments

pub mod arena;
pub mod arguments;
pub mod generator;
pub mod scanner;
pub mod templates;

pub use arena::render_arena;
pub use arguments::{expand_arguments, ArgumentVars};
pub use generator::ManifestGenerator;
pub use scanner::AssetScanner;
pub use templates::TemplateSet;
