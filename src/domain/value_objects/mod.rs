//! Domain Value Objects
//!
//! Immutable value types that represent domain concepts.

mod category;
mod item_name;
mod logical_path;
mod operation;
mod required_script;

pub use category::MapCategory;
pub use item_name::ItemName;
pub use logical_path::{LogicalPath, PathError};
pub use operation::Operation;
pub use required_script::RequiredScript;
