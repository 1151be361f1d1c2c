//! Domain Layer
//!
//! The core of mapport: map scanning and zone source generation.
//!
//! ## Structure
//!
//! - `entities/` - Core domain entities (AssetItem, ManifestProject, PipelineQueue)
//! - `value_objects/` - Immutable value types (ItemName, LogicalPath, Operation)
//! - `services/` - Domain services (AssetScanner, ManifestGenerator)
//! - `ports/` - Interface definitions for infrastructure
//!
//! ## Design Principles
//!
//! 1. **Ports & Adapters** - All I/O goes through trait-defined ports
//! 2. **Pure generation** - The generator describes writes, it never performs them

pub mod entities;
pub mod ports;
pub mod services;
pub mod value_objects;
