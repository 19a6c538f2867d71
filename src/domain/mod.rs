//! Domain Layer
//!
//! The core of packignore - the exclusion set and the algorithms that consume
//! it, without I/O dependencies.
//!
//! ## Structure
//!
//! - `entities/` - `ExclusionSet`, the prefix tree of excluded paths
//! - `value_objects/` - Immutable value types (PathSyntax, TriState, TreeEntry)
//! - `services/` - Tri-state derivation and pruned enumeration
//! - `ports/` - Interface definitions for infrastructure
//!
//! ## Design Principles
//!
//! 1. **No I/O** - This layer only reads directories through the `TreeSource` port
//! 2. **Pure Functions** - Services are stateless and testable
//! 3. **Ports & Adapters** - All I/O goes through trait-defined ports

pub mod entities;
pub mod ports;
pub mod services;
pub mod value_objects;
