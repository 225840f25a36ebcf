//! Domain Layer
//!
//! The core of pacsmith - pure logic without I/O dependencies.
//!
//! ## Structure
//!
//! - `entities/` - Rows and derived artifacts (Proxy, RoutingEntity, PacArtifact)
//! - `value_objects/` - Immutable value types (EntityKind, RoutingMode, RecordId)
//! - `services/` - PAC compiler and artifact layout
//! - `policies/` - Input rules enforced before any store mutation
//! - `ports/` - Interface definitions for infrastructure
//!
//! ## Design Principles
//!
//! 1. **No I/O** - This layer never touches the file system or the store directly
//! 2. **Pure Functions** - Services are stateless and testable
//! 3. **Ports & Adapters** - All I/O goes through trait-defined ports

pub mod entities;
pub mod policies;
pub mod ports;
pub mod services;
pub mod value_objects;
