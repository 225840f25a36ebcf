//! Value Objects
//!
//! Immutable types identified by their value rather than by a row id.

mod entity_kind;
mod hash;
mod record_id;
mod routing_mode;

pub use entity_kind::{EntityKind, RecordKind};
pub use hash::ContentHash;
pub use record_id::RecordId;
pub use routing_mode::RoutingMode;
