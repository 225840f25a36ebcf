//! Application Layer
//!
//! Use cases that orchestrate the business flow.
//! This layer:
//! - Depends on Domain layer (entities, services, ports)
//! - Does NOT contain business rules (those are in Domain)
//! - Coordinates the record store with the PAC artifact tree
//!
//! ## Use Cases
//!
//! - `EntityService` - OU/user create, update, delete with artifact sync
//! - `ProxyService` - proxy rows and regeneration of dependent artifacts
//! - `SettingsService` - the stored application settings document
//! - `PacSynchronizer` - write/remove/check/prune of PAC artifacts

pub mod entity;
pub mod proxy;
pub mod settings;
pub mod sync;

#[cfg(test)]
pub(crate) mod test_support;

pub use entity::{EntityPayload, EntityService, ValidPayload};
pub use proxy::{ProxyPayload, ProxyService};
pub use settings::SettingsService;
pub use sync::{
    ArtifactCheck, ArtifactState, CheckReport, PacSynchronizer, RegenerateFailure,
    RegenerateReport,
};

use crate::domain::ports::StoreError;
use crate::domain::value_objects::RecordKind;
use crate::error::PacError;

/// Map constraint failures from a store mutation onto the caller-facing
/// taxonomy; anything else stays an internal store error
pub(crate) fn translate_store_error(err: StoreError) -> PacError {
    match err {
        StoreError::UniqueViolation { kind, name } => PacError::DuplicateName { kind, name },
        StoreError::ForeignKeyViolation {
            target, reference, ..
        } => PacError::UnknownReference {
            target,
            name: reference,
        },
        StoreError::MissingRow { kind, id } => PacError::NotFound { kind, id },
        StoreError::RestrictViolation {
            kind: RecordKind::Proxy,
            name,
            referenced_by,
        } => PacError::ProxyInUse {
            name,
            referenced_by,
        },
        other => PacError::Store(other),
    }
}
