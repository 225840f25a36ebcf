//! Error types for pacsmith
//!
//! Uses `thiserror` for library errors. The binary maps these to exit codes
//! through [`PacError::exit_code`].

use std::path::PathBuf;
use thiserror::Error;

use crate::domain::ports::{FsError, StoreError};
use crate::domain::value_objects::{EntityKind, RecordId, RecordKind};

/// Result type alias for pacsmith operations
pub type PacResult<T> = Result<T, PacError>;

/// Main error type for pacsmith operations
#[derive(Error, Debug)]
pub enum PacError {
    /// Bad input, rejected before any store mutation
    #[error("{message}")]
    Validation { message: String },

    /// A row of the same kind already carries this name
    #[error("{} with the name \"{name}\" already exists", kind.article_name())]
    DuplicateName { kind: RecordKind, name: String },

    /// No row with the given id
    #[error("{} with id {id} not found", kind.display_name())]
    NotFound { kind: RecordKind, id: RecordId },

    /// A name reference in the payload points at a missing row
    #[error("{} \"{name}\" does not exist", target.display_name())]
    UnknownReference { target: RecordKind, name: String },

    /// The entity row disappeared before its artifact could be generated
    #[error("{} \"{name}\" not found", kind.display_name())]
    EntityNotFound { kind: EntityKind, name: String },

    /// The entity row has no proxy name
    #[error(
        "no proxy server is assigned to the {} \"{name}\"; please assign a proxy",
        kind.label()
    )]
    ProxyNotAssigned { kind: EntityKind, name: String },

    /// The entity names a proxy row that does not exist
    #[error(
        "the proxy server \"{proxy}\" assigned to {} \"{name}\" was not found",
        kind.label()
    )]
    ProxyNotFound {
        kind: EntityKind,
        name: String,
        proxy: String,
    },

    /// Proxy protocol has no PAC directive
    #[error("unsupported proxy protocol: {protocol}")]
    UnsupportedProtocol { protocol: String },

    /// Proxy delete rejected because entities still reference it
    #[error("proxy \"{name}\" is still assigned to: {}", referenced_by.join(", "))]
    ProxyInUse {
        name: String,
        referenced_by: Vec<String>,
    },

    /// A filesystem step of artifact synchronization failed
    #[error("PAC synchronization failed for {}: {source}", path.display())]
    Synchronization {
        path: PathBuf,
        #[source]
        source: FsError,
    },

    /// Configuration file could not be read or parsed
    #[error("invalid configuration in {}: {message}", file.display())]
    Config { file: PathBuf, message: String },

    /// Anything the store reports that the services do not translate
    #[error("record store error: {0}")]
    Store(#[from] StoreError),
}

impl PacError {
    /// Build a validation error from any message
    pub fn validation(message: impl Into<String>) -> Self {
        PacError::Validation {
            message: message.into(),
        }
    }

    /// Wrap a filesystem error raised while synchronizing an artifact
    pub fn synchronization(source: FsError) -> Self {
        PacError::Synchronization {
            path: source.path().to_path_buf(),
            source,
        }
    }

    /// Process exit code for the CLI
    pub fn exit_code(&self) -> i32 {
        match self {
            PacError::Validation { .. } | PacError::Config { .. } => 2,
            PacError::NotFound { .. }
            | PacError::UnknownReference { .. }
            | PacError::EntityNotFound { .. } => 3,
            PacError::DuplicateName { .. } | PacError::ProxyInUse { .. } => 4,
            PacError::Synchronization { .. }
            | PacError::ProxyNotAssigned { .. }
            | PacError::ProxyNotFound { .. }
            | PacError::UnsupportedProtocol { .. } => 5,
            PacError::Store(_) => 1,
        }
    }

    /// Short machine-readable error code, used by `--json` output
    pub fn code(&self) -> &'static str {
        match self {
            PacError::Validation { .. } => "validation_error",
            PacError::DuplicateName { .. } => "duplicate_name",
            PacError::NotFound { .. } | PacError::EntityNotFound { .. } => "not_found",
            PacError::UnknownReference { .. } => "unknown_reference",
            PacError::ProxyNotAssigned { .. } => "proxy_not_assigned",
            PacError::ProxyNotFound { .. } => "proxy_not_found",
            PacError::UnsupportedProtocol { .. } => "unsupported_protocol",
            PacError::ProxyInUse { .. } => "proxy_in_use",
            PacError::Synchronization { .. } => "synchronization_failed",
            PacError::Config { .. } => "config_error",
            PacError::Store(_) => "internal_error",
        }
    }
}
