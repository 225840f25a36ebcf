//! PAC synchronization
//!
//! Compiles entity rows into PAC scripts and keeps the artifact tree in step
//! with the record store: write, remove, bulk regeneration, drift check and
//! orphan pruning.

mod report;
mod synchronizer;

pub use report::{
    ArtifactCheck, ArtifactState, CheckReport, RegenerateFailure, RegenerateReport,
};
pub use synchronizer::PacSynchronizer;
