//! Domain Services
//!
//! Stateless logic operating on domain entities:
//! - `pac_compiler` - entity + proxy → PAC script text
//! - `artifact_layout` - `(kind, name)` → artifact paths and URLs

pub mod artifact_layout;
pub mod pac_compiler;

pub use artifact_layout::{public_url, ArtifactLayout};
pub use pac_compiler::compile;
