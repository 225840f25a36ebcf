//! Presentation Layer
//!
//! This layer handles:
//! - CLI argument parsing (via clap)
//! - Wiring services over the TOML store and the local file system
//! - Output formatting (text/JSON) and diagnostic logging
//!
//! ## Structure
//!
//! - `cli` - Command-line definition
//! - `factory` - Builds an [`AppContext`](factory::AppContext) (dependency injection)
//! - `output` - Text and JSON rendering
//! - `logging` - tracing subscriber setup

pub mod cli;
pub mod factory;
pub mod logging;
pub mod output;

pub use factory::{AppContext, PathOverrides};
pub use output::{OutputFormat, Printer};
