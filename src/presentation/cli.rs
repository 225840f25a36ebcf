//! CLI Argument Parsing
//!
//! This module defines the CLI interface using clap.
//!
//! ## Design Notes
//!
//! - Global flags (--config, --store, --pac-dir, --json, --verbose) are inherited by all subcommands
//! - Entities and proxies are addressed by name; `update` takes the full replacement payload

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};

use crate::domain::value_objects::{EntityKind, RoutingMode};

/// pacsmith - PAC file generator for OU and user routing policies
#[derive(Parser, Debug)]
#[command(name = "pacsmith")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Configuration file (default: ./pacsmith.toml, then the user config dir)
    #[arg(long, global = true, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Record store file
    #[arg(long, global = true, value_name = "PATH")]
    pub store: Option<PathBuf>,

    /// Directory PAC files are written to
    #[arg(long = "pac-dir", global = true, value_name = "PATH")]
    pub pac_dir: Option<PathBuf>,

    /// Output format for scripting
    #[arg(long, global = true)]
    pub json: bool,

    /// Verbosity level (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Manage upstream proxy servers
    Proxy {
        #[command(subcommand)]
        action: ProxyCommand,
    },

    /// Manage organizational units
    Ou {
        #[command(subcommand)]
        action: EntityCommand,
    },

    /// Manage users
    User {
        #[command(subcommand)]
        action: EntityCommand,
    },

    /// Inspect and maintain generated PAC files
    Pac {
        #[command(subcommand)]
        action: PacCommand,
    },

    /// Show or change application settings
    Settings {
        #[command(subcommand)]
        action: SettingsCommand,
    },
}

#[derive(Args, Debug, Clone)]
pub struct ProxyFields {
    /// http, https, socks4 or socks5
    #[arg(long)]
    pub protocol: String,

    /// Proxy host name or IP address
    #[arg(long)]
    pub host: String,

    /// Proxy port (1-65535)
    #[arg(long)]
    pub port: u32,

    #[arg(long)]
    pub username: Option<String>,

    /// Omit on update to keep the stored password
    #[arg(long)]
    pub password: Option<String>,
}

#[derive(Subcommand, Debug)]
pub enum ProxyCommand {
    /// Add a proxy server
    Add {
        name: String,
        #[command(flatten)]
        fields: ProxyFields,
    },

    /// Replace a proxy server's settings and regenerate dependent PAC files
    Update {
        name: String,
        /// New name for the proxy
        #[arg(long)]
        rename: Option<String>,
        #[command(flatten)]
        fields: ProxyFields,
    },

    /// Remove a proxy server that nothing references
    Remove { name: String },

    /// List proxy servers
    List,

    /// Show one proxy server
    Show { name: String },
}

#[derive(Args, Debug, Clone)]
pub struct EntityFields {
    /// Name of the proxy server to route through
    #[arg(long)]
    pub proxy: Option<String>,

    /// Routing mode (default: the configured default mode)
    #[arg(long, value_enum)]
    pub mode: Option<RoutingMode>,

    /// Host pattern routed through the proxy in direct-except mode (repeatable)
    #[arg(long = "domain", value_name = "PATTERN")]
    pub domains: Vec<String>,

    /// Host pattern sent direct in proxy-all mode (repeatable)
    #[arg(long = "bypass", value_name = "PATTERN")]
    pub bypass_domains: Vec<String>,

    #[arg(long)]
    pub description: Option<String>,

    /// Display color (default: #3b82f6)
    #[arg(long)]
    pub color: Option<String>,

    /// OU the user belongs to (users only)
    #[arg(long)]
    pub ou: Option<String>,
}

#[derive(Subcommand, Debug)]
pub enum EntityCommand {
    /// Create an entry and write its PAC file
    Add {
        name: String,
        #[command(flatten)]
        fields: EntityFields,
    },

    /// Replace an entry and rewrite its PAC file
    Update {
        name: String,
        /// New name; the PAC file moves with it
        #[arg(long)]
        rename: Option<String>,
        #[command(flatten)]
        fields: EntityFields,
    },

    /// Delete an entry and its PAC file
    Remove { name: String },

    /// List entries
    List,

    /// Show one entry
    Show { name: String },
}

#[derive(Subcommand, Debug)]
pub enum PacCommand {
    /// Report the state of the PAC directory
    Status,

    /// Create the PAC directory
    Init,

    /// Rewrite every PAC file from the stored rows
    Regenerate,

    /// Compare PAC files on disk with the stored rows
    Check {
        /// Show a unified diff for stale files
        #[arg(long)]
        diff: bool,
    },

    /// Remove PAC directories that no row owns
    Prune,

    /// Print the PAC script for an entry without writing it
    Render {
        #[arg(value_enum)]
        kind: EntityKind,
        name: String,
    },
}

#[derive(Subcommand, Debug)]
pub enum SettingsCommand {
    /// Show application settings
    Show,

    /// Change application settings
    Set {
        /// Session timeout in minutes
        #[arg(long)]
        session_timeout: Option<u32>,

        /// Default PAC directory
        #[arg(long, value_name = "PATH")]
        pac_directory: Option<PathBuf>,

        /// Routing mode for new entries that do not name one
        #[arg(long, value_enum)]
        default_mode: Option<RoutingMode>,
    },
}
