//! pacsmith CLI - PAC file generator for OU and user routing policies
//!
//! Usage: pacsmith <COMMAND>
//!
//! Commands:
//!   proxy     Manage upstream proxy servers
//!   ou        Manage organizational units
//!   user      Manage users
//!   pac       Inspect and maintain generated PAC files
//!   settings  Show or change application settings

use anyhow::Result;
use clap::Parser;

use pacsmith::config::load_effective;
use pacsmith::domain::value_objects::EntityKind;
use pacsmith::presentation::cli::{Cli, Commands};
use pacsmith::presentation::{logging, AppContext, PathOverrides, Printer};
use pacsmith::PacError;

mod commands;

fn main() {
    let cli = Cli::parse();
    let printer = Printer::detect(cli.json);

    if let Err(err) = run(cli, printer) {
        match err.downcast_ref::<PacError>() {
            Some(pac_err) => {
                printer.error(pac_err);
                std::process::exit(pac_err.exit_code());
            }
            None => {
                eprintln!("{} Error: {err:#}", printer.icons().cross);
                std::process::exit(1);
            }
        }
    }
}

fn run(cli: Cli, printer: Printer) -> Result<()> {
    let (config, warnings) = load_effective(cli.config.as_deref())?;
    logging::init(&config.logging, cli.verbose);
    for warning in &warnings {
        eprintln!("{} {warning}", printer.icons().warn);
    }

    let overrides = PathOverrides {
        store: cli.store,
        pac_dir: cli.pac_dir,
    };
    let ctx = AppContext::open(config, &overrides)?;

    match cli.command {
        Commands::Proxy { action } => commands::proxy::cmd_proxy(&ctx, action, printer),
        Commands::Ou { action } => {
            commands::entity::cmd_entity(&ctx, EntityKind::Ou, action, printer)
        }
        Commands::User { action } => {
            commands::entity::cmd_entity(&ctx, EntityKind::User, action, printer)
        }
        Commands::Pac { action } => commands::pac::cmd_pac(&ctx, action, printer),
        Commands::Settings { action } => {
            commands::settings::cmd_settings(&ctx, action, printer)
        }
    }
}
