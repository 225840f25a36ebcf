//! Settings command handlers

use anyhow::Result;
use serde_json::json;

use pacsmith::presentation::cli::SettingsCommand;
use pacsmith::presentation::output::format_settings;
use pacsmith::presentation::{AppContext, Printer};

/// Execute a `pacsmith settings` subcommand
pub fn cmd_settings(ctx: &AppContext, action: SettingsCommand, printer: Printer) -> Result<()> {
    let service = ctx.settings();

    match action {
        SettingsCommand::Show => {
            let settings = service.load()?;
            printer.emit(format_settings(&settings), json!(settings));
        }
        SettingsCommand::Set {
            session_timeout,
            pac_directory,
            default_mode,
        } => {
            let mut settings = service.load()?;
            if let Some(minutes) = session_timeout {
                settings.session_timeout_minutes = minutes;
            }
            if let Some(dir) = pac_directory {
                settings.pac_directory_path = dir;
            }
            if let Some(mode) = default_mode {
                settings.default_proxy_mode = mode;
            }
            service.save(&settings)?;

            let text = format!(
                "{} Settings saved\n{}",
                printer.icons().check,
                format_settings(&settings)
            );
            printer.emit(text, json!(settings));
        }
    }
    Ok(())
}
