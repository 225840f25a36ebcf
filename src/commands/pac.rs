//! PAC maintenance command handlers

use anyhow::Result;
use serde_json::json;

use pacsmith::presentation::cli::PacCommand;
use pacsmith::presentation::output::{format_check, format_dir_status, format_regenerate};
use pacsmith::presentation::{AppContext, Printer};

/// Execute a `pacsmith pac` subcommand
pub fn cmd_pac(ctx: &AppContext, action: PacCommand, printer: Printer) -> Result<()> {
    let sync = &ctx.sync;
    let icons = printer.icons();

    match action {
        PacCommand::Status => {
            let status = sync.directory_status()?;
            printer.emit(
                format_dir_status(ctx.pac_dir(), status, icons),
                json!({
                    "path": ctx.pac_dir().display().to_string(),
                    "status": status.as_str(),
                    "publicUrl": ctx.public_url(),
                }),
            );
        }
        PacCommand::Init => {
            let status = sync.ensure_directory()?;
            printer.emit(
                format_dir_status(ctx.pac_dir(), status, icons),
                json!({
                    "path": ctx.pac_dir().display().to_string(),
                    "status": status.as_str(),
                }),
            );
        }
        PacCommand::Regenerate => {
            let report = sync.regenerate_all()?;
            printer.emit(format_regenerate(&report, icons), json!(report));
            if !report.is_success() {
                std::process::exit(5);
            }
        }
        PacCommand::Check { diff } => {
            let report = sync.check()?;
            printer.emit(format_check(&report, icons, diff), json!(report));
            if !report.is_clean() {
                std::process::exit(1);
            }
        }
        PacCommand::Prune => {
            let removed = sync.prune_orphans()?;
            let mut text = format!(
                "{} Removed {} orphan PAC director{}\n",
                icons.check,
                removed.len(),
                if removed.len() == 1 { "y" } else { "ies" }
            );
            for path in &removed {
                text.push_str(&format!("  {} {}\n", icons.trash, path.display()));
            }
            printer.emit(text, json!({ "status": "ok", "removed": removed }));
        }
        PacCommand::Render { kind, name } => {
            let artifact = sync.render(kind, &name)?;
            printer.emit(
                artifact.content(),
                json!({
                    "kind": kind,
                    "name": name,
                    "path": artifact.path().display().to_string(),
                    "sha256": artifact.hash().to_string(),
                    "content": artifact.content(),
                }),
            );
        }
    }
    Ok(())
}
