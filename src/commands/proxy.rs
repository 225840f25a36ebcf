//! Proxy command handlers

use anyhow::Result;
use serde_json::{json, Value};

use pacsmith::application::ProxyPayload;
use pacsmith::presentation::cli::{ProxyCommand, ProxyFields};
use pacsmith::presentation::output::{
    format_proxy_detail, format_proxy_table, format_regenerate, proxy_json,
};
use pacsmith::presentation::{AppContext, Printer};

fn payload(name: String, fields: ProxyFields) -> ProxyPayload {
    ProxyPayload {
        name,
        protocol: fields.protocol,
        host: fields.host,
        port: fields.port,
        username: fields.username,
        password: fields.password,
    }
}

/// Execute a `pacsmith proxy` subcommand
pub fn cmd_proxy(ctx: &AppContext, action: ProxyCommand, printer: Printer) -> Result<()> {
    let service = ctx.proxies();

    match action {
        ProxyCommand::Add { name, fields } => {
            let id = service.create(payload(name.clone(), fields))?;
            printer.success(
                &format!("Proxy \"{name}\" added"),
                json!({ "status": "ok", "id": id, "name": name }),
            );
        }
        ProxyCommand::Update {
            name,
            rename,
            fields,
        } => {
            let existing = service.find(&name)?;
            let new_name = rename.unwrap_or(name);
            let report = service.update(existing.id, payload(new_name.clone(), fields))?;

            let text = format!(
                "{} Proxy \"{new_name}\" updated\n{}",
                printer.icons().check,
                format_regenerate(&report, printer.icons())
            );
            printer.emit(
                text,
                json!({
                    "status": if report.is_success() { "ok" } else { "partial" },
                    "id": existing.id,
                    "name": new_name,
                    "regenerated": report,
                }),
            );
            if !report.is_success() {
                std::process::exit(5);
            }
        }
        ProxyCommand::Remove { name } => {
            let existing = service.find(&name)?;
            service.delete(existing.id)?;
            printer.success(
                &format!("Proxy \"{name}\" removed"),
                json!({ "status": "ok", "id": existing.id, "name": name }),
            );
        }
        ProxyCommand::List => {
            let proxies = service.list()?;
            let value = Value::Array(proxies.iter().map(proxy_json).collect());
            printer.emit(format_proxy_table(&proxies), value);
        }
        ProxyCommand::Show { name } => {
            let proxy = service.find(&name)?;
            printer.emit(format_proxy_detail(&proxy), proxy_json(&proxy));
        }
    }
    Ok(())
}
