//! OU and user command handlers
//!
//! Both kinds share one handler; the kind picks the table and the
//! artifact location.

use anyhow::Result;
use serde_json::{json, Value};

use pacsmith::application::EntityPayload;
use pacsmith::domain::services::public_url;
use pacsmith::domain::value_objects::EntityKind;
use pacsmith::presentation::cli::{EntityCommand, EntityFields};
use pacsmith::presentation::output::{entity_json, format_entity_detail, format_entity_table};
use pacsmith::presentation::{AppContext, Printer};

fn payload(name: String, fields: EntityFields) -> EntityPayload {
    EntityPayload {
        name,
        description: fields.description,
        color: fields.color,
        proxy: fields.proxy,
        mode: fields.mode,
        domains: fields.domains,
        bypass_domains: fields.bypass_domains,
        ou: fields.ou,
    }
}

fn url_for(ctx: &AppContext, kind: EntityKind, name: &str) -> Option<String> {
    ctx.public_url().map(|base| public_url(base, kind, name))
}

/// Execute a `pacsmith ou` / `pacsmith user` subcommand
pub fn cmd_entity(
    ctx: &AppContext,
    kind: EntityKind,
    action: EntityCommand,
    printer: Printer,
) -> Result<()> {
    let service = ctx.entities(kind);
    let layout = ctx.sync.layout();

    match action {
        EntityCommand::Add { name, fields } => {
            let id = service.create(payload(name, fields))?;
            let stored = service.get(id)?;
            report_written(ctx, kind, &stored.name, id.get(), "created", printer);
        }
        EntityCommand::Update {
            name,
            rename,
            fields,
        } => {
            let existing = service.find(&name)?;
            let new_name = rename.unwrap_or(name);
            service.update(existing.id, payload(new_name, fields))?;
            let stored = service.get(existing.id)?;
            report_written(ctx, kind, &stored.name, existing.id.get(), "updated", printer);
        }
        EntityCommand::Remove { name } => {
            let existing = service.find(&name)?;
            service.delete(existing.id)?;
            printer.success(
                &format!("{} \"{name}\" removed", kind.display_name()),
                json!({ "status": "ok", "kind": kind, "id": existing.id, "name": name }),
            );
        }
        EntityCommand::List => {
            let entities = service.list()?;
            let value = Value::Array(
                entities
                    .iter()
                    .map(|entity| {
                        let url = url_for(ctx, kind, &entity.name);
                        entity_json(
                            entity,
                            &layout.artifact_path(kind, &entity.name),
                            url.as_deref(),
                        )
                    })
                    .collect(),
            );
            printer.emit(format_entity_table(&entities), value);
        }
        EntityCommand::Show { name } => {
            let entity = service.find(&name)?;
            let path = layout.artifact_path(kind, &entity.name);
            let url = url_for(ctx, kind, &entity.name);
            printer.emit(
                format_entity_detail(&entity, &path, url.as_deref()),
                entity_json(&entity, &path, url.as_deref()),
            );
        }
    }
    Ok(())
}

fn report_written(
    ctx: &AppContext,
    kind: EntityKind,
    name: &str,
    id: u64,
    verb: &str,
    printer: Printer,
) {
    let path = ctx.sync.layout().artifact_path(kind, name);
    let url = url_for(ctx, kind, name);

    let mut text = format!(
        "{} {} \"{name}\" {verb}\n  {} {}\n",
        printer.icons().check,
        kind.display_name(),
        printer.icons().write,
        path.display()
    );
    if let Some(url) = &url {
        text.push_str(&format!("  {} {url}\n", printer.icons().write));
    }
    printer.emit(
        text,
        json!({
            "status": "ok",
            "kind": kind,
            "id": id,
            "name": name,
            "pacFile": path.display().to_string(),
            "pacUrl": url,
        }),
    );
}
