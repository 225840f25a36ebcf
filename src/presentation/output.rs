//! Output Rendering
//!
//! Text for operators, JSON for scripts. Formatting lives in free
//! functions returning strings; [`Printer`] only decides where they go.

use is_terminal::IsTerminal;
use std::path::Path;

use serde_json::{json, Value};
use similar::TextDiff;

use crate::application::{ArtifactState, CheckReport, RegenerateReport};
use crate::domain::entities::{AppSettings, Proxy, RoutingEntity};
use crate::domain::ports::DirStatus;
use crate::error::PacError;

/// Output format for rendering
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputFormat {
    /// Human-readable text output
    #[default]
    Text,
    /// JSON output for scripting
    Json,
}

impl OutputFormat {
    pub fn from_flag(json: bool) -> Self {
        if json {
            OutputFormat::Json
        } else {
            OutputFormat::Text
        }
    }
}

/// Icons for output rendering
#[derive(Debug, Clone, Copy)]
pub struct Icons {
    pub check: &'static str,
    pub cross: &'static str,
    pub warn: &'static str,
    pub write: &'static str,
    pub trash: &'static str,
}

impl Icons {
    pub fn unicode() -> Self {
        Self {
            check: "✓",
            cross: "✗",
            warn: "⚠",
            write: "→",
            trash: "🗑",
        }
    }

    pub fn ascii() -> Self {
        Self {
            check: "[OK]",
            cross: "[FAIL]",
            warn: "[!]",
            write: "->",
            trash: "[DEL]",
        }
    }
}

/// Writes rendered output to stdout (results) and stderr (errors)
#[derive(Debug, Clone, Copy)]
pub struct Printer {
    format: OutputFormat,
    icons: Icons,
}

impl Printer {
    pub fn new(format: OutputFormat, icons: Icons) -> Self {
        Self { format, icons }
    }

    /// Unicode icons on a terminal, ASCII when piped
    pub fn detect(json: bool) -> Self {
        let icons = if std::io::stdout().is_terminal() {
            Icons::unicode()
        } else {
            Icons::ascii()
        };
        Self::new(OutputFormat::from_flag(json), icons)
    }

    pub fn is_json(&self) -> bool {
        self.format == OutputFormat::Json
    }

    pub fn icons(&self) -> Icons {
        self.icons
    }

    /// Print `text` in text mode or `value` in JSON mode
    pub fn emit(&self, text: impl AsRef<str>, value: Value) {
        match self.format {
            OutputFormat::Text => print!("{}", ensure_newline(text.as_ref())),
            OutputFormat::Json => println!(
                "{}",
                serde_json::to_string_pretty(&value).unwrap_or_default()
            ),
        }
    }

    /// `✓ message` / `{"status":"ok",...}`
    pub fn success(&self, message: &str, value: Value) {
        self.emit(format!("{} {}", self.icons.check, message), value);
    }

    pub fn error(&self, err: &PacError) {
        match self.format {
            OutputFormat::Text => eprintln!("{} Error: {}", self.icons.cross, err),
            OutputFormat::Json => println!(
                "{}",
                serde_json::to_string_pretty(&error_json(err)).unwrap_or_default()
            ),
        }
    }
}

fn ensure_newline(text: &str) -> String {
    if text.ends_with('\n') {
        text.to_string()
    } else {
        format!("{text}\n")
    }
}

pub fn error_json(err: &PacError) -> Value {
    json!({
        "status": "error",
        "code": err.code(),
        "message": err.to_string(),
    })
}

// ---- proxies ----

/// Proxy as JSON; the password itself is never rendered
pub fn proxy_json(proxy: &Proxy) -> Value {
    json!({
        "id": proxy.id,
        "name": proxy.name,
        "protocol": proxy.protocol,
        "host": proxy.host,
        "port": proxy.port,
        "username": proxy.username,
        "hasPassword": proxy.password.is_some(),
        "createdAt": proxy.created_at,
        "updatedAt": proxy.updated_at,
    })
}

pub fn format_proxy_table(proxies: &[Proxy]) -> String {
    if proxies.is_empty() {
        return "No proxy servers.\n".to_string();
    }

    let width = proxies.iter().map(|p| p.name.len()).max().unwrap_or(0).max(4);
    let mut out = format!("{:<width$}  {:<8}  ENDPOINT\n", "NAME", "PROTOCOL");
    for proxy in proxies {
        out.push_str(&format!(
            "{:<width$}  {:<8}  {}{}\n",
            proxy.name,
            proxy.protocol,
            proxy.endpoint(),
            if proxy.has_credentials() { "  (auth)" } else { "" }
        ));
    }
    out
}

pub fn format_proxy_detail(proxy: &Proxy) -> String {
    let mut out = format!("Proxy: {}\n", proxy.name);
    out.push_str(&format!("  id:       {}\n", proxy.id));
    out.push_str(&format!("  protocol: {}\n", proxy.protocol));
    out.push_str(&format!("  endpoint: {}\n", proxy.endpoint()));
    if let Some(username) = &proxy.username {
        out.push_str(&format!("  username: {username}\n"));
    }
    if proxy.password.is_some() {
        out.push_str("  password: (set)\n");
    }
    out
}

// ---- OUs and users ----

pub fn entity_json(entity: &RoutingEntity, path: &Path, url: Option<&str>) -> Value {
    json!({
        "id": entity.id,
        "kind": entity.kind,
        "name": entity.name,
        "description": entity.description,
        "color": entity.color,
        "proxy": entity.proxy,
        "mode": entity.mode,
        "domains": entity.domains,
        "bypassDomains": entity.bypass_domains,
        "ou": entity.ou,
        "pacFile": path.display().to_string(),
        "pacUrl": url,
        "createdAt": entity.created_at,
        "updatedAt": entity.updated_at,
    })
}

pub fn format_entity_table(entities: &[RoutingEntity]) -> String {
    if entities.is_empty() {
        return "No entries.\n".to_string();
    }

    let width = entities
        .iter()
        .map(|e| e.name.len())
        .max()
        .unwrap_or(0)
        .max(4);
    let proxy_width = entities
        .iter()
        .map(|e| e.proxy.as_deref().unwrap_or("-").len())
        .max()
        .unwrap_or(0)
        .max(5);
    let mut out = format!(
        "{:<width$}  {:<proxy_width$}  {:<12}  RULES\n",
        "NAME", "PROXY", "MODE"
    );
    for entity in entities {
        out.push_str(&format!(
            "{:<width$}  {:<proxy_width$}  {:<12}  {}\n",
            entity.name,
            entity.proxy.as_deref().unwrap_or("-"),
            entity.mode.as_str(),
            entity.active_domains().len()
        ));
    }
    out
}

pub fn format_entity_detail(entity: &RoutingEntity, path: &Path, url: Option<&str>) -> String {
    let mut out = format!("{}: {}\n", entity.kind.display_name(), entity.name);
    out.push_str(&format!("  id:       {}\n", entity.id));
    if let Some(description) = &entity.description {
        out.push_str(&format!("  about:    {description}\n"));
    }
    out.push_str(&format!(
        "  proxy:    {}\n",
        entity.proxy.as_deref().unwrap_or("(none)")
    ));
    if let Some(ou) = &entity.ou {
        out.push_str(&format!("  ou:       {ou}\n"));
    }
    out.push_str(&format!("  mode:     {}\n", entity.mode));
    out.push_str(&format!("  color:    {}\n", entity.color));
    push_list(&mut out, "domains", &entity.domains);
    push_list(&mut out, "bypass", &entity.bypass_domains);
    out.push_str(&format!("  pac file: {}\n", path.display()));
    if let Some(url) = url {
        out.push_str(&format!("  pac url:  {url}\n"));
    }
    out
}

fn push_list(out: &mut String, label: &str, items: &[String]) {
    if items.is_empty() {
        out.push_str(&format!("  {label}: (none)\n"));
        return;
    }
    out.push_str(&format!("  {label}:\n"));
    for item in items {
        out.push_str(&format!("    - {item}\n"));
    }
}

// ---- PAC maintenance ----

pub fn format_regenerate(report: &RegenerateReport, icons: Icons) -> String {
    let mut out = String::new();
    if report.is_success() {
        out.push_str(&format!(
            "{} Regenerated {} PAC file(s)\n",
            icons.check,
            report.written.len()
        ));
    } else {
        out.push_str(&format!(
            "{} Regenerated {} of {} PAC file(s)\n",
            icons.cross,
            report.written.len(),
            report.total_count()
        ));
    }
    for path in &report.written {
        out.push_str(&format!("  {} {}\n", icons.write, path.display()));
    }
    for failure in &report.failed {
        out.push_str(&format!(
            "  {} {} {}: {}\n",
            icons.cross, failure.kind, failure.name, failure.error
        ));
    }
    out
}

pub fn format_check(report: &CheckReport, icons: Icons, show_diff: bool) -> String {
    let mut out = String::new();
    if report.is_clean() {
        out.push_str(&format!(
            "{} All {} PAC file(s) up-to-date\n",
            icons.check,
            report.artifacts.len()
        ));
        return out;
    }

    out.push_str(&format!(
        "{} PAC files out of sync ({} of {} up-to-date)\n",
        icons.warn,
        report.up_to_date_count(),
        report.artifacts.len()
    ));
    for check in report.drifted() {
        match &check.state {
            ArtifactState::Unrenderable { reason } => out.push_str(&format!(
                "  {} {} {}: {}\n",
                icons.cross, check.kind, check.name, reason
            )),
            state => out.push_str(&format!(
                "  {} {} {}: {} ({})\n",
                icons.cross,
                check.kind,
                check.name,
                state,
                check.path.display()
            )),
        }
        if let (true, ArtifactState::Stale { .. }, Some(expected), Some(actual)) =
            (show_diff, &check.state, &check.expected, &check.actual)
        {
            out.push_str(&unified_diff(actual, expected, &check.path));
        }
    }
    if !report.orphans.is_empty() {
        out.push_str(&format!("  Orphans ({}):\n", report.orphans.len()));
        for path in &report.orphans {
            out.push_str(&format!("    {} {}\n", icons.trash, path.display()));
        }
    }
    out
}

/// Unified diff from what is on disk to what should be there
pub fn unified_diff(on_disk: &str, expected: &str, path: &Path) -> String {
    let label = path.display().to_string();
    TextDiff::from_lines(on_disk, expected)
        .unified_diff()
        .context_radius(3)
        .header(&format!("{label} (on disk)"), &format!("{label} (expected)"))
        .to_string()
}

pub fn format_dir_status(path: &Path, status: DirStatus, icons: Icons) -> String {
    let icon = match status {
        DirStatus::Exists => icons.check,
        DirStatus::NotFound => icons.warn,
        DirStatus::NotWritable => icons.cross,
    };
    let hint = match status {
        DirStatus::Exists => "",
        DirStatus::NotFound => " (run `pacsmith pac init`)",
        DirStatus::NotWritable => " (check permissions)",
    };
    format!(
        "{icon} PAC directory {}: {}{hint}\n",
        path.display(),
        status.as_str()
    )
}

pub fn format_settings(settings: &AppSettings) -> String {
    format!(
        "Settings:\n  session timeout: {} min\n  pac directory:   {}\n  default mode:    {}\n",
        settings.session_timeout_minutes,
        settings.pac_directory_path.display(),
        settings.default_proxy_mode
    )
}
