//! Input rules applied at the service boundary
//!
//! Everything here runs before the store is touched. Entity names become
//! directory names below the PAC root, so they are held to path-safety rules
//! on top of being non-empty.

use crate::domain::entities::{AppSettings, SUPPORTED_PROTOCOLS};
use crate::domain::value_objects::EntityKind;
use crate::error::{PacError, PacResult};

/// Trimmed, path-safe entity name
pub fn entity_name(kind: EntityKind, raw: &str) -> PacResult<String> {
    let name = raw.trim();
    if name.is_empty() {
        return Err(PacError::validation(format!(
            "{} name is required.",
            kind.display_name()
        )));
    }
    if name == "." || name == ".." || name.starts_with('.') {
        return Err(PacError::validation(format!(
            "{} name \"{name}\" must not start with '.'",
            kind.display_name()
        )));
    }
    if name.contains(['/', '\\', '\0']) {
        return Err(PacError::validation(format!(
            "{} name \"{name}\" must not contain path separators",
            kind.display_name()
        )));
    }
    if kind == EntityKind::Ou && name == "users" {
        return Err(PacError::validation(
            "OU name \"users\" is reserved for user PAC files",
        ));
    }
    Ok(name.to_string())
}

/// Trimmed proxy reference; a missing or blank reference is rejected
pub fn proxy_reference(kind: EntityKind, raw: Option<&str>) -> PacResult<String> {
    match raw.map(str::trim) {
        Some(proxy) if !proxy.is_empty() => Ok(proxy.to_string()),
        _ => Err(PacError::validation(format!(
            "Assigning a proxy is required for {}.",
            article(kind)
        ))),
    }
}

/// Trim each host pattern, rejecting empty ones and characters that cannot
/// appear in a host glob
pub fn host_patterns(field: &str, raw: &[String]) -> PacResult<Vec<String>> {
    raw.iter()
        .enumerate()
        .map(|(index, entry)| {
            let pattern = entry.trim();
            if pattern.is_empty() {
                return Err(PacError::validation(format!(
                    "{field} entry {} is empty",
                    index + 1
                )));
            }
            if let Some(bad) = pattern
                .chars()
                .find(|c| c.is_whitespace() || c.is_control() || *c == '"' || *c == '\\')
            {
                return Err(PacError::validation(format!(
                    "{field} entry \"{pattern}\" contains invalid character {bad:?}"
                )));
            }
            Ok(pattern.to_string())
        })
        .collect()
}

/// Optional free-text field: trimmed, blank becomes `None`
pub fn optional_text(raw: Option<&str>) -> Option<String> {
    raw.map(str::trim)
        .filter(|s| !s.is_empty())
        .map(str::to_string)
}

pub fn proxy_name(raw: &str) -> PacResult<String> {
    let name = raw.trim();
    if name.is_empty() {
        return Err(PacError::validation(
            "Missing required fields: name, protocol, host, and port are required.",
        ));
    }
    Ok(name.to_string())
}

/// Lowercased protocol, limited to the supported set
pub fn protocol(raw: &str) -> PacResult<String> {
    let protocol = raw.trim().to_ascii_lowercase();
    if !SUPPORTED_PROTOCOLS.contains(&protocol.as_str()) {
        return Err(PacError::validation(format!(
            "Invalid protocol \"{}\". Must be one of: {}",
            raw.trim(),
            SUPPORTED_PROTOCOLS.join(", ")
        )));
    }
    Ok(protocol)
}

pub fn host(raw: &str) -> PacResult<String> {
    let host = raw.trim();
    if host.is_empty() {
        return Err(PacError::validation("Proxy host is required."));
    }
    if host.chars().any(|c| c.is_whitespace() || c == '"' || c == '\\') {
        return Err(PacError::validation(format!(
            "Proxy host \"{host}\" contains invalid characters"
        )));
    }
    Ok(host.to_string())
}

pub fn port(raw: u32) -> PacResult<u16> {
    match u16::try_from(raw) {
        Ok(port) if port > 0 => Ok(port),
        _ => Err(PacError::validation(
            "Invalid port number. Port must be between 1 and 65535.",
        )),
    }
}

pub fn settings(settings: &AppSettings) -> PacResult<()> {
    if settings.session_timeout_minutes == 0 {
        return Err(PacError::validation(
            "Session timeout must be at least 1 minute.",
        ));
    }
    if settings.pac_directory_path.as_os_str().is_empty() {
        return Err(PacError::validation("PAC directory path is required."));
    }
    Ok(())
}

fn article(kind: EntityKind) -> &'static str {
    match kind {
        EntityKind::Ou => "an OU",
        EntityKind::User => "a user",
    }
}
