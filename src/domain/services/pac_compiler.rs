//! PAC Compiler
//!
//! Turns an entity's routing rules plus its proxy into the text of a
//! `FindProxyForURL(url, host)` script. Pure: no I/O, deterministic.
//!
//! ## Shape
//!
//! An empty active list yields a constant-return function. Otherwise one
//! `if` tests `shExpMatch(host, "<pattern>")` for every entry, joined by
//! `||` in stored order; the branch returns the exception outcome and the
//! function falls through to the default outcome.
//!
//! | mode           | active list      | exception      | default        |
//! |----------------|------------------|----------------|----------------|
//! | `ProxyAll`     | `bypass_domains` | `DIRECT`       | proxy          |
//! | `DirectExcept` | `domains`        | proxy          | `DIRECT`       |

use crate::domain::entities::{Proxy, RoutingEntity};
use crate::domain::value_objects::RoutingMode;
use crate::error::{PacError, PacResult};

/// PAC result for a direct connection
pub const DIRECT: &str = "DIRECT";

const HEADER: &str = "function FindProxyForURL(url, host) {\n";
const FOOTER: &str = "\n}";
const CONDITION_JOINER: &str = " ||\n        ";

/// PAC directive keyword for a proxy protocol
///
/// Any `http*` protocol maps to `PROXY`, any `socks*` protocol to `SOCKS`.
/// Matching is case-sensitive; stored protocols are already lowercase.
pub fn directive_keyword(protocol: &str) -> PacResult<&'static str> {
    if protocol.starts_with("http") {
        Ok("PROXY")
    } else if protocol.starts_with("socks") {
        Ok("SOCKS")
    } else {
        Err(PacError::UnsupportedProtocol {
            protocol: protocol.to_string(),
        })
    }
}

/// `"<KEYWORD> <host>:<port>"` for the given proxy
pub fn proxy_directive(proxy: &Proxy) -> PacResult<String> {
    let keyword = directive_keyword(&proxy.protocol)?;
    Ok(format!("{} {}", keyword, proxy.endpoint()))
}

/// Compile the PAC script for `entity` routed through `proxy`
///
/// Fails only when the proxy protocol has no PAC directive.
pub fn compile(entity: &RoutingEntity, proxy: &Proxy) -> PacResult<String> {
    let directive = proxy_directive(proxy)?;
    Ok(render(entity.mode, entity.active_domains(), &directive))
}

/// Render the script body for an already-resolved directive
pub fn render(mode: RoutingMode, patterns: &[String], directive: &str) -> String {
    let return_proxy = return_statement(directive);
    let return_direct = return_statement(DIRECT);

    let (exception, fallback) = match mode {
        RoutingMode::ProxyAll => (&return_direct, &return_proxy),
        RoutingMode::DirectExcept => (&return_proxy, &return_direct),
    };

    let body = if patterns.is_empty() {
        format!("    {fallback}")
    } else {
        let conditions = patterns
            .iter()
            .map(|pattern| format!("shExpMatch(host, \"{}\")", escape_js(pattern)))
            .collect::<Vec<_>>()
            .join(CONDITION_JOINER);
        format!("    if ({conditions}) {{\n        {exception}\n    }}\n    {fallback}")
    };

    format!("{HEADER}{body}{FOOTER}")
}

fn return_statement(result: &str) -> String {
    format!("return \"{}\";", escape_js(result))
}

/// Escape a value for a double-quoted JavaScript string literal
fn escape_js(s: &str) -> String {
    s.replace('\\', "\\\\").replace('"', "\\\"")
}
