#![no_main]

use chrono::Utc;
use libfuzzer_sys::fuzz_target;
use pacsmith::domain::entities::{Proxy, RoutingEntity};
use pacsmith::domain::value_objects::{EntityKind, RecordId, RoutingMode};

fuzz_target!(|data: &[u8]| {
    let Ok(text) = std::str::from_utf8(data) else {
        return;
    };
    // First line: protocol, second: host, the rest: one pattern per line
    let mut lines = text.lines();
    let protocol = lines.next().unwrap_or_default().to_string();
    let host = lines.next().unwrap_or_default().to_string();
    let patterns: Vec<String> = lines.map(str::to_string).collect();

    let proxy = Proxy {
        id: RecordId::new(1),
        name: "fuzz".to_string(),
        protocol,
        host,
        port: data.len() as u16,
        username: None,
        password: None,
        created_at: Utc::now(),
        updated_at: Utc::now(),
    };
    let mode = if data.first().is_some_and(|b| b % 2 == 0) {
        RoutingMode::ProxyAll
    } else {
        RoutingMode::DirectExcept
    };
    let entity = RoutingEntity {
        id: RecordId::new(1),
        kind: EntityKind::Ou,
        name: "fuzz".to_string(),
        description: None,
        color: "#3b82f6".to_string(),
        proxy: Some("fuzz".to_string()),
        mode,
        domains: patterns.clone(),
        bypass_domains: patterns,
        ou: None,
        created_at: Utc::now(),
        updated_at: Utc::now(),
    };

    if let Ok(first) = pacsmith::compile(&entity, &proxy) {
        let second = pacsmith::compile(&entity, &proxy).unwrap();
        assert_eq!(first, second);
        assert!(first.starts_with("function FindProxyForURL(url, host) {"));
    }
});
