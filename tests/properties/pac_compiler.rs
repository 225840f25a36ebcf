//! Property tests for PAC compilation.

use chrono::Utc;
use proptest::prelude::*;

use pacsmith::domain::entities::{Proxy, RoutingEntity};
use pacsmith::domain::services::compile;
use pacsmith::domain::value_objects::{EntityKind, RecordId, RoutingMode};

fn host_pattern() -> impl Strategy<Value = String> {
    proptest::string::string_regex(r"(\*\.)?[a-z0-9-]{1,12}(\.[a-z]{2,6}){0,2}").unwrap()
}

fn mode() -> impl Strategy<Value = RoutingMode> {
    prop_oneof![Just(RoutingMode::ProxyAll), Just(RoutingMode::DirectExcept)]
}

fn protocol() -> impl Strategy<Value = String> {
    prop_oneof![
        Just("http".to_string()),
        Just("https".to_string()),
        Just("socks4".to_string()),
        Just("socks5".to_string()),
    ]
}

fn proxy(protocol: String, port: u16) -> Proxy {
    Proxy {
        id: RecordId::new(1),
        name: "corp".to_string(),
        protocol,
        host: "proxy.corp".to_string(),
        port,
        username: None,
        password: None,
        created_at: Utc::now(),
        updated_at: Utc::now(),
    }
}

fn entity(mode: RoutingMode, domains: Vec<String>, bypass: Vec<String>) -> RoutingEntity {
    RoutingEntity {
        id: RecordId::new(1),
        kind: EntityKind::Ou,
        name: "sales".to_string(),
        description: None,
        color: "#3b82f6".to_string(),
        proxy: Some("corp".to_string()),
        mode,
        domains,
        bypass_domains: bypass,
        ou: None,
        created_at: Utc::now(),
        updated_at: Utc::now(),
    }
}

fn directive(proxy: &Proxy) -> String {
    let keyword = if proxy.protocol.starts_with("socks") {
        "SOCKS"
    } else {
        "PROXY"
    };
    format!("{keyword} {}:{}", proxy.host, proxy.port)
}

proptest! {
    #![proptest_config(ProptestConfig {
        cases: 128,
        .. ProptestConfig::default()
    })]

    /// PROPERTY: Identical input always yields byte-identical output.
    #[test]
    fn property_compile_is_deterministic(
        mode in mode(),
        domains in proptest::collection::vec(host_pattern(), 0..6),
        bypass in proptest::collection::vec(host_pattern(), 0..6),
        protocol in protocol(),
        port in 1u16..,
    ) {
        let proxy = proxy(protocol, port);
        let entity = entity(mode, domains, bypass);
        prop_assert_eq!(compile(&entity, &proxy).unwrap(), compile(&entity, &proxy).unwrap());
    }

    /// PROPERTY: ProxyAll with no bypass entries always returns the proxy.
    #[test]
    fn property_proxy_all_empty_is_constant(
        domains in proptest::collection::vec(host_pattern(), 0..6),
        protocol in protocol(),
        port in 1u16..,
    ) {
        let proxy = proxy(protocol, port);
        let script = compile(&entity(RoutingMode::ProxyAll, domains, Vec::new()), &proxy).unwrap();
        prop_assert_eq!(
            script,
            format!("function FindProxyForURL(url, host) {{\n    return \"{}\";\n}}", directive(&proxy))
        );
    }

    /// PROPERTY: DirectExcept with no domain entries always returns DIRECT.
    #[test]
    fn property_direct_except_empty_is_constant(
        bypass in proptest::collection::vec(host_pattern(), 0..6),
        protocol in protocol(),
    ) {
        let script = compile(
            &entity(RoutingMode::DirectExcept, Vec::new(), bypass),
            &proxy(protocol, 8080),
        )
        .unwrap();
        prop_assert_eq!(script, "function FindProxyForURL(url, host) {\n    return \"DIRECT\";\n}");
    }

    /// PROPERTY: One match expression per active entry, in stored order.
    #[test]
    fn property_one_match_per_entry_in_order(
        mode in mode(),
        active in proptest::collection::vec(host_pattern(), 1..8),
    ) {
        let entity = match mode {
            RoutingMode::ProxyAll => entity(mode, Vec::new(), active.clone()),
            RoutingMode::DirectExcept => entity(mode, active.clone(), Vec::new()),
        };
        let script = compile(&entity, &proxy("http".to_string(), 3128)).unwrap();

        prop_assert_eq!(script.matches("shExpMatch(host, ").count(), active.len());
        prop_assert_eq!(script.matches(" ||\n").count(), active.len() - 1);

        let mut cursor = 0;
        for pattern in &active {
            let needle = format!("shExpMatch(host, \"{pattern}\")");
            let found = script[cursor..].find(&needle);
            prop_assert!(found.is_some(), "{} missing after offset {}", needle, cursor);
            cursor += found.unwrap_or(0) + needle.len();
        }
    }

    /// PROPERTY: Compilation never panics, whatever the stored strings hold.
    #[test]
    fn property_compile_never_panics(
        mode in mode(),
        domains in proptest::collection::vec("(?s).{0,32}", 0..4),
        bypass in proptest::collection::vec("(?s).{0,32}", 0..4),
        protocol in "(?s).{0,12}",
        host in "(?s).{0,32}",
    ) {
        let mut proxy = proxy(protocol, 1);
        proxy.host = host;
        let _ = compile(&entity(mode, domains, bypass), &proxy);
    }

    /// PROPERTY: Escaped patterns cannot terminate the string literal.
    #[test]
    fn property_quotes_stay_escaped(raw in "[a-z\"\\\\]{1,16}") {
        let script = compile(
            &entity(RoutingMode::ProxyAll, Vec::new(), vec![raw.clone()]),
            &proxy("http".to_string(), 80),
        )
        .unwrap();
        let escaped = raw.replace('\\', "\\\\").replace('"', "\\\"");
        let needle = format!("shExpMatch(host, \"{escaped}\")");
        prop_assert!(script.contains(&needle));
    }
}
