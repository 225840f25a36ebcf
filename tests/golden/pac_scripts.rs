//! Snapshots of compiled scripts for the canonical routing shapes.

use std::sync::Arc;

use pacsmith::application::{EntityPayload, EntityService, PacSynchronizer, ProxyPayload, ProxyService};
use pacsmith::domain::services::ArtifactLayout;
use pacsmith::domain::value_objects::{EntityKind, RoutingMode};
use pacsmith::infrastructure::{InMemoryRecordStore, LocalFs};

struct Site {
    _dir: tempfile::TempDir,
    sync: Arc<PacSynchronizer>,
    store: Arc<InMemoryRecordStore>,
}

impl Site {
    fn new() -> Self {
        let dir = tempfile::tempdir().unwrap();
        let store = Arc::new(InMemoryRecordStore::new());
        let sync = Arc::new(PacSynchronizer::new(
            store.clone(),
            Arc::new(LocalFs::new()),
            ArtifactLayout::new(dir.path().join("pac")),
        ));
        let site = Self {
            _dir: dir,
            sync,
            store,
        };
        site.proxies()
            .create(ProxyPayload {
                name: "corp".to_string(),
                protocol: "socks5".to_string(),
                host: "10.0.0.5".to_string(),
                port: 1080,
                username: None,
                password: None,
            })
            .unwrap();
        site
    }

    fn proxies(&self) -> ProxyService {
        ProxyService::new(self.store.clone(), self.sync.clone())
    }

    fn ous(&self) -> EntityService {
        EntityService::new(EntityKind::Ou, self.store.clone(), self.sync.clone())
    }

    fn written(&self, kind: EntityKind, name: &str) -> String {
        std::fs::read_to_string(self.sync.layout().artifact_path(kind, name)).unwrap()
    }
}

#[test]
fn golden_proxy_all_with_bypass() {
    let site = Site::new();
    site.ous()
        .create(EntityPayload {
            mode: Some(RoutingMode::ProxyAll),
            bypass_domains: vec!["*.internal.corp".to_string()],
            ..EntityPayload::new("sales", "corp")
        })
        .unwrap();

    insta::assert_snapshot!(site.written(EntityKind::Ou, "sales"), @r###"
    function FindProxyForURL(url, host) {
        if (shExpMatch(host, "*.internal.corp")) {
            return "DIRECT";
        }
        return "SOCKS 10.0.0.5:1080";
    }
    "###);
}

#[test]
fn golden_direct_except_empty() {
    let site = Site::new();
    site.ous()
        .create(EntityPayload {
            mode: Some(RoutingMode::DirectExcept),
            ..EntityPayload::new("eng", "corp")
        })
        .unwrap();

    insta::assert_snapshot!(site.written(EntityKind::Ou, "eng"), @r###"
    function FindProxyForURL(url, host) {
        return "DIRECT";
    }
    "###);
}

#[test]
fn golden_direct_except_allow_list() {
    let site = Site::new();
    site.ous()
        .create(EntityPayload {
            mode: Some(RoutingMode::DirectExcept),
            domains: vec![
                "*.partner.com".to_string(),
                "api.vendor.io".to_string(),
                "10.20.*".to_string(),
            ],
            bypass_domains: vec!["unused.example".to_string()],
            ..EntityPayload::new("partners", "corp")
        })
        .unwrap();

    insta::assert_snapshot!(site.written(EntityKind::Ou, "partners"), @r###"
    function FindProxyForURL(url, host) {
        if (shExpMatch(host, "*.partner.com") ||
            shExpMatch(host, "api.vendor.io") ||
            shExpMatch(host, "10.20.*")) {
            return "SOCKS 10.0.0.5:1080";
        }
        return "DIRECT";
    }
    "###);
}

#[test]
fn golden_http_proxy_all_empty() {
    let site = Site::new();
    site.proxies()
        .create(ProxyPayload {
            name: "web".to_string(),
            protocol: "HTTPS".to_string(),
            host: "proxy.corp".to_string(),
            port: 8443,
            username: Some("svc".to_string()),
            password: Some("secret".to_string()),
        })
        .unwrap();
    site.ous()
        .create(EntityPayload {
            mode: Some(RoutingMode::ProxyAll),
            ..EntityPayload::new("kiosk", "web")
        })
        .unwrap();

    insta::assert_snapshot!(site.written(EntityKind::Ou, "kiosk"), @r###"
    function FindProxyForURL(url, host) {
        return "PROXY proxy.corp:8443";
    }
    "###);
}
