//! End-to-end service flows over the TOML store and the local disk.

use std::path::Path;
use std::sync::Arc;

use pacsmith::application::{EntityPayload, EntityService, PacSynchronizer, ProxyService};
use pacsmith::domain::ports::RecordStore;
use pacsmith::domain::services::ArtifactLayout;
use pacsmith::domain::value_objects::EntityKind;
use pacsmith::infrastructure::{LocalFs, TomlRecordStore};
use pacsmith::PacError;

fn open(dir: &Path) -> (Arc<dyn RecordStore>, Arc<PacSynchronizer>) {
    let store: Arc<dyn RecordStore> =
        Arc::new(TomlRecordStore::with_path(dir.join("store.toml")));
    let sync = Arc::new(PacSynchronizer::new(
        store.clone(),
        Arc::new(LocalFs::new()),
        ArtifactLayout::new(dir.join("pac")),
    ));
    (store, sync)
}

fn seed_proxy(store: &Arc<dyn RecordStore>, sync: &Arc<PacSynchronizer>) {
    ProxyService::new(store.clone(), sync.clone())
        .create(pacsmith::application::ProxyPayload {
            name: "corp".to_string(),
            protocol: "socks5".to_string(),
            host: "10.0.0.5".to_string(),
            port: 1080,
            username: None,
            password: None,
        })
        .unwrap();
}

#[test]
fn rows_and_artifacts_survive_reopen() {
    let dir = tempfile::tempdir().unwrap();
    {
        let (store, sync) = open(dir.path());
        seed_proxy(&store, &sync);
        EntityService::new(EntityKind::Ou, store, sync)
            .create(EntityPayload {
                bypass_domains: vec!["b.example".to_string(), "a.example".to_string()],
                ..EntityPayload::new("sales", "corp")
            })
            .unwrap();
    }

    let (store, sync) = open(dir.path());
    let sales = EntityService::new(EntityKind::Ou, store, sync.clone())
        .find("sales")
        .unwrap();
    assert_eq!(sales.bypass_domains, vec!["b.example", "a.example"]);
    assert!(sync.check().unwrap().is_clean());
}

#[test]
fn rename_then_delete_via_toml_store() {
    let dir = tempfile::tempdir().unwrap();
    let (store, sync) = open(dir.path());
    seed_proxy(&store, &sync);
    let users = EntityService::new(EntityKind::User, store, sync.clone());

    let id = users.create(EntityPayload::new("alice", "corp")).unwrap();
    users
        .update(id, EntityPayload::new("alice.smith", "corp"))
        .unwrap();

    let layout = sync.layout();
    assert!(!layout.entity_dir(EntityKind::User, "alice").exists());
    assert!(layout
        .artifact_path(EntityKind::User, "alice.smith")
        .exists());

    users.delete(id).unwrap();
    assert!(!layout.entity_dir(EntityKind::User, "alice.smith").exists());
    assert!(matches!(users.get(id), Err(PacError::NotFound { .. })));
}
