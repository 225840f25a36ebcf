//! Artifact lifecycle contracts: create writes, rename moves, delete removes.

use crate::common::*;
use crate::{assert_artifact, assert_no_artifact};

/// CONTRACT: A created OU has its PAC file at `<root>/<name>/<name>.pac`.
#[test]
fn contract_ou_create_writes_artifact() {
    let env = TestEnv::with_corp_proxy();

    env.run(&["ou", "add", "sales", "--proxy", "corp", "--bypass", "*.internal.corp"])
        .assert_success();

    assert_artifact!(env, env.ou_pac("sales"));
    let script = env.read(&env.ou_pac("sales"));
    assert!(script.contains("shExpMatch(host, \"*.internal.corp\")"), "{script}");
    assert!(script.contains("return \"SOCKS 10.0.0.5:1080\";"), "{script}");
}

/// CONTRACT: User artifacts live under the `users` subdirectory.
#[test]
fn contract_user_artifact_under_users_dir() {
    let env = TestEnv::with_corp_proxy();

    env.run(&["user", "add", "alice", "--proxy", "corp"])
        .assert_success();

    assert_artifact!(env, env.user_pac("alice"));
    assert_no_artifact!(env, env.ou_pac("alice"));
}

/// CONTRACT: Renaming moves the artifact; nothing stays at the old path.
#[test]
fn contract_rename_moves_artifact() {
    let env = TestEnv::with_corp_proxy();
    env.run(&["ou", "add", "sales", "--proxy", "corp"])
        .assert_success();

    env.run(&[
        "ou", "update", "sales", "--rename", "revenue", "--proxy", "corp", "--mode",
        "direct-except", "--domain", "*.crm.example",
    ])
    .assert_success();

    assert_no_artifact!(env, env.pac_root().join("sales"));
    assert_artifact!(env, env.ou_pac("revenue"));
    let script = env.read(&env.ou_pac("revenue"));
    assert!(script.contains("return \"SOCKS 10.0.0.5:1080\";"), "{script}");
    assert!(script.ends_with("    return \"DIRECT\";\n}"), "{script}");
}

/// CONTRACT: An update without a rename still rewrites the artifact.
#[test]
fn contract_update_rewrites_in_place() {
    let env = TestEnv::with_corp_proxy();
    env.run(&["ou", "add", "sales", "--proxy", "corp"])
        .assert_success();
    let before = env.read(&env.ou_pac("sales"));

    env.run(&["ou", "update", "sales", "--proxy", "corp", "--bypass", "*.lan"])
        .assert_success();

    let after = env.read(&env.ou_pac("sales"));
    assert_ne!(before, after);
    assert!(after.contains("shExpMatch(host, \"*.lan\")"));
}

/// CONTRACT: Deleting an entity removes its artifact directory.
#[test]
fn contract_delete_removes_artifact() {
    let env = TestEnv::with_corp_proxy();
    env.run(&["user", "add", "alice", "--proxy", "corp"])
        .assert_success();

    env.run(&["user", "remove", "alice"]).assert_success();

    assert_no_artifact!(env, env.pac_root().join("users").join("alice"));
    let list = env.run(&["user", "list"]);
    assert!(list.stdout.contains("No entries."), "{}", list.stdout);
}

/// CONTRACT: A failed artifact write rolls the insert back.
#[test]
fn contract_failed_write_leaves_no_row() {
    let env = TestEnv::with_corp_proxy();
    // A regular file where the PAC root should be makes every write fail.
    std::fs::write(env.pac_root(), "not a directory").unwrap();

    let result = env.run(&["ou", "add", "sales", "--proxy", "corp"]);
    assert_eq!(result.exit_code, 5, "{}", result.combined_output());
    assert!(result.stderr.contains("PAC synchronization failed"), "{}", result.stderr);

    std::fs::remove_file(env.pac_root()).unwrap();
    let show = env.run(&["ou", "show", "sales"]);
    assert_eq!(show.exit_code, 3, "{}", show.combined_output());

    // The name is free again once the directory is usable.
    env.run(&["ou", "add", "sales", "--proxy", "corp"])
        .assert_success();
}

/// CONTRACT: Writing twice with unchanged rows yields identical bytes.
#[test]
fn contract_regenerate_is_idempotent() {
    let env = TestEnv::with_corp_proxy();
    env.run(&["ou", "add", "sales", "--proxy", "corp", "--bypass", "*.internal.corp"])
        .assert_success();
    let first = env.read(&env.ou_pac("sales"));

    env.run(&["pac", "regenerate"]).assert_success();
    env.run(&["pac", "regenerate"]).assert_success();

    assert_eq!(first, env.read(&env.ou_pac("sales")));
}

/// CONTRACT: Deleting an OU keeps its users, now without an OU.
#[test]
fn contract_ou_delete_detaches_users() {
    let env = TestEnv::with_corp_proxy();
    env.run(&["ou", "add", "sales", "--proxy", "corp"])
        .assert_success();
    env.run(&["user", "add", "alice", "--proxy", "corp", "--ou", "sales"])
        .assert_success();

    env.run(&["ou", "remove", "sales"]).assert_success();

    let alice = env.run(&["--json", "user", "show", "alice"]);
    alice.assert_success();
    assert!(alice.json()["ou"].is_null(), "{}", alice.stdout);
    assert_artifact!(env, env.user_pac("alice"));
}
