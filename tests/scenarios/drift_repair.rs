//! Scenario: Drift Repair
//!
//! Journey: Someone edited PAC files by hand and a failed cleanup left a
//! directory behind. The administrator finds and repairs both.

use crate::common::*;
use crate::{assert_artifact, assert_no_artifact};

#[test]
fn scenario_detect_and_repair_drift() {
    let env = TestEnv::with_corp_proxy();
    env.run(&["ou", "add", "sales", "--proxy", "corp"])
        .assert_success();
    env.run(&["ou", "add", "eng", "--proxy", "corp"])
        .assert_success();

    // Hand edits and leftovers
    std::fs::write(env.ou_pac("sales"), "function FindProxyForURL(url, host) { return \"DIRECT\"; }").unwrap();
    std::fs::remove_file(env.ou_pac("eng")).unwrap();
    std::fs::create_dir_all(env.pac_root().join("legacy")).unwrap();

    let check = env.run(&["pac", "check", "--diff"]);
    assert_eq!(check.exit_code, 1, "{}", check.combined_output());
    assert!(check.stdout.contains("sales: stale"), "{}", check.stdout);
    assert!(check.stdout.contains("eng: missing"), "{}", check.stdout);
    assert!(check.stdout.contains("legacy"), "{}", check.stdout);
    assert!(check.stdout.contains("+    return \"SOCKS 10.0.0.5:1080\";"), "{}", check.stdout);

    let json = env.run(&["--json", "pac", "check"]).json();
    let states: Vec<&str> = json["artifacts"]
        .as_array()
        .unwrap()
        .iter()
        .map(|a| a["state"].as_str().unwrap())
        .collect();
    assert_eq!(states, vec!["missing", "stale"]);

    env.run(&["pac", "regenerate"]).assert_success();
    env.run(&["pac", "prune"]).assert_success();

    assert_artifact!(env, env.ou_pac("eng"));
    assert_no_artifact!(env, env.pac_root().join("legacy"));
    // The users base directory is never an orphan.
    env.run(&["user", "add", "alice", "--proxy", "corp"])
        .assert_success();
    env.run(&["pac", "prune"]).assert_success();
    assert_artifact!(env, env.user_pac("alice"));

    env.run(&["pac", "check"]).assert_success();
}

#[test]
fn scenario_render_without_writing() {
    let env = TestEnv::with_corp_proxy();
    env.run(&["ou", "add", "sales", "--proxy", "corp"])
        .assert_success();
    std::fs::remove_file(env.ou_pac("sales")).unwrap();

    let render = env.run(&["pac", "render", "ou", "sales"]);
    render.assert_success();
    assert_eq!(
        render.stdout,
        "function FindProxyForURL(url, host) {\n    return \"SOCKS 10.0.0.5:1080\";\n}\n"
    );
    assert_no_artifact!(env, env.ou_pac("sales"));
}
