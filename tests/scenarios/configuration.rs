//! Scenario: Configuration
//!
//! Journey: The administrator moves from command-line flags to a config
//! file, then overrides it from the environment for one run.

use crate::common::*;

#[test]
fn scenario_config_file_then_env_override() {
    let env = TestEnv::new();
    let store = env.root.path().join("configured-store.toml");
    let pac = env.root.path().join("configured-pac");
    std::fs::write(
        env.workdir().join("pacsmith.toml"),
        format!(
            "[store]\npath = {:?}\n\n[pac]\ndirectory = {:?}\n",
            store.display().to_string(),
            pac.display().to_string()
        ),
    )
    .unwrap();

    env.run_bare(
        &[
            "proxy", "add", "corp", "--protocol", "http", "--host", "p.corp", "--port", "3128",
        ],
        &[],
    )
    .assert_success();
    env.run_bare(&["ou", "add", "sales", "--proxy", "corp"], &[])
        .assert_success();

    assert!(store.exists());
    assert!(pac.join("sales").join("sales.pac").exists());

    let other = env.root.path().join("other-pac");
    env.run_bare(
        &["pac", "regenerate"],
        &[("PACSMITH_PAC_DIR", other.to_str().unwrap())],
    )
    .assert_success();
    assert!(other.join("sales").join("sales.pac").exists());
}

#[test]
fn scenario_unknown_config_key_warns() {
    let env = TestEnv::new();
    std::fs::write(
        env.workdir().join("pacsmith.toml"),
        "[pac]\ndirectroy = \"/srv/pac\"\n",
    )
    .unwrap();

    let result = env.run(&["proxy", "list"]);
    result.assert_success();
    assert!(
        result.stderr.contains("did you mean 'directory'"),
        "{}",
        result.stderr
    );
}

#[test]
fn scenario_invalid_config_exits_2() {
    let env = TestEnv::new();
    std::fs::write(
        env.workdir().join("pacsmith.toml"),
        "[logging]\nformat = \"yaml\"\n",
    )
    .unwrap();

    let result = env.run(&["proxy", "list"]);
    assert_eq!(result.exit_code, 2, "{}", result.combined_output());
}

#[test]
fn scenario_settings_round_trip() {
    let env = TestEnv::new();

    let shown = env.run(&["--json", "settings", "show"]);
    shown.assert_success();
    assert_eq!(shown.json()["sessionTimeoutMinutes"], 15);
    assert_eq!(shown.json()["defaultProxyMode"], "proxyAll");

    env.run(&["settings", "set", "--session-timeout", "30"])
        .assert_success();
    assert_eq!(
        env.run(&["--json", "settings", "show"]).json()["sessionTimeoutMinutes"],
        30
    );

    let rejected = env.run(&["settings", "set", "--session-timeout", "0"]);
    assert_eq!(rejected.exit_code, 2, "{}", rejected.combined_output());
}
