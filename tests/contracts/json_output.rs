//! JSON output contracts for scripting.

use crate::common::*;

/// CONTRACT: `--json` create output names the artifact.
#[test]
fn contract_json_create_output() {
    let env = TestEnv::with_corp_proxy();

    let result = env.run(&["--json", "ou", "add", "sales", "--proxy", "corp"]);
    result.assert_success();

    let value = result.json();
    assert_eq!(value["status"], "ok");
    assert_eq!(value["kind"], "ou");
    assert_eq!(value["name"], "sales");
    assert_eq!(
        value["pacFile"],
        env.ou_pac("sales").display().to_string()
    );
    assert!(value["pacUrl"].is_null());
}

/// CONTRACT: With a public URL configured, the artifact URL follows the name.
#[test]
fn contract_json_public_url() {
    let env = TestEnv::with_corp_proxy();

    let result = env.run_with_env(
        &["--json", "user", "add", "alice", "--proxy", "corp"],
        &[("PACSMITH_PUBLIC_URL", "http://pac.corp/pac/")],
    );
    result.assert_success();

    assert_eq!(
        result.json()["pacUrl"],
        "http://pac.corp/pac/users/alice/alice.pac"
    );
}

/// CONTRACT: Create and update report the stored (trimmed) name and its real path.
#[test]
fn contract_json_reports_normalized_name() {
    let env = TestEnv::with_corp_proxy();
    let url = [("PACSMITH_PUBLIC_URL", "http://pac.corp/pac")];

    let created = env.run_with_env(&["--json", "ou", "add", " sales ", "--proxy", "corp"], &url);
    created.assert_success();
    let value = created.json();
    assert_eq!(value["name"], "sales");
    assert_eq!(value["pacFile"], env.ou_pac("sales").display().to_string());
    assert_eq!(value["pacUrl"], "http://pac.corp/pac/sales/sales.pac");
    assert!(env.ou_pac("sales").exists());

    let renamed = env.run_with_env(
        &["--json", "ou", "update", "sales", "--rename", "  revenue", "--proxy", "corp"],
        &url,
    );
    renamed.assert_success();
    let value = renamed.json();
    assert_eq!(value["name"], "revenue");
    assert_eq!(value["pacFile"], env.ou_pac("revenue").display().to_string());
    assert_eq!(value["pacUrl"], "http://pac.corp/pac/revenue/revenue.pac");
    assert!(env.ou_pac("revenue").exists());
}

/// CONTRACT: `--json` errors are a single object with a stable code.
#[test]
fn contract_json_error_shape() {
    let env = TestEnv::with_corp_proxy();
    env.run(&["ou", "add", "sales", "--proxy", "corp"])
        .assert_success();

    let result = env.run(&["--json", "proxy", "remove", "corp"]);
    assert_eq!(result.exit_code, 4);

    let value = result.json();
    assert_eq!(value["status"], "error");
    assert_eq!(value["code"], "proxy_in_use");
    assert!(value["message"].as_str().unwrap().contains("corp"));
}

/// CONTRACT: Lists are JSON arrays ordered by name.
#[test]
fn contract_json_list_ordering() {
    let env = TestEnv::with_corp_proxy();
    for name in ["zeta", "alpha", "mid"] {
        env.run(&["ou", "add", name, "--proxy", "corp"])
            .assert_success();
    }

    let result = env.run(&["--json", "ou", "list"]);
    result.assert_success();

    let names: Vec<String> = result
        .json()
        .as_array()
        .unwrap()
        .iter()
        .map(|ou| ou["name"].as_str().unwrap().to_string())
        .collect();
    assert_eq!(names, vec!["alpha", "mid", "zeta"]);
}
