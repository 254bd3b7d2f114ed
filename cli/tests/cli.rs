use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::TempDir;

/// Command isolated from the developer's config files and environment
fn ea_portal(home: &TempDir) -> Command {
    let mut cmd = Command::cargo_bin("ea-portal").unwrap();
    cmd.current_dir(home.path())
        .env("XDG_CONFIG_HOME", home.path())
        .env("HOME", home.path())
        .env_remove("UI_URL_PREFIX")
        .env_remove("DMS_URL")
        .env_remove("WIKI_URL")
        .env_remove("RUST_LOG");
    cmd
}

fn with_urls(cmd: &mut Command) -> &mut Command {
    cmd.args([
        "--ui-url-prefix",
        "https://portal.gov.gd",
        "--dms-url",
        "https://dms.gov.gd/share",
        "--wiki-url",
        "https://wiki.gov.gd",
    ])
}

#[test]
fn routes_json_lists_entries_in_order() {
    let home = TempDir::new().unwrap();
    let output = ea_portal(&home).args(["routes", "--json"]).output().unwrap();
    assert!(output.status.success());

    let routes: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    let names: Vec<_> = routes
        .as_array()
        .unwrap()
        .iter()
        .map(|route| route["name"].as_str().unwrap().to_string())
        .collect();
    assert_eq!(
        names,
        ["Landing", "ServicesScreen", "SurveyFormScreen", "AboutScreen"]
    );
}

#[test]
fn resolve_path_and_name() {
    let home = TempDir::new().unwrap();

    ea_portal(&home)
        .args(["resolve", "/about"])
        .assert()
        .success()
        .stdout("AboutScreen\n");

    ea_portal(&home)
        .args(["resolve", "SurveyFormScreen"])
        .assert()
        .success()
        .stdout("/survey\n");
}

#[test]
fn resolve_unknown_screen_fails() {
    let home = TempDir::new().unwrap();
    ea_portal(&home)
        .args(["resolve", "NoSuchScreen"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Unknown route"));
}

#[test]
fn resolve_full_url_uses_prefix() {
    let home = TempDir::new().unwrap();
    with_urls(&mut ea_portal(&home))
        .args(["resolve", "https://portal.gov.gd/services?tab=all"])
        .assert()
        .success()
        .stdout("ServicesScreen\n");
}

#[test]
fn href_prints_full_url() {
    let home = TempDir::new().unwrap();
    with_urls(&mut ea_portal(&home))
        .args(["href", "AboutScreen"])
        .assert()
        .success()
        .stdout("https://portal.gov.gd/about\n");
}

#[test]
fn href_without_configuration_fails() {
    let home = TempDir::new().unwrap();
    ea_portal(&home)
        .args(["href", "AboutScreen"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Missing required field"));
}

#[test]
fn config_file_in_working_directory_is_used() {
    let home = TempDir::new().unwrap();
    std::fs::write(
        home.path().join("ea-portal.json"),
        r#"{
            "ui_url_prefix": "https://gov.gd/ea",
            "dms_url": "https://dms.gov.gd",
            "wiki_url": "https://wiki.gov.gd"
        }"#,
    )
    .unwrap();

    ea_portal(&home)
        .args(["href", "ServicesScreen"])
        .assert()
        .success()
        .stdout("https://gov.gd/ea/services\n");
}

#[test]
fn header_shows_auth_label() {
    let home = TempDir::new().unwrap();

    with_urls(&mut ea_portal(&home))
        .args(["header", "--logged-in"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Logout"))
        .stdout(predicate::str::contains("Government of Grenada"));

    with_urls(&mut ea_portal(&home))
        .arg("header")
        .assert()
        .success()
        .stdout(predicate::str::contains("Login"));
}

#[test]
fn open_failure_is_not_an_error() {
    let home = TempDir::new().unwrap();
    ea_portal(&home)
        .args(["open", "not-a-url"])
        .assert()
        .success();
}
