use assert_cmd::Command;
use predicates::prelude::*;
use serde_json::Value;
use std::fs;
use std::path::{Path, PathBuf};
use tempfile::tempdir;

fn fixture_catalog() -> PathBuf {
    Path::new(env!("CARGO_MANIFEST_DIR")).join("../catalog/tests/fixtures/catalog.json")
}

#[allow(deprecated)]
fn panel() -> Command {
    let mut cmd = Command::cargo_bin("panel").expect("binary");
    cmd.env_remove("PANEL_PROFILE").arg("--quiet");
    cmd
}

fn run_json(args: &[&str]) -> Value {
    let output = panel().args(args).output().expect("command run");
    assert!(
        output.status.success(),
        "stderr: {}",
        String::from_utf8_lossy(&output.stderr)
    );
    serde_json::from_slice(&output.stdout).expect("valid json")
}

fn member_ids(value: &Value) -> Vec<String> {
    value
        .as_array()
        .expect("array")
        .iter()
        .map(|m| m["id"].as_str().unwrap_or_default().to_string())
        .collect()
}

#[test]
fn assemble_prints_members_and_scores() {
    let catalog = fixture_catalog();
    let body = run_json(&[
        "assemble",
        "--catalog",
        catalog.to_str().unwrap(),
        "--panel-type",
        "blue",
        "--topic",
        "risk",
        "--size",
        "3",
        "--explain",
    ]);

    assert_eq!(body["panel_type"], "blue");
    assert_eq!(
        member_ids(&body["members"]),
        vec!["carla-mendes", "hugo-brandt", "ada-okafor"]
    );
    assert_eq!(body["scores"][0]["score"], 110.0);
}

#[test]
fn negative_size_yields_empty_panel() {
    let catalog = fixture_catalog();
    let body = run_json(&[
        "assemble",
        "--catalog",
        catalog.to_str().unwrap(),
        "--panel-type",
        "red_team",
        "--size",
        "-3",
    ]);
    assert_eq!(body["size"], 0);
    assert!(body["members"].as_array().unwrap().is_empty());
}

#[test]
fn team_output_has_three_disjoint_panels() {
    let catalog = fixture_catalog();
    let body = run_json(&[
        "team",
        "--catalog",
        catalog.to_str().unwrap(),
        "--topic",
        "risk",
        "--team-size",
        "3",
    ]);

    let blue = member_ids(&body["blue_team"]);
    let left = member_ids(&body["left_field"]);
    let red = member_ids(&body["red_team"]);
    assert!(blue.len() <= 3 && left.len() <= 2 && red.len() <= 2);

    let mut all: Vec<&String> = blue.iter().chain(&left).chain(&red).collect();
    let total = all.len();
    all.sort();
    all.dedup();
    assert_eq!(all.len(), total);
}

#[test]
fn classify_reports_secondary_memberships() {
    let catalog = fixture_catalog();
    let body = run_json(&[
        "classify",
        "--catalog",
        catalog.to_str().unwrap(),
        "--id",
        "devils-advocate",
    ]);
    assert_eq!(body["primary"], "blue");
    assert_eq!(body["panel_types"], serde_json::json!(["blue", "red_team"]));
}

#[test]
fn stats_count_each_entity_once() {
    let catalog = fixture_catalog();
    let body = run_json(&["stats", "--catalog", catalog.to_str().unwrap()]);
    let total: u64 = ["blue", "left_field", "red_team"]
        .iter()
        .map(|key| body[key]["count"].as_u64().unwrap())
        .sum();
    assert_eq!(total, 23);
}

#[test]
fn phase_falls_back_for_unknown_numbers() {
    let body = run_json(&["phase", "5"]);
    assert_eq!(body["primary"], "red_team");
    assert_eq!(body["label"], "Stress Test");

    let body = run_json(&["phase", "-1"]);
    assert_eq!(body["primary"], "blue");
    assert_eq!(body["secondary"], serde_json::json!([]));
    assert!(body["label"].is_null());
}

#[test]
fn unknown_panel_type_is_rejected() {
    let catalog = fixture_catalog();
    panel()
        .args([
            "assemble",
            "--catalog",
            catalog.to_str().unwrap(),
            "--panel-type",
            "purple",
        ])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Unknown panel type: purple"));
}

#[test]
fn invalid_catalog_is_rejected() {
    let temp = tempdir().unwrap();
    let path = temp.path().join("dup.json");
    fs::write(
        &path,
        r#"[
          {"id": "a", "category": "Entrepreneurship", "performance_score": 10},
          {"id": "a", "category": "Entrepreneurship", "performance_score": 20}
        ]"#,
    )
    .unwrap();

    panel()
        .args(["stats", "--catalog", path.to_str().unwrap()])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Duplicate entity id: a"));
}

#[test]
fn profile_file_overrides_boosts() {
    let temp = tempdir().unwrap();
    let profile = temp.path().join("flat.toml");
    fs::write(&profile, "[boosts]\nspecialty = 0.0\nbio = 0.0\n").unwrap();
    let catalog = fixture_catalog();

    let body = run_json(&[
        "--profile-file",
        profile.to_str().unwrap(),
        "assemble",
        "--catalog",
        catalog.to_str().unwrap(),
        "--panel-type",
        "blue",
        "--topic",
        "risk",
        "--size",
        "1",
    ]);
    assert_eq!(member_ids(&body["members"]), vec!["ada-okafor"]);
}

#[test]
fn unknown_profile_is_rejected() {
    let catalog = fixture_catalog();
    panel()
        .args(["--profile", "nope", "stats", "--catalog", catalog.to_str().unwrap()])
        .assert()
        .failure()
        .code(1)
        .stderr(predicate::str::starts_with("Error: "))
        .stderr(predicate::str::contains("Profile 'nope' is not bundled"));
}

#[test]
fn profile_file_named_default_still_layers_over_bundled_default() {
    let temp = tempdir().unwrap();
    let profile = temp.path().join("default.json");
    fs::write(&profile, r#"{ "boosts": { "bio": 0 } }"#).unwrap();
    let catalog = fixture_catalog();

    let body = run_json(&[
        "--profile-file",
        profile.to_str().unwrap(),
        "assemble",
        "--catalog",
        catalog.to_str().unwrap(),
        "--panel-type",
        "red_team",
        "--size",
        "10",
    ]);
    assert!(member_ids(&body["members"]).contains(&"devils-advocate".to_string()));
}
