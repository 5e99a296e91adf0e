use assert_cmd::Command;
use predicates::prelude::*;
use pretty_assertions::assert_eq;
use serde_json::Value;
use std::fs;
use tempfile::tempdir;

#[allow(deprecated)]
fn cli() -> Command {
    let mut cmd = Command::cargo_bin("canvas-intent").expect("binary");
    cmd.env_remove("CANVAS_INTENT_PROFILE").env_remove("RUST_LOG");
    cmd
}

fn run_json(args: &[&str]) -> Value {
    let output = cli().args(args).arg("--json").output().expect("command run");
    assert!(
        output.status.success(),
        "stderr: {}",
        String::from_utf8_lossy(&output.stderr)
    );
    serde_json::from_slice(&output.stdout).expect("valid json")
}

fn names(matches: &Value) -> Vec<&str> {
    matches
        .as_array()
        .expect("array")
        .iter()
        .map(|entry| entry["name"].as_str().expect("name"))
        .collect()
}

#[test]
fn resolve_exact_alias_as_json() {
    let body = run_json(&["resolve", "btn"]);
    assert_eq!(body["phrase"], "btn");
    assert_eq!(body["type"], "exact");
    assert_eq!(names(&body["matches"]), vec!["Button"]);
    assert!(body.get("ranking").is_none());
}

#[test]
fn resolve_joins_words_and_tolerates_filler() {
    let body = run_json(&["resolve", "add", "a", "date", "picker", "please"]);
    assert_eq!(body["phrase"], "add a date picker please");
    assert_eq!(body["type"], "fuzzy");
    assert_eq!(names(&body["matches"]), vec!["Date Picker"]);
}

#[test]
fn resolve_gibberish_matches_nothing() {
    let body = run_json(&["resolve", "xyzzy"]);
    assert_eq!(body["type"], "none");
    assert_eq!(body["matches"], Value::Array(Vec::new()));
}

#[test]
fn resolve_explain_includes_ranking() {
    let body = run_json(&["resolve", "hover", "--explain"]);
    assert_eq!(body["type"], "ambiguous");
    assert_eq!(
        names(&body["matches"]),
        vec!["Hover Card", "Tooltip", "Popover"]
    );
    let ranking = body["ranking"].as_array().expect("ranking");
    assert!(ranking.len() >= 3);
    assert_eq!(ranking[0]["entry"]["name"], "Hover Card");
    assert!(ranking[0]["distance"].as_f64().is_some());
}

#[test]
fn resolve_human_output_shows_preview() {
    cli()
        .args(["resolve", "btn"])
        .assert()
        .success()
        .stdout(predicate::str::contains("'btn' -> Button (exact)"))
        .stdout(predicate::str::contains("Click me"));
}

#[test]
fn classify_small_rectangle() {
    let body = run_json(&["classify", "--geo", "rectangle", "--width", "40", "--height", "30"]);
    assert_eq!(body["rule"], "geo.rectangle.small");
    assert_eq!(body["signal"]["kind"], "geo");
    assert_eq!(body["features"]["small"], true);
    assert_eq!(
        names(&body["candidates"]),
        vec!["Button", "Icon Button", "Badge", "Checkbox"]
    );
}

#[test]
fn classify_closed_freehand() {
    cli()
        .args([
            "classify",
            "--freehand",
            "--closed",
            "--width",
            "60",
            "--height",
            "55",
        ])
        .assert()
        .success()
        .stdout(predicate::str::contains("via draw.closed.small"))
        .stdout(predicate::str::contains("1. Avatar"));
}

#[test]
fn classify_unknown_shape_falls_back() {
    let body = run_json(&["classify", "--geo", "blob", "--width", "50", "--height", "50"]);
    assert_eq!(body["rule"], "geo.unknown");
    assert_eq!(names(&body["candidates"]), vec!["Card", "Button", "Badge"]);
}

#[test]
fn classify_requires_a_shape_kind() {
    cli()
        .args(["classify", "--width", "10", "--height", "10"])
        .assert()
        .failure();
}

#[test]
fn catalog_filters_by_category() {
    let body = run_json(&["catalog", "--category", "overlay"]);
    assert_eq!(
        names(&body),
        vec!["Dialog", "Drawer", "Hover Card", "Popover", "Tooltip"]
    );
}

#[test]
fn catalog_rejects_unknown_category() {
    cli()
        .args(["catalog", "--category", "gadgets"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Unknown category 'gadgets'"));
}

#[test]
fn custom_catalog_replaces_builtin() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("catalog.json");
    fs::write(
        &path,
        r#"{"components": [
            {"name": "Widget", "category": "display", "aliases": ["gizmo"]},
            {"name": "Gadget", "category": "form", "keywords": ["tool"]}
        ]}"#,
    )
    .unwrap();

    let body = run_json(&["resolve", "gizmo", "--catalog", path.to_str().unwrap()]);
    assert_eq!(body["type"], "exact");
    assert_eq!(names(&body["matches"]), vec!["Widget"]);

    let listed = run_json(&["catalog", "--catalog", path.to_str().unwrap()]);
    assert_eq!(names(&listed), vec!["Widget", "Gadget"]);
}

#[test]
fn custom_catalog_warns_once_per_shared_surface() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("catalog.json");
    fs::write(
        &path,
        r#"[
            {"name": "Widget", "category": "display", "aliases": ["thing"]},
            {"name": "Gadget", "category": "form", "aliases": ["thing"]}
        ]"#,
    )
    .unwrap();

    let output = cli()
        .args(["catalog", "--json", "--catalog", path.to_str().unwrap()])
        .output()
        .expect("command run");
    assert!(output.status.success());
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert_eq!(stderr.matches("'thing'").count(), 1, "{stderr}");
}

#[test]
fn profile_command_shows_description() {
    cli()
        .args(["profile", "--profile", "strict"])
        .assert()
        .success()
        .stdout(predicate::str::starts_with("strict: Places only near-certain matches"))
        .stdout(predicate::str::contains("settle window: 500 ms"));

    let body = run_json(&["profile"]);
    assert_eq!(body["name"], "default");
    assert_eq!(
        body["description"],
        "Balanced matching for conversational voice input and quick sketches."
    );
    assert_eq!(body["settle_window_ms"], 300);
    assert_eq!(body["text"]["max_candidates"], 5);
}

#[test]
fn profile_with_wide_candidate_cap_is_rejected() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("wide.json");
    fs::write(&path, r#"{"text": {"max_candidates": 8}}"#).unwrap();
    cli()
        .args(["resolve", "hover", "--profile", path.to_str().unwrap()])
        .assert()
        .failure()
        .stderr(predicate::str::contains("max_candidates must be within 2..=5, got 8"));
}

#[test]
fn missing_catalog_file_fails() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("absent.json");
    cli()
        .args(["resolve", "btn", "--catalog", path.to_str().unwrap()])
        .assert()
        .failure()
        .stderr(predicate::str::starts_with("Error: Failed to load catalog"));
}
