use assert_cmd::cargo::cargo_bin_cmd;
use predicates::prelude::*;
use serde_json::Value;
use std::fs;

#[test]
fn viewer_frame_is_a_stable_json_contract() {
    let output = cargo_bin_cmd!("class-notes")
        .arg("viewer")
        .arg("/viewer.html?mode=image&count=5&src=/public/deck/")
        .args(["--step", "next", "--step", "next", "--step", "next"])
        .args(["--step", "next", "--step", "next"])
        .assert()
        .success()
        .get_output()
        .stdout
        .clone();

    let value: Value = serde_json::from_slice(&output).expect("stdout should contain valid json");

    insta::assert_json_snapshot!("viewer_clamps_at_last_slide", value);
}

#[test]
fn viewer_under_project_path_rewrites_assets() {
    let output = cargo_bin_cmd!("class-notes")
        .arg("viewer")
        .arg("https://example.github.io/class_notes/viewer.html?mode=image&count=3&src=public/OS&download=public/os.pdf")
        .args(["--step", "goto:2"])
        .assert()
        .success()
        .get_output()
        .stdout
        .clone();

    let value: Value = serde_json::from_slice(&output).expect("stdout should contain valid json");
    assert_eq!(value["current"], 2);
    assert_eq!(value["download"], "/class_notes/public/os.pdf");
    assert_eq!(value["frame"]["image_src"], "/class_notes/public/OS/Slide2.jpg");
    assert_eq!(value["frame"]["preload"].as_array().map(Vec::len), Some(2));
}

#[test]
fn viewer_rejects_unknown_steps() {
    cargo_bin_cmd!("class-notes")
        .arg("viewer")
        .arg("/viewer.html?mode=image")
        .args(["--step", "sideways"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("expected next, prev or goto:N"));
}

#[test]
fn viewer_outside_image_mode_reports_message() {
    cargo_bin_cmd!("class-notes")
        .arg("viewer")
        .arg("/viewer.html?mode=pdf")
        .assert()
        .success()
        .stdout(predicate::str::contains("Only Image Mode is supported"));
}

#[test]
fn thumbs_lists_every_slide() {
    cargo_bin_cmd!("class-notes")
        .arg("thumbs")
        .arg("/viewer.html?mode=image&count=3&src=deck&prefix=Page&ext=.png")
        .assert()
        .success()
        .stdout("1\t/deck/Page1.png\n2\t/deck/Page2.png\n3\t/deck/Page3.png\n");
}

#[test]
fn thumbs_fails_outside_image_mode() {
    cargo_bin_cmd!("class-notes")
        .arg("thumbs")
        .arg("/viewer.html")
        .assert()
        .failure()
        .stderr(predicate::str::contains("Only Image Mode is supported"));
}

#[test]
fn search_lists_web_technologies_documents() {
    cargo_bin_cmd!("class-notes")
        .arg("search")
        .arg("WT")
        .assert()
        .success()
        .stdout(predicate::str::starts_with("8 results\n"))
        .stdout(predicate::str::contains("WT Unit 3 - MERN Stack\tWeb Technologies"))
        .stdout(predicate::str::contains("(new tab)"));
}

#[test]
fn search_without_matches_prints_empty_json_array() {
    let output = cargo_bin_cmd!("class-notes")
        .args(["search", "zzz", "--json"])
        .assert()
        .success()
        .get_output()
        .stdout
        .clone();

    let value: Value = serde_json::from_slice(&output).expect("stdout should contain valid json");
    assert_eq!(value, Value::Array(Vec::new()));
}

#[test]
fn search_html_renders_no_results_block() {
    cargo_bin_cmd!("class-notes")
        .args(["search", "zzz", "--html"])
        .assert()
        .success()
        .stdout(predicate::str::contains(r#"No results found for "zzz""#));
}

#[test]
fn search_uses_custom_catalog() {
    let temp = tempfile::tempdir().expect("temp dir should be created");
    let catalog = temp.path().join("catalog.json");
    fs::write(
        &catalog,
        r#"[{"type": "pdf", "title": "Graph Theory", "subtitle": "Maths", "url": "/g.pdf", "icon": "pdf"}]"#,
    )
    .expect("catalog should be written");

    cargo_bin_cmd!("class-notes")
        .args(["search", "graph", "--json", "--catalog"])
        .arg(&catalog)
        .assert()
        .success()
        .stdout(predicate::str::contains(r#""url": "/g.pdf""#))
        .stdout(predicate::str::contains(r#""new_tab": true"#));
}

#[test]
fn search_fails_for_missing_catalog() {
    let temp = tempfile::tempdir().expect("temp dir should be created");

    cargo_bin_cmd!("class-notes")
        .args(["search", "os", "--catalog"])
        .arg(temp.path().join("missing.json"))
        .assert()
        .failure()
        .stderr(predicate::str::contains("failed to load catalog"));
}

#[test]
fn config_file_changes_base_segment() {
    let temp = tempfile::tempdir().expect("temp dir should be created");
    let config = temp.path().join("portal.json");
    fs::write(&config, r#"{"base_segment": "/notes/", "preload_radius": 2}"#)
        .expect("config should be written");

    let output = cargo_bin_cmd!("class-notes")
        .arg("--config")
        .arg(&config)
        .args(["viewer", "/notes/viewer.html?mode=image&count=9&src=d", "--step", "goto:5"])
        .assert()
        .success()
        .get_output()
        .stdout
        .clone();

    let value: Value = serde_json::from_slice(&output).expect("stdout should contain valid json");
    assert_eq!(value["frame"]["image_src"], "/notes/d/Slide5.jpg");
    assert_eq!(value["frame"]["preload"].as_array().map(Vec::len), Some(4));
}

#[test]
fn huge_preload_radius_is_bounded_by_the_deck() {
    let output = cargo_bin_cmd!("class-notes")
        .args(["viewer", "/viewer.html?mode=image&count=3&src=d", "--step", "goto:2"])
        .env("CLASS_NOTES_PRELOAD_RADIUS", "4294967295")
        .timeout(std::time::Duration::from_secs(10))
        .assert()
        .success()
        .get_output()
        .stdout
        .clone();

    let value: Value = serde_json::from_slice(&output).expect("stdout should contain valid json");
    assert_eq!(value["frame"]["preload"], serde_json::json!(["/d/Slide1.jpg", "/d/Slide3.jpg"]));
}

#[test]
fn invalid_env_override_fails() {
    cargo_bin_cmd!("class-notes")
        .args(["search", "os"])
        .env("CLASS_NOTES_DEBOUNCE_MS", "fast")
        .assert()
        .failure()
        .stderr(predicate::str::contains("CLASS_NOTES_DEBOUNCE_MS"));
}

#[test]
fn catalog_prints_builtin_resources() {
    let output = cargo_bin_cmd!("class-notes")
        .arg("catalog")
        .assert()
        .success()
        .get_output()
        .stdout
        .clone();

    let value: Value = serde_json::from_slice(&output).expect("stdout should contain valid json");
    let items = value.as_array().expect("catalog should be an array");
    assert_eq!(items.len(), 27);
    assert_eq!(items[0]["type"], "subject");
    assert_eq!(items[0]["title"], "Machine Learning");
}

#[test]
fn version_prints_package_version() {
    cargo_bin_cmd!("class-notes")
        .arg("version")
        .assert()
        .success()
        .stdout(format!("{}\n", env!("CARGO_PKG_VERSION")));
}
