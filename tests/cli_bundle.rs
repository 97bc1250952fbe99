mod common;

use std::fs::File;

use common::*;

fn archive_entries(env: &TestEnv) -> Vec<String> {
    let file = File::open(env.project_path("dist/acme.zip")).unwrap();
    let mut archive = zip::ZipArchive::new(file).unwrap();
    let mut names: Vec<String> = (0..archive.len())
        .map(|i| archive.by_index(i).unwrap().name().to_string())
        .collect();
    names.sort();
    names
}

#[test]
fn test_bundle_creates_archive_in_dist() {
    let env = TestEnv::builder()
        .with_file("source/main.scss", SIMPLE_SCSS)
        .with_file("build/main.build.css", ".acme{}")
        .build();

    let result = env.run(&["bundle"]);

    assert!(result.is_success(), "stderr:\n{}", result.stderr);
    assert_output_contains!(result, "Archive Created");
    assert_eq!(
        archive_entries(&env),
        vec!["acme.php", "build/main.build.css", "source/main.scss"]
    );
}

#[test]
fn test_bundle_honours_bundleignore() {
    let env = TestEnv::builder()
        .with_file(".bundleignore", BUNDLE_IGNORE)
        .with_file("debug.log", "noise")
        .with_file("logs/nested/trace.log", "noise")
        .with_file("node_modules/pkg/index.js", "module.exports = 1;")
        .with_file("source/app.js", SIMPLE_JS)
        .build();

    let result = env.run(&["bundle"]);

    assert!(result.is_success(), "stderr:\n{}", result.stderr);
    let entries = archive_entries(&env);
    assert!(entries.contains(&"source/app.js".to_string()));
    assert!(entries.contains(&".bundleignore".to_string()));
    assert!(!entries.iter().any(|e| e.ends_with(".log")), "{:?}", entries);
    assert!(!entries.iter().any(|e| e.starts_with("node_modules")));
    assert!(!entries.iter().any(|e| e.starts_with("dist")));
}

#[test]
fn test_bundle_twice_replaces_archive() {
    let env = TestEnv::plugin();

    assert!(env.run(&["bundle"]).is_success());
    env.write("extra.txt", "later");
    let result = env.run(&["bundle"]);

    assert!(result.is_success(), "stderr:\n{}", result.stderr);
    let entries = archive_entries(&env);
    assert!(entries.contains(&"extra.txt".to_string()));
    assert!(!entries.iter().any(|e| e.starts_with("dist")));
}

#[test]
fn test_bundle_json_output() {
    let env = TestEnv::plugin();

    let result = env.run(&["--json", "bundle"]);

    assert!(result.is_success(), "stderr:\n{}", result.stderr);
    let complete = result.events("bundle_complete");
    assert_eq!(complete.len(), 1);
    assert_eq!(complete[0]["files"], 1);
    assert_eq!(complete[0]["archive"], "dist/acme.zip");
}

#[test]
fn test_bundle_outside_project_fails() {
    let env = TestEnv::builder().bare().build();

    let result = env.run(&["bundle"]);

    assert_eq!(result.exit_code, 1);
    assert_not_exists!(env, "dist");
}
