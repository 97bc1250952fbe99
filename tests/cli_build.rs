mod common;

use common::*;

const MISSING_TOOLS: &[(&str, &str)] = &[
    ("DEODAR_SASS", "/nonexistent/deodar-test/sass"),
    ("DEODAR_ESBUILD", "/nonexistent/deodar-test/esbuild"),
];

fn project_with_sources() -> TestEnv {
    TestEnv::builder()
        .with_file("source/main.scss", SIMPLE_SCSS)
        .with_file("source/app.js", SIMPLE_JS)
        .with_file("source/README.md", "not compiled")
        .with_file("blocks/acf/hero/hero.scss", SIMPLE_SCSS)
        .build()
}

#[test]
fn test_build_outside_project_fails() {
    let env = TestEnv::builder().bare().build();

    for command in ["development", "production"] {
        let result = env.run_with_env(&[command], MISSING_TOOLS);
        assert_eq!(result.exit_code, 1, "{}", command);
        assert_output_contains!(
            result,
            "You are not in the project folder, or you didn't name your plugin entry point correctly"
        );
    }
}

#[test]
fn test_build_from_parent_directory_fails() {
    let env = TestEnv::plugin();

    let result = env.run_from(env.outside(), &["development"]);

    assert_eq!(result.exit_code, 1);
}

#[test]
fn test_compile_failures_do_not_change_exit_code() {
    let env = project_with_sources();

    let result = env.run_with_env(&["production"], MISSING_TOOLS);

    assert!(result.is_success(), "stderr:\n{}", result.stderr);
    assert_output_contains!(result, "Failed to compile");
}

#[test]
fn test_build_writes_index_guards() {
    let env = project_with_sources();

    let result = env.run_with_env(&["development"], MISSING_TOOLS);

    assert!(result.is_success(), "stderr:\n{}", result.stderr);
    assert_exists!(env, "index.php");
    assert_exists!(env, "source/index.php");
    assert_exists!(env, "blocks/index.php");
    assert_exists!(env, "blocks/acf/hero/index.php");
    assert_exists!(env, "build/index.php");
    assert!(env.read("index.php").contains("Silence is golden"));
}

#[test]
fn test_build_keeps_existing_index_and_honours_skip() {
    let env = TestEnv::builder()
        .with_file("index.php", "<?php // custom")
        .with_file("vendor/lib/autoload.php", "<?php")
        .with_file("deodar.json", r#"{ "skip": ["vendor"] }"#)
        .build();

    let result = env.run_with_env(&["development"], MISSING_TOOLS);

    assert!(result.is_success(), "stderr:\n{}", result.stderr);
    assert_eq!(env.read("index.php"), "<?php // custom");
    assert_not_exists!(env, "vendor/index.php");
    assert_not_exists!(env, "vendor/lib/index.php");
}

#[test]
fn test_build_mentions_unknown_config_keys_when_verbose() {
    let env = TestEnv::builder()
        .with_file("deodar.json", r#"{ "externalz": {} }"#)
        .build();

    let quiet = env.run_with_env(&["development"], MISSING_TOOLS);
    assert!(quiet.is_success());
    assert!(!quiet.stderr.contains("externalz"), "stderr:\n{}", quiet.stderr);

    let result = env.run_with_env(&["-v", "development"], MISSING_TOOLS);
    assert!(result.is_success());
    assert!(
        result.stderr.contains("Unknown key 'externalz'"),
        "stderr:\n{}",
        result.stderr
    );
}

#[test]
fn test_build_json_events() {
    let env = project_with_sources();

    let result = env.run_with_env(&["--json", "development"], MISSING_TOOLS);

    assert!(result.is_success(), "stderr:\n{}", result.stderr);
    let lines = result.json_lines();
    assert_eq!(lines.first().unwrap()["event"], "start");
    assert_eq!(lines.last().unwrap()["event"], "complete");
    assert_eq!(lines.last().unwrap()["success"], false);

    let failed = result.events("file_failed");
    let sources: Vec<&str> = failed
        .iter()
        .map(|e| e["source"].as_str().unwrap())
        .collect();
    assert!(sources.contains(&"source/main.scss"), "{:?}", sources);
    assert!(sources.contains(&"source/app.js"), "{:?}", sources);
    assert!(sources.contains(&"blocks/acf/hero/hero.scss"), "{:?}", sources);
    assert!(!sources.iter().any(|s| s.ends_with(".md")));

    let finished = result.events("build_finished");
    assert_eq!(finished.len(), 1);
    assert_eq!(finished[0]["command"], "development");
    assert_eq!(finished[0]["compiled"], 0);
    assert_eq!(finished[0]["failed"], 3);

    assert!(!result.events("index_written").is_empty());
}

/// Whether `tool --version` runs; tests that need a real compiler return
/// early without it.
fn tool_available(tool: &str) -> bool {
    std::process::Command::new(tool)
        .arg("--version")
        .output()
        .map(|o| o.status.success())
        .unwrap_or(false)
}

const COMMENTED_SCSS: &str = "/* note */\n$accent: red;\n.acme { color: $accent; }\n";

#[test]
fn test_development_scss_is_expanded_with_source_map() {
    if !tool_available("sass") {
        return;
    }

    let env = TestEnv::builder()
        .with_file("source/main.scss", COMMENTED_SCSS)
        .build();

    let result = env.run_with_env(
        &["development"],
        &[("DEODAR_ESBUILD", "/nonexistent/deodar-test/esbuild")],
    );

    assert!(result.is_success(), "stderr:\n{}", result.stderr);
    let css = env.read("build/main.build.css");
    assert!(css.contains("color: red"), "{}", css);
    assert_exists!(env, "build/main.build.css.map");
}

#[test]
fn test_production_scss_is_compressed_without_comments_or_map() {
    if !tool_available("sass") {
        return;
    }

    let env = TestEnv::builder()
        .with_file("source/main.scss", COMMENTED_SCSS)
        .build();

    let result = env.run_with_env(
        &["production"],
        &[("DEODAR_ESBUILD", "/nonexistent/deodar-test/esbuild")],
    );

    assert!(result.is_success(), "stderr:\n{}", result.stderr);
    let css = env.read("build/main.build.css");
    assert!(css.contains("color:red"), "{}", css);
    assert!(!css.contains("/* note */"), "{}", css);
    assert!(!css.contains("note"), "{}", css);
    assert_not_exists!(env, "build/main.build.css.map");
}

#[test]
fn test_script_externals_resolve_to_page_globals() {
    if !tool_available("esbuild") {
        return;
    }

    let env = TestEnv::builder()
        .with_file(
            "source/app.js",
            "import $ from 'jquery';\n$('.acme').addClass('ready');\n",
        )
        .build();

    let result = env.run_with_env(
        &["development"],
        &[("DEODAR_SASS", "/nonexistent/deodar-test/sass")],
    );

    assert!(result.is_success(), "stderr:\n{}", result.stderr);
    assert!(
        !result.stderr.contains("Failed to compile source/app.js"),
        "stderr:\n{}",
        result.stderr
    );
    let js = env.read("build/app.build.js");
    assert!(js.contains("window.jQuery"), "{}", js);
    assert!(!js.contains("jQuery JavaScript Library"), "{}", js);
    // IIFE wrapper
    assert!(js.trim_start().starts_with("(()") || js.contains("(() => {"), "{}", js);
    assert_exists!(env, "build/app.build.js.map");
}

#[test]
fn test_production_script_is_minified_without_map() {
    if !tool_available("esbuild") {
        return;
    }

    let env = TestEnv::builder()
        .with_file(
            "source/app.js",
            "// note\nconst greeting = 'hello';\nconsole.log(greeting);\n",
        )
        .build();

    let result = env.run_with_env(
        &["production"],
        &[("DEODAR_SASS", "/nonexistent/deodar-test/sass")],
    );

    assert!(result.is_success(), "stderr:\n{}", result.stderr);
    let js = env.read("build/app.build.js");
    assert!(js.contains("hello"), "{}", js);
    assert!(!js.contains("// note"), "{}", js);
    assert_not_exists!(env, "build/app.build.js.map");
}

#[test]
fn test_build_warns_about_invalid_config() {
    let env = TestEnv::builder()
        .with_file("deodar.json", "{ not json")
        .build();

    let result = env.run_with_env(&["development"], MISSING_TOOLS);

    assert!(result.is_success());
    assert!(
        result.stderr.contains("Ignoring deodar.json"),
        "stderr:\n{}",
        result.stderr
    );
}
