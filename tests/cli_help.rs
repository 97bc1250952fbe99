use std::process::Command;

fn deodar(args: &[&str]) -> std::process::Output {
    Command::new(env!("CARGO_BIN_EXE_deodar"))
        .args(args)
        .output()
        .unwrap()
}

#[test]
fn test_help_lists_every_command() {
    let output = deodar(&["--help"]);
    assert!(output.status.success());

    let stdout = String::from_utf8_lossy(&output.stdout);
    for command in ["new", "development", "production", "watch", "bundle"] {
        assert!(
            stdout.contains(command),
            "help should list '{}'; got:\n{}",
            command,
            stdout
        );
    }
}

#[test]
fn test_no_arguments_prints_help_and_fails() {
    let output = deodar(&[]);
    assert!(!output.status.success());

    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("Usage"), "got:\n{}", stderr);
}

#[test]
fn test_aliases_are_accepted() {
    for alias in ["n", "d", "dev", "p", "prod", "w", "wat", "b"] {
        let output = deodar(&[alias, "--help"]);
        assert!(
            output.status.success(),
            "alias '{}' should be accepted: {}",
            alias,
            String::from_utf8_lossy(&output.stderr)
        );
    }
}

#[test]
fn test_unknown_command_is_rejected() {
    let output = deodar(&["deploy"]);
    assert!(!output.status.success());
}

#[test]
fn test_version_flag() {
    let output = deodar(&["--version"]);
    assert!(output.status.success());
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains(env!("CARGO_PKG_VERSION")));
}
