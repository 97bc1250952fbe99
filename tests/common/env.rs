//! Test environment builder for isolated Deodar testing.
//!
//! Provides `TestEnv` - a project directory named `acme` inside a temp
//! directory (the directory name doubles as the plugin slug), plus helpers
//! to run the Deodar CLI against it.

#![allow(dead_code)]

use std::path::{Path, PathBuf};
use std::process::{Command, Output};
use tempfile::TempDir;

use super::fixtures::{PLUGIN_ENTRY, THEME_FUNCTIONS, THEME_STYLE};

/// Name of the project directory created by `TestEnv`.
pub const PROJECT_NAME: &str = "acme";

/// Result of running a Deodar CLI command
#[derive(Debug)]
pub struct TestResult {
    pub success: bool,
    pub exit_code: i32,
    pub stdout: String,
    pub stderr: String,
}

impl TestResult {
    pub fn is_success(&self) -> bool {
        self.success
    }

    /// Parse stdout as newline-delimited JSON.
    pub fn json_lines(&self) -> Vec<serde_json::Value> {
        self.stdout
            .lines()
            .filter(|line| !line.trim().is_empty())
            .map(|line| {
                serde_json::from_str(line)
                    .unwrap_or_else(|e| panic!("invalid JSON line {:?}: {}", line, e))
            })
            .collect()
    }

    /// All NDJSON events with the given `event` tag.
    pub fn events(&self, name: &str) -> Vec<serde_json::Value> {
        self.json_lines()
            .into_iter()
            .filter(|value| value["event"] == name)
            .collect()
    }
}

/// Isolated project directory.
pub struct TestEnv {
    temp: TempDir,
    root: PathBuf,
    deodar_bin: PathBuf,
}

impl TestEnv {
    pub fn builder() -> TestEnvBuilder {
        TestEnvBuilder::default()
    }

    /// A plugin project with nothing but its entry point.
    pub fn plugin() -> Self {
        Self::builder().build()
    }

    pub fn project_root(&self) -> &Path {
        &self.root
    }

    /// Directory that contains the project (never a project itself).
    pub fn outside(&self) -> &Path {
        self.temp.path()
    }

    pub fn project_path(&self, relative: &str) -> PathBuf {
        self.root.join(relative)
    }

    /// Run deodar from the project root
    pub fn run(&self, args: &[&str]) -> TestResult {
        self.run_from_with_env(&self.root, args, &[])
    }

    pub fn run_with_env(&self, args: &[&str], env_vars: &[(&str, &str)]) -> TestResult {
        self.run_from_with_env(&self.root, args, env_vars)
    }

    pub fn run_from(&self, cwd: &Path, args: &[&str]) -> TestResult {
        self.run_from_with_env(cwd, args, &[])
    }

    pub fn run_from_with_env(
        &self,
        cwd: &Path,
        args: &[&str],
        env_vars: &[(&str, &str)],
    ) -> TestResult {
        let mut cmd = Command::new(&self.deodar_bin);
        cmd.current_dir(cwd)
            .args(args)
            .arg("--color")
            .arg("never")
            .env("NO_COLOR", "1")
            .env_remove("DEODAR_SASS")
            .env_remove("DEODAR_ESBUILD");

        for (key, value) in env_vars {
            cmd.env(key, value);
        }

        let output = cmd.output().expect("Failed to execute deodar");
        output_to_result(output)
    }

    pub fn read(&self, relative: &str) -> String {
        std::fs::read_to_string(self.project_path(relative))
            .unwrap_or_else(|e| panic!("Failed to read {}: {}", relative, e))
    }

    pub fn write(&self, relative: &str, content: &str) {
        let full_path = self.project_path(relative);
        if let Some(parent) = full_path.parent() {
            std::fs::create_dir_all(parent).expect("Failed to create directories");
        }
        std::fs::write(&full_path, content).expect("Failed to write file");
    }

    pub fn create_dirs(&self, dirs: &[&str]) {
        for dir in dirs {
            std::fs::create_dir_all(self.project_path(dir)).expect("Failed to create directory");
        }
    }
}

fn output_to_result(output: Output) -> TestResult {
    TestResult {
        success: output.status.success(),
        exit_code: output.status.code().unwrap_or(-1),
        stdout: String::from_utf8_lossy(&output.stdout).to_string(),
        stderr: String::from_utf8_lossy(&output.stderr).to_string(),
    }
}

/// Builder for TestEnv with fluent API
#[derive(Default)]
pub struct TestEnvBuilder {
    theme: bool,
    bare: bool,
    files: Vec<(String, String)>,
}

impl TestEnvBuilder {
    /// Lay the project out as a theme instead of a plugin.
    pub fn theme(mut self) -> Self {
        self.theme = true;
        self
    }

    /// Neither plugin nor theme markers.
    pub fn bare(mut self) -> Self {
        self.bare = true;
        self
    }

    pub fn with_file(mut self, relative: &str, content: &str) -> Self {
        self.files.push((relative.to_string(), content.to_string()));
        self
    }

    pub fn build(self) -> TestEnv {
        let temp = TempDir::new().expect("Failed to create temp dir");
        let root = temp.path().join(PROJECT_NAME);
        std::fs::create_dir_all(&root).expect("Failed to create project dir");

        let env = TestEnv {
            temp,
            root,
            deodar_bin: PathBuf::from(env!("CARGO_BIN_EXE_deodar")),
        };

        if !self.bare {
            if self.theme {
                env.write("functions.php", THEME_FUNCTIONS);
                env.write("style.css", THEME_STYLE);
            } else {
                env.write(&format!("{}.php", PROJECT_NAME), PLUGIN_ENTRY);
            }
        }
        for (relative, content) in &self.files {
            env.write(relative, content);
        }

        env
    }
}
