//! Subprocess bundler
//!
//! Styles go through the Sass CLI, scripts through esbuild. Both are looked
//! up through the configured [`Toolchain`], then `node_modules/.bin`, then
//! `PATH`.

use std::path::{Path, PathBuf};
use std::process::{Command, Stdio};

use crate::config::Toolchain;
use crate::domain::entities::AssetKind;
use crate::domain::ports::{BundleRequest, Bundler, BundlerError};

use super::shims::write_shims;

/// Bundler that shells out to `sass` and `esbuild`.
#[derive(Debug, Clone)]
pub struct ExternalBundler {
    sass: PathBuf,
    esbuild: PathBuf,
    load_paths: Vec<PathBuf>,
}

impl ExternalBundler {
    /// Resolve tool locations for a project.
    pub fn new(project_root: &Path, toolchain: &Toolchain) -> Self {
        let node_modules = project_root.join("node_modules");
        let load_paths = if node_modules.is_dir() {
            vec![node_modules]
        } else {
            Vec::new()
        };

        Self {
            sass: resolve_tool(project_root, toolchain.sass.as_deref(), "sass"),
            esbuild: resolve_tool(project_root, toolchain.esbuild.as_deref(), "esbuild"),
            load_paths,
        }
    }

    pub fn sass(&self) -> &Path {
        &self.sass
    }

    pub fn esbuild(&self) -> &Path {
        &self.esbuild
    }

    fn compile_style(&self, request: &BundleRequest<'_>) -> Result<(), BundlerError> {
        let mut cmd = Command::new(&self.sass);
        cmd.arg("--no-error-css");

        if request.mode.minify() {
            cmd.arg("--style=compressed");
        } else {
            cmd.arg("--style=expanded");
        }

        if request.mode.source_maps() {
            cmd.arg("--source-map").arg("--embed-sources");
        } else {
            cmd.arg("--no-source-map");
        }

        for load_path in &self.load_paths {
            cmd.arg(format!("--load-path={}", load_path.display()));
        }

        cmd.arg(request.source).arg(request.output);
        run(&mut cmd, &self.sass)
    }

    fn compile_script(&self, request: &BundleRequest<'_>) -> Result<(), BundlerError> {
        // Aliases are resolved against the working directory, so the shims
        // live in their own temp dir that esbuild runs from.
        let shim_dir = tempfile::tempdir()?;
        let shims = write_shims(shim_dir.path(), request.externals)?;

        let mut cmd = Command::new(&self.esbuild);
        cmd.current_dir(shim_dir.path())
            .arg(request.source)
            .arg("--bundle")
            .arg("--format=iife")
            .arg("--log-level=error")
            .arg(format!("--outfile={}", request.output.display()));

        if request.mode.minify() {
            cmd.arg("--minify");
        }
        if request.mode.source_maps() {
            cmd.arg("--sourcemap");
        }

        for (module, shim) in &shims.aliases {
            cmd.arg(format!("--alias:{}={}", module, shim));
        }

        let result = run(&mut cmd, &self.esbuild);
        shim_dir.close()?;
        result
    }
}

impl Bundler for ExternalBundler {
    fn bundle(&self, request: &BundleRequest<'_>) -> Result<(), BundlerError> {
        match request.kind {
            AssetKind::Style => self.compile_style(request),
            AssetKind::Script => self.compile_script(request),
        }
    }
}

fn resolve_tool(project_root: &Path, configured: Option<&Path>, name: &str) -> PathBuf {
    if let Some(path) = configured {
        return path.to_path_buf();
    }

    let bin_name = if cfg!(windows) {
        format!("{}.cmd", name)
    } else {
        name.to_string()
    };
    let local = project_root.join("node_modules").join(".bin").join(&bin_name);
    if local.is_file() {
        return local;
    }

    PathBuf::from(bin_name)
}

fn run(cmd: &mut Command, tool: &Path) -> Result<(), BundlerError> {
    let output = cmd
        .stdin(Stdio::null())
        .output()
        .map_err(|e| BundlerError::ToolUnavailable {
            tool: tool.to_path_buf(),
            message: e.to_string(),
        })?;

    if output.status.success() {
        return Ok(());
    }

    let mut stderr = String::from_utf8_lossy(&output.stderr).trim().to_string();
    if stderr.is_empty() {
        stderr = String::from_utf8_lossy(&output.stdout).trim().to_string();
    }

    Err(BundlerError::Failed {
        tool: tool.to_path_buf(),
        status: output
            .status
            .code()
            .map(|c| format!("exit code {}", c))
            .unwrap_or_else(|| "a signal".to_string()),
        stderr,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::tempdir;

    #[test]
    fn configured_tool_wins() {
        let dir = tempdir().unwrap();
        let toolchain = Toolchain {
            sass: Some(PathBuf::from("/opt/bin/sass")),
            esbuild: None,
        };

        let bundler = ExternalBundler::new(dir.path(), &toolchain);
        assert_eq!(bundler.sass(), Path::new("/opt/bin/sass"));
    }

    #[test]
    fn falls_back_to_path_lookup() {
        let dir = tempdir().unwrap();
        let bundler = ExternalBundler::new(dir.path(), &Toolchain::default());

        let expected = if cfg!(windows) { "esbuild.cmd" } else { "esbuild" };
        assert_eq!(bundler.esbuild(), Path::new(expected));
    }

    #[test]
    fn prefers_project_local_binary() {
        let dir = tempdir().unwrap();
        let bin = dir.path().join("node_modules").join(".bin");
        fs::create_dir_all(&bin).unwrap();
        let name = if cfg!(windows) { "sass.cmd" } else { "sass" };
        fs::write(bin.join(name), "").unwrap();

        let bundler = ExternalBundler::new(dir.path(), &Toolchain::default());
        assert_eq!(bundler.sass(), bin.join(name));
    }

    #[test]
    fn missing_tool_is_reported_not_panicked() {
        let dir = tempdir().unwrap();
        let toolchain = Toolchain {
            sass: Some(dir.path().join("no-such-sass")),
            esbuild: None,
        };
        let bundler = ExternalBundler::new(dir.path(), &toolchain);

        let source = dir.path().join("a.scss");
        fs::write(&source, ".x { color: red; }").unwrap();
        let output = dir.path().join("a.build.css");
        let externals = Default::default();

        let err = bundler
            .bundle(&BundleRequest {
                source: &source,
                output: &output,
                kind: AssetKind::Style,
                mode: crate::domain::value_objects::BuildMode::Development,
                externals: &externals,
            })
            .unwrap_err();
        assert!(matches!(err, BundlerError::ToolUnavailable { .. }));
    }
}
