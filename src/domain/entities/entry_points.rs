//! Entry points - compilable files discovered in one directory

use std::path::{Component, Path, PathBuf};

/// The two asset types Deodar compiles.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum AssetKind {
    Style,
    Script,
}

impl AssetKind {
    /// Classify a file by extension. Anything other than `.scss`/`.js` is `None`.
    pub fn from_path(path: &Path) -> Option<Self> {
        match path.extension().and_then(|e| e.to_str()) {
            Some("scss") => Some(AssetKind::Style),
            Some("js") => Some(AssetKind::Script),
            _ => None,
        }
    }

    /// Suffix that replaces the source extension in the compiled file name.
    pub fn output_suffix(&self) -> &'static str {
        match self {
            AssetKind::Style => ".build.css",
            AssetKind::Script => ".build.js",
        }
    }
}

/// Compilable files found directly inside one directory.
///
/// Both lists keep directory-listing order and never share a path.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct EntryPointSet {
    styles: Vec<PathBuf>,
    scripts: Vec<PathBuf>,
}

impl EntryPointSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a file if it is compilable. Returns whether it was kept.
    pub fn push(&mut self, path: PathBuf) -> bool {
        match AssetKind::from_path(&path) {
            Some(AssetKind::Style) => self.styles.push(path),
            Some(AssetKind::Script) => self.scripts.push(path),
            None => return false,
        }
        true
    }

    pub fn styles(&self) -> &[PathBuf] {
        &self.styles
    }

    pub fn scripts(&self) -> &[PathBuf] {
        &self.scripts
    }

    pub fn len(&self) -> usize {
        self.styles.len() + self.scripts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.styles.is_empty() && self.scripts.is_empty()
    }

    /// Styles first, then scripts.
    pub fn iter(&self) -> impl Iterator<Item = (AssetKind, &Path)> {
        self.styles
            .iter()
            .map(|p| (AssetKind::Style, p.as_path()))
            .chain(self.scripts.iter().map(|p| (AssetKind::Script, p.as_path())))
    }
}

/// Compute where a source file compiles to.
///
/// The output lives at `<dir of source>/<location>/<stem><suffix>`, with `.`
/// and `..` segments resolved lexically.
pub fn output_path(source: &Path, location: &Path, kind: AssetKind) -> PathBuf {
    let dir = source.parent().unwrap_or_else(|| Path::new(""));
    let stem = source
        .file_stem()
        .map(|s| s.to_string_lossy().into_owned())
        .unwrap_or_default();

    let file_name = format!("{}{}", stem, kind.output_suffix());
    normalize(&dir.join(location).join(file_name))
}

fn normalize(path: &Path) -> PathBuf {
    let mut out = PathBuf::new();
    for component in path.components() {
        match component {
            Component::CurDir => {}
            Component::ParentDir => {
                if !out.pop() {
                    out.push(component.as_os_str());
                }
            }
            other => out.push(other.as_os_str()),
        }
    }
    out
}
