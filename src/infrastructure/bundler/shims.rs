//! Global shims for externalized modules
//!
//! Each external module is aliased to a tiny generated module that hands out
//! the page global instead of a bundled copy.

use std::collections::BTreeMap;
use std::fs;
use std::io;
use std::path::Path;

/// Source of the shim module for a page global.
pub fn shim_source(global: &str) -> String {
    format!(
        "const globalValue = window.{global};\nexport default globalValue;\nexport {{ globalValue }};\n"
    )
}

/// Shim files written to a directory, as `(module, relative path)` pairs.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ShimSet {
    pub aliases: Vec<(String, String)>,
}

/// Write one shim per external into `dir`.
///
/// File names are derived from the module name with an index suffix so that
/// scoped packages (`@wordpress/element`) map to distinct flat files.
pub fn write_shims(dir: &Path, externals: &BTreeMap<String, String>) -> io::Result<ShimSet> {
    let mut set = ShimSet::default();

    for (index, (module, global)) in externals.iter().enumerate() {
        let safe: String = module
            .chars()
            .map(|c| if c.is_ascii_alphanumeric() { c } else { '_' })
            .collect();
        let file_name = format!("{}_{}.js", safe, index);

        fs::write(dir.join(&file_name), shim_source(global))?;
        set.aliases.push((module.clone(), format!("./{}", file_name)));
    }

    Ok(set)
}
