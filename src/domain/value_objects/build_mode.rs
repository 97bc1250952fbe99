//! Build mode value object

use std::fmt;

/// How assets are compiled.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum BuildMode {
    /// Unminified output with source maps
    #[default]
    Development,
    /// Minified output, no source maps
    Production,
}

impl BuildMode {
    pub fn is_production(&self) -> bool {
        matches!(self, BuildMode::Production)
    }

    pub fn minify(&self) -> bool {
        self.is_production()
    }

    pub fn source_maps(&self) -> bool {
        !self.is_production()
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            BuildMode::Development => "development",
            BuildMode::Production => "production",
        }
    }
}

impl fmt::Display for BuildMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
