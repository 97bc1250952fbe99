//! Reusable project file contents.

#![allow(dead_code)]

pub const PLUGIN_ENTRY: &str = "<?php\n/**\n * Plugin Name: Acme\n */\n";

pub const THEME_FUNCTIONS: &str = "<?php\n";

pub const THEME_STYLE: &str = "/*\nTheme Name: Acme\n*/\n";

pub const SIMPLE_SCSS: &str = "$brand: #c00;\n.acme { color: $brand; }\n";

pub const SIMPLE_JS: &str = "export const answer = 42;\nconsole.log(answer);\n";

pub const BUNDLE_IGNORE: &str = "# build artefacts\ndist/\n*.log\nnode_modules/\n";
