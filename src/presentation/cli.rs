//! CLI Argument Parsing
//!
//! This module defines the CLI interface using clap.
//!
//! ## Design Notes
//!
//! - Global flags (--json, --color, --verbose) are inherited by all subcommands
//! - Every subcommand has short aliases (`d`, `dev`, ...)

use clap::{Parser, Subcommand};

#[derive(clap::ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
pub enum ColorWhen {
    Auto,
    Always,
    Never,
}

/// Deodar - build tool for WordPress plugins and themes with ACF blocks
#[derive(Parser, Debug)]
#[command(name = "deodar")]
#[command(author, version, about, long_about = None)]
#[command(arg_required_else_help = true)]
pub struct Cli {
    /// Output NDJSON events instead of text
    #[arg(long, global = true)]
    pub json: bool,

    /// Color output mode
    #[arg(long, global = true, value_enum)]
    pub color: Option<ColorWhen>,

    /// Verbosity level (-v, -vv)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Create a new ACF block under blocks/acf/<slug>
    #[command(visible_alias = "n")]
    New {
        /// Block name (prompted for when omitted)
        name: Option<String>,

        /// Block title (defaults to the name in Title Case)
        #[arg(long)]
        title: Option<String>,

        /// Block category (text, media, design, widgets, theme, or any custom value)
        #[arg(long)]
        category: Option<String>,

        /// Also create a script for the block
        #[arg(long)]
        js: bool,

        /// Accept defaults for everything not given on the command line
        #[arg(short, long)]
        yes: bool,
    },

    /// Compile once with source maps, unminified
    #[command(visible_aliases = ["d", "dev"])]
    Development,

    /// Compile once, minified, without source maps
    #[command(visible_aliases = ["p", "prod"])]
    Production,

    /// Compile, then recompile whenever a .js or .scss file changes
    #[command(visible_aliases = ["w", "wat"])]
    Watch,

    /// Zip the project into dist/<name>.zip
    #[command(visible_alias = "b")]
    Bundle,
}
