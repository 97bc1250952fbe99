//! Deodar CLI - build tool for WordPress plugins and themes
//!
//! Usage: deodar <COMMAND>
//!
//! Commands:
//!   new          Create a new ACF block
//!   development  Compile once with source maps
//!   production   Compile once, minified
//!   watch        Compile, then recompile on change
//!   bundle       Zip the project into dist/

mod commands;
mod ui;

use std::process::ExitCode;

use clap::Parser;

use commands::new::NewOptions;
use deodar::domain::value_objects::BuildMode;
use deodar::presentation::{Cli, Commands};
use ui::context::UiContext;

fn main() -> ExitCode {
    let cli = Cli::parse();
    let ui = UiContext::new(cli.json, cli.verbose, cli.color);

    let (command, result) = match cli.command {
        Commands::New {
            name,
            title,
            category,
            js,
            yes,
        } => (
            "new",
            commands::new::cmd_new(
                NewOptions {
                    name,
                    title,
                    category,
                    js,
                    yes,
                },
                &ui,
            ),
        ),
        Commands::Development => (
            BuildMode::Development.as_str(),
            commands::build::cmd_build(BuildMode::Development, &ui),
        ),
        Commands::Production => (
            BuildMode::Production.as_str(),
            commands::build::cmd_build(BuildMode::Production, &ui),
        ),
        Commands::Watch => ("watch", commands::watch::cmd_watch(&ui)),
        Commands::Bundle => ("bundle", commands::bundle::cmd_bundle(&ui)),
    };

    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            commands::report_error(command, &err, &ui);
            ExitCode::FAILURE
        }
    }
}
