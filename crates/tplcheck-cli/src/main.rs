// Copyright 2019-2026 Maravilla Labs, operated by SOLUTAS GmbH, Switzerland
// SPDX-License-Identifier: Apache-2.0
// SPDX-License-Identifier: MIT

use clap::{Parser, Subcommand};
use tplcheck_cli::commands;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "tplcheck")]
#[command(author = "Maravilla Labs")]
#[command(version)]
#[command(about = "Report template script validation CLI", long_about = None)]
struct Cli {
    /// Log level: error, warn, info, debug, trace
    #[arg(long, global = true, default_value = "warn")]
    log_level: String,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Validate a script file and print mapped diagnostics
    Check {
        /// Script file to validate
        file: String,
        /// Header file appended before compilation
        #[arg(long)]
        header: Option<String>,
        /// Context type name the script is compiled against
        #[arg(short, long, default_value = "Report")]
        context: String,
        /// Dependency folder named in missing-dependency hints
        #[arg(long)]
        deps_dir: Option<String>,
        /// Emit the full report as JSON
        #[arg(long)]
        json: bool,
    },
    /// Inspect or prune a user profile file
    Profile {
        #[command(subcommand)]
        action: ProfileAction,
    },
}

#[derive(Subcommand)]
enum ProfileAction {
    /// Print the profile contents
    Show {
        /// Profile file path
        path: String,
    },
    /// Re-save the profile, dropping empty dashboard entries
    Prune {
        /// Profile file path
        path: String,
    },
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    // Initialize tracing with the specified log level
    let filter = EnvFilter::try_new(&cli.log_level)
        .unwrap_or_else(|_| EnvFilter::new("warn"));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .init();

    match cli.command {
        Commands::Check {
            file,
            header,
            context,
            deps_dir,
            json,
        } => {
            let report = commands::check::run(
                &file,
                header.as_deref(),
                &context,
                deps_dir.as_deref(),
                json,
            )?;
            if !report.ok {
                std::process::exit(1);
            }
            Ok(())
        }
        Commands::Profile { action } => match action {
            ProfileAction::Show { path } => commands::profile::show(&path),
            ProfileAction::Prune { path } => commands::profile::prune(&path),
        },
    }
}
