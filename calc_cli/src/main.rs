//! # Fieldcalc CLI
//!
//! Command-line front end for `calc_core`: unit conversion, the beam bending
//! calculator, and JSON batch evaluation.
//!
//! ```text
//! fieldcalc convert length 12 in ft
//! fieldcalc beam --load 1000 --span 2 --e-gpa 200 --yield-mpa 250 --width 0.1 --height 0.2
//! fieldcalc run requests.json --format json
//! ```

mod args;
mod commands;
mod config;
mod error;

use std::io;
use std::process::ExitCode;

use clap::Parser;
use tracing::debug;
use tracing_subscriber::EnvFilter;

use crate::args::{Cli, Commands, ConfigCommands};
use crate::commands::Context;
use crate::error::CliError;

fn init_tracing(verbose: bool) {
    let default_level = if verbose { "debug" } else { "warn" };
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level)),
        )
        .with_writer(io::stderr)
        .init();
}

fn run(cli: Cli) -> Result<bool, CliError> {
    let config_path = config::resolve_path(cli.global.config.as_deref());
    let stdout = io::stdout();
    let mut out = stdout.lock();

    // Init must work even when the existing file is unreadable.
    if let Commands::Config(ConfigCommands::Init { force }) = cli.command {
        return commands::config_init(&config_path, force, &mut out);
    }

    let config = config::load(&config_path)?;
    let ctx = Context::new(&config, cli.global.format);
    debug!(config = %config_path.display(), format = ?ctx.format, "Resolved settings");

    match cli.command {
        Commands::Convert(args) => commands::convert(&args, &ctx, &mut out),
        Commands::Units(args) => commands::units(&args, &ctx, &mut out),
        Commands::Beam(args) => commands::beam(&args, &ctx, &mut out),
        Commands::Run(args) => commands::run(&args, &ctx, &mut out),
        Commands::Interactive => commands::interactive(&mut io::stdin().lock(), &ctx, &mut out),
        Commands::Config(ConfigCommands::Show) => commands::config_show(&config_path, &config, &mut out),
        // handled before the config is loaded
        Commands::Config(ConfigCommands::Init { .. }) => Ok(true),
    }
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    init_tracing(cli.global.verbose);

    match run(cli) {
        Ok(true) => ExitCode::SUCCESS,
        Ok(false) => ExitCode::from(1),
        Err(e) => {
            eprintln!("Error: {}", e);
            if let CliError::Calc(calc) = &e {
                if let Ok(json) = serde_json::to_string_pretty(calc) {
                    eprintln!();
                    eprintln!("Error JSON:");
                    eprintln!("{}", json);
                }
            }
            ExitCode::from(e.exit_code())
        }
    }
}
