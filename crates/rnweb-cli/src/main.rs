//! rnweb CLI - web bundler configuration for React Native projects.
//!
//! Parses arguments, initializes logging, and dispatches to a command.

use clap::Parser;
use miette::Result;
use rnweb_cli::{cli, commands, error, logger, ui};

fn main() -> Result<()> {
    let args = cli::Cli::parse();

    logger::init_logger(args.verbose, args.quiet, args.no_color);
    ui::init_colors(args.no_color);

    let result = match args.command {
        cli::Command::Config(config_args) => commands::config_execute(config_args),
        cli::Command::Env(env_args) => commands::env_execute(env_args),
        cli::Command::Check(check_args) => commands::check_execute(check_args),
        cli::Command::Resolve(resolve_args) => commands::resolve_execute(resolve_args),
    };

    result.map_err(error::cli_error_to_miette)
}
