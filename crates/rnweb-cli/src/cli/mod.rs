//! Command-line interface definition (clap derive).
//!
//! - `rnweb config` - print or write the bundler configuration
//! - `rnweb env` - print the client environment
//! - `rnweb check` - validate the project without writing anything
//! - `rnweb resolve` - explain how one import is handled

mod commands;
pub mod enums;

use clap::Parser;

pub use commands::{CheckArgs, Command, ConfigArgs, EnvArgs, ProjectArgs, ResolveArgs};
pub use enums::ModeArg;

/// rnweb - compile React Native projects for the web
#[derive(Parser, Debug)]
#[command(
    name = "rnweb",
    version,
    about = "Synthesize web bundler configuration for React Native projects",
    long_about = "rnweb reads a React Native / Expo project's app.json and environment and\n\
                  produces the configuration a JavaScript bundler needs to build it for the\n\
                  browser: module rules, aliases, platform-module redirects and plugins."
)]
pub struct Cli {
    /// Enable verbose logging (debug level)
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Suppress all output except errors
    #[arg(short, long, global = true, conflicts_with = "verbose")]
    pub quiet: bool,

    /// Disable colored output
    #[arg(long, global = true)]
    pub no_color: bool,

    #[command(subcommand)]
    pub command: Command,
}
