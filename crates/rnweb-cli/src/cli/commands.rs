use std::path::PathBuf;

use clap::{Args, Subcommand};

use crate::cli::enums::ModeArg;

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Print the bundler configuration as JSON
    ///
    /// Reads app.json, the environment and rnweb.config.json and prints the
    /// complete configuration, or writes it to --out.
    Config(ConfigArgs),

    /// Print the constants injected into client code
    ///
    /// Shows `process.env` and `__DEV__` as the bundler will substitute them.
    Env(EnvArgs),

    /// Validate the project
    ///
    /// Loads the descriptor, builds the alias table and reports problems
    /// without writing anything.
    Check(CheckArgs),

    /// Explain how an import is handled
    ///
    /// Shows the alias applied to a module specifier, whether a platform
    /// redirect rewrites it, and whether the result is compiled.
    Resolve(ResolveArgs),
}

/// Options shared by every command.
#[derive(Args, Debug, Clone)]
pub struct ProjectArgs {
    /// Project root containing app.json
    #[arg(long, value_name = "DIR", default_value = ".")]
    pub project_root: PathBuf,

    /// Build mode
    #[arg(short, long, value_enum)]
    pub mode: Option<ModeArg>,

    /// URL the app is served from (empty for the domain root)
    #[arg(long, value_name = "URL")]
    pub public_url: Option<String>,

    /// Output directory, relative to the project root
    #[arg(long, value_name = "DIR")]
    pub output_dir: Option<PathBuf>,

    /// Do not generate a service worker
    #[arg(long)]
    pub no_service_worker: bool,

    /// Do not generate a bundle size report
    #[arg(long)]
    pub no_analyzer: bool,
}

#[derive(Args, Debug)]
pub struct ConfigArgs {
    #[command(flatten)]
    pub project: ProjectArgs,

    /// Write the configuration to this file instead of stdout
    #[arg(short, long, value_name = "FILE")]
    pub out: Option<PathBuf>,
}

#[derive(Args, Debug)]
pub struct EnvArgs {
    #[command(flatten)]
    pub project: ProjectArgs,

    /// Print dotted definitions (`process.env.KEY`) instead of the nested form
    #[arg(long)]
    pub flat: bool,
}

#[derive(Args, Debug)]
pub struct CheckArgs {
    #[command(flatten)]
    pub project: ProjectArgs,
}

#[derive(Args, Debug)]
pub struct ResolveArgs {
    /// Module specifier as written in an import
    #[arg(value_name = "SPECIFIER")]
    pub specifier: String,

    /// Directory of the importing module (defaults to the project root)
    #[arg(long, value_name = "PATH")]
    pub context: Option<PathBuf>,

    #[command(flatten)]
    pub project: ProjectArgs,
}
