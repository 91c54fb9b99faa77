//! `rnweb env`: print the constants injected into client code.

use rnweb_config::{DescriptorReader, EnvironmentSynthesizer};

use crate::cli::EnvArgs;
use crate::commands::project_root;
use crate::config::RnwebSettings;
use crate::error::Result;

/// Print the client environment as JSON.
///
/// With `--flat` the output is the bundler's define map
/// (`process.env.NODE_ENV`, `__DEV__`, ...) instead of the nested form.
pub fn execute(args: EnvArgs) -> Result<()> {
    let settings = RnwebSettings::from_args(&args.project)?;
    let locations = settings.build_options(project_root(&args.project)?).locations();

    let descriptor = DescriptorReader::new(locations)
        .read()
        .map_err(rnweb_bundler::Error::from)?;
    let env = EnvironmentSynthesizer::new(settings.mode)
        .with_public_url(settings.public_url)
        .synthesize_from_process(&descriptor)
        .map_err(rnweb_bundler::Error::from)?;

    let json = if args.flat {
        serde_json::to_string_pretty(&env.definitions())?
    } else {
        serde_json::to_string_pretty(&env)?
    };
    println!("{json}");

    Ok(())
}
