//! `rnweb config`: print or write the bundler configuration.

use std::fs;

use crate::cli::ConfigArgs;
use crate::commands::synthesize;
use crate::error::{Result, ResultExt};
use crate::ui;

/// Print the synthesized configuration, or write it to `--out`.
///
/// Parent directories of the output file are created as needed.
pub fn execute(args: ConfigArgs) -> Result<()> {
    let config = synthesize(&args.project)?;
    let json = config.to_json_pretty()?;

    match args.out {
        Some(out) => {
            if let Some(parent) = out.parent().filter(|p| !p.as_os_str().is_empty()) {
                fs::create_dir_all(parent).with_path(parent)?;
            }
            fs::write(&out, format!("{json}\n")).with_path(&out)?;
            ui::success(&format!("Wrote configuration to {}", out.display()));
        }
        None => println!("{json}"),
    }

    Ok(())
}
