//! `rnweb check`: validate a project without writing anything.

use crate::cli::CheckArgs;
use crate::commands::synthesize;
use crate::error::Result;
use crate::ui;

/// Synthesize the configuration and report what was found.
///
/// Fatal problems (missing or malformed app.json, alias collisions) are
/// returned as errors. A missing HTML template or project name only warns.
pub fn execute(args: CheckArgs) -> Result<()> {
    ui::info("Checking project...");

    let config = synthesize(&args.project).inspect_err(|_| ui::error("Project check failed"))?;

    if let Some(shell) = config.shell() {
        ui::success(&format!("app.json loaded ({})", shell.title));
        if shell.title.is_empty() {
            ui::warning("app.json has no \"name\"; the page title will be empty");
        }
        if !shell.template.is_file() {
            ui::warning(&format!(
                "HTML template not found at {}",
                shell.template.display()
            ));
        }
    }

    ui::success(&format!(
        "Alias table built ({} entries)",
        config.resolve.alias.len()
    ));

    if let Some(env) = config.client_environment() {
        ui::success(&format!(
            "Client environment ready ({} keys, __DEV__ = {})",
            env.process_env.len(),
            env.dev
        ));
    }

    ui::success(&format!("Project is ready to build in {} mode", config.mode));
    Ok(())
}
