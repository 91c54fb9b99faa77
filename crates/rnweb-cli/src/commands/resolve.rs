//! `rnweb resolve`: explain how one import is handled.

use std::path::{Path, PathBuf};

use rnweb_bundler::{BundlerConfig, ModuleReference, RuleInclude};
use rnweb_config::Locations;
use serde::Serialize;

use crate::cli::ResolveArgs;
use crate::commands::synthesize;
use crate::error::Result;

/// What happens to a module specifier during resolution.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Resolution {
    pub specifier: String,
    /// Target after aliasing, if an alias applied
    #[serde(skip_serializing_if = "Option::is_none")]
    pub alias: Option<String>,
    /// Target after platform redirection, if a redirect applied
    #[serde(skip_serializing_if = "Option::is_none")]
    pub redirect: Option<String>,
    /// File the request points at
    pub path: PathBuf,
    /// Whether the file goes through the project's JavaScript transform
    pub compiled: bool,
    /// Loaders the bundler runs on the file, in order
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub loaders: Vec<String>,
}

/// Print the [`Resolution`] of one specifier as JSON.
///
/// `--context` is the importing file's directory, relative to the project
/// root; it defaults to the root itself.
pub fn execute(args: ResolveArgs) -> Result<()> {
    let config = synthesize(&args.project)?;
    let locations = Locations::new(&config.context);

    let context = match &args.context {
        Some(context) => locations.absolute(context),
        None => locations.root.clone(),
    };

    let resolution = resolve(&config, &locations, &args.specifier, &context);
    println!("{}", serde_json::to_string_pretty(&resolution)?);
    Ok(())
}

/// Platform redirects first (they run before resolution), then aliases,
/// then the inclusion decision.
pub fn resolve(config: &BundlerConfig, locations: &Locations, specifier: &str, context: &Path) -> Resolution {
    let reference = ModuleReference::new(specifier, context.to_string_lossy());
    let redirected = config.redirect(reference).request;
    let redirect = (redirected != specifier).then(|| redirected.clone());

    let alias = match redirect {
        Some(_) => None,
        None => config.resolve_alias(specifier),
    };
    let request = redirect.clone().or_else(|| alias.clone()).unwrap_or_else(|| specifier.to_string());

    let path = request_path(locations, &request, context);
    let compiled = config.module.rules.iter().any(|rule| {
        matches!(&rule.include, RuleInclude::Rules(rules) if rules.includes(&path))
    });

    let loaders = config
        .rules_for(&path)
        .flat_map(|rule| rule.loaders())
        .map(str::to_string)
        .collect();

    tracing::debug!(specifier, path = %path.display(), compiled, "resolved specifier");

    Resolution {
        specifier: specifier.to_string(),
        alias,
        redirect,
        path,
        compiled,
        loaders,
    }
}

/// Relative requests resolve against the importer, bare ones against `node_modules`.
fn request_path(locations: &Locations, request: &str, context: &Path) -> PathBuf {
    let request_path = Path::new(request);
    if request_path.is_absolute() {
        request_path.to_path_buf()
    } else if request.starts_with("./") || request.starts_with("../") {
        Locations::new(context).absolute(request)
    } else {
        locations.node_modules_path(request)
    }
}
