use std::path::PathBuf;

use indexmap::IndexMap;
use rnweb_config::env::DEFAULT_PUBLIC_URL;
use rnweb_config::locations::DEFAULT_OUTPUT_DIR;
use rnweb_config::{DescriptorReader, EnvironmentSynthesizer, Locations, Mode, ShellDocument};
use rnweb_resolve::{AliasTableBuilder, RedirectionRules};

use crate::config::{
    BundlerConfig, ModuleConfig, OptimizationConfig, OutputConfig, ParserOptions,
    RESOLVE_EXTENSIONS, ResolutionConfig, empty_node_builtins,
};
use crate::error::Result;
use crate::plugins::{PluginConfig, ServiceWorkerOptions};
use crate::rules::default_rules;

/// Where environment variables come from.
#[derive(Debug, Clone, Default)]
enum EnvSource {
    /// Snapshot of the current process environment
    #[default]
    Process,
    Snapshot(Vec<(String, String)>),
}

/// Options for synthesizing a web build configuration.
///
/// # Example
///
/// ```no_run
/// use rnweb_bundler::WebBuildOptions;
/// use rnweb_config::Mode;
///
/// let config = WebBuildOptions::new("./my-app")
///     .mode(Mode::Production)
///     .public_url("/app")
///     .synthesize()?;
/// println!("{}", config.to_json_pretty()?);
/// # Ok::<(), rnweb_bundler::Error>(())
/// ```
#[derive(Debug, Clone)]
pub struct WebBuildOptions {
    project_root: PathBuf,
    mode: Mode,
    public_url: String,
    output_dir: PathBuf,
    env: EnvSource,
    aliases: IndexMap<String, String>,
    service_worker: bool,
    analyzer: bool,
}

impl WebBuildOptions {
    /// Options for the project at `project_root`.
    ///
    /// # Arguments
    ///
    /// * `project_root` - Directory holding `app.json`; relative paths are
    ///   resolved against the current directory during synthesis
    ///
    /// Defaults: development mode, empty public URL, `web-build` output,
    /// the process environment, service worker and bundle analyzer enabled.
    pub fn new(project_root: impl Into<PathBuf>) -> Self {
        Self {
            project_root: project_root.into(),
            mode: Mode::default(),
            public_url: DEFAULT_PUBLIC_URL.to_string(),
            output_dir: PathBuf::from(DEFAULT_OUTPUT_DIR),
            env: EnvSource::default(),
            aliases: IndexMap::new(),
            service_worker: true,
            analyzer: true,
        }
    }

    /// Build mode; controls `NODE_ENV` and `__DEV__`.
    pub fn mode(mut self, mode: Mode) -> Self {
        self.mode = mode;
        self
    }

    /// URL prefix the app is served from (`""` for the domain root).
    pub fn public_url(mut self, public_url: impl Into<String>) -> Self {
        self.public_url = public_url.into();
        self
    }

    /// Output directory, relative to the project root unless absolute.
    pub fn output_dir(mut self, dir: impl Into<PathBuf>) -> Self {
        self.output_dir = dir.into();
        self
    }

    /// Use a fixed environment snapshot instead of the process environment.
    pub fn env<I, K, V>(mut self, vars: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<String>,
    {
        self.env = EnvSource::Snapshot(
            vars.into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
        );
        self
    }

    /// Extra direct alias; a trailing `$` on `key` makes it exact.
    pub fn alias(mut self, key: impl Into<String>, target: impl Into<String>) -> Self {
        self.aliases.insert(key.into(), target.into());
        self
    }

    pub fn aliases<I, K, V>(mut self, aliases: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<String>,
    {
        self.aliases
            .extend(aliases.into_iter().map(|(k, v)| (k.into(), v.into())));
        self
    }

    /// Include the offline service worker plugin.
    pub fn service_worker(mut self, enabled: bool) -> Self {
        self.service_worker = enabled;
        self
    }

    /// Include the static bundle analyzer report.
    pub fn analyzer(mut self, enabled: bool) -> Self {
        self.analyzer = enabled;
        self
    }

    /// Project locations these options resolve to.
    pub fn locations(&self) -> Locations {
        Locations::with_output_dir(&self.project_root, &self.output_dir)
    }

    /// Read the project and assemble the full bundler configuration.
    ///
    /// # Errors
    ///
    /// Fails if the descriptor is missing or malformed, or if an alias is
    /// defined twice. Nothing is produced on failure.
    pub fn synthesize(&self) -> Result<BundlerConfig> {
        let locations = self.locations();
        tracing::debug!(
            root = %locations.root.display(),
            mode = %self.mode,
            "synthesizing web build configuration"
        );

        let descriptor = DescriptorReader::new(locations.clone()).read()?;

        let synthesizer =
            EnvironmentSynthesizer::new(self.mode).with_public_url(self.public_url.clone());
        let client_env = match &self.env {
            EnvSource::Process => synthesizer.synthesize_from_process(&descriptor)?,
            EnvSource::Snapshot(vars) => synthesizer.synthesize(vars.iter().cloned(), &descriptor)?,
        };

        let shell = ShellDocument::with_public_url(&descriptor, &locations, &self.public_url);

        let alias = self
            .aliases
            .iter()
            .fold(AliasTableBuilder::platform_defaults(), |builder, (key, target)| {
                builder.direct(key, target.clone())
            })
            .build()?;

        let redirections = RedirectionRules::platform_defaults(&locations)?;

        let interpolations = shell.interpolations.clone();
        let mut plugins = vec![
            PluginConfig::Html(shell),
            PluginConfig::InterpolateHtml(interpolations),
            PluginConfig::asset_manifest(),
            PluginConfig::Define(client_env),
        ];
        plugins.extend(
            redirections
                .rules()
                .iter()
                .cloned()
                .map(PluginConfig::ModuleReplacement),
        );
        if self.service_worker {
            plugins.push(PluginConfig::ServiceWorker(ServiceWorkerOptions::new(
                &self.public_url,
            )));
        }
        if self.analyzer {
            plugins.push(PluginConfig::bundle_analyzer());
        }

        let config = BundlerConfig {
            mode: self.mode,
            context: locations.root.clone(),
            output: OutputConfig::new(locations.production.folder.clone()),
            optimization: OptimizationConfig::default(),
            module: ModuleConfig {
                parser: ParserOptions {
                    require_ensure: false,
                },
                rules: default_rules(&locations)?,
            },
            plugins,
            resolve: ResolutionConfig {
                symlinks: false,
                extensions: RESOLVE_EXTENSIONS.iter().map(|e| e.to_string()).collect(),
                alias,
            },
            node: empty_node_builtins(),
            performance: false,
        };

        tracing::debug!(
            plugins = config.plugins.len(),
            rules = config.module.rules.len(),
            aliases = config.resolve.alias.len(),
            "web build configuration ready"
        );

        Ok(config)
    }
}

/// Synthesize with default options.
pub fn synthesize(project_root: impl Into<PathBuf>, mode: Mode) -> Result<BundlerConfig> {
    WebBuildOptions::new(project_root).mode(mode).synthesize()
}
