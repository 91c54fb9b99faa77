//! The configuration value handed to the external bundler.
//!
//! `BundlerConfig` is produced once by [`crate::WebBuildOptions::synthesize`]
//! and never mutated afterwards. It serializes to the JSON shape the bundler
//! consumes, and exposes the decisions it encodes (inclusion, redirection,
//! aliasing) for callers that want to query them directly.

use std::path::{Path, PathBuf};

use indexmap::IndexMap;
use rnweb_config::{ClientEnvironment, Mode, ShellDocument};
use rnweb_resolve::{AliasTable, ModuleReference, RedirectionRule};
use serde::Serialize;

use crate::error::Result;
use crate::plugins::PluginConfig;
use crate::rules::{ModuleRule, RuleInclude};

/// Extension priority; `.web.js` shadows the native implementation.
pub const RESOLVE_EXTENSIONS: [&str; 4] = [".web.js", ".js", ".jsx", ".json"];

/// Node built-ins replaced with empty modules in the browser.
pub const EMPTY_NODE_BUILTINS: [&str; 5] = ["dgram", "fs", "net", "tls", "child_process"];

/// Output configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct OutputConfig {
    pub path: PathBuf,
    pub filename: String,
    pub source_map_filename: String,
    pub chunk_filename: String,
    pub public_path: String,
}

impl OutputConfig {
    /// Content-hashed output names written to `path`.
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            filename: "static/[chunkhash].js".to_string(),
            source_map_filename: "[chunkhash].map".to_string(),
            chunk_filename: "static/[id].[chunkhash].js".to_string(),
            public_path: "/".to_string(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SplitChunks {
    pub chunks: String,
    /// `false` keeps chunk names stable across builds
    pub name: bool,
}

/// Optimization settings
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct OptimizationConfig {
    pub split_chunks: SplitChunks,
    pub runtime_chunk: String,
}

impl Default for OptimizationConfig {
    fn default() -> Self {
        Self {
            split_chunks: SplitChunks {
                chunks: "all".to_string(),
                name: false,
            },
            runtime_chunk: "single".to_string(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ParserOptions {
    pub require_ensure: bool,
}

/// Module handling: parser flags plus loader rules.
#[derive(Debug, Clone, Serialize)]
pub struct ModuleConfig {
    pub parser: ParserOptions,
    pub rules: Vec<ModuleRule>,
}

/// Module resolution configuration
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ResolutionConfig {
    pub symlinks: bool,
    pub extensions: Vec<String>,
    pub alias: AliasTable,
}

/// Complete bundler configuration
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct BundlerConfig {
    pub mode: Mode,

    /// Project root
    pub context: PathBuf,

    pub output: OutputConfig,
    pub optimization: OptimizationConfig,
    pub module: ModuleConfig,
    pub plugins: Vec<PluginConfig>,
    pub resolve: ResolutionConfig,

    /// Node built-in replacements (`"empty"`)
    pub node: IndexMap<String, String>,

    /// Bundle size hints; always disabled
    pub performance: bool,
}

impl BundlerConfig {
    /// Loader rules that apply to `path`, in order.
    pub fn rules_for<'a>(&'a self, path: &'a Path) -> impl Iterator<Item = &'a ModuleRule> + 'a {
        self.module
            .rules
            .iter()
            .filter(move |rule| rule.applies_to(path))
    }

    /// Whether `path` goes through the project's JavaScript transform.
    pub fn compiles(&self, path: &Path) -> bool {
        self.module
            .rules
            .iter()
            .filter(|rule| matches!(rule.include, RuleInclude::Rules(_)))
            .any(|rule| rule.applies_to(path))
    }

    /// Module replacement rules, in plugin order.
    pub fn redirections(&self) -> impl Iterator<Item = &RedirectionRule> {
        self.plugins.iter().filter_map(|plugin| match plugin {
            PluginConfig::ModuleReplacement(rule) => Some(rule),
            _ => None,
        })
    }

    /// Apply every module replacement rule to a reference.
    pub fn redirect(&self, reference: ModuleReference) -> ModuleReference {
        self.redirections()
            .fold(reference, |reference, rule| rule.apply(reference))
    }

    /// Apply the alias table to an import specifier.
    ///
    /// Returns `None` when no alias matches.
    pub fn resolve_alias(&self, specifier: &str) -> Option<String> {
        self.resolve.alias.resolve(specifier)
    }

    /// The constants handed to the define plugin.
    pub fn client_environment(&self) -> Option<&ClientEnvironment> {
        self.plugins.iter().find_map(|plugin| match plugin {
            PluginConfig::Define(env) => Some(env),
            _ => None,
        })
    }

    pub fn shell(&self) -> Option<&ShellDocument> {
        self.plugins.iter().find_map(|plugin| match plugin {
            PluginConfig::Html(shell) => Some(shell),
            _ => None,
        })
    }

    pub fn has_plugin(&self, name: &str) -> bool {
        self.plugins.iter().any(|plugin| plugin.name() == name)
    }

    /// Serialize the configuration as indented JSON.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Serialize`] if a value cannot be represented as JSON.
    pub fn to_json_pretty(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }
}

pub(crate) fn empty_node_builtins() -> IndexMap<String, String> {
    EMPTY_NODE_BUILTINS
        .iter()
        .map(|name| (name.to_string(), "empty".to_string()))
        .collect()
}
