//! Layered settings for the rnweb CLI.
//!
//! Priority: CLI > `RNWEB_*` environment > `rnweb.config.json` > defaults.

mod loading;
mod tests;

use std::path::PathBuf;

use indexmap::IndexMap;
use rnweb_bundler::WebBuildOptions;
use rnweb_config::Mode;
use rnweb_config::locations::DEFAULT_OUTPUT_DIR;
use serde::{Deserialize, Serialize};

pub use loading::{ENV_PREFIX, SETTINGS_FILE, SettingsOverrides};

/// Settings that shape the synthesized configuration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct RnwebSettings {
    #[serde(default)]
    pub mode: Mode,

    /// URL the app is served from; empty for the domain root
    #[serde(default)]
    pub public_url: String,

    #[serde(default = "default_output_dir")]
    pub output_dir: PathBuf,

    /// Extra direct aliases (`"@assets": "./assets"`); a trailing `$` makes one exact
    #[serde(default, skip_serializing_if = "IndexMap::is_empty")]
    pub aliases: IndexMap<String, String>,

    #[serde(default = "default_true")]
    pub service_worker: bool,

    #[serde(default = "default_true")]
    pub analyzer: bool,
}

impl Default for RnwebSettings {
    fn default() -> Self {
        Self {
            mode: Mode::default(),
            public_url: String::new(),
            output_dir: default_output_dir(),
            aliases: IndexMap::new(),
            service_worker: true,
            analyzer: true,
        }
    }
}

impl RnwebSettings {
    /// Synthesis options for a project using these settings.
    pub fn build_options(&self, project_root: impl Into<PathBuf>) -> WebBuildOptions {
        WebBuildOptions::new(project_root)
            .mode(self.mode)
            .public_url(self.public_url.clone())
            .output_dir(self.output_dir.clone())
            .aliases(self.aliases.clone())
            .service_worker(self.service_worker)
            .analyzer(self.analyzer)
    }
}

fn default_output_dir() -> PathBuf {
    PathBuf::from(DEFAULT_OUTPUT_DIR)
}

fn default_true() -> bool {
    true
}
