use std::path::{Path, PathBuf};

use figment::{
    Figment,
    providers::{Env, Format as _, Json, Serialized},
};
use rnweb_config::Mode;
use serde::Serialize;

use crate::cli::ProjectArgs;
use crate::config::RnwebSettings;
use crate::error::{Result, SettingsError};

/// Settings file looked up in the project root.
pub const SETTINGS_FILE: &str = "rnweb.config.json";

pub const ENV_PREFIX: &str = "RNWEB_";

/// Environment keys (after the prefix) and the settings keys they set.
///
/// Matching is case-insensitive: `RNWEB_PUBLIC_URL` sets `publicUrl`.
const ENV_KEYS: [(&str, &str); 5] = [
    ("mode", "mode"),
    ("public_url", "publicUrl"),
    ("output_dir", "outputDir"),
    ("service_worker", "serviceWorker"),
    ("analyzer", "analyzer"),
];

/// Values given on the command line; unset fields leave lower layers alone.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SettingsOverrides {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub mode: Option<Mode>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub public_url: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub output_dir: Option<PathBuf>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub service_worker: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub analyzer: Option<bool>,
}

impl From<&ProjectArgs> for SettingsOverrides {
    fn from(args: &ProjectArgs) -> Self {
        Self {
            mode: args.mode.map(Into::into),
            public_url: args.public_url.clone(),
            output_dir: args.output_dir.clone(),
            // flags can only switch features off
            service_worker: args.no_service_worker.then_some(false),
            analyzer: args.no_analyzer.then_some(false),
        }
    }
}

impl RnwebSettings {
    /// Load settings for the project at `project_root`.
    pub fn load(project_root: &Path, overrides: &SettingsOverrides) -> Result<Self> {
        if !project_root.is_dir() {
            return Err(SettingsError::ProjectRootNotFound(project_root.to_path_buf()).into());
        }

        let settings_file = project_root.join(SETTINGS_FILE);
        let mut figment = Figment::new().merge(Serialized::defaults(Self::default()));

        if settings_file.is_file() {
            tracing::debug!(path = %settings_file.display(), "loading settings file");
            figment = figment.merge(Json::file(&settings_file));
        }

        figment = figment
            .merge(
                Env::prefixed(ENV_PREFIX)
                    .filter_map(|key| {
                        ENV_KEYS
                            .iter()
                            .find(|(env, _)| key.as_str().eq_ignore_ascii_case(env))
                            .map(|(_, setting)| (*setting).into())
                    })
                    .lowercase(false),
            )
            .merge(Serialized::defaults(overrides));

        figment.extract().map_err(|e| {
            SettingsError::Invalid {
                file: settings_file,
                source: Box::new(e),
            }
            .into()
        })
    }

    /// Load settings from parsed command-line arguments.
    pub fn from_args(args: &ProjectArgs) -> Result<Self> {
        Self::load(&args.project_root, &SettingsOverrides::from(args))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn env_keys_cover_every_scalar_setting() {
        let value = serde_json::to_value(RnwebSettings::default()).unwrap();
        for (_, setting) in ENV_KEYS {
            assert!(value.get(setting).is_some(), "{setting}");
        }
    }
}
