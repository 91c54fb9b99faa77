//! Client environment synthesis.
//!
//! Produces the constants the bundler substitutes into client code:
//! `process.env.*` entries taken from prefixed environment variables, plus
//! `NODE_ENV`, `PUBLIC_URL` and `APP_MANIFEST`, and the `__DEV__` flag.
//! Every value is a source-code literal (a JSON encoding), not a raw string,
//! so the bundler inlines it as a constant.

use indexmap::IndexMap;
use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Serialize};

use crate::descriptor::ProjectDescriptor;
use crate::error::Result;
use crate::manifest::AppManifest;

/// Environment variables forwarded to client code.
static ENV_VAR_REGEX: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?i)^(EXPO_|REACT_NATIVE_)").expect("env var pattern is valid")
});

pub const NODE_ENV: &str = "NODE_ENV";
pub const PUBLIC_URL: &str = "PUBLIC_URL";
pub const APP_MANIFEST: &str = "APP_MANIFEST";

/// Public URL root used when none is configured.
pub const DEFAULT_PUBLIC_URL: &str = "";

/// Build mode.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Mode {
    #[default]
    Development,
    Production,
}

impl Mode {
    pub fn from_development(development: bool) -> Self {
        if development {
            Mode::Development
        } else {
            Mode::Production
        }
    }

    pub fn is_development(self) -> bool {
        self == Mode::Development
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Mode::Development => "development",
            Mode::Production => "production",
        }
    }
}

impl std::fmt::Display for Mode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for Mode {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "development" | "dev" => Ok(Mode::Development),
            "production" | "prod" => Ok(Mode::Production),
            other => Err(format!("Invalid mode: {other}")),
        }
    }
}

/// Whether an environment variable is forwarded to client code.
pub fn is_client_env_var(key: &str) -> bool {
    ENV_VAR_REGEX.is_match(key)
}

/// Mapping from `process.env` key to a literal value.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct EnvironmentBag(IndexMap<String, String>);

impl EnvironmentBag {
    pub fn get(&self, key: &str) -> Option<&str> {
        self.0.get(key).map(String::as_str)
    }

    pub fn contains_key(&self, key: &str) -> bool {
        self.0.contains_key(key)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.0.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }
}

/// Constants handed to the bundler's define mechanism.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ClientEnvironment {
    #[serde(rename = "process.env")]
    pub process_env: EnvironmentBag,

    #[serde(rename = "__DEV__")]
    pub dev: bool,
}

impl ClientEnvironment {
    /// Flatten into dotted define keys (`process.env.NODE_ENV`, `__DEV__`).
    ///
    /// # Example
    ///
    /// ```
    /// use rnweb_config::{EnvironmentSynthesizer, Mode, ProjectDescriptor};
    ///
    /// let env = EnvironmentSynthesizer::new(Mode::Production)
    ///     .synthesize(Vec::<(String, String)>::new(), &ProjectDescriptor::default())
    ///     .unwrap();
    /// let defs = env.definitions();
    /// assert_eq!(defs["process.env.NODE_ENV"], "\"production\"");
    /// assert_eq!(defs["__DEV__"], "false");
    /// ```
    pub fn definitions(&self) -> IndexMap<String, String> {
        let mut defs: IndexMap<String, String> = self
            .process_env
            .iter()
            .map(|(key, value)| (format!("process.env.{key}"), value.to_string()))
            .collect();
        defs.insert("__DEV__".to_string(), self.dev.to_string());
        defs
    }
}

/// Builds a [`ClientEnvironment`] from an environment snapshot and a descriptor.
#[derive(Debug, Clone)]
pub struct EnvironmentSynthesizer {
    mode: Mode,
    public_url: String,
}

impl EnvironmentSynthesizer {
    /// A synthesizer for `mode` with an empty public URL.
    pub fn new(mode: Mode) -> Self {
        Self {
            mode,
            public_url: DEFAULT_PUBLIC_URL.to_string(),
        }
    }

    /// Value of the derived `PUBLIC_URL` key.
    pub fn with_public_url(mut self, public_url: impl Into<String>) -> Self {
        self.public_url = public_url.into();
        self
    }

    pub fn mode(&self) -> Mode {
        self.mode
    }

    pub fn public_url(&self) -> &str {
        &self.public_url
    }

    /// Synthesize the client environment.
    ///
    /// Prefixed variables are merged first; `NODE_ENV`, `PUBLIC_URL` and
    /// `APP_MANIFEST` are written afterwards and always win.
    pub fn synthesize<I, K, V>(&self, vars: I, descriptor: &ProjectDescriptor) -> Result<ClientEnvironment>
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: AsRef<str>,
    {
        let mut bag = IndexMap::new();

        for (key, value) in vars {
            let key = key.into();
            if !is_client_env_var(&key) {
                continue;
            }
            let literal = string_literal(value.as_ref());
            tracing::trace!(key = %key, "forwarding environment variable");
            bag.insert(key, literal);
        }

        bag.insert(NODE_ENV.to_string(), string_literal(self.mode.as_str()));
        bag.insert(PUBLIC_URL.to_string(), string_literal(&self.public_url));
        bag.insert(
            APP_MANIFEST.to_string(),
            AppManifest::from(descriptor).to_json()?,
        );

        tracing::debug!(
            mode = %self.mode,
            keys = bag.len(),
            "synthesized client environment"
        );

        Ok(ClientEnvironment {
            process_env: EnvironmentBag(bag),
            dev: self.mode.is_development(),
        })
    }

    /// Synthesize from a snapshot of the current process environment.
    ///
    /// Variables whose key or value is not valid UTF-8 are skipped.
    pub fn synthesize_from_process(&self, descriptor: &ProjectDescriptor) -> Result<ClientEnvironment> {
        let snapshot: Vec<(String, String)> = std::env::vars_os()
            .filter_map(|(k, v)| Some((k.into_string().ok()?, v.into_string().ok()?)))
            .collect();
        self.synthesize(snapshot, descriptor)
    }
}

fn string_literal(value: &str) -> String {
    serde_json::Value::String(value.to_string()).to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn vars(pairs: &[(&str, &str)]) -> Vec<(String, String)> {
        pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect()
    }

    #[test]
    fn prefix_match_is_case_insensitive() {
        assert!(is_client_env_var("EXPO_FOO"));
        assert!(is_client_env_var("expo_foo"));
        assert!(is_client_env_var("React_Native_Packager"));
        assert!(!is_client_env_var("MY_EXPO_FOO"));
        assert!(!is_client_env_var("EXPO"));
        assert!(!is_client_env_var("PATH"));
    }

    #[test]
    fn values_are_encoded_as_string_literals() {
        let env = EnvironmentSynthesizer::new(Mode::Development)
            .synthesize(
                vars(&[("EXPO_QUOTE", r#"say "hi""#)]),
                &ProjectDescriptor::default(),
            )
            .unwrap();
        assert_eq!(env.process_env.get("EXPO_QUOTE"), Some(r#""say \"hi\"""#));
    }

    #[test]
    fn public_url_defaults_to_empty_literal() {
        let env = EnvironmentSynthesizer::new(Mode::Production)
            .synthesize(vars(&[]), &ProjectDescriptor::default())
            .unwrap();
        assert_eq!(env.process_env.get(PUBLIC_URL), Some("\"\""));
        assert!(!env.dev);
    }

    #[test]
    fn custom_public_url() {
        let env = EnvironmentSynthesizer::new(Mode::Production)
            .with_public_url("/app")
            .synthesize(vars(&[]), &ProjectDescriptor::default())
            .unwrap();
        assert_eq!(env.process_env.get(PUBLIC_URL), Some("\"/app\""));
    }

    #[test]
    fn definitions_are_dotted() {
        let env = EnvironmentSynthesizer::new(Mode::Development)
            .synthesize(vars(&[("EXPO_FOO", "bar")]), &ProjectDescriptor::default())
            .unwrap();
        let defs = env.definitions();
        assert_eq!(defs["process.env.EXPO_FOO"], "\"bar\"");
        assert_eq!(defs["__DEV__"], "true");
        assert_eq!(defs.len(), env.process_env.len() + 1);
    }

    #[test]
    fn mode_parsing() {
        assert_eq!("production".parse::<Mode>().unwrap(), Mode::Production);
        assert_eq!("DEV".parse::<Mode>().unwrap(), Mode::Development);
        assert!("staging".parse::<Mode>().is_err());
        assert_eq!(Mode::from_development(false), Mode::Production);
    }

    #[test]
    fn client_environment_serializes_with_define_keys() {
        let env = EnvironmentSynthesizer::new(Mode::Development)
            .synthesize(vars(&[]), &ProjectDescriptor::default())
            .unwrap();
        let value = serde_json::to_value(&env).unwrap();
        assert_eq!(value["__DEV__"], serde_json::json!(true));
        assert_eq!(
            value["process.env"]["NODE_ENV"],
            serde_json::json!("\"development\"")
        );
    }
}
