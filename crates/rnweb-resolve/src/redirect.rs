//! Platform-module redirection.
//!
//! React Native's own sources import a few platform modules (`Platform`,
//! `Systrace`, ...) that have no browser implementation. When such a request
//! originates inside `node_modules/react-native/`, it is pointed at the web
//! build shipped by Expo instead, without touching React Native's files.

use std::path::PathBuf;

use regex::Regex;
use rnweb_config::Locations;
use serde::{Serialize, Serializer};

use crate::error::{ResolveError, Result};

/// Context marker identifying React Native's source tree.
pub const PLATFORM_SOURCE_MARKER: &str = "node_modules/react-native/";

/// Package path holding the web implementations.
pub const WEB_BUILD_ROOT: &str = "expo/build/web/";

/// `(request pattern, replacement sub-path)` for each redirected platform module.
pub const PLATFORM_MODULES: [(&str, &str); 4] = [
    ("Platform", "Utilities/Platform"),
    ("Performance/Systrace", "Performance/Systrace"),
    ("HMRLoadingView", "Utilities/HMRLoadingView"),
    ("RCTNetworking", "Network/RCTNetworking"),
];

/// A module request as seen by the bundler during resolution.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ModuleReference {
    /// The requested module
    pub request: String,
    /// Directory of the importing module
    pub context: String,
}

impl ModuleReference {
    pub fn new(request: impl Into<String>, context: impl Into<String>) -> Self {
        Self {
            request: request.into(),
            context: context.into(),
        }
    }
}

/// Rewrites matching requests from React Native's sources to a web module.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RedirectionRule {
    #[serde(serialize_with = "serialize_regex")]
    pattern: Regex,
    source_marker: String,
    replacement_root: String,
    replacement_suffix: String,
    node_modules: PathBuf,
}

impl RedirectionRule {
    /// Redirect requests matching `pattern` to `expo/build/web/<suffix>`.
    ///
    /// # Errors
    ///
    /// Returns [`ResolveError::InvalidPattern`] if `pattern` is not a valid regex.
    pub fn new(pattern: &str, suffix: impl Into<String>, locations: &Locations) -> Result<Self> {
        let compiled = Regex::new(pattern).map_err(|source| ResolveError::InvalidPattern {
            pattern: pattern.to_string(),
            source,
        })?;

        Ok(Self {
            pattern: compiled,
            source_marker: PLATFORM_SOURCE_MARKER.to_string(),
            replacement_root: WEB_BUILD_ROOT.to_string(),
            replacement_suffix: suffix.into(),
            node_modules: locations.node_modules_path(""),
        })
    }

    /// Use a different package root than `expo/build/web/`.
    pub fn with_replacement_root(mut self, root: impl Into<String>) -> Self {
        self.replacement_root = root.into();
        self
    }

    pub fn pattern(&self) -> &str {
        self.pattern.as_str()
    }

    /// Absolute path requests are redirected to.
    pub fn target(&self) -> PathBuf {
        self.node_modules
            .join(format!("{}{}", self.replacement_root, self.replacement_suffix))
    }

    /// Whether the rule rewrites `reference`: the request matches the
    /// pattern and the importer lives inside the vendor package.
    pub fn matches(&self, reference: &ModuleReference) -> bool {
        self.pattern.is_match(&reference.request)
            && reference
                .context
                .replace('\\', "/")
                .contains(self.source_marker.as_str())
    }

    /// Apply the rule. Non-matching references come back unchanged.
    pub fn apply(&self, reference: ModuleReference) -> ModuleReference {
        if !self.matches(&reference) {
            return reference;
        }

        let target = self.target();
        tracing::trace!(
            request = %reference.request,
            target = %target.display(),
            "redirecting platform module"
        );

        ModuleReference {
            request: target.to_string_lossy().into_owned(),
            context: reference.context,
        }
    }
}

fn serialize_regex<S: Serializer>(regex: &Regex, serializer: S) -> std::result::Result<S::Ok, S::Error> {
    serializer.serialize_str(regex.as_str())
}

/// An ordered set of redirection rules.
///
/// # Example
///
/// ```
/// use rnweb_config::Locations;
/// use rnweb_resolve::{ModuleReference, RedirectionRules};
///
/// let rules = RedirectionRules::platform_defaults(&Locations::new("/project")).unwrap();
/// let reference = ModuleReference::new(
///     "Platform",
///     "/project/node_modules/react-native/Libraries/Utilities",
/// );
/// assert_eq!(
///     rules.apply(reference).request,
///     "/project/node_modules/expo/build/web/Utilities/Platform"
/// );
/// ```
#[derive(Debug, Clone, Default, Serialize)]
#[serde(transparent)]
pub struct RedirectionRules {
    rules: Vec<RedirectionRule>,
}

impl RedirectionRules {
    pub fn new(rules: Vec<RedirectionRule>) -> Self {
        Self { rules }
    }

    /// Rules for every entry of [`PLATFORM_MODULES`].
    pub fn platform_defaults(locations: &Locations) -> Result<Self> {
        let rules = PLATFORM_MODULES
            .iter()
            .map(|(pattern, suffix)| RedirectionRule::new(pattern, *suffix, locations))
            .collect::<Result<Vec<_>>>()?;
        Ok(Self { rules })
    }

    pub fn rules(&self) -> &[RedirectionRule] {
        &self.rules
    }

    /// Apply every rule in order.
    pub fn apply(&self, reference: ModuleReference) -> ModuleReference {
        self.rules
            .iter()
            .fold(reference, |reference, rule| rule.apply(reference))
    }

    /// Whether any rule would rewrite the reference.
    pub fn redirects(&self, reference: &ModuleReference) -> bool {
        self.rules.iter().any(|rule| rule.matches(reference))
    }
}
