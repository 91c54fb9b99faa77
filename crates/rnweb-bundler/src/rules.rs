//! Module rules: which loaders handle which files.
//!
//! Only the JavaScript rule carries real decision logic (the project's
//! [`InclusionRules`]); the others are fixed loader wiring per file type.

use std::path::{Path, PathBuf};

use regex::Regex;
use rnweb_config::Locations;
use rnweb_config::locations::absolute_clean;
use rnweb_resolve::InclusionRules;
use serde::{Serialize, Serializer};
use serde_json::{Value, json};

use crate::error::{Error, Result};

/// A loader and its options.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct LoaderUse {
    pub loader: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub options: Option<Value>,
}

impl LoaderUse {
    pub fn new(loader: impl Into<String>) -> Self {
        Self {
            loader: loader.into(),
            options: None,
        }
    }

    pub fn with_options(mut self, options: Value) -> Self {
        self.options = Some(options);
        self
    }
}

/// Restricts a rule to some files.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum RuleInclude {
    /// Every file matching the rule's test
    Any,
    /// Files under one of these directories
    Paths(Vec<PathBuf>),
    /// Files accepted by the inclusion rule table
    Rules(InclusionRules),
}

impl RuleInclude {
    pub fn is_any(&self) -> bool {
        matches!(self, RuleInclude::Any)
    }

    /// Whether the rule may touch `path`.
    ///
    /// Relative paths are made absolute against the current directory.
    pub fn allows(&self, path: &Path) -> bool {
        match self {
            RuleInclude::Any => true,
            RuleInclude::Paths(dirs) => {
                let path = absolute_clean(path);
                dirs.iter().any(|dir| path.starts_with(dir))
            }
            RuleInclude::Rules(rules) => rules.includes(path),
        }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct ModuleRule {
    #[serde(serialize_with = "serialize_regex")]
    test: Regex,

    #[serde(rename = "use")]
    pub uses: Vec<LoaderUse>,

    #[serde(skip_serializing_if = "RuleInclude::is_any")]
    pub include: RuleInclude,
}

impl ModuleRule {
    /// A rule applying `uses` to every file whose path matches `test`.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidRule`] if `test` is not a valid regex.
    pub fn new(test: &str, uses: Vec<LoaderUse>) -> Result<Self> {
        let regex = Regex::new(test).map_err(|source| Error::InvalidRule {
            pattern: test.to_string(),
            source,
        })?;
        Ok(Self {
            test: regex,
            uses,
            include: RuleInclude::Any,
        })
    }

    pub fn include(mut self, include: RuleInclude) -> Self {
        self.include = include;
        self
    }

    pub fn test(&self) -> &str {
        self.test.as_str()
    }

    /// Loader names, in application order.
    pub fn loaders(&self) -> impl Iterator<Item = &str> {
        self.uses.iter().map(|u| u.loader.as_str())
    }

    /// Whether the bundler runs this rule's loaders on `path`.
    pub fn applies_to(&self, path: &Path) -> bool {
        self.test.is_match(&path.to_string_lossy()) && self.include.allows(path)
    }
}

fn serialize_regex<S: Serializer>(regex: &Regex, serializer: S) -> std::result::Result<S::Ok, S::Error> {
    serializer.serialize_str(regex.as_str())
}

/// The standard rule set for a project.
pub fn default_rules(locations: &Locations) -> Result<Vec<ModuleRule>> {
    Ok(vec![
        ModuleRule::new(r"\.html$", vec![LoaderUse::new("html-loader")])?
            .include(RuleInclude::Paths(vec![locations.absolute("assets")])),
        javascript_rule(locations)?,
        ModuleRule::new(
            r"\.css$",
            vec![LoaderUse::new("style-loader"), LoaderUse::new("css-loader")],
        )?,
        ModuleRule::new(
            r"\.(gif|jpe?g|png|svg)$",
            vec![LoaderUse::new("url-loader").with_options(json!({ "name": "[name].[ext]" }))],
        )?,
        ModuleRule::new(
            r"\.ttf$",
            vec![LoaderUse::new("url-loader").with_options(json!({ "name": "./fonts/[name].[ext]" }))],
        )?
        .include(RuleInclude::Paths(vec![
            locations.root.clone(),
            locations.node_modules_path("react-native-vector-icons"),
            locations.node_modules_path("@expo/vector-icons"),
        ])),
        ModuleRule::new(
            r"\.(mov|mp4|mp3|wav)$",
            vec![LoaderUse::new("file-loader").with_options(json!({ "name": "[path][name].[ext]" }))],
        )?,
    ])
}

/// JavaScript goes through babel, restricted by the inclusion table.
pub fn javascript_rule(locations: &Locations) -> Result<ModuleRule> {
    Ok(ModuleRule::new(
        r"\.jsx?$",
        vec![LoaderUse::new("babel-loader").with_options(json!({
            "cacheDirectory": false,
            "babelrc": false
        }))],
    )?
    .include(RuleInclude::Rules(InclusionRules::for_project(locations))))
}
