//! Which files receive project-level compilation.
//!
//! First-party code and a handful of vendor packages that ship untranspiled
//! sources (React Native, Expo, React Navigation) go through the project's
//! JavaScript transform; everything else under `node_modules` is left alone.
//!
//! The decision is an ordered rule table evaluated first-match-wins:
//!
//! 1. path contains an allow-listed vendor fragment → include
//! 2. path is inside the project root and outside `node_modules` → include
//! 3. anything else → exclude

use std::path::{Path, PathBuf};

use rnweb_config::Locations;
use rnweb_config::locations::{NODE_MODULES, absolute_clean};
use serde::Serialize;

/// Vendor packages compiled like first-party code.
pub const INCLUDED_VENDOR_FRAGMENTS: [&str; 5] = [
    "node_modules/react-native",
    "node_modules/react-navigation",
    "node_modules/expo",
    "node_modules/@react",
    "node_modules/@expo",
];

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "camelCase")]
pub enum Predicate {
    /// Path contains any of the fragments
    ContainsAny { fragments: Vec<String> },
    /// Path is under `root` and does not contain `vendor_marker`
    #[serde(rename_all = "camelCase")]
    InsideProject { root: PathBuf, vendor_marker: String },
    Always,
}

impl Predicate {
    fn matches(&self, path: &Path, normalized: &str) -> bool {
        match self {
            Predicate::ContainsAny { fragments } => {
                fragments.iter().any(|f| normalized.contains(f.as_str()))
            }
            Predicate::InsideProject {
                root,
                vendor_marker,
            } => !normalized.contains(vendor_marker.as_str()) && path.starts_with(root),
            Predicate::Always => true,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Verdict {
    Include,
    Exclude,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct InclusionRule {
    pub predicate: Predicate,
    pub verdict: Verdict,
}

impl InclusionRule {
    pub fn new(predicate: Predicate, verdict: Verdict) -> Self {
        Self { predicate, verdict }
    }
}

/// Outcome of evaluating a candidate path.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Decision {
    Include(PathBuf),
    Exclude,
}

impl Decision {
    pub fn is_included(&self) -> bool {
        matches!(self, Decision::Include(_))
    }
}

/// Ordered inclusion rules; the first matching rule decides.
///
/// # Example
///
/// ```
/// use rnweb_config::Locations;
/// use rnweb_resolve::{Decision, InclusionRules};
/// use std::path::PathBuf;
///
/// let rules = InclusionRules::for_project(&Locations::new("/project"));
/// assert_eq!(
///     rules.evaluate("/project/src/App.js"),
///     Decision::Include(PathBuf::from("/project/src/App.js"))
/// );
/// assert_eq!(rules.evaluate("/project/node_modules/lodash/index.js"), Decision::Exclude);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct InclusionRules {
    rules: Vec<InclusionRule>,
}

impl InclusionRules {
    /// A custom table. Paths no rule matches are excluded.
    pub fn new(rules: Vec<InclusionRule>) -> Self {
        Self { rules }
    }

    /// The standard table for a project.
    pub fn for_project(locations: &Locations) -> Self {
        Self::new(vec![
            InclusionRule::new(
                Predicate::ContainsAny {
                    fragments: INCLUDED_VENDOR_FRAGMENTS
                        .iter()
                        .map(|f| f.to_string())
                        .collect(),
                },
                Verdict::Include,
            ),
            InclusionRule::new(
                Predicate::InsideProject {
                    root: locations.root.clone(),
                    vendor_marker: NODE_MODULES.to_string(),
                },
                Verdict::Include,
            ),
            InclusionRule::new(Predicate::Always, Verdict::Exclude),
        ])
    }

    pub fn rules(&self) -> &[InclusionRule] {
        &self.rules
    }

    /// Decide whether `path` is compiled.
    ///
    /// The path is made absolute against the current directory and cleaned
    /// lexically first, so `..` segments cannot step into or out of the
    /// project. An included path is returned in that form.
    ///
    /// # Examples
    ///
    /// ```
    /// use rnweb_config::Locations;
    /// use rnweb_resolve::{Decision, InclusionRules};
    ///
    /// let rules = InclusionRules::for_project(&Locations::new("/project"));
    /// assert_eq!(rules.evaluate("/project/../elsewhere/a.js"), Decision::Exclude);
    /// ```
    pub fn evaluate(&self, path: impl AsRef<Path>) -> Decision {
        let path = absolute_clean(path);
        let path = path.as_path();
        let normalized = path.to_string_lossy().replace('\\', "/");

        let verdict = self
            .rules
            .iter()
            .find(|rule| rule.predicate.matches(path, &normalized))
            .map(|rule| rule.verdict);

        match verdict {
            Some(Verdict::Include) => Decision::Include(path.to_path_buf()),
            Some(Verdict::Exclude) => Decision::Exclude,
            None => {
                tracing::trace!(path = %path.display(), "no inclusion rule matched");
                Decision::Exclude
            }
        }
    }

    /// Shorthand for `evaluate(path).is_included()`.
    pub fn includes(&self, path: impl AsRef<Path>) -> bool {
        self.evaluate(path).is_included()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn rules() -> InclusionRules {
        InclusionRules::for_project(&Locations::new("/project"))
    }

    #[test]
    fn project_sources_are_included() {
        assert!(rules().includes("/project/src/App.js"));
        assert!(rules().includes("/project/App.js"));
    }

    #[test]
    fn other_vendor_packages_are_excluded() {
        assert_eq!(
            rules().evaluate("/project/node_modules/lodash/index.js"),
            Decision::Exclude
        );
    }

    #[test]
    fn allow_listed_vendor_packages_are_included() {
        for path in [
            "/project/node_modules/react-native/Libraries/Utilities/Platform.js",
            "/project/node_modules/react-native-web/dist/index.js",
            "/project/node_modules/react-navigation/src/index.js",
            "/project/node_modules/expo/build/web/index.js",
            "/project/node_modules/@expo/vector-icons/index.js",
            "/project/node_modules/@react-navigation/core/index.js",
        ] {
            assert!(rules().includes(path), "{path}");
        }
    }

    #[test]
    fn allow_list_wins_outside_the_project() {
        assert!(rules().includes("/elsewhere/node_modules/expo/index.js"));
    }

    #[test]
    fn paths_outside_project_are_excluded() {
        assert_eq!(rules().evaluate("/elsewhere/src/App.js"), Decision::Exclude);
        // sibling directory sharing a prefix
        assert_eq!(rules().evaluate("/project-two/src/App.js"), Decision::Exclude);
    }

    #[test]
    fn windows_separators_are_normalized_for_fragments() {
        assert!(rules().includes(r"C:\app\node_modules\expo\build\index.js"));
    }

    #[test]
    fn parent_segments_are_resolved_before_matching() {
        assert_eq!(rules().evaluate("/project/../elsewhere/a.js"), Decision::Exclude);
        assert_eq!(
            rules().evaluate("/project/node_modules/expo/../lodash/index.js"),
            Decision::Exclude
        );
        assert_eq!(
            rules().evaluate("/project/src/../App.js"),
            Decision::Include(PathBuf::from("/project/App.js"))
        );
    }

    #[test]
    fn relative_root_and_candidate_resolve_against_current_dir() {
        let table = InclusionRules::for_project(&Locations::new("./my-app"));
        assert!(table.includes("./my-app/App.js"));
        assert!(table.includes(std::env::current_dir().unwrap().join("my-app/src/App.js")));
        assert!(!table.includes("./my-app/node_modules/lodash/index.js"));
    }

    #[test]
    fn empty_table_excludes_everything() {
        assert_eq!(
            InclusionRules::new(vec![]).evaluate("/project/src/App.js"),
            Decision::Exclude
        );
    }

    #[test]
    fn first_matching_rule_wins() {
        let table = InclusionRules::new(vec![
            InclusionRule::new(
                Predicate::ContainsAny {
                    fragments: vec!["generated".into()],
                },
                Verdict::Exclude,
            ),
            InclusionRule::new(Predicate::Always, Verdict::Include),
        ]);
        assert_eq!(table.evaluate("/project/generated/a.js"), Decision::Exclude);
        assert!(table.includes("/project/src/a.js"));
    }
}
