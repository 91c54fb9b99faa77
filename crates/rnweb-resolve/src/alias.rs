//! Import aliases from React Native names to web implementations.
//!
//! The table has two tiers:
//!
//! - **direct** aliases for a few framework-internal module paths, pointed at
//!   Expo's web build
//! - **generated** aliases for common component/API names, pointed at the
//!   matching export of `react-native-web`, plus a few vendor shims
//!
//! Names are unique across both tiers. A duplicate is an error rather than
//! an overwrite, since an ambiguous alias resolves to whichever entry the
//! bundler happens to see last.

use indexmap::IndexMap;
use serde::{Serialize, Serializer};

use crate::error::{ResolveError, Result};

/// Framework-internal module paths redirected to Expo's web build.
pub const DIRECT_ALIASES: [(&str, &str); 4] = [
    ("react-native", "react-native-web"),
    (
        "react-native/Libraries/Image/AssetSourceResolver",
        "expo/build/web/Image/AssetSourceResolver",
    ),
    (
        "react-native/Libraries/Image/assetPathUtils",
        "expo/build/web/Image/assetPathUtils",
    ),
    (
        "react-native/Libraries/Image/resolveAssetSource",
        "expo/build/web/Image/resolveAssetSource",
    ),
];

/// Component and API names imported as bare module specifiers.
pub const GENERATED_COMPONENTS: [&str; 19] = [
    "ActivityIndicator",
    "Alert",
    "AsyncStorage",
    "Button",
    "DeviceInfo",
    "Modal",
    "NativeModules",
    "Network",
    "Platform",
    "SafeAreaView",
    "SectionList",
    "StyleSheet",
    "Switch",
    "Text",
    "TextInput",
    "TouchableHighlight",
    "TouchableWithoutFeedback",
    "View",
    "ViewPropTypes",
];

/// Package path of the generated component aliases.
pub const COMPONENT_EXPORTS_ROOT: &str = "react-native-web/dist/cjs/exports";

/// `(name, target, exact)` shims for vendor-internal modules.
pub const VENDOR_SHIMS: [(&str, &str, bool); 4] = [
    (
        "JSEventLoopWatchdog",
        "react-native-web/dist/cjs/vendor/react-native/JSEventLoopWatchdog",
        false,
    ),
    ("React", "react", true),
    ("ReactNative", "react-native-web/dist/cjs", true),
    (
        "infoLog",
        "react-native-web/dist/cjs/vendor/react-native/infoLog",
        true,
    ),
];

/// Which tier an alias belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum AliasTier {
    Direct,
    Generated,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AliasEntry {
    pub name: String,
    pub target: String,
    /// Only the bare specifier matches; sub-paths are not aliased
    pub exact: bool,
    pub tier: AliasTier,
}

impl AliasEntry {
    pub fn new(name: impl Into<String>, target: impl Into<String>, exact: bool, tier: AliasTier) -> Self {
        Self {
            name: name.into(),
            target: target.into(),
            exact,
            tier,
        }
    }

    /// Parse a bundler-style key where a trailing `$` marks an exact match.
    ///
    /// # Example
    ///
    /// ```
    /// use rnweb_resolve::{AliasEntry, AliasTier};
    ///
    /// let entry = AliasEntry::parse("lodash$", "lodash-es", AliasTier::Direct);
    /// assert_eq!(entry.name, "lodash");
    /// assert!(entry.exact);
    /// ```
    pub fn parse(key: &str, target: impl Into<String>, tier: AliasTier) -> Self {
        match key.strip_suffix('$') {
            Some(name) => Self::new(name, target, true, tier),
            None => Self::new(key, target, false, tier),
        }
    }

    /// Key as written in a bundler alias map.
    pub fn key(&self) -> String {
        if self.exact {
            format!("{}$", self.name)
        } else {
            self.name.clone()
        }
    }

    fn resolve(&self, specifier: &str) -> Option<String> {
        if specifier == self.name {
            return Some(self.target.clone());
        }
        if self.exact {
            return None;
        }
        specifier
            .strip_prefix(self.name.as_str())
            .filter(|rest| rest.starts_with('/'))
            .map(|rest| format!("{}{}", self.target, rest))
    }
}

/// Collects alias entries and checks them for collisions.
///
/// # Example
///
/// ```
/// use rnweb_resolve::AliasTableBuilder;
///
/// let table = AliasTableBuilder::platform_defaults()
///     .direct("@assets", "./assets")
///     .build()
///     .unwrap();
/// assert_eq!(table.resolve("@assets/logo.png").as_deref(), Some("./assets/logo.png"));
///
/// let err = AliasTableBuilder::platform_defaults()
///     .direct("View$", "./MyView")
///     .build();
/// assert!(err.is_err());
/// ```
#[derive(Debug, Clone, Default)]
pub struct AliasTableBuilder {
    direct: Vec<AliasEntry>,
    generated: Vec<AliasEntry>,
}

impl AliasTableBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder seeded with the React Native → web tables.
    pub fn platform_defaults() -> Self {
        let mut builder = Self::new();

        for (name, target) in DIRECT_ALIASES {
            builder
                .direct
                .push(AliasEntry::new(name, target, true, AliasTier::Direct));
        }

        for (name, target, exact) in VENDOR_SHIMS {
            builder
                .generated
                .push(AliasEntry::new(name, target, exact, AliasTier::Generated));
        }

        for name in GENERATED_COMPONENTS {
            builder.generated.push(AliasEntry::new(
                name,
                format!("{COMPONENT_EXPORTS_ROOT}/{name}"),
                true,
                AliasTier::Generated,
            ));
        }

        builder
    }

    /// Add a direct alias; `key` may carry a trailing `$`.
    pub fn direct(mut self, key: &str, target: impl Into<String>) -> Self {
        self.direct
            .push(AliasEntry::parse(key, target, AliasTier::Direct));
        self
    }

    /// Build the table.
    ///
    /// # Errors
    ///
    /// Returns [`ResolveError::AliasCollision`] for the first name defined
    /// more than once, direct tier first.
    pub fn build(self) -> Result<AliasTable> {
        let mut entries: IndexMap<String, AliasEntry> = IndexMap::new();

        for entry in self.direct.into_iter().chain(self.generated) {
            if let Some(existing) = entries.get(&entry.name) {
                return Err(ResolveError::AliasCollision {
                    name: entry.name,
                    existing: existing.target.clone(),
                    incoming: entry.target,
                });
            }
            entries.insert(entry.name.clone(), entry);
        }

        tracing::debug!(aliases = entries.len(), "built alias table");
        Ok(AliasTable { entries })
    }
}

/// Immutable alias table handed to the bundler.
///
/// Serializes as the bundler's alias map (`{"View$": "react-native-web/..."}`).
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AliasTable {
    entries: IndexMap<String, AliasEntry>,
}

impl AliasTable {
    /// The standard React Native → web table.
    pub fn platform_defaults() -> Result<Self> {
        AliasTableBuilder::platform_defaults().build()
    }

    pub fn get(&self, name: &str) -> Option<&AliasEntry> {
        self.entries.get(name)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn entries(&self) -> impl Iterator<Item = &AliasEntry> {
        self.entries.values()
    }

    /// Resolve a module specifier through the table.
    ///
    /// Exact entries only match the bare name; other entries also match
    /// `name/sub/path`, keeping the sub-path. The longest matching name wins.
    pub fn resolve(&self, specifier: &str) -> Option<String> {
        if let Some(entry) = self.entries.get(specifier) {
            return Some(entry.target.clone());
        }

        self.entries
            .values()
            .filter_map(|entry| entry.resolve(specifier).map(|t| (entry.name.len(), t)))
            .max_by_key(|(len, _)| *len)
            .map(|(_, target)| target)
    }
}

impl Serialize for AliasTable {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        serializer.collect_map(self.entries.values().map(|e| (e.key(), &e.target)))
    }
}
