//! Project descriptor loading.
//!
//! The descriptor is the project's `app.json`. Only its top-level `expo`
//! section is read; everything the web build needs (name, colors, icons,
//! the optional `web` sub-manifest) lives there.

use std::borrow::Cow;
use std::fs;
use std::io::ErrorKind;
use std::path::Path;

use serde::{Deserialize, Deserializer, Serialize};
use serde_json::{Map, Value};

use crate::error::{ConfigError, Result};
use crate::locations::Locations;

/// Name of the required top-level section.
pub const DESCRIPTOR_SECTION: &str = "expo";

/// Normalized project descriptor.
///
/// Read once per build and never mutated afterwards. Known fields are passed
/// through with whatever JSON value the project gives them; fields the web
/// build does not know about are kept in `extra` rather than dropped. The
/// client-facing projection lives in [`crate::AppManifest`].
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProjectDescriptor {
    #[serde(default)]
    pub name: Option<Value>,

    #[serde(default)]
    pub description: Option<Value>,

    #[serde(default)]
    pub slug: Option<Value>,

    #[serde(default)]
    pub sdk_version: Option<Value>,

    #[serde(default)]
    pub version: Option<Value>,

    #[serde(default)]
    pub github_url: Option<Value>,

    #[serde(default)]
    pub orientation: Option<Value>,

    #[serde(default)]
    pub primary_color: Option<Value>,

    #[serde(default)]
    pub privacy: Option<Value>,

    /// Path to the app icon, relative to the project root
    #[serde(default)]
    pub icon: Option<Value>,

    #[serde(default)]
    pub scheme: Option<Value>,

    #[serde(default)]
    pub notification: Option<Value>,

    #[serde(default)]
    pub splash: Option<Value>,

    #[serde(default)]
    pub android_show_exponent_notification_in_shell_app: Option<Value>,

    /// Web sub-manifest; empty when neither `expo.web` nor the template manifest exists
    #[serde(default, deserialize_with = "web_or_empty")]
    pub web: Map<String, Value>,

    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

/// `null` counts as an absent web sub-manifest.
fn web_or_empty<'de, D>(deserializer: D) -> std::result::Result<Map<String, Value>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<Map<String, Value>>::deserialize(deserializer)?.unwrap_or_default())
}

/// Text form of a scalar field. Objects and arrays have none.
fn text(value: Option<&Value>) -> Option<Cow<'_, str>> {
    match value? {
        Value::String(s) => Some(Cow::Borrowed(s.as_str())),
        Value::Number(n) => Some(Cow::Owned(n.to_string())),
        Value::Bool(b) => Some(Cow::Owned(b.to_string())),
        _ => None,
    }
}

impl ProjectDescriptor {
    /// Build a descriptor from an already parsed `app.json` document.
    ///
    /// # Example
    ///
    /// ```
    /// use rnweb_config::ProjectDescriptor;
    /// use serde_json::json;
    ///
    /// let descriptor = ProjectDescriptor::from_value(json!({
    ///     "expo": { "name": "Demo", "slug": "demo", "version": 2 }
    /// }))
    /// .unwrap();
    /// assert_eq!(descriptor.name().as_deref(), Some("Demo"));
    /// assert_eq!(descriptor.version, Some(json!(2)));
    /// assert!(descriptor.web.is_empty());
    /// ```
    pub fn from_value(document: Value) -> Result<Self> {
        Self::from_document(document, Path::new(crate::locations::APP_JSON))
    }

    fn from_document(document: Value, path: &Path) -> Result<Self> {
        let Value::Object(mut document) = document else {
            return Err(ConfigError::malformed(
                path,
                "expected a JSON object at the top level",
            ));
        };

        let section = document.remove(DESCRIPTOR_SECTION).ok_or_else(|| {
            ConfigError::malformed(path, format!("missing top-level '{DESCRIPTOR_SECTION}' section"))
        })?;

        if !section.is_object() {
            return Err(ConfigError::malformed(
                path,
                format!("'{DESCRIPTOR_SECTION}' must be an object"),
            ));
        }

        serde_json::from_value(section).map_err(|e| ConfigError::malformed(path, e.to_string()))
    }

    /// The `name` field as text.
    pub fn name(&self) -> Option<Cow<'_, str>> {
        text(self.name.as_ref())
    }

    /// The `description` field as text.
    pub fn description(&self) -> Option<Cow<'_, str>> {
        text(self.description.as_ref())
    }

    /// The `primaryColor` field as text.
    pub fn primary_color(&self) -> Option<Cow<'_, str>> {
        text(self.primary_color.as_ref())
    }

    /// Display name, empty when the descriptor has none.
    pub fn display_name(&self) -> Cow<'_, str> {
        self.name().unwrap_or_default()
    }
}

/// Reads the project descriptor from its fixed location.
///
/// # Example
///
/// ```no_run
/// use rnweb_config::{DescriptorReader, Locations};
///
/// let reader = DescriptorReader::new(Locations::new("."));
/// let descriptor = reader.read().unwrap();
/// println!("{}", descriptor.display_name());
/// ```
pub struct DescriptorReader {
    locations: Locations,
}

impl DescriptorReader {
    /// A reader for the descriptor at `locations.app_json`.
    pub fn new(locations: Locations) -> Self {
        Self { locations }
    }

    pub fn locations(&self) -> &Locations {
        &self.locations
    }

    /// Load and normalize the descriptor.
    ///
    /// # Errors
    ///
    /// - [`ConfigError::MissingDescriptor`] if `app.json` does not exist
    /// - [`ConfigError::MalformedDescriptor`] if it is not JSON, lacks the
    ///   `expo` section, or the template manifest fallback is not JSON
    pub fn read(&self) -> Result<ProjectDescriptor> {
        let path = &self.locations.app_json;
        let content = match fs::read_to_string(path) {
            Ok(content) => content,
            Err(err) if err.kind() == ErrorKind::NotFound => {
                return Err(ConfigError::MissingDescriptor { path: path.clone() });
            }
            Err(err) => return Err(err.into()),
        };

        let document: Value = serde_json::from_str(&content)
            .map_err(|e| ConfigError::malformed(path, format!("invalid JSON: {e}")))?;

        let mut descriptor = ProjectDescriptor::from_document(document, path)?;

        if descriptor.web.is_empty() {
            if let Some(web) = self.read_template_manifest()? {
                descriptor.web = web;
            }
        }

        tracing::debug!(
            path = %path.display(),
            name = %descriptor.display_name(),
            "loaded project descriptor"
        );

        Ok(descriptor)
    }

    /// The PWA template manifest (`web/manifest.json`), if present.
    fn read_template_manifest(&self) -> Result<Option<Map<String, Value>>> {
        let path = &self.locations.template.manifest;
        let content = match fs::read_to_string(path) {
            Ok(content) => content,
            Err(err) if err.kind() == ErrorKind::NotFound => return Ok(None),
            Err(err) => return Err(err.into()),
        };

        match serde_json::from_str::<Value>(&content) {
            Ok(Value::Object(map)) => Ok(Some(map)),
            Ok(_) => Err(ConfigError::malformed(
                path,
                "web manifest must be a JSON object",
            )),
            Err(e) => Err(ConfigError::malformed(path, format!("invalid JSON: {e}"))),
        }
    }
}

/// Read the descriptor for a project root (convenience function).
pub fn read_descriptor(root: impl AsRef<Path>) -> Result<ProjectDescriptor> {
    DescriptorReader::new(Locations::new(root)).read()
}
