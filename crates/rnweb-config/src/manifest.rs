//! Client-visible app manifest.

use serde::Serialize;
use serde_json::{Map, Value};

use crate::descriptor::ProjectDescriptor;

/// Allow-listed projection of [`ProjectDescriptor`] exposed to client code.
///
/// Every field is copied explicitly; nothing from `ProjectDescriptor::extra`
/// can reach the bundle. Absent fields are omitted when serialized.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AppManifest {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<Value>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<Value>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub slug: Option<Value>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sdk_version: Option<Value>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub version: Option<Value>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub github_url: Option<Value>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub orientation: Option<Value>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub primary_color: Option<Value>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub privacy: Option<Value>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub icon: Option<Value>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub scheme: Option<Value>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub notification: Option<Value>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub splash: Option<Value>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub android_show_exponent_notification_in_shell_app: Option<Value>,
    pub web: Map<String, Value>,
}

impl AppManifest {
    /// Names of the fields that may appear in a serialized manifest.
    pub const FIELDS: [&'static str; 15] = [
        "name",
        "description",
        "slug",
        "sdkVersion",
        "version",
        "githubUrl",
        "orientation",
        "primaryColor",
        "privacy",
        "icon",
        "scheme",
        "notification",
        "splash",
        "androidShowExponentNotificationInShellApp",
        "web",
    ];

    /// Serialize to the JSON text injected as `APP_MANIFEST`.
    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string(self)
    }
}

impl From<&ProjectDescriptor> for AppManifest {
    fn from(descriptor: &ProjectDescriptor) -> Self {
        Self {
            name: descriptor.name.clone(),
            description: descriptor.description.clone(),
            slug: descriptor.slug.clone(),
            sdk_version: descriptor.sdk_version.clone(),
            version: descriptor.version.clone(),
            github_url: descriptor.github_url.clone(),
            orientation: descriptor.orientation.clone(),
            primary_color: descriptor.primary_color.clone(),
            privacy: descriptor.privacy.clone(),
            icon: descriptor.icon.clone(),
            scheme: descriptor.scheme.clone(),
            notification: descriptor.notification.clone(),
            splash: descriptor.splash.clone(),
            android_show_exponent_notification_in_shell_app: descriptor
                .android_show_exponent_notification_in_shell_app
                .clone(),
            web: descriptor.web.clone(),
        }
    }
}
