//! HTML shell document synthesis.
//!
//! The shell is the single `index.html` the compiled bundle is injected
//! into. Its title and meta tags come from the project descriptor; the
//! template, favicon and output paths come from [`Locations`].

mod minify;

use std::borrow::Cow;
use std::path::PathBuf;

use indexmap::IndexMap;
use serde::Serialize;

use crate::descriptor::ProjectDescriptor;
use crate::env::DEFAULT_PUBLIC_URL;
use crate::locations::Locations;

pub use minify::MinifyOptions;

/// Meta description used when the descriptor has none.
pub const DEFAULT_DESCRIPTION: &str = "A Neat Expo App";

/// Theme color used when the descriptor has no primary color.
pub const DEFAULT_THEME_COLOR: &str = "#000000";

const VIEWPORT: &str = "width=device-width, initial-scale=1, shrink-to-fit=no";

/// Configuration for generating the HTML entry document.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ShellDocument {
    /// Output file
    pub filename: PathBuf,

    /// Document title (the project name)
    pub title: String,

    pub favicon: PathBuf,

    /// Template the bundle is injected into
    pub template: PathBuf,

    /// `<meta name=... content=...>` tags, in document order
    pub meta: IndexMap<String, String>,

    pub minify: MinifyOptions,

    /// Values substituted for `%NAME%` placeholders in the template
    pub interpolations: IndexMap<String, String>,
}

impl ShellDocument {
    /// Derive the shell document for a project.
    ///
    /// # Example
    ///
    /// ```
    /// use rnweb_config::{Locations, ProjectDescriptor, ShellDocument, DEFAULT_DESCRIPTION};
    /// use serde_json::json;
    ///
    /// let descriptor = ProjectDescriptor::from_value(json!({
    ///     "expo": { "name": "Demo", "description": "" }
    /// }))
    /// .unwrap();
    /// let shell = ShellDocument::new(&descriptor, &Locations::new("/project"));
    /// assert_eq!(shell.title, "Demo");
    /// assert_eq!(shell.meta["description"], DEFAULT_DESCRIPTION);
    /// ```
    pub fn new(descriptor: &ProjectDescriptor, locations: &Locations) -> Self {
        Self::with_public_url(descriptor, locations, DEFAULT_PUBLIC_URL)
    }

    /// Like [`ShellDocument::new`] with an explicit public URL for
    /// `%PUBLIC_URL%`.
    pub fn with_public_url(
        descriptor: &ProjectDescriptor,
        locations: &Locations,
        public_url: &str,
    ) -> Self {
        let name = descriptor.display_name();

        let mut interpolations = IndexMap::new();
        interpolations.insert("PUBLIC_URL".to_string(), public_url.to_string());
        interpolations.insert("WEB_TITLE".to_string(), name.to_string());

        Self {
            filename: locations.production.index_html.clone(),
            title: name.to_string(),
            favicon: locations.template.favicon.clone(),
            template: locations.template.index_html.clone(),
            meta: meta_tags(descriptor),
            minify: MinifyOptions::default(),
            interpolations,
        }
    }

    /// Replace `%NAME%` placeholders in template HTML.
    ///
    /// Unknown placeholders are left untouched.
    pub fn interpolate(&self, html: &str) -> String {
        self.interpolations
            .iter()
            .fold(html.to_string(), |acc, (key, value)| {
                acc.replace(&format!("%{key}%"), value)
            })
    }
}

fn meta_tags(descriptor: &ProjectDescriptor) -> IndexMap<String, String> {
    let name = descriptor.display_name();
    let description =
        non_empty(descriptor.description()).unwrap_or(Cow::Borrowed(DEFAULT_DESCRIPTION));
    let theme_color =
        non_empty(descriptor.primary_color()).unwrap_or(Cow::Borrowed(DEFAULT_THEME_COLOR));

    [
        ("viewport", VIEWPORT),
        ("description", &*description),
        ("theme-color", &*theme_color),
        ("apple-mobile-web-app-capable", "yes"),
        // default, black, black-translucent
        ("apple-mobile-web-app-status-bar-style", "default"),
        ("apple-mobile-web-app-title", &*name),
        ("application-name", &*name),
        // Windows tiles
        ("msapplication-navbutton-color", ""),
        ("msapplication-TileColor", ""),
        ("msapplication-TileImage", ""),
    ]
    .into_iter()
    .map(|(key, value)| (key.to_string(), value.to_string()))
    .collect()
}

fn non_empty(value: Option<Cow<'_, str>>) -> Option<Cow<'_, str>> {
    value.filter(|v| !v.is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn descriptor(value: serde_json::Value) -> ProjectDescriptor {
        ProjectDescriptor::from_value(json!({ "expo": value })).unwrap()
    }

    #[test]
    fn meta_tags_follow_descriptor() {
        let shell = ShellDocument::new(
            &descriptor(json!({
                "name": "Demo",
                "description": "A demo",
                "primaryColor": "#123456"
            })),
            &Locations::new("/project"),
        );
        assert_eq!(shell.meta["description"], "A demo");
        assert_eq!(shell.meta["theme-color"], "#123456");
        assert_eq!(shell.meta["apple-mobile-web-app-title"], "Demo");
        assert_eq!(shell.meta["application-name"], "Demo");
        assert_eq!(shell.meta["msapplication-TileImage"], "");
    }

    #[test]
    fn non_text_fields_fall_back() {
        let shell = ShellDocument::new(
            &descriptor(json!({
                "name": 7,
                "description": null,
                "primaryColor": { "light": "#fff" }
            })),
            &Locations::new("/project"),
        );
        assert_eq!(shell.title, "7");
        assert_eq!(shell.meta["description"], DEFAULT_DESCRIPTION);
        assert_eq!(shell.meta["theme-color"], DEFAULT_THEME_COLOR);
    }

    #[test]
    fn meta_tag_order_is_stable() {
        let shell = ShellDocument::new(&ProjectDescriptor::default(), &Locations::new("/p"));
        let keys: Vec<_> = shell.meta.keys().map(String::as_str).collect();
        assert_eq!(
            keys,
            vec![
                "viewport",
                "description",
                "theme-color",
                "apple-mobile-web-app-capable",
                "apple-mobile-web-app-status-bar-style",
                "apple-mobile-web-app-title",
                "application-name",
                "msapplication-navbutton-color",
                "msapplication-TileColor",
                "msapplication-TileImage",
            ]
        );
    }

    #[test]
    fn paths_come_from_locations() {
        let shell = ShellDocument::new(&ProjectDescriptor::default(), &Locations::new("/project"));
        assert_eq!(shell.filename, PathBuf::from("/project/web-build/index.html"));
        assert_eq!(shell.template, PathBuf::from("/project/web/index.html"));
        assert_eq!(shell.favicon, PathBuf::from("/project/web/favicon.ico"));
    }

    #[test]
    fn interpolate_replaces_known_placeholders() {
        let shell = ShellDocument::with_public_url(
            &descriptor(json!({ "name": "Demo" })),
            &Locations::new("/project"),
            "/static",
        );
        let html = shell.interpolate(
            r#"<link rel="icon" href="%PUBLIC_URL%/favicon.ico"><title>%WEB_TITLE%</title>%OTHER%"#,
        );
        assert_eq!(
            html,
            r#"<link rel="icon" href="/static/favicon.ico"><title>Demo</title>%OTHER%"#
        );
    }

    #[test]
    fn minify_serializes_html_minifier_keys() {
        let value = serde_json::to_value(MinifyOptions::default()).unwrap();
        assert_eq!(value["minifyJS"], json!(true));
        assert_eq!(value["minifyURLs"], json!(true));
        assert_eq!(value["useShortDoctype"], json!(true));
    }
}
