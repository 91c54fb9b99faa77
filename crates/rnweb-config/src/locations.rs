//! Fixed project locations derived from the project root.
//!
//! Every path the synthesized configuration refers to (descriptor, HTML
//! template, favicon, output folder, vendor packages) comes from here so that
//! the rest of the crate never joins path strings on its own.

use std::path::{Path, PathBuf};

use path_clean::PathClean;
use serde::Serialize;

/// Descriptor file, relative to the project root.
pub const APP_JSON: &str = "app.json";

/// Directory holding the HTML template, favicon and PWA manifest.
pub const TEMPLATE_DIR: &str = "web";

/// Default output directory for production builds.
pub const DEFAULT_OUTPUT_DIR: &str = "web-build";

/// Name of the generated HTML entry document.
pub const INDEX_HTML: &str = "index.html";

/// Vendor package directory name.
pub const NODE_MODULES: &str = "node_modules";

/// Template inputs for the shell document.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TemplateLocations {
    pub folder: PathBuf,
    pub index_html: PathBuf,
    pub favicon: PathBuf,
    pub manifest: PathBuf,
}

/// Build outputs.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ProductionLocations {
    pub folder: PathBuf,
    pub index_html: PathBuf,
}

/// All fixed locations for one project.
///
/// # Example
///
/// ```
/// use rnweb_config::Locations;
/// use std::path::Path;
///
/// let locations = Locations::new("/project");
/// assert_eq!(locations.app_json, Path::new("/project/app.json"));
/// assert_eq!(
///     locations.node_modules_path("expo/build/web/Utilities/Platform"),
///     Path::new("/project/node_modules/expo/build/web/Utilities/Platform"),
/// );
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Locations {
    pub root: PathBuf,
    pub app_json: PathBuf,
    pub template: TemplateLocations,
    pub production: ProductionLocations,
}

impl Locations {
    /// Locations for the project at `root` with the default output directory.
    pub fn new(root: impl AsRef<Path>) -> Self {
        Self::with_output_dir(root, DEFAULT_OUTPUT_DIR)
    }

    /// Like [`Locations::new`] but with a custom output directory.
    ///
    /// A relative root is resolved against the current directory. Relative
    /// output directories are resolved against the project root.
    pub fn with_output_dir(root: impl AsRef<Path>, output_dir: impl AsRef<Path>) -> Self {
        let root = absolute_clean(root);
        let template_folder = root.join(TEMPLATE_DIR);
        let production_folder = root.join(output_dir.as_ref()).clean();

        Self {
            app_json: root.join(APP_JSON),
            template: TemplateLocations {
                index_html: template_folder.join(INDEX_HTML),
                favicon: template_folder.join("favicon.ico"),
                manifest: template_folder.join("manifest.json"),
                folder: template_folder,
            },
            production: ProductionLocations {
                index_html: production_folder.join(INDEX_HTML),
                folder: production_folder,
            },
            root,
        }
    }

    /// Path of a package (or a file inside one) under the project's `node_modules`.
    pub fn node_modules_path(&self, relative: impl AsRef<Path>) -> PathBuf {
        self.root.join(NODE_MODULES).join(relative).clean()
    }

    /// Resolve a path relative to the project root.
    pub fn absolute(&self, relative: impl AsRef<Path>) -> PathBuf {
        self.root.join(relative).clean()
    }
}

/// Make `path` absolute against the current directory and clean it lexically.
///
/// An empty path stands for the current directory. If the current directory
/// cannot be determined the path is only cleaned.
///
/// # Examples
///
/// ```
/// use rnweb_config::locations::absolute_clean;
/// use std::path::Path;
///
/// assert_eq!(absolute_clean("/project/src/../App.js"), Path::new("/project/App.js"));
/// assert!(absolute_clean("src/App.js").is_absolute());
/// ```
pub fn absolute_clean(path: impl AsRef<Path>) -> PathBuf {
    let path = path.as_ref();
    let path = if path.as_os_str().is_empty() {
        Path::new(".")
    } else {
        path
    };
    std::path::absolute(path)
        .unwrap_or_else(|_| path.to_path_buf())
        .clean()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn derives_template_and_production_paths() {
        let locations = Locations::new("/project");
        assert_eq!(locations.template.folder, PathBuf::from("/project/web"));
        assert_eq!(
            locations.template.index_html,
            PathBuf::from("/project/web/index.html")
        );
        assert_eq!(
            locations.template.favicon,
            PathBuf::from("/project/web/favicon.ico")
        );
        assert_eq!(
            locations.production.index_html,
            PathBuf::from("/project/web-build/index.html")
        );
    }

    #[test]
    fn cleans_the_root() {
        let locations = Locations::new("/project/./app/../");
        assert_eq!(locations.root, PathBuf::from("/project"));
    }

    #[test]
    fn custom_output_dir_is_relative_to_root() {
        let locations = Locations::with_output_dir("/project", "dist/web");
        assert_eq!(
            locations.production.folder,
            PathBuf::from("/project/dist/web")
        );
    }

    #[test]
    fn absolute_output_dir_is_kept() {
        let locations = Locations::with_output_dir("/project", "/tmp/out");
        assert_eq!(locations.production.folder, PathBuf::from("/tmp/out"));
    }

    #[test]
    fn node_modules_path_joins_package_paths() {
        let locations = Locations::new("/project");
        assert_eq!(
            locations.node_modules_path("@expo/vector-icons"),
            PathBuf::from("/project/node_modules/@expo/vector-icons")
        );
    }

    #[test]
    fn relative_root_is_made_absolute() {
        let cwd = std::env::current_dir().unwrap();
        let locations = Locations::new("./my-app");
        assert_eq!(locations.root, cwd.join("my-app").clean());
        assert_eq!(locations.app_json, cwd.join("my-app/app.json").clean());
    }

    #[test]
    fn empty_root_is_the_current_directory() {
        let cwd = std::env::current_dir().unwrap();
        assert_eq!(Locations::new("").root, cwd.clean());
    }
}
