//! Build plugins handed to the bundler.
//!
//! Each plugin is plain data. The bundler owns the behavior; this crate only
//! decides what each plugin is configured with.

use indexmap::IndexMap;
use rnweb_config::{ClientEnvironment, ShellDocument};
use rnweb_resolve::RedirectionRule;
use serde::Serialize;

/// Asset manifest written next to the bundle.
pub const ASSET_MANIFEST_FILE: &str = "asset-manifest.json";

/// Service worker precache exclusions.
pub const SERVICE_WORKER_EXCLUDE: [&str; 3] = [r"\.LICENSE$", r"\.map$", r"asset-manifest\.json$"];

/// Navigation requests never answered by the app shell.
pub const NAVIGATE_FALLBACK_DENYLIST: [&str; 2] = ["^/_", r"/[^/]+\.[^/]+$"];

/// Configured build plugin, serialized as `{"plugin": ..., "options": ...}`.
#[derive(Debug, Clone, Serialize)]
#[serde(tag = "plugin", content = "options", rename_all = "kebab-case")]
pub enum PluginConfig {
    /// Generates the HTML entry document
    Html(ShellDocument),

    /// Substitutes `%NAME%` placeholders in the HTML template
    InterpolateHtml(IndexMap<String, String>),

    /// Writes the asset manifest
    #[serde(rename_all = "camelCase")]
    AssetManifest { file_name: String, public_path: String },

    /// Compile-time constant substitution
    Define(ClientEnvironment),

    /// Rewrites a platform module request
    ModuleReplacement(RedirectionRule),

    ServiceWorker(ServiceWorkerOptions),

    #[serde(rename_all = "camelCase")]
    BundleAnalyzer { analyzer_mode: String, open_analyzer: bool },
}

impl PluginConfig {
    /// Plugin name as it appears in the serialized configuration.
    pub fn name(&self) -> &'static str {
        match self {
            PluginConfig::Html(_) => "html",
            PluginConfig::InterpolateHtml(_) => "interpolate-html",
            PluginConfig::AssetManifest { .. } => "asset-manifest",
            PluginConfig::Define(_) => "define",
            PluginConfig::ModuleReplacement(_) => "module-replacement",
            PluginConfig::ServiceWorker(_) => "service-worker",
            PluginConfig::BundleAnalyzer { .. } => "bundle-analyzer",
        }
    }

    /// Asset manifest written next to the bundle.
    pub fn asset_manifest() -> Self {
        PluginConfig::AssetManifest {
            file_name: ASSET_MANIFEST_FILE.to_string(),
            public_path: "/".to_string(),
        }
    }

    /// Static report, never opened automatically.
    pub fn bundle_analyzer() -> Self {
        PluginConfig::BundleAnalyzer {
            analyzer_mode: "static".to_string(),
            open_analyzer: false,
        }
    }
}

/// Runtime caching entry of the generated service worker.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RuntimeCaching {
    pub url_pattern: String,
    pub handler: String,
}

/// Options for the generated service worker.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ServiceWorkerOptions {
    pub skip_waiting: bool,
    pub clients_claim: bool,
    pub exclude: Vec<String>,
    pub import_workbox_from: String,
    pub navigate_fallback: String,
    pub navigate_fallback_denylist: Vec<String>,
    pub runtime_caching: Vec<RuntimeCaching>,
}

impl ServiceWorkerOptions {
    /// Offline support rooted at `public_url`; navigations fall back to the shell.
    pub fn new(public_url: &str) -> Self {
        Self {
            skip_waiting: true,
            clients_claim: true,
            exclude: SERVICE_WORKER_EXCLUDE.iter().map(|s| s.to_string()).collect(),
            import_workbox_from: "cdn".to_string(),
            navigate_fallback: format!("{public_url}/index.html"),
            navigate_fallback_denylist: NAVIGATE_FALLBACK_DENYLIST
                .iter()
                .map(|s| s.to_string())
                .collect(),
            runtime_caching: vec![RuntimeCaching {
                url_pattern: "(.*?)".to_string(),
                handler: "staleWhileRevalidate".to_string(),
            }],
        }
    }
}
