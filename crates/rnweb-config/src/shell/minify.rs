use serde::{Deserialize, Serialize};

/// HTML minifier options applied to the generated shell document.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MinifyOptions {
    pub remove_comments: bool,
    pub collapse_whitespace: bool,
    pub remove_redundant_attributes: bool,
    pub use_short_doctype: bool,
    pub remove_empty_attributes: bool,
    pub remove_style_link_type_attributes: bool,
    pub keep_closing_slash: bool,
    #[serde(rename = "minifyJS")]
    pub minify_js: bool,
    #[serde(rename = "minifyCSS")]
    pub minify_css: bool,
    #[serde(rename = "minifyURLs")]
    pub minify_urls: bool,
}

impl Default for MinifyOptions {
    fn default() -> Self {
        Self {
            remove_comments: true,
            collapse_whitespace: true,
            remove_redundant_attributes: true,
            use_short_doctype: true,
            remove_empty_attributes: true,
            remove_style_link_type_attributes: true,
            keep_closing_slash: true,
            minify_js: true,
            minify_css: true,
            minify_urls: true,
        }
    }
}
