use serde::{Deserialize, Serialize};

use crate::config::defaults;
use crate::loader::transform::SortMode;

/// Site metadata used by the feed generator
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SiteMeta {
    /// Site title
    #[serde(default = "defaults::default_site_title")]
    pub title: String,

    /// Site link, the public base URL
    #[serde(default = "defaults::default_site_link")]
    pub link: String,

    /// Site description
    #[serde(default = "defaults::default_site_description")]
    pub description: String,

    /// Feed language code
    #[serde(default = "defaults::default_site_language")]
    pub language: String,
}

impl Default for SiteMeta {
    fn default() -> Self {
        SiteMeta {
            title: defaults::default_site_title(),
            link: defaults::default_site_link(),
            description: defaults::default_site_description(),
            language: defaults::default_site_language(),
        }
    }
}

/// Loader configuration structure
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    /// Base URL the manifest path is resolved against
    #[serde(default = "defaults::default_base_url")]
    pub base_url: String,

    /// Path of the posts manifest under the base URL
    #[serde(default = "defaults::default_manifest_path")]
    pub manifest_path: String,

    /// Id of the container element posts are rendered into
    #[serde(default = "defaults::default_container_id")]
    pub container_id: String,

    /// Maximum number of posts to render
    #[serde(default)]
    pub limit: Option<usize>,

    /// Ordering policy applied before rendering
    #[serde(default = "defaults::default_sort")]
    pub sort: SortMode,

    /// Render recent dates relative to today
    #[serde(default = "defaults::default_relative_dates")]
    pub relative_dates: bool,

    /// Image URL used when a post has no image of its own
    #[serde(default = "defaults::default_fallback_image")]
    pub fallback_image: String,

    /// Site metadata for feed generation
    #[serde(default)]
    pub site: SiteMeta,
}

impl Default for Config {
    fn default() -> Self {
        Config {
            base_url: defaults::default_base_url(),
            manifest_path: defaults::default_manifest_path(),
            container_id: defaults::default_container_id(),
            limit: None,
            sort: defaults::default_sort(),
            relative_dates: defaults::default_relative_dates(),
            fallback_image: defaults::default_fallback_image(),
            site: SiteMeta::default(),
        }
    }
}

impl Config {
    /// Full URL of the posts manifest
    pub fn manifest_url(&self) -> String {
        if self.base_url.is_empty() {
            return self.manifest_path.clone();
        }

        format!(
            "{}/{}",
            self.base_url.trim_end_matches('/'),
            self.manifest_path.trim_start_matches('/')
        )
    }
}
