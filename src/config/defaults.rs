use crate::loader::transform::SortMode;

/// Default base URL (empty means the manifest path is used as-is)
pub fn default_base_url() -> String {
    String::new()
}

/// Default manifest path
pub fn default_manifest_path() -> String {
    "/posts/posts.json".to_string()
}

/// Default container element id
pub fn default_container_id() -> String {
    "posts-content".to_string()
}

/// Default sort order
pub fn default_sort() -> SortMode {
    SortMode::Newest
}

/// Default relative date rendering
pub fn default_relative_dates() -> bool {
    true
}

/// Default fallback image for posts without one
pub fn default_fallback_image() -> String {
    "https://avatars.githubusercontent.com/u/62766066?v=4".to_string()
}

/// Default site title
pub fn default_site_title() -> String {
    "Your awesome blog".to_string()
}

/// Default site link
pub fn default_site_link() -> String {
    String::new()
}

/// Default site description
pub fn default_site_description() -> String {
    String::new()
}

/// Default feed language
pub fn default_site_language() -> String {
    "en-us".to_string()
}
