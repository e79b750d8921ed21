use chrono::{DateTime, Utc};

use crate::dom::Element;
use crate::loader::dates::format_date;
use crate::manifest::Post;

/// Text shown when the manifest contains no posts
const EMPTY_STATE_TEXT: &str = "No posts yet.";

/// Rendering options for the post list fragment
#[derive(Debug, Clone)]
pub struct RenderOptions {
    /// Image URL used when a post has no image of its own
    pub fallback_image: String,
    /// Render recent dates relative to today
    pub relative_dates: bool,
}

/// Render posts into the container, one node per post
///
/// An empty list renders a single empty-state node instead. The container
/// is never cleared here; callers clear before re-rendering.
pub fn render(posts: &[Post], container: &mut Element, options: &RenderOptions, now: DateTime<Utc>) {
    if posts.is_empty() {
        container.append_child(
            Element::new("p")
                .with_class("posts-empty")
                .with_text(EMPTY_STATE_TEXT),
        );
        return;
    }

    for post in posts {
        container.append_child(post_item(post, options, now));
    }
}

/// Build the composite node for one post
fn post_item(post: &Post, options: &RenderOptions, now: DateTime<Utc>) -> Element {
    let image_src = match &post.image_path {
        Some(path) if !path.is_empty() => path.as_str(),
        _ => options.fallback_image.as_str(),
    };

    let image = Element::new("img")
        .with_class("post-image")
        .with_attr("src", image_src)
        .with_attr("alt", &post.title);

    let title_link = Element::new("a")
        .with_class("dropdown-link")
        .with_attr("href", &post.path)
        .with_text(&post.title);

    let date_line = Element::new("p")
        .with_class("post-date")
        .with_text(&format!("🗓️ {}", date_text(post, options, now)));

    let description = Element::new("p")
        .with_class("post-description")
        .with_text(&post.description);

    let mut content = Element::new("div").with_class("post-content");
    content.append_child(title_link);
    content.append_child(date_line);
    content.append_child(description);

    let mut item = Element::new("li").with_class("post-dropdown-item");
    item.append_child(image);
    item.append_child(content);
    item
}

// A date that never parsed passes through as-is
fn date_text(post: &Post, options: &RenderOptions, now: DateTime<Utc>) -> String {
    match post.parsed_date() {
        Some(date) => format_date(&date, options.relative_dates, now),
        None => post.date.clone(),
    }
}
