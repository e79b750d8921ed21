use crate::dom::Element;

/// Text shown while a fetch cycle is in flight
const LOADING_TEXT: &str = "Loading posts...";

/// Show the loading state, replacing any previous container contents
pub fn show_loading(container: &mut Element) {
    container.clear_children();
    container.append_child(
        Element::new("p")
            .with_class("posts-loading")
            .with_text(LOADING_TEXT),
    );
}

/// Show the error state with a human-readable message
pub fn show_error(container: &mut Element, message: &str) {
    container.clear_children();
    container.append_child(
        Element::new("p")
            .with_class("posts-error")
            .with_text(&format!("Failed to load posts: {}", message)),
    );
}

/// Clear the container ahead of rendering content
pub fn clear(container: &mut Element) {
    container.clear_children();
}
