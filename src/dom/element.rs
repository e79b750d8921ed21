use html_escape;

/// Tags rendered without a closing tag
const VOID_TAGS: [&str; 8] = ["area", "base", "br", "col", "embed", "hr", "img", "input"];

/// An owned HTML element node
///
/// Stands in for the browser DOM so post fragments can be built and
/// inspected without a page environment.
#[derive(Debug, Clone, PartialEq)]
pub struct Element {
    pub tag: String,
    pub id: Option<String>,
    pub classes: Vec<String>,
    pub attributes: Vec<(String, String)>,
    pub text: Option<String>,
    pub children: Vec<Element>,
}

impl Element {
    pub fn new(tag: &str) -> Self {
        Element {
            tag: tag.to_string(),
            id: None,
            classes: Vec::new(),
            attributes: Vec::new(),
            text: None,
            children: Vec::new(),
        }
    }

    pub fn with_id(mut self, id: &str) -> Self {
        self.id = Some(id.to_string());
        self
    }

    pub fn with_class(mut self, class: &str) -> Self {
        self.classes.push(class.to_string());
        self
    }

    pub fn with_attr(mut self, name: &str, value: &str) -> Self {
        self.attributes.push((name.to_string(), value.to_string()));
        self
    }

    pub fn with_text(mut self, text: &str) -> Self {
        self.text = Some(text.to_string());
        self
    }

    /// Append a child node, keeping insertion order
    pub fn append_child(&mut self, child: Element) {
        self.children.push(child);
    }

    /// Remove all child nodes
    pub fn clear_children(&mut self) {
        self.children.clear();
    }

    /// Check whether this element has a given class
    pub fn has_class(&self, class: &str) -> bool {
        self.classes.iter().any(|c| c == class)
    }

    /// Find a descendant (or this element) by id
    pub fn find_by_id_mut(&mut self, id: &str) -> Option<&mut Element> {
        if self.id.as_deref() == Some(id) {
            return Some(self);
        }

        for child in &mut self.children {
            if let Some(found) = child.find_by_id_mut(id) {
                return Some(found);
            }
        }

        None
    }

    /// Render this element and its children as HTML
    pub fn to_html(&self) -> String {
        let mut html = String::new();
        html.push('<');
        html.push_str(&self.tag);

        if let Some(id) = &self.id {
            html.push_str(&format!(
                " id=\"{}\"",
                html_escape::encode_double_quoted_attribute(id)
            ));
        }

        if !self.classes.is_empty() {
            html.push_str(&format!(
                " class=\"{}\"",
                html_escape::encode_double_quoted_attribute(&self.classes.join(" "))
            ));
        }

        for (name, value) in &self.attributes {
            html.push_str(&format!(
                " {}=\"{}\"",
                name,
                html_escape::encode_double_quoted_attribute(value)
            ));
        }

        html.push('>');

        // Void elements carry no content and no closing tag
        if VOID_TAGS.contains(&self.tag.as_str()) {
            return html;
        }

        if let Some(text) = &self.text {
            html.push_str(&html_escape::encode_text(text));
        }

        for child in &self.children {
            html.push_str(&child.to_html());
        }

        html.push_str(&format!("</{}>", self.tag));
        html
    }
}
