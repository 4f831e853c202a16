use super::escape::escape_attribute;

/// Stylesheet tag for a URL. The URL is escaped.
pub fn link_tag(href: &str) -> String {
    format!(r#"<link rel="stylesheet" href="{}">"#, escape_attribute(href))
}

/// ES module script tag for a URL. The URL is escaped.
pub fn script_tag(src: &str) -> String {
    format!(
        r#"<script type="module" src="{}"></script>"#,
        escape_attribute(src)
    )
}

/// Concatenated run of tags, written without separators.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct TagList {
    html: String,
    count: usize,
}

impl TagList {
    /// Empty tag list.
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a stylesheet tag.
    pub fn push_link(&mut self, href: &str) {
        self.html.push_str(&link_tag(href));
        self.count += 1;
    }

    /// Append a module script tag.
    pub fn push_script(&mut self, src: &str) {
        self.html.push_str(&script_tag(src));
        self.count += 1;
    }

    /// Number of tags written so far.
    pub fn len(&self) -> usize {
        self.count
    }

    /// Whether no tag has been written.
    pub fn is_empty(&self) -> bool {
        self.count == 0
    }

    /// Rendered HTML.
    pub fn into_html(self) -> String {
        self.html
    }
}
