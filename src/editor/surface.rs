/*!
 * Rendered document surface.
 *
 * Stands in for the two page regions the highlighter touches: the container
 * holding the rendered content markup and the preview pane. Either may be
 * absent, which callers treat as a recoverable condition.
 */

/// Read/write access to the rendered content and the preview pane
pub trait DocumentSurface: Send {
    /// Current content markup, or `None` if the content container is missing
    fn content_html(&self) -> Option<String>;

    /// Replace the content markup. Returns `false` if the container is missing.
    fn set_content_html(&mut self, html: &str) -> bool;

    /// Replace the preview markup. Returns `false` if the preview pane is missing.
    fn set_preview_html(&mut self, html: &str) -> bool;
}

/// In-memory surface; a `None` region behaves like a missing element
#[derive(Debug, Clone, Default)]
pub struct MemorySurface {
    pub content: Option<String>,
    pub preview: Option<String>,
}

impl MemorySurface {
    /// Surface with both regions present
    pub fn new(content: impl Into<String>) -> Self {
        Self {
            content: Some(content.into()),
            preview: Some(String::new()),
        }
    }

    /// Surface whose content container is missing
    pub fn without_content() -> Self {
        Self {
            content: None,
            preview: Some(String::new()),
        }
    }

    /// Surface whose preview pane is missing
    pub fn without_preview(content: impl Into<String>) -> Self {
        Self {
            content: Some(content.into()),
            preview: None,
        }
    }
}

impl DocumentSurface for MemorySurface {
    fn content_html(&self) -> Option<String> {
        self.content.clone()
    }

    fn set_content_html(&mut self, html: &str) -> bool {
        match self.content.as_mut() {
            Some(content) => {
                *content = html.to_string();
                true
            }
            None => false,
        }
    }

    fn set_preview_html(&mut self, html: &str) -> bool {
        match self.preview.as_mut() {
            Some(preview) => {
                *preview = html.to_string();
                true
            }
            None => false,
        }
    }
}
