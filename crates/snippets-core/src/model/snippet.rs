use serde::{Deserialize, Serialize};
use snippets_core_types::Sensitive;

use crate::errors::SnippetError;

/// Snippet - a named text blob with an independent visibility flag
///
/// `name` is the unique key. `hidden` excludes the snippet from catalog and
/// search results but never from a direct lookup by name.
#[derive(Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Snippet {
    /// Unique, caller-chosen key
    pub name: String,

    /// Stored body (may be empty)
    pub content: String,

    /// Excluded from catalog/search when true
    #[serde(default)]
    pub hidden: bool,
}

impl Snippet {
    /// Create a visible snippet
    pub fn new(name: impl Into<String>, content: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            content: content.into(),
            hidden: false,
        }
    }

    /// Builder-style visibility override
    pub fn with_hidden(mut self, hidden: bool) -> Self {
        self.hidden = hidden;
        self
    }

    /// Whether the snippet shows up in catalog/search
    pub fn is_visible(&self) -> bool {
        !self.hidden
    }
}

// Content is caller data; keep it out of Debug output (and therefore out of logs).
impl std::fmt::Debug for Snippet {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Snippet")
            .field("name", &self.name)
            .field("content", &Sensitive::new(&self.content))
            .field("hidden", &self.hidden)
            .finish()
    }
}

/// Validate a snippet name
///
/// A name must be non-empty, must not be whitespace-only, and must not
/// contain control characters.
pub fn validate_name(name: &str) -> Result<(), SnippetError> {
    if name.is_empty() {
        return Err(SnippetError::EmptyName);
    }

    if name.trim().is_empty() {
        return Err(SnippetError::BlankName);
    }

    if let Some((position, _)) = name.char_indices().find(|(_, c)| c.is_control()) {
        return Err(SnippetError::NameHasControlChars { position });
    }

    Ok(())
}
