//! Query result shapes

use serde::Serialize;
use snippets_core_types::Sensitive;

use super::Snippet;

/// Outcome of a lookup by exact name
///
/// `NotFound` is an ordinary result, not an error.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum Lookup {
    Found(Snippet),
    NotFound { name: String },
}

impl Lookup {
    /// Content of the found snippet, if any
    pub fn content(&self) -> Option<&str> {
        match self {
            Lookup::Found(snippet) => Some(&snippet.content),
            Lookup::NotFound { .. } => None,
        }
    }

    pub fn is_found(&self) -> bool {
        matches!(self, Lookup::Found(_))
    }

    /// Convert into an `Option`, dropping the looked-up name on a miss
    pub fn into_snippet(self) -> Option<Snippet> {
        match self {
            Lookup::Found(snippet) => Some(snippet),
            Lookup::NotFound { .. } => None,
        }
    }
}

/// A single search match
#[derive(Clone, PartialEq, Eq, Serialize)]
pub struct SearchHit {
    pub name: String,
    pub content: String,
}

impl SearchHit {
    pub fn new(name: impl Into<String>, content: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            content: content.into(),
        }
    }
}

impl std::fmt::Debug for SearchHit {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SearchHit")
            .field("name", &self.name)
            .field("content", &Sensitive::new(&self.content))
            .finish()
    }
}
