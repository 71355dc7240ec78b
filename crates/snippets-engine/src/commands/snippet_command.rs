//! Snippet commands: one plain value per store operation.

#![allow(clippy::result_large_err)]

use crate::store::{SnippetStore, VisibilityChange};
use serde::Serialize;
use snippets_core::{Lookup, SearchHit, Snippet};
use snippets_store::errors::Result;

/// A request against the snippet store
#[derive(Clone, PartialEq, Eq)]
pub enum SnippetCommand {
    /// Store `content` under `name`, replacing any existing snippet.
    Put {
        name: String,
        content: String,
        hidden: bool,
    },
    /// Look up a snippet by exact name.
    Get { name: String },
    /// List visible snippet names.
    Catalog,
    /// Find visible snippets whose content contains `target`.
    Search { target: String },
    /// Set the hidden flag for `name`.
    Hide { name: String, hidden: bool },
}

impl SnippetCommand {
    /// Operation name, as used in log events
    pub fn op(&self) -> &'static str {
        match self {
            SnippetCommand::Put { .. } => "put",
            SnippetCommand::Get { .. } => "get",
            SnippetCommand::Catalog => "catalog",
            SnippetCommand::Search { .. } => "search",
            SnippetCommand::Hide { .. } => "hide",
        }
    }
}

// Content and search targets stay out of Debug output.
impl std::fmt::Debug for SnippetCommand {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            SnippetCommand::Put {
                name,
                content,
                hidden,
            } => f
                .debug_struct("Put")
                .field("name", name)
                .field("content_len", &content.len())
                .field("hidden", hidden)
                .finish(),
            SnippetCommand::Get { name } => f.debug_struct("Get").field("name", name).finish(),
            SnippetCommand::Catalog => f.write_str("Catalog"),
            SnippetCommand::Search { target } => f
                .debug_struct("Search")
                .field("target_len", &target.len())
                .finish(),
            SnippetCommand::Hide { name, hidden } => f
                .debug_struct("Hide")
                .field("name", name)
                .field("hidden", hidden)
                .finish(),
        }
    }
}

/// Result of applying a snippet command
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "command", rename_all = "snake_case")]
pub enum SnippetCommandResult {
    Put { snippet: Snippet },
    Get { lookup: Lookup },
    Catalog { names: Vec<String> },
    Search { hits: Vec<SearchHit> },
    Hide { change: VisibilityChange },
}

/// Apply a snippet command to the store
pub fn apply_snippet_command(
    cmd: SnippetCommand,
    store: &SnippetStore,
) -> Result<SnippetCommandResult> {
    match cmd {
        SnippetCommand::Put {
            name,
            content,
            hidden,
        } => {
            let snippet = store.put(&name, &content, hidden)?;
            Ok(SnippetCommandResult::Put { snippet })
        }
        SnippetCommand::Get { name } => {
            let lookup = store.get(&name)?;
            Ok(SnippetCommandResult::Get { lookup })
        }
        SnippetCommand::Catalog => {
            let names = store.catalog()?;
            Ok(SnippetCommandResult::Catalog { names })
        }
        SnippetCommand::Search { target } => {
            let hits = store.search(&target)?;
            Ok(SnippetCommandResult::Search { hits })
        }
        SnippetCommand::Hide { name, hidden } => {
            let change = store.hide(&name, hidden)?;
            Ok(SnippetCommandResult::Hide { change })
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_debug_never_prints_content_or_target() {
        let put = SnippetCommand::Put {
            name: "n".to_string(),
            content: "top secret".to_string(),
            hidden: false,
        };
        let search = SnippetCommand::Search {
            target: "secret".to_string(),
        };
        assert!(!format!("{:?}", put).contains("top secret"));
        assert!(!format!("{:?}", search).contains("secret"));
    }

    #[test]
    fn test_op_names() {
        assert_eq!(SnippetCommand::Catalog.op(), "catalog");
        assert_eq!(
            SnippetCommand::Hide {
                name: "a".into(),
                hidden: true
            }
            .op(),
            "hide"
        );
    }

    #[test]
    fn test_dispatch_round() {
        let store = SnippetStore::open_in_memory().unwrap();

        let put = apply_snippet_command(
            SnippetCommand::Put {
                name: "a".into(),
                content: "x".into(),
                hidden: false,
            },
            &store,
        )
        .unwrap();
        assert_eq!(
            put,
            SnippetCommandResult::Put {
                snippet: Snippet::new("a", "x")
            }
        );

        let got = apply_snippet_command(SnippetCommand::Get { name: "a".into() }, &store).unwrap();
        assert_eq!(
            got,
            SnippetCommandResult::Get {
                lookup: Lookup::Found(Snippet::new("a", "x"))
            }
        );

        let hidden = apply_snippet_command(
            SnippetCommand::Hide {
                name: "a".into(),
                hidden: true,
            },
            &store,
        )
        .unwrap();
        assert_eq!(
            hidden,
            SnippetCommandResult::Hide {
                change: VisibilityChange {
                    name: "a".into(),
                    hidden: true
                }
            }
        );

        let catalog = apply_snippet_command(SnippetCommand::Catalog, &store).unwrap();
        assert_eq!(catalog, SnippetCommandResult::Catalog { names: vec![] });
    }
}
