//! `put` command

use crate::output::{print_json, OutputFormat};
use clap::Args;
use snippets_engine::{apply_snippet_command, SnippetCommand, SnippetCommandResult, SnippetStore};

#[derive(Debug, Args)]
pub struct PutArgs {
    /// Snippet name
    pub name: String,

    /// Snippet text
    pub snippet: String,

    /// Store the snippet hidden from catalog and search
    #[arg(long)]
    pub hide: bool,
}

pub fn execute(
    args: PutArgs,
    store: &SnippetStore,
    format: OutputFormat,
) -> Result<(), Box<dyn std::error::Error>> {
    let cmd = SnippetCommand::Put {
        name: args.name,
        content: args.snippet,
        hidden: args.hide,
    };

    let snippet = match apply_snippet_command(cmd, store)? {
        SnippetCommandResult::Put { snippet } => snippet,
        _ => return Err(super::unexpected("put")),
    };

    match format {
        OutputFormat::Json => print_json(&snippet)?,
        OutputFormat::Text => println!(
            "Stored \"{}\" as \"{}\" (hidden: {})",
            snippet.content, snippet.name, snippet.hidden
        ),
    }

    Ok(())
}
