//! `get` command

use crate::output::{print_json, OutputFormat};
use clap::Args;
use snippets_core::Lookup;
use snippets_engine::{apply_snippet_command, SnippetCommand, SnippetCommandResult, SnippetStore};

#[derive(Debug, Args)]
pub struct GetArgs {
    /// Snippet name
    pub name: String,
}

/// Print the snippet, or a not-found line; a miss still exits 0
pub fn execute(
    args: GetArgs,
    store: &SnippetStore,
    format: OutputFormat,
) -> Result<(), Box<dyn std::error::Error>> {
    let lookup = match apply_snippet_command(SnippetCommand::Get { name: args.name }, store)? {
        SnippetCommandResult::Get { lookup } => lookup,
        _ => return Err(super::unexpected("get")),
    };

    match format {
        OutputFormat::Json => print_json(&lookup)?,
        OutputFormat::Text => match &lookup {
            Lookup::Found(snippet) => println!("Retrieved snippet: \"{}\"", snippet.content),
            Lookup::NotFound { name } => println!("404: Snippet not found: \"{}\"", name),
        },
    }

    Ok(())
}
