//! `search` command

use crate::output::{print_json, OutputFormat};
use clap::Args;
use snippets_engine::{apply_snippet_command, SnippetCommand, SnippetCommandResult, SnippetStore};

#[derive(Debug, Args)]
pub struct SearchArgs {
    /// Substring to look for (case-sensitive; empty matches everything)
    pub target: String,
}

pub fn execute(
    args: SearchArgs,
    store: &SnippetStore,
    format: OutputFormat,
) -> Result<(), Box<dyn std::error::Error>> {
    let cmd = SnippetCommand::Search {
        target: args.target,
    };

    let hits = match apply_snippet_command(cmd, store)? {
        SnippetCommandResult::Search { hits } => hits,
        _ => return Err(super::unexpected("search")),
    };

    match format {
        OutputFormat::Json => print_json(&hits)?,
        OutputFormat::Text => {
            for hit in &hits {
                println!("{}: \"{}\"", hit.name, hit.content);
            }
        }
    }

    Ok(())
}
