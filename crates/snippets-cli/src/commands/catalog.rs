//! `catalog` command

use crate::output::{print_json, OutputFormat};
use clap::Args;
use snippets_engine::{apply_snippet_command, SnippetCommand, SnippetCommandResult, SnippetStore};

#[derive(Debug, Args)]
pub struct CatalogArgs {}

pub fn execute(
    _args: CatalogArgs,
    store: &SnippetStore,
    format: OutputFormat,
) -> Result<(), Box<dyn std::error::Error>> {
    let names = match apply_snippet_command(SnippetCommand::Catalog, store)? {
        SnippetCommandResult::Catalog { names } => names,
        _ => return Err(super::unexpected("catalog")),
    };

    match format {
        OutputFormat::Json => print_json(&names)?,
        OutputFormat::Text => {
            for name in &names {
                println!("{}", name);
            }
        }
    }

    Ok(())
}
