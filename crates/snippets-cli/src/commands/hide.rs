//! `hide` command

use crate::output::{print_json, OutputFormat};
use clap::Args;
use snippets_engine::{apply_snippet_command, SnippetCommand, SnippetCommandResult, SnippetStore};

#[derive(Debug, Args)]
pub struct HideArgs {
    /// Snippet name
    pub name: String,

    /// `True` to hide, `False` to reveal (case-insensitive)
    #[arg(required = true, value_parser = parse_flag, action = clap::ArgAction::Set)]
    pub flag: bool,
}

/// Parse a `True`/`False` flag, ignoring case
fn parse_flag(raw: &str) -> Result<bool, String> {
    if raw.eq_ignore_ascii_case("true") {
        Ok(true)
    } else if raw.eq_ignore_ascii_case("false") {
        Ok(false)
    } else {
        Err(format!("expected True or False, got '{}'", raw))
    }
}

pub fn execute(
    args: HideArgs,
    store: &SnippetStore,
    format: OutputFormat,
) -> Result<(), Box<dyn std::error::Error>> {
    let cmd = SnippetCommand::Hide {
        name: args.name,
        hidden: args.flag,
    };

    let change = match apply_snippet_command(cmd, store)? {
        SnippetCommandResult::Hide { change } => change,
        _ => return Err(super::unexpected("hide")),
    };

    match format {
        OutputFormat::Json => print_json(&change)?,
        OutputFormat::Text => println!(
            "Set hidden={} for \"{}\"",
            if change.hidden { "True" } else { "False" },
            change.name
        ),
    }

    Ok(())
}
