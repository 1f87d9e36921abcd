//! Resolves one line of input against the session's commands and prints the outcome.

use std::process::ExitCode;

use clap::Parser;
use colored::Colorize;

use super::{Session, print_json};
use crate::internal::commands::ParsedInput;

#[derive(Parser, Debug)]
pub struct ParseArgs {
    /// The input line, e.g. `/plan add auth`. Multiple words are joined with spaces.
    #[arg(required = true, num_args = 1..)]
    pub input: Vec<String>,
}

pub fn execute(args: ParseArgs, session: &Session, json: bool) -> anyhow::Result<ExitCode> {
    let input = args.input.join(" ");
    let parsed = session.resolver.parse(&input);

    if json {
        print_json(&parsed)?;
    } else {
        match &parsed {
            ParsedInput::Resolved(resolved) => {
                println!("{} {}", "command:".green(), resolved.command.name.bold());
                if resolved.args.is_empty() {
                    println!("{} (none)", "args:".green());
                } else {
                    println!("{} {}", "args:".green(), resolved.args.join(" "));
                }
                if let Some(location) = session.loader.get_source_location(&resolved.command.name)
                {
                    println!("{} {}", "source:".green(), location);
                }
            }
            ParsedInput::Rejected(rejection) => {
                eprintln!("{} {}", "error:".red().bold(), rejection.message);
                eprintln!("{} {}", "hint:".yellow(), rejection.suggestion);
            }
        }
    }

    Ok(if parsed.is_resolved() {
        ExitCode::SUCCESS
    } else {
        ExitCode::FAILURE
    })
}
