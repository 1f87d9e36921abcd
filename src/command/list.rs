//! Lists every invocable command sorted by name.

use clap::Parser;
use colored::Colorize;

use super::{Session, print_json};

#[derive(Parser, Debug)]
pub struct ListArgs {
    /// Only show commands in this category
    #[arg(short, long)]
    pub category: Option<String>,
}

pub fn execute(args: ListArgs, session: &Session, json: bool) -> anyhow::Result<()> {
    let commands: Vec<_> = session
        .resolver
        .get_available_commands()
        .into_iter()
        .filter(|c| args.category.as_deref().is_none_or(|cat| c.category == cat))
        .collect();

    if json {
        return print_json(&commands);
    }

    for cmd in &commands {
        let aliases = if cmd.aliases.is_empty() {
            String::new()
        } else {
            format!(" ({})", cmd.aliases.join(", "))
        };
        println!(
            "/{}{}  {}",
            cmd.name.bold(),
            aliases.dimmed(),
            format!("[{}]", cmd.category).cyan()
        );
        if !cmd.description.is_empty() {
            println!("    {}", cmd.description);
        }
    }
    Ok(())
}
