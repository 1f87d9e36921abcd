//! Shows one command definition looked up by name or alias.

use clap::Parser;
use colored::Colorize;
use serde::Serialize;

use super::{Session, print_json};
use crate::internal::commands::CommandDefinition;

#[derive(Parser, Debug)]
pub struct ShowArgs {
    /// Command name or alias
    pub key: String,
}

/// JSON shape of `show`. Aliases come from the resolver's alias table, so a
/// reassigned alias is listed under its current owner only.
#[derive(Serialize)]
struct ShowView<'a> {
    name: &'a str,
    aliases: &'a [String],
    description: &'a str,
    category: &'a str,
    permissions: &'a [String],
    alignment_tags: &'a [String],
    implementation_tags: &'a [String],
    #[serde(skip_serializing_if = "Option::is_none")]
    body: Option<&'a str>,
    source: Option<&'a str>,
}

impl<'a> ShowView<'a> {
    fn new(
        definition: &'a CommandDefinition,
        aliases: &'a [String],
        source: Option<&'a str>,
    ) -> Self {
        Self {
            name: &definition.name,
            aliases,
            description: &definition.description,
            category: &definition.category,
            permissions: &definition.permissions,
            alignment_tags: &definition.alignment_tags,
            implementation_tags: &definition.implementation_tags,
            body: definition.body.as_deref(),
            source,
        }
    }
}

pub fn execute(args: ShowArgs, session: &Session, json: bool) -> anyhow::Result<()> {
    let Some(definition) = session.resolver.get_command(&args.key) else {
        anyhow::bail!("unknown command: {}", args.key);
    };
    let source = session.loader.get_source_location(&definition.name);
    let aliases = session.resolver.aliases_for(&definition.name);

    if json {
        return print_json(&ShowView::new(&definition, &aliases, source));
    }

    println!("{} {}", "name:".green(), definition.name.bold());
    if !aliases.is_empty() {
        println!("{} {}", "aliases:".green(), aliases.join(", "));
    }
    if !definition.description.is_empty() {
        println!("{} {}", "description:".green(), definition.description);
    }
    println!("{} {}", "category:".green(), definition.category);
    if !definition.permissions.is_empty() {
        println!("{} {}", "permissions:".green(), definition.permissions.join(", "));
    }
    if !definition.alignment_tags.is_empty() {
        println!("{} {}", "alignment:".green(), definition.alignment_tags.join(", "));
    }
    if !definition.implementation_tags.is_empty() {
        println!(
            "{} {}",
            "implementation:".green(),
            definition.implementation_tags.join(", ")
        );
    }
    match source {
        Some(location) => println!("{} {}", "source:".green(), location),
        None => println!("{} built-in", "source:".green()),
    }
    if let Some(body) = definition.body.as_deref().filter(|b| !b.is_empty()) {
        println!();
        println!("{body}");
    }
    Ok(())
}
