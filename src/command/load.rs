//! Batch-loads a single directory of command documents and reports the result.

use std::path::PathBuf;

use anyhow::Context;
use clap::Parser;
use colored::Colorize;

use super::{Session, print_json};
use crate::internal::commands::{DefinitionLoader, loader::LoadReportView};

#[derive(Parser, Debug)]
pub struct LoadArgs {
    /// Directory containing `.md` command documents
    pub path: PathBuf,
}

pub async fn execute(args: LoadArgs, session: &Session, json: bool) -> anyhow::Result<()> {
    let path = if args.path.is_absolute() {
        args.path
    } else {
        session.working_dir.join(args.path)
    };

    let mut loader = DefinitionLoader::new();
    let report = loader
        .load_from_directory(&path)
        .await
        .with_context(|| format!("failed to load commands from {}", path.display()))?;

    if json {
        return print_json(&LoadReportView::from(&report));
    }

    for outcome in &report.outcomes {
        match &outcome.result {
            Ok(name) => println!("{} /{} ({})", "loaded".green(), name, outcome.file),
            Err(e) => println!("{} {}: {}", "skipped".yellow(), outcome.file, e),
        }
    }
    println!(
        "examined {} entries, registered {} commands",
        report.examined,
        report.registered()
    );
    Ok(())
}
