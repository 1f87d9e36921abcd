//! CLI entry for the `slash` binary, defining clap subcommands, opening a
//! command session for the working directory, and dispatching each handler.

use std::path::PathBuf;
use std::process::ExitCode;

use anyhow::Context;
use clap::{Parser, Subcommand};

use crate::command::{self, Session};

#[derive(Parser, Debug)]
#[command(
    name = "slash",
    about = "Resolve slash commands and inspect command definitions",
    version
)]
struct Cli {
    /// Working directory used to find `.slash/` settings and commands
    #[arg(long, global = true)]
    dir: Option<PathBuf>,

    /// Print machine-readable JSON
    #[arg(long, global = true)]
    json: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    #[command(about = "Resolve an input line such as `/plan add auth`")]
    Parse(command::parse::ParseArgs),
    #[command(about = "List available commands")]
    List(command::list::ListArgs),
    #[command(about = "Show a command by name or alias")]
    Show(command::show::ShowArgs),
    #[command(about = "Load a directory of command documents and report the result")]
    Load(command::load::LoadArgs),
}

/// Parse the command line and run the selected subcommand.
/// - `args`: parse from command line if it's `None`, otherwise parse from the given args
#[tokio::main]
pub async fn parse(args: Option<&[&str]>) -> anyhow::Result<ExitCode> {
    parse_async(args).await
}

/// `async` version of the [parse] function
pub async fn parse_async(args: Option<&[&str]>) -> anyhow::Result<ExitCode> {
    let cli = match args {
        Some(args) => Cli::try_parse_from(args)?,
        None => Cli::parse(),
    };

    let working_dir = match cli.dir {
        Some(dir) => dir,
        None => std::env::current_dir().context("failed to resolve current directory")?,
    };
    let session = Session::open(&working_dir).await;

    match cli.command {
        Commands::Parse(args) => command::parse::execute(args, &session, cli.json),
        Commands::List(args) => {
            command::list::execute(args, &session, cli.json).map(|_| ExitCode::SUCCESS)
        }
        Commands::Show(args) => {
            command::show::execute(args, &session, cli.json).map(|_| ExitCode::SUCCESS)
        }
        Commands::Load(args) => command::load::execute(args, &session, cli.json)
            .await
            .map(|_| ExitCode::SUCCESS),
    }
}

/// this test is to verify that the CLI can be built without panicking
#[test]
fn verify_cli() {
    use clap::CommandFactory;

    Cli::command().debug_assert()
}
