//! Subcommand handlers for the `slash` binary, plus the session they share.

pub mod list;
pub mod load;
pub mod parse;
pub mod show;

use std::path::{Path, PathBuf};

use serde::Serialize;

use crate::internal::{
    commands::{CommandResolver, DefinitionLoader, GrantedTokens, load_command_tiers},
    config::load_settings,
};

/// Everything a subcommand needs: the resolver built from the built-ins plus
/// every loaded tier, and the loader that remembers where each came from.
pub struct Session {
    pub working_dir: PathBuf,
    pub resolver: CommandResolver,
    pub loader: DefinitionLoader,
}

impl Session {
    /// Load settings and command tiers for `working_dir`.
    pub async fn open(working_dir: &Path) -> Session {
        let settings = load_settings(working_dir);

        let mut loader = DefinitionLoader::new();
        let reports = load_command_tiers(&mut loader, working_dir, &settings.command_dirs).await;
        for (dir, report) in &reports {
            tracing::debug!(
                path = %dir.display(),
                examined = report.examined,
                registered = report.registered(),
                "loaded command tier"
            );
        }

        let mut resolver = CommandResolver::new();
        if settings.granted_permissions.is_some() {
            resolver = resolver.with_permission_check(GrantedTokens);
        }
        resolver.set_context(settings.execution_context());
        resolver.register_all(loader.definitions());

        Session {
            working_dir: working_dir.to_path_buf(),
            resolver,
            loader,
        }
    }
}

/// Print `value` as pretty JSON on stdout.
pub(crate) fn print_json<T: Serialize>(value: &T) -> anyhow::Result<()> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}
