//! Settings: loading and merging.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use super::commands::ExecutionContext;

/// Settings file name inside each settings directory.
pub const SETTINGS_FILE: &str = "settings.json";

/// Resolver and loader settings.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Settings {
    /// Extra command directories, loaded between the user-global and
    /// project-local tiers. Relative paths resolve against the working dir.
    #[serde(default)]
    pub command_dirs: Vec<PathBuf>,
    /// Capability tokens granted to the session. When absent every command
    /// is permitted.
    #[serde(default)]
    pub granted_permissions: Option<Vec<String>>,
    /// Execution mode label passed to permission checks.
    #[serde(default)]
    pub mode: Option<String>,
}

impl Settings {
    /// Overlay `other` on top of `self`.
    ///
    /// Scalars set in `other` win; command directories accumulate.
    pub fn merge(mut self, other: Settings) -> Settings {
        self.command_dirs.extend(other.command_dirs);
        if other.granted_permissions.is_some() {
            self.granted_permissions = other.granted_permissions;
        }
        if other.mode.is_some() {
            self.mode = other.mode;
        }
        self
    }

    /// Execution context described by these settings.
    pub fn execution_context(&self) -> ExecutionContext {
        let mut ctx = ExecutionContext::new();
        ctx.mode = self.mode.clone();
        if let Some(granted) = &self.granted_permissions {
            ctx = ctx.with_granted(granted.iter().cloned());
        }
        ctx
    }
}

/// Load settings from the two-tier hierarchy.
///
/// 1. `~/.config/slash/settings.json` (user-global)
/// 2. `{working_dir}/.slash/settings.json` (project-local)
///
/// Project-local values override user-global ones.
pub fn load_settings(working_dir: &Path) -> Settings {
    let mut settings = Settings::default();

    // 1. User-global
    if let Some(config_dir) = dirs::config_dir() {
        let user_config = config_dir.join("slash").join(SETTINGS_FILE);
        if let Some(user) = load_settings_file(&user_config) {
            settings = settings.merge(user);
        }
    }

    // 2. Project-local
    let project_config = working_dir.join(".slash").join(SETTINGS_FILE);
    if let Some(project) = load_settings_file(&project_config) {
        settings = settings.merge(project);
    }

    settings
}

fn load_settings_file(path: &Path) -> Option<Settings> {
    let content = std::fs::read_to_string(path).ok()?;
    serde_json::from_str(&content)
        .map_err(|e| {
            tracing::warn!("Failed to parse settings {}: {}", path.display(), e);
            e
        })
        .ok()
}
