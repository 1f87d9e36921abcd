//! Loads command documents into a registry of definitions.
//!
//! Definitions are loaded from a tiered set of directories, later tiers
//! overriding earlier ones by name:
//! 1. `~/.config/slash/commands/*.md` (user-global)
//! 2. Extra directories from settings
//! 3. `{working_dir}/.slash/commands/*.md` (project-local)

use std::collections::HashMap;
use std::path::{Path, PathBuf};
use std::sync::Arc;

use serde::Serialize;

use super::{
    definition::{CommandDefinition, CommandSummary, compare_names, normalize_key},
    document::parse_document,
    error::{DefinitionError, DefinitionResult},
    source::{DefinitionSource, LocalSource},
};

/// File suffix that marks a directory entry as a command document.
pub const DOCUMENT_SUFFIX: &str = ".md";

/// Outcome of loading one document during a directory load.
#[derive(Debug)]
pub struct LoadOutcome {
    /// Directory entry name, e.g. "plan.md".
    pub file: String,
    /// Registered command name, or why the document was skipped.
    pub result: DefinitionResult<String>,
}

/// Summary of a [`DefinitionLoader::load_from_directory`] call.
#[derive(Debug, Default)]
pub struct LoadReport {
    /// Every entry in the directory, documents or not.
    pub examined: usize,
    /// One outcome per document entry, in directory order.
    pub outcomes: Vec<LoadOutcome>,
}

impl LoadReport {
    /// Number of documents that registered successfully.
    pub fn registered(&self) -> usize {
        self.outcomes.iter().filter(|o| o.result.is_ok()).count()
    }

    /// Outcomes that failed.
    pub fn failures(&self) -> impl Iterator<Item = &LoadOutcome> {
        self.outcomes.iter().filter(|o| o.result.is_err())
    }
}

/// Serializable view of a [`LoadReport`].
#[derive(Debug, Serialize)]
pub struct LoadReportView {
    pub examined: usize,
    pub registered: usize,
    pub failures: Vec<LoadFailureView>,
}

#[derive(Debug, Serialize)]
pub struct LoadFailureView {
    pub file: String,
    pub kind: &'static str,
    pub error: String,
}

impl From<&LoadReport> for LoadReportView {
    fn from(report: &LoadReport) -> Self {
        Self {
            examined: report.examined,
            registered: report.registered(),
            failures: report
                .failures()
                .filter_map(|o| {
                    o.result.as_ref().err().map(|e| LoadFailureView {
                        file: o.file.clone(),
                        kind: e.kind(),
                        error: e.to_string(),
                    })
                })
                .collect(),
        }
    }
}

/// Registry of definitions loaded from documents, with their sources.
///
/// Independent of [`CommandResolver`](super::resolver::CommandResolver); feed
/// [`definitions`](Self::definitions) into a resolver to make them invocable.
pub struct DefinitionLoader {
    source: Arc<dyn DefinitionSource>,
    commands: HashMap<String, Arc<CommandDefinition>>,
    locations: HashMap<String, String>,
}

impl Default for DefinitionLoader {
    fn default() -> Self {
        Self::new()
    }
}

impl DefinitionLoader {
    /// Create a loader reading from the local file system.
    pub fn new() -> Self {
        Self::with_source(Arc::new(LocalSource))
    }

    /// Create a loader reading from the given source.
    pub fn with_source(source: Arc<dyn DefinitionSource>) -> Self {
        Self {
            source,
            commands: HashMap::new(),
            locations: HashMap::new(),
        }
    }

    /// Parse `content` and store the definition, remembering `identifier` as
    /// its source location. State is untouched on failure.
    pub fn register_from_source(
        &mut self,
        identifier: impl Into<String>,
        content: &str,
        fallback_name: &str,
    ) -> DefinitionResult<Arc<CommandDefinition>> {
        let identifier = identifier.into();
        let definition = Arc::new(parse_document(content, fallback_name)?);
        let key = definition.key();

        tracing::info!(command = %definition.name, source = %identifier, "registered command");
        self.commands.insert(key.clone(), Arc::clone(&definition));
        self.locations.insert(key, identifier);
        Ok(definition)
    }

    /// Read a document through the source and register it.
    pub async fn register_from_file(
        &mut self,
        path: &Path,
        fallback_name: &str,
    ) -> DefinitionResult<Arc<CommandDefinition>> {
        let identifier = path.display().to_string();
        let content = self
            .source
            .read_text_file(path)
            .await
            .map_err(|source| DefinitionError::SourceUnavailable {
                identifier: identifier.clone(),
                source,
            })?;
        self.register_from_source(identifier, &content, fallback_name)
    }

    /// Register every `.md` document in `dir`, sequentially.
    ///
    /// Only a failure to list the directory fails the call. A document that
    /// cannot be read or parsed is logged and recorded in the report.
    pub async fn load_from_directory(&mut self, dir: &Path) -> DefinitionResult<LoadReport> {
        let entries = self
            .source
            .list_directory(dir)
            .await
            .map_err(|source| DefinitionError::DirectoryUnavailable {
                path: dir.to_path_buf(),
                source,
            })?;

        let mut report = LoadReport {
            examined: entries.len(),
            outcomes: Vec::new(),
        };

        for entry in entries {
            let Some(stem) = entry.strip_suffix(DOCUMENT_SUFFIX) else {
                continue;
            };
            let path = dir.join(&entry);
            let result = self
                .register_from_file(&path, stem)
                .await
                .map(|def| def.name.clone());
            if let Err(e) = &result {
                tracing::warn!(path = %path.display(), error = %e, "failed to load command definition");
            }
            report.outcomes.push(LoadOutcome {
                file: entry,
                result,
            });
        }

        Ok(report)
    }

    /// Get a loaded definition by name.
    pub fn get_command(&self, name: &str) -> Option<Arc<CommandDefinition>> {
        self.commands.get(&normalize_key(name)).cloned()
    }

    /// Where the named definition was loaded from.
    pub fn get_source_location(&self, name: &str) -> Option<&str> {
        self.locations.get(&normalize_key(name)).map(String::as_str)
    }

    /// Summaries of all loaded definitions, ordered by name.
    pub fn all_commands(&self) -> Vec<CommandSummary> {
        let mut summaries: Vec<CommandSummary> = self
            .commands
            .values()
            .map(|def| CommandSummary {
                name: def.name.clone(),
                aliases: def.aliases.clone(),
                description: def.description.clone(),
                category: def.category.clone(),
                permissions: def.permissions.clone(),
                alignment_tags: def.alignment_tags.clone(),
                implementation_tags: def.implementation_tags.clone(),
            })
            .collect();
        summaries.sort_by(|a, b| compare_names(&a.name, &b.name));
        summaries
    }

    /// Loaded definitions ordered by name.
    pub fn definitions(&self) -> Vec<Arc<CommandDefinition>> {
        let mut defs: Vec<Arc<CommandDefinition>> = self.commands.values().cloned().collect();
        defs.sort_by(|a, b| compare_names(&a.name, &b.name));
        defs
    }

    pub fn len(&self) -> usize {
        self.commands.len()
    }

    pub fn is_empty(&self) -> bool {
        self.commands.is_empty()
    }
}

/// Project-local command directory for a working directory.
pub fn project_commands_dir(working_dir: &Path) -> PathBuf {
    working_dir.join(".slash").join("commands")
}

/// User-global command directory, if the platform has a config directory.
pub fn user_commands_dir() -> Option<PathBuf> {
    dirs::config_dir().map(|dir| dir.join("slash").join("commands"))
}

/// Load every command tier into `loader`, lowest precedence first.
///
/// Missing tiers are skipped. Returns one report per tier that could be
/// listed.
pub async fn load_command_tiers(
    loader: &mut DefinitionLoader,
    working_dir: &Path,
    extra_dirs: &[PathBuf],
) -> Vec<(PathBuf, LoadReport)> {
    let user_dir = user_commands_dir();
    load_command_tiers_from(loader, user_dir.as_deref(), working_dir, extra_dirs).await
}

/// [`load_command_tiers`] with an explicit user-global directory.
///
/// Tier order: `user_dir`, then `extra_dirs` (relative ones resolved against
/// `working_dir`), then the project-local directory.
pub async fn load_command_tiers_from(
    loader: &mut DefinitionLoader,
    user_dir: Option<&Path>,
    working_dir: &Path,
    extra_dirs: &[PathBuf],
) -> Vec<(PathBuf, LoadReport)> {
    let mut tiers: Vec<PathBuf> = user_dir.map(Path::to_path_buf).into_iter().collect();
    tiers.extend(extra_dirs.iter().map(|dir| {
        if dir.is_absolute() {
            dir.clone()
        } else {
            working_dir.join(dir)
        }
    }));
    tiers.push(project_commands_dir(working_dir));

    let mut reports = Vec::new();
    for dir in tiers {
        match loader.load_from_directory(&dir).await {
            Ok(report) => reports.push((dir, report)),
            Err(e) => tracing::debug!(path = %dir.display(), error = %e, "skipping command tier"),
        }
    }
    reports
}
