//! Error types for command definition loading.

use std::path::PathBuf;
use thiserror::Error;

/// Errors that can occur while loading command definitions.
#[derive(Debug, Error)]
pub enum DefinitionError {
    /// Neither the metadata block nor the caller supplied a command name.
    #[error("No command name found in metadata")]
    MissingName,

    /// A list-valued metadata field was not a valid list literal.
    ///
    /// Recovered internally by the permissive comma-split parser; never
    /// surfaced from [`parse_document`](super::document::parse_document).
    #[error("Malformed list literal: {0}")]
    MalformedList(String),

    /// A single definition source could not be read.
    #[error("Failed to read command source {identifier}: {source}")]
    SourceUnavailable {
        identifier: String,
        #[source]
        source: std::io::Error,
    },

    /// A definition directory could not be enumerated.
    #[error("Failed to list command directory {}: {source}", path.display())]
    DirectoryUnavailable {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

impl DefinitionError {
    /// Short stable label for the error kind, used in machine-readable output.
    pub fn kind(&self) -> &'static str {
        match self {
            Self::MissingName => "missing_name",
            Self::MalformedList(_) => "malformed_list",
            Self::SourceUnavailable { .. } => "source_unavailable",
            Self::DirectoryUnavailable { .. } => "directory_unavailable",
        }
    }
}

/// Result type for definition loading operations.
pub type DefinitionResult<T> = Result<T, DefinitionError>;
