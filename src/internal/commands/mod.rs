//! Slash command system.
//!
//! Commands are `/name arguments` lines resolved against a registry of
//! definitions. The registry is seeded with a fixed built-in vocabulary and
//! can be extended with definitions loaded from markdown documents whose
//! metadata block names the command, its aliases, category and required
//! permissions.
//!
//! - [`CommandResolver`] owns the name and alias tables and parses input.
//! - [`DefinitionLoader`] parses documents and tracks where each came from.

pub mod builtin;
pub mod definition;
pub mod document;
pub mod error;
pub mod loader;
pub mod permission;
pub mod resolver;
pub mod source;

pub use definition::{CommandDefinition, CommandSummary};
pub use document::parse_document;
pub use error::{DefinitionError, DefinitionResult};
pub use loader::{
    DefinitionLoader, LoadOutcome, LoadReport, load_command_tiers, load_command_tiers_from,
};
pub use permission::{AllowAll, ExecutionContext, GrantedTokens, PermissionCheck};
pub use resolver::{CommandResolver, ParsedInput, Rejection, RejectionKind, ResolvedCommand};
pub use source::{DefinitionSource, LocalSource};
