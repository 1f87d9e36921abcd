//! Slash command resolver: turns `/command arg arg` input into a definition
//! plus an argument list.

use std::collections::HashMap;
use std::sync::Arc;

use indexmap::IndexMap;
use serde::Serialize;

use super::{
    builtin::builtin_commands,
    definition::{CommandDefinition, CommandSummary, compare_names, normalize_key},
    permission::{AllowAll, ExecutionContext, PermissionCheck},
};

/// Character that marks a line of input as a command invocation.
pub const TRIGGER: char = '/';

const HELP_SUGGESTION: &str = "Type /help to see available commands";
const PERMISSION_SUGGESTION: &str = "Check command permissions and try again";

/// Why an input line was not accepted as a command.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum RejectionKind {
    /// The input does not start with the trigger character.
    NotACommand,
    /// No name or alias matches the command key.
    UnknownCommand,
    /// The permission capability refused the invocation.
    PermissionDenied,
}

/// A successfully resolved invocation.
#[derive(Debug, Clone, Serialize)]
pub struct ResolvedCommand {
    pub command: Arc<CommandDefinition>,
    pub args: Vec<String>,
    /// The raw input, verbatim.
    pub original_input: String,
}

/// A rejected invocation with a user-facing message and next step.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Rejection {
    pub kind: RejectionKind,
    pub message: String,
    pub suggestion: String,
}

/// Outcome of [`CommandResolver::parse`].
#[derive(Debug, Clone, Serialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum ParsedInput {
    Resolved(ResolvedCommand),
    Rejected(Rejection),
}

impl ParsedInput {
    fn rejected(kind: RejectionKind, message: String, suggestion: &str) -> Self {
        Self::Rejected(Rejection {
            kind,
            message,
            suggestion: suggestion.to_string(),
        })
    }

    pub fn is_resolved(&self) -> bool {
        matches!(self, Self::Resolved(_))
    }

    pub fn resolved(&self) -> Option<&ResolvedCommand> {
        match self {
            Self::Resolved(resolved) => Some(resolved),
            Self::Rejected(_) => None,
        }
    }

    pub fn rejection(&self) -> Option<&Rejection> {
        match self {
            Self::Resolved(_) => None,
            Self::Rejected(rejection) => Some(rejection),
        }
    }
}

/// Registry of command definitions with alias resolution.
///
/// Names and aliases live in separate tables. Registering a name overwrites
/// the previous definition; each alias is claimed by the most recent
/// registration that lists it. Aliases a new registration does not list are
/// left pointing at whatever name owned them before.
///
/// The alias table keeps first-insertion order; reassigning an alias moves
/// its owner but not its position.
pub struct CommandResolver {
    names: HashMap<String, Arc<CommandDefinition>>,
    aliases: IndexMap<String, String>,
    permission: Box<dyn PermissionCheck>,
    context: ExecutionContext,
}

impl Default for CommandResolver {
    fn default() -> Self {
        Self::new()
    }
}

impl CommandResolver {
    /// Create a resolver seeded with the built-in commands.
    pub fn new() -> Self {
        let mut resolver = Self::empty();
        for command in builtin_commands() {
            resolver.register(command);
        }
        resolver
    }

    /// Create a resolver with no commands registered.
    pub fn empty() -> Self {
        Self {
            names: HashMap::new(),
            aliases: IndexMap::new(),
            permission: Box::new(AllowAll),
            context: ExecutionContext::default(),
        }
    }

    /// Replace the permission capability consulted by [`parse`](Self::parse).
    pub fn with_permission_check(mut self, check: impl PermissionCheck + 'static) -> Self {
        self.permission = Box::new(check);
        self
    }

    /// Replace the execution context passed to the permission capability.
    pub fn set_context(&mut self, context: ExecutionContext) {
        self.context = context;
    }

    /// Register a command definition.
    ///
    /// Definitions with an empty name are ignored with a warning.
    pub fn register(&mut self, definition: impl Into<Arc<CommandDefinition>>) {
        let definition = definition.into();
        let key = definition.key();
        if key.is_empty() {
            tracing::warn!("Ignoring command definition with an empty name");
            return;
        }

        for alias in &definition.aliases {
            let alias = normalize_key(alias);
            if alias.is_empty() {
                continue;
            }
            if let Some(previous) = self.aliases.insert(alias.clone(), key.clone())
                && previous != key
            {
                tracing::debug!(alias = %alias, from = %previous, to = %key, "alias reassigned");
            }
        }

        if self.names.insert(key.clone(), definition).is_some() {
            tracing::warn!(command = %key, "overwriting command definition");
        }
    }

    /// Register every definition in order.
    pub fn register_all<I>(&mut self, definitions: I)
    where
        I: IntoIterator,
        I::Item: Into<Arc<CommandDefinition>>,
    {
        for definition in definitions {
            self.register(definition);
        }
    }

    /// Parse one line of user input.
    ///
    /// Arguments are the remaining tokens after splitting on single spaces.
    /// No quoting is recognized, so an argument can never contain a space.
    pub fn parse(&self, input: &str) -> ParsedInput {
        let Some(rest) = input.strip_prefix(TRIGGER) else {
            return ParsedInput::rejected(
                RejectionKind::NotACommand,
                format!("Commands must start with {TRIGGER}"),
                HELP_SUGGESTION,
            );
        };

        let mut tokens = rest.trim().split(' ');
        let key = tokens.next().unwrap_or_default().to_lowercase();
        let args: Vec<String> = tokens.map(str::to_string).collect();

        let Some(command) = self.lookup(&key) else {
            return ParsedInput::rejected(
                RejectionKind::UnknownCommand,
                format!("Unknown command: {key}"),
                HELP_SUGGESTION,
            );
        };

        if !self.permission.has_permission(command, &args, &self.context) {
            return ParsedInput::rejected(
                RejectionKind::PermissionDenied,
                format!("Insufficient permissions for command: {key}"),
                PERMISSION_SUGGESTION,
            );
        }

        ParsedInput::Resolved(ResolvedCommand {
            command: Arc::clone(command),
            args,
            original_input: input.to_string(),
        })
    }

    /// Get a command by name, or by alias with a single hop.
    pub fn get_command(&self, key: &str) -> Option<Arc<CommandDefinition>> {
        self.lookup(&normalize_key(key)).cloned()
    }

    /// All aliases currently mapping to `name`, in the order they were first
    /// registered.
    pub fn aliases_for(&self, name: &str) -> Vec<String> {
        let key = normalize_key(name);
        self.aliases
            .iter()
            .filter(|(_, owner)| **owner == key)
            .map(|(alias, _)| alias.clone())
            .collect()
    }

    /// One summary per registered name, ordered by name.
    ///
    /// Aliases are recomputed from the alias table on every call.
    pub fn get_available_commands(&self) -> Vec<CommandSummary> {
        let mut summaries: Vec<CommandSummary> = self
            .names
            .values()
            .map(|def| CommandSummary {
                name: def.name.clone(),
                aliases: self.aliases_for(&def.name),
                description: def.description.clone(),
                category: def.category.clone(),
                permissions: def.permissions.clone(),
                alignment_tags: Vec::new(),
                implementation_tags: Vec::new(),
            })
            .collect();
        summaries.sort_by(|a, b| compare_names(&a.name, &b.name));
        summaries
    }

    /// Number of registered names.
    pub fn len(&self) -> usize {
        self.names.len()
    }

    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }

    fn lookup(&self, key: &str) -> Option<&Arc<CommandDefinition>> {
        self.names.get(key).or_else(|| {
            self.aliases
                .get(key)
                .and_then(|name| self.names.get(name))
        })
    }
}
