//! Permission capability consulted by the resolver before accepting a command.
//!
//! The resolver does not decide authorization itself. It asks a
//! [`PermissionCheck`] whether the current [`ExecutionContext`] may invoke a
//! definition with the given arguments.

use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};

use super::definition::CommandDefinition;

/// Ambient state a permission decision may depend on.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExecutionContext {
    /// Active execution mode, if any. Opaque to the resolver.
    #[serde(default)]
    pub mode: Option<String>,
    /// Capability tokens granted to this context.
    #[serde(default)]
    pub granted: BTreeSet<String>,
}

impl ExecutionContext {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_mode(mut self, mode: impl Into<String>) -> Self {
        self.mode = Some(mode.into());
        self
    }

    pub fn with_granted<I, S>(mut self, tokens: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.granted.extend(tokens.into_iter().map(Into::into));
        self
    }
}

/// Decides whether a context may invoke a command.
pub trait PermissionCheck: Send + Sync {
    fn has_permission(
        &self,
        definition: &CommandDefinition,
        args: &[String],
        context: &ExecutionContext,
    ) -> bool;
}

impl<F> PermissionCheck for F
where
    F: Fn(&CommandDefinition, &[String], &ExecutionContext) -> bool + Send + Sync,
{
    fn has_permission(
        &self,
        definition: &CommandDefinition,
        args: &[String],
        context: &ExecutionContext,
    ) -> bool {
        self(definition, args, context)
    }
}

/// Placeholder policy that grants every request.
///
/// This is the resolver's default. It is not a security boundary.
#[derive(Debug, Clone, Copy, Default)]
pub struct AllowAll;

impl PermissionCheck for AllowAll {
    fn has_permission(&self, _: &CommandDefinition, _: &[String], _: &ExecutionContext) -> bool {
        true
    }
}

/// Grants a command when the context holds every token it requires.
#[derive(Debug, Clone, Copy, Default)]
pub struct GrantedTokens;

impl PermissionCheck for GrantedTokens {
    fn has_permission(
        &self,
        definition: &CommandDefinition,
        _args: &[String],
        context: &ExecutionContext,
    ) -> bool {
        definition
            .permissions
            .iter()
            .all(|token| context.granted.contains(token))
    }
}
