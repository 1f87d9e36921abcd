//! Command definition records shared by the resolver and the loader.

use std::cmp::Ordering;

use icu_collator::{Collator, CollatorBorrowed, options::CollatorOptions};
use once_cell::sync::Lazy;
use serde::{Deserialize, Serialize};

/// Category assigned to definitions that do not declare one.
pub const DEFAULT_CATEGORY: &str = "utility";

/// The canonical record for a slash command, built-in or loaded from a file.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CommandDefinition {
    /// Unique command name (e.g., "plan").
    pub name: String,
    /// Alternate tokens that resolve to this command.
    #[serde(default)]
    pub aliases: Vec<String>,
    /// Human-readable description.
    #[serde(default)]
    pub description: String,
    /// Free-text classification tag.
    #[serde(default = "default_category")]
    pub category: String,
    /// Capability tokens required to invoke the command (e.g., "read", "edit").
    #[serde(default)]
    pub permissions: Vec<String>,
    /// Phase tags, opaque to the resolver.
    #[serde(default)]
    pub alignment_tags: Vec<String>,
    /// Technique tags, opaque to the resolver.
    #[serde(default)]
    pub implementation_tags: Vec<String>,
    /// Instructional body text. Only present for file-loaded definitions.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub body: Option<String>,
}

fn default_category() -> String {
    DEFAULT_CATEGORY.to_string()
}

impl CommandDefinition {
    /// Create a definition with the given name and default fields.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            aliases: Vec::new(),
            description: String::new(),
            category: default_category(),
            permissions: Vec::new(),
            alignment_tags: Vec::new(),
            implementation_tags: Vec::new(),
            body: None,
        }
    }

    pub fn with_aliases<I, S>(mut self, aliases: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.aliases = aliases.into_iter().map(Into::into).collect();
        self
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }

    pub fn with_category(mut self, category: impl Into<String>) -> Self {
        self.category = category.into();
        self
    }

    pub fn with_permissions<I, S>(mut self, permissions: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.permissions = permissions.into_iter().map(Into::into).collect();
        self
    }

    pub fn with_alignment_tags<I, S>(mut self, tags: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.alignment_tags = tags.into_iter().map(Into::into).collect();
        self
    }

    pub fn with_implementation_tags<I, S>(mut self, tags: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.implementation_tags = tags.into_iter().map(Into::into).collect();
        self
    }

    pub fn with_body(mut self, body: impl Into<String>) -> Self {
        self.body = Some(body.into());
        self
    }

    /// Lookup key for this definition's name.
    pub fn key(&self) -> String {
        normalize_key(&self.name)
    }
}

/// A listing entry for a registered command.
///
/// `aliases` reflects the owning registry's alias table at the time the
/// summary was built, which may differ from the definition's own list.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CommandSummary {
    pub name: String,
    pub aliases: Vec<String>,
    pub description: String,
    pub category: String,
    pub permissions: Vec<String>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub alignment_tags: Vec<String>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub implementation_tags: Vec<String>,
}

/// Normalize a command name or alias into its lookup key.
pub fn normalize_key(raw: &str) -> String {
    raw.trim().to_lowercase()
}

// Root-locale collator; `None` only if the compiled collation data fails to load.
static NAME_COLLATOR: Lazy<Option<CollatorBorrowed<'static>>> = Lazy::new(|| {
    Collator::try_new(Default::default(), CollatorOptions::default())
        .map_err(|e| tracing::warn!(error = %e, "root collator unavailable"))
        .ok()
});

/// Order two command names the way listings present them.
///
/// Uses root-locale collation, so accented names sort next to their base
/// letters and case only breaks ties. The raw string settles anything the
/// collator considers equal.
pub fn compare_names(a: &str, b: &str) -> Ordering {
    let collated = match NAME_COLLATOR.as_ref() {
        Some(collator) => collator.compare(a, b),
        None => a.to_lowercase().cmp(&b.to_lowercase()),
    };
    collated.then_with(|| a.cmp(b))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_definition_defaults() {
        let def = CommandDefinition::new("plan");
        assert_eq!(def.name, "plan");
        assert_eq!(def.category, DEFAULT_CATEGORY);
        assert!(def.aliases.is_empty());
        assert!(def.body.is_none());
    }

    #[test]
    fn test_key_is_lowercase() {
        let def = CommandDefinition::new(" Deploy ");
        assert_eq!(def.key(), "deploy");
    }

    #[test]
    fn test_compare_names_case_insensitive() {
        let mut names = vec!["scope", "Build", "assign", "build"];
        names.sort_by(|a, b| compare_names(a, b));
        assert_eq!(names, vec!["assign", "build", "Build", "scope"]);
    }

    #[test]
    fn test_compare_names_accented_sorts_with_base_letter() {
        let mut names = vec!["zeta", "éclair", "deploy", "Ünterschied"];
        names.sort_by(|a, b| compare_names(a, b));
        assert_eq!(names, vec!["deploy", "éclair", "Ünterschied", "zeta"]);
        assert_eq!(compare_names("éclair", "eclair"), Ordering::Greater);
    }

    #[test]
    fn test_deserialize_applies_defaults() {
        let def: CommandDefinition = serde_json::from_str(r#"{"name": "lint"}"#).unwrap();
        assert_eq!(def.category, "utility");
        assert!(def.permissions.is_empty());
    }
}
