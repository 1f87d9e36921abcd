//! Command document parser: metadata block + markdown body → CommandDefinition.
//!
//! Expected format:
//! ```text
//! ---
//! name: review
//! aliases: ["r", "cr"]
//! description: Review the current change
//! permissions: read, command
//! ---
//!
//! Review the staged diff and report problems.
//! ```
//!
//! Every `---` line enters metadata mode and nothing leaves it, so a body
//! line containing a colon that follows a marker is read as metadata.

use std::collections::HashMap;

use super::{
    definition::{CommandDefinition, DEFAULT_CATEGORY},
    error::{DefinitionError, DefinitionResult},
};

/// Line that switches the parser into metadata mode.
pub const METADATA_MARKER: &str = "---";

/// A document split into its metadata fields and body lines.
#[derive(Debug, Default, PartialEq, Eq)]
pub struct Document {
    /// Lower-cased keys to trimmed values; later duplicates win.
    pub metadata: HashMap<String, String>,
    /// Non-blank body lines in their original order.
    pub body: Vec<String>,
}

impl Document {
    /// Body lines joined with newlines and trimmed.
    pub fn body_text(&self) -> String {
        self.body.join("\n").trim().to_string()
    }

    fn field(&self, key: &str) -> Option<&str> {
        self.metadata
            .get(key)
            .map(String::as_str)
            .filter(|v| !v.is_empty())
    }

    fn list_field(&self, key: &str) -> Vec<String> {
        self.field(key).map(parse_list).unwrap_or_default()
    }
}

/// Split raw document text into metadata and body.
pub fn split_document(content: &str) -> Document {
    let mut doc = Document::default();
    let mut in_metadata = false;

    for line in content.lines() {
        if line.trim() == METADATA_MARKER {
            in_metadata = true;
            continue;
        }

        if in_metadata && let Some((key, value)) = line.split_once(':') {
            doc.metadata
                .insert(key.trim().to_lowercase(), value.trim().to_string());
            continue;
        }

        if !line.trim().is_empty() {
            doc.body.push(line.to_string());
        }
    }

    doc
}

/// Parse a command document into a definition.
///
/// `fallback_name` is used when the metadata has no `name` field, usually the
/// file stem of the document.
pub fn parse_document(content: &str, fallback_name: &str) -> DefinitionResult<CommandDefinition> {
    let doc = split_document(content);

    let name = doc
        .field("name")
        .unwrap_or(fallback_name)
        .trim()
        .to_string();
    if name.is_empty() {
        return Err(DefinitionError::MissingName);
    }

    Ok(CommandDefinition {
        name,
        aliases: doc.list_field("aliases"),
        description: doc.field("description").unwrap_or_default().to_string(),
        category: doc.field("category").unwrap_or(DEFAULT_CATEGORY).to_string(),
        permissions: doc.list_field("permissions"),
        alignment_tags: doc.list_field("sparc-alignment"),
        implementation_tags: doc.list_field("implementation"),
        body: Some(doc.body_text()),
    })
}

/// Parse a list-valued metadata field.
///
/// Tries [`parse_list_strict`] first and falls back to [`parse_list_lenient`].
pub fn parse_list(raw: &str) -> Vec<String> {
    parse_list_strict(raw).unwrap_or_else(|err| {
        tracing::debug!(value = raw, error = %err, "falling back to comma-separated list");
        parse_list_lenient(raw)
    })
}

/// Parse a JSON array of strings: `["a", "b"]`.
pub fn parse_list_strict(raw: &str) -> DefinitionResult<Vec<String>> {
    serde_json::from_str::<Vec<String>>(raw)
        .map_err(|e| DefinitionError::MalformedList(e.to_string()))
}

/// Parse a comma-separated list: `a, b` or `[a, 'b']` → `["a", "b"]`.
pub fn parse_list_lenient(raw: &str) -> Vec<String> {
    let s = raw.trim();
    let s = s.strip_prefix('[').unwrap_or(s);
    let s = s.strip_suffix(']').unwrap_or(s);
    s.split(',')
        .map(|item| {
            item.trim()
                .trim_matches('"')
                .trim_matches('\'')
                .trim()
                .to_string()
        })
        .filter(|s| !s.is_empty())
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    const SAMPLE_COMMAND: &str = r#"---
name: review
description: Review the current change
aliases: ["r", "cr"]
category: quality
permissions: read, command
sparc-alignment: refinement
implementation: ["checklist-prompting"]
---

Review the staged diff.

Report every problem with a file and line.
"#;

    #[test]
    fn test_parse_document() {
        let def = parse_document(SAMPLE_COMMAND, "ignored").unwrap();
        assert_eq!(def.name, "review");
        assert_eq!(def.description, "Review the current change");
        assert_eq!(def.aliases, vec!["r", "cr"]);
        assert_eq!(def.category, "quality");
        assert_eq!(def.permissions, vec!["read", "command"]);
        assert_eq!(def.alignment_tags, vec!["refinement"]);
        assert_eq!(def.implementation_tags, vec!["checklist-prompting"]);
        assert_eq!(
            def.body.as_deref(),
            Some("Review the staged diff.\nReport every problem with a file and line.")
        );
    }

    #[test]
    fn test_parse_document_comma_aliases_and_two_line_body() {
        let content = "---\nname: foo\naliases: a,b\n---\nfirst line\nsecond line\n";
        let def = parse_document(content, "").unwrap();
        assert_eq!(def.name, "foo");
        assert_eq!(def.aliases, vec!["a", "b"]);
        assert_eq!(def.body.as_deref(), Some("first line\nsecond line"));
    }

    #[test]
    fn test_parse_document_defaults() {
        let def = parse_document("---\n---\nJust a body", "fallback").unwrap();
        assert_eq!(def.name, "fallback");
        assert_eq!(def.description, "");
        assert_eq!(def.category, "utility");
        assert!(def.aliases.is_empty());
        assert!(def.permissions.is_empty());
        assert!(def.alignment_tags.is_empty());
        assert!(def.implementation_tags.is_empty());
    }

    #[test]
    fn test_parse_document_missing_name() {
        let err = parse_document("---\ndescription: test\n---\nbody", "").unwrap_err();
        assert!(matches!(err, DefinitionError::MissingName));
    }

    #[test]
    fn test_parse_document_empty_name_uses_fallback() {
        let def = parse_document("---\nname:\n---\nbody", "deploy").unwrap();
        assert_eq!(def.name, "deploy");
    }

    #[test]
    fn test_value_split_on_first_colon() {
        let doc = split_document("---\ndescription: run: then report\n");
        assert_eq!(
            doc.metadata.get("description").map(String::as_str),
            Some("run: then report")
        );
    }

    #[test]
    fn test_keys_lowercased_and_duplicates_overwrite() {
        let doc = split_document("---\nName: first\nNAME: second\n");
        assert_eq!(doc.metadata.get("name").map(String::as_str), Some("second"));
    }

    #[test]
    fn test_metadata_mode_never_exits() {
        let content = "---\nname: notes\n---\nIntro line\nSee also: the docs\n";
        let doc = split_document(content);
        assert_eq!(doc.body, vec!["Intro line"]);
        assert_eq!(
            doc.metadata.get("see also").map(String::as_str),
            Some("the docs")
        );
    }

    #[test]
    fn test_colon_lines_before_any_marker_are_body() {
        let doc = split_document("Note: no metadata here\nsecond\n");
        assert!(doc.metadata.is_empty());
        assert_eq!(doc.body, vec!["Note: no metadata here", "second"]);
    }

    #[test]
    fn test_blank_lines_are_dropped() {
        let doc = split_document("---\nname: x\n---\n\none\n\n   \ntwo\n");
        assert_eq!(doc.body_text(), "one\ntwo");
    }

    #[test]
    fn test_parse_list_strict() {
        assert_eq!(
            parse_list_strict(r#"["a", "b", "c"]"#).unwrap(),
            vec!["a", "b", "c"]
        );
        assert!(parse_list_strict("[]").unwrap().is_empty());
        assert!(matches!(
            parse_list_strict("a, b"),
            Err(DefinitionError::MalformedList(_))
        ));
        assert!(parse_list_strict("[1, 2]").is_err());
    }

    #[test]
    fn test_parse_list_lenient() {
        assert_eq!(parse_list_lenient("a, b ,c"), vec!["a", "b", "c"]);
        assert_eq!(parse_list_lenient("[a, 'b', \"c\"]"), vec!["a", "b", "c"]);
        assert_eq!(parse_list_lenient("a,,b,"), vec!["a", "b"]);
        assert!(parse_list_lenient("").is_empty());
    }

    #[test]
    fn test_parse_list_falls_back() {
        assert_eq!(parse_list(r#"["x y", "z"]"#), vec!["x y", "z"]);
        assert_eq!(parse_list("read, edit"), vec!["read", "edit"]);
        assert_eq!(parse_list("[read, edit]"), vec!["read", "edit"]);
    }
}
