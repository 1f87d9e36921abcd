//! Integration tests for loading command documents and resolving them.
//!
//! These tests load definitions from real directories, feed them into a
//! resolver alongside the built-in commands, and check how names and aliases
//! resolve afterwards.

use std::path::Path;

use slash_dispatch::internal::commands::{
    CommandDefinition, CommandResolver, DefinitionError, DefinitionLoader, ParsedInput,
    RejectionKind,
};
use tempfile::tempdir;

fn write_command(dir: &Path, file: &str, content: &str) {
    std::fs::create_dir_all(dir).unwrap();
    std::fs::write(dir.join(file), content).unwrap();
}

/// Test: a loaded document becomes invocable by name and by alias
#[tokio::test]
async fn test_loaded_command_resolves_by_alias() {
    let dir = tempdir().unwrap();
    write_command(
        dir.path(),
        "review.md",
        "---\nname: review\naliases: [\"r\", \"cr\"]\npermissions: read\n---\n\nReview the diff.\nReport findings.\n",
    );

    let mut loader = DefinitionLoader::new();
    let report = loader.load_from_directory(dir.path()).await.unwrap();
    assert_eq!(report.registered(), 1);

    let mut resolver = CommandResolver::new();
    resolver.register_all(loader.definitions());

    let parsed = resolver.parse("/cr src/lib.rs");
    let resolved = parsed.resolved().unwrap();
    assert_eq!(resolved.command.name, "review");
    assert_eq!(resolved.args, vec!["src/lib.rs"]);
    assert_eq!(
        resolved.command.body.as_deref(),
        Some("Review the diff.\nReport findings.")
    );
    assert_eq!(
        loader.get_source_location("review"),
        Some(dir.path().join("review.md").display().to_string().as_str())
    );
}

/// Test: one unreadable document does not stop the rest of the batch
#[tokio::test]
async fn test_directory_load_counts_examined_entries() {
    let dir = tempdir().unwrap();
    write_command(dir.path(), "ok.md", "---\ndescription: fine\n---\nbody");
    write_command(dir.path(), "notes.txt", "not a command");
    std::fs::create_dir_all(dir.path().join("folder.md")).unwrap();

    let mut loader = DefinitionLoader::new();
    let report = loader.load_from_directory(dir.path()).await.unwrap();

    assert_eq!(report.examined, 3);
    assert_eq!(report.registered(), 1);
    let failure = report.failures().next().unwrap();
    assert_eq!(failure.file, "folder.md");
    assert!(matches!(
        failure.result,
        Err(DefinitionError::SourceUnavailable { .. })
    ));
    assert!(loader.get_command("ok").is_some());
}

/// Test: a missing directory is the only fatal loader failure
#[tokio::test]
async fn test_missing_directory_is_fatal() {
    let dir = tempdir().unwrap();
    let mut loader = DefinitionLoader::new();
    let err = loader
        .load_from_directory(&dir.path().join("nope"))
        .await
        .unwrap_err();
    assert!(matches!(err, DefinitionError::DirectoryUnavailable { .. }));
}

/// Test: overriding a built-in replaces its definition but leaves the
/// aliases the override does not list pointing at the same name
#[tokio::test]
async fn test_loaded_override_of_builtin() {
    let dir = tempdir().unwrap();
    write_command(
        dir.path(),
        "plan.md",
        "---\ndescription: Team plan\naliases: pl\n---\nPlan with the team template",
    );

    let mut loader = DefinitionLoader::new();
    loader.load_from_directory(dir.path()).await.unwrap();

    let mut resolver = CommandResolver::new();
    resolver.register_all(loader.definitions());

    for input in ["/plan", "/pl", "/p", "/roadmap"] {
        let parsed = resolver.parse(input);
        let resolved = parsed.resolved().unwrap();
        assert_eq!(resolved.command.description, "Team plan", "input {input}");
    }

    let plan = resolver
        .get_available_commands()
        .into_iter()
        .find(|c| c.name == "plan")
        .unwrap();
    assert_eq!(plan.aliases, vec!["p", "project", "roadmap", "pl"]);
}

/// Test: every alias in a resolver keeps pointing at a live command
#[test]
fn test_alias_integrity_after_many_registrations() {
    let mut resolver = CommandResolver::new();
    resolver.register(CommandDefinition::new("scan").with_aliases(["s", "a", "x"]));
    resolver.register(CommandDefinition::new("assign").with_aliases(["x"]));

    for summary in resolver.get_available_commands() {
        for alias in &summary.aliases {
            let target = resolver.get_command(alias).unwrap();
            assert_eq!(target.name, summary.name);
        }
    }
    assert_eq!(resolver.get_command("x").unwrap().name, "assign");
    assert_eq!(resolver.get_command("a").unwrap().name, "scan");
}

/// Test: a name always wins over an alias with the same spelling
#[test]
fn test_name_lookup_precedes_alias() {
    let mut resolver = CommandResolver::new();
    resolver.register(CommandDefinition::new("mode").with_aliases(["status"]));

    assert_eq!(resolver.get_command("status").unwrap().name, "status");
    assert!(resolver.aliases_for("mode").contains(&"status".to_string()));
}

/// Test: the rejection kinds surface as values, never panics
#[test]
fn test_rejections_are_values() {
    let resolver = CommandResolver::new();
    let cases = [
        ("plan", RejectionKind::NotACommand),
        ("/xyz", RejectionKind::UnknownCommand),
        ("", RejectionKind::NotACommand),
    ];
    for (input, kind) in cases {
        match resolver.parse(input) {
            ParsedInput::Rejected(rejection) => assert_eq!(rejection.kind, kind),
            ParsedInput::Resolved(_) => panic!("{input} should be rejected"),
        }
    }
}
