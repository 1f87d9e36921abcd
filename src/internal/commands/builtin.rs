//! Built-in command vocabulary seeded into every resolver.

use super::definition::CommandDefinition;

/// The fixed set of built-in command definitions, in seeding order.
pub fn builtin_commands() -> Vec<CommandDefinition> {
    vec![
        CommandDefinition::new("plan")
            .with_aliases(["p", "project", "roadmap"])
            .with_description(
                "Generate comprehensive project task maps with phases and dependencies",
            )
            .with_category("project-management")
            .with_permissions(["read", "edit", "command"])
            .with_alignment_tags(["specification"])
            .with_implementation_tags([
                "workflow-template-prompting",
                "boomerang-task-delegation",
            ]),
        CommandDefinition::new("scope")
            .with_aliases(["s", "analyze", "investigate"])
            .with_description("Deep analysis of GitHub issues for comprehensive scope documents")
            .with_category("project-management")
            .with_permissions(["read", "browser", "mcp"])
            .with_alignment_tags(["specification", "architecture"])
            .with_implementation_tags([
                "issue-decomposition-analysis",
                "codebase-impact-mapping",
                "hypothetical-scenario-modeling",
            ]),
        CommandDefinition::new("assign")
            .with_aliases(["a", "delegate", "task"])
            .with_description(
                "Delegate tasks to appropriate specialist agents with structured prompts",
            )
            .with_category("project-management")
            .with_permissions(["read", "edit", "command", "mcp"])
            .with_alignment_tags(["specification"])
            .with_implementation_tags([
                "boomerang-task-delegation",
                "instructed-prompting",
                "template-prompting",
            ]),
        CommandDefinition::new("status")
            .with_aliases(["status", "progress", "state"])
            .with_description("Show current project state and task progress")
            .with_category("utility")
            .with_permissions(["read"])
            .with_alignment_tags(["completion"])
            .with_implementation_tags(["state-management", "traceability-documentation"]),
        CommandDefinition::new("design")
            .with_aliases(["d", "architect", "system-design"])
            .with_description("Generate system architecture documents and design specifications")
            .with_category("architecture")
            .with_permissions(["read", "edit", "browser"])
            .with_alignment_tags(["architecture"])
            .with_implementation_tags([
                "visual-documentation-generation",
                "tree-of-thoughts",
                "step-back-prompting",
            ]),
        CommandDefinition::new("build")
            .with_aliases(["b", "deploy", "release"])
            .with_description("Execute build and deployment workflows with quality gates")
            .with_category("development")
            .with_permissions(["read", "edit", "command", "browser"])
            .with_alignment_tags(["pseudocode", "refinement", "completion"])
            .with_implementation_tags(["automated-development-workflows", "semantic-guardrails"]),
        CommandDefinition::new("mode")
            .with_aliases(["m", "switch", "agent"])
            .with_description("Switch between specialized AI agent modes")
            .with_category("framework")
            .with_permissions(["read", "edit", "command"])
            .with_alignment_tags(["specification"])
            .with_implementation_tags(["agent-configuration-management"]),
    ]
}
