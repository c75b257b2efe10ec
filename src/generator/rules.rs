//! Per-target build rules.
//!
//! Every target with a defining file gets one rule per valid configuration
//! (except `Unknown` and `Development`) followed by a default rule that
//! builds `Development` and lists all files as rule sources.

use serde::Serialize;

use crate::core::{Configuration, GenerationContext, HostPlatform, ProjectFile};

/// Extra build argument passed to targets of the external project.
pub const PROJECT_FILE_ARG: &str = " -project=\"\\\"${GAME_PROJECT_FILE}\\\"\"";

/// A named `add_custom_target` rule.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TargetRule {
    /// Rule name (`<target>-<platform>-<config>` or `<target>`)
    pub name: String,

    /// Target identifier passed to the build command
    pub target: String,

    /// Host architecture passed to the build command
    pub platform: HostPlatform,

    /// Configuration passed to the build command
    pub configuration: Configuration,

    /// Whether the external project file is passed along
    pub uses_project_file: bool,

    /// Whether this is the default rule listing every file
    pub is_default: bool,
}

impl TargetRule {
    /// Render the rule as one descriptor line.
    pub fn render(&self) -> String {
        let project_arg = if self.uses_project_file {
            PROJECT_FILE_ARG
        } else {
            ""
        };

        if self.is_default {
            format!(
                "add_custom_target({} ${{BUILD}} {} {} {} {} $(ARGS) SOURCES ${{SOURCE_FILES}} ${{HEADER_FILES}} ${{CONFIG_FILES}})\n\n",
                self.name, project_arg, self.target, self.platform, self.configuration
            )
        } else {
            format!(
                "add_custom_target({} ${{BUILD}} {} {} {} {} $(ARGS))\n",
                self.name, project_arg, self.target, self.platform, self.configuration
            )
        }
    }
}

/// Emit the rules for every target of every project, in input order.
pub fn emit_rules(projects: &[ProjectFile], ctx: &GenerationContext) -> Vec<TargetRule> {
    let platform = ctx.host();
    let mut rules = Vec::new();

    for project in projects {
        for target in &project.targets {
            let Some(target_name) = target.rule_name() else {
                tracing::debug!(
                    "skipping target `{}` of `{}`: no defining file",
                    target.name,
                    project.name
                );
                continue;
            };

            let uses_project_file = ctx
                .game()
                .is_some_and(|game| game.owns_target(&target_name));

            for config in Configuration::ALL {
                if !config.has_dedicated_rule() || !ctx.is_valid_configuration(config) {
                    continue;
                }
                rules.push(TargetRule {
                    name: format!("{}-{}-{}", target_name, platform, config),
                    target: target_name.clone(),
                    platform,
                    configuration: config,
                    uses_project_file,
                    is_default: false,
                });
            }

            rules.push(TargetRule {
                name: target_name.clone(),
                target: target_name,
                platform,
                configuration: Configuration::Development,
                uses_project_file,
                is_default: true,
            });
        }
    }

    rules
}
