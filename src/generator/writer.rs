//! Descriptor text assembly.

use crate::core::GenerationContext;
use crate::generator::rules::TargetRule;
use crate::generator::sections::SectionAccumulator;
use crate::util::fs::to_slash;

/// Build command used whenever an external project is configured.
const GAME_BUILD_COMMAND: &str = "mono ${UE4_ROOT_PATH}/Engine/Binaries/DotNET/UnrealBuildTool.exe ";

/// Fixed header of every descriptor.
const PREAMBLE: &str = "# Makefile generated by cmakegen\n\
                        # *DO NOT EDIT*\n\n\
                        cmake_minimum_required (VERSION 2.6)\n\
                        project (UE4)\n\n";

/// Render the preamble and variable assignments.
pub fn write_header(ctx: &GenerationContext, out: &mut String) {
    out.push_str(PREAMBLE);
    out.push_str(&format!("set(UE4_ROOT_PATH {})\n", to_slash(ctx.root_dir())));

    match ctx.game() {
        Some(game) => {
            out.push_str(&format!(
                "set(GAME_PROJECT_FILE \"{}\")\n",
                to_slash(&game.file)
            ));
            out.push_str(&format!("set(BUILD {})\n", GAME_BUILD_COMMAND));
            out.push_str(&format!(
                "set(GAME_ROOT_PATH \"{}\")\n",
                to_slash(game.rewrite_base())
            ));
        }
        None => {
            out.push_str(&format!("set(BUILD {})\n", ctx.host().build_command()));
        }
    }

    out.push('\n');
}

/// Assemble the full descriptor text in its fixed section order.
pub fn assemble(ctx: &GenerationContext, sections: &SectionAccumulator, rules: &[TargetRule]) -> String {
    let mut out = String::new();

    write_header(ctx, &mut out);
    sections.render(&mut out);
    for rule in rules {
        out.push_str(&rule.render());
    }

    out
}
