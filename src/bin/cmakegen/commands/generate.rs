//! `cmakegen generate` command

use std::path::PathBuf;

use anyhow::{bail, Result};
use serde::Serialize;

use crate::cli::GenerateArgs;
use cmakegen::core::{HostPlatform, MODEL_FILE_NAME};
use cmakegen::generator::{SectionAccumulator, TargetRule};
use cmakegen::ops::{generate_project_files, DescriptorStatus, GenerateMode, GenerateOptions};
use cmakegen::util::config::{global_config_path, load_config, project_config_path};
use cmakegen::WalkSourceFinder;

/// JSON shape printed by `--plan`.
#[derive(Serialize)]
struct Plan<'a> {
    host: HostPlatform,
    path: &'a std::path::Path,
    sections: &'a SectionAccumulator,
    rules: &'a [TargetRule],
}

pub fn execute(args: GenerateArgs) -> Result<()> {
    let cwd = std::env::current_dir()?;

    // Load configuration (global + project)
    let config = load_config(global_config_path().as_deref(), &project_config_path(&cwd));

    // Host: CLI > config > model > detected
    let host = match args.host.as_deref() {
        Some(host) => Some(host.parse::<HostPlatform>()?),
        None => config.host()?,
    };

    let model_path = args
        .model
        .or_else(|| config.generate.model.clone())
        .unwrap_or_else(|| PathBuf::from(MODEL_FILE_NAME));

    let mode = if args.check {
        GenerateMode::Check
    } else if args.stdout || args.plan {
        GenerateMode::DryRun
    } else {
        GenerateMode::Write
    };

    let opts = GenerateOptions {
        model_path,
        host,
        output_dir: args.output,
        file_name: args
            .file_name
            .unwrap_or_else(|| config.file_name().to_string()),
        mode,
    };

    let result = generate_project_files(&opts, &WalkSourceFinder::new())?;

    if args.stdout {
        print!("{}", result.descriptor.text);
        return Ok(());
    }

    if args.plan {
        let plan = Plan {
            host: result.host,
            path: &result.path,
            sections: &result.descriptor.sections,
            rules: &result.descriptor.rules,
        };
        println!("{}", serde_json::to_string_pretty(&plan)?);
        return Ok(());
    }

    match result.status {
        DescriptorStatus::Written => {
            eprintln!("   Generated {}", result.path.display());
        }
        DescriptorStatus::Unchanged => {
            eprintln!("  Up to date {}", result.path.display());
        }
        DescriptorStatus::Stale => {
            bail!(
                "`{}` is out of date\n\
                 \n\
                 Run `cmakegen generate` to regenerate it.",
                result.path.display()
            );
        }
        DescriptorStatus::Skipped => {}
    }

    Ok(())
}
