//! CLI definitions using clap.

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};
use clap_complete::Shell;

/// cmakegen - Generates a CMakeLists.txt from a resolved engine build model
#[derive(Parser)]
#[command(name = "cmakegen")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Enable verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Disable colored output
    #[arg(long, global = true)]
    pub no_color: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Generate the CMake descriptor from a build model
    Generate(GenerateArgs),

    /// Generate shell completions
    Completions(CompletionsArgs),
}

#[derive(Args)]
pub struct GenerateArgs {
    /// Path to the build model (default: BuildModel.toml)
    #[arg(short, long, env = "CMAKEGEN_MODEL")]
    pub model: Option<PathBuf>,

    /// Host platform to generate for (linux, mac, win64)
    #[arg(long)]
    pub host: Option<String>,

    /// Directory to write the descriptor to
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    /// Descriptor file name (default: CMakeLists.txt)
    #[arg(long)]
    pub file_name: Option<String>,

    /// Print the descriptor to stdout instead of writing it
    #[arg(long, conflicts_with_all = ["plan", "check"])]
    pub stdout: bool,

    /// Print the generation plan as JSON instead of writing it
    #[arg(long, conflicts_with = "check")]
    pub plan: bool,

    /// Fail if the descriptor on disk is out of date
    #[arg(long)]
    pub check: bool,
}

#[derive(Args)]
pub struct CompletionsArgs {
    /// Shell to generate completions for
    #[arg(value_enum)]
    pub shell: Shell,
}
