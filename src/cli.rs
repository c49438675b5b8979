//! Command-line interface implementation for discforge.
//! Provides argument parsing using clap.

use clap::Parser;
use std::path::PathBuf;

/// Command-line arguments structure for discforge.
#[derive(Parser, Debug)]
#[command(author, version, about = "discforge: Minecraft music disc datapack and resourcepack generator", long_about = None)]
pub struct Args {
    /// Path to the disc manifest (JSON or YAML).
    /// Defaults to discs.json / discs.yml / discs.yaml in the working directory.
    #[arg(value_name = "MANIFEST")]
    pub manifest: Option<PathBuf>,

    /// Directory where the packs will be generated
    #[arg(short, long, value_name = "DIR", default_value = ".")]
    pub output_dir: PathBuf,

    /// Overrides the pack name from the manifest
    #[arg(long)]
    pub name: Option<String>,

    /// Overrides the custom model data offset from the manifest
    #[arg(long)]
    pub offset: Option<u32>,

    /// Package the generated packs into .zip archives
    #[arg(short, long)]
    pub zip: bool,

    /// Enable verbose logging output
    #[arg(short, long)]
    pub verbose: bool,
}

/// Parses command line arguments and returns the Args structure.
pub fn get_args() -> Args {
    Args::parse()
}
