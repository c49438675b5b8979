//! Discforge's main application entry point and orchestration logic.
//! Handles command-line argument parsing and coordinates manifest loading
//! with datapack and resourcepack generation.

use discforge::{
    cli::{get_args, Args},
    config::{find_manifest, load_manifest, Settings},
    entry::EntryList,
    error::{default_error_handler, Error, Result},
    generator::{generate_datapack, generate_resourcepack},
    logger::init_logger,
};

/// Main application entry point.
fn main() {
    let args = get_args();
    init_logger(args.verbose);

    if let Err(err) = run(args) {
        default_error_handler(err);
    }
}

/// Main application logic execution.
///
/// # Flow
/// 1. Locates and parses the disc manifest
/// 2. Resolves settings from the manifest and command-line overrides
/// 3. Builds the ordered entry list with assigned model data indices
/// 4. Generates the datapack, then the resourcepack
fn run(args: Args) -> Result<()> {
    let manifest_path = find_manifest(args.manifest.as_deref())?;
    let manifest = load_manifest(&manifest_path)?;

    let settings =
        Settings::from_manifest(&manifest, args.name.as_deref(), args.offset, args.zip);
    let entries = EntryList::from_specs(&manifest.discs, settings.offset);

    if entries.is_empty() {
        return Err(Error::ConfigError("manifest contains no disc entries".to_string()));
    }

    let datapack = generate_datapack(&settings, &entries, &args.output_dir)?;
    println!("Generated datapack: '{}'", datapack.display());

    let resourcepack = generate_resourcepack(&settings, &entries, &args.output_dir)?;
    println!("Generated resourcepack: '{}'", resourcepack.display());

    Ok(())
}
