//! Pack assembly orchestration.
//! Runs the template catalogs through the processor and performs the
//! non-template steps: directory safety checks, asset and icon copies,
//! and archive packaging.

use std::fs;
use std::path::{Path, PathBuf};

use log::{debug, warn};

use crate::archive::zip_pack;
use crate::catalog;
use crate::config::Settings;
use crate::constants::{
    DATAPACK_SUFFIX, PACK_MARKER_FILE, RESOURCEPACK_SUFFIX, VERSION_MAJOR, VERSION_MINOR,
};
use crate::context::Context;
use crate::entry::EntryList;
use crate::error::{Error, Result};
use crate::processor::Processor;
use crate::template::validate_catalog;

/// Generates the datapack under `out_root`.
///
/// # Returns
/// * `Result<PathBuf>` - Path of the generated directory, or of the zip
///   archive when zipping is enabled
pub fn generate_datapack(
    settings: &Settings,
    entries: &EntryList,
    out_root: &Path,
) -> Result<PathBuf> {
    let pack_dir = out_root.join(format!("{}{}", settings.name, DATAPACK_SUFFIX));
    reset_pack_dir(&pack_dir)?;

    let files = catalog::datapack_files(settings.datapack_format, entries)?;
    validate_catalog(&files)?;

    let context = base_context(settings, entries, settings.datapack_format)?;
    Processor::new(&pack_dir, entries, context).process_all(&files)?;

    copy_icon(settings, &pack_dir);

    if settings.zip {
        return zip_pack(&pack_dir);
    }
    Ok(pack_dir)
}

/// Generates the resourcepack under `out_root`.
pub fn generate_resourcepack(
    settings: &Settings,
    entries: &EntryList,
    out_root: &Path,
) -> Result<PathBuf> {
    let pack_dir = out_root.join(format!("{}{}", settings.name, RESOURCEPACK_SUFFIX));
    reset_pack_dir(&pack_dir)?;

    let files = catalog::resourcepack_files(settings.resourcepack_format, entries)?;
    validate_catalog(&files)?;

    let context = base_context(settings, entries, settings.resourcepack_format)?;
    Processor::new(&pack_dir, entries, context).process_all(&files)?;

    copy_assets(entries, &pack_dir)?;
    copy_icon(settings, &pack_dir);

    if settings.zip {
        return zip_pack(&pack_dir);
    }
    Ok(pack_dir)
}

/// Assembles the base substitution context for one pack.
///
/// Every name available to catalog templates is bound here; per-entry
/// fields are added by the processor while iterating.
fn base_context(settings: &Settings, entries: &EntryList, pack_format: u32) -> Result<Context> {
    Context::new()
        .insert("settings", settings)?
        .insert("entries", &entries.entries)?
        .insert("pack_name", &settings.name)?
        .insert("namespace", &settings.namespace)?
        .insert("pack_format", pack_format)?
        .insert("num_discs", entries.len())?
        .insert("version", format!("v{VERSION_MAJOR}.{VERSION_MINOR}"))
}

/// Clears a previous run's output, refusing to touch foreign directories.
///
/// A directory that exists without the marker file may belong to something
/// else entirely; it is never deleted.
fn reset_pack_dir(pack_dir: &Path) -> Result<()> {
    if pack_dir.is_dir() {
        if !pack_dir.join(PACK_MARKER_FILE).is_file() {
            return Err(Error::PackDirInUseError { dir: pack_dir.display().to_string() });
        }
        debug!("Removing previous pack output: {}", pack_dir.display());
        fs::remove_dir_all(pack_dir)?;
    }
    Ok(())
}

fn copy_icon(settings: &Settings, pack_dir: &Path) {
    match &settings.icon {
        Some(icon) => {
            if let Err(err) = fs::copy(icon, pack_dir.join("pack.png")) {
                warn!(
                    "Could not copy pack icon '{}': {}. The pack will not have an icon.",
                    icon.display(),
                    err
                );
            }
        }
        None => warn!("No pack icon configured. The pack will not have an icon."),
    }
}

/// Copies each disc's sound and texture files into the resourcepack.
fn copy_assets(entries: &EntryList, pack_dir: &Path) -> Result<()> {
    let sounds_dir =
        pack_dir.join("assets").join("minecraft").join("sounds").join("records");
    let textures_dir =
        pack_dir.join("assets").join("minecraft").join("textures").join("item");
    fs::create_dir_all(&sounds_dir)?;
    fs::create_dir_all(&textures_dir)?;

    for entry in entries.iter() {
        fs::copy(
            &entry.track_file,
            sounds_dir.join(format!("{}.ogg", entry.internal_name)),
        )?;
        fs::copy(
            &entry.texture_file,
            textures_dir.join(format!("music_disc_{}.png", entry.internal_name)),
        )?;
    }
    Ok(())
}
