//! Zip archive packaging for generated packs.

use std::fs::{self, File};
use std::io::Write;
use std::path::{Path, PathBuf};

use log::debug;
use walkdir::WalkDir;
use zip::write::SimpleFileOptions;
use zip::ZipWriter;

use crate::constants::ZIP_SUFFIX;
use crate::error::{Error, Result};

/// Packages a generated pack directory into `<dir>.zip`.
///
/// On success the directory is replaced by the archive. On failure the
/// partial archive is removed and the directory output is left intact, so
/// the user still gets a usable pack folder.
pub fn zip_pack(pack_dir: &Path) -> Result<PathBuf> {
    let mut zip_name = pack_dir.as_os_str().to_os_string();
    zip_name.push(ZIP_SUFFIX);
    let zip_path = PathBuf::from(zip_name);

    if zip_path.exists() {
        fs::remove_file(&zip_path)?;
    }

    if let Err(err) = write_zip(&zip_path, pack_dir) {
        if zip_path.exists() {
            let _ = fs::remove_file(&zip_path);
        }
        return Err(err);
    }

    fs::remove_dir_all(pack_dir)?;
    Ok(zip_path)
}

fn write_zip(zip_path: &Path, pack_dir: &Path) -> Result<()> {
    debug!("Packing '{}' into '{}'", pack_dir.display(), zip_path.display());
    let mut archive = ZipWriter::new(File::create(zip_path)?);
    let options = SimpleFileOptions::default();

    for dir_entry in WalkDir::new(pack_dir) {
        let dir_entry = dir_entry.map_err(|e| Error::IoError(e.into()))?;
        let path = dir_entry.path();
        let relative = path.strip_prefix(pack_dir).unwrap_or(path);
        if relative.as_os_str().is_empty() {
            continue;
        }

        let Some(name) = relative.to_str() else {
            return Err(Error::ConfigError(format!(
                "non-unicode path in pack output: {}",
                relative.display()
            )));
        };

        if dir_entry.file_type().is_dir() {
            archive.add_directory(name, options)?;
        } else {
            archive.start_file(name, options)?;
            archive.write_all(&fs::read(path)?)?;
        }
    }

    archive.finish()?;
    Ok(())
}
