//! Manifest loading and resolved generation settings.
//! The manifest is the user-supplied disc list plus pack settings, loaded
//! from JSON or YAML (discs.json, discs.yml, discs.yaml).

use std::path::{Path, PathBuf};

use log::debug;
use serde::{Deserialize, Serialize};

use crate::constants::{DEFAULT_PACK_FORMAT, MANIFEST_FILES};
use crate::entry::sanitize_name;
use crate::error::{Error, Result};

/// One disc as written in the manifest.
#[derive(Debug, Clone, Deserialize)]
pub struct DiscSpec {
    /// Display name shown on the disc item
    pub title: String,
    /// Path to the source audio file (.ogg)
    pub track: PathBuf,
    /// Path to the source texture file (.png)
    pub texture: PathBuf,
    /// Explicit internal name; derived from the title when absent
    #[serde(default)]
    pub name: Option<String>,
}

/// The user-supplied manifest file.
#[derive(Debug, Clone, Deserialize)]
pub struct Manifest {
    /// Pack display name, also the base of the output directory names
    pub name: String,
    /// Datapack function namespace; derived from the name when absent
    #[serde(default)]
    pub namespace: Option<String>,
    #[serde(default = "default_pack_format")]
    pub datapack_format: u32,
    #[serde(default = "default_pack_format")]
    pub resourcepack_format: u32,
    /// Starting offset for custom model data indices
    #[serde(default)]
    pub offset: u32,
    /// Whether to package generated packs into .zip archives
    #[serde(default)]
    pub zip: bool,
    /// Optional pack icon, copied to pack.png in each generated pack
    #[serde(default)]
    pub icon: Option<PathBuf>,
    /// The discs to embed, in order
    pub discs: Vec<DiscSpec>,
}

fn default_pack_format() -> u32 {
    DEFAULT_PACK_FORMAT
}

/// Settings resolved from the manifest and command-line overrides.
#[derive(Debug, Clone, Serialize)]
pub struct Settings {
    pub name: String,
    pub namespace: String,
    pub datapack_format: u32,
    pub resourcepack_format: u32,
    pub offset: u32,
    pub zip: bool,
    pub icon: Option<PathBuf>,
}

impl Settings {
    pub fn from_manifest(
        manifest: &Manifest,
        name_override: Option<&str>,
        offset_override: Option<u32>,
        force_zip: bool,
    ) -> Self {
        let name = name_override.unwrap_or(&manifest.name).to_string();
        let namespace =
            manifest.namespace.clone().unwrap_or_else(|| sanitize_name(&name));

        Settings {
            namespace,
            datapack_format: manifest.datapack_format,
            resourcepack_format: manifest.resourcepack_format,
            offset: offset_override.unwrap_or(manifest.offset),
            zip: force_zip || manifest.zip,
            icon: manifest.icon.clone(),
            name,
        }
    }
}

/// Locates the manifest file, trying the default names when none is given.
///
/// # Errors
/// * `Error::ConfigError` if the given path does not exist, or no default
///   manifest file is found
pub fn find_manifest(explicit: Option<&Path>) -> Result<PathBuf> {
    if let Some(path) = explicit {
        if path.is_file() {
            return Ok(path.to_path_buf());
        }
        return Err(Error::ConfigError(format!(
            "manifest '{}' does not exist",
            path.display()
        )));
    }

    for file in MANIFEST_FILES {
        let path = PathBuf::from(file);
        if path.is_file() {
            debug!("Loading manifest from {}", path.display());
            return Ok(path);
        }
    }

    Err(Error::ConfigError(format!(
        "no manifest file found (tried: {})",
        MANIFEST_FILES.join(", ")
    )))
}

/// Reads and parses the manifest, trying JSON first and YAML second.
pub fn load_manifest(path: &Path) -> Result<Manifest> {
    let content = std::fs::read_to_string(path)?;

    match serde_json::from_str(&content) {
        Ok(manifest) => Ok(manifest),
        Err(_) => serde_yaml::from_str(&content)
            .map_err(|e| Error::ConfigError(format!("invalid manifest format: {}", e))),
    }
}
