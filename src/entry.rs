//! Disc entries and the ordered entry list.

use std::path::PathBuf;

use log::warn;
use serde::Serialize;

use crate::config::DiscSpec;

/// One music disc to embed in the generated packs.
#[derive(Debug, Clone, Serialize)]
pub struct DiscEntry {
    /// Display name shown on the disc item
    pub title: String,
    /// Sanitized identifier used for file and resource names
    pub internal_name: String,
    /// Source audio file (.ogg)
    pub track_file: PathBuf,
    /// Source texture file (.png)
    pub texture_file: PathBuf,
    /// Assigned custom model data index
    pub custom_model_data: u32,
}

/// The ordered collection of disc entries for one generation run.
#[derive(Debug, Clone, Serialize)]
pub struct EntryList {
    pub entries: Vec<DiscEntry>,
}

impl EntryList {
    /// Builds the entry list from manifest disc specs.
    ///
    /// Entries are numbered `offset + 1 + position` in list order; the
    /// order is significant and preserved throughout generation.
    pub fn from_specs(specs: &[DiscSpec], offset: u32) -> Self {
        let entries: Vec<DiscEntry> = specs
            .iter()
            .enumerate()
            .map(|(position, spec)| {
                let source = spec.name.as_deref().unwrap_or(&spec.title);
                DiscEntry {
                    title: spec.title.clone(),
                    internal_name: sanitize_name(source),
                    track_file: spec.track.clone(),
                    texture_file: spec.texture.clone(),
                    custom_model_data: offset + 1 + position as u32,
                }
            })
            .collect();

        for (position, entry) in entries.iter().enumerate() {
            let first = entries.iter().position(|e| e.internal_name == entry.internal_name);
            if first != Some(position) {
                warn!(
                    "Duplicate internal name '{}'; later discs will overwrite earlier files.",
                    entry.internal_name
                );
            }
        }

        EntryList { entries }
    }

    pub fn internal_names(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(|entry| entry.internal_name.as_str())
    }

    pub fn iter(&self) -> std::slice::Iter<'_, DiscEntry> {
        self.entries.iter()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

/// Derives a safe resource identifier from a display name.
///
/// ASCII alphanumerics are lowercased and kept; everything else folds into
/// a single underscore. The result is never empty.
pub fn sanitize_name(raw: &str) -> String {
    let mut name = String::with_capacity(raw.len());
    let mut pending_separator = false;

    for c in raw.trim().chars() {
        if c.is_ascii_alphanumeric() {
            if pending_separator && !name.is_empty() {
                name.push('_');
            }
            name.push(c.to_ascii_lowercase());
            pending_separator = false;
        } else {
            pending_separator = true;
        }
    }

    if name.is_empty() {
        name.push_str("disc");
    }
    name
}
