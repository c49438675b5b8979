//! Pack file template descriptors.
//! A descriptor is a static, author-supplied rule describing one family of
//! output files: where they go, what they contain and how the disc list is
//! folded into them.

use crate::content::Body;
use crate::error::{Error, Result};
use crate::render::placeholders;

/// How a pack file template unfolds against the disc list.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Repeat {
    /// One file, written once from the base context.
    Single,
    /// One file per disc entry, each rendered against that entry.
    Copy,
    /// One file, with the per-entry contents concatenated in entry order.
    CopyWithin,
}

/// One file-template descriptor from a pack catalog.
#[derive(Debug, Clone)]
pub struct PackFile {
    /// Ordered path-segment templates, joined to form the destination path
    pub path: Vec<String>,
    /// Content body; a text root writes plaintext, a mapping or sequence
    /// root writes JSON
    pub contents: Body,
    /// Repetition policy
    pub repeat: Repeat,
    /// Whether substitution is applied to the contents at all
    pub format_contents: bool,
}

impl PackFile {
    pub fn new(path: &[&str], contents: Body, repeat: Repeat) -> Self {
        PackFile {
            path: path.iter().map(|segment| segment.to_string()).collect(),
            contents,
            repeat,
            format_contents: true,
        }
    }

    /// A descriptor whose contents are written without substitution.
    /// Path segments are still rendered.
    pub fn raw(path: &[&str], contents: Body, repeat: Repeat) -> Self {
        PackFile { format_contents: false, ..PackFile::new(path, contents, repeat) }
    }
}

/// Checks a catalog for defects that would otherwise surface mid-write.
///
/// A `copy_within` descriptor resolves its destination once, before the
/// per-entry loop, so a path template referencing per-entry fields would
/// silently evaluate against a context that has no entry in it. Such
/// catalogs are rejected here instead.
pub fn validate_catalog(files: &[PackFile]) -> Result<()> {
    for file in files {
        if file.repeat != Repeat::CopyWithin {
            continue;
        }
        for segment in &file.path {
            for name in placeholders(segment) {
                if name == "entry" || name == "index" || name.starts_with("entry.") {
                    return Err(Error::ConfigError(format!(
                        "copy_within path segment '{segment}' must not reference per-entry fields"
                    )));
                }
            }
        }
    }
    Ok(())
}
