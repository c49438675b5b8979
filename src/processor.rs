//! Repetition driver and pack file writer.
//! Takes catalog descriptors and expands them into concrete files under the
//! pack root, applying one of the three repetition policies.

use std::fs::{self, File};
use std::io::Write;
use std::path::{Path, PathBuf};

use log::debug;

use crate::content::{format_body, write_json, Body};
use crate::context::Context;
use crate::entry::{DiscEntry, EntryList};
use crate::error::{Error, Result};
use crate::render::{render_path, render_str};
use crate::template::{PackFile, Repeat};

/// Expands pack file descriptors into files under one pack directory.
pub struct Processor<'a> {
    root: &'a Path,
    entries: &'a EntryList,
    base: Context,
}

impl<'a> Processor<'a> {
    /// # Arguments
    /// * `root` - Pack directory all destination paths resolve under
    /// * `entries` - The disc entries folded into repeating descriptors
    /// * `base` - Base substitution context, extended per entry while iterating
    pub fn new(root: &'a Path, entries: &'a EntryList, base: Context) -> Self {
        Processor { root, entries, base }
    }

    /// Processes every descriptor in catalog order.
    ///
    /// A failing descriptor aborts the run; files already written stay on
    /// disk for the caller's outer directory check to clean up next run.
    pub fn process_all(&self, files: &[PackFile]) -> Result<()> {
        for file in files {
            match file.repeat {
                Repeat::Single => self.write_single(file)?,
                Repeat::Copy => self.write_copy(file)?,
                Repeat::CopyWithin => self.write_copy_within(file)?,
            }
        }
        Ok(())
    }

    /// Writes one file from the base context.
    fn write_single(&self, file: &PackFile) -> Result<()> {
        let dst = self.dest_path(file, &self.base)?;
        let mut out = create_dest(&dst)?;
        self.write_pack_file(file, &mut out, &self.base)
    }

    /// Writes one file per entry, each rendered against that entry.
    fn write_copy(&self, file: &PackFile) -> Result<()> {
        for (index, entry) in self.entries.iter().enumerate() {
            let context = self.entry_context(index, entry)?;
            let dst = self.dest_path(file, &context)?;
            let mut out = create_dest(&dst)?;
            self.write_pack_file(file, &mut out, &context)?;
        }
        Ok(())
    }

    /// Writes the per-entry contents into a single file, concatenated in
    /// entry order. The destination resolves once, from the base context.
    fn write_copy_within(&self, file: &PackFile) -> Result<()> {
        let dst = self.dest_path(file, &self.base)?;
        let mut out = create_dest(&dst)?;
        for (index, entry) in self.entries.iter().enumerate() {
            let context = self.entry_context(index, entry)?;
            self.write_pack_file(file, &mut out, &context)?;
        }
        Ok(())
    }

    /// Writes one formatted copy of the descriptor's contents to `out`.
    fn write_pack_file(
        &self,
        file: &PackFile,
        out: &mut dyn Write,
        context: &Context,
    ) -> Result<()> {
        match &file.contents {
            Body::Text(text) => {
                let template = text.trim_start();
                let rendered = if file.format_contents {
                    render_str(template, context)?
                } else {
                    template.to_string()
                };
                out.write_all(rendered.as_bytes())?;
                Ok(())
            }
            Body::Mapping(_) | Body::Sequence(_) => {
                if file.format_contents {
                    write_json(out, &format_body(&file.contents, context)?)
                } else {
                    write_json(out, &file.contents)
                }
            }
            Body::Int(_) | Body::Float(_) | Body::Bool(_) => {
                Err(Error::UnsupportedContentsError)
            }
        }
    }

    fn dest_path(&self, file: &PackFile, context: &Context) -> Result<PathBuf> {
        Ok(self.root.join(render_path(&file.path, context)?))
    }

    fn entry_context(&self, index: usize, entry: &DiscEntry) -> Result<Context> {
        self.base.clone().insert("entry", entry)?.insert("index", index)
    }
}

// Truncate-on-open: a previous run's file at the same path is overwritten,
// never merged. The handle closes on drop on every exit path.
fn create_dest(dst: &Path) -> Result<File> {
    if let Some(parent) = dst.parent() {
        fs::create_dir_all(parent)?;
    }
    debug!("Writing file: {}", dst.display());
    Ok(File::create(dst)?)
}
