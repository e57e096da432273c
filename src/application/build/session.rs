//! Build Session
//!
//! One pass of writing a wheel into an open container. Stages run in a
//! fixed order and none repeats:
//!
//! `Entries → PackageMetadata → WheelMetadata → Record → Closed`
//!
//! The session owns the sink; closing consumes it.

use std::path::{Path, PathBuf};

use tracing::{debug, info, trace};

use crate::domain::entities::{Manifest, PathEntry};
use crate::domain::ports::{ArchiveSink, EntryMetadata, SourceEntry, SourceTree};
use crate::domain::value_objects::{ArchivePath, Category};
use crate::error::WheelResult;

use super::result::CategoryCounts;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Stage {
    Entries,
    PackageMetadata,
    WheelMetadata,
    Record,
    Closed,
}

impl Stage {
    fn next(self) -> Option<Stage> {
        match self {
            Stage::Entries => Some(Stage::PackageMetadata),
            Stage::PackageMetadata => Some(Stage::WheelMetadata),
            Stage::WheelMetadata => Some(Stage::Record),
            Stage::Record => Some(Stage::Closed),
            Stage::Closed => None,
        }
    }
}

pub(crate) struct BuildSession<'a, S: ArchiveSink, T: SourceTree> {
    sink: S,
    tree: &'a T,
    base_dir: &'a Path,
    manifest: &'a mut Manifest,
    stage: Stage,
    /// Last category written, to keep scripts → includes → files order
    last_category: Option<Category>,
    pub(crate) written: CategoryCounts,
    pub(crate) skipped: Vec<PathBuf>,
}

impl<'a, S: ArchiveSink, T: SourceTree> BuildSession<'a, S, T> {
    pub(crate) fn open(sink: S, tree: &'a T, base_dir: &'a Path, manifest: &'a mut Manifest) -> Self {
        Self {
            sink,
            tree,
            base_dir,
            manifest,
            stage: Stage::Entries,
            last_category: None,
            written: CategoryCounts::default(),
            skipped: Vec::new(),
        }
    }

    fn advance(&mut self, next: Stage) {
        debug_assert_eq!(self.stage.next(), Some(next), "stage out of order");
        trace!(from = ?self.stage, to = ?next, "build stage");
        self.stage = next;
    }

    /// Write every entry of one category
    pub(crate) fn write_category(
        &mut self,
        category: Category,
        entries: &[PathEntry],
    ) -> WheelResult<()> {
        debug_assert_eq!(self.stage, Stage::Entries);
        debug_assert!(
            self.last_category.map_or(true, |last| order(last) < order(category)),
            "categories out of order"
        );
        self.last_category = Some(category);

        if entries.is_empty() {
            debug!(%category, "no entries");
            return Ok(());
        }

        for entry in entries {
            let source = entry.resolve(self.base_dir);
            let Some(found) = self.tree.read_entry(&source)? else {
                debug!(path = %source.display(), "skipping absent source");
                self.skipped.push(source);
                continue;
            };

            match &found {
                SourceEntry::File { contents, meta } => {
                    self.sink.add_file(&entry.archive, contents, meta)?
                }
                SourceEntry::Symlink { target, meta } => {
                    self.sink.add_symlink(&entry.archive, target, meta)?
                }
            }
            let record = self.manifest.record(entry.archive.clone(), found.payload());
            debug!(
                %category,
                archive = %record.path,
                size = record.size.unwrap_or_default(),
                symlink = found.is_symlink(),
                "wrote entry"
            );
            self.written.bump(category);
        }
        Ok(())
    }

    pub(crate) fn write_package_metadata(&mut self, path: ArchivePath, content: &str) -> WheelResult<()> {
        self.advance(Stage::PackageMetadata);
        self.write_generated(path, content)
    }

    pub(crate) fn write_wheel_metadata(&mut self, path: ArchivePath, content: &str) -> WheelResult<()> {
        self.advance(Stage::WheelMetadata);
        self.write_generated(path, content)
    }

    /// Render the manifest and write it as the final entry
    pub(crate) fn write_record(&mut self) -> WheelResult<()> {
        self.advance(Stage::Record);
        let path = self.manifest.record_path().clone();
        let content = self.manifest.render();
        self.sink
            .add_file(&path, content.as_bytes(), &EntryMetadata::generated())?;
        debug!(archive = %path, rows = self.manifest.len(), "wrote manifest");
        Ok(())
    }

    pub(crate) fn close(mut self) -> WheelResult<(CategoryCounts, Vec<PathBuf>)> {
        self.advance(Stage::Closed);
        self.sink.finish()?;
        info!(
            entries = self.manifest.len(),
            skipped = self.skipped.len(),
            "archive closed"
        );
        Ok((self.written, self.skipped))
    }

    fn write_generated(&mut self, path: ArchivePath, content: &str) -> WheelResult<()> {
        self.sink
            .add_file(&path, content.as_bytes(), &EntryMetadata::generated())?;
        self.manifest.record(path, content.as_bytes());
        Ok(())
    }
}

fn order(category: Category) -> usize {
    Category::WRITE_ORDER
        .iter()
        .position(|c| *c == category)
        .unwrap_or(usize::MAX)
}
