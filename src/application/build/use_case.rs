//! Wheel Builder
//!
//! Holds a package identity and its three path-mapping lists, then writes
//! them into one archive:
//! 1. Open (truncate) the output container
//! 2. Write scripts, includes, then generic files
//! 3. Write `METADATA`, then `WHEEL`
//! 4. Write `RECORD` last, covering every entry before it
//! 5. Close the container
//!
//! Stale mappings and duplicate archive paths are rejected before step 1.
//! `write()` consumes the builder, so a closed build cannot be written again.

use std::collections::HashSet;
use std::path::{Path, PathBuf};

use tracing::{debug, info};

use crate::config::Config;
use crate::domain::entities::{Manifest, PackageIdentity, PackageMetadata, PathEntry, RawPathEntry};
use crate::domain::ports::{ArchiveSink, SourceTree};
use crate::domain::services::{render_metadata, render_wheel, PathMapper};
use crate::domain::value_objects::{ArchivePath, Category, Generator};
use crate::error::{WheelError, WheelResult};
use crate::infrastructure::{LocalSourceTree, ZipSink};

use super::result::BuildSummary;
use super::session::BuildSession;

/// Raw and normalized entries of one category
#[derive(Debug, Clone, Default)]
struct MappedPaths {
    raw: Vec<RawPathEntry>,
    entries: Vec<PathEntry>,
    /// Normalized against a base directory that has since changed
    stale: bool,
}

/// In-memory model of a wheel being assembled
#[derive(Debug, Clone)]
pub struct WheelBuilder {
    identity: PackageIdentity,
    metadata: PackageMetadata,
    generator: Generator,
    purelib: bool,
    output_dir: PathBuf,
    mapper: Option<PathMapper>,
    scripts: MappedPaths,
    includes: MappedPaths,
    files: MappedPaths,
    manifest: Manifest,
}

impl WheelBuilder {
    pub fn new(identity: PackageIdentity, generator: Generator) -> WheelResult<Self> {
        let manifest = Manifest::new(identity.record_path()?);
        Ok(Self {
            identity,
            metadata: PackageMetadata::default(),
            generator,
            purelib: false,
            output_dir: PathBuf::from("."),
            mapper: None,
            scripts: MappedPaths::default(),
            includes: MappedPaths::default(),
            files: MappedPaths::default(),
            manifest,
        })
    }

    /// Populate a builder from a loaded build description
    pub fn from_config(config: &Config, generator: Generator) -> WheelResult<Self> {
        let mut builder = Self::new(config.identity(), generator)?
            .with_metadata(config.metadata())
            .with_purelib(config.package.noarch)
            .with_output_dir(config.output_dir());

        if let Some(base_dir) = &config.paths.base_dir {
            builder.set_base_dir(base_dir)?;
        }
        for category in Category::WRITE_ORDER {
            let raw = config.paths.entries(category);
            if !raw.is_empty() {
                builder.set_paths(category, raw.iter().cloned())?;
            }
        }
        Ok(builder)
    }

    pub fn with_metadata(mut self, metadata: PackageMetadata) -> Self {
        self.metadata = metadata;
        self
    }

    /// Mark the package platform-independent (noarch)
    pub fn with_purelib(mut self, purelib: bool) -> Self {
        self.purelib = purelib;
        self
    }

    pub fn with_output_dir(mut self, dir: impl Into<PathBuf>) -> Self {
        self.output_dir = dir.into();
        self
    }

    pub fn identity(&self) -> &PackageIdentity {
        &self.identity
    }

    pub fn filename(&self) -> String {
        self.identity.filename()
    }

    pub fn output_path(&self) -> PathBuf {
        self.output_dir.join(self.filename())
    }

    pub fn base_dir(&self) -> Option<&Path> {
        self.mapper.as_ref().map(|m| m.base_dir())
    }

    pub fn manifest(&self) -> &Manifest {
        &self.manifest
    }

    /// Set the base directory sources are resolved against.
    ///
    /// Mappings set earlier become stale until [`renormalize`](Self::renormalize).
    pub fn set_base_dir(&mut self, dir: impl AsRef<Path>) -> WheelResult<()> {
        let mapper = PathMapper::new(Some(dir.as_ref()))?;
        if self.mapper.as_ref() != Some(&mapper) {
            for category in Category::WRITE_ORDER {
                let slot = self.slot_mut(category);
                slot.stale = !slot.raw.is_empty();
            }
        }
        self.mapper = Some(mapper);
        Ok(())
    }

    /// Normalize and store the entries of one category
    pub fn set_paths<I, E>(&mut self, category: Category, raw: I) -> WheelResult<&[PathEntry]>
    where
        I: IntoIterator<Item = E>,
        E: Into<RawPathEntry>,
    {
        let raw: Vec<RawPathEntry> = raw.into_iter().map(Into::into).collect();
        let mapper = self.mapper.as_ref().ok_or(WheelError::MissingBaseDir)?;
        let entries = mapper.normalize(category, &raw)?;
        debug!(%category, count = entries.len(), "normalized path mappings");

        let slot = self.slot_mut(category);
        *slot = MappedPaths {
            raw,
            entries,
            stale: false,
        };
        Ok(&slot.entries)
    }

    pub fn set_scripts<I, E>(&mut self, raw: I) -> WheelResult<&[PathEntry]>
    where
        I: IntoIterator<Item = E>,
        E: Into<RawPathEntry>,
    {
        self.set_paths(Category::Scripts, raw)
    }

    pub fn set_includes<I, E>(&mut self, raw: I) -> WheelResult<&[PathEntry]>
    where
        I: IntoIterator<Item = E>,
        E: Into<RawPathEntry>,
    {
        self.set_paths(Category::Includes, raw)
    }

    pub fn set_files<I, E>(&mut self, raw: I) -> WheelResult<&[PathEntry]>
    where
        I: IntoIterator<Item = E>,
        E: Into<RawPathEntry>,
    {
        self.set_paths(Category::Files, raw)
    }

    /// Normalized entries of one category
    pub fn paths(&self, category: Category) -> &[PathEntry] {
        &self.slot(category).entries
    }

    /// Recompute every category from its raw input against the current base
    pub fn renormalize(&mut self) -> WheelResult<()> {
        for category in Category::WRITE_ORDER {
            let raw = self.slot(category).raw.clone();
            if raw.is_empty() {
                continue;
            }
            self.set_paths(category, raw)?;
        }
        Ok(())
    }

    /// Write the wheel into `output_dir`, overwriting any existing file
    pub fn write(self) -> WheelResult<BuildSummary> {
        self.preflight()?;
        let output = self.output_path();
        let sink = ZipSink::create(&output)?;
        let mut summary = self.write_with(sink, &LocalSourceTree::new())?;
        info!(path = %output.display(), entries = summary.entry_count(), "wheel written");
        summary.output = Some(output);
        Ok(summary)
    }

    /// Write the wheel into an arbitrary sink, reading sources from `tree`
    pub fn write_with<S, T>(mut self, sink: S, tree: &T) -> WheelResult<BuildSummary>
    where
        S: ArchiveSink,
        T: SourceTree,
    {
        self.preflight()?;

        let metadata_path = self.identity.metadata_path()?;
        let wheel_path = self.identity.wheel_path()?;
        let metadata = render_metadata(&self.identity, &self.metadata);
        let wheel = render_wheel(&self.identity, &self.generator, self.purelib);
        let base_dir = self
            .mapper
            .as_ref()
            .map(|m| m.base_dir().to_path_buf())
            .unwrap_or_else(|| PathBuf::from("."));

        let (written, skipped) = {
            let mut session = BuildSession::open(sink, tree, &base_dir, &mut self.manifest);
            session.write_category(Category::Scripts, &self.scripts.entries)?;
            session.write_category(Category::Includes, &self.includes.entries)?;
            session.write_category(Category::Files, &self.files.entries)?;
            session.write_package_metadata(metadata_path, &metadata)?;
            session.write_wheel_metadata(wheel_path, &wheel)?;
            session.write_record()?;
            session.close()?
        };

        let mut summary = BuildSummary::new(self.identity.filename());
        summary.written = written;
        summary.skipped = skipped;
        summary.records = self.manifest.into_records();
        Ok(summary)
    }

    /// Input checks that must pass before the container is opened
    fn preflight(&self) -> WheelResult<()> {
        self.ensure_fresh()?;
        self.ensure_unique_archive_paths()
    }

    /// Every entry, across categories and the dist-info files, needs its
    /// own archive path
    fn ensure_unique_archive_paths(&self) -> WheelResult<()> {
        let generated = [
            self.identity.metadata_path()?,
            self.identity.wheel_path()?,
            self.identity.record_path()?,
        ];
        let mut seen: HashSet<&str> = generated.iter().map(ArchivePath::as_str).collect();
        for category in Category::WRITE_ORDER {
            for (index, entry) in self.slot(category).entries.iter().enumerate() {
                if !seen.insert(entry.archive.as_str()) {
                    return Err(WheelError::DuplicateArchivePath {
                        category,
                        index,
                        path: entry.archive.to_string(),
                    });
                }
            }
        }
        Ok(())
    }

    fn ensure_fresh(&self) -> WheelResult<()> {
        if Category::WRITE_ORDER
            .iter()
            .any(|category| self.slot(*category).stale)
        {
            return Err(WheelError::StalePathMappings);
        }
        Ok(())
    }

    fn slot(&self, category: Category) -> &MappedPaths {
        match category {
            Category::Scripts => &self.scripts,
            Category::Includes => &self.includes,
            Category::Files => &self.files,
        }
    }

    fn slot_mut(&mut self, category: Category) -> &mut MappedPaths {
        match category {
            Category::Scripts => &mut self.scripts,
            Category::Includes => &mut self.includes,
            Category::Files => &mut self.files,
        }
    }
}
