//! Zip Archive Sink
//!
//! Implements the ArchiveSink port on top of `zip::ZipWriter`. Regular files
//! are deflated; symlinks are stored with `S_IFLNK` mode bits so installers
//! recreate them as links.

use std::fs::File;
use std::io::{Seek, Write};
use std::path::Path;
use std::time::SystemTime;

use chrono::{DateTime, Datelike, Local, Timelike};
use zip::write::SimpleFileOptions;
use zip::{CompressionMethod, ZipWriter};

use crate::domain::ports::{ArchiveSink, EntryMetadata, SYMLINK_MODE};
use crate::domain::value_objects::ArchivePath;
use crate::error::WheelResult;

/// Zip container writer
pub struct ZipSink<W: Write + Seek> {
    writer: ZipWriter<W>,
}

impl ZipSink<File> {
    /// Create (truncating) the archive file at `path`
    pub fn create(path: &Path) -> WheelResult<Self> {
        let file = File::create(path)?;
        Ok(Self::new(file))
    }
}

impl<W: Write + Seek> ZipSink<W> {
    pub fn new(inner: W) -> Self {
        Self {
            writer: ZipWriter::new(inner),
        }
    }

    /// Finish the archive and hand back the underlying writer
    pub fn into_inner(self) -> WheelResult<W> {
        Ok(self.writer.finish()?)
    }
}

impl<W: Write + Seek> ArchiveSink for ZipSink<W> {
    fn add_file(
        &mut self,
        path: &ArchivePath,
        payload: &[u8],
        meta: &EntryMetadata,
    ) -> WheelResult<()> {
        let options = entry_options(meta, CompressionMethod::Deflated).unix_permissions(meta.mode);
        self.writer.start_file(path.as_str(), options)?;
        self.writer.write_all(payload)?;
        Ok(())
    }

    fn add_symlink(
        &mut self,
        path: &ArchivePath,
        target: &str,
        meta: &EntryMetadata,
    ) -> WheelResult<()> {
        let options = entry_options(meta, CompressionMethod::Stored).unix_permissions(SYMLINK_MODE);
        self.writer.add_symlink(path.as_str(), target, options)?;
        Ok(())
    }

    fn finish(self) -> WheelResult<()> {
        self.into_inner().map(|_| ())
    }
}

fn entry_options(meta: &EntryMetadata, method: CompressionMethod) -> SimpleFileOptions {
    SimpleFileOptions::default()
        .compression_method(method)
        .last_modified_time(zip_timestamp(meta.modified))
}

/// Convert a modification time to a DOS timestamp.
///
/// Times outside 1980..=2107 fall back to 1980-01-01 00:00:00.
fn zip_timestamp(modified: Option<SystemTime>) -> zip::DateTime {
    let Some(modified) = modified else {
        return zip::DateTime::default();
    };
    let local: DateTime<Local> = modified.into();
    let (Ok(year), Ok(month), Ok(day), Ok(hour), Ok(minute), Ok(second)) = (
        u16::try_from(local.year()),
        u8::try_from(local.month()),
        u8::try_from(local.day()),
        u8::try_from(local.hour()),
        u8::try_from(local.minute()),
        u8::try_from(local.second()),
    ) else {
        return zip::DateTime::default();
    };
    zip::DateTime::from_date_and_time(year, month, day, hour, minute, second).unwrap_or_default()
}
