//! Archive Implementations
//!
//! Concrete implementations of the ArchiveSink port.

mod zip_sink;

pub use zip_sink::ZipSink;
