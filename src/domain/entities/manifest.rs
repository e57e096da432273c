//! Manifest entity - the RECORD trailer of a wheel
//!
//! Every entry written to the archive appends one record. The RECORD entry
//! itself is registered first, at construction, with empty digest and size.
//! Rendering walks the records newest-first, so the RECORD row ends up last
//! and the most recently written entry comes first.

use serde::Serialize;

use crate::domain::value_objects::{ArchivePath, RecordDigest};

/// One RECORD row
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ManifestRecord {
    pub path: ArchivePath,
    pub digest: Option<RecordDigest>,
    pub size: Option<u64>,
}

impl ManifestRecord {
    /// Record for a written payload
    pub fn for_payload(path: ArchivePath, payload: &[u8]) -> Self {
        Self {
            path,
            digest: Some(RecordDigest::from_bytes(payload)),
            size: Some(payload.len() as u64),
        }
    }

    /// Record with empty digest and size
    pub fn unhashed(path: ArchivePath) -> Self {
        Self {
            path,
            digest: None,
            size: None,
        }
    }

    /// `path,digest,size` with CSV quoting of the path
    pub fn render(&self) -> String {
        let digest = self.digest.as_ref().map(|d| d.as_str()).unwrap_or("");
        let size = self.size.map(|s| s.to_string()).unwrap_or_default();
        format!("{},{},{}", csv_field(self.path.as_str()), digest, size)
    }
}

fn csv_field(value: &str) -> String {
    if value.contains([',', '"', '\n', '\r']) {
        format!("\"{}\"", value.replace('"', "\"\""))
    } else {
        value.to_string()
    }
}

/// Append-only list of RECORD rows
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Manifest {
    records: Vec<ManifestRecord>,
}

impl Manifest {
    /// Create a manifest whose first record is its own placeholder row
    pub fn new(record_path: ArchivePath) -> Self {
        Self {
            records: vec![ManifestRecord::unhashed(record_path)],
        }
    }

    /// Path of the RECORD entry itself
    pub fn record_path(&self) -> &ArchivePath {
        &self.records[0].path
    }

    /// Append a record for a written payload and return it
    pub fn record(&mut self, path: ArchivePath, payload: &[u8]) -> &ManifestRecord {
        self.records.push(ManifestRecord::for_payload(path, payload));
        &self.records[self.records.len() - 1]
    }

    /// Records in append order, placeholder first
    pub fn records(&self) -> &[ManifestRecord] {
        &self.records
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// RECORD file content, newest record first, one row per line
    pub fn render(&self) -> String {
        let mut out = String::new();
        for record in self.records.iter().rev() {
            out.push_str(&record.render());
            out.push('\n');
        }
        out
    }

    pub fn into_records(self) -> Vec<ManifestRecord> {
        self.records
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn path(s: &str) -> ArchivePath {
        ArchivePath::new(s).unwrap()
    }

    #[test]
    fn new_manifest_has_placeholder_only() {
        let manifest = Manifest::new(path("demo-1.0.dist-info/RECORD"));
        assert_eq!(manifest.len(), 1);
        assert_eq!(manifest.records()[0].digest, None);
        assert_eq!(manifest.render(), "demo-1.0.dist-info/RECORD,,\n");
    }

    #[test]
    fn record_appends_digest_and_size() {
        let mut manifest = Manifest::new(path("demo-1.0.dist-info/RECORD"));
        let record = manifest.record(path("README.md"), b"hello");
        assert_eq!(record.size, Some(5));
        assert_eq!(
            record.render(),
            "README.md,sha256=LPJNul-wow4m6DsqxbninhsWHlwfp0JecwQzYpOLmCQ,5"
        );
    }

    #[test]
    fn render_is_newest_first_with_record_last() {
        let mut manifest = Manifest::new(path("demo-1.0.dist-info/RECORD"));
        manifest.record(path("a.txt"), b"");
        manifest.record(path("b.txt"), b"");

        let rendered = manifest.render();
        let first_column: Vec<&str> = rendered
            .lines()
            .map(|line| line.split(',').next().unwrap())
            .collect();
        assert_eq!(first_column, ["b.txt", "a.txt", "demo-1.0.dist-info/RECORD"]);
    }

    #[test]
    fn render_snapshot() {
        let mut manifest = Manifest::new(path("demo-1.0.dist-info/RECORD"));
        manifest.record(path("README.md"), b"hello");
        manifest.record(path("demo-1.0.dist-info/METADATA"), b"");
        insta::assert_snapshot!(manifest.render().trim_end(), @r###"
        demo-1.0.dist-info/METADATA,sha256=47DEQpj8HBSa-_TImW-5JCeuQeRkm5NMpJWZG3hSuFU,0
        README.md,sha256=LPJNul-wow4m6DsqxbninhsWHlwfp0JecwQzYpOLmCQ,5
        demo-1.0.dist-info/RECORD,,
        "###);
    }

    #[test]
    fn path_with_comma_is_quoted() {
        let record = ManifestRecord::unhashed(path("docs/a,b \"c\".txt"));
        assert_eq!(record.render(), "\"docs/a,b \"\"c\"\".txt\",,");
    }
}
