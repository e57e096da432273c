//! Common test utilities for wheelsmith integration tests.
//!
//! - `PackageTree`: temp package directory with helpers to add files
//! - `read_wheel`: read a built archive back into memory

#![allow(dead_code)]

use std::collections::BTreeMap;
use std::fs;
use std::io::Read;
use std::path::{Path, PathBuf};

use tempfile::TempDir;

/// Temporary package tree plus an output directory
pub struct PackageTree {
    pub root: TempDir,
    pub out: TempDir,
}

impl PackageTree {
    pub fn new() -> Self {
        Self {
            root: tempfile::tempdir().unwrap(),
            out: tempfile::tempdir().unwrap(),
        }
    }

    pub fn path(&self, relative: &str) -> PathBuf {
        self.root.path().join(relative)
    }

    pub fn write(&self, relative: &str, content: &str) -> &Self {
        let path = self.path(relative);
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).unwrap();
        }
        fs::write(path, content).unwrap();
        self
    }

    #[cfg(unix)]
    pub fn symlink(&self, relative: &str, target: &str) -> &Self {
        let path = self.path(relative);
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).unwrap();
        }
        std::os::unix::fs::symlink(target, path).unwrap();
        self
    }
}

/// One entry read back from a wheel
#[derive(Debug, Clone)]
pub struct WheelEntry {
    pub payload: Vec<u8>,
    pub unix_mode: Option<u32>,
}

/// Read every entry of a wheel, keeping archive order in `names`
pub struct WheelContents {
    pub names: Vec<String>,
    pub entries: BTreeMap<String, WheelEntry>,
}

impl WheelContents {
    pub fn text(&self, name: &str) -> String {
        let entry = self
            .entries
            .get(name)
            .unwrap_or_else(|| panic!("missing entry {name}; have {:?}", self.names));
        String::from_utf8(entry.payload.clone()).unwrap()
    }
}

pub fn read_wheel(path: &Path) -> WheelContents {
    let file = fs::File::open(path).unwrap();
    let mut archive = zip::ZipArchive::new(file).unwrap();
    let mut names = Vec::new();
    let mut entries = BTreeMap::new();
    for i in 0..archive.len() {
        let mut entry = archive.by_index(i).unwrap();
        let mut payload = Vec::new();
        entry.read_to_end(&mut payload).unwrap();
        let name = entry.name().to_string();
        names.push(name.clone());
        entries.insert(
            name,
            WheelEntry {
                payload,
                unix_mode: entry.unix_mode(),
            },
        );
    }
    WheelContents { names, entries }
}
