//! Package identity - who the wheel is and where its metadata lives

use crate::domain::value_objects::{ArchivePath, BuildTag, CompatibilityTag};
use crate::error::{WheelError, WheelResult};

/// Extension of the output archive
pub const WHEEL_EXTENSION: &str = "whl";

/// Distribution name, version and tags of a wheel
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PackageIdentity {
    name: String,
    version: String,
    build_tag: Option<BuildTag>,
    tag: CompatibilityTag,
}

impl PackageIdentity {
    pub fn new(name: impl Into<String>, version: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            version: version.into(),
            build_tag: None,
            tag: CompatibilityTag::default(),
        }
    }

    pub fn with_build_tag(mut self, build_tag: impl Into<String>) -> Self {
        self.build_tag = Some(BuildTag::new(build_tag));
        self
    }

    pub fn with_tag(mut self, tag: CompatibilityTag) -> Self {
        self.tag = tag;
        self
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn version(&self) -> &str {
        &self.version
    }

    pub fn build_tag(&self) -> Option<&BuildTag> {
        self.build_tag.as_ref()
    }

    pub fn compatibility_tag(&self) -> &CompatibilityTag {
        &self.tag
    }

    /// `{name}-{version}[-{build}]-{python}-{abi}-{platform}.whl`
    pub fn filename(&self) -> String {
        let mut parts = vec![self.name.as_str(), self.version.as_str()];
        if let Some(build) = &self.build_tag {
            parts.push(build.as_str());
        }
        parts.extend([
            self.tag.python.as_str(),
            self.tag.abi.as_str(),
            self.tag.platform.as_str(),
        ]);
        format!("{}.{}", parts.join("-"), WHEEL_EXTENSION)
    }

    /// `{name}-{version}.dist-info`
    pub fn dist_info_dir(&self) -> String {
        format!("{}-{}.dist-info", self.name, self.version)
    }

    pub fn metadata_path(&self) -> WheelResult<ArchivePath> {
        self.dist_info_entry("METADATA")
    }

    pub fn wheel_path(&self) -> WheelResult<ArchivePath> {
        self.dist_info_entry("WHEEL")
    }

    pub fn record_path(&self) -> WheelResult<ArchivePath> {
        self.dist_info_entry("RECORD")
    }

    fn dist_info_entry(&self, name: &str) -> WheelResult<ArchivePath> {
        let dir = self.dist_info_dir();
        ArchivePath::under(&dir, name).map_err(|e| WheelError::InvalidArchivePath {
            path: format!("{}/{}", dir, name),
            reason: e.to_string(),
        })
    }
}
