//! Rendering of the generated dist-info entries (METADATA, WHEEL)

use crate::domain::entities::{PackageIdentity, PackageMetadata};
use crate::domain::value_objects::Generator;

pub const METADATA_VERSION: &str = "2.1";
pub const WHEEL_VERSION: &str = "1.0";

/// Core metadata: version, name and version lines, then optional fields
pub fn render_metadata(identity: &PackageIdentity, metadata: &PackageMetadata) -> String {
    let mut lines = vec![
        format!("Metadata-Version: {}", METADATA_VERSION),
        format!("Name: {}", identity.name()),
        format!("Version: {}", identity.version()),
    ];
    if let Some(summary) = &metadata.summary {
        lines.push(format!("Summary: {}", summary));
    }
    if let Some(license) = &metadata.license {
        lines.push(format!("License: {}", license));
    }
    if let Some(requires_python) = &metadata.requires_python {
        lines.push(format!("Requires-Python: {}", requires_python));
    }
    for requirement in &metadata.requires_dist {
        lines.push(format!("Requires-Dist: {}", requirement));
    }
    join_lines(lines)
}

/// Wheel format metadata
pub fn render_wheel(identity: &PackageIdentity, generator: &Generator, purelib: bool) -> String {
    let mut lines = vec![
        format!("Wheel-Version: {}", WHEEL_VERSION),
        format!("Generator: {}", generator),
        format!("Root-Is-Purelib: {}", purelib),
        format!("Tag: {}", identity.compatibility_tag()),
    ];
    if let Some(build) = identity.build_tag() {
        lines.push(format!("Build: {}", build));
    }
    join_lines(lines)
}

fn join_lines(lines: Vec<String>) -> String {
    let mut out = lines.join("\n");
    out.push('\n');
    out
}
