//! Output Rendering
//!
//! Text and JSON views of a build plan and a build summary.

use std::path::Path;

use serde_json::json;

use crate::application::{BuildSummary, WheelBuilder};
use crate::config::ConfigWarning;
use crate::domain::value_objects::Category;

/// Output format for rendering
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputFormat {
    /// Human-readable text output
    #[default]
    Text,
    /// JSON output for scripting
    Json,
}

impl OutputFormat {
    pub fn from_json_flag(json: bool) -> Self {
        if json {
            OutputFormat::Json
        } else {
            OutputFormat::Text
        }
    }
}

/// Render the normalized path plan of a builder
pub fn render_plan(builder: &WheelBuilder, format: OutputFormat) -> String {
    match format {
        OutputFormat::Json => {
            let mut categories = serde_json::Map::new();
            for category in Category::WRITE_ORDER {
                categories.insert(
                    category.to_string(),
                    json!(builder.paths(category)),
                );
            }
            json!({
                "event": "plan",
                "filename": builder.filename(),
                "output": builder.output_path(),
                "base_dir": builder.base_dir(),
                "paths": categories,
            })
            .to_string()
        }
        OutputFormat::Text => {
            let mut out = format!("Plan: {}\n", builder.filename());
            if let Some(base) = builder.base_dir() {
                out.push_str(&format!("Base: {}\n", base.display()));
            }
            for category in Category::WRITE_ORDER {
                let entries = builder.paths(category);
                out.push_str(&format!("{} ({})\n", category, entries.len()));
                for entry in entries {
                    out.push_str(&format!(
                        "  {} -> {}\n",
                        entry.source.display(),
                        entry.archive
                    ));
                }
            }
            out
        }
    }
}

/// Render the summary of a completed build
pub fn render_summary(summary: &BuildSummary, format: OutputFormat) -> String {
    match format {
        OutputFormat::Json => {
            let mut value = json!(summary);
            value["event"] = json!("built");
            value.to_string()
        }
        OutputFormat::Text => {
            let mut out = String::new();
            match &summary.output {
                Some(path) => out.push_str(&format!("✓ Built {}\n", path.display())),
                None => out.push_str(&format!("✓ Built {}\n", summary.filename)),
            }
            out.push_str(&format!(
                "  scripts: {}, includes: {}, files: {}\n",
                summary.written.scripts, summary.written.includes, summary.written.files
            ));
            out.push_str(&format!("  RECORD rows: {}\n", summary.entry_count()));
            if !summary.skipped.is_empty() {
                out.push_str(&format!("  skipped {} absent source(s):\n", summary.skipped.len()));
                for path in &summary.skipped {
                    out.push_str(&format!("    {}\n", path.display()));
                }
            }
            out
        }
    }
}

/// One line per unknown config key
pub fn render_config_warnings(warnings: &[ConfigWarning]) -> Vec<String> {
    warnings
        .iter()
        .map(|w| {
            let location = location(&w.file, w.line);
            match &w.suggestion {
                Some(s) => format!("unknown config key '{}' in {} (did you mean '{}'?)", w.key, location, s),
                None => format!("unknown config key '{}' in {}", w.key, location),
            }
        })
        .collect()
}

fn location(file: &Path, line: Option<usize>) -> String {
    match line {
        Some(line) => format!("{}:{}", file.display(), line),
        None => file.display().to_string(),
    }
}
