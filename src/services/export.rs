use crate::domain::models::ExportRecord;
use anyhow::Context;
use serde::Serialize;
use std::path::{Path, PathBuf};

/// Derives the record name from a label by trimming and lowercasing it.
/// The name doubles as the export file's base name, so it must be
/// non-empty.
pub fn derive_name(label: &str) -> anyhow::Result<String> {
    let name = label.trim().to_lowercase();
    if name.is_empty() {
        anyhow::bail!("label must not be empty");
    }
    Ok(name)
}

/// Builds the record once; it is never mutated afterwards. An empty
/// modules list becomes the `[""]` placeholder.
pub fn build_record(component: String, name: String, modules: Vec<String>) -> ExportRecord {
    let modules = if modules.is_empty() {
        vec![String::new()]
    } else {
        modules
    };
    ExportRecord {
        component,
        name,
        modules,
    }
}

/// Serializes the record with 4-space indentation. serde_json handles the
/// escaping of quotes, backslashes, newlines and control characters in the
/// payload; non-ASCII text passes through as UTF-8.
pub fn serialize_record(record: &ExportRecord) -> anyhow::Result<String> {
    let mut buf = Vec::new();
    let fmt = serde_json::ser::PrettyFormatter::with_indent(b"    ");
    let mut ser = serde_json::Serializer::with_formatter(&mut buf, fmt);
    record.serialize(&mut ser)?;
    Ok(String::from_utf8(buf)?)
}

pub fn export_path(out_dir: &Path, name: &str) -> PathBuf {
    out_dir.join(format!("{}.json", name))
}

/// Writes the already-serialized text to the export file, truncating any
/// previous export. Callers pass the same string they printed so the file
/// is byte-identical to stdout.
pub fn write_export(path: &Path, serialized: &str) -> anyhow::Result<()> {
    std::fs::write(path, serialized)
        .with_context(|| format!("write export to {}", path.display()))
}
