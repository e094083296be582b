use crate::domain::models::{ExportRecord, UnpackReport};
use anyhow::Context;
use std::path::{Path, PathBuf};

pub fn component_path(out_dir: &Path, name: &str) -> PathBuf {
    out_dir.join(format!("{}.tsx", name))
}

/// Reads an export record and materializes its payload as
/// `<out_dir>/<name>.tsx`, the inverse of the export pipeline. The payload
/// is written byte-for-byte; nothing is parsed as code.
pub fn unpack_export(file: &Path, out_dir: &Path) -> anyhow::Result<UnpackReport> {
    let raw = std::fs::read_to_string(file)
        .with_context(|| format!("read export {}", file.display()))?;
    let record: ExportRecord = serde_json::from_str(&raw)
        .with_context(|| format!("parse export {}", file.display()))?;
    if record.name.is_empty() {
        anyhow::bail!("name must not be empty");
    }

    let path = component_path(out_dir, &record.name);
    std::fs::write(&path, &record.component)
        .with_context(|| format!("write component to {}", path.display()))?;

    Ok(UnpackReport {
        file: file.display().to_string(),
        name: record.name,
        path: path.display().to_string(),
        component_bytes: record.component.len(),
    })
}

#[cfg(test)]
mod tests {
    use super::{component_path, unpack_export};
    use crate::services::export::{build_record, serialize_record};
    use std::fs;
    use std::path::Path;
    use tempfile::TempDir;

    #[test]
    fn restores_the_exported_payload_exactly() {
        let dir = TempDir::new().unwrap();
        let payload = "const s = \"quoted \\\" and \\\\ slashed\";\n{ braces: [1] }\n";
        let record = build_record(payload.to_string(), "widget".into(), vec![]);
        let export = dir.path().join("widget.json");
        fs::write(&export, serialize_record(&record).unwrap()).unwrap();

        let report = unpack_export(&export, dir.path()).unwrap();
        assert_eq!(report.name, "widget");
        assert_eq!(report.component_bytes, payload.len());
        let restored = fs::read_to_string(dir.path().join("widget.tsx")).unwrap();
        assert_eq!(restored, payload);
    }

    #[test]
    fn rejects_record_with_empty_name() {
        let dir = TempDir::new().unwrap();
        let export = dir.path().join("bad.json");
        fs::write(
            &export,
            r#"{ "component": "x", "name": "", "modules": [""] }"#,
        )
        .unwrap();
        let err = unpack_export(&export, dir.path()).unwrap_err().to_string();
        assert!(err.contains("name must not be empty"));
    }

    #[test]
    fn rejects_file_that_is_not_an_export_record() {
        let dir = TempDir::new().unwrap();
        let export = dir.path().join("bad.json");
        fs::write(&export, r#"{ "name": "x" }"#).unwrap();
        let err = unpack_export(&export, dir.path()).unwrap_err().to_string();
        assert!(err.contains("parse export"));
    }

    #[test]
    fn component_path_appends_tsx_extension() {
        assert_eq!(
            component_path(Path::new("."), "tooltip"),
            Path::new("./tooltip.tsx")
        );
    }
}
