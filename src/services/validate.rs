use crate::domain::models::ValidateReport;
use anyhow::Context;
use std::path::Path;

/// Parses an export file and checks its shape: a top-level object whose
/// `component` is a string, `name` is a non-empty lowercase string, and
/// `modules` is an array of strings. The payload itself is opaque and is
/// not inspected beyond its size.
pub fn validate_export(file: &Path) -> anyhow::Result<ValidateReport> {
    let raw = std::fs::read_to_string(file)
        .with_context(|| format!("read export {}", file.display()))?;
    let value: serde_json::Value = serde_json::from_str(&raw)
        .with_context(|| format!("parse export {}", file.display()))?;
    let obj = value
        .as_object()
        .ok_or_else(|| anyhow::anyhow!("top-level value must be an object"))?;

    let component = obj
        .get("component")
        .and_then(|v| v.as_str())
        .ok_or_else(|| anyhow::anyhow!("missing or non-string field: component"))?;
    let name = obj
        .get("name")
        .and_then(|v| v.as_str())
        .ok_or_else(|| anyhow::anyhow!("missing or non-string field: name"))?;
    if name.is_empty() {
        anyhow::bail!("name must not be empty");
    }
    if name != name.to_lowercase() {
        anyhow::bail!("name must be lowercase: {}", name);
    }
    let modules = obj
        .get("modules")
        .and_then(|v| v.as_array())
        .ok_or_else(|| anyhow::anyhow!("missing or non-array field: modules"))?;
    if modules.iter().any(|m| !m.is_string()) {
        anyhow::bail!("modules entries must all be strings");
    }

    Ok(ValidateReport {
        file: file.display().to_string(),
        name: name.to_string(),
        component_bytes: component.len(),
        module_count: modules.len(),
    })
}
