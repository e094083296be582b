use crate::services::{output, validate};
use std::path::Path;

pub fn handle_validate(json: bool, file: &Path) -> anyhow::Result<()> {
    let report = validate::validate_export(file)?;
    output::print_one(json, report, |r| {
        format!(
            "export valid: {} ({} payload bytes, {} modules)",
            r.name, r.component_bytes, r.module_count
        )
    })
}
