use anyhow::Context;
use std::path::Path;

/// Built-in sample payload: the tooltip widget source the exporter was
/// originally written to package. Inert data as far as this tool is
/// concerned.
pub const SAMPLE_PAYLOAD: &str = include_str!("../../assets/tooltip.tsx");

/// Returns the payload text to export: the contents of `input` when given,
/// otherwise the built-in sample.
pub fn load_payload(input: Option<&Path>) -> anyhow::Result<String> {
    match input {
        Some(p) => std::fs::read_to_string(p)
            .with_context(|| format!("read payload from {}", p.display())),
        None => Ok(SAMPLE_PAYLOAD.to_string()),
    }
}
