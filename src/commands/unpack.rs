use crate::services::{output, unpack};
use std::path::Path;

pub fn handle_unpack(json: bool, file: &Path, out_dir: &Path) -> anyhow::Result<()> {
    let report = unpack::unpack_export(file, out_dir)?;
    output::print_one(json, report, |r| {
        format!("component {} created at {}", r.name, r.path)
    })
}
