use crate::services::{export, payload};
use std::path::Path;

/// The whole export pipeline: construct the record, serialize once, print
/// it, then write the same bytes to `<out_dir>/<name>.json`.
pub fn handle_export(
    label: &str,
    input: Option<&Path>,
    modules: &[String],
    out_dir: &Path,
) -> anyhow::Result<()> {
    let name = export::derive_name(label)?;
    let component = payload::load_payload(input)?;
    let record = export::build_record(component, name, modules.to_vec());

    let serialized = export::serialize_record(&record)?;
    println!("{}", serialized);

    let path = export::export_path(out_dir, &record.name);
    export::write_export(&path, &serialized)?;
    Ok(())
}
