use clap::{Parser, Subcommand};
use std::path::PathBuf;

pub const DEFAULT_LABEL: &str = "Tooltip";

#[derive(Parser, Debug)]
#[command(name = "widgetpack", version, about = "Component source export CLI")]
pub struct Cli {
    #[arg(long, global = true, help = "Output machine-readable JSON")]
    pub json: bool,
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Package a component source into <name>.json and print it
    Export {
        #[arg(default_value = DEFAULT_LABEL, help = "Component label; lowercased to form the record name")]
        label: String,
        #[arg(
            long,
            help = "Read the component payload from this file instead of the built-in sample"
        )]
        input: Option<PathBuf>,
        #[arg(long = "module", help = "Modules entry (repeatable, kept in order)")]
        modules: Vec<String>,
        #[arg(long, default_value = ".", help = "Directory receiving <name>.json")]
        out_dir: PathBuf,
    },
    /// Materialize the component source from an export file as <name>.tsx
    Unpack {
        file: PathBuf,
        #[arg(long, default_value = ".", help = "Directory receiving <name>.tsx")]
        out_dir: PathBuf,
    },
    /// Check that a previously produced export has the expected shape
    Validate { file: PathBuf },
}
