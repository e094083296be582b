use clap::Parser;

mod cli;
mod commands;
mod domain;
mod services;

use cli::{Cli, Commands};

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    match &cli.command {
        Commands::Export {
            label,
            input,
            modules,
            out_dir,
        } => commands::handle_export(label, input.as_deref(), modules, out_dir),
        Commands::Unpack { file, out_dir } => commands::handle_unpack(cli.json, file, out_dir),
        Commands::Validate { file } => commands::handle_validate(cli.json, file),
    }
}
