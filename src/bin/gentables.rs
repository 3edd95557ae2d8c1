//! Offline generator for the dual marching cubes lookup tables. Writes the
//! Rust source that is compiled into the library as `src/tables.rs`.

use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use log::info;

use dualmc::gentables;

#[derive(Parser, Debug)]
#[command(name = "gentables")]
#[command(about = "Derive the dual marching cubes lookup tables and emit them as Rust source")]
struct Cli {
    /// Output file; writes to stdout when omitted
    #[arg(short, long)]
    out: Option<PathBuf>,
}

fn main() -> Result<()> {
    env_logger::init();
    let cli = Cli::parse();

    match cli.out {
        Some(path) => {
            let file =
                File::create(&path).with_context(|| format!("failed to create {:?}", path))?;
            let mut out = BufWriter::new(file);
            gentables::write_tables_source(&mut out)?;
            out.flush()?;
            info!("wrote tables to {:?}", path);
        }
        None => {
            let stdout = io::stdout();
            gentables::write_tables_source(&mut stdout.lock())?;
        }
    }

    Ok(())
}
