use std::fs;
use std::io::{self, Write};
use std::path::PathBuf;

use anyhow::{Context, Result};
use bitgenerators_core::Checkpoint;
use clap::Args;

/// Verify and print a checkpoint
#[derive(Args, Debug)]
pub struct InspectArgs {
    /// Checkpoint file
    pub path: PathBuf,
}

pub fn run(args: InspectArgs) -> Result<()> {
    let stdout = io::stdout();
    inspect(&args, &mut stdout.lock())
}

fn inspect(args: &InspectArgs, out: &mut impl Write) -> Result<()> {
    let json = fs::read_to_string(&args.path)
        .with_context(|| format!("reading checkpoint {}", args.path.display()))?;
    let checkpoint = Checkpoint::from_json(&json)?;
    checkpoint
        .verify()
        .with_context(|| format!("verifying checkpoint {}", args.path.display()))?;

    let state = &checkpoint.state;
    writeln!(out, "algorithm:    {}", checkpoint.algorithm)?;
    writeln!(out, "version:      {}", checkpoint.format_version)?;
    for (i, word) in state.words.iter().enumerate() {
        writeln!(out, "s{}:           {:#018x}", i, word)?;
    }
    writeln!(out, "has_cached:   {}", state.has_cached)?;
    writeln!(out, "cached_value: {:#010x}", state.cached_value)?;
    writeln!(out, "checksum:     {} (ok)", checkpoint.checksum)?;
    Ok(())
}
