use std::io::{self, Write};

use anyhow::{Context as _, Result};

use periodic_table::ElementStore;

use crate::cli::DumpArgs;
use crate::display::Context;
use crate::io::create_output;

pub fn run_dump(store: &ElementStore, args: &DumpArgs, ctx: Context) -> Result<()> {
    let out = create_output(args.output.as_deref())?;
    periodic_table::io::write(out, store).context("Failed to write fixture")?;

    if ctx.interactive {
        if let Some(path) = &args.output {
            let _ = writeln!(
                io::stderr(),
                "   ✓ Wrote {} records to {}",
                store.len(),
                path.display()
            );
        }
    }
    Ok(())
}
