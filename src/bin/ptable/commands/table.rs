use std::io::{self, Write};

use anyhow::Result;

use periodic_table::{ElementStore, PeriodicTable};

use crate::display::print_periodic_table;

pub fn run_table(store: &ElementStore) -> Result<()> {
    let table = PeriodicTable::build(store);

    let mut out = io::stdout().lock();
    print_periodic_table(&mut out, &table)?;
    out.flush()?;
    Ok(())
}
