mod dump;
mod query;
mod table;

use dump::run_dump;
use query::{run_group, run_list, run_show};
use table::run_table;

use anyhow::{Context as _, Result};
use log::info;

use crate::cli::{Command, GlobalOptions};
use crate::config::build_config;
use crate::display::Context;

pub fn dispatch(command: Command, global: &GlobalOptions, ctx: Context) -> Result<()> {
    let config = build_config(global)?;
    let store = periodic_table::open(&config).context("Failed to load element records")?;
    info!("{} records ready", store.len());

    let labels = config.labels.labels();
    match command {
        Command::Show(args) => run_show(&store, &args, labels),
        Command::List(args) => run_list(&store, &args, labels),
        Command::Group(args) => run_group(&store, &args, labels),
        Command::Table => run_table(&store),
        Command::Dump(args) => run_dump(&store, &args, ctx),
    }
}
