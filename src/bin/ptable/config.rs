use anyhow::Result;

use periodic_table::{Config, LabelStyle};

use crate::cli::GlobalOptions;
use crate::io::read_text;

pub fn build_config(opts: &GlobalOptions) -> Result<Config> {
    Ok(Config {
        chemistry: opts
            .data
            .as_deref()
            .map(|p| read_text(p, "chemistry data"))
            .transpose()?,
        fixture: opts
            .fixture
            .as_deref()
            .map(|p| read_text(p, "fixture"))
            .transpose()?,
        assign_groups: !opts.no_groups,
        labels: if opts.css {
            LabelStyle::Css
        } else {
            LabelStyle::Human
        },
    })
}
