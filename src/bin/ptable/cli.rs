use std::path::PathBuf;

use clap::{Args, Parser, Subcommand, ValueEnum};

use periodic_table::View;

#[derive(Parser)]
#[command(
    name = "ptable",
    about = "Periodic table element data and layout",
    version,
    author,
    before_help = crate::display::banner_for_help(),
    propagate_version = true
)]
pub struct Cli {
    #[command(flatten)]
    pub global: GlobalOptions,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand)]
pub enum Command {
    /// Show one element by symbol or atomic number
    #[command(visible_alias = "s")]
    Show(ShowArgs),

    /// List the members of a category
    #[command(visible_alias = "l")]
    List(ListArgs),

    /// List the members of a group by number or label (e.g. 17, 7A, 8B)
    #[command(visible_alias = "g")]
    Group(GroupArgs),

    /// Print the periodic table with the f-block rows underneath
    #[command(visible_alias = "t")]
    Table,

    /// Write the stored records as a JSON fixture
    Dump(DumpArgs),
}

/// Data source and output options shared by all commands.
#[derive(Args)]
pub struct GlobalOptions {
    /// Custom chemistry data (TOML file)
    #[arg(long, value_name = "FILE", global = true)]
    pub data: Option<PathBuf>,

    /// Load element records from a JSON fixture instead of the built-in set
    #[arg(long, value_name = "FILE", global = true)]
    pub fixture: Option<PathBuf>,

    /// Skip group assignment (keep groups as stored)
    #[arg(long, global = true)]
    pub no_groups: bool,

    /// Print CSS class names instead of readable labels
    #[arg(long, global = true)]
    pub css: bool,

    /// Increase log verbosity (-v info, -vv debug)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Suppress the banner (for scripting)
    #[arg(short, long, global = true)]
    pub quiet: bool,
}

#[derive(Args)]
pub struct ShowArgs {
    /// Chemical symbol (case-sensitive) or atomic number
    #[arg(value_name = "ELEMENT")]
    pub element: String,
}

#[derive(Args)]
pub struct ListArgs {
    /// Category to list
    #[arg(value_name = "CATEGORY")]
    pub category: CategoryArg,

    /// Include the deuterium and tritium records
    #[arg(long)]
    pub isotopes: bool,
}

#[derive(Args)]
pub struct GroupArgs {
    /// Group number (1-18) or label such as 8B
    #[arg(value_name = "GROUP")]
    pub group: String,
}

#[derive(Args)]
pub struct DumpArgs {
    /// Output file (stdout if omitted)
    #[arg(short, long, value_name = "FILE")]
    pub output: Option<PathBuf>,
}

#[derive(Clone, Copy, ValueEnum)]
pub enum CategoryArg {
    Normal,
    Metals,
    Nonmetals,
    Metalloids,
    Halogens,
    NobleGases,
    AlkaliMetals,
    AlkaliEarths,
    TransitionMetals,
    BasicMetals,
    Lanthanides,
    Actinides,
}

impl From<CategoryArg> for View {
    fn from(arg: CategoryArg) -> Self {
        match arg {
            CategoryArg::Normal => View::Normal,
            CategoryArg::Metals => View::Metals,
            CategoryArg::Nonmetals => View::Nonmetals,
            CategoryArg::Metalloids => View::Metalloids,
            CategoryArg::Halogens => View::Halogens,
            CategoryArg::NobleGases => View::NobleGases,
            CategoryArg::AlkaliMetals => View::AlkaliMetals,
            CategoryArg::AlkaliEarths => View::AlkaliEarths,
            CategoryArg::TransitionMetals => View::TransitionMetals,
            CategoryArg::BasicMetals => View::BasicMetals,
            CategoryArg::Lanthanides => View::Lanthanides,
            CategoryArg::Actinides => View::Actinides,
        }
    }
}

pub fn parse() -> Cli {
    Cli::parse()
}
