//! CLI argument definitions for depcalc.
//!
//! Uses `clap` derive macros. The parsed [`Cli`] is handed to
//! [`super::commands::dispatch`].

use std::path::PathBuf;

use clap::Parser;

#[derive(Parser, Debug)]
#[command(
    name = "depcalc",
    version,
    about = "Calculate upstream and downstream dependencies of modules",
    long_about = "depcalc reads a module map and a set of component descriptors and \
                  reports everything a module needs (upstream) and everything that \
                  needs it (downstream), as modules and as components."
)]
pub struct Cli {
    /// Module ids to resolve (component ids with --component)
    pub modules: Vec<String>,

    /// Also read whitespace-separated ids from standard input
    #[arg(long)]
    pub stdin: bool,

    /// Print the result as JSON instead of a tree
    #[arg(long)]
    pub json: bool,

    /// Root directory holding the module map and component descriptors
    #[arg(long, env = "DEPCALC_ROOT")]
    pub root: Option<PathBuf>,

    /// Treat inputs as component ids and resolve their modules
    #[arg(long)]
    pub component: bool,

    /// Fail when an input module is not in the module map
    #[arg(long)]
    pub strict: bool,

    /// Enable verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,
}

pub fn parse() -> Cli {
    Cli::parse()
}
