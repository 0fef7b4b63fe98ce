//! Handler for `depcalc [MODULES]...`.

use std::io::Read;

use miette::Result;

use depcalc_core::config::discover_root;
use depcalc_ops::ops_resolve::{self, CalcOptions};
use depcalc_ops::report::Format;
use depcalc_util::errors::DepcalcError;

use crate::cli::Cli;

pub fn exec(cli: Cli) -> Result<()> {
    let mut modules = cli.modules;
    if cli.stdin {
        let mut input = String::new();
        std::io::stdin()
            .read_to_string(&mut input)
            .map_err(DepcalcError::Io)?;
        modules.extend(split_ids(&input));
    }

    if modules.is_empty() {
        return Err(DepcalcError::InvalidArgument {
            message: "No modules specified".to_string(),
        }
        .into());
    }

    let cwd = std::env::current_dir().map_err(DepcalcError::Io)?;
    let root = discover_root(cli.root.as_deref(), &cwd)?;
    tracing::debug!("Using module-map root {}", root.display());

    let opts = CalcOptions {
        root,
        modules,
        component: cli.component,
        strict: cli.strict,
        format: if cli.json { Format::Json } else { Format::Tree },
    };

    ops_resolve::resolve(&opts)
}

/// Split stdin content into ids on any whitespace.
fn split_ids(input: &str) -> impl Iterator<Item = String> + '_ {
    input.split_whitespace().map(str::to_string)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn split_on_newlines_and_spaces() {
        let ids: Vec<String> = split_ids("yql widget\n  scrollview\n\n").collect();
        assert_eq!(ids, vec!["yql", "widget", "scrollview"]);
    }

    #[test]
    fn split_empty_input() {
        assert_eq!(split_ids(" \n\t").count(), 0);
    }
}
