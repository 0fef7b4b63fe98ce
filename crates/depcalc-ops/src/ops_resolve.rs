//! Operation: calculate and print the dependency tree for a set of modules.

use std::path::{Path, PathBuf};

use depcalc_core::component::discover_component_map;
use depcalc_core::config::RootConfig;
use depcalc_core::module::load_module_map;
use depcalc_resolver::{DependencyTree, ResolveOptions, Resolver};
use depcalc_util::errors::{DepcalcError, DepcalcResult};

use crate::report::{self, Format};

/// Options for `depcalc`.
#[derive(Debug, Default)]
pub struct CalcOptions {
    /// Module-map root directory.
    pub root: PathBuf,
    /// Seed module (or component) ids.
    pub modules: Vec<String>,
    /// Treat `modules` as component ids.
    pub component: bool,
    /// Fail on seeds missing from the module map instead of warning.
    pub strict: bool,
    pub format: Format,
}

/// Load the module map and component descriptors under `root`.
pub fn load_resolver(root: &Path, options: ResolveOptions) -> DepcalcResult<Resolver> {
    let config = RootConfig::load(root)?;
    let modules = load_module_map(&config.module_map_path(root))?;
    let components = discover_component_map(root, &config.components)?;

    tracing::debug!(
        "Loaded {} modules and {} components from {}",
        modules.len(),
        components.len(),
        root.display()
    );

    Ok(Resolver::new(modules)
        .with_components(components)
        .with_options(options))
}

/// Resolve the seeds in `opts` against an already-built resolver.
pub fn calculate_with(resolver: &Resolver, opts: &CalcOptions) -> DepcalcResult<DependencyTree> {
    let tree = resolver.resolve(opts.modules.clone())?;

    if tree.source.is_empty() {
        return Err(DepcalcError::InvalidArgument {
            message: "No modules specified".to_string(),
        }
        .into());
    }

    for id in &tree.source {
        if resolver.graph().contains(id) {
            continue;
        }
        if opts.strict {
            return Err(DepcalcError::UnknownModule { id: id.clone() }.into());
        }
        tracing::warn!("Module `{id}` is not in the module map; it contributes nothing");
    }

    Ok(tree)
}

/// Load everything under `opts.root` and resolve.
pub fn calculate(opts: &CalcOptions) -> DepcalcResult<DependencyTree> {
    if opts.modules.is_empty() {
        return Err(DepcalcError::InvalidArgument {
            message: "No modules specified".to_string(),
        }
        .into());
    }

    let resolver = load_resolver(
        &opts.root,
        ResolveOptions {
            component_source: opts.component,
        },
    )?;
    calculate_with(&resolver, opts)
}

/// Resolve and print the result to stdout.
pub fn resolve(opts: &CalcOptions) -> DepcalcResult<()> {
    let tree = calculate(opts)?;
    println!("{}", report::render(&tree, opts.format)?);
    Ok(())
}
