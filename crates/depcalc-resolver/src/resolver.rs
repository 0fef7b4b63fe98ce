//! Seed normalization, per-seed walks in both directions, and assembly of
//! the final [`DependencyTree`].

use std::collections::BTreeSet;

use depcalc_core::component::ComponentMap;
use depcalc_core::module::ModuleMap;
use depcalc_util::errors::DepcalcError;
use serde::{Deserialize, Serialize};

use crate::components::ComponentIndex;
use crate::graph::ModuleGraph;
use crate::walker::{DependencyWalker, Walk};

/// Modules and components on one side of the seeds.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Dependents {
    /// Sorted, deduplicated component ids.
    pub components: Vec<String>,
    /// Sorted, deduplicated module ids.
    pub modules: Vec<String>,
}

/// The result of a single [`Resolver::resolve`] call.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DependencyTree {
    /// Seed modules in caller order (after component expansion).
    pub source: Vec<String>,
    pub upstream: Dependents,
    pub downstream: Dependents,
}

/// One seed id or a list of them.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Seeds {
    One(String),
    Many(Vec<String>),
}

impl Seeds {
    /// Flatten to a list, dropping empty ids.
    fn into_vec(self) -> Vec<String> {
        let ids = match self {
            Seeds::One(id) => vec![id],
            Seeds::Many(ids) => ids,
        };
        ids.into_iter().filter(|id| !id.is_empty()).collect()
    }
}

impl Default for Seeds {
    fn default() -> Self {
        Seeds::Many(Vec::new())
    }
}

impl From<&str> for Seeds {
    fn from(id: &str) -> Self {
        Seeds::One(id.to_string())
    }
}

impl From<String> for Seeds {
    fn from(id: String) -> Self {
        Seeds::One(id)
    }
}

impl From<Vec<String>> for Seeds {
    fn from(ids: Vec<String>) -> Self {
        Seeds::Many(ids)
    }
}

impl From<Vec<&str>> for Seeds {
    fn from(ids: Vec<&str>) -> Self {
        Seeds::Many(ids.into_iter().map(str::to_string).collect())
    }
}

impl From<&[&str]> for Seeds {
    fn from(ids: &[&str]) -> Self {
        Seeds::Many(ids.iter().map(|s| s.to_string()).collect())
    }
}

impl<const N: usize> From<[&str; N]> for Seeds {
    fn from(ids: [&str; N]) -> Self {
        Seeds::Many(ids.iter().map(|s| s.to_string()).collect())
    }
}

impl From<Option<Seeds>> for Seeds {
    fn from(seeds: Option<Seeds>) -> Self {
        seeds.unwrap_or_default()
    }
}

/// Resolver behaviour switches, fixed at construction.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ResolveOptions {
    /// Interpret seeds as component ids and replace each with its modules.
    pub component_source: bool,
}

/// Computes upstream and downstream closures over a fixed module map.
///
/// All indices are built up front; `resolve` takes `&self` and shares no
/// mutable state between calls, so a resolver can serve many threads.
pub struct Resolver {
    graph: ModuleGraph,
    components: Option<ComponentIndex>,
    options: ResolveOptions,
}

impl Resolver {
    pub fn new(modules: ModuleMap) -> Self {
        Self {
            graph: ModuleGraph::new(&modules),
            components: None,
            options: ResolveOptions::default(),
        }
    }

    /// Attach a component map; without one, component fields stay empty.
    pub fn with_components(mut self, components: ComponentMap) -> Self {
        self.components = Some(ComponentIndex::new(components));
        self
    }

    pub fn with_options(mut self, options: ResolveOptions) -> Self {
        self.options = options;
        self
    }

    pub fn graph(&self) -> &ModuleGraph {
        &self.graph
    }

    pub fn options(&self) -> ResolveOptions {
        self.options
    }

    /// Calculate the dependency tree for one or more seed modules.
    ///
    /// Fails only when no seeds are given. Seeds missing from the module map
    /// are not an error; they simply contribute nothing.
    pub fn resolve(&self, seeds: impl Into<Seeds>) -> Result<DependencyTree, DepcalcError> {
        let seeds = seeds.into().into_vec();
        if seeds.is_empty() {
            return Err(DepcalcError::InvalidArgument {
                message: "No modules specified".to_string(),
            });
        }

        let source = if self.options.component_source {
            self.expand_components(&seeds)
        } else {
            seeds
        };

        let upstream = self.collect(&source, Walk::Upstream);
        let downstream = self.collect(&source, Walk::Downstream);

        tracing::debug!(
            "Resolved {} seed(s): {} upstream, {} downstream",
            source.len(),
            upstream.len(),
            downstream.len()
        );

        Ok(DependencyTree {
            upstream: self.dependents(upstream),
            downstream: self.dependents(downstream),
            source,
        })
    }

    /// Replace each component id with its module list; unknown ids drop out.
    fn expand_components(&self, seeds: &[String]) -> Vec<String> {
        let Some(index) = &self.components else {
            return Vec::new();
        };
        seeds
            .iter()
            .filter_map(|component| index.modules_of(component))
            .flatten()
            .cloned()
            .collect()
    }

    fn collect(&self, source: &[String], walk: Walk) -> BTreeSet<&str> {
        let walker = DependencyWalker::new(&self.graph);
        source
            .iter()
            .flat_map(|seed| walker.walk(seed, walk))
            .collect()
    }

    fn dependents(&self, modules: BTreeSet<&str>) -> Dependents {
        let components = match &self.components {
            Some(index) => index.lookup(modules.iter().copied()).into_iter().collect(),
            None => Vec::new(),
        };
        Dependents {
            components,
            modules: modules.into_iter().map(str::to_string).collect(),
        }
    }
}
