//! Module graph construction and edge lookup.
//!
//! Every id that appears anywhere in the module map gets a node, including
//! ids that are only referenced and never defined. Edges point from a module
//! to what it pulls in, so "upstream" is outgoing and "downstream" is
//! incoming.

use std::collections::HashMap;

use depcalc_core::module::ModuleMap;
use petgraph::graph::{DiGraph, NodeIndex};
use petgraph::visit::EdgeRef;
use petgraph::Direction;

/// A node in the module graph.
#[derive(Debug, Clone, Eq, PartialEq)]
pub struct ModuleNode {
    pub id: String,
    /// Whether the module map has an entry for this id.
    pub defined: bool,
    /// Whether the definition has a non-empty `use` list.
    pub rollup: bool,
}

/// Edge label in the module graph.
#[derive(Debug, Clone, Copy, Eq, PartialEq, Hash)]
pub enum EdgeKind {
    /// `from.requires` contains `to`.
    Requires,
    /// `from.optional` contains `to`.
    Optional,
    /// `from` is a rollup whose `use` list contains `to`.
    Use,
    /// Some module's condition names `to` with trigger `from`.
    Condition,
}

/// A derived graph of every relation a module map declares.
///
/// Built once; read-only afterwards.
pub struct ModuleGraph {
    graph: DiGraph<ModuleNode, EdgeKind>,
    index: HashMap<String, NodeIndex>,
}

impl ModuleGraph {
    pub fn new(modules: &ModuleMap) -> Self {
        let mut graph = DiGraph::new();
        let mut index = HashMap::new();

        for (id, def) in modules {
            let idx = graph.add_node(ModuleNode {
                id: id.clone(),
                defined: true,
                rollup: def.is_rollup(),
            });
            index.insert(id.clone(), idx);
        }

        let mut built = Self { graph, index };

        for (id, def) in modules {
            let from = built.index[id];
            for dep in &def.requires {
                let to = built.node_for(dep);
                built.graph.add_edge(from, to, EdgeKind::Requires);
            }
            for dep in &def.optional {
                let to = built.node_for(dep);
                built.graph.add_edge(from, to, EdgeKind::Optional);
            }
            for child in &def.uses {
                let to = built.node_for(child);
                built.graph.add_edge(from, to, EdgeKind::Use);
            }
            if let Some(cond) = &def.condition {
                let trigger = built.node_for(&cond.trigger);
                let name = built.node_for(&cond.name);
                built.graph.add_edge(trigger, name, EdgeKind::Condition);
            }
        }

        for (child, owners) in built.ambiguous_rollups() {
            tracing::warn!(
                "Module `{child}` is listed by more than one rollup: {}",
                owners.join(", ")
            );
        }

        built
    }

    /// Get or create the node for a referenced id.
    fn node_for(&mut self, id: &str) -> NodeIndex {
        if let Some(&idx) = self.index.get(id) {
            return idx;
        }
        let idx = self.graph.add_node(ModuleNode {
            id: id.to_string(),
            defined: false,
            rollup: false,
        });
        self.index.insert(id.to_string(), idx);
        idx
    }

    /// Whether the module map has an entry for `id`. Ids that are only
    /// referenced do not count.
    pub fn contains(&self, id: &str) -> bool {
        self.find(id).is_some_and(|idx| self.graph[idx].defined)
    }

    /// Look up a node by module id (defined or merely referenced).
    pub fn find(&self, id: &str) -> Option<NodeIndex> {
        self.index.get(id).copied()
    }

    /// Get the node data for an index.
    pub fn node(&self, idx: NodeIndex) -> &ModuleNode {
        &self.graph[idx]
    }

    /// Neighbours of `idx` over edges of `kind` in the given direction.
    ///
    /// `Outgoing` yields what `idx` pulls in; `Incoming` yields what pulls
    /// `idx` in.
    pub fn neighbors(
        &self,
        idx: NodeIndex,
        kind: EdgeKind,
        direction: Direction,
    ) -> impl Iterator<Item = NodeIndex> + '_ {
        self.graph
            .edges_directed(idx, direction)
            .filter(move |e| *e.weight() == kind)
            .map(move |e| match direction {
                Direction::Outgoing => e.target(),
                Direction::Incoming => e.source(),
            })
    }

    /// Every rollup whose `use` list contains `id`, in module-map order.
    pub fn rollup_owners(&self, id: &str) -> Vec<&str> {
        let Some(idx) = self.find(id) else {
            return Vec::new();
        };
        let mut owners: Vec<&str> = self
            .neighbors(idx, EdgeKind::Use, Direction::Incoming)
            .map(|owner| self.graph[owner].id.as_str())
            .collect();
        owners.sort_unstable();
        owners.dedup();
        owners
    }

    /// Modules listed by more than one rollup, with all of their owners.
    pub fn ambiguous_rollups(&self) -> Vec<(&str, Vec<&str>)> {
        let mut ambiguous: Vec<(&str, Vec<&str>)> = self
            .graph
            .node_indices()
            .map(|idx| self.graph[idx].id.as_str())
            .map(|id| (id, self.rollup_owners(id)))
            .filter(|(_, owners)| owners.len() > 1)
            .collect();
        ambiguous.sort_unstable();
        ambiguous
    }

    /// Number of distinct ids, defined or referenced.
    pub fn len(&self) -> usize {
        self.graph.node_count()
    }

    pub fn is_empty(&self) -> bool {
        self.graph.node_count() == 0
    }
}

impl Default for ModuleGraph {
    fn default() -> Self {
        Self::new(&ModuleMap::new())
    }
}
