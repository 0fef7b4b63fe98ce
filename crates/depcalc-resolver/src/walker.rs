//! Upstream/downstream traversal from a single module.
//!
//! Each visited module contributes candidates:
//!
//! 1. upstream only, the conditional modules it triggers
//! 2. `requires`/`optional` targets upstream, or the modules that list it downstream
//! 3. for rollups, every `use` entry (the rollup itself is never reported)
//! 4. downstream only, the rollups that alias a non-rollup module
//!
//! The walk keeps its own worklist and visited set, so cycles terminate.

use std::collections::HashSet;

use petgraph::graph::NodeIndex;
use petgraph::Direction;

use crate::graph::{EdgeKind, ModuleGraph};

/// Which way to walk the graph.
#[derive(Debug, Clone, Copy, Eq, PartialEq, Hash)]
pub enum Walk {
    /// Everything the start module needs.
    Upstream,
    /// Everything that needs the start module.
    Downstream,
}

impl Walk {
    /// Graph direction for the edges a module declares itself.
    fn declared(self) -> Direction {
        match self {
            Walk::Upstream => Direction::Outgoing,
            Walk::Downstream => Direction::Incoming,
        }
    }
}

/// Computes the transitive module set reachable from one start module.
pub struct DependencyWalker<'g> {
    graph: &'g ModuleGraph,
}

impl<'g> DependencyWalker<'g> {
    pub fn new(graph: &'g ModuleGraph) -> Self {
        Self { graph }
    }

    /// Walk from `start` and return every module reached, rollups excluded.
    ///
    /// A start id with no definition yields an empty set. Undefined ids reached
    /// along the way are reported as-is but not expanded further.
    pub fn walk(&self, start: &str, walk: Walk) -> HashSet<&'g str> {
        let mut modules = HashSet::new();

        let Some(start) = self.graph.find(start) else {
            return modules;
        };
        if !self.graph.node(start).defined {
            return modules;
        }

        let mut visited: HashSet<NodeIndex> = HashSet::new();
        let mut stack = vec![start];

        while let Some(idx) = stack.pop() {
            if !visited.insert(idx) {
                continue;
            }

            let node = self.graph.node(idx);
            if !node.defined {
                modules.insert(node.id.as_str());
                continue;
            }
            if !node.rollup {
                modules.insert(node.id.as_str());
            }

            stack.extend(
                self.expand(idx, walk)
                    .into_iter()
                    .filter(|next| !visited.contains(next)),
            );
        }

        modules
    }

    /// Candidates discovered from a single defined module.
    fn expand(&self, idx: NodeIndex, walk: Walk) -> Vec<NodeIndex> {
        let graph = self.graph;
        let declared = walk.declared();

        let mut next: Vec<NodeIndex> = graph
            .neighbors(idx, EdgeKind::Requires, declared)
            .chain(graph.neighbors(idx, EdgeKind::Optional, declared))
            .collect();

        if walk == Walk::Upstream {
            next.extend(graph.neighbors(idx, EdgeKind::Condition, Direction::Outgoing));
        }

        if graph.node(idx).rollup {
            next.extend(graph.neighbors(idx, EdgeKind::Use, Direction::Outgoing));
        } else if walk == Walk::Downstream {
            next.extend(graph.neighbors(idx, EdgeKind::Use, Direction::Incoming));
        }

        next
    }
}
