//! Dependency calculation engine: module graph indexing, upstream/downstream
//! walks with rollup and conditional-module handling, and component lookup.
//!
//! ```
//! use depcalc_core::module::{ModuleDefinition, ModuleMap};
//! use depcalc_resolver::Resolver;
//!
//! let mut modules = ModuleMap::new();
//! modules.insert(
//!     "a".to_string(),
//!     ModuleDefinition {
//!         requires: vec!["b".to_string()],
//!         ..Default::default()
//!     },
//! );
//! modules.insert("b".to_string(), ModuleDefinition::default());
//!
//! let tree = Resolver::new(modules).resolve("b").unwrap();
//! assert_eq!(tree.upstream.modules, vec!["b"]);
//! assert_eq!(tree.downstream.modules, vec!["a", "b"]);
//! ```

pub mod components;
pub mod graph;
pub mod resolver;
pub mod walker;

pub use resolver::{DependencyTree, Dependents, ResolveOptions, Resolver, Seeds};
