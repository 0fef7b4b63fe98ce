//! High-level operations wiring the CLI to the loaders, the resolver and
//! the reporter.

pub mod ops_resolve;
pub mod report;
