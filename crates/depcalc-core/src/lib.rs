//! Core data types for depcalc.
//!
//! This crate defines the documents the resolver consumes: module maps,
//! component maps and the descriptors they are reduced from, plus the
//! per-root configuration that says where to find them.
//!
//! This crate is intentionally free of graph logic; see `depcalc-resolver`.

pub mod component;
pub mod config;
pub mod module;
