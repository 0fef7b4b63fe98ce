//! Shared utilities for depcalc.
//!
//! This crate provides the cross-cutting pieces used by every other depcalc
//! crate: the unified error type and a couple of filesystem helpers.

pub mod errors;
pub mod fs;
