//! Filter chain evaluated against every candidate point.
//!
//! A filter answers with a three-way [`FilterResult`] instead of a boolean so
//! that "skip this point" and "stop iterating" can never be confused.

mod chain;
mod predicate;

pub use chain::FilterChain;
pub use predicate::{Filter, FilterResult, Predicate};
