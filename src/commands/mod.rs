//! Command implementations

pub mod lookup;
pub mod simple;

pub use lookup::{LookupResult, TargetsResult, list_targets, lookup_word};
pub use simple::run_simple;
