//! Merge algorithms
//!
//! - `base_finder`: ancestry sets and merge-base (lowest common ancestor)
//!   lookup over the commit graph
//! - `reconcile`: three-way tree-map reconciliation with conflict detection

pub mod base_finder;
pub mod reconcile;
