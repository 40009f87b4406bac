//! Data structures and algorithms
//!
//! - `checkout`: working-tree materialization planning
//! - `log`: commit history traversal
//! - `merge`: merge-base lookup and three-way reconciliation
//! - `objects`: stored object types (blob, commit) and fingerprints

pub mod checkout;
pub mod log;
pub mod merge;
pub mod objects;
