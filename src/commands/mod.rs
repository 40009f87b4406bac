//! Command implementations
//!
//! Every user-facing operation is implemented as an `impl Repository` block
//! under `porcelain`, keeping precondition checks and status reporting next
//! to the engine calls they wrap.

pub mod porcelain;
