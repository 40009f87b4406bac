//! Structured error kinds for user-facing failures
//!
//! Engines bail with an `ErrorKind` wrapped in `anyhow::Error`; the command
//! façade prints a single line to stderr and exits non-zero. Infrastructure
//! failures (I/O, parsing) stay on plain `anyhow` with context.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum ErrorKind {
    #[error("not a minigit repository (no .minigit directory found)")]
    NotARepository,
    #[error("repository already initialized at {0}")]
    AlreadyInitialized(String),
    #[error("path '{0}' does not exist")]
    PathNotFound(String),
    #[error("nothing to commit, staging area is empty")]
    EmptyIndex,
    #[error("'{0}' is neither a branch nor a commit fingerprint")]
    UnknownTarget(String),
    #[error("branch '{0}' already exists")]
    BranchExists(String),
    #[error("no commits yet")]
    NoCommits,
    #[error("object {0} is missing from the object store")]
    MissingObject(String),
    #[error("object {0} is malformed: {1}")]
    MalformedObject(String, String),
    #[error("no common ancestor between the merged histories")]
    NoCommonAncestor,
    #[error("automatic merge failed: {0} conflicted path(s) left in the working tree")]
    MergeConflict(usize),
}
