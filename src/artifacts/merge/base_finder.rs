//! Merge base lookup
//!
//! The three-way merge needs a base commit shared by both inputs. The finder
//! works over ancestry sets:
//!
//! 1. Collect every ancestor of `ours` (breadth-first over parent lists,
//!    including the starting commit itself).
//! 2. Walk breadth-first from `theirs`; the first visited commit that is an
//!    ancestor of `ours` is the merge base.
//!
//! The walk visits each commit at most once, so it terminates on any graph,
//! merge diamonds included. For linear or simply branched histories the
//! result is the lowest common ancestor; degenerate many-merge topologies
//! may yield a nearer ancestor on the `theirs` side, which is accepted.
//!
//! The finder is generic over a commit-loader closure, so it works against
//! the on-disk database and against in-memory graphs in tests alike.

use crate::artifacts::objects::object_id::ObjectId;
use std::collections::{HashSet, VecDeque};

/// Minimal commit view for graph traversal: identity and parents only
#[derive(Debug, Clone, Eq, PartialEq)]
pub struct SlimCommit {
    pub oid: ObjectId,
    pub parents: Vec<ObjectId>,
}

/// Finds merge bases between commits
///
/// # Type Parameters
///
/// * `CommitLoaderFn` - loads the `SlimCommit` for a fingerprint; fails when
///   the fingerprint does not name a stored commit.
pub struct MergeBaseFinder<CommitLoaderFn>
where
    CommitLoaderFn: Fn(&ObjectId) -> anyhow::Result<SlimCommit>,
{
    commit_loader: CommitLoaderFn,
}

impl<CommitLoaderFn> MergeBaseFinder<CommitLoaderFn>
where
    CommitLoaderFn: Fn(&ObjectId) -> anyhow::Result<SlimCommit>,
{
    pub fn new(commit_loader: CommitLoaderFn) -> Self {
        Self { commit_loader }
    }

    /// Collect every ancestor of a commit, the commit itself included
    ///
    /// Breadth-first reverse traversal over parent lists; repeated visits
    /// are skipped, so shared ancestry is walked once.
    pub fn ancestors(&self, start: &ObjectId) -> anyhow::Result<HashSet<ObjectId>> {
        let mut visited = HashSet::new();
        let mut queue = VecDeque::from([start.clone()]);

        while let Some(commit_id) = queue.pop_front() {
            if !visited.insert(commit_id.clone()) {
                continue;
            }

            let commit = (self.commit_loader)(&commit_id)?;
            for parent in commit.parents {
                if !visited.contains(&parent) {
                    queue.push_back(parent);
                }
            }
        }

        Ok(visited)
    }

    /// Find the merge base of two commits
    ///
    /// # Returns
    ///
    /// `None` when the histories share no commit (disconnected roots).
    pub fn merge_base(
        &self,
        ours: &ObjectId,
        theirs: &ObjectId,
    ) -> anyhow::Result<Option<ObjectId>> {
        let our_ancestors = self.ancestors(ours)?;

        let mut visited = HashSet::new();
        let mut queue = VecDeque::from([theirs.clone()]);

        while let Some(commit_id) = queue.pop_front() {
            if !visited.insert(commit_id.clone()) {
                continue;
            }

            if our_ancestors.contains(&commit_id) {
                return Ok(Some(commit_id));
            }

            let commit = (self.commit_loader)(&commit_id)?;
            for parent in commit.parents {
                if !visited.contains(&parent) {
                    queue.push_back(parent);
                }
            }
        }

        Ok(None)
    }
}
