//! First-parent history traversal
//!
//! `log` walks from HEAD's commit along the first-parent chain: merge
//! commits contribute only the branch that was merged into. The walk stops
//! at a parentless commit, or silently at the first commit that cannot be
//! read (a truncated object store still yields the readable prefix of
//! history).

use crate::areas::database::Database;
use crate::artifacts::objects::commit::Commit;
use crate::artifacts::objects::object_id::ObjectId;

/// Iterator over the first-parent chain starting at a commit
pub struct RevList<'d> {
    database: &'d Database,
    next: Option<ObjectId>,
}

impl<'d> RevList<'d> {
    pub fn new(database: &'d Database, start: ObjectId) -> Self {
        RevList {
            database,
            next: Some(start),
        }
    }
}

impl Iterator for RevList<'_> {
    type Item = (ObjectId, Commit);

    fn next(&mut self) -> Option<Self::Item> {
        let oid = self.next.take()?;
        let commit = self.database.load_commit(&oid).ok()?;

        self.next = commit.first_parent().cloned();

        Some((oid, commit))
    }
}
