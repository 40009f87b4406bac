//! Working-tree materialization planning
//!
//! Checking out a commit (and landing a merge result) follows the strict
//! clean-and-restore policy: every top-level working-tree entry except the
//! repository directory is removed, then the target tree map is written out.
//!
//! The migration is planned fully before anything touches the working tree,
//! so a blob load failure aborts the checkout with the tree untouched.
//! Checkout and the post-merge materialization share this planner, keeping
//! the restore policy consistent between the two.

use crate::areas::database::Database;
use crate::areas::workspace::Workspace;
use crate::artifacts::objects::object_id::ObjectId;
use bytes::Bytes;
use std::collections::BTreeMap;
use std::path::PathBuf;

/// Planned clean-and-restore of a tree map into the working tree
#[derive(Debug)]
pub struct Migration {
    /// Top-level entries to remove before materialization
    clean: Vec<PathBuf>,
    /// Files to write afterwards: path -> blob content
    writes: Vec<(String, Bytes)>,
}

impl Migration {
    /// Plan the materialization of a tree map
    ///
    /// Loads every referenced blob up front; a missing blob fails the plan
    /// before any working-tree change happens.
    pub fn plan(
        workspace: &Workspace,
        database: &Database,
        tree: &BTreeMap<String, ObjectId>,
    ) -> anyhow::Result<Self> {
        let clean = workspace.list_entries()?;

        let writes = tree
            .iter()
            .map(|(path, oid)| {
                let blob = database.load_blob(oid)?;
                Ok((path.clone(), blob.content().clone()))
            })
            .collect::<anyhow::Result<Vec<_>>>()?;

        Ok(Migration { clean, writes })
    }

    pub fn clean(&self) -> &[PathBuf] {
        &self.clean
    }

    pub fn writes(&self) -> &[(String, Bytes)] {
        &self.writes
    }
}
