use crate::areas::repository::Repository;
use crate::artifacts::checkout::migration::Migration;
use crate::artifacts::merge::base_finder::{MergeBaseFinder, SlimCommit};
use crate::artifacts::merge::reconcile::{MergeOutcome, reconcile, render_conflict};
use crate::artifacts::objects::object_id::ObjectId;
use crate::errors::ErrorKind;
use bytes::Bytes;
use std::io::Write;

impl Repository {
    /// Three-way merge of a branch into the current HEAD
    ///
    /// Reconciles the two tips against their merge base. A clean merge
    /// produces a commit with both tips as parents (ours first) and
    /// materializes the merged tree; a conflicted merge produces no commit
    /// and leaves the working tree holding the merged files plus
    /// conflict-marked files for the user to resolve via `add` + `commit`.
    pub async fn merge(&mut self, branch: &str) -> anyhow::Result<()> {
        self.ensure_initialized()?;

        if !self.refs().branch_exists(branch) {
            return Err(ErrorKind::UnknownTarget(branch.to_string()).into());
        }
        let theirs_tip = self
            .refs()
            .branch_read(branch)?
            .ok_or(ErrorKind::NoCommits)?;

        let head = self.refs().read_head()?;
        let ours_tip = head.commit().cloned().ok_or(ErrorKind::NoCommits)?;

        if ours_tip == theirs_tip {
            writeln!(self.writer(), "Already up to date.")?;
            return Ok(());
        }

        let database = self.database();
        let finder = MergeBaseFinder::new(|oid: &ObjectId| {
            let commit = database.load_commit(oid)?;
            Ok(SlimCommit {
                oid: oid.clone(),
                parents: commit.parents().to_vec(),
            })
        });
        let base_oid = finder
            .merge_base(&ours_tip, &theirs_tip)?
            .ok_or(ErrorKind::NoCommonAncestor)?;

        if base_oid == theirs_tip {
            writeln!(self.writer(), "Already up to date.")?;
            return Ok(());
        }

        let base = database.load_commit(&base_oid)?;
        let ours = database.load_commit(&ours_tip)?;
        let theirs = database.load_commit(&theirs_tip)?;

        let outcome = reconcile(base.tree(), ours.tree(), theirs.tree());

        // non-conflicted results land in the working tree either way
        let migration = Migration::plan(self.workspace(), self.database(), &outcome.tree)?;
        self.workspace().apply_migration(&migration)?;

        if outcome.is_clean() {
            let message = format!("Merge branch '{}' into {}", branch, head.location());
            let commit_id =
                self.write_commit(vec![ours_tip, theirs_tip], outcome.tree, message.clone())?;

            self.clear_index().await?;

            writeln!(self.writer(), "[{}] {}", commit_id.to_short_oid(), message)?;

            Ok(())
        } else {
            self.materialize_conflicts(&outcome)?;
            self.clear_index().await?;

            Err(ErrorKind::MergeConflict(outcome.conflicts.len()).into())
        }
    }

    fn materialize_conflicts(&self, outcome: &MergeOutcome) -> anyhow::Result<()> {
        for conflict in &outcome.conflicts {
            let ours_content = self.load_side(conflict.ours.as_ref())?;
            let theirs_content = self.load_side(conflict.theirs.as_ref())?;

            let marked = render_conflict(ours_content.as_ref(), theirs_content.as_ref());
            self.workspace().write_file(&conflict.path, &marked)?;

            eprintln!("Conflict in {}; merge markers added", conflict.path);
        }

        Ok(())
    }

    fn load_side(&self, side: Option<&ObjectId>) -> anyhow::Result<Option<Bytes>> {
        side.map(|oid| Ok(self.database().load_blob(oid)?.content().clone()))
            .transpose()
    }

    async fn clear_index(&self) -> anyhow::Result<()> {
        let index = self.index();
        let mut index = index.lock().await;

        index.rehydrate()?;
        index.clear();
        index.write_updates()
    }
}
