use crate::areas::repository::Repository;
use crate::artifacts::checkout::migration::Migration;
use crate::artifacts::objects::object_id::ObjectId;
use crate::errors::ErrorKind;
use std::io::Write;

/// How a checkout target string resolved
enum Target {
    Branch { name: String, tip: ObjectId },
    Commit(ObjectId),
}

impl Repository {
    /// Switch HEAD to a branch or a commit fingerprint and restore the
    /// working tree to that commit's snapshot
    ///
    /// Resolution order: an existing branch name wins; otherwise the target
    /// must be a full-length fingerprint of a stored commit. The working
    /// tree is cleaned before materialization (untracked files are removed);
    /// the index is not touched, staging stays user-driven via `add`.
    pub async fn checkout(&mut self, target: &str) -> anyhow::Result<()> {
        self.ensure_initialized()?;

        let resolved = self.resolve_target(target)?;
        let oid = match &resolved {
            Target::Branch { tip, .. } => tip.clone(),
            Target::Commit(oid) => oid.clone(),
        };

        let commit = self.database().load_commit(&oid)?;
        let migration = Migration::plan(self.workspace(), self.database(), commit.tree())?;
        self.workspace().apply_migration(&migration)?;

        match resolved {
            Target::Branch { name, .. } => {
                self.refs().set_head_attached(&name)?;
                writeln!(self.writer(), "Switched to branch '{}'", name)?;
            }
            Target::Commit(oid) => {
                self.refs().set_head_detached(&oid)?;
                writeln!(
                    self.writer(),
                    "Switched to commit '{}' (detached HEAD)",
                    oid.as_ref()
                )?;
                writeln!(
                    self.writer(),
                    "HEAD is now at {} {}",
                    oid.to_short_oid(),
                    commit.short_message()
                )?;
            }
        }

        Ok(())
    }

    fn resolve_target(&self, target: &str) -> anyhow::Result<Target> {
        if self.refs().branch_exists(target) {
            let tip = self
                .refs()
                .branch_read(target)?
                .ok_or(ErrorKind::NoCommits)?;

            return Ok(Target::Branch {
                name: target.to_string(),
                tip,
            });
        }

        // exact-length fingerprint match only; prefixes stay branch-name territory
        if let Ok(oid) = ObjectId::try_parse(target.to_string())
            && self.database().contains_commit(&oid)
        {
            return Ok(Target::Commit(oid));
        }

        Err(ErrorKind::UnknownTarget(target.to_string()).into())
    }
}
