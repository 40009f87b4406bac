use crate::areas::repository::Repository;
use crate::artifacts::objects::commit::{Author, Commit};
use crate::artifacts::objects::object_id::ObjectId;
use crate::errors::ErrorKind;
use std::collections::BTreeMap;
use std::io::Write;

impl Repository {
    /// Snapshot the staged files into a new commit
    ///
    /// The current HEAD commit becomes the parent (none in the Unborn
    /// state). The index is cleared and persisted only after both the
    /// commit object and the ref update have landed, so a failed write
    /// leaves the staging area untouched.
    pub async fn commit(&mut self, message: &str) -> anyhow::Result<()> {
        self.ensure_initialized()?;

        let index = self.index();
        let mut index = index.lock().await;

        index.rehydrate()?;

        if index.is_empty() {
            return Err(ErrorKind::EmptyIndex.into());
        }

        let head = self.refs().read_head()?;
        let parents = head.commit().cloned().into_iter().collect::<Vec<_>>();

        let commit_id = self.write_commit(parents, index.tree_map(), message.to_string())?;

        index.clear();
        index.write_updates()?;

        writeln!(
            self.writer(),
            "[{}] {}",
            commit_id.to_short_oid(),
            message
        )?;

        Ok(())
    }

    /// Store a commit record and advance HEAD's current location to it
    pub(crate) fn write_commit(
        &self,
        parents: Vec<ObjectId>,
        tree: BTreeMap<String, ObjectId>,
        message: String,
    ) -> anyhow::Result<ObjectId> {
        let author = Author::load_from_env();
        let commit = Commit::new(parents, tree, author, message);

        let commit_id = self.database().store(commit)?;
        self.refs().update_head(&commit_id)?;

        Ok(commit_id)
    }
}
