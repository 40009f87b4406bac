use crate::areas::refs::DEFAULT_BRANCH;
use crate::areas::repository::Repository;
use crate::errors::ErrorKind;
use anyhow::Context;
use std::fs;
use std::io::Write;

impl Repository {
    /// Create the repository skeleton under `.minigit`
    ///
    /// After init the root is complete: `HEAD` attached to the default
    /// branch, an empty default branch file (the Unborn state), a zero-byte
    /// index and an empty object database.
    pub fn init(&mut self) -> anyhow::Result<()> {
        if self.repository_path().exists() {
            return Err(
                ErrorKind::AlreadyInitialized(self.repository_path().display().to_string())
                    .into(),
            );
        }

        fs::create_dir_all(self.database().objects_path())
            .context("Failed to create .minigit/objects directory")?;
        fs::create_dir_all(self.refs().heads_path())
            .context("Failed to create .minigit/refs/heads directory")?;

        self.refs()
            .set_head_attached(DEFAULT_BRANCH)
            .context("Failed to write .minigit/HEAD file")?;
        self.refs()
            .create_unborn_branch(DEFAULT_BRANCH)
            .context("Failed to create the default branch file")?;

        fs::write(self.repository_path().join("index"), "")
            .context("Failed to create .minigit/index file")?;

        writeln!(
            self.writer(),
            "Initialized empty minigit repository in {}",
            self.repository_path().display()
        )?;

        Ok(())
    }
}
