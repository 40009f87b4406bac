use crate::areas::repository::Repository;
use crate::errors::ErrorKind;
use std::io::Write;

impl Repository {
    /// Create a branch pointing at the current HEAD commit
    ///
    /// HEAD itself does not move; switching to the new branch is a separate
    /// `checkout`.
    pub fn branch(&mut self, name: &str) -> anyhow::Result<()> {
        self.ensure_initialized()?;

        let head = self.refs().read_head()?;
        let head_oid = head.commit().ok_or(ErrorKind::NoCommits)?;

        self.refs().create_branch(name, head_oid)?;

        writeln!(
            self.writer(),
            "Branch '{}' created at {}",
            name,
            head_oid.to_short_oid()
        )?;

        Ok(())
    }
}
