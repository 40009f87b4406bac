use crate::areas::repository::Repository;
use crate::artifacts::log::rev_list::RevList;
use crate::errors::ErrorKind;
use colored::Colorize;
use std::io::Write;

impl Repository {
    /// Print history from HEAD's commit following first parents
    ///
    /// Each entry shows the fingerprint, timestamp and message. The walk
    /// ends at a parentless commit or at the first unreadable one.
    pub fn log(&mut self) -> anyhow::Result<()> {
        self.ensure_initialized()?;

        let head = self.refs().read_head()?;
        let start = head.commit().cloned().ok_or(ErrorKind::NoCommits)?;

        for (oid, commit) in RevList::new(self.database(), start) {
            writeln!(self.writer(), "commit {}", oid.as_ref().yellow())?;
            writeln!(self.writer(), "Date:   {}", commit.timestamp())?;
            writeln!(self.writer())?;
            for message_line in commit.message().lines() {
                writeln!(self.writer(), "    {}", message_line)?;
            }
            writeln!(self.writer())?;
        }

        Ok(())
    }
}
