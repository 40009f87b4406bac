//! Working directory operations
//!
//! The workspace is the sole writer outside the repository directory. It
//! reads files for staging, enumerates top-level entries, and applies
//! checkout migrations (the clean-and-restore materialization policy).

use crate::artifacts::checkout::migration::Migration;
use crate::errors::ErrorKind;
use anyhow::Context;
use bytes::Bytes;
use std::path::{Path, PathBuf};

const IGNORED_PATHS: [&str; 3] = [".minigit", ".", ".."];

#[derive(Debug)]
pub struct Workspace {
    path: Box<Path>,
}

impl Workspace {
    pub fn new(path: Box<Path>) -> Self {
        Workspace { path }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Read a working-tree file's current bytes
    ///
    /// Fails with `PathNotFound` when no file exists at the path.
    pub fn read_file(&self, file_path: &str) -> anyhow::Result<Bytes> {
        let absolute_path = self.path.join(file_path);

        if !absolute_path.is_file() {
            return Err(ErrorKind::PathNotFound(file_path.to_string()).into());
        }

        let content = std::fs::read(&absolute_path)
            .with_context(|| format!("Failed to read file: {:?}", file_path))?;

        Ok(content.into())
    }

    /// Write a file into the working tree, creating parent directories
    pub fn write_file(&self, file_path: &str, data: &[u8]) -> anyhow::Result<()> {
        let absolute_path = self.path.join(file_path);

        if let Some(parent) = absolute_path.parent() {
            std::fs::create_dir_all(parent)
                .with_context(|| format!("Failed to create directory: {:?}", parent))?;
        }

        std::fs::write(&absolute_path, data)
            .with_context(|| format!("Failed to write to file: {:?}", file_path))?;

        Ok(())
    }

    /// List the top-level working-tree entries, skipping the repository dir
    pub fn list_entries(&self) -> anyhow::Result<Vec<PathBuf>> {
        Ok(std::fs::read_dir(self.path.as_ref())?
            .filter_map(|entry| entry.ok())
            .filter_map(|entry| self.check_if_not_ignored_path(&entry.path()))
            .collect::<Vec<_>>())
    }

    fn is_ignored(path: &Path) -> bool {
        path.components().any(|component| {
            if let std::path::Component::Normal(name) = component {
                let name_str = name.to_string_lossy();
                IGNORED_PATHS.contains(&name_str.as_ref())
            } else {
                false
            }
        })
    }

    fn check_if_not_ignored_path(&self, path: &Path) -> Option<PathBuf> {
        if !Self::is_ignored(path) {
            Some(path.strip_prefix(self.path.as_ref()).ok()?.to_path_buf())
        } else {
            None
        }
    }

    /// Apply a planned migration to the working tree
    ///
    /// Removals run first so a materialized path can replace a directory
    /// that previously occupied its name.
    pub fn apply_migration(&self, migration: &Migration) -> anyhow::Result<()> {
        for entry in migration.clean() {
            self.remove_entry(entry)?;
        }

        for (file_path, data) in migration.writes() {
            self.write_file(file_path, data)?;
        }

        Ok(())
    }

    fn remove_entry(&self, entry: &Path) -> anyhow::Result<()> {
        let absolute_path = self.path.join(entry);

        if !absolute_path.exists() {
            return Ok(());
        }

        let metadata = std::fs::metadata(&absolute_path)
            .with_context(|| format!("Failed to get metadata for: {:?}", entry))?;

        if metadata.is_dir() {
            std::fs::remove_dir_all(&absolute_path)
                .with_context(|| format!("Failed to remove directory: {:?}", entry))?;
        } else {
            std::fs::remove_file(&absolute_path)
                .with_context(|| format!("Failed to remove file: {:?}", entry))?;
        }

        Ok(())
    }
}
