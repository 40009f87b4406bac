//! Index (staging area)
//!
//! The index tracks which blobs should form the tree map of the next commit.
//! It is empty after `init` and after every successful commit, mutated only
//! by `add`, and persisted between invocations as a text file.
//!
//! ## Index File Format
//!
//! One entry per line:
//! ```text
//! <path> <blob-fingerprint>
//! ```
//!
//! Paths carry no whitespace, so a single space separates the two fields.

use crate::artifacts::objects::object_id::ObjectId;
use anyhow::Context;
use std::collections::BTreeMap;
use std::io::Write;
use std::ops::DerefMut;
use std::path::Path;

/// Staging area: path -> blob fingerprint
///
/// Kept in memory as a sorted map and persisted through
/// `rehydrate`/`write_updates`. Every fingerprint it holds refers to a blob
/// already written to the object database.
#[derive(Debug, Clone)]
pub struct Index {
    /// Path to the index file (typically `.minigit/index`)
    path: Box<Path>,
    /// Staged entries mapped by path
    entries: BTreeMap<String, ObjectId>,
    /// Flag indicating if the index has been modified since loading
    changed: bool,
}

impl Index {
    pub fn new(path: Box<Path>) -> Self {
        Index {
            path,
            entries: BTreeMap::new(),
            changed: false,
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Load the index from disk
    ///
    /// Replaces the in-memory entries with the file's current content. A
    /// missing file is created empty, so a repository whose index was
    /// removed by hand heals on the next command.
    ///
    /// # Locking
    ///
    /// Acquires a shared advisory lock on the index file during reading.
    pub fn rehydrate(&mut self) -> anyhow::Result<()> {
        if !self.path().exists() {
            std::fs::File::create(self.path())?;
        }

        let mut index_file = std::fs::OpenOptions::new().read(true).open(self.path())?;
        let mut lock = file_guard::lock(&mut index_file, file_guard::Lock::Shared, 0, 1)?;

        self.entries.clear();
        self.changed = false;

        let mut content = String::new();
        std::io::Read::read_to_string(lock.deref_mut(), &mut content)?;

        for line in content.lines().filter(|line| !line.is_empty()) {
            let (path, oid) = line
                .split_once(' ')
                .with_context(|| format!("malformed index entry: {line}"))?;
            self.entries
                .insert(path.to_string(), ObjectId::try_parse(oid.to_string())?);
        }

        Ok(())
    }

    /// Stage a path at a blob fingerprint, replacing any previous entry
    pub fn add(&mut self, path: String, oid: ObjectId) {
        self.entries.insert(path, oid);
        self.changed = true;
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn entries(&self) -> impl Iterator<Item = (&String, &ObjectId)> {
        self.entries.iter()
    }

    /// Immutable snapshot of the staged entries, for building a commit
    pub fn tree_map(&self) -> BTreeMap<String, ObjectId> {
        self.entries.clone()
    }

    /// Drop all staged entries (the post-commit reset)
    pub fn clear(&mut self) {
        self.entries.clear();
        self.changed = true;
    }

    /// Persist the in-memory entries to the index file
    ///
    /// # Locking
    ///
    /// Acquires an exclusive advisory lock on the index file during writing.
    pub fn write_updates(&mut self) -> anyhow::Result<()> {
        let mut index_file = std::fs::OpenOptions::new()
            .write(true)
            .create(true)
            .truncate(true)
            .open(self.path())?;
        let mut lock = file_guard::lock(&mut index_file, file_guard::Lock::Exclusive, 0, 1)?;

        for (path, oid) in &self.entries {
            writeln!(lock.deref_mut(), "{} {}", path, oid.as_ref())?;
        }

        self.changed = false;

        Ok(())
    }
}
