//! Object database
//!
//! The database persists all objects (blobs and commits) using
//! content-addressable storage. Objects are identified by their fingerprint
//! and stored in a directory structure based on the fingerprint prefix.
//!
//! ## Storage Format
//!
//! - Path: `.minigit/objects/ab/cdef123...` (first 2 chars as directory,
//!   rest as filename)
//! - Content: the object's serialized bytes, raw (blobs) or text (commits)
//!
//! Writes are if-absent only: an existing object file is never rewritten,
//! which both deduplicates storage and keeps stored objects immutable.

use crate::artifacts::objects::blob::Blob;
use crate::artifacts::objects::commit::Commit;
use crate::artifacts::objects::object::{Object, Unpackable};
use crate::artifacts::objects::object_id::ObjectId;
use crate::errors::ErrorKind;
use anyhow::Context;
use bytes::Bytes;
use fake::rand;
use std::io::{Cursor, Write};
use std::path::{Path, PathBuf};

/// Content-addressed object store
#[derive(Debug)]
pub struct Database {
    /// Path to the objects directory (typically `.minigit/objects`)
    path: Box<Path>,
}

impl Database {
    pub fn new(path: Box<Path>) -> Self {
        Database { path }
    }

    pub fn objects_path(&self) -> &Path {
        &self.path
    }

    /// Store an object, returning its fingerprint
    ///
    /// The object is serialized and written under its sharded fingerprint
    /// path. If a file for the fingerprint already exists, nothing is
    /// written and the fingerprint is returned as-is.
    pub fn store(&self, object: impl Object) -> anyhow::Result<ObjectId> {
        let object_id = object.object_id()?;
        let object_path = self.path.join(object_id.to_path());

        if !object_path.exists() {
            std::fs::create_dir_all(
                object_path
                    .parent()
                    .context(format!("Invalid object path {}", object_path.display()))?,
            )
            .context(format!(
                "Unable to create object directory {}",
                object_path.display()
            ))?;

            self.write_object(object_path, object.serialize()?)?;
        }

        Ok(object_id)
    }

    /// True if an object file exists for the fingerprint
    pub fn contains(&self, object_id: &ObjectId) -> bool {
        self.path.join(object_id.to_path()).exists()
    }

    /// Load a blob's content bytes
    ///
    /// Fails with `MissingObject` if no object file exists.
    pub fn load_blob(&self, object_id: &ObjectId) -> anyhow::Result<Blob> {
        let content = self.read_object(object_id)?;

        Blob::deserialize(Cursor::new(content))
    }

    /// Load and parse a commit record
    ///
    /// Fails with `MissingObject` if no object file exists, or with
    /// `MalformedObject` if the stored text does not parse as a commit.
    pub fn load_commit(&self, object_id: &ObjectId) -> anyhow::Result<Commit> {
        let content = self.read_object(object_id)?;

        Commit::deserialize(Cursor::new(content)).map_err(|parse_error| {
            ErrorKind::MalformedObject(object_id.to_string(), format!("{parse_error:#}")).into()
        })
    }

    /// True if the fingerprint names a stored object that parses as a commit
    pub fn contains_commit(&self, object_id: &ObjectId) -> bool {
        self.contains(object_id) && self.load_commit(object_id).is_ok()
    }

    fn read_object(&self, object_id: &ObjectId) -> anyhow::Result<Bytes> {
        let object_path = self.path.join(object_id.to_path());

        if !object_path.exists() {
            return Err(ErrorKind::MissingObject(object_id.to_string()).into());
        }

        let object_content = std::fs::read(&object_path).context(format!(
            "Unable to read object file {}",
            object_path.display()
        ))?;

        Ok(object_content.into())
    }

    fn write_object(&self, object_path: PathBuf, object_content: Bytes) -> anyhow::Result<()> {
        let object_dir = object_path
            .parent()
            .context(format!("Invalid object path {}", object_path.display()))?;
        let temp_object_path = object_dir.join(Self::generate_temp_name());

        let mut file = std::fs::OpenOptions::new()
            .read(true)
            .write(true)
            .create(true)
            .truncate(true)
            .open(&temp_object_path)
            .context(format!(
                "Unable to open object file {}",
                temp_object_path.display()
            ))?;

        file.write_all(&object_content).context(format!(
            "Unable to write object file {}",
            temp_object_path.display()
        ))?;

        // rename the temp file to the object file to make it atomic
        std::fs::rename(&temp_object_path, &object_path).context(format!(
            "Unable to rename object file to {}",
            object_path.display()
        ))?;

        Ok(())
    }

    fn generate_temp_name() -> String {
        format!("tmp-obj-{}", rand::random::<u32>())
    }
}
