//! Blob object
//!
//! Blobs store file content. They carry only the raw bytes; paths live in
//! the tree maps of the commits that reference them. A blob's stored form is
//! its content, unmodified, so the fingerprint is a pure function of content.

use crate::artifacts::objects::object::{Object, Packable, Unpackable};
use anyhow::Result;
use bytes::Bytes;
use derive_new::new;
use std::io::BufRead;

/// File content addressed by its fingerprint
///
/// Each unique content is stored exactly once; re-storing identical bytes
/// is a no-op yielding the same fingerprint.
#[derive(Debug, Clone, PartialEq, Eq, new)]
pub struct Blob {
    content: Bytes,
}

impl Blob {
    pub fn content(&self) -> &Bytes {
        &self.content
    }
}

impl Packable for Blob {
    fn serialize(&self) -> Result<Bytes> {
        Ok(self.content.clone())
    }
}

impl Unpackable for Blob {
    fn deserialize(reader: impl BufRead) -> Result<Self> {
        let content = reader.bytes().collect::<Result<Vec<u8>, std::io::Error>>()?;

        Ok(Self::new(Bytes::from(content)))
    }
}

impl Object for Blob {}
