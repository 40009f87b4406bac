//! Core object traits
//!
//! This module defines the traits that stored objects implement:
//! - `Packable`: serialization to the on-disk format
//! - `Unpackable`: deserialization from the on-disk format
//! - `Object`: fingerprint computation over the serialized bytes
//!
//! Blobs are stored as their raw content bytes; commits are stored as text.
//! The fingerprint of an object is the SHA-1 digest of its serialized form,
//! so identical content always shares one stored object.

use crate::artifacts::objects::object_id::ObjectId;
use anyhow::Result;
use bytes::Bytes;
use sha1::{Digest, Sha1};
use std::io::BufRead;

/// Trait for serializing objects to their stored byte form
pub trait Packable {
    /// Serialize the object to the exact bytes written to the database
    fn serialize(&self) -> Result<Bytes>;
}

/// Trait for deserializing objects from their stored byte form
pub trait Unpackable {
    /// Deserialize the object from a reader over its stored bytes
    fn deserialize(reader: impl BufRead) -> Result<Self>
    where
        Self: Sized;
}

/// Core stored-object trait
///
/// Provides fingerprint computation shared by blobs and commits.
pub trait Object: Packable {
    /// Compute the object's fingerprint (SHA-1 over the serialized bytes)
    fn object_id(&self) -> Result<ObjectId> {
        let content = self.serialize()?;
        let mut hasher = Sha1::new();
        hasher.update(&content);

        let oid = hasher.finalize();
        ObjectId::try_parse(format!("{oid:x}"))
    }
}
