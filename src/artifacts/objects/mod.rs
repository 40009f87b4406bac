//! Object types stored in the repository database
//!
//! - `blob`: raw file content, addressed by the fingerprint of its bytes
//! - `commit`: an immutable snapshot record with a flat tree map
//! - `object`: the serialization and fingerprinting traits shared by both
//! - `object_id`: the 40-character hexadecimal fingerprint newtype

pub mod blob;
pub mod commit;
pub mod object;
pub mod object_id;

/// Length of a full hexadecimal fingerprint (SHA-1)
pub const OBJECT_ID_LENGTH: usize = 40;
