//! Commit object
//!
//! Commits are immutable snapshot records. Each carries:
//! - A flat tree map: working-tree path -> blob fingerprint
//! - Parent commit fingerprint(s): zero for the root, two for a merge
//! - Author and committer identity with a timestamp
//! - A message that may span multiple lines
//!
//! ## Format
//!
//! On disk:
//! ```text
//! tree
//! blob <fingerprint> <path>
//! parent <fingerprint>
//! author <name> <email> <YYYY-MM-DD HH:MM:SS>
//! committer <name> <email> <YYYY-MM-DD HH:MM:SS>
//!
//! <commit message, to end of file>
//! ```
//!
//! The first blank line separates the header from the message body; the body
//! may itself contain blank lines. Paths in the tree section carry no
//! whitespace.

use crate::artifacts::objects::object::{Object, Packable, Unpackable};
use crate::artifacts::objects::object_id::ObjectId;
use anyhow::Context;
use bytes::Bytes;
use std::collections::BTreeMap;
use std::io::BufRead;

/// Timestamp layout used in author/committer lines (local time)
pub const TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

const TIMESTAMP_LENGTH: usize = 19;

/// Author or committer identity with a formatted timestamp
///
/// The timestamp is kept as its serialized string so a parsed commit
/// re-serializes byte-identically.
#[derive(Debug, Clone, Eq, PartialEq)]
pub struct Author {
    name: String,
    email: String,
    timestamp: String,
}

impl Author {
    /// Create a new author stamped with the current local time
    pub fn new(name: String, email: String) -> Self {
        Author {
            name,
            email,
            timestamp: chrono::Local::now().format(TIMESTAMP_FORMAT).to_string(),
        }
    }

    /// Create a new author with a specific pre-formatted timestamp
    pub fn new_with_timestamp(name: String, email: String, timestamp: String) -> Self {
        Author {
            name,
            email,
            timestamp,
        }
    }

    /// Load identity from MINIGIT_AUTHOR_NAME / MINIGIT_AUTHOR_EMAIL,
    /// falling back to the fixed placeholder identity
    pub fn load_from_env() -> Self {
        let name =
            std::env::var("MINIGIT_AUTHOR_NAME").unwrap_or_else(|_| "MiniGit".to_string());
        let email = std::env::var("MINIGIT_AUTHOR_EMAIL")
            .unwrap_or_else(|_| "minigit@example.com".to_string());

        Author::new(name, email)
    }

    /// Format complete identity for a header line
    ///
    /// # Returns
    ///
    /// String in format "Name <email> YYYY-MM-DD HH:MM:SS"
    pub fn display(&self) -> String {
        format!("{} <{}> {}", self.name, self.email, self.timestamp)
    }

    pub fn timestamp(&self) -> &str {
        &self.timestamp
    }
}

impl TryFrom<&str> for Author {
    type Error = anyhow::Error;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        // Format: "name <email> YYYY-MM-DD HH:MM:SS"
        // The timestamp contains one space, so split it off from the right
        let parts: Vec<&str> = value.rsplitn(3, ' ').collect();
        if parts.len() < 3 {
            return Err(anyhow::anyhow!("Invalid author format"));
        }

        let timestamp = format!("{} {}", parts[1], parts[0]);
        if timestamp.len() != TIMESTAMP_LENGTH {
            return Err(anyhow::anyhow!("Invalid timestamp: {}", timestamp));
        }
        chrono::NaiveDateTime::parse_from_str(&timestamp, TIMESTAMP_FORMAT)
            .map_err(|_| anyhow::anyhow!("Invalid timestamp: {}", timestamp))?;

        let name_email_part = parts[2]; // "name <email>"
        let email_start = name_email_part
            .find('<')
            .ok_or_else(|| anyhow::anyhow!("Invalid author format: missing '<'"))?;
        let email_end = name_email_part
            .find('>')
            .ok_or_else(|| anyhow::anyhow!("Invalid author format: missing '>'"))?;

        let name = name_email_part[..email_start].trim().to_string();
        let email = name_email_part[email_start + 1..email_end].to_string();

        Ok(Author {
            name,
            email,
            timestamp,
        })
    }
}

/// Immutable snapshot record
///
/// A commit references its blobs only through tree-map fingerprints and its
/// history only through parent fingerprints; traversal goes through database
/// lookups, never pointers, so the commit graph cannot form ownership cycles.
#[derive(Debug, Clone, Eq, PartialEq)]
pub struct Commit {
    /// Parent fingerprints (empty for the root commit, two for a merge)
    parents: Vec<ObjectId>,
    /// Flat map: working-tree path -> blob fingerprint
    tree: BTreeMap<String, ObjectId>,
    /// Author who wrote the snapshot
    author: Author,
    /// Committer who recorded it
    committer: Author,
    /// Commit message
    message: String,
}

impl Commit {
    pub fn new(
        parents: Vec<ObjectId>,
        tree: BTreeMap<String, ObjectId>,
        author: Author,
        message: String,
    ) -> Self {
        Commit {
            parents,
            tree,
            author: author.clone(),
            committer: author,
            message,
        }
    }

    pub fn parents(&self) -> &[ObjectId] {
        &self.parents
    }

    /// First parent, the one `log` follows
    pub fn first_parent(&self) -> Option<&ObjectId> {
        self.parents.first()
    }

    pub fn tree(&self) -> &BTreeMap<String, ObjectId> {
        &self.tree
    }

    pub fn message(&self) -> &str {
        &self.message
    }

    /// First line of the message, for one-line status output
    pub fn short_message(&self) -> String {
        self.message.lines().next().unwrap_or("").to_string()
    }

    pub fn timestamp(&self) -> &str {
        self.author.timestamp()
    }
}

impl Packable for Commit {
    fn serialize(&self) -> anyhow::Result<Bytes> {
        let mut object_content = vec![];

        object_content.push("tree".to_string());
        for (path, oid) in &self.tree {
            object_content.push(format!("blob {} {}", oid.as_ref(), path));
        }
        for parent in &self.parents {
            object_content.push(format!("parent {}", parent.as_ref()));
        }
        object_content.push(format!("author {}", self.author.display()));
        object_content.push(format!("committer {}", self.committer.display()));
        object_content.push(String::new());
        object_content.push(self.message.to_string());

        let object_content = object_content.join("\n");

        Ok(Bytes::from(object_content.into_bytes()))
    }
}

impl Unpackable for Commit {
    fn deserialize(reader: impl BufRead) -> anyhow::Result<Self> {
        let content = reader.bytes().collect::<Result<Vec<u8>, std::io::Error>>()?;

        let content = String::from_utf8(content)?;
        let mut lines = content.lines();

        let tree_line = lines
            .next()
            .context("Invalid commit object: missing tree line")?;
        if tree_line != "tree" {
            anyhow::bail!("Invalid commit object: invalid tree line");
        }

        let mut next_line = lines
            .next()
            .context("Invalid commit object: missing author line")?;

        // Parse the tree section (zero or more blob lines)
        let mut tree = BTreeMap::new();
        while let Some(blob_entry) = next_line.strip_prefix("blob ") {
            let (oid, path) = blob_entry
                .split_once(' ')
                .context("Invalid commit object: invalid blob line")?;
            tree.insert(path.to_string(), ObjectId::try_parse(oid.to_string())?);

            next_line = lines
                .next()
                .context("Invalid commit object: missing author line")?;
        }

        // Parse all parent lines (there can be 0, 1, or multiple parents)
        let mut parents = Vec::new();
        while let Some(parent_oid) = next_line.strip_prefix("parent ") {
            parents.push(ObjectId::try_parse(parent_oid.to_string())?);

            next_line = lines
                .next()
                .context("Invalid commit object: missing author line")?;
        }

        // At this point, next_line should be the author line
        let author = next_line
            .strip_prefix("author ")
            .context("Invalid commit object: invalid author line")?;
        let author = Author::try_from(author)?;

        let committer_line = lines
            .next()
            .context("Invalid commit object: missing committer line")?;
        let committer = committer_line
            .strip_prefix("committer ")
            .context("Invalid commit object: invalid committer line")?;
        let _committer = Author::try_from(committer)?;

        // skip the blank line between header and body
        lines.next();

        let message = lines.collect::<Vec<&str>>().join("\n");
        Ok(Self::new(parents, tree, author, message))
    }
}

impl Object for Commit {}
