//! References (branches and HEAD)
//!
//! References are human-readable names pointing to commits:
//! - Branches: `refs/heads/<name>` files holding one commit fingerprint
//! - HEAD: the single distinguished pointer, either attached to a branch
//!   (`ref: refs/heads/<name>`) or detached onto a commit fingerprint
//!
//! ## File Format
//!
//! Reference files are text, one line:
//! - `ref: refs/heads/<name>` for the attached HEAD
//! - a 40-character fingerprint for branches and the detached HEAD
//! - empty, only for a branch that has no commits yet (the Unborn state)
//!
//! Ref updates go through a temp-file write followed by a rename, so a
//! crashed writer can never leave a half-written ref behind.

use crate::artifacts::objects::object_id::ObjectId;
use crate::errors::ErrorKind;
use anyhow::Context;
use derive_new::new;
use fake::rand;
use std::io::Write;
use std::path::Path;

/// Branch every repository starts on
pub const DEFAULT_BRANCH: &str = "master";

/// Pattern for the attached-HEAD line
const SYMREF_REGEX: &str = r"^ref: refs/heads/(.+)$";

/// The three-way HEAD state
///
/// `Unborn` only occurs between `init` and the first commit on the default
/// branch: HEAD names a branch whose ref file exists but is empty.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Head {
    /// HEAD names a branch whose ref file holds a commit fingerprint
    Attached { branch: String, tip: ObjectId },
    /// HEAD holds a commit fingerprint directly
    Detached(ObjectId),
    /// HEAD names a branch whose ref file is still empty
    Unborn { branch: String },
}

impl Head {
    /// The commit HEAD resolves to; `None` only in the Unborn state
    pub fn commit(&self) -> Option<&ObjectId> {
        match self {
            Head::Attached { tip, .. } => Some(tip),
            Head::Detached(oid) => Some(oid),
            Head::Unborn { .. } => None,
        }
    }

    /// Human-readable current location, used in merge commit messages
    pub fn location(&self) -> String {
        match self {
            Head::Attached { branch, .. } | Head::Unborn { branch } => branch.clone(),
            Head::Detached(_) => "detached HEAD".to_string(),
        }
    }
}

/// Reference manager rooted at the repository directory
#[derive(Debug, new)]
pub struct Refs {
    /// Path to the repository directory (typically `.minigit`)
    path: Box<Path>,
}

impl Refs {
    /// Read the HEAD state machine position
    ///
    /// Combines the HEAD file with the branch file it may point at.
    pub fn read_head(&self) -> anyhow::Result<Head> {
        let content = std::fs::read_to_string(self.head_path())
            .with_context(|| format!("failed to read HEAD at {:?}", self.head_path()))?;
        let content = content.trim();

        let symref_match = regex::Regex::new(SYMREF_REGEX)?.captures(content);
        if let Some(symref_match) = symref_match {
            let branch = symref_match[1].to_string();

            match self.branch_read(&branch)? {
                Some(tip) => Ok(Head::Attached { branch, tip }),
                None => Ok(Head::Unborn { branch }),
            }
        } else {
            Ok(Head::Detached(ObjectId::try_parse(content.to_string())?))
        }
    }

    /// Attach HEAD to a branch by name
    pub fn set_head_attached(&self, branch: &str) -> anyhow::Result<()> {
        self.update_ref_file(&self.head_path(), format!("ref: refs/heads/{}\n", branch))
    }

    /// Detach HEAD onto a commit fingerprint
    pub fn set_head_detached(&self, oid: &ObjectId) -> anyhow::Result<()> {
        self.update_ref_file(&self.head_path(), format!("{}\n", oid.as_ref()))
    }

    /// Advance the current HEAD location to a new commit
    ///
    /// On an attached (or unborn) HEAD the branch file moves and HEAD itself
    /// is untouched; on a detached HEAD the HEAD file is rewritten.
    pub fn update_head(&self, oid: &ObjectId) -> anyhow::Result<()> {
        match self.read_head()? {
            Head::Attached { branch, .. } | Head::Unborn { branch } => {
                self.branch_write(&branch, oid)
            }
            Head::Detached(_) => self.set_head_detached(oid),
        }
    }

    /// Read a branch's tip fingerprint
    ///
    /// # Returns
    ///
    /// `None` when the branch file is missing or empty (the Unborn state of
    /// the default branch).
    pub fn branch_read(&self, name: &str) -> anyhow::Result<Option<ObjectId>> {
        let branch_path = self.heads_path().join(name);

        if !branch_path.exists() {
            return Ok(None);
        }

        let content = std::fs::read_to_string(&branch_path)
            .with_context(|| format!("failed to read ref file at {:?}", branch_path))?;
        let content = content.trim();

        if content.is_empty() {
            return Ok(None);
        }

        Ok(Some(ObjectId::try_parse(content.to_string())?))
    }

    pub fn branch_write(&self, name: &str, oid: &ObjectId) -> anyhow::Result<()> {
        self.update_ref_file(
            &self.heads_path().join(name),
            format!("{}\n", oid.as_ref()),
        )
    }

    pub fn branch_exists(&self, name: &str) -> bool {
        self.heads_path().join(name).exists()
    }

    /// Create a new branch pointing at the given commit
    ///
    /// Fails when a branch of that name already holds a commit; a branch
    /// file that exists but is empty (the unborn default branch) may be
    /// claimed.
    pub fn create_branch(&self, name: &str, oid: &ObjectId) -> anyhow::Result<()> {
        if self.branch_read(name)?.is_some() {
            return Err(ErrorKind::BranchExists(name.to_string()).into());
        }

        self.branch_write(name, oid)
    }

    /// Create an empty branch file, representing the Unborn state
    pub fn create_unborn_branch(&self, name: &str) -> anyhow::Result<()> {
        self.update_ref_file(&self.heads_path().join(name), String::new())
    }

    fn update_ref_file(&self, path: &Path, raw_ref: String) -> anyhow::Result<()> {
        let parent = path.parent().with_context(|| {
            format!(
                "failed to resolve parent directory for ref file at {:?}",
                path
            )
        })?;
        std::fs::create_dir_all(parent)?;

        // write-rename keeps ref updates atomic
        let temp_ref_path = parent.join(format!("tmp-ref-{}", rand::random::<u32>()));
        let mut temp_ref_file = std::fs::OpenOptions::new()
            .write(true)
            .create(true)
            .truncate(true)
            .open(&temp_ref_path)
            .with_context(|| format!("failed to open ref file at {:?}", temp_ref_path))?;
        temp_ref_file.write_all(raw_ref.as_bytes())?;

        std::fs::rename(&temp_ref_path, path)
            .with_context(|| format!("failed to rename ref file to {:?}", path))?;

        Ok(())
    }

    pub fn head_path(&self) -> Box<Path> {
        self.path.join("HEAD").into_boxed_path()
    }

    pub fn refs_path(&self) -> Box<Path> {
        self.path.join("refs").into_boxed_path()
    }

    pub fn heads_path(&self) -> Box<Path> {
        self.refs_path().join("heads").into_boxed_path()
    }
}
