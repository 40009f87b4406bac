//! Repository handle and coordination
//!
//! `Repository` is the entry point for every command. It owns the root path
//! and the four stores derived from it (database, index, workspace, refs),
//! and is created at command entry and dropped at exit; no process-wide
//! state survives an invocation.
//!
//! The porcelain command implementations live in `crate::commands` as
//! `impl Repository` blocks; this module only wires the pieces together.

use crate::areas::database::Database;
use crate::areas::index::Index;
use crate::areas::refs::Refs;
use crate::areas::workspace::Workspace;
use crate::errors::ErrorKind;
use std::cell::{RefCell, RefMut};
use std::path::{Path, PathBuf};
use std::sync::Arc;
use tokio::sync::Mutex;

/// Repository directory name
const REPOSITORY_DIR: &str = ".minigit";

/// Object database directory name
const DATABASE_DIR: &str = "objects";

/// Index file name
const INDEX_FILE: &str = "index";

/// Repository handle
///
/// Coordinates the database, index, workspace and refs subsystems. The
/// stores collectively own everything under `.minigit`; the workspace is
/// the only component writing outside it.
pub struct Repository {
    /// Working-directory root
    path: Box<Path>,
    /// Output writer (stdout in production, a capture buffer in tests)
    writer: RefCell<Box<dyn std::io::Write>>,
    /// Index (staging area)
    index: Arc<Mutex<Index>>,
    /// Object database
    database: Database,
    /// Working directory
    workspace: Workspace,
    /// Reference manager
    refs: Refs,
}

impl Repository {
    pub fn new(path: PathBuf, writer: Box<dyn std::io::Write>) -> anyhow::Result<Self> {
        let path = path.canonicalize()?;

        let repository_path = path.join(REPOSITORY_DIR);
        let index = Index::new(repository_path.join(INDEX_FILE).into_boxed_path());
        let database = Database::new(repository_path.join(DATABASE_DIR).into_boxed_path());
        let workspace = Workspace::new(path.clone().into_boxed_path());
        let refs = Refs::new(repository_path.into_boxed_path());

        Ok(Repository {
            path: path.into_boxed_path(),
            writer: RefCell::new(writer),
            index: Arc::new(Mutex::new(index)),
            database,
            workspace,
            refs,
        })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn repository_path(&self) -> PathBuf {
        self.path.join(REPOSITORY_DIR)
    }

    pub fn writer(&'_ self) -> RefMut<'_, Box<dyn std::io::Write>> {
        self.writer.borrow_mut()
    }

    pub fn index(&self) -> Arc<Mutex<Index>> {
        self.index.clone()
    }

    pub fn database(&self) -> &Database {
        &self.database
    }

    pub fn workspace(&self) -> &Workspace {
        &self.workspace
    }

    pub fn refs(&self) -> &Refs {
        &self.refs
    }

    /// Guard for every command except `init`
    pub fn ensure_initialized(&self) -> anyhow::Result<()> {
        if !self.repository_path().is_dir() {
            return Err(ErrorKind::NotARepository.into());
        }

        Ok(())
    }
}
