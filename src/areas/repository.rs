use crate::areas::database::Database;
use crate::areas::refs::Refs;
use anyhow::Context;
use std::cell::{RefCell, RefMut};
use std::path::Path;

/// Name of the directory that marks a repository root
pub const GIT_DIR_NAME: &str = ".git";

pub struct Repository {
    path: Box<Path>,
    writer: RefCell<Box<dyn std::io::Write>>,
    database: Database,
    refs: Refs,
}

impl Repository {
    pub fn new(path: &Path, writer: Box<dyn std::io::Write>) -> Self {
        let git_path = path.join(GIT_DIR_NAME);
        let database = Database::new(git_path.join("objects").into_boxed_path());
        let refs = Refs::new(git_path.into_boxed_path());

        Repository {
            path: path.into(),
            writer: RefCell::new(writer),
            database,
            refs,
        }
    }

    /// Open the repository containing `start`
    ///
    /// Walks up from `start` one directory at a time until a directory holding
    /// `.git/` is found. Reaching the filesystem root without a match is an error.
    pub fn discover(start: &Path, writer: Box<dyn std::io::Write>) -> anyhow::Result<Self> {
        let start = start
            .canonicalize()
            .with_context(|| format!("Unable to resolve {}", start.display()))?;

        let mut current = Some(start.as_path());
        while let Some(dir) = current {
            if dir.join(GIT_DIR_NAME).is_dir() {
                tracing::debug!(root = %dir.display(), "found repository");
                return Ok(Self::new(dir, writer));
            }
            current = dir.parent();
        }

        anyhow::bail!(
            "Not inside a Git repository (searched upward from {})",
            start.display()
        )
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn git_path(&self) -> Box<Path> {
        self.path.join(GIT_DIR_NAME).into_boxed_path()
    }

    pub fn writer(&'_ self) -> RefMut<'_, Box<dyn std::io::Write>> {
        self.writer.borrow_mut()
    }

    pub fn database(&self) -> &Database {
        &self.database
    }

    pub fn refs(&self) -> &Refs {
        &self.refs
    }
}
