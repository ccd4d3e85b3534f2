//! Git references (branches)
//!
//! Branches are text files under `.git/refs/heads`, the branch name being the
//! path of the file relative to that directory (`refs/heads/feature/login` is
//! the branch `feature/login`).
//!
//! ## File Format
//!
//! References are stored as text files containing either:
//! - A 40-character SHA-1 hash (direct reference)
//! - `ref: <path>` for symbolic references

use crate::artifacts::branch::branch_name::BranchName;
use crate::artifacts::objects::object_id::ObjectId;
use anyhow::Context;
use derive_new::new;
use std::collections::BTreeMap;
use std::path::Path;
use walkdir::WalkDir;

/// Branch references reader
#[derive(Debug, new)]
pub struct Refs {
    /// Path to the git directory (typically `.git`)
    path: Box<Path>,
}

/// Regex pattern for parsing symbolic references
const SYMREF_REGEX: &str = r"^ref: (.+)$";

/// How many symbolic references are followed before giving up
const MAX_SYMREF_DEPTH: usize = 5;

/// Internal representation of a reference value
#[derive(Debug, Clone)]
enum SymRefOrOid {
    /// Symbolic reference pointing to another ref, relative to the git directory
    SymRef { target: String },
    /// Direct object ID
    Oid(ObjectId),
}

impl SymRefOrOid {
    fn read_symref_or_oid(path: &Path) -> anyhow::Result<Option<SymRefOrOid>> {
        if !path.is_file() {
            return Ok(None);
        }

        let content = std::fs::read_to_string(path)
            .with_context(|| format!("failed to read ref file at {:?}", path))?;
        let content = content.trim();

        if content.is_empty() {
            return Ok(None);
        }

        let symref_match = regex::Regex::new(SYMREF_REGEX)?.captures(content);
        if let Some(symref_match) = symref_match {
            Ok(Some(SymRefOrOid::SymRef {
                target: symref_match[1].to_string(),
            }))
        } else {
            let oid = ObjectId::try_parse(content.to_string())
                .with_context(|| format!("invalid object id in ref file at {:?}", path))?;
            Ok(Some(SymRefOrOid::Oid(oid)))
        }
    }
}

impl Refs {
    /// Every branch under `refs/heads` with the commit it points at
    ///
    /// Files whose name is not a valid branch name (such as `main.lock` left by
    /// a concurrent git process) and symbolic refs that do not resolve are
    /// skipped. A repository without `refs/heads` has no branches.
    pub fn list_branches(&self) -> anyhow::Result<BTreeMap<BranchName, ObjectId>> {
        let heads_path = self.heads_path();
        let mut branches = BTreeMap::new();

        if !heads_path.is_dir() {
            return Ok(branches);
        }

        for entry in WalkDir::new(&heads_path).sort_by_file_name() {
            let entry = entry
                .with_context(|| format!("failed to list branches in {:?}", heads_path))?;
            if !entry.file_type().is_file() {
                continue;
            }

            let relative_path = entry.path().strip_prefix(&heads_path)?;
            let branch_name = match BranchName::try_from_relative_path(relative_path) {
                Ok(branch_name) => branch_name,
                Err(err) => {
                    tracing::debug!(path = ?entry.path(), "skipping ref file: {err}");
                    continue;
                }
            };

            match self.read_symref(entry.path(), 0)? {
                Some(oid) => {
                    branches.insert(branch_name, oid);
                }
                None => {
                    tracing::debug!(branch = %branch_name, "skipping branch without target");
                }
            }
        }

        tracing::debug!(branches = branches.len(), "read branch refs");

        Ok(branches)
    }

    /// Read a reference, following symbolic references up to `MAX_SYMREF_DEPTH`
    fn read_symref(&self, path: &Path, depth: usize) -> anyhow::Result<Option<ObjectId>> {
        if depth > MAX_SYMREF_DEPTH {
            anyhow::bail!("too many levels of symbolic refs at {:?}", path);
        }

        match SymRefOrOid::read_symref_or_oid(path)? {
            Some(SymRefOrOid::SymRef { target }) => {
                self.read_symref(self.path.join(target).as_path(), depth + 1)
            }
            Some(SymRefOrOid::Oid(oid)) => Ok(Some(oid)),
            None => Ok(None),
        }
    }

    fn refs_path(&self) -> Box<Path> {
        self.path.join("refs").into_boxed_path()
    }

    fn heads_path(&self) -> Box<Path> {
        self.refs_path().join("heads").into_boxed_path()
    }
}
