use crate::artifacts::branch::INVALID_BRANCH_NAME_REGEX;
use anyhow::Context;
use std::path::{Component, Path};

/// A validated branch name such as `main` or `feature/login`
///
/// Ordering is the lexicographic ordering of the name, which is the order
/// branch labels are printed in.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default, PartialOrd, Ord)]
pub struct BranchName(String);

impl BranchName {
    pub fn try_parse(name: String) -> anyhow::Result<Self> {
        if name.is_empty() {
            anyhow::bail!("branch name cannot be empty");
        }

        let re = regex::Regex::new(INVALID_BRANCH_NAME_REGEX)
            .with_context(|| format!("invalid branch name regex: {INVALID_BRANCH_NAME_REGEX}"))?;

        if re.is_match(&name) {
            anyhow::bail!("invalid branch name: {}", name);
        } else {
            Ok(Self(name))
        }
    }

    /// Build a branch name from a ref file path relative to `refs/heads`
    ///
    /// Path components are joined with `/` whatever the platform separator is.
    pub fn try_from_relative_path(path: &Path) -> anyhow::Result<Self> {
        let name = path
            .components()
            .map(|component| match component {
                Component::Normal(part) => part
                    .to_str()
                    .with_context(|| format!("branch path is not valid UTF-8: {:?}", path)),
                _ => Err(anyhow::anyhow!("unexpected branch path component in {:?}", path)),
            })
            .collect::<anyhow::Result<Vec<_>>>()?
            .join("/");

        Self::try_parse(name)
    }
}

impl AsRef<str> for BranchName {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for BranchName {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}
