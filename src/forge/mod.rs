//! GitHub CLI wrappers for repository management.
//!
//! All repository metadata comes from `gh`; nothing here talks to the API
//! directly.

use crate::{exec, OpsError, Result};
use serde::Deserialize;
use std::path::Path;

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct RepoView {
    default_branch_ref: Option<BranchRef>,
}

#[derive(Debug, Deserialize)]
struct BranchRef {
    name: Option<String>,
}

pub struct ForgeClient;

impl ForgeClient {
    pub fn new() -> Self {
        Self
    }

    /// Check whether the repository exists on the forge.
    ///
    /// A clean non-zero exit from `gh repo view` is read as "does not
    /// exist"; a spawn failure or signal death propagates instead.
    pub fn repo_exists(&self, repo_name: &str) -> Result<bool> {
        let code = exec::exit_code("gh", &["repo", "view", repo_name])?;
        Ok(code == 0)
    }

    /// Fetch the repository's default branch name, `None` when the
    /// repository has no commits yet.
    pub fn default_branch(&self, repo_name: &str) -> Result<Option<String>> {
        let json = exec::output(
            "gh",
            &["repo", "view", repo_name, "--json", "defaultBranchRef"],
        )
        .map_err(|e| OpsError::Lookup(format!("failed to retrieve repository info: {}", e)))?;

        parse_default_branch(&json)
    }

    /// Create a public repository with the working directory as source and
    /// `origin` as the remote name.
    pub fn create_repo(&self, repo_name: &str) -> Result<()> {
        exec::run(
            "gh",
            &[
                "repo",
                "create",
                repo_name,
                "--public",
                "--source=.",
                "--remote=origin",
            ],
        )
    }

    /// Register a public SSH key with the forge.
    pub fn register_ssh_key(&self, public_key: &Path, title: &str) -> Result<()> {
        exec::run(
            "gh",
            &[
                "ssh-key",
                "add",
                &public_key.to_string_lossy(),
                "--title",
                title,
            ],
        )
    }
}

/// Parse `gh repo view --json defaultBranchRef` output.
///
/// The ref is null for an empty repository.
pub(crate) fn parse_default_branch(json: &str) -> Result<Option<String>> {
    let view: RepoView = serde_json::from_str(json)
        .map_err(|e| OpsError::Lookup(format!("failed to parse repository info: {}", e)))?;

    let name = view
        .default_branch_ref
        .and_then(|branch| branch.name)
        .filter(|name| !name.is_empty());

    Ok(name)
}

#[cfg(test)]
#[path = "forge_tests.rs"]
mod forge_tests;
