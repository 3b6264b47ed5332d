//! Git command wrappers.
//!
//! Every operation runs the system `git` binary inside the repository's
//! working directory; nothing is rolled back when a step in a sequence
//! fails.

use crate::{exec, OpsError, Result};
use std::path::PathBuf;

pub struct GitRepo {
    workdir: PathBuf,
}

impl GitRepo {
    pub fn new(workdir: impl Into<PathBuf>) -> Self {
        Self {
            workdir: workdir.into(),
        }
    }

    /// Initialize the folder and push it as the repository's first commit:
    /// init, stage everything, commit, rename the branch to `main`, push
    /// with upstream tracking. The first failing step aborts the rest.
    pub fn publish_initial_commit(&self) -> Result<()> {
        self.run(&["init"])?;
        self.run(&["add", "."])?;
        self.run(&["commit", "-m", "Initial commit"])?;
        self.run(&["branch", "-M", "main"])?;
        self.run(&["push", "-u", "origin", "main"])
    }

    /// Check whether `tag_name` already exists locally.
    pub fn tag_exists(&self, tag_name: &str) -> Result<bool> {
        let output = exec::output_in(&self.workdir, "git", &["tag", "--list", tag_name])
            .map_err(|e| OpsError::Lookup(format!("failed to list tags: {}", e)))?;

        Ok(tag_listed(&output, tag_name))
    }

    /// Tag the latest commit of `origin/<branch>` and push the tag.
    pub fn create_tag(&self, tag_name: &str, branch_name: &str) -> Result<()> {
        self.run(&["fetch", "origin", branch_name])?;
        self.run(&["tag", tag_name, &format!("origin/{}", branch_name)])?;
        self.run(&["push", "origin", tag_name])
    }

    fn run(&self, args: &[&str]) -> Result<()> {
        exec::run_in(&self.workdir, "git", args)
    }
}

/// A tag counts as listed only when the trimmed output equals the name
/// exactly; prefix matches from glob expansion do not.
pub(crate) fn tag_listed(output: &str, tag_name: &str) -> bool {
    output.trim() == tag_name
}

#[cfg(test)]
#[path = "git_tests.rs"]
mod git_tests;
