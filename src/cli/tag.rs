use crate::{forge::ForgeClient, git::GitRepo, preflight::Preflight};
use anyhow::Result;
use std::path::Path;

pub fn execute(
    tag_name: &str,
    branch_name: &str,
    folder_path: &Path,
    preflight: &Preflight,
    forge: &ForgeClient,
) -> Result<()> {
    tracing::info!("Starting the tagging process");

    preflight.ensure_repo_tools(forge)?;

    if !folder_path.is_dir() {
        anyhow::bail!("Folder not found: {}", folder_path.display());
    }

    let repo = GitRepo::new(folder_path);

    if repo.tag_exists(tag_name)? {
        println!("✓ Tag '{}' already exists, skipping creation", tag_name);
        return Ok(());
    }

    repo.create_tag(tag_name, branch_name)?;
    println!("✓ Tag '{}' created from origin/{}", tag_name, branch_name);

    Ok(())
}
