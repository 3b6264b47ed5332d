use crate::{forge::ForgeClient, git::GitRepo, preflight::Preflight};
use anyhow::Result;
use std::path::Path;

pub fn execute(
    repo_name: &str,
    folder_path: &Path,
    preflight: &Preflight,
    forge: &ForgeClient,
) -> Result<()> {
    tracing::info!("Starting the repository creation process");

    preflight.ensure_repo_tools(forge)?;

    if !folder_path.is_dir() {
        anyhow::bail!("Folder not found: {}", folder_path.display());
    }

    if forge.repo_exists(repo_name)? {
        println!("✓ Repository '{}' already exists, skipping creation", repo_name);
    } else {
        tracing::info!("Creating new repository: {}", repo_name);
        forge.create_repo(repo_name)?;
        println!("✓ Repository '{}' created", repo_name);
    }

    match forge.default_branch(repo_name)? {
        Some(branch) => {
            println!(
                "✓ Repository '{}' already has commits on '{}', skipping push",
                repo_name, branch
            );
        }
        None => {
            tracing::info!("Pushing {} as the first commit", folder_path.display());
            let repo = GitRepo::new(folder_path);
            repo.publish_initial_commit()?;
            println!("✓ Folder pushed to '{}'", repo_name);
        }
    }

    println!("\n✓ Repository '{}' is ready", repo_name);
    Ok(())
}
