//! Environment checks run before any repository or backup operation.
//!
//! Missing binaries are installed through the platform's package manager;
//! a missing SSH keypair is generated and its public half registered with
//! the forge.

pub mod platform;

pub use platform::{ExternalTool, Platform};

use crate::{exec, forge::ForgeClient, OpsError, Result};
use std::fs;
use std::os::unix::fs::PermissionsExt;
use std::path::PathBuf;

const SSH_KEY_TITLE: &str = "forgeops-key";

pub struct Preflight {
    platform: Platform,
}

impl Preflight {
    pub fn new(platform: Platform) -> Self {
        Self { platform }
    }

    /// Checks required by the repository commands: forge CLI, git, and a
    /// registered SSH keypair.
    pub fn ensure_repo_tools(&self, forge: &ForgeClient) -> Result<()> {
        tracing::info!("Running environment checks");

        self.ensure_tool(ExternalTool::GithubCli)?;
        self.ensure_tool(ExternalTool::Git)?;
        self.ensure_ssh_key(forge)?;

        println!("✓ All environment checks passed");
        Ok(())
    }

    /// Check required by the backup command: the dump utility.
    pub fn ensure_dump_utility(&self) -> Result<()> {
        let tool = ExternalTool::PgDump;

        if exec::binary_on_path(tool.binary()) {
            let version = exec::output(tool.binary(), &["--version"])?;
            tracing::info!("pg_dump version: {}", version.trim());
            return Ok(());
        }

        self.install(tool)
    }

    fn ensure_tool(&self, tool: ExternalTool) -> Result<()> {
        if exec::binary_on_path(tool.binary()) {
            tracing::debug!("{} is already installed", tool.binary());
            return Ok(());
        }

        self.install(tool)
    }

    fn install(&self, tool: ExternalTool) -> Result<()> {
        println!("Installing {}...", tool.binary());

        for step in self.platform.install_commands(tool)? {
            let args: Vec<&str> = step[1..].iter().map(String::as_str).collect();
            exec::run(&step[0], &args).map_err(|e| {
                OpsError::Environment(format!("failed to install {}: {}", tool.binary(), e))
            })?;
        }

        println!("✓ {} installed", tool.binary());
        Ok(())
    }

    /// Generate an SSH keypair if none exists, registering a freshly
    /// generated public key with the forge.
    fn ensure_ssh_key(&self, forge: &ForgeClient) -> Result<()> {
        let ssh_dir = ssh_dir()?;
        let public_key = ssh_dir.join("id_rsa.pub");

        if public_key.exists() {
            tracing::debug!("SSH key already present at {}", public_key.display());
            return Ok(());
        }

        println!("Generating SSH key...");
        generate_ssh_key(&ssh_dir)?;

        fs::read(&public_key)
            .map_err(|e| OpsError::Environment(format!("failed to read SSH key: {}", e)))?;

        println!("Adding SSH key to the forge...");
        forge.register_ssh_key(&public_key, SSH_KEY_TITLE)?;
        println!("✓ SSH key registered");

        Ok(())
    }
}

fn ssh_dir() -> Result<PathBuf> {
    let home = dirs::home_dir()
        .ok_or_else(|| OpsError::Environment("home directory not found".to_string()))?;
    Ok(home.join(".ssh"))
}

fn generate_ssh_key(ssh_dir: &PathBuf) -> Result<()> {
    fs::create_dir_all(ssh_dir)?;
    fs::set_permissions(ssh_dir, fs::Permissions::from_mode(0o700))?;

    let key_path = ssh_dir.join("id_rsa");
    exec::run(
        "ssh-keygen",
        &[
            "-t",
            "rsa",
            "-b",
            "4096",
            "-f",
            &key_path.to_string_lossy(),
            "-N",
            "",
        ],
    )
}
