use crate::{OpsError, Result};

/// External binaries the tool depends on.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExternalTool {
    GithubCli,
    Git,
    PgDump,
}

impl ExternalTool {
    /// Name of the binary looked up on PATH.
    pub fn binary(&self) -> &'static str {
        match self {
            ExternalTool::GithubCli => "gh",
            ExternalTool::Git => "git",
            ExternalTool::PgDump => "pg_dump",
        }
    }

    fn brew_formula(&self) -> &'static str {
        match self {
            ExternalTool::GithubCli => "gh",
            ExternalTool::Git => "git",
            ExternalTool::PgDump => "postgresql",
        }
    }

    fn apt_package(&self) -> &'static str {
        match self {
            ExternalTool::GithubCli => "gh",
            ExternalTool::Git => "git",
            ExternalTool::PgDump => "postgresql-client",
        }
    }
}

/// Install strategy keyed by detected platform.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Platform {
    MacOs,
    Debian,
    Unsupported(String),
}

impl Platform {
    pub fn detect() -> Self {
        match std::env::consts::OS {
            "macos" => Platform::MacOs,
            "linux" => Platform::Debian,
            os => Platform::Unsupported(os.to_string()),
        }
    }

    /// Commands to install `tool` on this platform, in order.
    pub fn install_commands(&self, tool: ExternalTool) -> Result<Vec<Vec<String>>> {
        let to_owned = |step: &[&str]| step.iter().map(|s| s.to_string()).collect();

        match self {
            Platform::MacOs => Ok(vec![to_owned(&["brew", "install", tool.brew_formula()])]),
            Platform::Debian => Ok(vec![
                to_owned(&["sudo", "apt", "update"]),
                to_owned(&["sudo", "apt", "install", "-y", tool.apt_package()]),
            ]),
            Platform::Unsupported(os) => Err(OpsError::UnsupportedPlatform(os.clone())),
        }
    }
}

#[cfg(test)]
#[path = "platform_tests.rs"]
mod platform_tests;
