use crate::{OpsError, Result};
use chrono::{DateTime, Local};
use std::path::{Path, PathBuf};
use std::process::{Command, Stdio};

/// One `pg_dump` invocation against a resolved endpoint.
///
/// In local mode the endpoint comes straight from the connection config; in
/// remote mode it is `localhost` on the tunnel's forwarding port.
#[derive(Debug, Clone)]
pub struct DumpJob {
    pub host: String,
    pub port: String,
    pub user: String,
    pub dbname: String,
    pub output: PathBuf,
}

impl DumpJob {
    /// Build the pg_dump argument list.
    ///
    /// Always requests the custom-format archive (`-F c`), which matches the
    /// `.dump` suffix of the artifact.
    pub fn to_args(&self) -> Vec<String> {
        vec![
            "-h".to_string(),
            self.host.clone(),
            "-p".to_string(),
            self.port.clone(),
            "-U".to_string(),
            self.user.clone(),
            "-d".to_string(),
            self.dbname.clone(),
            "-F".to_string(),
            "c".to_string(),
            "-f".to_string(),
            self.output.to_string_lossy().to_string(),
        ]
    }

    /// Run pg_dump, passing the password only through the child's
    /// environment so it never shows up in process listings.
    pub fn run(&self, password: &str) -> Result<()> {
        tracing::info!(
            "Dumping database '{}' from {}:{}",
            self.dbname,
            self.host,
            self.port
        );

        let output = Command::new("pg_dump")
            .args(self.to_args())
            .env("PGPASSWORD", password)
            .stdin(Stdio::null())
            .stdout(Stdio::piped())
            .stderr(Stdio::piped())
            .output()
            .map_err(|e| OpsError::CommandFailed {
                command: "pg_dump".to_string(),
                reason: format!("failed to start: {}", e),
            })?;

        if !output.status.success() {
            let stdout = String::from_utf8_lossy(&output.stdout);
            let stderr = String::from_utf8_lossy(&output.stderr);
            return Err(OpsError::CommandFailed {
                command: "pg_dump".to_string(),
                reason: format!(
                    "exited with {}\nOutput: {}\nError: {}",
                    output.status,
                    stdout.trim(),
                    stderr.trim()
                ),
            });
        }

        Ok(())
    }
}

/// Build the backup artifact path: `<dir>/<dbname>_backup_<YYYYMMDD_HHMMSS>.dump`.
pub fn artifact_path(dir: &Path, dbname: &str, at: DateTime<Local>) -> PathBuf {
    dir.join(format!(
        "{}_backup_{}.dump",
        dbname,
        at.format("%Y%m%d_%H%M%S")
    ))
}

#[cfg(test)]
#[path = "dump_tests.rs"]
mod dump_tests;
