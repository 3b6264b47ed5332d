//! Thin wrappers around [`std::process::Command`].
//!
//! Every operation in this crate shells out to an external binary (`gh`,
//! `git`, `ssh`, `pg_dump`, `lsof`). These helpers centralize how children
//! are spawned, how their exit status is interpreted, and how failures are
//! wrapped into [`OpsError::CommandFailed`].

use crate::{OpsError, Result};
use std::path::Path;
use std::process::{Command, Stdio};

fn fmt_command(program: &str, args: &[&str]) -> String {
    if args.is_empty() {
        program.to_string()
    } else {
        format!("{} {}", program, args.join(" "))
    }
}

/// Run a command with inherited stdio, failing on a non-zero exit.
pub fn run(program: &str, args: &[&str]) -> Result<()> {
    tracing::debug!("Executing command: {}", fmt_command(program, args));

    let status = Command::new(program)
        .args(args)
        .status()
        .map_err(|e| OpsError::CommandFailed {
            command: fmt_command(program, args),
            reason: format!("failed to start: {}", e),
        })?;

    if !status.success() {
        return Err(OpsError::CommandFailed {
            command: fmt_command(program, args),
            reason: format!("exited with {}", status),
        });
    }

    Ok(())
}

/// Run a command with inherited stdio inside `dir`, failing on a non-zero exit.
pub fn run_in(dir: &Path, program: &str, args: &[&str]) -> Result<()> {
    tracing::debug!(
        "Executing command in {}: {}",
        dir.display(),
        fmt_command(program, args)
    );

    let status = Command::new(program)
        .args(args)
        .current_dir(dir)
        .status()
        .map_err(|e| OpsError::CommandFailed {
            command: fmt_command(program, args),
            reason: format!("failed to start: {}", e),
        })?;

    if !status.success() {
        return Err(OpsError::CommandFailed {
            command: fmt_command(program, args),
            reason: format!("exited with {}", status),
        });
    }

    Ok(())
}

/// Run a command and capture its stdout as a string.
///
/// A non-zero exit is an error carrying the child's stderr.
pub fn output(program: &str, args: &[&str]) -> Result<String> {
    tracing::debug!("Capturing command: {}", fmt_command(program, args));

    let output = Command::new(program)
        .args(args)
        .stdin(Stdio::null())
        .stdout(Stdio::piped())
        .stderr(Stdio::piped())
        .output()
        .map_err(|e| OpsError::CommandFailed {
            command: fmt_command(program, args),
            reason: format!("failed to start: {}", e),
        })?;

    if !output.status.success() {
        let stderr = String::from_utf8_lossy(&output.stderr);
        return Err(OpsError::CommandFailed {
            command: fmt_command(program, args),
            reason: format!("exited with {}: {}", output.status, stderr.trim()),
        });
    }

    Ok(String::from_utf8_lossy(&output.stdout).into_owned())
}

/// Run a command inside `dir` and capture its stdout as a string.
pub fn output_in(dir: &Path, program: &str, args: &[&str]) -> Result<String> {
    tracing::debug!(
        "Capturing command in {}: {}",
        dir.display(),
        fmt_command(program, args)
    );

    let output = Command::new(program)
        .args(args)
        .current_dir(dir)
        .stdin(Stdio::null())
        .stdout(Stdio::piped())
        .stderr(Stdio::piped())
        .output()
        .map_err(|e| OpsError::CommandFailed {
            command: fmt_command(program, args),
            reason: format!("failed to start: {}", e),
        })?;

    if !output.status.success() {
        let stderr = String::from_utf8_lossy(&output.stderr);
        return Err(OpsError::CommandFailed {
            command: fmt_command(program, args),
            reason: format!("exited with {}: {}", output.status, stderr.trim()),
        });
    }

    Ok(String::from_utf8_lossy(&output.stdout).into_owned())
}

/// Run a command with silenced stdio and report its exit code.
///
/// Used where a non-zero exit is meaningful rather than fatal (repository
/// existence checks). Death by signal has no exit code and is an error.
pub fn exit_code(program: &str, args: &[&str]) -> Result<i32> {
    tracing::debug!("Probing command: {}", fmt_command(program, args));

    let status = Command::new(program)
        .args(args)
        .stdin(Stdio::null())
        .stdout(Stdio::null())
        .stderr(Stdio::null())
        .status()
        .map_err(|e| OpsError::CommandFailed {
            command: fmt_command(program, args),
            reason: format!("failed to start: {}", e),
        })?;

    status.code().ok_or_else(|| OpsError::CommandFailed {
        command: fmt_command(program, args),
        reason: "terminated by signal".to_string(),
    })
}

/// Check whether `name` resolves to an executable on `PATH`.
pub fn binary_on_path(name: &str) -> bool {
    match std::env::var_os("PATH") {
        Some(path) => std::env::split_paths(&path).any(|dir| dir.join(name).is_file()),
        None => false,
    }
}
