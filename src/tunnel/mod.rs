//! SSH local-port-forward tunnel to a remote database.
//!
//! The tunnel is modeled as a scoped resource: [`Tunnel::open`] launches the
//! forwarding ssh process and waits for the port to accept connections,
//! [`Tunnel::close`] tears it down, and `Drop` covers every other exit path
//! so the forwarding process is not orphaned.

use crate::{exec, OpsError, Result};
use nix::sys::signal::{kill, Signal};
use nix::unistd::Pid;
use std::thread;
use std::time::{Duration, Instant};

/// How long to wait for the forwarded port to accept connections.
const READY_TIMEOUT: Duration = Duration::from_secs(10);
const READY_POLL_INTERVAL: Duration = Duration::from_millis(200);

/// Forwarding configuration for one tunnel.
///
/// `db_host` and `remote_db_port` are the database endpoint as seen from the
/// SSH host, not from this machine.
#[derive(Debug, Clone)]
pub struct TunnelSpec {
    pub local_port: u16,
    pub db_host: String,
    pub remote_db_port: String,
    pub remote_user: String,
    pub remote_host: String,
}

impl TunnelSpec {
    /// Build the ssh argument list: `-fN` backgrounds the process once
    /// authentication and forwarding are established.
    pub fn to_ssh_args(&self) -> Vec<String> {
        vec![
            "-fN".to_string(),
            "-L".to_string(),
            format!("{}:{}:{}", self.local_port, self.db_host, self.remote_db_port),
            format!("{}@{}", self.remote_user, self.remote_host),
        ]
    }
}

/// A live forwarding session, torn down at most once.
pub struct Tunnel {
    local_port: u16,
    open: bool,
}

impl Tunnel {
    /// Launch the tunnel and wait until the forwarding port is connectable.
    ///
    /// Fails up front if the local port is already taken, and with
    /// [`OpsError::TunnelNotReady`] if the port never starts accepting
    /// connections within the timeout (the ssh process is then torn down
    /// best-effort).
    pub fn open(spec: &TunnelSpec) -> Result<Tunnel> {
        if !port_scanner::local_port_available(spec.local_port) {
            return Err(OpsError::PortUnavailable(spec.local_port));
        }

        tracing::info!(
            "Opening SSH tunnel {}:{}:{} via {}@{}",
            spec.local_port,
            spec.db_host,
            spec.remote_db_port,
            spec.remote_user,
            spec.remote_host
        );

        let args = spec.to_ssh_args();
        let args: Vec<&str> = args.iter().map(String::as_str).collect();
        exec::run("ssh", &args)?;

        let mut tunnel = Tunnel {
            local_port: spec.local_port,
            open: true,
        };

        if let Err(e) = wait_until_ready(spec.local_port) {
            if let Err(teardown_err) = tunnel.teardown() {
                tracing::warn!("Failed to tear down unready tunnel: {}", teardown_err);
            }
            return Err(e);
        }

        tracing::info!("SSH tunnel ready on port {}", spec.local_port);
        Ok(tunnel)
    }

    pub fn local_port(&self) -> u16 {
        self.local_port
    }

    /// Tear the tunnel down, consuming it so `Drop` does not run it again.
    pub fn close(mut self) -> Result<()> {
        self.teardown()
    }

    fn teardown(&mut self) -> Result<()> {
        if !self.open {
            return Ok(());
        }
        self.open = false;

        let pid = find_pid_on_port(self.local_port)?;
        tracing::info!(
            "Terminating SSH tunnel process {} on port {}",
            pid,
            self.local_port
        );

        kill(Pid::from_raw(pid), Signal::SIGTERM).map_err(|e| OpsError::CommandFailed {
            command: format!("kill {}", pid),
            reason: e.to_string(),
        })
    }
}

impl Drop for Tunnel {
    fn drop(&mut self) {
        if !self.open {
            return;
        }
        if let Err(e) = self.teardown() {
            tracing::warn!(
                "Failed to tear down SSH tunnel on port {}: {}",
                self.local_port,
                e
            );
        }
    }
}

/// Poll the forwarding port until it accepts a connection.
///
/// `ssh -f` returns once forwarding is set up, but the port may not accept
/// connections immediately; dumping before it does fails with a confusing
/// connection error.
fn wait_until_ready(port: u16) -> Result<()> {
    let start = Instant::now();

    while start.elapsed() < READY_TIMEOUT {
        if port_scanner::scan_port(port) {
            return Ok(());
        }
        thread::sleep(READY_POLL_INTERVAL);
    }

    Err(OpsError::TunnelNotReady {
        port,
        waited_ms: READY_TIMEOUT.as_millis() as u64,
    })
}

/// Find the process currently bound to `port`.
fn find_pid_on_port(port: u16) -> Result<i32> {
    let output = exec::output("lsof", &["-t", "-i", &format!(":{}", port)])?;

    let pid = output
        .lines()
        .next()
        .map(str::trim)
        .unwrap_or("")
        .to_string();

    if pid.is_empty() {
        return Err(OpsError::Lookup(format!("no process found on port {}", port)));
    }

    pid.parse::<i32>()
        .map_err(|e| OpsError::Lookup(format!("invalid PID '{}' on port {}: {}", pid, port, e)))
}
