use thiserror::Error;

#[derive(Error, Debug)]
pub enum OpsError {
    #[error("Invalid {what}: {reason}")]
    Parse { what: &'static str, reason: String },

    #[error("Environment error: {0}")]
    Environment(String),

    #[error("Unsupported platform: {0}")]
    UnsupportedPlatform(String),

    #[error("Command `{command}` failed: {reason}")]
    CommandFailed { command: String, reason: String },

    #[error("Lookup failed: {0}")]
    Lookup(String),

    #[error("Local port {0} is already in use")]
    PortUnavailable(u16),

    #[error("Tunnel on port {port} not ready after {waited_ms} ms")]
    TunnelNotReady { port: u16, waited_ms: u64 },

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, OpsError>;
