// Database backup module - connection parsing and dump invocation
pub mod dump;

pub use dump::{artifact_path, DumpJob};

use crate::{OpsError, Result};
use std::str::FromStr;

/// Connection settings for the database being backed up.
///
/// Parsed from `<user>:<password>@<host>:<port>/<dbname>`,
/// e.g. `postgres:v8hlDV0yMAHHlIurYupj@10.1.0.54:15432/golang`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DbConfig {
    pub user: String,
    pub password: String,
    pub host: String,
    pub port: String,
    pub dbname: String,
}

/// SSH endpoint in front of a remote database.
///
/// Parsed from `<user>@<host>:<remote-db-port>`,
/// e.g. `admin@192.168.1.10:5432`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RemoteHost {
    pub user: String,
    pub host: String,
    pub port: String,
}

fn parse_error(what: &'static str, reason: &str) -> OpsError {
    OpsError::Parse {
        what,
        reason: reason.to_string(),
    }
}

fn split_exact<'a>(
    input: &'a str,
    separator: char,
    what: &'static str,
    reason: &str,
) -> Result<(&'a str, &'a str)> {
    let parts: Vec<&str> = input.split(separator).collect();
    if parts.len() != 2 {
        return Err(parse_error(what, reason));
    }
    Ok((parts[0], parts[1]))
}

impl FromStr for DbConfig {
    type Err = OpsError;

    fn from_str(s: &str) -> Result<Self> {
        const WHAT: &str = "database config";

        let (credentials, endpoint) =
            split_exact(s, '@', WHAT, "missing or invalid user and host segment")?;
        let (user, password) = split_exact(
            credentials,
            ':',
            WHAT,
            "missing or invalid username and password segment",
        )?;
        let (host, port_db) = split_exact(
            endpoint,
            ':',
            WHAT,
            "missing or invalid host and port segment",
        )?;
        let (port, dbname) = split_exact(
            port_db,
            '/',
            WHAT,
            "missing or invalid database name segment",
        )?;

        if [user, password, host, port, dbname]
            .iter()
            .any(|field| field.is_empty())
        {
            return Err(parse_error(WHAT, "empty field"));
        }

        Ok(DbConfig {
            user: user.to_string(),
            password: password.to_string(),
            host: host.to_string(),
            port: port.to_string(),
            dbname: dbname.to_string(),
        })
    }
}

impl FromStr for RemoteHost {
    type Err = OpsError;

    fn from_str(s: &str) -> Result<Self> {
        const WHAT: &str = "remote host";

        let (user, endpoint) =
            split_exact(s, '@', WHAT, "missing or invalid user and host segment")?;
        let (host, port) = split_exact(
            endpoint,
            ':',
            WHAT,
            "missing or invalid host and port segment",
        )?;

        if [user, host, port].iter().any(|field| field.is_empty()) {
            return Err(parse_error(WHAT, "empty field"));
        }

        Ok(RemoteHost {
            user: user.to_string(),
            host: host.to_string(),
            port: port.to_string(),
        })
    }
}
