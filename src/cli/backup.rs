use crate::{
    db::{artifact_path, DbConfig, DumpJob, RemoteHost},
    preflight::Preflight,
    tunnel::{Tunnel, TunnelSpec},
};
use anyhow::Result;
use std::fs;
use std::path::Path;

pub fn execute(
    db_config: &str,
    save_path: &Path,
    remote: Option<&str>,
    tunnel_port: u16,
    preflight: &Preflight,
) -> Result<()> {
    tracing::info!("Starting database backup process");

    preflight.ensure_dump_utility()?;

    let config: DbConfig = db_config.parse()?;

    fs::create_dir_all(save_path)?;
    let backup_file = artifact_path(save_path, &config.dbname, chrono::Local::now());

    match remote {
        Some(remote) => {
            let remote: RemoteHost = remote.parse()?;

            let spec = TunnelSpec {
                local_port: tunnel_port,
                db_host: config.host.clone(),
                remote_db_port: remote.port.clone(),
                remote_user: remote.user.clone(),
                remote_host: remote.host.clone(),
            };
            let tunnel = Tunnel::open(&spec)?;

            let job = DumpJob {
                host: "localhost".to_string(),
                port: tunnel.local_port().to_string(),
                user: config.user.clone(),
                dbname: config.dbname.clone(),
                output: backup_file.clone(),
            };

            // The dump outcome alone decides success; teardown problems are
            // only surfaced as warnings.
            let dump_result = job.run(&config.password);

            match tunnel.close() {
                Ok(()) => println!("✓ SSH tunnel on port {} terminated", tunnel_port),
                Err(e) => tracing::warn!("Failed to terminate SSH tunnel: {}", e),
            }

            dump_result?;
        }
        None => {
            let job = DumpJob {
                host: config.host.clone(),
                port: config.port.clone(),
                user: config.user.clone(),
                dbname: config.dbname.clone(),
                output: backup_file.clone(),
            };
            job.run(&config.password)?;
        }
    }

    println!("✓ Backup saved to {}", backup_file.display());
    Ok(())
}
