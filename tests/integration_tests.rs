use forgeops::{
    db::{artifact_path, DbConfig, DumpJob, RemoteHost},
    preflight::{ExternalTool, Platform},
    tunnel::TunnelSpec,
};
use chrono::TimeZone;
use tempfile::TempDir;

#[test]
fn test_remote_backup_wiring() {
    // Parse both descriptors the way `db backup --remote` does, then check
    // that the tunnel forwards to the remote database and the dump targets
    // the tunnel endpoint rather than the database host.
    let config: DbConfig = "postgres:secret@10.1.0.54:15432/golang".parse().unwrap();
    let remote: RemoteHost = "admin@192.168.1.10:5432".parse().unwrap();
    let tunnel_port = 5433u16;

    let spec = TunnelSpec {
        local_port: tunnel_port,
        db_host: config.host.clone(),
        remote_db_port: remote.port.clone(),
        remote_user: remote.user.clone(),
        remote_host: remote.host.clone(),
    };
    assert_eq!(
        spec.to_ssh_args(),
        vec!["-fN", "-L", "5433:10.1.0.54:5432", "admin@192.168.1.10"]
    );

    let out_dir = TempDir::new().unwrap();
    let at = chrono::Local.with_ymd_and_hms(2024, 11, 3, 14, 5, 9).unwrap();
    let backup_file = artifact_path(out_dir.path(), &config.dbname, at);

    let job = DumpJob {
        host: "localhost".to_string(),
        port: tunnel_port.to_string(),
        user: config.user.clone(),
        dbname: config.dbname.clone(),
        output: backup_file.clone(),
    };

    let args = job.to_args();
    assert_eq!(args[1], "localhost");
    assert_eq!(args[3], "5433");
    assert_eq!(
        backup_file.file_name().unwrap().to_string_lossy(),
        "golang_backup_20241103_140509.dump"
    );
}

#[test]
fn test_local_backup_targets_configured_host() {
    let config: DbConfig = "u:p@db.internal:5432/app".parse().unwrap();

    let out_dir = TempDir::new().unwrap();
    let at = chrono::Local.with_ymd_and_hms(2025, 2, 1, 8, 30, 0).unwrap();

    let job = DumpJob {
        host: config.host.clone(),
        port: config.port.clone(),
        user: config.user.clone(),
        dbname: config.dbname.clone(),
        output: artifact_path(out_dir.path(), &config.dbname, at),
    };

    let args = job.to_args();
    assert_eq!(args[1], "db.internal");
    assert_eq!(args[3], "5432");

    // Custom-format archive is always requested
    assert!(args.windows(2).any(|w| w[0] == "-F" && w[1] == "c"));
}

#[test]
fn test_install_plans_cover_all_tools() {
    for tool in [ExternalTool::GithubCli, ExternalTool::Git, ExternalTool::PgDump] {
        let brew = Platform::MacOs.install_commands(tool).unwrap();
        assert_eq!(brew.len(), 1);
        assert_eq!(brew[0][0], "brew");

        let apt = Platform::Debian.install_commands(tool).unwrap();
        assert_eq!(apt.len(), 2);
        assert_eq!(apt[1][0], "sudo");

        assert!(Platform::Unsupported("freebsd".to_string())
            .install_commands(tool)
            .is_err());
    }
}

#[test]
fn test_malformed_descriptors_are_rejected() {
    assert!("u@h:5432/db".parse::<DbConfig>().is_err());
    assert!("u:p@h:5432".parse::<DbConfig>().is_err());
    assert!("admin-10.0.0.1:2222".parse::<RemoteHost>().is_err());
    assert!("admin@10.0.0.1".parse::<RemoteHost>().is_err());
}
