#[cfg(test)]
mod tests {
    use super::super::{artifact_path, DumpJob};
    use chrono::TimeZone;
    use std::path::{Path, PathBuf};

    fn test_job() -> DumpJob {
        DumpJob {
            host: "10.1.0.54".to_string(),
            port: "15432".to_string(),
            user: "postgres".to_string(),
            dbname: "golang".to_string(),
            output: PathBuf::from("/backups/golang_backup_20241103_140509.dump"),
        }
    }

    #[test]
    fn test_args_target_the_configured_endpoint() {
        let args = test_job().to_args();

        assert_eq!(
            args,
            vec![
                "-h",
                "10.1.0.54",
                "-p",
                "15432",
                "-U",
                "postgres",
                "-d",
                "golang",
                "-F",
                "c",
                "-f",
                "/backups/golang_backup_20241103_140509.dump",
            ]
        );
    }

    #[test]
    fn test_args_always_request_custom_format_archive() {
        let args = test_job().to_args();

        let format_flag = args.iter().position(|a| a == "-F").unwrap();
        assert_eq!(args[format_flag + 1], "c");
    }

    #[test]
    fn test_artifact_name_embeds_dbname_and_timestamp() {
        let at = chrono::Local.with_ymd_and_hms(2024, 11, 3, 14, 5, 9).unwrap();
        let path = artifact_path(Path::new("/backups"), "golang", at);

        assert_eq!(
            path,
            PathBuf::from("/backups/golang_backup_20241103_140509.dump")
        );
    }

    #[test]
    fn test_artifact_name_shape() {
        let at = chrono::Local.with_ymd_and_hms(2025, 1, 31, 23, 59, 59).unwrap();
        let path = artifact_path(Path::new("out"), "mydb", at);
        let name = path.file_name().unwrap().to_string_lossy().to_string();

        // <dbname>_backup_<8 digits>_<6 digits>.dump
        let rest = name.strip_prefix("mydb_backup_").unwrap();
        let rest = rest.strip_suffix(".dump").unwrap();
        let (date, time) = rest.split_once('_').unwrap();

        assert_eq!(date.len(), 8);
        assert!(date.chars().all(|c| c.is_ascii_digit()));
        assert_eq!(time.len(), 6);
        assert!(time.chars().all(|c| c.is_ascii_digit()));
    }
}
