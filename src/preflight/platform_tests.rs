#[cfg(test)]
mod tests {
    use super::super::{ExternalTool, Platform};
    use crate::OpsError;

    #[test]
    fn test_macos_installs_with_a_single_brew_step() {
        let steps = Platform::MacOs
            .install_commands(ExternalTool::GithubCli)
            .unwrap();

        assert_eq!(steps, vec![vec!["brew", "install", "gh"]]);
    }

    #[test]
    fn test_debian_updates_before_installing() {
        let steps = Platform::Debian
            .install_commands(ExternalTool::Git)
            .unwrap();

        assert_eq!(
            steps,
            vec![
                vec!["sudo", "apt", "update"],
                vec!["sudo", "apt", "install", "-y", "git"],
            ]
        );
    }

    #[test]
    fn test_dump_utility_package_differs_per_platform() {
        let brew = Platform::MacOs
            .install_commands(ExternalTool::PgDump)
            .unwrap();
        assert_eq!(brew[0], vec!["brew", "install", "postgresql"]);

        let apt = Platform::Debian
            .install_commands(ExternalTool::PgDump)
            .unwrap();
        assert_eq!(apt[1], vec!["sudo", "apt", "install", "-y", "postgresql-client"]);
    }

    #[test]
    fn test_unsupported_platform_is_an_error() {
        let err = Platform::Unsupported("freebsd".to_string())
            .install_commands(ExternalTool::Git)
            .unwrap_err();

        assert!(matches!(err, OpsError::UnsupportedPlatform(os) if os == "freebsd"));
    }

    #[test]
    fn test_tool_binaries() {
        assert_eq!(ExternalTool::GithubCli.binary(), "gh");
        assert_eq!(ExternalTool::Git.binary(), "git");
        assert_eq!(ExternalTool::PgDump.binary(), "pg_dump");
    }
}
