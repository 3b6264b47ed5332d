#[cfg(test)]
mod tests {
    use super::super::parse_default_branch;
    use crate::OpsError;

    #[test]
    fn test_default_branch_present() {
        let json = r#"{"defaultBranchRef":{"name":"main"}}"#;
        assert_eq!(parse_default_branch(json).unwrap(), Some("main".to_string()));
    }

    #[test]
    fn test_null_ref_means_no_commits() {
        let json = r#"{"defaultBranchRef":null}"#;
        assert_eq!(parse_default_branch(json).unwrap(), None);
    }

    #[test]
    fn test_empty_branch_name_means_no_commits() {
        let json = r#"{"defaultBranchRef":{"name":""}}"#;
        assert_eq!(parse_default_branch(json).unwrap(), None);
    }

    #[test]
    fn test_missing_ref_means_no_commits() {
        assert_eq!(parse_default_branch("{}").unwrap(), None);
    }

    #[test]
    fn test_unparseable_output_is_a_lookup_error() {
        let err = parse_default_branch("not json").unwrap_err();
        assert!(matches!(err, OpsError::Lookup(_)));
    }
}
