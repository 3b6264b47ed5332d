#[cfg(test)]
mod tests {
    use super::super::tag_listed;

    #[test]
    fn test_exact_tag_match() {
        assert!(tag_listed("v1.0\n", "v1.0"));
    }

    #[test]
    fn test_no_output_means_tag_absent() {
        assert!(!tag_listed("", "v1.0"));
        assert!(!tag_listed("\n", "v1.0"));
    }

    #[test]
    fn test_prefix_match_does_not_count() {
        assert!(!tag_listed("v1.0-rc1\n", "v1.0"));
    }

    #[test]
    fn test_multiple_listed_tags_do_not_count() {
        assert!(!tag_listed("v1.0\nv1.0-rc1\n", "v1.0"));
    }
}
