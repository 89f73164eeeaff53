#[cfg(test)]
mod tests {
    use super::super::*;

    #[test]
    fn test_defaults_match_worker_deployment() {
        // The workers read the same queue with the same defaults; these
        // three only change together with the worker configuration.
        assert_eq!(default_redis_url(), "redis://redis:6379");
        assert_eq!(default_queue_name(), "python_tasks");
        assert_eq!(default_port(), 3000);
    }

    #[test]
    fn test_parsed_accepts_numeric_override() {
        std::env::set_var("TOPICLENS_TEST_GOOD_PORT", "8080");
        assert_eq!(parsed::<u16>("TOPICLENS_TEST_GOOD_PORT").unwrap(), Some(8080));
    }

    #[test]
    fn test_parsed_rejects_garbage() {
        std::env::set_var("TOPICLENS_TEST_BAD_PORT", "not-a-port");
        let err = parsed::<u16>("TOPICLENS_TEST_BAD_PORT").unwrap_err();
        assert!(matches!(err, ConfigError::Invalid { key: "TOPICLENS_TEST_BAD_PORT", .. }));
    }

    #[test]
    fn test_blank_value_means_unset() {
        std::env::set_var("TOPICLENS_TEST_BLANK", "   ");
        assert_eq!(optional("TOPICLENS_TEST_BLANK"), None);
        assert_eq!(parsed::<u16>("TOPICLENS_TEST_BLANK").unwrap(), None);
    }

    #[test]
    fn test_missing_required_key_reports_which() {
        let err = require("TOPICLENS_TEST_NEVER_SET").unwrap_err();
        assert_eq!(err.to_string(), "TOPICLENS_TEST_NEVER_SET must be set");
    }
}
