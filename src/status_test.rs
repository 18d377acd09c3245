/// Tests for status aggregation
#[cfg(test)]
mod tests {
    use crate::status::*;
    use crate::types::{IntegrationStatus, VariantOutcome};

    fn status(enabled: &[&str], errored: &[(&str, &[&str])]) -> IntegrationStatus {
        IntegrationStatus {
            display_name: "Monitorable".to_string(),
            enabled_variants: enabled.iter().map(|v| v.to_string()).collect(),
            errored_outcomes: errored
                .iter()
                .map(|(name, errors)| VariantOutcome {
                    variant_name: name.to_string(),
                    succeeded: false,
                    errors: errors.iter().map(|e| e.to_string()).collect(),
                })
                .collect(),
        }
    }

    #[test]
    fn test_classify_hidden() {
        let s = status(&[], &[]);
        assert_eq!(MonitorableState::classify(&s), MonitorableState::Hidden);
        assert!(MonitorableState::classify(&s).is_hidden());
    }

    #[test]
    fn test_classify_ok() {
        let s = status(&["default", "variant1"], &[]);
        assert_eq!(MonitorableState::classify(&s), MonitorableState::Ok);
        assert_eq!(MonitorableState::Ok.glyph(), "✓ ");
    }

    #[test]
    fn test_classify_warning() {
        let s = status(&["default"], &[("variant1", &["error 1"])]);
        assert_eq!(MonitorableState::classify(&s), MonitorableState::Warning);
        assert_eq!(MonitorableState::Warning.glyph(), "! ");
    }

    #[test]
    fn test_classify_failed() {
        let s = status(&[], &[("default", &["error 1"])]);
        assert_eq!(MonitorableState::classify(&s), MonitorableState::Failed);
        assert_eq!(MonitorableState::Failed.glyph(), "x ");
    }

    #[test]
    fn test_ignored_count_counts_hidden_only() {
        let statuses = vec![
            status(&[], &[]),
            status(&["default"], &[]),
            status(&[], &[("default", &["error 1"])]),
            status(&[], &[]),
        ];
        assert_eq!(ignored_count(&statuses), 2);
        assert_eq!(ignored_count(&[]), 0);
    }

    #[test]
    fn test_summary_lone_default_is_empty() {
        assert_eq!(variant_summary(&status(&["default"], &[])), "");
    }

    #[test]
    fn test_summary_lone_default_with_errors() {
        let s = status(&["default"], &[("variant1", &["error 1", "error 2"])]);
        assert_eq!(variant_summary(&s), "[default]");
    }

    #[test]
    fn test_summary_default_and_variants() {
        let s = status(&["default", "variant1", "variant2"], &[]);
        assert_eq!(variant_summary(&s), "[default, variants: [variant1, variant2]]");
    }

    #[test]
    fn test_summary_variants_without_default() {
        assert_eq!(variant_summary(&status(&["variant1"], &[])), "[variants: [variant1]]");
    }

    #[test]
    fn test_summary_keeps_registration_order() {
        let s = status(&["zeta", "default", "alpha"], &[]);
        assert_eq!(variant_summary(&s), "[default, variants: [zeta, alpha]]");
    }

    #[test]
    fn test_summary_nothing_enabled_is_empty() {
        assert_eq!(variant_summary(&status(&[], &[("default", &["error 1"])])), "");
        assert_eq!(variant_summary(&status(&[], &[])), "");
    }

    #[test]
    fn test_errored_header_default() {
        let s = status(&[], &[("default", &["error 1"])]);
        assert_eq!(errored_header(&s.errored_outcomes[0]), "/!\\ Errored default configuration");
    }

    #[test]
    fn test_errored_header_named_variant_is_quoted() {
        let s = status(&[], &[("variant1", &["error 1"])]);
        assert_eq!(errored_header(&s.errored_outcomes[0]), "/!\\ Errored \"variant1\" variant configuration");
    }
}
