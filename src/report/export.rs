//! JSON export of the startup report.
//!
//! Machine-readable counterpart of the text banner, built from the same
//! aggregation so both outputs always agree.

use crate::address::format_url;
use crate::status::{self, MonitorableState};
use crate::types::Report;
use crate::version::documentation_version;
use serde_json::{Value, json};
use std::io::{self, Write};

/// Build the JSON document for a report.
///
/// # Arguments
/// * `report` - The report to export
/// * `addresses` - Resolved addresses to advertise
pub fn report_to_json(report: &Report, addresses: &[String]) -> Value {
    let monitorables: Vec<Value> = report
        .statuses
        .iter()
        .map(|s| {
            let state = MonitorableState::classify(s);
            json!({
                "name": s.display_name,
                "state": state,
                "summary": status::variant_summary(s),
                "enabled_variants": s.enabled_variants,
                "errored_variants": s.errored_outcomes,
            })
        })
        .collect();

    let running_at: Vec<String> = addresses.iter().map(|a| format_url(a, report.port)).collect();

    json!({
        "version": report.version,
        "build_tags": report.build_tags,
        "documentation_version": documentation_version(&report.version),
        "disable_ui": report.disable_ui,
        "running_at": running_at,
        "ignored_count": status::ignored_count(&report.statuses),
        "monitorables": monitorables,
    })
}

/// Write the report as pretty-printed JSON.
pub fn write_json_report<W: Write>(writer: &mut W, report: &Report, addresses: &[String]) -> io::Result<()> {
    let document = report_to_json(report, addresses);
    serde_json::to_writer_pretty(&mut *writer, &document)?;
    writeln!(writer)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{IntegrationStatus, VariantOutcome};

    fn sample_report() -> Report {
        Report {
            version: "1.2.0-dev".to_string(),
            build_tags: String::new(),
            disable_ui: false,
            port: 3000,
            address: Some("1.2.3.4".to_string()),
            statuses: vec![
                IntegrationStatus {
                    display_name: "Jenkins".to_string(),
                    enabled_variants: vec!["default".to_string()],
                    errored_outcomes: vec![VariantOutcome {
                        variant_name: "nightly".to_string(),
                        succeeded: false,
                        errors: vec!["error 1".to_string()],
                    }],
                },
                IntegrationStatus::new("Port"),
            ],
        }
    }

    #[test]
    fn test_json_carries_summary_and_counts() {
        let value = report_to_json(&sample_report(), &["1.2.3.4".to_string()]);

        assert_eq!(value["version"], "1.2.0-dev");
        assert_eq!(value["documentation_version"], "1.2/");
        assert_eq!(value["ignored_count"], 1);
        assert_eq!(value["running_at"][0], "http://1.2.3.4:3000");
        assert_eq!(value["monitorables"][0]["state"], "warning");
        assert_eq!(value["monitorables"][0]["summary"], "[default]");
        assert_eq!(value["monitorables"][0]["errored_variants"][0]["variant_name"], "nightly");
        assert_eq!(value["monitorables"][1]["state"], "hidden");
    }

    #[test]
    fn test_write_json_report_is_valid_json() {
        let mut buffer = Vec::new();
        write_json_report(&mut buffer, &sample_report(), &["1.2.3.4".to_string()]).unwrap();

        let parsed: Value = serde_json::from_slice(&buffer).unwrap();
        assert_eq!(parsed["monitorables"].as_array().map(|a| a.len()), Some(2));
    }
}
