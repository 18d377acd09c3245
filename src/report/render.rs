//! Full startup report composition.
//!
//! Composes the layout blocks in their fixed order and writes the result
//! to an output sink in one piece.

use super::layout;
use crate::address::{self, displayed_addresses};
use crate::config::CoreConfig;
use crate::console_format::Emphasis;
use crate::status::{self, MonitorableState};
use crate::types::{IntegrationStatus, Report};
use crate::version::documentation_version;
use std::io::{self, Write};

impl Report {
    /// Build the report from resolved configuration and collected statuses
    pub fn new(version: &str, build_tags: &str, config: &CoreConfig, statuses: Vec<IntegrationStatus>) -> Self {
        Report {
            version: version.to_string(),
            build_tags: build_tags.to_string(),
            disable_ui: config.disable_ui,
            port: config.port,
            address: config.address.clone(),
            statuses,
        }
    }

    /// Addresses to advertise; `discover` runs only without a configured address
    pub fn displayed_addresses<F>(&self, discover: F) -> Vec<String>
    where
        F: FnOnce() -> String,
    {
        displayed_addresses(self.address.as_deref(), discover)
    }
}

/// Render the whole report as a string.
///
/// `discover` supplies the host's network address when none is configured.
pub fn format_report<F>(report: &Report, emphasis: &Emphasis, discover: F) -> String
where
    F: FnOnce() -> String,
{
    let mut output = layout::format_banner(&report.version, &report.build_tags, emphasis);

    if report.disable_ui {
        output.push_str(&layout::format_development_notice(emphasis));
    }

    output.push_str(&layout::format_monitorables_header(emphasis));
    for status in report.statuses.iter().filter(|s| !MonitorableState::classify(s).is_hidden()) {
        output.push_str(&layout::format_monitorable_block(status, emphasis));
    }
    output.push_str("\n\n");

    output.push_str(&layout::format_ignored_notice(
        status::ignored_count(&report.statuses),
        &documentation_version(&report.version),
        emphasis,
    ));

    output.push_str(&layout::format_running_at(&report.displayed_addresses(discover), report.port, emphasis));

    output
}

/// Render the report and write it to `writer` in a single write.
pub fn write_startup_report<W, F>(writer: &mut W, report: &Report, emphasis: &Emphasis, discover: F) -> io::Result<()>
where
    W: Write,
    F: FnOnce() -> String,
{
    let output = format_report(report, emphasis, discover);
    writer.write_all(output.as_bytes())?;
    writer.flush()
}

/// Print the report to stdout, discovering the network address if needed.
pub fn print_startup_report(report: &Report, emphasis: &Emphasis) -> io::Result<()> {
    let stdout = io::stdout();
    let mut handle = stdout.lock();
    write_startup_report(&mut handle, report, emphasis, address::discover_primary_ip)
}

#[cfg(test)]
#[path = "render_test.rs"]
mod render_test;
