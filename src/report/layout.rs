//! Layout blocks of the startup report.
//!
//! Each function renders one block of the report, top to bottom, with its
//! exact spacing. Blocks end where the next one starts: the monitorable
//! lines begin with their own newline, the running-at block starts with a
//! blank line.

use crate::address::format_url;
use crate::console_format::{Emphasis, Style, display_width, pad_styled};
use crate::status::{self, MonitorableState};
use crate::types::IntegrationStatus;

pub const PROJECT_URL: &str = "https://monitoror.com";
const GUIDE_URL: &str = "https://monitoror.com/guides/#development";

const BANNER_LINES: [&str; 3] = [
    r"    __  ___            _ __",
    r"   /  |/  /___  ____  (_) /_____  _________  _____",
    r"  / /|_/ / __ \/ __ \/ / __/ __ \/ ___/ __ \/ ___/",
];
const BANNER_TAG_LINE: &str = r" / /  / / /_/ / / / / / /_/ /_/ / /  / /_/ / / ";
const BANNER_VERSION_LINE: &str = r"/_/  /_/\____/_/ /_/_/\__/\____/_/   \____/_/  ";

// Development notice box, borders included
const BOX_WIDTH: usize = 51;
const BOX_TITLE: &str = "DEVELOPMENT MODE";

//
// Banner
//

/// ASCII banner with build-tag badge, version and project URL
pub fn format_banner(version: &str, build_tags: &str, emphasis: &Emphasis) -> String {
    let mut output = String::new();
    output.push('\n');

    for line in BANNER_LINES {
        output.push_str(line);
        output.push('\n');
    }

    output.push_str(BANNER_TAG_LINE);
    if !build_tags.is_empty() {
        output.push_str(&emphasis.emphasize(&format!(" {} ", build_tags), Style::Inverse));
    }
    output.push('\n');

    output.push_str(BANNER_VERSION_LINE);
    output.push_str(&emphasis.emphasize(version, Style::Green));
    output.push_str("\n\n");

    output.push_str(&emphasis.emphasize(PROJECT_URL, Style::Blue));
    output.push_str("\n\n\n");

    output
}

/// Boxed notice shown when the UI is served separately
pub fn format_development_notice(emphasis: &Emphasis) -> String {
    let inner = BOX_WIDTH - 2;
    let title_rule = BOX_WIDTH - display_width("┌─ ") - display_width(BOX_TITLE) - display_width(" ┐");

    let mut output = String::new();
    output.push_str(&format!(
        "┌─ {} {}┐\n",
        emphasis.emphasize(BOX_TITLE, Style::Yellow),
        "─".repeat(title_rule)
    ));

    let lines = [
        (
            "UI must be started via yarn serve from ./ui".to_string(),
            format!("UI must be started via {} from ./ui", emphasis.emphasize("yarn serve", Style::Green)),
        ),
        (
            "For more details, check our development guide:".to_string(),
            "For more details, check our development guide:".to_string(),
        ),
        (GUIDE_URL.to_string(), emphasis.emphasize(GUIDE_URL, Style::Blue)),
    ];
    for (plain, styled) in &lines {
        // "│ " + text padded to the right border
        output.push_str(&format!("│ {}│\n", pad_styled(plain, styled, inner - 1)));
    }

    output.push_str(&format!("└{}┘\n", "─".repeat(inner)));
    output.push_str("\n\n");

    output
}

//
// Monitorables
//

/// Section header; the monitorable lines follow directly
pub fn format_monitorables_header(emphasis: &Emphasis) -> String {
    format!("{}\n", emphasis.emphasize("ENABLED MONITORABLES", Style::Green))
}

/// One visible monitorable: status line, then its errored variants
///
/// Hidden monitorables render as an empty string.
pub fn format_monitorable_block(status: &IntegrationStatus, emphasis: &Emphasis) -> String {
    let state = MonitorableState::classify(status);
    let glyph_style = match state {
        MonitorableState::Hidden => return String::new(),
        MonitorableState::Ok => Style::Green,
        MonitorableState::Warning => Style::Yellow,
        MonitorableState::Failed => Style::Red,
    };

    let mut output = format!(
        "\n  {}{} {}",
        emphasis.emphasize(state.glyph(), glyph_style),
        status.display_name,
        emphasis.emphasize(&status::variant_summary(status), Style::Grey)
    );

    for outcome in &status.errored_outcomes {
        output.push_str("\n    ");
        output.push_str(&emphasis.emphasize(&status::errored_header(outcome), Style::Red));
        for error in &outcome.errors {
            output.push_str("\n      ");
            output.push_str(error);
        }
    }

    output
}

/// Pointer to the documentation for monitorables that were left out
///
/// Empty when nothing was ignored.
pub fn format_ignored_notice(ignored: usize, documentation_version: &str, emphasis: &Emphasis) -> String {
    if ignored == 0 {
        return String::new();
    }

    let mut output = String::new();
    output.push_str(&emphasis.emphasize(&format!("{} more monitorables were ignored", ignored), Style::Yellow));
    output.push('\n');
    output.push_str("Check the documentation to know how to enabled them:\n");
    output.push_str(&emphasis.emphasize(
        &format!("{}/{}documentation/", PROJECT_URL, documentation_version),
        Style::Blue,
    ));
    output.push_str("\n\n");

    output
}

//
// Footer
//

/// Where the service can be reached, one URL per address
pub fn format_running_at(addresses: &[String], port: u16, emphasis: &Emphasis) -> String {
    let mut output = String::from("\nMonitoror is running at:");
    for address in addresses {
        output.push_str("\n  ");
        output.push_str(&emphasis.emphasize(&format_url(address, port), Style::Blue));
    }
    output.push_str("\n\n");

    output
}

#[cfg(test)]
#[path = "layout_test.rs"]
mod layout_test;
