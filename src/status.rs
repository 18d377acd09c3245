//! Status aggregation for collected monitorables.
//!
//! Turns each `IntegrationStatus` into a display state and the bracketed
//! variant summary shown after its name.

use crate::types::{DEFAULT_VARIANT, IntegrationStatus, VariantOutcome};

/// Display state of a monitorable in the startup report.
#[derive(Debug, Clone, Copy, PartialEq, Eq, serde::Serialize)]
#[serde(rename_all = "lowercase")]
pub enum MonitorableState {
    /// Nothing enabled, nothing errored: left out of the list and counted as ignored
    Hidden,
    /// Every configured variant validated: ✓
    Ok,
    /// Some variants enabled, some errored: !
    Warning,
    /// Only errored variants: x
    Failed,
}

impl MonitorableState {
    /// Classify a collected status.
    pub fn classify(status: &IntegrationStatus) -> Self {
        match (status.enabled_variants.is_empty(), status.errored_outcomes.is_empty()) {
            (true, true) => MonitorableState::Hidden,
            (false, true) => MonitorableState::Ok,
            (false, false) => MonitorableState::Warning,
            (true, false) => MonitorableState::Failed,
        }
    }

    /// Glyph printed before the monitorable name, including its trailing space.
    pub fn glyph(&self) -> &'static str {
        match self {
            MonitorableState::Hidden => "",
            MonitorableState::Ok => "✓ ",
            MonitorableState::Warning => "! ",
            MonitorableState::Failed => "x ",
        }
    }

    pub fn is_hidden(&self) -> bool {
        *self == MonitorableState::Hidden
    }
}

/// Number of monitorables left out of the report.
pub fn ignored_count(statuses: &[IntegrationStatus]) -> usize {
    statuses.iter().filter(|s| MonitorableState::classify(s).is_hidden()).count()
}

/// Summary of enabled variants shown after the monitorable name.
///
/// A lone enabled default variant prints nothing, or `[default]` when
/// other variants errored.
pub fn variant_summary(status: &IntegrationStatus) -> String {
    let enabled = &status.enabled_variants;

    if enabled.len() == 1 && enabled[0] == DEFAULT_VARIANT {
        return if status.errored_outcomes.is_empty() { String::new() } else { format!("[{}]", DEFAULT_VARIANT) };
    }

    let default_prefix =
        if enabled.iter().any(|v| v == DEFAULT_VARIANT) { format!("{}, ", DEFAULT_VARIANT) } else { String::new() };
    let others: Vec<&str> = enabled.iter().filter(|v| *v != DEFAULT_VARIANT).map(|v| v.as_str()).collect();

    if others.is_empty() {
        return String::new();
    }

    format!("[{}variants: [{}]]", default_prefix, others.join(", "))
}

/// Header line for an errored variant, without the indentation.
pub fn errored_header(outcome: &VariantOutcome) -> String {
    if outcome.is_default() {
        format!("/!\\ Errored {} configuration", DEFAULT_VARIANT)
    } else {
        format!("/!\\ Errored {:?} variant configuration", outcome.variant_name)
    }
}

#[cfg(test)]
#[path = "status_test.rs"]
mod status_test;
