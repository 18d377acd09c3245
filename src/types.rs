/// Core data structures for the startup report
///
/// This module defines the values that flow from the registry through
/// collection and aggregation into the rendered report.

/// Reserved name of the variant configured without a variant segment
pub const DEFAULT_VARIANT: &str = "default";

/// Result of validating one variant of a monitorable
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize)]
pub struct VariantOutcome {
    pub variant_name: String,
    pub succeeded: bool,
    pub errors: Vec<String>,
}

impl VariantOutcome {
    /// Check if this outcome belongs to the default variant
    pub fn is_default(&self) -> bool {
        self.variant_name == DEFAULT_VARIANT
    }
}

/// Collected state of one monitorable, in registry order
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize)]
pub struct IntegrationStatus {
    pub display_name: String,
    pub enabled_variants: Vec<String>, // variants whose validation succeeded
    pub errored_outcomes: Vec<VariantOutcome>, // variants that reported errors
}

impl IntegrationStatus {
    /// Create an empty status for a monitorable
    pub fn new(display_name: impl Into<String>) -> Self {
        Self { display_name: display_name.into(), enabled_variants: Vec::new(), errored_outcomes: Vec::new() }
    }

    /// Record a validation outcome
    ///
    /// A single outcome can land in both lists: success puts it in the
    /// enabled list, any reported error puts it in the errored list.
    pub fn record(&mut self, outcome: VariantOutcome) {
        if outcome.succeeded {
            self.enabled_variants.push(outcome.variant_name.clone());
        }
        if !outcome.errors.is_empty() {
            self.errored_outcomes.push(outcome);
        }
    }
}

/// Everything the renderer needs, built once at startup
#[derive(Debug, Clone, PartialEq)]
pub struct Report {
    pub version: String,
    pub build_tags: String,
    pub disable_ui: bool,
    pub port: u16,
    pub address: Option<String>,
    pub statuses: Vec<IntegrationStatus>,
}
