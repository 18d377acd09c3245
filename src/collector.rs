/// Variant status collection
///
/// Walks the registry once, validating every variant of every monitorable
/// exactly once, and keeps the registry's ordering throughout.
use crate::registry::{Monitorable, Registry};
use crate::types::{IntegrationStatus, VariantOutcome};
use log::debug;

/// Collect the status of every registered monitorable, in registration order
pub fn collect_statuses(registry: &Registry) -> Vec<IntegrationStatus> {
    debug!("Collecting variant status for {} monitorables", registry.len());

    registry.monitorables().iter().map(|m| collect_status(m.as_ref())).collect()
}

/// Validate each variant of one monitorable and fold the outcomes
pub fn collect_status(monitorable: &dyn Monitorable) -> IntegrationStatus {
    let mut status = IntegrationStatus::new(monitorable.display_name());

    for variant_name in monitorable.variant_names() {
        let (succeeded, errors) = monitorable.validate(&variant_name);
        debug!(
            "Validated {} variant {:?}: succeeded={} errors={}",
            status.display_name,
            variant_name,
            succeeded,
            errors.len()
        );

        status.record(VariantOutcome { variant_name, succeeded, errors });
    }

    status
}

#[cfg(test)]
#[path = "collector_test.rs"]
mod collector_test;
