/// Monitorable registry
///
/// This module handles:
/// - The capability interface every integration implements
/// - Holding integrations in registration order

/// A pluggable integration the service can optionally enable
pub trait Monitorable {
    /// Name shown in the startup report
    fn display_name(&self) -> String;

    /// Variant names in the order they should be validated
    fn variant_names(&self) -> Vec<String>;

    /// Validate one variant's configuration
    ///
    /// Returns whether the variant is usable, and every problem found.
    /// A variant with no configuration at all is `(false, [])`.
    fn validate(&self, variant: &str) -> (bool, Vec<String>);
}

/// Ordered collection of monitorables
#[derive(Default)]
pub struct Registry {
    monitorables: Vec<Box<dyn Monitorable>>,
}

impl Registry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a monitorable; registration order is report order
    pub fn register(&mut self, monitorable: Box<dyn Monitorable>) {
        self.monitorables.push(monitorable);
    }

    pub fn monitorables(&self) -> &[Box<dyn Monitorable>] {
        &self.monitorables
    }

    pub fn len(&self) -> usize {
        self.monitorables.len()
    }
}
