//! Check registry for one format.
//!
//! The [`CheckRegistry`] stores the checks of a format and decides the order
//! they run in: identifiers named in the priority list first, in list order,
//! then everything else sorted by identifier.

use super::check::{Check, CheckId};

/// Registry of the checks for one artifact format.
pub struct CheckRegistry<C> {
    checks: Vec<Box<dyn Check<C>>>,
    priority: Vec<CheckId>,
}

impl<C> CheckRegistry<C> {
    /// Create a new empty registry.
    pub fn new() -> Self {
        Self {
            checks: Vec::new(),
            priority: Vec::new(),
        }
    }

    /// Set the identifiers that run before all others.
    pub fn with_priority(mut self, ids: &[&str]) -> Self {
        self.priority = ids.iter().map(|id| CheckId::new(*id)).collect();
        self
    }

    /// Register a check, replacing any check with the same ID.
    pub fn register(&mut self, check: Box<dyn Check<C>>) {
        let id = check.id();
        self.checks.retain(|existing| existing.id() != id);
        self.checks.push(check);
    }

    /// Get a check by ID.
    pub fn get(&self, id: &CheckId) -> Option<&dyn Check<C>> {
        self.checks
            .iter()
            .find(|c| &c.id() == id)
            .map(|c| c.as_ref())
    }

    /// Iterate over all checks in registration order.
    pub fn iter(&self) -> impl Iterator<Item = &dyn Check<C>> {
        self.checks.iter().map(|c| c.as_ref())
    }

    /// Checks in run order.
    pub fn ordered(&self) -> Vec<&dyn Check<C>> {
        let mut ordered: Vec<&dyn Check<C>> = Vec::with_capacity(self.checks.len());
        for id in &self.priority {
            if let Some(check) = self.get(id) {
                ordered.push(check);
            }
        }

        let mut rest: Vec<&dyn Check<C>> = self
            .iter()
            .filter(|c| !self.priority.contains(&c.id()))
            .collect();
        rest.sort_by_key(|c| c.id());
        ordered.extend(rest);
        ordered
    }

    /// Get the number of registered checks.
    pub fn len(&self) -> usize {
        self.checks.len()
    }

    /// Check if the registry is empty.
    pub fn is_empty(&self) -> bool {
        self.checks.is_empty()
    }
}

impl<C> Default for CheckRegistry<C> {
    fn default() -> Self {
        Self::new()
    }
}
