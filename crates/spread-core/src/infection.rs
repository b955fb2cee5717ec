//! Infection Tracker
//!
//! Set of systems marked infected during a run. It only ever grows.

use spread_events::SystemId;
use std::collections::BTreeSet;

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct InfectionTracker {
    infected: BTreeSet<SystemId>,
}

impl InfectionTracker {
    pub fn new() -> Self {
        Self::default()
    }

    /// Mark a system infected. Returns true the first time only.
    pub fn mark(&mut self, system: SystemId) -> bool {
        self.infected.insert(system)
    }

    pub fn is_infected(&self, system: &SystemId) -> bool {
        self.infected.contains(system)
    }

    /// Infected systems in sorted order
    pub fn iter(&self) -> impl Iterator<Item = &SystemId> {
        self.infected.iter()
    }

    pub fn len(&self) -> usize {
        self.infected.len()
    }

    pub fn is_empty(&self) -> bool {
        self.infected.is_empty()
    }
}
