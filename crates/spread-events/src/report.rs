//! Run Report
//!
//! Summary of a single propagation run.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::SystemId;

/// Generate a fresh run ID
pub fn generate_run_id() -> String {
    format!("run_{}", Uuid::new_v4().simple())
}

/// Counters and outcomes collected over one Scan + Propagate pass.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct RunReport {
    pub run_id: String,
    /// Contacts loaded from the contacts source
    pub contacts: usize,
    /// Hosts with at least one recorded neighbor
    pub hosts: usize,
    /// Distinct host -> neighbor edges
    pub edges: usize,
    /// Topology lines skipped for lacking a delimiter
    pub malformed_topology_lines: usize,
    /// Contacts whose body matched the trigger marker
    pub triggers: usize,
    /// Payload executions (one per trigger)
    pub payload_runs: usize,
    /// Total ledger entries emitted
    pub ledger_entries: usize,
    /// Systems marked infected, in sorted order
    pub infected: Vec<SystemId>,
}

impl RunReport {
    pub fn new(run_id: impl Into<String>) -> Self {
        Self {
            run_id: run_id.into(),
            ..Default::default()
        }
    }

    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string_pretty(self)
    }
}
