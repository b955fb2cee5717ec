//! Propagation Driver
//!
//! Owns every structure of a run and steps through it once:
//! Init -> Scan -> Propagate. Scan always finishes before Propagate starts.

use spread_events::{generate_run_id, RunReport};
use std::path::PathBuf;

use crate::config::SimConfig;
use crate::contacts::ContactStore;
use crate::infection::InfectionTracker;
use crate::ledger::Ledger;
use crate::payload::PayloadExecutor;
use crate::sink::SinkDir;
use crate::topology::TopologyGraph;
use crate::trigger::TriggerClassifier;

/// Counts from the Scan phase
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ScanSummary {
    pub triggers: usize,
    pub payload_runs: usize,
}

pub struct Driver {
    config: SimConfig,
    sinks: SinkDir,
    contacts: ContactStore,
    topology: TopologyGraph,
    classifier: TriggerClassifier,
    tracker: InfectionTracker,
    ledger: Ledger,
}

impl Driver {
    /// Init phase: load contacts and build the topology from the sink
    /// directory. Missing sources leave the structures empty.
    pub fn initialize(config: SimConfig, root: impl Into<PathBuf>) -> Self {
        let sinks = SinkDir::new(root);
        let contacts = ContactStore::load(&sinks, &config.sinks.contacts);
        let topology = TopologyGraph::build(&sinks, &config.sinks.topology);
        Self::with_inputs(config, sinks, contacts, topology)
    }

    /// Assemble a driver from already-built inputs.
    pub fn with_inputs(
        config: SimConfig,
        sinks: SinkDir,
        contacts: ContactStore,
        topology: TopologyGraph,
    ) -> Self {
        let classifier = TriggerClassifier::new(config.payload.trigger_marker.clone());
        let ledger = Ledger::new(
            sinks.clone(),
            config.sinks.transmission_log.clone(),
            config.sinks.infection_log.clone(),
        );

        Self {
            config,
            sinks,
            contacts,
            topology,
            classifier,
            tracker: InfectionTracker::new(),
            ledger,
        }
    }

    /// One Scan + Propagate pass.
    pub fn run(&mut self) -> RunReport {
        let mut report = RunReport::new(generate_run_id());
        tracing::info!(
            "Run {}: {} contacts, {} hosts, {} edges",
            report.run_id,
            self.contacts.len(),
            self.topology.host_count(),
            self.topology.edge_count()
        );

        let scan = self.scan();
        self.propagate();

        report.contacts = self.contacts.len();
        report.hosts = self.topology.host_count();
        report.edges = self.topology.edge_count();
        report.malformed_topology_lines = self.topology.malformed_lines();
        report.triggers = scan.triggers;
        report.payload_runs = scan.payload_runs;
        report.ledger_entries = self.ledger.len();
        report.infected = self.tracker.iter().cloned().collect();

        tracing::info!(
            "Run {} complete: {} triggers, {} ledger entries, {} systems infected",
            report.run_id,
            report.triggers,
            report.ledger_entries,
            report.infected.len()
        );
        report
    }

    /// Scan phase: every triggering contact runs the payload against the
    /// whole contact list.
    pub fn scan(&self) -> ScanSummary {
        let executor = PayloadExecutor::new(&self.sinks, &self.config.sinks, &self.config.payload);
        let mut summary = ScanSummary::default();

        for message in self.contacts.iter() {
            if !self.classifier.is_trigger(message.as_str()) {
                continue;
            }
            summary.triggers += 1;
            tracing::debug!("Trigger matched in {:?}", message.as_str());
            executor.execute(message.as_str(), self.contacts.contacts());
            summary.payload_runs += 1;
        }
        summary
    }

    /// Propagate phase: walk hosts and neighbors in sorted order. Each edge
    /// records a transmission, marks the neighbor, then records the
    /// infection.
    pub fn propagate(&mut self) {
        for (host, neighbor) in self.topology.edges() {
            self.ledger.record_transmission(host, neighbor);
            self.tracker.mark(neighbor.clone());
            self.ledger.record_infection(host, neighbor);
        }
    }

    pub fn contacts(&self) -> &ContactStore {
        &self.contacts
    }

    pub fn topology(&self) -> &TopologyGraph {
        &self.topology
    }

    pub fn tracker(&self) -> &InfectionTracker {
        &self.tracker
    }

    pub fn ledger(&self) -> &Ledger {
        &self.ledger
    }
}
