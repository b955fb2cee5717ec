//! Topology Graph
//!
//! Maps each host to the set of systems reachable from it. Keys and
//! neighbor sets are ordered, so iteration is deterministic.

use spread_events::SystemId;
use std::collections::{BTreeMap, BTreeSet};

use crate::sink::SinkDir;

/// One classified line of the topology source
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TopologyLine {
    /// `<host> <neighbor>`, split at the first space
    Edge { host: String, neighbor: String },
    /// Empty line
    Blank,
    /// Non-empty line with no space to split on
    Malformed(String),
}

/// Classify a topology line. Everything after the first space is the
/// neighbor, embedded spaces included; a trailing space gives an empty
/// neighbor.
pub fn parse_line(line: &str) -> TopologyLine {
    if line.is_empty() {
        return TopologyLine::Blank;
    }
    match line.split_once(' ') {
        Some((host, neighbor)) => TopologyLine::Edge {
            host: host.to_string(),
            neighbor: neighbor.to_string(),
        },
        None => TopologyLine::Malformed(line.to_string()),
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TopologyGraph {
    edges: BTreeMap<SystemId, BTreeSet<SystemId>>,
    malformed_lines: usize,
}

impl TopologyGraph {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build the graph from a line-oriented source. A missing source
    /// yields an empty graph.
    pub fn build(sinks: &SinkDir, name: &str) -> Self {
        let mut graph = Self::new();
        for line in sinks.read_lines(name) {
            graph.ingest_line(&line);
        }
        tracing::debug!(
            "Built topology from {}: {} hosts, {} edges, {} malformed lines",
            name,
            graph.host_count(),
            graph.edge_count(),
            graph.malformed_lines
        );
        graph
    }

    /// Build from in-memory text, one line per edge.
    pub fn from_text(text: &str) -> Self {
        let mut graph = Self::new();
        for line in text.lines() {
            graph.ingest_line(line);
        }
        graph
    }

    fn ingest_line(&mut self, line: &str) {
        match parse_line(line) {
            TopologyLine::Edge { host, neighbor } => {
                self.insert(host, neighbor);
            }
            TopologyLine::Blank => {}
            TopologyLine::Malformed(raw) => {
                tracing::debug!("Skipping topology line without delimiter: {:?}", raw);
                self.malformed_lines += 1;
            }
        }
    }

    /// Record `neighbor` as reachable from `host`. Returns false if the
    /// edge was already present.
    pub fn insert(&mut self, host: impl Into<SystemId>, neighbor: impl Into<SystemId>) -> bool {
        self.edges
            .entry(host.into())
            .or_default()
            .insert(neighbor.into())
    }

    /// Neighbors of `host`; empty if the host is unknown.
    pub fn neighbors_of(&self, host: &SystemId) -> &BTreeSet<SystemId> {
        static EMPTY: BTreeSet<SystemId> = BTreeSet::new();
        self.edges.get(host).unwrap_or(&EMPTY)
    }

    /// Every edge, sorted by host then neighbor
    pub fn edges(&self) -> impl Iterator<Item = (&SystemId, &SystemId)> {
        self.edges
            .iter()
            .flat_map(|(host, neighbors)| neighbors.iter().map(move |n| (host, n)))
    }

    pub fn contains_host(&self, host: &SystemId) -> bool {
        self.edges.contains_key(host)
    }

    pub fn host_count(&self) -> usize {
        self.edges.len()
    }

    pub fn edge_count(&self) -> usize {
        self.edges.values().map(BTreeSet::len).sum()
    }

    pub fn malformed_lines(&self) -> usize {
        self.malformed_lines
    }

    pub fn is_empty(&self) -> bool {
        self.edges.is_empty()
    }
}
