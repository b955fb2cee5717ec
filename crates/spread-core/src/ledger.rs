//! Transmission Ledger
//!
//! Append-only record of propagation attempts and infection marks. Each
//! entry is kept in memory and appended to its file sink; the sink is
//! opened per call.

use spread_events::{LedgerEntry, SystemId};

use crate::sink::SinkDir;

#[derive(Debug, Clone)]
pub struct Ledger {
    sinks: SinkDir,
    transmission_log: String,
    infection_log: String,
    entries: Vec<LedgerEntry>,
}

impl Ledger {
    pub fn new(
        sinks: SinkDir,
        transmission_log: impl Into<String>,
        infection_log: impl Into<String>,
    ) -> Self {
        Self {
            sinks,
            transmission_log: transmission_log.into(),
            infection_log: infection_log.into(),
            entries: Vec::new(),
        }
    }

    /// Append `<host> -> <target>` to the transmission log.
    pub fn record_transmission(&mut self, host: &SystemId, target: &SystemId) {
        let entry = LedgerEntry::transmission(host.clone(), target.clone());
        self.sinks.append_line(&self.transmission_log, &entry.to_line());
        self.entries.push(entry);
    }

    /// Append `<host> infected <target>` to the infection log.
    pub fn record_infection(&mut self, host: &SystemId, target: &SystemId) {
        let entry = LedgerEntry::infection(host.clone(), target.clone());
        self.sinks.append_line(&self.infection_log, &entry.to_line());
        self.entries.push(entry);
    }

    /// Entries in emission order
    pub fn entries(&self) -> &[LedgerEntry] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
