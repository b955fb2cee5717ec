//! Propagation engine: topology discovery, trigger classification,
//! infection tracking and the transmission ledger.
//!
//! # Modules
//!
//! - [`sink`]: best-effort file sinks rooted at a working directory
//! - [`contacts`]: ordered contact list
//! - [`topology`]: host -> neighbor graph
//! - [`trigger`]: trigger marker predicate
//! - [`infection`]: infected system set
//! - [`payload`]: capture, bulk-outbound and replication stubs
//! - [`ledger`]: append-only transmission and infection records
//! - [`driver`]: single-pass orchestration
//! - [`config`]: sink names and markers

pub mod config;
pub mod contacts;
pub mod driver;
pub mod infection;
pub mod ledger;
pub mod payload;
pub mod sink;
pub mod topology;
pub mod trigger;

pub use config::{ConfigError, PayloadConfig, SimConfig, SinkNames};
pub use contacts::ContactStore;
pub use driver::{Driver, ScanSummary};
pub use infection::InfectionTracker;
pub use ledger::Ledger;
pub use payload::{replicated_message, PayloadExecutor, PayloadOutcome};
pub use sink::SinkDir;
pub use topology::{parse_line, TopologyGraph, TopologyLine};
pub use trigger::TriggerClassifier;

pub use spread_events::{ContactId, LedgerEntry, RunReport, SystemId};
