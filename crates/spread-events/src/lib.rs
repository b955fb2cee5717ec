//! Shared data types for the propagation simulation.
//!
//! This crate contains pure data structures with no simulation logic.
//! It is a dependency for the engine crate and for anything that reads
//! run reports or ledger entries.

pub mod ids;
pub mod ledger;
pub mod report;

#[cfg(any(test, feature = "test-fixtures"))]
pub mod fixtures;

pub use ids::{ContactId, SystemId};
pub use ledger::{EntryKind, LedgerEntry};
pub use report::{generate_run_id, RunReport};
