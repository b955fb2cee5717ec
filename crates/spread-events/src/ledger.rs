//! Ledger Entries
//!
//! Records emitted while walking the topology graph. Entries are only ever
//! appended; their order is the emission order.

use serde::{Deserialize, Serialize};

use crate::SystemId;

/// Ledger entry kinds
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EntryKind {
    TransmissionAttempt,
    InfectionMark,
}

/// One propagation record.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum LedgerEntry {
    /// A host attempted to reach a neighbor
    TransmissionAttempt { host: SystemId, target: SystemId },
    /// A neighbor was marked infected by a host
    InfectionMark { host: SystemId, target: SystemId },
}

impl LedgerEntry {
    pub fn transmission(host: impl Into<SystemId>, target: impl Into<SystemId>) -> Self {
        LedgerEntry::TransmissionAttempt {
            host: host.into(),
            target: target.into(),
        }
    }

    pub fn infection(host: impl Into<SystemId>, target: impl Into<SystemId>) -> Self {
        LedgerEntry::InfectionMark {
            host: host.into(),
            target: target.into(),
        }
    }

    pub fn kind(&self) -> EntryKind {
        match self {
            LedgerEntry::TransmissionAttempt { .. } => EntryKind::TransmissionAttempt,
            LedgerEntry::InfectionMark { .. } => EntryKind::InfectionMark,
        }
    }

    pub fn host(&self) -> &SystemId {
        match self {
            LedgerEntry::TransmissionAttempt { host, .. } | LedgerEntry::InfectionMark { host, .. } => host,
        }
    }

    pub fn target(&self) -> &SystemId {
        match self {
            LedgerEntry::TransmissionAttempt { target, .. }
            | LedgerEntry::InfectionMark { target, .. } => target,
        }
    }

    /// Renders the entry as a ledger file line, without the newline.
    pub fn to_line(&self) -> String {
        match self {
            LedgerEntry::TransmissionAttempt { host, target } => format!("{} -> {}", host, target),
            LedgerEntry::InfectionMark { host, target } => format!("{} infected {}", host, target),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_line_formats() {
        assert_eq!(LedgerEntry::transmission("A", "B").to_line(), "A -> B");
        assert_eq!(LedgerEntry::infection("A", "B").to_line(), "A infected B");
    }

    #[test]
    fn test_accessors() {
        let entry = LedgerEntry::infection("gateway", "mail-01");
        assert_eq!(entry.kind(), EntryKind::InfectionMark);
        assert_eq!(entry.host().as_str(), "gateway");
        assert_eq!(entry.target().as_str(), "mail-01");
    }

    #[test]
    fn test_json_is_tagged() {
        let json = serde_json::to_string(&LedgerEntry::transmission("A", "B")).unwrap();
        assert_eq!(json, r#"{"kind":"transmission_attempt","host":"A","target":"B"}"#);

        let back: LedgerEntry = serde_json::from_str(&json).unwrap();
        assert_eq!(back, LedgerEntry::transmission("A", "B"));
    }
}
