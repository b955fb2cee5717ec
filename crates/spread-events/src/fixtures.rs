//! Sample input fixtures for testing.
//!
//! Enable the `test-fixtures` feature to access these helpers.
//!
//! # Example
//!
//! ```ignore
//! // [dev-dependencies]
//! // spread-events = { path = "../spread-events", features = ["test-fixtures"] }
//!
//! use spread_events::fixtures;
//!
//! std::fs::write(dir.join("contacts.txt"), fixtures::SAMPLE_CONTACTS)?;
//! ```

use crate::ContactId;

/// Four contacts; only the third carries the trigger marker.
pub const SAMPLE_CONTACTS: &str = include_str!("../tests/fixtures/sample_contacts.txt");

/// Topology lines covering a duplicate edge, a neighbor with embedded
/// spaces, a blank line and one line without a delimiter.
///
/// Resulting graph:
/// - gateway -> {mail-01, mail-02}
/// - mail-01 -> {archive}
/// - mail-02 -> {archive, "build farm 7"}
pub const SAMPLE_TOPOLOGY: &str = include_str!("../tests/fixtures/sample_topology.txt");

/// Contacts parsed from [`SAMPLE_CONTACTS`], in file order.
pub fn sample_contacts() -> Vec<ContactId> {
    SAMPLE_CONTACTS.lines().map(ContactId::from).collect()
}

/// The broadcast scenario: one triggering contact followed by two plain ones.
pub fn broadcast_contacts() -> Vec<ContactId> {
    vec![
        ContactId::from("x_adversarial_keyword"),
        ContactId::from("y"),
        ContactId::from("z"),
    ]
}
