//! Payload Executor
//!
//! Simulated actions run for a triggering message. All effects are local
//! files under the sink directory, and every step is best-effort.

use spread_events::ContactId;
use std::io::{BufRead, Write};

use crate::config::{PayloadConfig, SinkNames};
use crate::sink::SinkDir;

/// What a single payload execution managed to write
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PayloadOutcome {
    /// Lines copied by the capture stub; `None` if it was skipped
    pub captured_lines: Option<usize>,
    /// Bulk-outbound sinks written
    pub outbound_written: usize,
    /// Replication sinks written
    pub replicated_written: usize,
}

pub struct PayloadExecutor<'a> {
    sinks: &'a SinkDir,
    names: &'a SinkNames,
    payload: &'a PayloadConfig,
}

impl<'a> PayloadExecutor<'a> {
    pub fn new(sinks: &'a SinkDir, names: &'a SinkNames, payload: &'a PayloadConfig) -> Self {
        Self {
            sinks,
            names,
            payload,
        }
    }

    /// Run capture, bulk-outbound and replication, in that order, for
    /// every contact in `contacts`. Never fails.
    pub fn execute(&self, message: &str, contacts: &[ContactId]) -> PayloadOutcome {
        let captured_lines = self.capture();
        let outbound_written = self.send_outbound(contacts);
        let replicated_written = self.replicate(message, contacts);

        tracing::debug!(
            "Payload for {:?}: captured {:?} lines, {} outbound, {} replicated",
            message,
            captured_lines,
            outbound_written,
            replicated_written
        );

        PayloadOutcome {
            captured_lines,
            outbound_written,
            replicated_written,
        }
    }

    /// Copy the source-data sink line by line into the captured-data sink.
    /// Bytes are copied as-is, `\r` and invalid UTF-8 included; only a
    /// missing final newline is added. The captured sink is only created
    /// once the source has opened.
    pub fn capture(&self) -> Option<usize> {
        let mut source = self.sinks.open_source(&self.names.source_data)?;
        let mut captured = self.sinks.create(&self.names.captured_data)?;

        let mut copied = 0;
        let mut buf = Vec::new();
        loop {
            buf.clear();
            match source.read_until(b'\n', &mut buf) {
                Ok(0) => break,
                Ok(_) => {}
                Err(e) => {
                    tracing::debug!("Capture read stopped: {}", e);
                    break;
                }
            }
            if !buf.ends_with(b"\n") {
                buf.push(b'\n');
            }
            if let Err(e) = captured.write_all(&buf) {
                tracing::debug!("Capture write stopped: {}", e);
                break;
            }
            copied += 1;
        }
        Some(copied)
    }

    /// Write the placeholder body to each contact's outbound sink.
    pub fn send_outbound(&self, contacts: &[ContactId]) -> usize {
        contacts
            .iter()
            .filter(|contact| {
                self.sinks.write_all(
                    &self.names.outbound_for(contact.as_str()),
                    &self.payload.outbound_body,
                )
            })
            .count()
    }

    /// Write `<message> <replication marker>` to each contact's replication sink.
    pub fn replicate(&self, message: &str, contacts: &[ContactId]) -> usize {
        let replicated = replicated_message(message, &self.payload.replication_marker);
        contacts
            .iter()
            .filter(|contact| {
                self.sinks
                    .write_all(&self.names.replication_for(contact.as_str()), &replicated)
            })
            .count()
    }
}

/// The body carried forward to every contact
pub fn replicated_message(message: &str, marker: &str) -> String {
    format!("{} {}", message, marker)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::tempdir;

    fn contacts(ids: &[&str]) -> Vec<ContactId> {
        ids.iter().map(|id| ContactId::from(*id)).collect()
    }

    #[test]
    fn test_replicated_message() {
        assert_eq!(replicated_message("hi", "replicated_prompt"), "hi replicated_prompt");
        assert_eq!(replicated_message("", "m"), " m");
    }

    #[test]
    fn test_capture_copies_bytes_verbatim() {
        let dir = tempdir().unwrap();
        let source: &[u8] = b"one\r\nbad\xff\xfeline\nthree\n";
        fs::write(dir.path().join("data.txt"), source).unwrap();
        let sinks = SinkDir::new(dir.path());
        let names = SinkNames::default();
        let payload = PayloadConfig::default();

        let outcome = PayloadExecutor::new(&sinks, &names, &payload).capture();
        assert_eq!(outcome, Some(3));

        let captured = fs::read(dir.path().join("stolen_data.txt")).unwrap();
        assert_eq!(captured, source);
    }

    #[test]
    fn test_capture_terminates_last_line() {
        let dir = tempdir().unwrap();
        fs::write(dir.path().join("data.txt"), "one\ntwo").unwrap();
        let sinks = SinkDir::new(dir.path());
        let names = SinkNames::default();
        let payload = PayloadConfig::default();

        assert_eq!(PayloadExecutor::new(&sinks, &names, &payload).capture(), Some(2));
        let captured = fs::read_to_string(dir.path().join("stolen_data.txt")).unwrap();
        assert_eq!(captured, "one\ntwo\n");
    }

    #[test]
    fn test_capture_skipped_without_source() {
        let dir = tempdir().unwrap();
        let sinks = SinkDir::new(dir.path());
        let names = SinkNames::default();
        let payload = PayloadConfig::default();

        assert_eq!(PayloadExecutor::new(&sinks, &names, &payload).capture(), None);
        assert!(!dir.path().join("stolen_data.txt").exists());
    }

    #[test]
    fn test_execute_writes_every_contact() {
        let dir = tempdir().unwrap();
        let sinks = SinkDir::new(dir.path());
        let names = SinkNames::default();
        let payload = PayloadConfig::default();

        let outcome = PayloadExecutor::new(&sinks, &names, &payload)
            .execute("x_adversarial_keyword", &contacts(&["x_adversarial_keyword", "y"]));

        assert_eq!(outcome.captured_lines, None);
        assert_eq!(outcome.outbound_written, 2);
        assert_eq!(outcome.replicated_written, 2);

        let spam = fs::read_to_string(dir.path().join("y_spam_email.txt")).unwrap();
        assert_eq!(spam, "This is a spam email.");
        let replicated = fs::read_to_string(dir.path().join("y_replicated_email.txt")).unwrap();
        assert_eq!(replicated, "x_adversarial_keyword replicated_prompt");
    }

    #[test]
    fn test_unwritable_contact_is_skipped() {
        let dir = tempdir().unwrap();
        let sinks = SinkDir::new(dir.path());
        let names = SinkNames::default();
        let payload = PayloadConfig::default();

        // A contact naming a missing subdirectory cannot be created.
        let outcome = PayloadExecutor::new(&sinks, &names, &payload)
            .execute("m", &contacts(&["missing/dir", "ok"]));

        assert_eq!(outcome.outbound_written, 1);
        assert_eq!(outcome.replicated_written, 1);
        assert!(dir.path().join("ok_spam_email.txt").exists());
    }
}
