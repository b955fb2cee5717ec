//! Contact Store
//!
//! Ordered list of known correspondents, in discovery order.

use spread_events::ContactId;

use crate::sink::SinkDir;

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ContactStore {
    contacts: Vec<ContactId>,
}

impl ContactStore {
    /// Load one contact per line. A missing source yields an empty store.
    /// Lines are kept as-is: duplicates and blank lines stay in order.
    pub fn load(sinks: &SinkDir, name: &str) -> Self {
        let contacts: Vec<ContactId> = sinks
            .read_lines(name)
            .into_iter()
            .map(ContactId::from)
            .collect();
        tracing::debug!("Loaded {} contacts from {}", contacts.len(), name);
        Self { contacts }
    }

    pub fn from_ids<I, S>(ids: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<ContactId>,
    {
        Self {
            contacts: ids.into_iter().map(Into::into).collect(),
        }
    }

    pub fn contacts(&self) -> &[ContactId] {
        &self.contacts
    }

    pub fn iter(&self) -> impl Iterator<Item = &ContactId> {
        self.contacts.iter()
    }

    pub fn len(&self) -> usize {
        self.contacts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.contacts.is_empty()
    }
}
