//! Trigger Classifier
//!
//! Decides whether a message carries the replication trigger.

/// Case-sensitive substring match against a single marker.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TriggerClassifier {
    marker: String,
}

impl TriggerClassifier {
    pub fn new(marker: impl Into<String>) -> Self {
        Self {
            marker: marker.into(),
        }
    }

    /// True if `message` contains the marker anywhere. No normalization is
    /// applied; an empty marker matches everything.
    pub fn is_trigger(&self, message: &str) -> bool {
        message.contains(self.marker.as_str())
    }
}
