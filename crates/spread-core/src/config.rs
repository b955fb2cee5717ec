//! Configuration System
//!
//! Sink names and marker strings for a run. Defaults reproduce the stock
//! layout; a TOML file may override any subset of them.

use serde::{Deserialize, Serialize};
use std::path::Path;

/// Complete run configuration.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SimConfig {
    #[serde(default)]
    pub sinks: SinkNames,
    #[serde(default)]
    pub payload: PayloadConfig,
}

impl SimConfig {
    /// Loads configuration from a TOML file.
    pub fn from_file(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path)?;
        Self::from_str(&content)
    }

    /// Parses configuration from a TOML string.
    #[allow(clippy::should_implement_trait)]
    pub fn from_str(content: &str) -> Result<Self, ConfigError> {
        Ok(toml::from_str(content)?)
    }

    /// Loads `path` if one was given. No file is looked up implicitly, and
    /// a file that fails to load falls back to defaults with a warning.
    pub fn load_or_default(path: Option<&Path>) -> Self {
        let Some(path) = path else {
            return Self::default();
        };

        match Self::from_file(path) {
            Ok(config) => {
                tracing::info!("Loaded config from {:?}", path);
                config
            }
            Err(e) => {
                tracing::warn!("Could not load config {:?}, using defaults: {}", path, e);
                Self::default()
            }
        }
    }

    /// Renders the configuration as TOML.
    pub fn to_toml(&self) -> Result<String, ConfigError> {
        Ok(toml::to_string_pretty(self)?)
    }
}

/// File names of every collaborator, relative to the working directory.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SinkNames {
    /// One contact per line
    pub contacts: String,
    /// `<host> <neighbor>` per line
    pub topology: String,
    /// Copied by the capture stub when present
    pub source_data: String,
    /// Destination of the capture stub
    pub captured_data: String,
    pub transmission_log: String,
    pub infection_log: String,
    /// Appended to a contact to name its bulk-outbound sink
    pub outbound_suffix: String,
    /// Appended to a contact to name its replication sink
    pub replication_suffix: String,
}

impl Default for SinkNames {
    fn default() -> Self {
        Self {
            contacts: "contacts.txt".to_string(),
            topology: "connected_systems.txt".to_string(),
            source_data: "data.txt".to_string(),
            captured_data: "stolen_data.txt".to_string(),
            transmission_log: "transmission_log.txt".to_string(),
            infection_log: "infection_log.txt".to_string(),
            outbound_suffix: "_spam_email.txt".to_string(),
            replication_suffix: "_replicated_email.txt".to_string(),
        }
    }
}

impl SinkNames {
    pub fn outbound_for(&self, contact: &str) -> String {
        format!("{}{}", contact, self.outbound_suffix)
    }

    pub fn replication_for(&self, contact: &str) -> String {
        format!("{}{}", contact, self.replication_suffix)
    }
}

/// Marker strings and placeholder bodies used by the payload.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PayloadConfig {
    /// Substring that makes a message a trigger
    pub trigger_marker: String,
    /// Appended (after a space) to a triggering message when replicating
    pub replication_marker: String,
    /// Body written to every bulk-outbound sink
    pub outbound_body: String,
}

impl Default for PayloadConfig {
    fn default() -> Self {
        Self {
            trigger_marker: "adversarial_keyword".to_string(),
            replication_marker: "replicated_prompt".to_string(),
            outbound_body: "This is a spam email.".to_string(),
        }
    }
}

/// Errors that can occur loading configuration
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("TOML parse error: {0}")]
    Toml(#[from] toml::de::Error),
    #[error("TOML serialize error: {0}")]
    TomlSerialize(#[from] toml::ser::Error),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_names() {
        let config = SimConfig::default();
        assert_eq!(config.sinks.contacts, "contacts.txt");
        assert_eq!(config.sinks.topology, "connected_systems.txt");
        assert_eq!(config.sinks.outbound_for("bob"), "bob_spam_email.txt");
        assert_eq!(config.sinks.replication_for("bob"), "bob_replicated_email.txt");
        assert_eq!(config.payload.trigger_marker, "adversarial_keyword");
    }

    #[test]
    fn test_partial_override() {
        let toml = r#"
            [payload]
            trigger_marker = "WAKE"

            [sinks]
            infection_log = "infections.log"
        "#;
        let config = SimConfig::from_str(toml).unwrap();

        assert_eq!(config.payload.trigger_marker, "WAKE");
        assert_eq!(config.payload.replication_marker, "replicated_prompt");
        assert_eq!(config.sinks.infection_log, "infections.log");
        assert_eq!(config.sinks.transmission_log, "transmission_log.txt");
    }

    #[test]
    fn test_empty_string_is_default() {
        assert_eq!(SimConfig::from_str("").unwrap(), SimConfig::default());
    }

    #[test]
    fn test_toml_roundtrip() {
        let config = SimConfig::default();
        let text = config.to_toml().unwrap();
        assert_eq!(SimConfig::from_str(&text).unwrap(), config);
    }

    #[test]
    fn test_invalid_toml() {
        let err = SimConfig::from_str("[payload\ntrigger_marker = 1").unwrap_err();
        assert!(matches!(err, ConfigError::Toml(_)));
    }

    #[test]
    fn test_load_or_default() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("spread.toml");
        std::fs::write(&path, "[payload]\ntrigger_marker = \"WAKE\"\n").unwrap();

        assert_eq!(SimConfig::load_or_default(None), SimConfig::default());
        assert_eq!(
            SimConfig::load_or_default(Some(&path)).payload.trigger_marker,
            "WAKE"
        );

        std::fs::write(&path, "not = [valid").unwrap();
        assert_eq!(SimConfig::load_or_default(Some(&path)), SimConfig::default());
    }

    #[test]
    fn test_missing_file() {
        let err = SimConfig::from_file(Path::new("/nonexistent/spread.toml")).unwrap_err();
        assert!(matches!(err, ConfigError::Io(_)));
    }
}
