use std::collections::BTreeMap;

use serde::Serialize;

/// Identifier of the fixed connection group every connection hangs off.
pub const ROOT_CONNECTION_GROUP: &str = "ROOT";

/// Protocol parameters of one remote desktop session: a protocol name plus
/// an ordered map of string parameters. Built once by the service and never
/// mutated afterwards.
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct ConnectionConfig {
    pub protocol: String,
    pub parameters: BTreeMap<String, String>,
}

impl ConnectionConfig {
    pub fn new(protocol: &str) -> Self {
        Self {
            protocol: protocol.to_string(),
            parameters: BTreeMap::new(),
        }
    }

    pub fn set_parameter(&mut self, name: &str, value: &str) {
        self.parameters.insert(name.to_string(), value.to_string());
    }

    /// Sets a parameter only when a value is configured; an absent value
    /// leaves the parameter out of the descriptor entirely.
    pub fn set_optional_parameter(&mut self, name: &str, value: Option<&str>) {
        if let Some(value) = value {
            self.set_parameter(name, value);
        }
    }

    pub fn parameter(&self, name: &str) -> Option<&str> {
        self.parameters.get(name).map(String::as_str)
    }
}

/// A complete connection descriptor as handed to the caller: identity,
/// grouping and the protocol configuration.
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct Connection {
    pub identifier: String,
    pub name: String,
    pub parent_identifier: String,
    pub config: ConnectionConfig,
}
